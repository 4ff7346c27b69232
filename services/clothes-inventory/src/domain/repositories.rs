//! 衣物仓储接口

use async_trait::async_trait;
use wardrobe_errors::AppResult;

use super::entities::{ClothesDraft, ClothesFilter, ClothesId, ClothesItem};

/// 衣物仓储接口
///
/// 每个方法对应一次存储往返；库存增减由存储以原子方式执行
#[async_trait]
pub trait ClothesRepository: Send + Sync {
    /// 按 ID 升序列出全部
    async fn find_all(&self) -> AppResult<Vec<ClothesItem>>;

    async fn find_by_id(&self, id: ClothesId) -> AppResult<Option<ClothesItem>>;

    /// 精确匹配搜索
    async fn search(&self, filter: &ClothesFilter) -> AppResult<Vec<ClothesItem>>;

    /// 库存为 0 的条目
    async fn find_out_of_stock(&self) -> AppResult<Vec<ClothesItem>>;

    /// 库存小于 `threshold` 的条目
    async fn find_stock_below(&self, threshold: i32) -> AppResult<Vec<ClothesItem>>;

    async fn create(&self, draft: &ClothesDraft) -> AppResult<ClothesItem>;

    /// 整体替换四个字段；ID 不存在时返回存储错误
    async fn update(&self, id: ClothesId, draft: &ClothesDraft) -> AppResult<ClothesItem>;

    /// `stock = stock + amount`；ID 不存在时返回存储错误
    async fn increment_stock(&self, id: ClothesId, amount: i32) -> AppResult<ClothesItem>;

    /// `stock = stock - amount`，仅在 `stock >= amount` 时生效，否则返回 `None`
    async fn decrement_stock(&self, id: ClothesId, amount: i32) -> AppResult<Option<ClothesItem>>;

    /// 删除；返回是否有行被删除
    async fn delete(&self, id: ClothesId) -> AppResult<bool>;
}
