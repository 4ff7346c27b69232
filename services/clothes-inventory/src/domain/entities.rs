//! 衣物库存实体

use serde::{Deserialize, Serialize};

/// 低库存阈值（库存严格小于该值视为低库存）
pub const LOW_STOCK_THRESHOLD: i32 = 5;

/// 衣物 ID，由存储分配
pub type ClothesId = i32;

/// 衣物条目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClothesItem {
    pub id: ClothesId,
    pub color: String,
    pub size: String,
    pub price: f64,
    pub stock: i32,
}

impl ClothesItem {
    /// 库存是否足以扣减 `amount`
    pub fn can_reduce_by(&self, amount: i32) -> bool {
        self.stock >= amount
    }
}

/// 新建或整体替换时提交的字段
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClothesDraft {
    pub color: String,
    pub size: String,
    pub price: f64,
    pub stock: i32,
}

/// 精确匹配过滤条件
///
/// 未提供的字段不参与过滤
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ClothesFilter {
    pub color: Option<String>,
    pub size: Option<String>,
}
