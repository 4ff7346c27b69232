//! Business logic handler

use std::sync::Arc;

use tracing::{info, warn};
use wardrobe_errors::{AppError, AppResult};

use crate::domain::{
    ClothesDraft, ClothesFilter, ClothesId, ClothesItem, ClothesRepository, LOW_STOCK_THRESHOLD,
};

/// 衣物库存服务
///
/// 每个操作发起一次存储调用；扣减库存与删除先做一次预检查
pub struct ClothesService {
    repo: Arc<dyn ClothesRepository>,
}

impl ClothesService {
    pub fn new(repo: Arc<dyn ClothesRepository>) -> Self {
        Self { repo }
    }

    pub async fn list_all(&self) -> AppResult<Vec<ClothesItem>> {
        self.repo.find_all().await
    }

    pub async fn create(&self, draft: ClothesDraft) -> AppResult<ClothesItem> {
        let item = self.repo.create(&draft).await?;
        info!(id = item.id, color = %item.color, size = %item.size, "Clothes created");
        Ok(item)
    }

    pub async fn search(&self, filter: ClothesFilter) -> AppResult<Vec<ClothesItem>> {
        self.repo.search(&filter).await
    }

    /// 整体替换，不做存在性预检查
    pub async fn update(&self, id: ClothesId, draft: ClothesDraft) -> AppResult<ClothesItem> {
        let item = self.repo.update(id, &draft).await?;
        info!(id, "Clothes updated");
        Ok(item)
    }

    pub async fn add_stock(&self, id: ClothesId, amount: i32) -> AppResult<ClothesItem> {
        let item = self.repo.increment_stock(id, amount).await?;
        info!(id, amount, stock = item.stock, "Stock added");
        Ok(item)
    }

    pub async fn reduce_stock(&self, id: ClothesId, amount: i32) -> AppResult<ClothesItem> {
        let current = self.repo.find_by_id(id).await?.ok_or_else(|| missing(id))?;

        if !current.can_reduce_by(amount) {
            warn!(id, amount, stock = current.stock, "Insufficient stock");
            return Err(insufficient(id, current.stock, amount));
        }

        // 预检查之后条目可能已被并发扣减或删除，由条件更新兜底
        if let Some(item) = self.repo.decrement_stock(id, amount).await? {
            info!(id, amount, stock = item.stock, "Stock reduced");
            return Ok(item);
        }

        match self.repo.find_by_id(id).await? {
            Some(fresh) => {
                warn!(
                    id,
                    amount,
                    stock = fresh.stock,
                    "Stock changed concurrently, decrement rejected"
                );
                Err(insufficient(id, fresh.stock, amount))
            }
            None => Err(missing(id)),
        }
    }

    pub async fn out_of_stock(&self) -> AppResult<Vec<ClothesItem>> {
        self.repo.find_out_of_stock().await
    }

    pub async fn low_stock(&self) -> AppResult<Vec<ClothesItem>> {
        self.repo.find_stock_below(LOW_STOCK_THRESHOLD).await
    }

    pub async fn delete(&self, id: ClothesId) -> AppResult<()> {
        if self.repo.find_by_id(id).await?.is_none() {
            return Err(missing(id));
        }

        // 预检查与删除之间条目可能已被并发删除
        if !self.repo.delete(id).await? {
            return Err(missing(id));
        }

        info!(id, "Clothes deleted");
        Ok(())
    }
}

fn missing(id: ClothesId) -> AppError {
    AppError::not_found(format!("clothes {} does not exist", id))
}

fn insufficient(id: ClothesId, stock: i32, amount: i32) -> AppError {
    AppError::insufficient_stock(format!(
        "clothes {} has {} in stock, cannot reduce by {}",
        id, stock, amount
    ))
}
