//! 数据库行映射结构

use sqlx::FromRow;

use crate::domain::ClothesItem;

/// "Clothes" 表数据库行
#[derive(Debug, FromRow)]
pub struct ClothesRow {
    pub id: i32,
    pub color: String,
    pub size: String,
    pub price: f64,
    pub stock: i32,
}

impl From<ClothesRow> for ClothesItem {
    fn from(row: ClothesRow) -> Self {
        Self {
            id: row.id,
            color: row.color,
            size: row.size,
            price: row.price,
            stock: row.stock,
        }
    }
}
