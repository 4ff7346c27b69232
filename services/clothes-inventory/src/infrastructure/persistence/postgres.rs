//! PostgreSQL repository implementation

use std::future::Future;

use async_trait::async_trait;
use sqlx::PgPool;
use wardrobe_adapter_postgres::classify_store_error;
use wardrobe_errors::AppResult;
use wardrobe_telemetry::DbQueryTimer;

use crate::domain::{ClothesDraft, ClothesFilter, ClothesId, ClothesItem, ClothesRepository};

use super::rows::ClothesRow;

const TABLE: &str = "Clothes";

pub struct PostgresClothesRepository {
    pool: PgPool,
}

impl PostgresClothesRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// 执行查询并记录耗时，错误按存储错误分类
async fn timed<T>(
    operation: &'static str,
    query: impl Future<Output = Result<T, sqlx::Error>>,
) -> AppResult<T> {
    let timer = DbQueryTimer::new(operation, TABLE);
    let result = query.await;
    timer.finish(result.is_ok());

    result.map_err(classify_store_error)
}

fn into_items(rows: Vec<ClothesRow>) -> Vec<ClothesItem> {
    rows.into_iter().map(ClothesItem::from).collect()
}

#[async_trait]
impl ClothesRepository for PostgresClothesRepository {
    async fn find_all(&self) -> AppResult<Vec<ClothesItem>> {
        let rows = timed(
            "find_all",
            sqlx::query_as::<_, ClothesRow>(
                r#"
                SELECT id, color, size, price, stock
                FROM "Clothes"
                ORDER BY id ASC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(into_items(rows))
    }

    async fn find_by_id(&self, id: ClothesId) -> AppResult<Option<ClothesItem>> {
        let row = timed(
            "find_by_id",
            sqlx::query_as::<_, ClothesRow>(
                r#"
                SELECT id, color, size, price, stock
                FROM "Clothes"
                WHERE id = $1
                "#,
            )
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(row.map(ClothesItem::from))
    }

    async fn search(&self, filter: &ClothesFilter) -> AppResult<Vec<ClothesItem>> {
        let rows = timed(
            "search",
            sqlx::query_as::<_, ClothesRow>(
                r#"
                SELECT id, color, size, price, stock
                FROM "Clothes"
                WHERE ($1::text IS NULL OR color = $1)
                  AND ($2::text IS NULL OR size = $2)
                ORDER BY id ASC
                "#,
            )
            .bind(filter.color.as_deref())
            .bind(filter.size.as_deref())
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(into_items(rows))
    }

    async fn find_out_of_stock(&self) -> AppResult<Vec<ClothesItem>> {
        let rows = timed(
            "find_out_of_stock",
            sqlx::query_as::<_, ClothesRow>(
                r#"
                SELECT id, color, size, price, stock
                FROM "Clothes"
                WHERE stock = 0
                ORDER BY id ASC
                "#,
            )
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(into_items(rows))
    }

    async fn find_stock_below(&self, threshold: i32) -> AppResult<Vec<ClothesItem>> {
        let rows = timed(
            "find_stock_below",
            sqlx::query_as::<_, ClothesRow>(
                r#"
                SELECT id, color, size, price, stock
                FROM "Clothes"
                WHERE stock < $1
                ORDER BY id ASC
                "#,
            )
            .bind(threshold)
            .fetch_all(&self.pool),
        )
        .await?;

        Ok(into_items(rows))
    }

    async fn create(&self, draft: &ClothesDraft) -> AppResult<ClothesItem> {
        let row = timed(
            "create",
            sqlx::query_as::<_, ClothesRow>(
                r#"
                INSERT INTO "Clothes" (color, size, price, stock)
                VALUES ($1, $2, $3, $4)
                RETURNING id, color, size, price, stock
                "#,
            )
            .bind(&draft.color)
            .bind(&draft.size)
            .bind(draft.price)
            .bind(draft.stock)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(row.into())
    }

    async fn update(&self, id: ClothesId, draft: &ClothesDraft) -> AppResult<ClothesItem> {
        let row = timed(
            "update",
            sqlx::query_as::<_, ClothesRow>(
                r#"
                UPDATE "Clothes" SET
                    color = $1,
                    size = $2,
                    price = $3,
                    stock = $4
                WHERE id = $5
                RETURNING id, color, size, price, stock
                "#,
            )
            .bind(&draft.color)
            .bind(&draft.size)
            .bind(draft.price)
            .bind(draft.stock)
            .bind(id)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(row.into())
    }

    async fn increment_stock(&self, id: ClothesId, amount: i32) -> AppResult<ClothesItem> {
        let row = timed(
            "increment_stock",
            sqlx::query_as::<_, ClothesRow>(
                r#"
                UPDATE "Clothes" SET stock = stock + $1
                WHERE id = $2
                RETURNING id, color, size, price, stock
                "#,
            )
            .bind(amount)
            .bind(id)
            .fetch_one(&self.pool),
        )
        .await?;

        Ok(row.into())
    }

    async fn decrement_stock(&self, id: ClothesId, amount: i32) -> AppResult<Option<ClothesItem>> {
        let row = timed(
            "decrement_stock",
            sqlx::query_as::<_, ClothesRow>(
                r#"
                UPDATE "Clothes" SET stock = stock - $1
                WHERE id = $2 AND stock >= $1
                RETURNING id, color, size, price, stock
                "#,
            )
            .bind(amount)
            .bind(id)
            .fetch_optional(&self.pool),
        )
        .await?;

        Ok(row.map(ClothesItem::from))
    }

    async fn delete(&self, id: ClothesId) -> AppResult<bool> {
        let result = timed(
            "delete",
            sqlx::query(r#"DELETE FROM "Clothes" WHERE id = $1"#)
                .bind(id)
                .execute(&self.pool),
        )
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
