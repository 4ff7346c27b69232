//! PostgreSQL 仓储集成测试
//!
//! 需要可用的数据库：`DATABASE_URL=... cargo test -- --ignored`

use clothes_inventory::domain::{ClothesDraft, ClothesFilter, ClothesRepository};
use clothes_inventory::infrastructure::persistence::PostgresClothesRepository;
use sqlx::PgPool;
use wardrobe_adapter_postgres::{PostgresConfig, create_pool};
use wardrobe_errors::AppError;

const SCHEMA: &str = include_str!("../migrations/0001_create_clothes.sql");

async fn setup() -> (PostgresClothesRepository, PgPool) {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool = create_pool(&PostgresConfig::new(url).with_max_connections(2))
        .await
        .expect("Failed to connect to database");
    sqlx::query(SCHEMA).execute(&pool).await.unwrap();
    (PostgresClothesRepository::new(pool.clone()), pool)
}

/// 每个测试使用独立颜色，避免并行测试互相干扰
fn draft(color: &str, stock: i32) -> ClothesDraft {
    ClothesDraft {
        color: color.to_string(),
        size: "M".to_string(),
        price: 100.0,
        stock,
    }
}

async fn cleanup(pool: &PgPool, color: &str) {
    sqlx::query(r#"DELETE FROM "Clothes" WHERE color = $1"#)
        .bind(color)
        .execute(pool)
        .await
        .unwrap();
}

#[tokio::test]
#[ignore]
async fn test_create_and_find() {
    let (repo, pool) = setup().await;
    let color = "it-create-find";

    let created = repo.create(&draft(color, 10)).await.unwrap();
    assert!(created.id > 0);

    let found = repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(found, created);

    let all = repo.find_all().await.unwrap();
    assert!(all.windows(2).all(|w| w[0].id < w[1].id));

    let exact = ClothesFilter {
        color: Some(color.to_string()),
        size: Some("M".to_string()),
    };
    assert_eq!(repo.search(&exact).await.unwrap().len(), 1);

    cleanup(&pool, color).await;
}

#[tokio::test]
#[ignore]
async fn test_search_absent_field_is_not_filtered() {
    let (repo, pool) = setup().await;
    let color = "it-search-color-only";

    let medium = repo.create(&draft(color, 1)).await.unwrap();
    let large = repo
        .create(&ClothesDraft {
            size: "L".to_string(),
            ..draft(color, 1)
        })
        .await
        .unwrap();

    let by_color = ClothesFilter {
        color: Some(color.to_string()),
        size: None,
    };
    let ids: Vec<_> = repo
        .search(&by_color)
        .await
        .unwrap()
        .iter()
        .map(|i| i.id)
        .collect();
    assert_eq!(ids, vec![medium.id, large.id]);

    let everything = repo.search(&ClothesFilter::default()).await.unwrap();
    assert!(everything.iter().any(|i| i.id == large.id));

    cleanup(&pool, color).await;
}

#[tokio::test]
#[ignore]
async fn test_stock_adjustments_are_atomic_updates() {
    let (repo, pool) = setup().await;
    let color = "it-stock";

    let item = repo.create(&draft(color, 3)).await.unwrap();
    let item = repo.increment_stock(item.id, 2).await.unwrap();
    assert_eq!(item.stock, 5);

    assert!(repo.decrement_stock(item.id, 6).await.unwrap().is_none());
    let item = repo.decrement_stock(item.id, 5).await.unwrap().unwrap();
    assert_eq!(item.stock, 0);

    let out = repo.find_out_of_stock().await.unwrap();
    assert!(out.iter().any(|i| i.id == item.id));

    cleanup(&pool, color).await;
}

#[tokio::test]
#[ignore]
async fn test_update_missing_row_is_store_error() {
    let (repo, _pool) = setup().await;

    let err = repo.update(i32::MAX, &draft("it-missing", 1)).await.unwrap_err();
    assert!(matches!(err, AppError::Store(_)));
}

#[tokio::test]
#[ignore]
async fn test_delete() {
    let (repo, pool) = setup().await;
    let color = "it-delete";

    let item = repo.create(&draft(color, 1)).await.unwrap();
    assert!(repo.delete(item.id).await.unwrap());
    assert!(!repo.delete(item.id).await.unwrap());
    assert!(repo.find_by_id(item.id).await.unwrap().is_none());

    cleanup(&pool, color).await;
}
