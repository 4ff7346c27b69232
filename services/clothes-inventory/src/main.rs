//! clothes-inventory Service

use std::sync::Arc;

use clothes_inventory::api;
use clothes_inventory::application::ClothesService;
use clothes_inventory::infrastructure::persistence::PostgresClothesRepository;
use tracing::info;
use wardrobe_bootstrap::{Infrastructure, run_http};
use wardrobe_errors::AppResult;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    run_http("config", |infra: Infrastructure| async move {
        info!("Initializing clothes-inventory Service...");

        let repo = Arc::new(PostgresClothesRepository::new(infra.postgres_pool()));
        let service = Arc::new(ClothesService::new(repo));

        AppResult::Ok(api::router(service))
    })
    .await
}
