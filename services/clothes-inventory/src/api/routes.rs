//! 路由表

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, put},
};

use crate::application::ClothesService;

use super::handlers;

/// 处理器共享状态
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ClothesService>,
}

impl AppState {
    pub fn new(service: Arc<ClothesService>) -> Self {
        Self { service }
    }
}

/// 衣物库存路由
pub fn router(service: Arc<ClothesService>) -> Router {
    Router::new()
        .route("/", get(handlers::root))
        .route(
            "/clothes",
            get(handlers::list_clothes).post(handlers::create_clothes),
        )
        .route("/clothes/search", get(handlers::search_clothes))
        .route("/clothes/out-of-stock", get(handlers::out_of_stock))
        .route("/clothes/low-stock", get(handlers::low_stock))
        .route(
            "/clothes/{id}",
            put(handlers::update_clothes).delete(handlers::delete_clothes),
        )
        .route("/clothes/{id}/addStock", put(handlers::add_stock))
        .route("/clothes/{id}/reduce", put(handlers::reduce_stock))
        .with_state(AppState::new(service))
}
