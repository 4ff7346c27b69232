//! 衣物库存 HTTP 处理器

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use tracing::debug;
use wardrobe_errors::AppError;

use crate::domain::{ClothesFilter, ClothesId, ClothesItem};

use super::dto::{ApiResponse, ClothesRequest, SearchQuery, StockAdjustmentRequest};
use super::error::ApiError;
use super::messages;
use super::routes::AppState;

type ApiResult<T> = Result<T, ApiError>;
type ItemResponse = Json<ApiResponse<ClothesItem>>;
type ListResponse = Json<ApiResponse<Vec<ClothesItem>>>;

/// 解析路径中的 ID；非数字 ID 视为未知错误
fn parse_id(raw: &str, failure_message: &'static str) -> ApiResult<ClothesId> {
    raw.parse::<ClothesId>().map_err(|e| {
        debug!(id = raw, error = %e, "Invalid clothes id");
        ApiError::new(failure_message, AppError::Unknown)
    })
}

/// 解析 JSON 请求体；格式错误视为未知错误
fn parse_body<T>(
    body: Result<Json<T>, JsonRejection>,
    failure_message: &'static str,
) -> ApiResult<T> {
    body.map(|Json(value)| value).map_err(|e| {
        debug!(error = %e, "Malformed request body");
        ApiError::new(failure_message, AppError::Unknown)
    })
}

/// 解析查询参数；无法反序列化时视为未知错误
fn parse_query<T>(
    query: Result<Query<T>, QueryRejection>,
    failure_message: &'static str,
) -> ApiResult<T> {
    query.map(|Query(value)| value).map_err(|e| {
        debug!(error = %e, "Malformed query string");
        ApiError::new(failure_message, AppError::Unknown)
    })
}

pub async fn root() -> &'static str {
    messages::GREETING
}

pub async fn list_clothes(State(state): State<AppState>) -> ApiResult<ListResponse> {
    let clothes = state
        .service
        .list_all()
        .await
        .map_err(ApiError::during(messages::LIST_FAILED))?;

    Ok(Json(ApiResponse::with_data(messages::LIST_OK, clothes)))
}

pub async fn create_clothes(
    State(state): State<AppState>,
    body: Result<Json<ClothesRequest>, JsonRejection>,
) -> ApiResult<(StatusCode, ItemResponse)> {
    let req = parse_body(body, messages::CREATE_FAILED)?;
    let item = state
        .service
        .create(req.into())
        .await
        .map_err(ApiError::during(messages::CREATE_FAILED))?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_data(messages::CREATE_OK, item)),
    ))
}

pub async fn search_clothes(
    State(state): State<AppState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> ApiResult<(StatusCode, ListResponse)> {
    let query = parse_query(query, messages::SEARCH_FAILED)?;
    let filter = ClothesFilter {
        color: query.color,
        size: query.size,
    };
    let clothes = state
        .service
        .search(filter)
        .await
        .map_err(ApiError::during(messages::SEARCH_FAILED))?;

    if clothes.is_empty() {
        return Ok((
            StatusCode::NOT_FOUND,
            Json(ApiResponse::with_data(messages::NOT_FOUND, clothes)),
        ));
    }

    Ok((
        StatusCode::OK,
        Json(ApiResponse::with_data(messages::SEARCH_OK, clothes)),
    ))
}

pub async fn update_clothes(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ClothesRequest>, JsonRejection>,
) -> ApiResult<ItemResponse> {
    let id = parse_id(&id, messages::UPDATE_FAILED)?;
    let req = parse_body(body, messages::UPDATE_FAILED)?;
    let item = state
        .service
        .update(id, req.into())
        .await
        .map_err(ApiError::during(messages::UPDATE_FAILED))?;

    Ok(Json(ApiResponse::with_data(messages::UPDATE_OK, item)))
}

pub async fn add_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StockAdjustmentRequest>, JsonRejection>,
) -> ApiResult<ItemResponse> {
    let id = parse_id(&id, messages::ADD_STOCK_FAILED)?;
    let req = parse_body(body, messages::ADD_STOCK_FAILED)?;
    let item = state
        .service
        .add_stock(id, req.amount)
        .await
        .map_err(ApiError::during(messages::ADD_STOCK_FAILED))?;

    Ok(Json(ApiResponse::with_data(messages::ADD_STOCK_OK, item)))
}

pub async fn reduce_stock(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<StockAdjustmentRequest>, JsonRejection>,
) -> ApiResult<ItemResponse> {
    let id = parse_id(&id, messages::REDUCE_STOCK_FAILED)?;
    let req = parse_body(body, messages::REDUCE_STOCK_FAILED)?;
    let item = state
        .service
        .reduce_stock(id, req.amount)
        .await
        .map_err(ApiError::during(messages::REDUCE_STOCK_FAILED))?;

    Ok(Json(ApiResponse::with_data(messages::REDUCE_STOCK_OK, item)))
}

pub async fn out_of_stock(State(state): State<AppState>) -> ApiResult<ListResponse> {
    let clothes = state
        .service
        .out_of_stock()
        .await
        .map_err(ApiError::during(messages::OUT_OF_STOCK_FAILED))?;

    Ok(Json(ApiResponse::with_data(messages::OUT_OF_STOCK_OK, clothes)))
}

pub async fn low_stock(State(state): State<AppState>) -> ApiResult<ListResponse> {
    let clothes = state
        .service
        .low_stock()
        .await
        .map_err(ApiError::during(messages::LOW_STOCK_FAILED))?;

    Ok(Json(ApiResponse::with_data(messages::LOW_STOCK_OK, clothes)))
}

pub async fn delete_clothes(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ApiResponse<()>>> {
    let id = parse_id(&id, messages::DELETE_FAILED)?;
    state
        .service
        .delete(id)
        .await
        .map_err(ApiError::during(messages::DELETE_FAILED))?;

    Ok(Json(ApiResponse::message_only(messages::DELETE_OK)))
}
