//! 请求/响应结构

use serde::{Deserialize, Serialize};

use crate::domain::ClothesDraft;

/// 创建或整体更新请求体
#[derive(Debug, Clone, Deserialize)]
pub struct ClothesRequest {
    pub color: String,
    pub size: String,
    pub price: f64,
    pub stock: i32,
}

impl From<ClothesRequest> for ClothesDraft {
    fn from(req: ClothesRequest) -> Self {
        Self {
            color: req.color,
            size: req.size,
            price: req.price,
            stock: req.stock,
        }
    }
}

/// 库存增减请求体
#[derive(Debug, Clone, Deserialize)]
pub struct StockAdjustmentRequest {
    pub amount: i32,
}

/// 搜索查询参数
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchQuery {
    pub color: Option<String>,
    pub size: Option<String>,
}

/// 成功响应
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub message: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn with_data(message: &'static str, data: T) -> Self {
        Self {
            message,
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    pub fn message_only(message: &'static str) -> Self {
        Self {
            message,
            data: None,
        }
    }
}

/// 错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: &'static str,
    pub error: String,
}
