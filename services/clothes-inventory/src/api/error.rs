//! HTTP 错误映射

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;
use wardrobe_errors::AppError;

use super::dto::ErrorResponse;
use super::messages;

/// 带操作上下文的接口错误
///
/// `failure_message` 是该操作失败时对外展示的消息；领域错误使用各自固定的消息
#[derive(Debug)]
pub struct ApiError {
    pub failure_message: &'static str,
    pub source: AppError,
}

impl ApiError {
    pub fn new(failure_message: &'static str, source: AppError) -> Self {
        Self {
            failure_message,
            source,
        }
    }

    /// 绑定操作失败消息的转换闭包，配合 `map_err` 使用
    pub fn during(failure_message: &'static str) -> impl FnOnce(AppError) -> Self {
        move |source| Self::new(failure_message, source)
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.source.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    fn message(&self) -> &'static str {
        match self.source {
            AppError::NotFound(_) => messages::NOT_FOUND,
            AppError::InsufficientStock(_) => messages::INSUFFICIENT_STOCK,
            AppError::Store(_) | AppError::Unknown => self.failure_message,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if !self.source.is_domain() {
            error!(
                failure = self.failure_message,
                error = %self.source,
                "Request failed"
            );
        }

        let body = ErrorResponse {
            message: self.message(),
            error: self.source.public_text(),
        };
        (status, Json(body)).into_response()
    }
}
