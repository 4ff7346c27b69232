//! wardrobe-errors - 统一错误处理
//!
//! 两层错误分类：领域错误（预检查发现）与存储错误（数据访问层抛出）

use thiserror::Error;

/// 未识别错误对外展示的文本
pub const UNKNOWN_ERROR_TEXT: &str = "Unknown error";

/// 应用错误类型
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    /// 数据访问层可识别的错误，保留存储返回的原始文本
    #[error("{0}")]
    Store(String),

    #[error("Unknown error")]
    Unknown,
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn insufficient_stock(msg: impl Into<String>) -> Self {
        Self::InsufficientStock(msg.into())
    }

    pub fn store(msg: impl Into<String>) -> Self {
        Self::Store(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::InsufficientStock(_) => 400,
            Self::Store(_) => 500,
            Self::Unknown => 500,
        }
    }

    /// 是否属于领域错误（由预检查产生）
    pub fn is_domain(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::InsufficientStock(_))
    }

    /// 对外暴露的错误文本
    ///
    /// 存储错误返回存储自身的描述，未知错误统一为 `Unknown error`
    pub fn public_text(&self) -> String {
        match self {
            Self::Unknown => UNKNOWN_ERROR_TEXT.to_string(),
            other => other.to_string(),
        }
    }
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
