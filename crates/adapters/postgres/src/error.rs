//! sqlx 错误分类
//!
//! 将数据访问层的错误归为「可识别的存储错误」或「未知错误」

use wardrobe_errors::AppError;

/// 判断是否为存储可识别的请求错误
///
/// 查询已到达数据库并由其（或结果映射）拒绝的错误视为可识别；
/// 连接、TLS、连接池、协议等基础设施故障视为未知。
pub fn is_known_store_error(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(_)
            | sqlx::Error::RowNotFound
            | sqlx::Error::TypeNotFound { .. }
            | sqlx::Error::ColumnIndexOutOfBounds { .. }
            | sqlx::Error::ColumnNotFound(_)
            | sqlx::Error::ColumnDecode { .. }
            | sqlx::Error::Decode(_)
    )
}

/// 将 sqlx 错误转换为应用错误
pub fn classify_store_error(err: sqlx::Error) -> AppError {
    if is_known_store_error(&err) {
        AppError::store(err.to_string())
    } else {
        AppError::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_not_found_is_store_error() {
        let err = classify_store_error(sqlx::Error::RowNotFound);
        assert!(matches!(err, AppError::Store(_)));
        assert_eq!(err.status_code(), 500);
    }

    #[test]
    fn test_column_not_found_keeps_text() {
        let err = classify_store_error(sqlx::Error::ColumnNotFound("stock".to_string()));
        match err {
            AppError::Store(msg) => assert!(msg.contains("stock")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_pool_failures_are_unknown() {
        assert_eq!(classify_store_error(sqlx::Error::PoolTimedOut), AppError::Unknown);
        assert_eq!(classify_store_error(sqlx::Error::PoolClosed), AppError::Unknown);
    }

    #[test]
    fn test_io_failure_is_unknown() {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        assert_eq!(classify_store_error(sqlx::Error::Io(io)), AppError::Unknown);
    }
}
