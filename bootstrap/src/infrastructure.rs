//! 基础设施资源管理
//!
//! 统一管理服务共享的基础设施资源

use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;
use wardrobe_adapter_postgres::{PostgresConfig, create_pool};
use wardrobe_config::AppConfig;
use wardrobe_errors::AppResult;

use crate::retry::{RetryConfig, with_retry};

/// 基础设施资源容器
///
/// 由 bootstrap 在启动时创建一次，进程生命周期内复用
#[derive(Clone)]
pub struct Infrastructure {
    /// PostgreSQL 连接池
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（带重试）
    pub async fn from_config(config: &AppConfig) -> AppResult<Self> {
        Self::from_config_with_retry(config, &RetryConfig::default()).await
    }

    pub async fn from_config_with_retry(
        config: &AppConfig,
        retry_config: &RetryConfig,
    ) -> AppResult<Self> {
        let pg_config = PostgresConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections);
        let postgres_pool = with_retry(retry_config, "PostgreSQL connection", || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;
        info!(
            "PostgreSQL connection pool created (max_connections: {})",
            config.database.max_connections
        );

        Ok(Self::new(postgres_pool))
    }

    /// 使用已有连接池组装
    pub fn new(postgres_pool: PgPool) -> Self {
        Self { postgres_pool }
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }
}
