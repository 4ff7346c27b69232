//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出

use metrics_exporter_prometheus::{BuildError, PrometheusHandle};
use sqlx::PgPool;
use wardrobe_adapter_postgres::PoolStatus;
use wardrobe_telemetry::{init_metrics, record_pool_status};

/// Metrics 记录器
#[derive(Clone)]
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 Prometheus 记录器
    pub fn install() -> Result<Self, BuildError> {
        Ok(Self {
            handle: init_metrics()?,
        })
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

/// 记录 PostgreSQL 连接池指标
pub fn record_postgres_pool_metrics(pool: &PgPool) {
    let status = PoolStatus::of(pool);
    record_pool_status("postgres", status.size, status.idle);
}
