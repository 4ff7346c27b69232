//! telemetry - 可观测性库

use std::time::Instant;

use metrics::{counter, gauge, histogram};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// 初始化 tracing
pub fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// 初始化 JSON 格式的 tracing（生产环境）
pub fn init_tracing_json(log_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().json())
        .init();
}

/// 初始化 Prometheus metrics
pub fn init_metrics() -> Result<PrometheusHandle, BuildError> {
    PrometheusBuilder::new().install_recorder()
}

/// 记录数据库查询
pub fn record_db_query(operation: &str, table: &str, duration_ms: f64, success: bool) {
    let labels = [
        ("operation", operation.to_string()),
        ("table", table.to_string()),
        ("success", success.to_string()),
    ];

    counter!("db_queries_total", &labels).increment(1);
    histogram!("db_query_duration_ms", &labels).record(duration_ms);
}

/// 记录连接池状态
pub fn record_pool_status(pool_name: &str, size: u32, idle: usize) {
    let labels = [("pool", pool_name.to_string())];
    gauge!("connection_pool_size", &labels).set(size as f64);
    gauge!("connection_pool_idle", &labels).set(idle as f64);
    gauge!("connection_pool_active", &labels).set(size.saturating_sub(idle as u32) as f64);
}

/// 数据库查询计时器
pub struct DbQueryTimer {
    start: Instant,
    operation: &'static str,
    table: &'static str,
}

impl DbQueryTimer {
    pub fn new(operation: &'static str, table: &'static str) -> Self {
        Self {
            start: Instant::now(),
            operation,
            table,
        }
    }

    pub fn finish(self, success: bool) {
        let duration = self.start.elapsed().as_secs_f64() * 1000.0;
        record_db_query(self.operation, self.table, duration, success);
    }
}
