//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::Future;
use std::net::SocketAddr;

use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::info;
use wardrobe_config::AppConfig;
use wardrobe_errors::AppResult;

use crate::health::operational_routes;
use crate::infrastructure::Infrastructure;
use crate::metrics::MetricsRecorder;
use crate::runtime::{init_runtime, shutdown_signal};

/// 运行 HTTP 服务
///
/// 所有服务的统一入口点：
/// 1. 读取 `.env` 并加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus 记录器
/// 4. 创建基础设施资源（带重试）
/// 5. 调用闭包构建业务路由，并合并运维端点
/// 6. 启动服务器并处理 graceful shutdown
///
/// # 示例
///
/// ```ignore
/// use wardrobe_bootstrap::run_http;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run_http("config", |infra| async move {
///         Ok(my_routes(infra.postgres_pool()))
///     }).await
/// }
/// ```
pub async fn run_http<F, Fut>(
    config_dir: &str,
    router_builder: F,
) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    // 1. 加载配置
    dotenvy::dotenv().ok();
    let config = AppConfig::load(config_dir)?;

    // 2. 初始化运行时
    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    // 3. 初始化 Metrics 记录器
    let metrics = MetricsRecorder::install()?;

    // 4. 创建基础设施（带重试）
    let infra = Infrastructure::from_config(&config).await?;

    // 5. 构建路由
    let app = router_builder(infra.clone())
        .await?
        .merge(operational_routes(infra.postgres_pool(), Some(metrics)))
        .layer(TraceLayer::new_for_http());

    // 6. 启动服务器
    let addr: SocketAddr = config.bind_address().parse()?;
    info!(%addr, "HTTP server starting");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Service stopped");

    Ok(())
}
