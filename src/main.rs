use farm_dashboard::{api, create_pool, AppConfig, FarmService};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::fmt::time::ChronoLocal;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志 - 本地时间格式
    tracing_subscriber::fmt()
        .with_timer(ChronoLocal::new("%Y-%m-%d %H:%M:%S".to_string()))
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_level(true)
        .init();

    // 加载配置
    let config = AppConfig::load()?;
    info!("Starting server with config: {:?}", config);

    // 打开数据库 (不存在则创建并建表)
    let pool = create_pool(&config.database).await?;
    info!("Database ready at {}", config.database.path);

    let service = Arc::new(FarmService::new(pool.clone()));
    let app = api::app(service, &config.server.static_dir);

    let addr = config.listen_addr();
    info!("Farm Dashboard Server listening on http://{}", addr);
    info!("API Endpoints:");
    info!("  GET/POST        /api/poultry, /api/crops, /api/inputs");
    info!("  DELETE          /api/poultry/:id, /api/crops/:id, /api/inputs/:id");
    info!("  PUT             /api/inputs/:id            - stock update");
    info!("  GET             /api/reports/{{summary,poultry-performance,inputs-by-category,crop-costs}}");
    info!("  GET             /api/health");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    // 关闭连接池, WAL 落盘
    pool.close().await;
    info!("Database closed, bye");

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
    info!("Shutdown signal received");
}
