use product_catalog::{
    build_app, core::config::load_config, infrastructure::logger::Logger, AppState,
    JsonFileRepository,
};
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = load_config()?;
    Logger::init(&config.logging.level);

    info!("启动产品目录服务...");

    let repository = JsonFileRepository::new(config.storage.file_path.clone());
    info!("产品文件: {}", repository.path().display());

    let state = AppState::new(Arc::new(repository));
    let app = build_app(state, config.http.timeout());

    let addr = config.http.socket_addr()?;
    let listener = TcpListener::bind(addr).await?;

    info!("🚀 产品目录服务运行在 http://{}", addr);
    info!("📖 API 端点:");
    info!("   GET    /products/healthcheck      - 健康检查");
    info!("   GET    /products                  - 获取所有产品");
    info!("   GET    /products/colour/:colour   - 按颜色获取产品");
    info!("   POST   /products                  - 创建产品");
    info!("   PUT    /products/:id              - 更新产品");
    info!("   DELETE /products/:id              - 删除产品");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务已停止");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("无法监听退出信号: {}", e);
        std::future::pending::<()>().await;
    }
    info!("收到退出信号，正在关闭服务...");
}
