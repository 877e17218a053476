use product_registry::{
    build_app,
    infrastructure::{config::AppConfig, logger::Logger, shutdown::shutdown_signal},
};
use tokio::net::TcpListener;
use tracing::{info, warn, Level};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    Logger::init(Level::INFO);

    let config = AppConfig::from_env()?;
    if config.uses_default_api_key() {
        warn!("未设置 API_KEY，正在使用默认密钥，请勿在生产环境中使用");
    }

    let app = build_app(&config);

    let listener = TcpListener::bind(config.address()).await?;

    info!("Server running at http://localhost:{}", config.port);
    info!("📖 API 端点 (均需 x-api-key 请求头):");
    info!("   GET    /                    - Hello, World!");
    info!("   GET    /api/products        - 产品列表 (category, search, page, limit)");
    info!("   POST   /api/products        - 创建产品");
    info!("   GET    /api/products/:id    - 获取产品");
    info!("   PUT    /api/products/:id    - 整体替换产品");
    info!("   DELETE /api/products/:id    - 删除产品");
    info!("   GET    /api/stats/products  - 按分类统计");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("服务器已停止");
    Ok(())
}
