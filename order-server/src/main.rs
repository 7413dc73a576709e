use order_server::core::Result;
use order_server::{Config, Server, ServerState, print_banner, setup_environment};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 日志)
    setup_environment()?;

    print_banner();

    tracing::info!("Order Server starting...");

    if let Err(e) = run().await {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

async fn run() -> Result<()> {
    // 2. 加载配置 (DATABASE_URL 缺失时直接退出)
    let config = Config::from_env()?;

    // 3. 连接数据库并初始化状态 (连接失败同样致命)
    let state = ServerState::initialize(&config).await?;

    // 4. 启动 HTTP 服务器
    Server::with_state(state).run().await
}
