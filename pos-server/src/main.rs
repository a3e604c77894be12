use pos_server::{Config, Server, ServerState, print_banner};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 设置环境 (dotenv, 日志)
    dotenv::dotenv().ok();

    let config = Config::from_env();
    config.ensure_work_dir_structure()?;
    pos_server::init_logger_with_file(
        Some(&config.log_level),
        config.log_dir().to_str(),
    );

    // 打印横幅
    print_banner();

    tracing::info!("Café POS server starting...");

    // 2. 初始化服务器状态 (数据库 + 迁移 + 可选种子数据)
    let state = ServerState::initialize(&config).await;

    // 3. 启动 HTTP 服务器
    let server = Server::with_state(config, state);

    if let Err(e) = server.run().await {
        tracing::error!("Server error: {}", e);
        return Err(e);
    }

    Ok(())
}
