use anyhow::Result;
use deepresearch_batch::config::Config;
use deepresearch_batch::logger;
use deepresearch_batch::orchestrator::App;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    logger::init();

    // 加载配置（可用第一个命令行参数指定配置文件路径）
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());
    let config = Config::from_file(&config_path)?;

    // 初始化应用
    let app = App::initialize(config).await?;

    // Ctrl+C 中断整个批次，不写出任何部分结果
    tokio::select! {
        result = app.run() => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("\n用户中断操作");
        }
    }

    Ok(())
}
