/// 日志工具模块
///
/// 提供启动与统计信息的输出辅助函数
use crate::orchestrator::batch_processor::BatchStats;
use tracing::info;

/// 记录批次启动信息
///
/// # 参数
/// - `total`: 猜想总数
/// - `concurrency`: 最大并发数
pub fn log_startup(total: usize, concurrency: usize) {
    info!("{}", "=".repeat(60));
    info!("🚀 开始批量调研");
    info!("✓ 共加载 {} 个猜想", total);
    info!("📊 最大并发数: {}", concurrency);
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `stats`: 批处理统计
/// - `output_file`: 输出文件路径
pub fn print_final_stats(stats: &BatchStats, output_file: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 处理完成！");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("✅ 成功处理: {}/{}", stats.processed, stats.total);
    info!("❌ 其中失败: {}", stats.failed);
    info!("结果已保存到: {}", output_file);
    info!("{}", "=".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
