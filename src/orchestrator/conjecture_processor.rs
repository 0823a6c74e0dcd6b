//! 单个猜想处理器
//!
//! 处理一条猜想的完整流程：占用并发额度 → 渲染 prompt → 带重试调用 API
//! → 提取调研文本 → 组装结果记录。失败只降级为失败记录，不向批次传播。

use crate::models::{Conjecture, ResearchResult};
use crate::prompt::PromptTemplate;
use crate::services::ResearchService;
use crate::utils::logging::truncate_text;
use anyhow::Result;
use serde_json::Value;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tracing::{info, warn};

/// 处理单个猜想
///
/// 空内容的猜想只推进进度，不占并发额度，也不产生输出记录（返回 `Ok(None)`）。
pub async fn process_conjecture(
    service: Arc<ResearchService>,
    template: Arc<PromptTemplate>,
    conjecture: Conjecture,
    semaphore: Arc<Semaphore>,
    progress: Arc<AtomicUsize>,
    total: usize,
) -> Result<Option<ResearchResult>> {
    if conjecture.content.is_empty() {
        tick_progress(&progress, total);
        return Ok(None);
    }

    let permit = semaphore.acquire_owned().await?;
    let prompt = template.render(&conjecture.content);
    let result = service.call_deepresearch(&prompt).await;
    drop(permit);

    tick_progress(&progress, total);

    let record = match result {
        Some(response) => {
            ResearchResult::success(conjecture.content, extract_research_text(&response))
        }
        None => {
            warn!("猜想调研失败: {}", truncate_text(&conjecture.content, 50));
            ResearchResult::failure(conjecture.content)
        }
    };

    Ok(Some(record))
}

fn tick_progress(progress: &AtomicUsize, total: usize) {
    let done = progress.fetch_add(1, Ordering::SeqCst) + 1;
    info!("📈 处理进度: {}/{}", done, total);
}

/// 从响应对象中提取调研文本
///
/// 正常路径取第一个 choice 的 message.content；响应形状不符合预期时
/// 整体序列化为字符串兜底，并记录警告（说明上游契约发生了变化）。
pub fn extract_research_text(response: &Value) -> String {
    match response["choices"]
        .get(0)
        .and_then(|choice| choice["message"]["content"].as_str())
    {
        Some(text) => text.to_string(),
        None => {
            warn!("响应中缺少 choices，使用完整响应作为调研文本");
            response.to_string()
        }
    }
}
