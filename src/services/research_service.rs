//! 调研服务 - 业务能力层
//!
//! 只负责"带重试地完成一次调研请求"，不关心批量流程。
//!
//! 重试策略：
//! - 速率限制：固定等待 60 秒后重试
//! - 连接失败 / 超时：指数退避（1s, 2s, 4s, ...）
//! - 其他 API 错误：同指数退避
//! - 未知错误：不重试
//!
//! 以上类别在重试耗尽后统一降级为 `None`，绝不向调用方抛出。

use crate::clients::ResearchApi;
use crate::error::ApiCallError;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;
use tracing::warn;

/// 速率限制时的固定等待时间
const RATE_LIMIT_DELAY: Duration = Duration::from_secs(60);

/// 调研服务
pub struct ResearchService {
    api: Arc<dyn ResearchApi>,
    max_retries: u32,
}

impl ResearchService {
    /// 创建新的调研服务
    pub fn new(api: Arc<dyn ResearchApi>, max_retries: u32) -> Self {
        Self { api, max_retries }
    }

    /// 调用 DeepResearch API，带重试
    ///
    /// # 参数
    /// - `prompt`: 渲染后的完整 prompt
    ///
    /// # 返回
    /// 成功时返回原始响应对象，重试耗尽或遇到未知错误时返回 `None`
    pub async fn call_deepresearch(&self, prompt: &str) -> Option<Value> {
        // 显式的有界循环，而不是递归重试
        let mut retry_count: u32 = 0;
        loop {
            match self.api.create_research(prompt).await {
                Ok(response) => return Some(response),
                Err(ApiCallError::RateLimited { message }) => {
                    if retry_count < self.max_retries {
                        // 速率限制时等待 60 秒
                        sleep(RATE_LIMIT_DELAY).await;
                        retry_count += 1;
                    } else {
                        warn!("达到最大重试次数，跳过该请求（速率限制）: {}", message);
                        return None;
                    }
                }
                Err(err @ (ApiCallError::Connection { .. } | ApiCallError::Timeout { .. })) => {
                    if retry_count < self.max_retries {
                        sleep(backoff_delay(retry_count)).await;
                        retry_count += 1;
                    } else {
                        warn!("连接失败（已重试 {} 次）: {}", self.max_retries, err);
                        return None;
                    }
                }
                Err(err @ ApiCallError::Api { .. }) => {
                    if retry_count < self.max_retries {
                        sleep(backoff_delay(retry_count)).await;
                        retry_count += 1;
                    } else {
                        warn!("API 错误（已重试 {} 次）: {}", self.max_retries, err);
                        return None;
                    }
                }
                Err(ApiCallError::Unexpected { message }) => {
                    warn!("未知错误: {}", message);
                    return None;
                }
            }
        }
    }
}

/// 指数退避：1s, 2s, 4s, ...
fn backoff_delay(retry_count: u32) -> Duration {
    Duration::from_secs(1u64 << retry_count)
}
