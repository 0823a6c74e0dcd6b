//! DeepResearch API 客户端
//!
//! ## 技术栈
//! - 直接使用 `reqwest` 调用 Chat Completions 接口
//! - 兼容 OpenAI API 的服务（OpenAI 官方、OpenRouter 等）
//! - 错误按状态码分类，供上层的重试策略使用

use crate::config::Config;
use crate::error::ApiCallError;
use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Serialize;
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// 单次请求的超时时间（3600秒=1小时），Deep Research 可能需要很长时间
const REQUEST_TIMEOUT: Duration = Duration::from_secs(3600);

/// 调研 API 能力抽象
///
/// 生产实现为 [`DeepResearchClient`]；测试中替换为桩实现。
#[async_trait]
pub trait ResearchApi: Send + Sync {
    /// 以 prompt 为唯一的用户消息发起一次调研请求，返回原始响应对象
    async fn create_research(&self, prompt: &str) -> Result<Value, ApiCallError>;
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

/// DeepResearch 客户端
pub struct DeepResearchClient {
    client: reqwest::Client,
    api_key: String,
    api_url: String,
    model: String,
}

impl DeepResearchClient {
    /// 创建新的客户端
    pub fn new(config: &Config) -> Result<Self, ApiCallError> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiCallError::Unexpected {
                message: format!("无法创建 HTTP 客户端: {}", e),
            })?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_url: config.api_url.clone(),
            model: config.model.clone(),
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ResearchApi for DeepResearchClient {
    async fn create_research(&self, prompt: &str) -> Result<Value, ApiCallError> {
        debug!("调用 DeepResearch API，模型: {}", self.model);

        let request = ChatCompletionRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(classify_send_error)?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiCallError::RateLimited { message });
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ApiCallError::Api {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Value>()
            .await
            .map_err(|e| ApiCallError::Unexpected {
                message: format!("响应解析失败: {}", e),
            })
    }
}

/// 将 reqwest 的发送错误归入重试分类
fn classify_send_error(err: reqwest::Error) -> ApiCallError {
    if err.is_timeout() {
        ApiCallError::Timeout {
            message: err.to_string(),
        }
    } else if err.is_connect() {
        ApiCallError::Connection {
            message: err.to_string(),
        }
    } else {
        ApiCallError::Unexpected {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_config(api_url: String) -> Config {
        Config {
            api_key: "sk-test".to_string(),
            input_file: "conjectures.json".to_string(),
            output_file: "results.json".to_string(),
            max_retries: 3,
            concurrency: 5,
            api_url,
            prompt_path: "prompts/prompt_algebra.txt".to_string(),
            model: "openai/o3-deep-research".to_string(),
        }
    }

    #[tokio::test]
    async fn test_successful_call_returns_response_value() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .and(header("authorization", "Bearer sk-test"))
            .and(body_partial_json(json!({
                "model": "openai/o3-deep-research",
                "messages": [{"role": "user", "content": "P 是素数"}]
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "choices": [{"message": {"role": "assistant", "content": "调研结论"}}]
            })))
            .mount(&server)
            .await;

        let client = DeepResearchClient::new(&test_config(server.uri())).unwrap();
        let response = client.create_research("P 是素数").await.unwrap();

        assert_eq!(
            response["choices"][0]["message"]["content"],
            "调研结论"
        );
    }

    #[tokio::test]
    async fn test_http_429_maps_to_rate_limited() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(429).set_body_string("rate limit exceeded"))
            .mount(&server)
            .await;

        let client = DeepResearchClient::new(&test_config(server.uri())).unwrap();
        let err = client.create_research("X").await.unwrap_err();

        assert!(matches!(err, ApiCallError::RateLimited { .. }));
    }

    #[tokio::test]
    async fn test_http_500_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/chat/completions"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
            .mount(&server)
            .await;

        let client = DeepResearchClient::new(&test_config(server.uri())).unwrap();
        let err = client.create_research("X").await.unwrap_err();

        match err {
            ApiCallError::Api { status, message } => {
                assert_eq!(status, 500);
                assert_eq!(message, "internal error");
            }
            other => panic!("应该归类为 Api 错误，实际: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_endpoint_handles_trailing_slash() {
        let config = test_config("https://openrouter.ai/api/v1/".to_string());
        let client = DeepResearchClient::new(&config).unwrap();
        assert_eq!(
            client.endpoint(),
            "https://openrouter.ai/api/v1/chat/completions"
        );
    }
}
