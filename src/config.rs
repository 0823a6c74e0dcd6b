use crate::error::{AppResult, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// 程序配置文件
///
/// 从 TOML 配置文件读取，整个运行期间只读。
#[derive(Clone, Debug, Deserialize)]
pub struct Config {
    /// API 密钥
    pub api_key: String,
    /// 猜想输入文件路径
    pub input_file: String,
    /// 结果输出文件路径
    pub output_file: String,
    /// 单个请求的最大重试次数
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
    /// 最大并发请求数
    #[serde(default = "default_concurrency")]
    pub concurrency: usize,
    /// 自定义 API 端点（默认使用 OpenAI 官方端点）
    #[serde(default = "default_api_url")]
    pub api_url: String,
    /// prompt 模板文件路径
    #[serde(default = "default_prompt_path")]
    pub prompt_path: String,
    /// 模型名称
    #[serde(default = "default_model")]
    pub model: String,
}

fn default_max_retries() -> u32 {
    3
}

fn default_concurrency() -> usize {
    5
}

fn default_api_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_prompt_path() -> String {
    "prompts/prompt_algebra.txt".to_string()
}

fn default_model() -> String {
    "openai/o3-deep-research".to_string()
}

impl Config {
    /// 加载 TOML 配置文件
    pub fn from_file(config_path: impl AsRef<Path>) -> AppResult<Self> {
        let path = config_path.as_ref();
        if !path.exists() {
            return Err(ConfigError::NotFound {
                path: path.display().to_string(),
            }
            .into());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        let config = toml::from_str(&content).map_err(|e| ConfigError::ParseFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

        Ok(config)
    }
}
