//! Prompt 模板模块
//!
//! 模板是普通文本文件，其中的占位符会被替换为猜想内容。
//! 模板文件不存在时退化为"原样透传"模板，渲染结果就是猜想本身。

use std::path::Path;
use tracing::{debug, warn};

/// 模板中的占位符
pub const PLACEHOLDER: &str = "{{conjecture_str}}";

/// Prompt 模板
#[derive(Clone, Debug)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    /// 直接由模板字符串创建
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    /// 加载 prompt 模板文件
    ///
    /// 文件不存在时使用默认模板（仅含占位符）。
    pub async fn load(prompt_path: impl AsRef<Path>) -> Self {
        let path = prompt_path.as_ref();
        match tokio::fs::read_to_string(path).await {
            Ok(template) => {
                debug!("已加载 prompt 模板: {}", path.display());
                Self { template }
            }
            Err(_) => {
                warn!("prompt 模板文件不存在，使用默认模板: {}", path.display());
                Self {
                    template: PLACEHOLDER.to_string(),
                }
            }
        }
    }

    /// 使用模板构建完整的 prompt
    ///
    /// 替换模板中所有占位符；不做转义，也不递归替换。
    pub fn render(&self, conjecture_content: &str) -> String {
        self.template.replace(PLACEHOLDER, conjecture_content)
    }
}
