use serde::{Deserialize, Serialize};

/// API 调用失败时写入输出记录的错误标记
pub const ERROR_API_CALL_FAILED: &str = "API 调用失败";

/// 单个猜想
///
/// 只保留输入记录的 informal_statement 字段内容，除文本外没有其他标识；
/// 重复的猜想各自独立处理。
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Conjecture {
    /// 猜想的自然语言陈述
    pub content: String,
}

impl Conjecture {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

/// 单个猜想的调研结果
///
/// 两种形态：
/// - 成功：`{ content, research }`
/// - 失败：`{ content, research: null, error }`
///
/// 空猜想不会产生结果记录。
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ResearchResult {
    /// 猜想原文
    pub content: String,
    /// 调研文本，失败时为 null
    pub research: Option<String>,
    /// 失败标记，成功时不出现在输出中
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub error: Option<String>,
}

impl ResearchResult {
    /// 成功结果
    pub fn success(content: String, research: String) -> Self {
        Self {
            content,
            research: Some(research),
            error: None,
        }
    }

    /// 失败结果（重试耗尽或未知错误）
    pub fn failure(content: String) -> Self {
        Self {
            content,
            research: None,
            error: Some(ERROR_API_CALL_FAILED.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_result_omits_error_field() {
        let result = ResearchResult::success("P 是素数".to_string(), "done".to_string());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["content"], "P 是素数");
        assert_eq!(json["research"], "done");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_failure_result_has_null_research_and_error_marker() {
        let result = ResearchResult::failure("Q implies R".to_string());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["content"], "Q implies R");
        assert!(json["research"].is_null());
        assert_eq!(json["error"], ERROR_API_CALL_FAILED);
    }
}
