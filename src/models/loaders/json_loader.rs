use crate::error::{AppError, FileError};
use crate::models::Conjecture;
use serde::Deserialize;
use std::path::Path;
use tokio::fs;
use tracing::info;

/// 输入文件中的原始记录，除 informal_statement 外的字段一律忽略
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    informal_statement: Option<String>,
}

/// 从 JSON 文件加载猜想，仅提取 informal_statement 字段
///
/// informal_statement 缺失或为空的记录被静默丢弃；
/// 保留下来的猜想保持输入顺序。
pub async fn load_conjectures(input_path: impl AsRef<Path>) -> Result<Vec<Conjecture>, AppError> {
    let path = input_path.as_ref();
    if !path.exists() {
        return Err(FileError::NotFound {
            path: path.display().to_string(),
        }
        .into());
    }

    let content = fs::read_to_string(path)
        .await
        .map_err(|e| FileError::ReadFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

    let records: Vec<RawRecord> =
        serde_json::from_str(&content).map_err(|e| FileError::JsonParseFailed {
            path: path.display().to_string(),
            source: Box::new(e),
        })?;

    let conjectures: Vec<Conjecture> = records
        .into_iter()
        .filter_map(|record| record.informal_statement)
        .filter(|statement| !statement.is_empty())
        .map(Conjecture::new)
        .collect();

    info!("共加载 {} 个猜想", conjectures.len());

    Ok(conjectures)
}
