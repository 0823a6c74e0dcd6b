//! 数据模型
//!
//! - `conjecture` - 猜想与调研结果记录
//! - `loaders` - 输入文件加载

pub mod conjecture;
pub mod loaders;

pub use conjecture::{Conjecture, ResearchResult, ERROR_API_CALL_FAILED};
pub use loaders::load_conjectures;
