//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `batch_processor` - 批量调研处理器
//! - 管理应用生命周期（初始化、运行）
//! - 批量加载猜想（Vec<Conjecture>）
//! - 控制并发数量（Semaphore）
//! - 汇总结果并写出输出文件
//!
//! ### `conjecture_processor` - 单个猜想处理器
//! - 渲染 prompt 并调用调研服务
//! - 从响应中提取调研文本
//! - 推进进度计数
//!
//! ## 层次关系
//!
//! ```text
//! batch_processor (处理 Vec<Conjecture>)
//!     ↓
//! conjecture_processor (处理单个 Conjecture)
//!     ↓
//! services::ResearchService (带重试的单次请求)
//!     ↓
//! clients::ResearchApi (网络边界)
//! ```

pub mod batch_processor;
pub mod conjecture_processor;

// 重新导出主要类型
pub use batch_processor::{App, BatchStats};
pub use conjecture_processor::{extract_research_text, process_conjecture};
