//! # DeepResearch Batch
//!
//! 批量调用 DeepResearch API 对数学猜想进行文献调研
//!
//! ## 功能
//!
//! - 从 JSON 文件读取猜想（仅使用 informal_statement 字段）
//! - 并发调用 DeepResearch API（Semaphore 控制并发上限）
//! - 错误重试机制（速率限制固定等待，其余指数退避）
//! - 进度追踪
//! - 结果保存到 JSON 文件
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 网络边界层（Clients）
//! - `clients/` - `ResearchApi` trait 与 reqwest 客户端实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - `ResearchService`：带重试的单次调研请求
//!
//! ### ③ 编排层（Orchestration）
//! - `orchestrator/batch_processor` - 批量调研处理器，管理并发和汇总
//! - `orchestrator/conjecture_processor` - 单个猜想处理器

pub mod clients;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod orchestrator;
pub mod prompt;
pub mod services;
pub mod utils;

// 重新导出常用类型
pub use clients::{DeepResearchClient, ResearchApi};
pub use config::Config;
pub use error::{ApiCallError, AppError, AppResult, ConfigError, FileError};
pub use models::{Conjecture, ResearchResult, ERROR_API_CALL_FAILED};
pub use orchestrator::{App, BatchStats};
pub use prompt::PromptTemplate;
pub use services::ResearchService;
