//! 批量调研处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块是整个应用的入口，负责把一批猜想驱动到完成并写出结果文件。
//!
//! ## 核心功能
//!
//! 1. **批量加载**：通过 json_loader 加载所有猜想（`Vec<Conjecture>`）
//! 2. **并发控制**：使用 Semaphore 限制同时在途的请求数
//! 3. **任务派发**：为每个猜想立即 spawn 一个任务，由信号量闸门放行
//! 4. **结果汇总**：按提交顺序收集结果，单条失败不影响整批
//! 5. **结果落盘**：全部任务结束后一次性写出 JSON 文件
//!
//! ## 设计特点
//!
//! - **顶层编排**：不处理单个猜想的细节，向下委托 conjecture_processor
//! - **失败隔离**：任务 panic 或出错只计入失败统计，绝不中止批次
//! - **可注入 API**：通过 `with_api` 注入桩实现以便测试

use crate::clients::{DeepResearchClient, ResearchApi};
use crate::config::Config;
use crate::models::{load_conjectures, ResearchResult};
use crate::orchestrator::conjecture_processor::process_conjecture;
use crate::prompt::PromptTemplate;
use crate::services::ResearchService;
use crate::utils::logging::{log_startup, print_final_stats};
use anyhow::{Context, Result};
use std::path::Path;
use std::sync::atomic::AtomicUsize;
use std::sync::Arc;
use tokio::fs;
use tokio::sync::Semaphore;
use tracing::{error, info};

/// 应用主结构
pub struct App {
    config: Config,
    service: Arc<ResearchService>,
    template: Arc<PromptTemplate>,
}

/// 批处理统计
#[derive(Debug, Default)]
pub struct BatchStats {
    /// 加载的猜想总数
    pub total: usize,
    /// 写入输出文件的记录数（含失败记录）
    pub processed: usize,
    /// 失败记录数（重试耗尽、未知错误或任务异常）
    pub failed: usize,
}

impl App {
    /// 初始化应用（创建真实的 API 客户端）
    pub async fn initialize(config: Config) -> Result<Self> {
        let client = DeepResearchClient::new(&config)?;
        Self::with_api(config, Arc::new(client)).await
    }

    /// 使用给定的 API 实现初始化
    ///
    /// 测试时注入桩实现，避免真实网络调用。
    pub async fn with_api(config: Config, api: Arc<dyn ResearchApi>) -> Result<Self> {
        let template = PromptTemplate::load(&config.prompt_path).await;
        let service = ResearchService::new(api, config.max_retries);

        Ok(Self {
            config,
            service: Arc::new(service),
            template: Arc::new(template),
        })
    }

    /// 运行应用主逻辑：加载 → 并发调研 → 写出结果
    pub async fn run(&self) -> Result<BatchStats> {
        info!("正在加载猜想数据...");
        let conjectures = load_conjectures(&self.config.input_file).await?;
        let total = conjectures.len();

        log_startup(total, self.config.concurrency);

        // 并发控制信号量，唯一的共享资源
        let semaphore = Arc::new(Semaphore::new(self.config.concurrency));
        let progress = Arc::new(AtomicUsize::new(0));

        // 所有任务立即派发，由信号量控制实际在途数量
        let mut handles = Vec::with_capacity(total);
        for (index, conjecture) in conjectures.into_iter().enumerate() {
            let handle = tokio::spawn(process_conjecture(
                self.service.clone(),
                self.template.clone(),
                conjecture,
                semaphore.clone(),
                progress.clone(),
                total,
            ));
            handles.push((index, handle));
        }

        // 等待所有任务完成，按提交顺序收集结果
        let mut results: Vec<(usize, ResearchResult)> = Vec::new();
        let mut failed = 0usize;

        for (index, handle) in handles {
            match handle.await {
                Ok(Ok(Some(record))) => {
                    if record.error.is_some() {
                        failed += 1;
                    }
                    results.push((index, record));
                }
                Ok(Ok(None)) => {
                    // 空猜想，不产生输出记录
                }
                Ok(Err(e)) => {
                    error!("[猜想 {}] 处理过程中发生错误: {}", index + 1, e);
                    failed += 1;
                }
                Err(e) => {
                    error!("[猜想 {}] 任务执行失败: {}", index + 1, e);
                    failed += 1;
                }
            }
        }

        results.sort_by_key(|(index, _)| *index);
        let records: Vec<ResearchResult> = results.into_iter().map(|(_, record)| record).collect();

        self.write_results(&records).await?;

        let stats = BatchStats {
            total,
            processed: records.len(),
            failed,
        };
        print_final_stats(&stats, &self.config.output_file);

        Ok(stats)
    }

    /// 将结果序列化为带缩进的 JSON，一次性写出
    async fn write_results(&self, records: &[ResearchResult]) -> Result<()> {
        let output_path = Path::new(&self.config.output_file);

        if let Some(parent) = output_path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .await
                    .with_context(|| format!("无法创建输出目录: {}", parent.display()))?;
            }
        }

        let json = serde_json::to_string_pretty(records)?;
        fs::write(output_path, json)
            .await
            .with_context(|| format!("无法写入输出文件: {}", output_path.display()))?;

        Ok(())
    }
}
