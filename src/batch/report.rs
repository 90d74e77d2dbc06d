//! # 运行结果汇总
//!
//! 收集每个 worker 的结果、每批的统计与线程创建失败记录。
//!
//! ## 依赖关系
//! - 由 `batch/scheduler.rs` 生成
//! - 被 `commands/pipeline.rs` 打印，被 `utils/report.rs` 导出为 CSV

use super::scheduler::BatchJob;
use crate::models::WorkerOutcome;

use tabled::Tabled;

/// 单批统计
#[derive(Debug, Clone, PartialEq, Eq, Tabled)]
pub struct BatchSummary {
    #[tabled(rename = "Batch")]
    pub batch: usize,
    #[tabled(rename = "Offset")]
    pub offset: usize,
    #[tabled(rename = "Size")]
    pub size: usize,
    #[tabled(rename = "Spawned")]
    pub spawned: usize,
    #[tabled(rename = "OK")]
    pub succeeded: usize,
    #[tabled(rename = "Failed")]
    pub failed: usize,
}

impl BatchSummary {
    pub fn new(batch: usize, job: BatchJob) -> Self {
        Self {
            batch,
            offset: job.offset,
            size: job.size,
            spawned: 0,
            succeeded: 0,
            failed: 0,
        }
    }
}

/// 一次运行的结果汇总
#[derive(Debug, Default)]
pub struct RunReport {
    /// 所有已执行 worker 的结果（批内按 index 顺序汇合）
    pub outcomes: Vec<WorkerOutcome>,
    /// 每批统计
    pub batches: Vec<BatchSummary>,
    /// 线程创建失败：(index, 原因)
    pub spawn_failures: Vec<(usize, String)>,
}

impl RunReport {
    /// 成功写出的数量
    pub fn succeeded(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded).count()
    }

    /// worker 内失败的数量
    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.succeeded()
    }

    /// 未能执行的数量
    pub fn skipped(&self) -> usize {
        self.spawn_failures.len()
    }
}
