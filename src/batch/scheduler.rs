//! # 分批调度器
//!
//! 有界并行的核心：将工作项按并发上限 N 切分为连续批次，
//! 批内每个工作项一个线程，批与批之间是硬同步屏障。
//!
//! ## 调度规则
//! - 批次按 offset 升序执行，只有最后一批可以小于 N
//! - 第 k+1 批的 worker 只在第 k 批全部结束后才启动，因此任意时刻最多 N 个 worker 存活
//! - 线程创建失败的工作项直接跳过，不重试、不放入后续批次
//! - worker 失败（包括 panic）只影响自身结果
//! - 批内完成顺序不作保证
//!
//! ## 依赖关系
//! - 被 `commands/pipeline.rs` 调用
//! - 使用 `batch/report.rs` 汇总结果
//! - 使用 `utils/progress.rs` 显示进度

use super::report::{BatchSummary, RunReport};
use crate::models::WorkerOutcome;
use crate::utils::{output, progress};

use std::io;
use std::num::NonZeroUsize;
use std::path::Path;
use std::thread::{self, Scope, ScopedJoinHandle};

/// 可被调度的工作项
pub trait Dispatch: Send {
    /// 工作项编号
    fn index(&self) -> usize;
    /// 工作项的输出路径
    fn output_path(&self) -> &Path;
}

/// 一个批次：工作项序列中的连续区间 `[offset, offset + size)`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchJob {
    pub offset: usize,
    pub size: usize,
}

/// 线程创建策略
pub trait Spawner {
    /// 在 `scope` 中为编号 `index` 的工作项启动 worker
    fn spawn<'scope, 'env, F>(
        &self,
        scope: &'scope Scope<'scope, 'env>,
        index: usize,
        f: F,
    ) -> io::Result<ScopedJoinHandle<'scope, WorkerOutcome>>
    where
        F: FnOnce() -> WorkerOutcome + Send + 'scope;
}

/// 每个工作项一个具名 OS 线程
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSpawner;

impl Spawner for ThreadSpawner {
    fn spawn<'scope, 'env, F>(
        &self,
        scope: &'scope Scope<'scope, 'env>,
        index: usize,
        f: F,
    ) -> io::Result<ScopedJoinHandle<'scope, WorkerOutcome>>
    where
        F: FnOnce() -> WorkerOutcome + Send + 'scope,
    {
        thread::Builder::new()
            .name(format!("imbatch-worker-{}", index))
            .spawn_scoped(scope, f)
    }
}

/// 分批调度器
pub struct BatchScheduler<S = ThreadSpawner> {
    /// 每批最多并发的 worker 数
    concurrency: NonZeroUsize,
    spawner: S,
}

impl BatchScheduler {
    /// 创建新的调度器
    pub fn new(concurrency: NonZeroUsize) -> Self {
        Self::with_spawner(concurrency, ThreadSpawner)
    }
}

impl<S: Spawner> BatchScheduler<S> {
    /// 使用自定义线程创建策略
    pub fn with_spawner(concurrency: NonZeroUsize, spawner: S) -> Self {
        Self {
            concurrency,
            spawner,
        }
    }

    /// 将 `[0, total)` 切分为连续批次
    pub fn jobs(&self, total: usize) -> Vec<BatchJob> {
        let n = self.concurrency.get();
        (0..total)
            .step_by(n)
            .map(|offset| BatchJob {
                offset,
                size: n.min(total - offset),
            })
            .collect()
    }

    /// 逐批执行所有工作项
    pub fn run<T, F>(&self, items: Vec<T>, worker: F) -> RunReport
    where
        T: Dispatch,
        F: Fn(T) -> WorkerOutcome + Sync,
    {
        let jobs = self.jobs(items.len());
        let pb = progress::create_progress_bar(items.len() as u64, "Transforming");
        let mut report = RunReport::default();
        let mut items = items.into_iter();

        for (batch, job) in jobs.iter().enumerate() {
            pb.set_message(progress::batch_message(batch, jobs.len()));
            let mut summary = BatchSummary::new(batch, *job);
            let worker = &worker;

            // scope 结束即为本批的屏障
            thread::scope(|scope| {
                let mut handles = Vec::with_capacity(job.size);

                for item in items.by_ref().take(job.size) {
                    let index = item.index();
                    let output_path = item.output_path().to_path_buf();

                    match self.spawner.spawn(scope, index, move || worker(item)) {
                        Ok(handle) => handles.push((index, output_path, handle)),
                        Err(e) => {
                            let reason = format!("failed to spawn worker, skipped: {}", e);
                            pb.suspend(|| {
                                output::print_worker_failure(index, &output_path, &reason)
                            });
                            report.spawn_failures.push((index, e.to_string()));
                            pb.inc(1);
                        }
                    }
                }

                summary.spawned = handles.len();

                for (index, output_path, handle) in handles {
                    let outcome = handle.join().unwrap_or_else(|_| {
                        WorkerOutcome::failure(index, output_path, "worker panicked")
                    });

                    if outcome.succeeded {
                        summary.succeeded += 1;
                    } else {
                        summary.failed += 1;
                        pb.suspend(|| {
                            output::print_worker_failure(
                                outcome.index,
                                &outcome.output_path,
                                outcome.error.as_deref().unwrap_or("unknown error"),
                            )
                        });
                    }

                    report.outcomes.push(outcome);
                    pb.inc(1);
                }
            });

            report.batches.push(summary);
        }

        pb.finish_and_clear();
        report
    }
}
