//! # 批处理流水线
//!
//! 收集 -> 解码 -> 准备输出目录 -> 分批调度变换 -> 汇总。
//!
//! ## 功能
//! - 单个文件的失败只记录，不中断运行
//! - 输出目录准备失败为致命错误，发生在任何变换之前
//! - 输出路径冲突提前告警（后写者覆盖）
//! - 可选导出 CSV 报告
//!
//! ## 依赖关系
//! - 使用 `config.rs` 的 `RunConfig`
//! - 使用 `batch/`, `transform/`, `models/`
//! - 使用 `utils/output.rs`, `utils/fs.rs`, `utils/report.rs`

use crate::batch::{loader, BatchScheduler, PathEnumerator, RunReport};
use crate::config::RunConfig;
use crate::error::Result;
use crate::models::{WorkItem, WorkerOutcome};
use crate::transform::{self, codec, naming};
use crate::utils::fs::{self, Provisioned};
use crate::utils::{output, report};

use tabled::Table;

/// 执行批处理
pub fn execute(config: &RunConfig) -> Result<RunReport> {
    output::print_header(&format!(
        "Batch {} ({} per batch)",
        config.mode, config.concurrency
    ));

    let paths = PathEnumerator::new(config.input.as_str())
        .recursive(config.recursive)
        .enumerate()?;
    if !paths.is_empty() {
        output::print_info(&format!("Found {} candidate files", paths.len()));
    }

    let records = loader::load(&paths);
    if records.len() < paths.len() {
        output::print_warning(&format!(
            "{} of {} files could not be decoded",
            paths.len() - records.len(),
            paths.len()
        ));
    }

    match fs::ensure_dir(&config.output)? {
        Provisioned::Created => output::print_info(&format!(
            "Created output directory '{}'",
            config.output.display()
        )),
        Provisioned::Existing => output::print_info(&format!(
            "Output directory '{}' already exists",
            config.output.display()
        )),
    }

    let items: Vec<WorkItem> = records
        .into_iter()
        .map(|record| WorkItem::new(record, &config.output, &config.mode))
        .collect();

    for collision in naming::find_collisions(items.iter().map(|i| i.output_path.as_path())) {
        output::print_warning(&format!(
            "Several inputs map to '{}'; the last one written wins",
            collision.display()
        ));
    }

    let scheduler = BatchScheduler::new(config.concurrency);
    let run_report = scheduler.run(items, process_item);

    if !run_report.batches.is_empty() {
        println!("{}", Table::new(&run_report.batches));
    }

    if let Some(report_path) = &config.report {
        report::to_csv(&run_report, report_path)?;
        output::print_info(&format!("Report written to '{}'", report_path.display()));
    }

    output::print_done(&format!(
        "Wrote {} image(s) to '{}' ({} failed, {} not started)",
        run_report.succeeded(),
        config.output.display(),
        run_report.failed(),
        run_report.skipped()
    ));

    Ok(run_report)
}

/// 单个 worker：变换并写出
fn process_item(item: WorkItem) -> WorkerOutcome {
    let WorkItem {
        record,
        output_path,
        mode,
    } = item;

    let result =
        transform::apply(&mode, &record).and_then(|bytes| codec::write(&output_path, &bytes));

    match result {
        Ok(()) => WorkerOutcome::success(record.index, output_path),
        Err(e) => WorkerOutcome::failure(record.index, output_path, output::error_chain(&e)),
    }
}
