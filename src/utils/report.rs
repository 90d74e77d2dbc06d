//! # 运行报告导出
//!
//! 将每个 worker 的结果导出为 CSV。
//!
//! ## 依赖关系
//! - 被 `commands/pipeline.rs` 调用
//! - 使用 `csv` 库写入，`serde` 序列化 `WorkerOutcome`

use crate::batch::RunReport;
use crate::error::{ImbatchError, Result};

use std::path::Path;

/// 导出结果为 CSV：`index,output_path,succeeded,error`
pub fn to_csv(report: &RunReport, output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    let mut outcomes: Vec<_> = report.outcomes.iter().collect();
    outcomes.sort_by_key(|o| o.index);

    for outcome in outcomes {
        wtr.serialize(outcome)?;
    }

    wtr.flush().map_err(|e| ImbatchError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::WorkerOutcome;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::tempdir;

    #[test]
    fn test_to_csv_sorted_by_index() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let report = RunReport {
            outcomes: vec![
                WorkerOutcome::failure(1, PathBuf::from("out/b.png"), "disk full"),
                WorkerOutcome::success(0, PathBuf::from("out/a.png")),
            ],
            ..Default::default()
        };

        to_csv(&report, &path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(
            lines,
            vec![
                "index,output_path,succeeded,error",
                "0,out/a.png,true,",
                "1,out/b.png,false,disk full",
            ]
        );
    }
}
