//! # Worker 结果
//!
//! 仅用于日志、汇总与报告，不参与调度决策。

use serde::Serialize;
use std::path::PathBuf;

/// 单个 worker 的处理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkerOutcome {
    pub index: usize,
    pub output_path: PathBuf,
    pub succeeded: bool,
    /// 失败原因
    pub error: Option<String>,
}

impl WorkerOutcome {
    pub fn success(index: usize, output_path: PathBuf) -> Self {
        Self {
            index,
            output_path,
            succeeded: true,
            error: None,
        }
    }

    pub fn failure(index: usize, output_path: PathBuf, error: impl Into<String>) -> Self {
        Self {
            index,
            output_path,
            succeeded: false,
            error: Some(error.into()),
        }
    }
}
