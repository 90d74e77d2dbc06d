//! # 命令执行模块
//!
//! 校验配置后执行批处理流水线。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `config.rs`
//! - 子模块: pipeline

pub mod pipeline;

use crate::batch::RunReport;
use crate::cli::Cli;
use crate::config::RunConfig;
use crate::error::Result;

/// 执行命令
pub fn run(cli: Cli) -> Result<RunReport> {
    let config = RunConfig::from_cli(&cli)?;
    pipeline::execute(&config)
}
