//! # 运行配置
//!
//! 启动时对命令行参数做一次性校验，得到类型化的 `RunConfig`，
//! 之后显式传递给各处理阶段。校验失败发生在任何 I/O 之前。
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 的 `Cli`
//! - 被 `commands/` 使用

use crate::cli::Cli;
use crate::error::{ImbatchError, Result};
use crate::models::TransformMode;

use std::num::NonZeroUsize;
use std::path::PathBuf;

/// 校验后的运行配置
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: String,
    pub output: PathBuf,
    pub concurrency: NonZeroUsize,
    pub mode: TransformMode,
    pub recursive: bool,
    pub report: Option<PathBuf>,
}

impl RunConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let concurrency = NonZeroUsize::new(cli.concurrency).ok_or_else(|| {
            ImbatchError::InvalidArgument("concurrency (-n) must be at least 1".to_string())
        })?;

        let mode = match (cli.grayscale, cli.format, cli.target.as_deref()) {
            (true, true, _) => {
                return Err(ImbatchError::InvalidArgument(
                    "-g and -f are mutually exclusive".to_string(),
                ))
            }
            (true, false, None) => TransformMode::Grayscale,
            (true, false, Some(_)) => {
                return Err(ImbatchError::InvalidArgument(
                    "-t is only valid together with -f".to_string(),
                ))
            }
            (false, true, Some(target)) => TransformMode::format_convert(target)?,
            (false, true, None) => {
                return Err(ImbatchError::InvalidArgument(
                    "-f requires a target extension (-t)".to_string(),
                ))
            }
            (false, false, _) => {
                return Err(ImbatchError::InvalidArgument(
                    "one of -g or -f is required".to_string(),
                ))
            }
        };

        if cli.input.trim().is_empty() {
            return Err(ImbatchError::InvalidArgument(
                "input (-i) must not be empty".to_string(),
            ));
        }

        Ok(Self {
            input: cli.input.clone(),
            output: cli.output.clone(),
            concurrency,
            mode,
            recursive: cli.recursive,
            report: cli.report.clone(),
        })
    }
}
