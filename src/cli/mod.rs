//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数结构
//! - `-g` / `-f`: 变换模式（二选一）
//! - `-i`: 输入文件、目录或 glob 模式
//! - `-o`: 输出目录
//! - `-n`: 每批并发数
//! - `-t`: 目标扩展名（仅 `-f`）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 由 `config.rs` 校验为 `RunConfig`

use clap::{ArgGroup, Parser};
use std::path::PathBuf;

/// imbatch - 批量图像变换工具
#[derive(Parser, Debug)]
#[command(name = "imbatch")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch image transformer: grayscale conversion or format re-encoding", long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["grayscale", "format"])))]
pub struct Cli {
    /// Convert every image to grayscale, keeping its filename
    #[arg(short = 'g', long)]
    pub grayscale: bool,

    /// Re-encode every image into the container given by --target
    #[arg(short = 'f', long, requires = "target")]
    pub format: bool,

    /// Input file, directory or glob pattern (quote globs to keep the shell away)
    #[arg(short = 'i', long)]
    pub input: String,

    /// Output directory (created if absent)
    #[arg(short = 'o', long)]
    pub output: PathBuf,

    /// Number of images processed concurrently per batch (>= 1)
    #[arg(short = 'n', long)]
    pub concurrency: usize,

    /// Target extension for --format, e.g. png
    #[arg(short = 't', long, requires = "format")]
    pub target: Option<String>,

    /// Recurse into subdirectories when --input is a directory
    #[arg(short = 'r', long, default_value_t = false)]
    pub recursive: bool,

    /// Write a per-image CSV report
    #[arg(long)]
    pub report: Option<PathBuf>,
}
