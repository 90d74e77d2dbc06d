//! # 工具函数模块
//!
//! 提供美化输出、进度条、目录准备与报告导出等工具。
//!
//! ## 依赖关系
//! - 被 `batch/` 与 `commands/` 模块使用
//! - 子模块: fs, output, progress, report

pub mod fs;
pub mod output;
pub mod progress;
pub mod report;
