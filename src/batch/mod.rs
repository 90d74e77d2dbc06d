//! # 批量处理模块
//!
//! 图像批处理的核心：文件收集、解码加载、分批有界并行调度。
//!
//! ## 功能
//! - 输入路径 / glob 展开为文件列表
//! - 并行解码，失败文件跳过
//! - 按并发上限 N 分批，批内每项一个线程，批间硬屏障
//! - 结果汇总与报告
//!
//! ## 依赖关系
//! - 被 `commands/pipeline.rs` 调用
//! - 使用 `rayon` 进行并行解码
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod loader;
pub mod report;
pub mod scheduler;

pub use collector::PathEnumerator;
pub use report::{BatchSummary, RunReport};
pub use scheduler::{BatchJob, BatchScheduler, Dispatch};
