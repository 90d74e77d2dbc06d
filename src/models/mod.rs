//! # 数据模型模块
//!
//! 定义批处理流水线中流转的数据模型。
//!
//! ## 依赖关系
//! - 被 `batch/`, `transform/` 和 `commands/` 使用
//! - 子模块: record, mode, outcome

pub mod record;
pub mod mode;
pub mod outcome;

pub use record::{ImageRecord, WorkItem};
pub use mode::TransformMode;
pub use outcome::WorkerOutcome;
