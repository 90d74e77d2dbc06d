//! # 图像记录与工作项
//!
//! ## 依赖关系
//! - `ImageRecord` 由 `batch/loader.rs` 创建
//! - `WorkItem` 由 `commands/pipeline.rs` 构建，交给 `batch/scheduler.rs` 调度

use super::mode::TransformMode;
use crate::batch::Dispatch;
use crate::transform::naming;

use image::{DynamicImage, ImageFormat};
use std::path::{Path, PathBuf};

/// 成功解码的图像
#[derive(Debug, Clone)]
pub struct ImageRecord {
    /// 在成功加载序列中的位置（从 0 开始，连续）
    pub index: usize,
    /// 源文件路径
    pub source_path: PathBuf,
    /// 解码后的像素数据
    pub pixels: DynamicImage,
    /// 解码时探测到的容器格式
    pub format: Option<ImageFormat>,
}

/// 单个 worker 的工作单元
///
/// 持有图像的独立所有权，被移动进 worker 线程后只会被消费一次。
#[derive(Debug)]
pub struct WorkItem {
    pub record: ImageRecord,
    pub output_path: PathBuf,
    pub mode: TransformMode,
}

impl WorkItem {
    /// 根据命名策略构建工作项
    pub fn new(record: ImageRecord, output_dir: &Path, mode: &TransformMode) -> Self {
        let output_path = naming::output_path(&record.source_path, output_dir, mode);
        Self {
            record,
            output_path,
            mode: mode.clone(),
        }
    }
}

impl Dispatch for WorkItem {
    fn index(&self) -> usize {
        self.record.index
    }

    fn output_path(&self) -> &Path {
        &self.output_path
    }
}
