//! # 图像变换模块
//!
//! 两种变换：灰度转换与容器格式重编码。
//!
//! ## 功能
//! - `apply`: 解码图像 -> 编码后的输出字节
//! - 灰度模式沿用源文件扩展名对应的容器
//! - 格式转换模式不改动像素，只按目标容器重编码
//!
//! ## 依赖关系
//! - 被 `commands/pipeline.rs` 的 worker 调用
//! - 子模块: codec, naming

pub mod codec;
pub mod naming;

use crate::error::{ImbatchError, Result};
use crate::models::{ImageRecord, TransformMode};

use image::ImageFormat;

/// 对单张图像执行变换，返回编码后的字节
pub fn apply(mode: &TransformMode, record: &ImageRecord) -> Result<Vec<u8>> {
    match mode {
        TransformMode::Grayscale => {
            let format = source_format(record)?;
            codec::encode(&codec::grayscale(&record.pixels), format)
        }
        TransformMode::FormatConvert { format, .. } => codec::encode(&record.pixels, *format),
    }
}

/// 源文件的容器格式：优先扩展名，其次解码时探测到的格式
fn source_format(record: &ImageRecord) -> Result<ImageFormat> {
    ImageFormat::from_path(&record.source_path)
        .ok()
        .or(record.format)
        .ok_or_else(|| {
            ImbatchError::UnsupportedFormat(format!(
                "cannot infer container for {}",
                record.source_path.display()
            ))
        })
}
