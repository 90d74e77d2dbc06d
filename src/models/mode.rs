//! # 变换模式
//!
//! 每次运行只选择一种模式，运行期间不可变。
//!
//! ## 依赖关系
//! - 由 `config.rs` 从命令行参数构建
//! - 被 `transform/` 用于分派

use crate::error::{ImbatchError, Result};

use image::ImageFormat;
use std::fmt;

/// 变换模式
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransformMode {
    /// 转为灰度，保留原文件名与容器格式
    Grayscale,
    /// 仅重新编码为目标容器格式
    FormatConvert {
        /// 输出文件扩展名（不含前导 `.`）
        extension: String,
        /// 由扩展名解析出的编码格式
        format: ImageFormat,
    },
}

impl TransformMode {
    /// 由目标扩展名构建 `FormatConvert`，扩展名必须对应可编码的格式
    pub fn format_convert(target: &str) -> Result<Self> {
        let extension = target.trim().trim_start_matches('.').to_string();
        if extension.is_empty() {
            return Err(ImbatchError::InvalidArgument(
                "target extension must not be empty".to_string(),
            ));
        }

        let format = ImageFormat::from_extension(&extension).ok_or_else(|| {
            ImbatchError::UnsupportedFormat(format!("no image container for '.{}'", extension))
        })?;

        if !format.writing_enabled() {
            return Err(ImbatchError::UnsupportedFormat(format!(
                "encoding {:?} is not supported",
                format
            )));
        }

        Ok(Self::FormatConvert { extension, format })
    }
}

impl fmt::Display for TransformMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransformMode::Grayscale => write!(f, "grayscale"),
            TransformMode::FormatConvert { extension, .. } => write!(f, "format -> .{}", extension),
        }
    }
}
