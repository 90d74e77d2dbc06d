//! # 输出文件命名
//!
//! 纯函数，不做任何 I/O。
//!
//! ## 命名策略
//! - 灰度: `out_dir/<原文件名>`
//! - 格式转换: `out_dir/<stem>.<ext>`
//!
//! 不做冲突处理：格式转换时仅扩展名不同的两个输入会写到同一路径，后写者覆盖。
//! `find_collisions` 只用于提前告警。

use crate::models::TransformMode;

use std::collections::HashMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

/// 计算输出路径
pub fn output_path(source: &Path, output_dir: &Path, mode: &TransformMode) -> PathBuf {
    match mode {
        TransformMode::Grayscale => {
            let name = source.file_name().unwrap_or_else(|| OsStr::new("image"));
            output_dir.join(name)
        }
        TransformMode::FormatConvert { extension, .. } => {
            let mut name = source
                .file_stem()
                .unwrap_or_else(|| OsStr::new("image"))
                .to_os_string();
            name.push(".");
            name.push(extension);
            output_dir.join(name)
        }
    }
}

/// 找出被多个输入占用的输出路径（按首次出现顺序）
pub fn find_collisions<'a, I>(paths: I) -> Vec<PathBuf>
where
    I: IntoIterator<Item = &'a Path>,
{
    let mut seen: HashMap<&Path, usize> = HashMap::new();
    let mut collisions = Vec::new();

    for path in paths {
        let count = seen.entry(path).or_insert(0);
        *count += 1;
        if *count == 2 {
            collisions.push(path.to_path_buf());
        }
    }

    collisions
}
