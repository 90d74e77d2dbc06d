//! # 图像加载器
//!
//! 并行解码候选文件，解码失败的文件跳过并记录，不影响整体运行。
//!
//! ## 依赖关系
//! - 被 `commands/pipeline.rs` 调用
//! - 使用 `transform/codec.rs` 解码
//! - 使用 `rayon` 并行解码，`utils/progress.rs` 显示进度

use crate::models::ImageRecord;
use crate::transform::codec;
use crate::utils::{output, progress};

use rayon::prelude::*;
use std::path::PathBuf;

/// 加载所有可解码的图像
///
/// 返回记录的 `index` 从 0 开始连续编号，被跳过的文件不占位。
pub fn load(paths: &[PathBuf]) -> Vec<ImageRecord> {
    let pb = progress::create_progress_bar(paths.len() as u64, "Decoding");

    let decoded: Vec<_> = paths
        .par_iter()
        .map(|path| {
            let result = match codec::decode(path) {
                Ok(decoded) => Some((path.clone(), decoded)),
                Err(e) => {
                    pb.suspend(|| {
                        output::print_skip(&format!(
                            "{}: {}",
                            path.display(),
                            output::error_chain(&e)
                        ));
                    });
                    None
                }
            };
            pb.inc(1);
            result
        })
        .collect();

    pb.finish_and_clear();

    decoded
        .into_iter()
        .flatten()
        .enumerate()
        .map(|(index, (source_path, decoded))| ImageRecord {
            index,
            source_path,
            pixels: decoded.image,
            format: decoded.format,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_skipped_files_leave_no_gap() {
        let dir = tempdir().unwrap();
        let a = dir.path().join("a.png");
        let broken = dir.path().join("b.png");
        let c = dir.path().join("c.png");
        RgbImage::from_pixel(2, 2, Rgb([1, 2, 3])).save(&a).unwrap();
        fs::write(&broken, b"garbage").unwrap();
        RgbImage::from_pixel(5, 1, Rgb([4, 5, 6])).save(&c).unwrap();

        let records = load(&[a.clone(), broken, c.clone()]);

        assert_eq!(records.len(), 2);
        assert_eq!(records[0].index, 0);
        assert_eq!(records[0].source_path, a);
        assert_eq!(records[1].index, 1);
        assert_eq!(records[1].source_path, c);
        assert_eq!(records[1].pixels.width(), 5);
    }

    #[test]
    fn test_empty_input() {
        assert!(load(&[]).is_empty());
    }
}
