//! # 文件收集器
//!
//! 将输入参数展开为待处理文件列表。
//!
//! ## 功能
//! - 单文件输入
//! - 目录输入（可递归）
//! - glob 模式匹配
//!
//! ## 依赖关系
//! - 被 `commands/pipeline.rs` 调用
//! - 使用 `walkdir` 遍历目录，`glob` 展开模式

use crate::error::{ImbatchError, Result};
use crate::utils::output;

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct PathEnumerator {
    /// 输入路径或 glob 模式
    input: String,
    /// 是否递归
    recursive: bool,
}

impl PathEnumerator {
    /// 创建新的文件收集器
    pub fn new(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            recursive: false,
        }
    }

    /// 设置是否递归搜索（仅对目录输入有效）
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.recursive = recursive;
        self
    }

    /// 收集所有匹配的文件
    ///
    /// 没有匹配时返回空列表并打印一条警告；结果已排序，但调用方不应依赖顺序。
    pub fn enumerate(&self) -> Result<Vec<PathBuf>> {
        let input = Path::new(&self.input);

        let mut files = if input.is_file() {
            vec![input.to_path_buf()]
        } else if input.is_dir() {
            self.walk_dir(input)
        } else {
            self.expand_glob()?
        };

        if files.is_empty() {
            output::print_warning(&format!("No files matched '{}'", self.input));
        }

        files.sort();
        Ok(files)
    }

    fn walk_dir(&self, dir: &Path) -> Vec<PathBuf> {
        let max_depth = if self.recursive { usize::MAX } else { 1 };

        WalkDir::new(dir)
            .max_depth(max_depth)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| e.path().to_path_buf())
            .collect()
    }

    fn expand_glob(&self) -> Result<Vec<PathBuf>> {
        let paths = glob::glob(&self.input).map_err(|e| ImbatchError::InvalidPattern {
            pattern: self.input.clone(),
            reason: e.to_string(),
        })?;

        Ok(paths
            .filter_map(|p| p.ok())
            .filter(|p| p.is_file())
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_single_file() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.png");
        touch(&file);

        let files = PathEnumerator::new(file.display().to_string())
            .enumerate()
            .unwrap();
        assert_eq!(files, vec![file]);
    }

    #[test]
    fn test_directory_non_recursive_and_recursive() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("b.png"));
        touch(&dir.path().join("a.jpg"));
        fs::create_dir(dir.path().join("nested")).unwrap();
        touch(&dir.path().join("nested").join("c.png"));

        let input = dir.path().display().to_string();
        let flat = PathEnumerator::new(input.clone()).enumerate().unwrap();
        assert_eq!(
            flat,
            vec![dir.path().join("a.jpg"), dir.path().join("b.png")]
        );

        let deep = PathEnumerator::new(input).recursive(true).enumerate().unwrap();
        assert_eq!(deep.len(), 3);
        assert!(deep.contains(&dir.path().join("nested").join("c.png")));
    }

    #[test]
    fn test_glob_pattern() {
        let dir = tempdir().unwrap();
        touch(&dir.path().join("one.png"));
        touch(&dir.path().join("two.png"));
        touch(&dir.path().join("three.jpg"));

        let pattern = format!("{}/*.png", dir.path().display());
        let files = PathEnumerator::new(pattern).enumerate().unwrap();
        assert_eq!(
            files,
            vec![dir.path().join("one.png"), dir.path().join("two.png")]
        );
    }

    #[test]
    fn test_no_match_is_empty_not_error() {
        let dir = tempdir().unwrap();
        let pattern = format!("{}/*.tiff", dir.path().display());
        assert!(PathEnumerator::new(pattern).enumerate().unwrap().is_empty());
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            PathEnumerator::new("/definitely/missing/[").enumerate(),
            Err(ImbatchError::InvalidPattern { .. })
        ));
    }
}
