//! # 输出目录准备
//!
//! 幂等地创建输出目录：已存在视为成功，其他失败为致命错误。
//!
//! ## 依赖关系
//! - 被 `commands/pipeline.rs` 在调度前调用

use crate::error::{ImbatchError, Result};

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 目录准备结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provisioned {
    Created,
    Existing,
}

/// 确保输出目录存在
pub fn ensure_dir(path: &Path) -> Result<Provisioned> {
    if path.is_dir() {
        return Ok(Provisioned::Existing);
    }

    match fs::create_dir_all(path) {
        Ok(()) => Ok(Provisioned::Created),
        // 并发创建
        Err(e) if e.kind() == ErrorKind::AlreadyExists && path.is_dir() => {
            Ok(Provisioned::Existing)
        }
        Err(e) => Err(ImbatchError::DirectoryCreateError {
            path: path.display().to_string(),
            source: e,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_then_existing() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out").join("gray");

        assert_eq!(ensure_dir(&out).unwrap(), Provisioned::Created);
        assert!(out.is_dir());
        assert_eq!(ensure_dir(&out).unwrap(), Provisioned::Existing);
    }

    #[test]
    fn test_existing_file_is_fatal() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("out");
        fs::write(&file, b"not a directory").unwrap();

        assert!(matches!(
            ensure_dir(&file),
            Err(ImbatchError::DirectoryCreateError { .. })
        ));
    }
}
