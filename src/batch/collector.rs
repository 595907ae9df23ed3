//! # 结构目录收集器
//!
//! 列出根目录下的所有直接子目录，每个子目录对应一个结构。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{DosbandError, Result};

use std::path::PathBuf;
use walkdir::WalkDir;

/// 结构目录收集器
pub struct FolderCollector {
    /// 根目录
    root: PathBuf,
}

impl FolderCollector {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// 收集所有子目录（按名称排序，跟随符号链接）
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(DosbandError::DirectoryNotFound {
                path: self.root.display().to_string(),
            });
        }

        let folders = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_dir())
            .map(|e| e.path().to_path_buf())
            .collect();

        Ok(folders)
    }
}
