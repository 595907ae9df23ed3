//! # 批量处理模块
//!
//! 处理一个包含多个结构子目录的根目录。
//!
//! ## 功能
//! - 收集结构子目录
//! - 顺序处理，单个目录失败不影响其余目录
//! - 进度反馈与统计
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 使用
//! - 使用 `walkdir` 遍历目录
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod runner;

pub use collector::FolderCollector;
pub use runner::{FolderReport, FolderRunner, ProcessResult};
