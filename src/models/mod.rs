//! # 数据模型模块
//!
//! 定义 DOS 曲线、能带数据以及元素常量表。
//!
//! ## 依赖关系
//! - 被 `parsers/` 和 `plot/` 使用
//! - 子模块: dos, band, element

pub mod band;
pub mod dos;
pub mod element;

pub use band::{BandPath, BandTicks};
pub use dos::DosSeries;
