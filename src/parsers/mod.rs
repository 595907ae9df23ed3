//! # 解析器模块
//!
//! 读取 DOS 与能带计算导出的 CSV 文件。
//!
//! ## 数值转换规则
//! 单元格去除首尾空白后按浮点数解析；无法解析的内容（以及 `NaN`）
//! 记为缺失值 `None`，不会返回错误。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: dos_csv, band_csv

pub mod band_csv;
pub mod dos_csv;

use crate::error::{DosbandError, Result};
use serde::{Deserialize, Deserializer};
use std::fs;
use std::path::Path;

/// 将单元格文本转换为数值，失败时返回 None
pub fn parse_number(cell: &str) -> Option<f64> {
    cell.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// serde 字段转换：任何无法解析的单元格都变成 None
pub(crate) fn coerce_f64<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.as_deref().and_then(parse_number))
}

/// 读取整个文本文件
pub(crate) fn read_file(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| DosbandError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number() {
        assert_eq!(parse_number(" -1.25 "), Some(-1.25));
        assert_eq!(parse_number("1e-3"), Some(0.001));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("NaN"), None);
    }
}
