//! # 能带 CSV 解析器
//!
//! 解析能带图所需的两个配套文件：
//! - `band_structure_points.csv`: 列 `point`（刻度标签）与 `values`（刻度位置）
//! - `band_structure.csv`: 列 `k` 与 `Energy (eV)`
//!
//! 列名两侧的空白会被去除，多余的列被忽略。
//!
//! ## 依赖关系
//! - 被 `commands/band.rs` 使用
//! - 使用 `models/band.rs`
//! - 使用 `csv` + `serde` 反序列化

use super::{coerce_f64, read_file};
use crate::error::{DosbandError, Result};
use crate::models::{BandPath, BandTicks};
use crate::utils::output;

use serde::Deserialize;
use std::path::Path;

/// 高对称点文件名
pub const POINTS_FILE: &str = "band_structure_points.csv";

/// 能带数据文件名
pub const BAND_FILE: &str = "band_structure.csv";

#[derive(Debug, Deserialize)]
struct PointRecord {
    #[serde(default)]
    point: String,
    #[serde(default, deserialize_with = "coerce_f64")]
    values: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct BandRecord {
    #[serde(default, deserialize_with = "coerce_f64")]
    k: Option<f64>,
    #[serde(rename = "Energy (eV)", default, deserialize_with = "coerce_f64")]
    energy: Option<f64>,
}

fn reader(content: &str) -> csv::Reader<&[u8]> {
    csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes())
}

/// 检查表头中是否包含必需的列
fn require_columns(reader: &mut csv::Reader<&[u8]>, columns: &[&str]) -> Result<()> {
    let headers = reader.headers()?;
    for column in columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(DosbandError::MissingColumn {
                column: column.to_string(),
            });
        }
    }
    Ok(())
}

fn parse_error(format: &str, path: &Path, err: DosbandError) -> DosbandError {
    DosbandError::ParseError {
        format: format.to_string(),
        path: path.display().to_string(),
        reason: err.to_string(),
    }
}

/// 解析高对称点文件
pub fn parse_points_file(path: &Path) -> Result<BandTicks> {
    let content = read_file(path)?;
    parse_points_content(&content).map_err(|e| parse_error("band points CSV", path, e))
}

/// 从字符串内容解析高对称点
///
/// 位置缺失的刻度无法放置，打印警告后跳过。
pub fn parse_points_content(content: &str) -> Result<BandTicks> {
    let mut rdr = reader(content);
    require_columns(&mut rdr, &["point", "values"])?;

    let mut ticks = BandTicks::default();

    for record in rdr.deserialize() {
        let record: PointRecord = record?;
        match record.values {
            Some(position) => ticks.push(position, record.point),
            None => output::print_warning(&format!(
                "Skipping high-symmetry point '{}' without a numeric position",
                record.point
            )),
        }
    }

    Ok(ticks)
}

/// 解析能带数据文件
pub fn parse_band_file(path: &Path) -> Result<BandPath> {
    let content = read_file(path)?;
    parse_band_content(&content).map_err(|e| parse_error("band structure CSV", path, e))
}

/// 从字符串内容解析能带数据
pub fn parse_band_content(content: &str) -> Result<BandPath> {
    let mut rdr = reader(content);
    require_columns(&mut rdr, &["k", "Energy (eV)"])?;

    let mut path = BandPath::default();

    for record in rdr.deserialize() {
        let record: BandRecord = record?;
        path.push(record.k, record.energy);
    }

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_points_trims_headers() {
        let content = " point , values \nΓ,0\nX, 1.0\nM,2.5\n";
        let ticks = parse_points_content(content).unwrap();

        let labels: Vec<&str> = ticks.points.iter().map(|p| p.label.as_str()).collect();
        let positions: Vec<f64> = ticks.points.iter().map(|p| p.position).collect();
        assert_eq!(labels, vec!["Γ", "X", "M"]);
        assert_eq!(positions, vec![0.0, 1.0, 2.5]);
    }

    #[test]
    fn test_parse_points_skips_missing_position() {
        let content = "point,values\nΓ,0\nX,n/a\nM,2.5\n";
        let ticks = parse_points_content(content).unwrap();
        assert_eq!(ticks.points.len(), 2);
        assert_eq!(ticks.range(), Some((0.0, 2.5)));
    }

    #[test]
    fn test_parse_band_content() {
        let content = "k,Energy (eV),band\n0.0,-1.5,1\n0.5,bad,1\n1.0,0.25,1\n1.5\n";
        let path = parse_band_content(content).unwrap();
        assert_eq!(path.len(), 4);
        assert_eq!(path.k, vec![Some(0.0), Some(0.5), Some(1.0), Some(1.5)]);
        assert_eq!(path.energy, vec![Some(-1.5), None, Some(0.25), None]);
    }

    #[test]
    fn test_parse_band_missing_column_is_error() {
        let content = "k,E\n0.0,1.0\n";
        let err = parse_band_content(content).unwrap_err();
        assert!(matches!(err, DosbandError::MissingColumn { ref column } if column == "Energy (eV)"));
    }
}
