//! # DOS CSV 解析器
//!
//! 解析 `DOS-<label>.csv` 文件：第一行为表头（忽略），之后每行依次为
//! 能量、DOS、积分 DOS。
//!
//! ## 依赖关系
//! - 被 `commands/dos.rs` 使用
//! - 使用 `models/dos.rs`
//! - 使用 `csv`, `glob` crate

use super::{parse_number, read_file};
use crate::error::{DosbandError, Result};
use crate::models::DosSeries;

use std::path::{Path, PathBuf};

/// DOS 文件名前缀
pub const DOS_PREFIX: &str = "DOS-";

/// DOS 文件匹配模式
pub const DOS_PATTERN: &str = "DOS-*.csv";

/// 查找目录下所有 DOS 文件（按文件名排序）
pub fn find_dos_files(folder: &Path) -> Result<Vec<PathBuf>> {
    let escaped = glob::Pattern::escape(&folder.display().to_string());
    let pattern = Path::new(&escaped).join(DOS_PATTERN);

    let mut files: Vec<PathBuf> = glob::glob(&pattern.display().to_string())?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

/// 由文件名得到标签：去掉扩展名和其中所有的 `DOS-`
pub fn dos_label(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default();
    stem.replace(DOS_PREFIX, "")
}

/// 解析 DOS 文件
pub fn parse_dos_file(path: &Path) -> Result<DosSeries> {
    let content = read_file(path)?;
    parse_dos_content(&content, &dos_label(path)).map_err(|e| DosbandError::ParseError {
        format: "DOS CSV".to_string(),
        path: path.display().to_string(),
        reason: e.to_string(),
    })
}

/// 从字符串内容解析 DOS 数据
pub fn parse_dos_content(content: &str, label: &str) -> Result<DosSeries> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let mut series = DosSeries::new(label);

    for record in reader.records() {
        let record = record?;
        let cell = |i: usize| record.get(i).and_then(parse_number);
        series.push(cell(0), cell(1), cell(2));
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_dos_label() {
        assert_eq!(dos_label(Path::new("/data/Fe2O3/DOS-Fe.csv")), "Fe");
        assert_eq!(dos_label(Path::new("DOS-total.csv")), "total");
        assert_eq!(dos_label(Path::new("DOS-E.csv")), "E");
        assert_eq!(dos_label(Path::new("DOS-Fe-DOS-up.csv")), "Fe-up");
    }

    #[test]
    fn test_parse_dos_content_coerces_bad_cells() {
        let content = "Energy,DOS,Intg DOS
-1.0,0.5,0.1
oops,2.0,0.2
0.5,,0.3
1.0,3.0
";
        let series = parse_dos_content(content, "Fe").unwrap();
        assert_eq!(series.label, "Fe");
        assert_eq!(series.len(), 4);
        assert_eq!(series.energy, vec![Some(-1.0), None, Some(0.5), Some(1.0)]);
        assert_eq!(series.dos, vec![Some(0.5), Some(2.0), None, Some(3.0)]);
        assert_eq!(series.integrated_dos, vec![Some(0.1), Some(0.2), Some(0.3), None]);
    }

    #[test]
    fn test_find_dos_files() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["DOS-O.csv", "DOS-Fe.csv", "DOS-total.csv", "notes.csv", "DOS-Fe.txt"] {
            fs::write(dir.path().join(name), "e,d,i\n0,1,2\n").unwrap();
        }

        let files = find_dos_files(dir.path()).unwrap();
        let names: Vec<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["DOS-Fe.csv", "DOS-O.csv", "DOS-total.csv"]);
    }

    #[test]
    fn test_find_dos_files_empty_folder() {
        let dir = tempfile::tempdir().unwrap();
        assert!(find_dos_files(dir.path()).unwrap().is_empty());
    }
}
