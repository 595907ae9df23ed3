//! # DOS 绘图流程
//!
//! 查找目录中的 `DOS-*.csv`，解析后生成两张图：含 E 与不含 E。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `parsers/dos_csv.rs`, `plot/dos.rs`
//! - 使用 `utils/output.rs`

use crate::batch::ProcessResult;
use crate::error::Result;
use crate::models::DosSeries;
use crate::parsers::dos_csv::{find_dos_files, parse_dos_file};
use crate::plot::dos::{prepare_dos_plot, render_dos_plot, DosVariant};
use crate::utils::output;

use std::path::Path;

/// 对单个目录执行 DOS 绘图
pub fn execute(folder: &Path) -> Result<ProcessResult> {
    let files = find_dos_files(folder)?;
    if files.is_empty() {
        output::print_skip(&format!("No DOS files found in {}", folder.display()));
        return Ok(ProcessResult::Skipped("no DOS files".to_string()));
    }

    let series = files
        .iter()
        .map(|f| parse_dos_file(f))
        .collect::<Result<Vec<_>>>()?;

    let rows: usize = series.iter().map(DosSeries::len).sum();
    output::print_info(&format!("Parsed {} DOS file(s), {} row(s)", series.len(), rows));
    for s in series.iter().filter(|s| s.is_empty()) {
        output::print_warning(&format!("DOS-{}.csv has no data rows", s.label));
    }

    let mut saved = Vec::with_capacity(DosVariant::ALL.len());
    for variant in DosVariant::ALL {
        let plot = prepare_dos_plot(folder, &series, variant)?;
        let path = variant.output_path(folder);
        render_dos_plot(&plot, &path)?;
        output::print_saved(&path);
        saved.push(path);
    }

    Ok(ProcessResult::Success(saved))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DosbandError;
    use std::fs;

    #[test]
    fn test_no_dos_files_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("band_structure.csv"), "k,Energy (eV)\n").unwrap();

        let result = execute(dir.path()).unwrap();
        assert!(matches!(result, ProcessResult::Skipped(_)));
        assert!(!DosVariant::WithE.output_path(dir.path()).exists());
        assert!(!DosVariant::WithoutE.output_path(dir.path()).exists());
    }

    fn write_dos(folder: &Path, label: &str, scale: f64) {
        let mut content = String::from("Energy,DOS,Intg_DOS\n");
        for i in 0..=60 {
            let energy = -12.0 + 0.25 * i as f64;
            let dos = scale * (1.0 + (energy * 0.7).sin().abs());
            content.push_str(&format!("{},{},{}\n", energy, dos, 0.1 * i as f64));
        }
        fs::write(folder.join(format!("DOS-{}.csv", label)), content).unwrap();
    }

    #[test]
    fn test_rerun_overwrites_same_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let folder = dir.path().join("Si-pbe");
        fs::create_dir(&folder).unwrap();
        write_dos(&folder, "total", 4.0);
        write_dos(&folder, "Si", 3.0);
        write_dos(&folder, "E", 1.0);

        let expected: Vec<_> = DosVariant::ALL
            .iter()
            .map(|v| v.output_path(&folder))
            .collect();

        for _ in 0..2 {
            let result = execute(&folder).unwrap();
            assert_eq!(result, ProcessResult::Success(expected.clone()));
            for path in &expected {
                assert!(fs::metadata(path).unwrap().len() > 0, "{}", path.display());
            }
        }

        let pngs = fs::read_dir(&folder)
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().extension().is_some_and(|ext| ext == "png"))
            .count();
        assert_eq!(pngs, 2);
    }

    #[test]
    fn test_window_without_samples_fails_before_rendering() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("DOS-total.csv"),
            "Energy,DOS,IDOS\n-20,1.0,0.1\n10,2.0,0.2\n",
        )
        .unwrap();

        let err = execute(dir.path()).unwrap_err();
        assert!(matches!(err, DosbandError::EmptyPlotWindow { .. }));
        assert!(!DosVariant::WithE.output_path(dir.path()).exists());
    }
}
