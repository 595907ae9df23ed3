//! # 能带绘图流程
//!
//! 需要 `band_structure_points.csv` 与 `band_structure.csv` 同时存在，
//! 缺少任意一个时跳过该目录。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `parsers/band_csv.rs`, `plot/band.rs`
//! - 使用 `utils/output.rs`

use crate::batch::ProcessResult;
use crate::error::Result;
use crate::parsers::band_csv::{parse_band_file, parse_points_file, BAND_FILE, POINTS_FILE};
use crate::plot::band::{band_output_path, prepare_band_plot, render_band_plot};
use crate::utils::output;

use std::path::Path;

/// 对单个目录执行能带绘图
pub fn execute(folder: &Path) -> Result<ProcessResult> {
    let points_file = folder.join(POINTS_FILE);
    let band_file = folder.join(BAND_FILE);

    let missing: Vec<&str> = [(&points_file, POINTS_FILE), (&band_file, BAND_FILE)]
        .into_iter()
        .filter(|(path, _)| !path.is_file())
        .map(|(_, name)| name)
        .collect();

    if !missing.is_empty() {
        output::print_skip(&format!(
            "Band structure files not found in {}: {}",
            folder.display(),
            missing.join(", ")
        ));
        return Ok(ProcessResult::Skipped(format!("missing {}", missing.join(", "))));
    }

    let ticks = parse_points_file(&points_file)?;
    let path = parse_band_file(&band_file)?;
    if path.is_empty() {
        output::print_warning(&format!("{} has no data rows", band_file.display()));
    } else {
        output::print_info(&format!(
            "{} high-symmetry point(s), {} k-point(s)",
            ticks.points.len(),
            path.len()
        ));
    }

    let plot = prepare_band_plot(folder, &ticks, &path, &points_file)?;
    let output_path = band_output_path(folder);
    render_band_plot(&plot, &output_path)?;
    output::print_saved(&output_path);

    Ok(ProcessResult::Success(vec![output_path]))
}
