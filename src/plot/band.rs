//! # 能带图生成
//!
//! 横轴为 k 路径，在高对称点处放置刻度与竖直网格线；纵轴固定 -2.5 ~ 2.5 eV。
//!
//! ## 依赖关系
//! - 被 `commands/band.rs` 调用
//! - 使用 `models/band.rs`
//! - 使用 `plotters` 渲染图表

use super::{clip_runs, contiguous_runs, draw_fermi_label, inches, plot_title, pt, structure_name};
use super::{FERMI_LEVEL, FONT};
use crate::error::{DosbandError, Result};
use crate::models::{BandPath, BandTicks};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};

/// 纵轴下限 (eV)
pub const ENERGY_MIN: f64 = -2.5;

/// 纵轴上限 (eV)
pub const ENERGY_MAX: f64 = 2.5;

const FIG_SIZE_IN: f64 = 8.0;
const LINE_WIDTH_PT: f64 = 0.85;
const FRAME_PT: f64 = 1.5;
const FONT_PT: f64 = 20.0;

/// 输出文件路径：`<结构名>_bandstructure.png`
pub fn band_output_path(folder: &Path) -> PathBuf {
    folder.join(format!("{}_bandstructure.png", structure_name(folder)))
}

/// 将 mathtext 写法的 Γ 转换为 Unicode 字符
///
/// 标签常以 LaTeX 写法 `$\Gamma$` 给出，这里对常见写法统一显示为 Γ，
/// 其他标签原样保留。
pub fn display_tick_label(label: &str) -> String {
    let bare = label.trim().trim_matches('$').trim_start_matches('\\');
    match bare {
        "Gamma" | "GAMMA" => "Γ".to_string(),
        _ => label.trim().to_string(),
    }
}

/// 横轴刻度
#[derive(Debug, Clone, PartialEq)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// 一张能带图的全部绘制数据
#[derive(Debug, Clone)]
pub struct BandPlot {
    pub title: String,
    /// 横轴范围，恰为 [最小刻度, 最大刻度]
    pub x_range: (f64, f64),
    pub ticks: Vec<AxisTick>,
    /// 连续的 (k, energy) 点段
    pub runs: Vec<Vec<(f64, f64)>>,
}

/// 准备绘图数据
pub fn prepare_band_plot(
    folder: &Path,
    ticks: &BandTicks,
    path: &BandPath,
    points_file: &Path,
) -> Result<BandPlot> {
    let (min, max) = ticks.range().ok_or_else(|| DosbandError::EmptyTicks {
        path: points_file.display().to_string(),
    })?;
    // 只有一个刻度位置时向两侧各展开 0.5
    let x_range = if max > min { (min, max) } else { (min - 0.5, max + 0.5) };

    let axis_ticks = ticks
        .points
        .iter()
        .map(|p| AxisTick {
            position: p.position,
            label: display_tick_label(&p.label),
        })
        .collect();

    Ok(BandPlot {
        title: plot_title(folder, "band structure"),
        x_range,
        ticks: axis_ticks,
        runs: clip_runs(
            &contiguous_runs(&path.plot_points()),
            x_range,
            (ENERGY_MIN, ENERGY_MAX),
        ),
    })
}

/// 渲染能带图到 PNG 文件
pub fn render_band_plot(plot: &BandPlot, output_path: &Path) -> Result<()> {
    let size = inches(FIG_SIZE_IN);
    let root = BitMapBackend::new(output_path, (size, size)).into_drawing_area();
    draw_band_chart(&root, plot)?;
    root.present().map_err(DosbandError::render)?;
    Ok(())
}

fn draw_band_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, plot: &BandPlot) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(DosbandError::render)?;

    let (x_min, x_max) = plot.x_range;
    let frame = BLACK.stroke_width(pt(FRAME_PT) as u32);

    let mut chart = ChartBuilder::on(root)
        .caption(&plot.title, (FONT, pt(FONT_PT)).into_font())
        .margin(pt(15.0) as u32)
        .margin_right(pt(45.0) as u32)
        .x_label_area_size(pt(70.0) as u32)
        .y_label_area_size(pt(60.0) as u32)
        .build_cartesian_2d(x_min..x_max, ENERGY_MIN..ENERGY_MAX)
        .map_err(DosbandError::render)?;

    // 横轴刻度与标题在高对称点处手动绘制
    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_label_formatter(&|v| format!("{:.1}", v))
        .y_desc("energy, eV")
        .label_style((FONT, pt(FONT_PT)))
        .axis_desc_style((FONT, pt(FONT_PT)))
        .axis_style(frame)
        .draw()
        .map_err(DosbandError::render)?;

    for run in &plot.runs {
        chart
            .draw_series(LineSeries::new(
                run.iter().copied(),
                BLUE.stroke_width(pt(LINE_WIDTH_PT).round().max(1.0) as u32),
            ))
            .map_err(DosbandError::render)?;
    }

    chart
        .draw_series(DashedLineSeries::new(
            vec![(x_min, FERMI_LEVEL), (x_max, FERMI_LEVEL)],
            pt(6.0) as u32,
            pt(3.0) as u32,
            frame,
        ))
        .map_err(DosbandError::render)?;

    // 高对称点处的竖直网格线
    chart
        .draw_series(plot.ticks.iter().map(|t| {
            PathElement::new(vec![(t.position, ENERGY_MIN), (t.position, ENERGY_MAX)], frame)
        }))
        .map_err(DosbandError::render)?;

    chart
        .plotting_area()
        .draw(&Rectangle::new([(x_min, ENERGY_MIN), (x_max, ENERGY_MAX)], frame))
        .map_err(DosbandError::render)?;

    let tick_len = pt(8.0) as i32;
    let gap = pt(4.0) as i32;
    let label_style = TextStyle::from((FONT, pt(FONT_PT)).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Center, VPos::Top));
    for tick in &plot.ticks {
        let (x, y) = chart.backend_coord(&(tick.position, ENERGY_MIN));
        root.draw(&PathElement::new(vec![(x, y), (x, y + tick_len)], frame))
            .map_err(DosbandError::render)?;
        root.draw_text(&tick.label, &label_style, (x, y + tick_len + gap))
            .map_err(DosbandError::render)?;
    }

    let (left, bottom) = chart.backend_coord(&(x_min, ENERGY_MIN));
    let (right, _) = chart.backend_coord(&(x_max, ENERGY_MIN));
    let (_, label_height) = root
        .estimate_text_size("Γ", &label_style)
        .map_err(DosbandError::render)?;
    root.draw_text(
        "k-points",
        &label_style,
        ((left + right) / 2, bottom + tick_len + 2 * gap + label_height as i32),
    )
    .map_err(DosbandError::render)?;

    let anchor = chart.backend_coord(&(x_max, FERMI_LEVEL));
    draw_fermi_label(root, anchor, pt(FONT_PT))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::band_csv::{parse_band_content, parse_points_content};

    #[test]
    fn test_ticks_placed_at_points() {
        let ticks = parse_points_content("point,values\nΓ,0\nX,1\nM,2.5\n").unwrap();
        let path = parse_band_content("k,Energy (eV)\n0,-1\n1,0.5\n2.5,1\n").unwrap();

        let plot = prepare_band_plot(
            Path::new("/runs/Fe2O3-pbe"),
            &ticks,
            &path,
            Path::new("band_structure_points.csv"),
        )
        .unwrap();

        let positions: Vec<f64> = plot.ticks.iter().map(|t| t.position).collect();
        let labels: Vec<&str> = plot.ticks.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(positions, vec![0.0, 1.0, 2.5]);
        assert_eq!(labels, vec!["Γ", "X", "M"]);
        assert_eq!(plot.x_range, (0.0, 2.5));
        assert_eq!(plot.title, "Fe₂O₃ band structure");
        assert_eq!(plot.runs.len(), 1);
    }

    #[test]
    fn test_empty_ticks_is_error() {
        let err = prepare_band_plot(
            Path::new("/runs/Si"),
            &BandTicks::default(),
            &BandPath::default(),
            Path::new("band_structure_points.csv"),
        )
        .unwrap_err();
        assert!(matches!(err, DosbandError::EmptyTicks { .. }));
    }

    #[test]
    fn test_single_tick_widens_range() {
        let mut ticks = BandTicks::default();
        ticks.push(1.0, "Γ");
        let plot = prepare_band_plot(
            Path::new("/runs/Si"),
            &ticks,
            &BandPath::default(),
            Path::new("band_structure_points.csv"),
        )
        .unwrap();
        assert_eq!(plot.x_range, (0.5, 1.5));
        assert!(plot.runs.is_empty());
    }

    #[test]
    fn test_band_runs_clipped_to_window() {
        let ticks = parse_points_content("point,values\nΓ,0\nX,1\n").unwrap();
        let path = parse_band_content("k,Energy (eV)\n-0.5,0\n0.5,0\n1,4\n1.5,4\n").unwrap();

        let plot = prepare_band_plot(
            Path::new("/runs/Si"),
            &ticks,
            &path,
            Path::new("band_structure_points.csv"),
        )
        .unwrap();

        assert_eq!(plot.runs.len(), 1);
        let run = &plot.runs[0];
        assert_eq!(run.first(), Some(&(0.0, 0.0)));
        let &(k, energy) = run.last().unwrap();
        assert!((k - 0.8125).abs() < 1e-9);
        assert!((energy - ENERGY_MAX).abs() < 1e-9);
    }

    #[test]
    fn test_display_tick_label() {
        assert_eq!(display_tick_label("$\\Gamma$"), "Γ");
        assert_eq!(display_tick_label("\\Gamma"), "Γ");
        assert_eq!(display_tick_label("GAMMA"), "Γ");
        assert_eq!(display_tick_label(" X "), "X");
        assert_eq!(display_tick_label("G"), "G");
    }

    #[test]
    fn test_band_output_path() {
        assert_eq!(
            band_output_path(Path::new("/runs/Fe2O3-pbe")),
            PathBuf::from("/runs/Fe2O3-pbe/Fe2O3_bandstructure.png")
        );
    }
}
