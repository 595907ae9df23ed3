//! # DOS 图生成
//!
//! 纵轴为能量（固定 -8 ~ 2 eV），横轴为态密度。每个目录生成两张图：
//! 包含 "E" 曲线的 `<目录名>_DOS.png` 与不包含的 `<目录名>_DOS_noE.png`。
//!
//! ## 流程
//! 1. 按标签排序曲线（total 最前）
//! 2. 统计能量窗口内的 DOS 最大值，留 10% 余量作为横轴上限
//! 3. 为每条曲线计算配色后渲染
//!
//! ## 依赖关系
//! - 被 `commands/dos.rs` 调用
//! - 使用 `models/dos.rs`, `models/element.rs`, `plot/style.rs`
//! - 使用 `plotters` 渲染图表

use super::style::{classify, LineStyle, SeriesStyle};
use super::{clip_runs, contiguous_runs, draw_fermi_label, folder_basename, inches, plot_title, pt};
use super::{FERMI_LEVEL, FONT};
use crate::error::{DosbandError, Result};
use crate::models::element::{mendeleev_rank, sort_by_mendeleev};
use crate::models::dos::TOTAL_LABEL;
use crate::models::DosSeries;

use plotters::coord::types::RangedCoordf64;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::series::DashedLineSeries;
use std::path::{Path, PathBuf};

/// 能量窗口下限 (eV)
pub const ENERGY_MIN: f64 = -8.0;

/// 能量窗口上限 (eV)
pub const ENERGY_MAX: f64 = 2.0;

/// 横轴上限相对最大值的余量
pub const X_PADDING: f64 = 0.1;

const FIG_WIDTH_IN: f64 = 8.0;
const FIG_HEIGHT_IN: f64 = 15.0;
const LINE_WIDTH_PT: f64 = 5.0;
const FERMI_LINE_PT: f64 = 3.0;
const SPINE_PT: f64 = 2.5;
const FONT_PT: f64 = 35.0;
const LEGEND_FONT_PT: f64 = 30.0;
const LEGEND_SWATCH_PT: f64 = 20.0;
/// 图例中线段所占宽度，需大于线段长度，否则线段会压住文字
const LEGEND_AREA_PT: f64 = 28.0;

/// 两种输出图
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DosVariant {
    /// 包含 E 曲线
    WithE,
    /// 不含 E 曲线
    WithoutE,
}

impl DosVariant {
    pub const ALL: [DosVariant; 2] = [DosVariant::WithE, DosVariant::WithoutE];

    pub fn includes_e(self) -> bool {
        matches!(self, DosVariant::WithE)
    }

    /// 输出文件路径（位于输入目录内，重复运行时覆盖）
    pub fn output_path(self, folder: &Path) -> PathBuf {
        let name = folder_basename(folder);
        let file = match self {
            DosVariant::WithE => format!("{}_DOS.png", name),
            DosVariant::WithoutE => format!("{}_DOS_noE.png", name),
        };
        folder.join(file)
    }
}

/// 曲线排序键：total < 已知元素 (按序号, 标签) < 未知标签 (按标签) < 被排除的 E
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub enum SortKey<'a> {
    Total,
    Ranked(u32, &'a str),
    Excluded,
}

pub fn sort_key(label: &str, include_e: bool) -> SortKey<'_> {
    if label.eq_ignore_ascii_case(TOTAL_LABEL) {
        SortKey::Total
    } else if label == "E" && !include_e {
        SortKey::Excluded
    } else {
        SortKey::Ranked(mendeleev_rank(label), label)
    }
}

/// 稳定排序
pub fn sort_series(series: &mut [DosSeries], include_e: bool) {
    series.sort_by(|a, b| sort_key(&a.label, include_e).cmp(&sort_key(&b.label, include_e)));
}

/// 目录内全部元素，去重后按 Mendeleev 序号升序
pub fn folder_elements(series: &[DosSeries]) -> Vec<String> {
    sort_by_mendeleev(series.iter().flat_map(|s| s.elements()))
}

/// 横轴上限：能量窗口内 DOS 最大值加 10% 余量
///
/// 窗口内没有任何样本时返回 `EmptyPlotWindow`；最大值不为正时使用 1.0，
/// 避免坐标范围退化。
pub fn x_upper_bound(series: &[DosSeries], folder: &Path) -> Result<f64> {
    let max = series
        .iter()
        .flat_map(|s| s.dos_in_window(ENERGY_MIN, ENERGY_MAX))
        .fold(None, |acc: Option<f64>, v| Some(acc.map_or(v, |m| m.max(v))))
        .ok_or_else(|| DosbandError::EmptyPlotWindow {
            folder: folder.display().to_string(),
            min: ENERGY_MIN,
            max: ENERGY_MAX,
        })?;

    if max > 0.0 {
        Ok(max + X_PADDING * max)
    } else {
        Ok(1.0)
    }
}

/// 已确定样式的曲线
#[derive(Debug, Clone)]
pub struct StyledSeries {
    pub label: String,
    pub style: SeriesStyle,
    /// 连续的 (DOS, energy) 点段
    pub runs: Vec<Vec<(f64, f64)>>,
}

/// 一张 DOS 图的全部绘制数据
#[derive(Debug, Clone)]
pub struct DosPlot {
    pub title: String,
    pub x_max: f64,
    pub series: Vec<StyledSeries>,
}

impl DosPlot {
    pub fn labels(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.label.as_str()).collect()
    }
}

/// 准备绘图数据（排序、配色、横轴范围）
pub fn prepare_dos_plot(folder: &Path, series: &[DosSeries], variant: DosVariant) -> Result<DosPlot> {
    let include_e = variant.includes_e();
    let x_max = x_upper_bound(series, folder)?;
    let elements = folder_elements(series);

    let mut ordered = series.to_vec();
    sort_series(&mut ordered, include_e);

    let styled = ordered
        .iter()
        .filter(|s| include_e || !s.is_e())
        .map(|s| StyledSeries {
            label: s.label.clone(),
            style: classify(&s.label, &elements),
            runs: clip_runs(
                &contiguous_runs(&s.plot_points()),
                (0.0, x_max),
                (ENERGY_MIN, ENERGY_MAX),
            ),
        })
        .collect();

    Ok(DosPlot {
        title: plot_title(folder, "DOS"),
        x_max,
        series: styled,
    })
}

/// 渲染 DOS 图到 PNG 文件
pub fn render_dos_plot(plot: &DosPlot, output_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(output_path, (inches(FIG_WIDTH_IN), inches(FIG_HEIGHT_IN)))
        .into_drawing_area();
    draw_dos_chart(&root, plot)?;
    root.present().map_err(DosbandError::render)?;
    Ok(())
}

fn draw_run<DB: DrawingBackend>(
    chart: &mut ChartContext<'_, DB, Cartesian2d<RangedCoordf64, RangedCoordf64>>,
    run: &[(f64, f64)],
    style: &SeriesStyle,
    label: Option<&str>,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let color = style.color.rgb();
    let width = pt(LINE_WIDTH_PT) as u32;
    let shape = color.stroke_width(width);

    let anno = match style.line {
        LineStyle::Solid => chart
            .draw_series(LineSeries::new(run.iter().copied(), shape))
            .map_err(DosbandError::render)?,
        LineStyle::Dashed => chart
            .draw_series(DashedLineSeries::new(
                run.iter().copied(),
                pt(12.0) as u32,
                pt(6.0) as u32,
                shape,
            ))
            .map_err(DosbandError::render)?,
    };

    if let Some(label) = label {
        let legend_len = pt(LEGEND_SWATCH_PT) as i32;
        anno.label(label).legend(move |(x, y)| {
            PathElement::new(vec![(x, y), (x + legend_len, y)], color.stroke_width(width))
        });
    }

    Ok(())
}

/// 绘制 DOS 图的核心逻辑
fn draw_dos_chart<DB: DrawingBackend>(root: &DrawingArea<DB, Shift>, plot: &DosPlot) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(DosbandError::render)?;

    let mut chart = ChartBuilder::on(root)
        .caption(&plot.title, (FONT, pt(FONT_PT)).into_font())
        .margin(pt(20.0) as u32)
        .margin_right(pt(70.0) as u32)
        .x_label_area_size(pt(10.0) as u32)
        .y_label_area_size(pt(120.0) as u32)
        .build_cartesian_2d(0.0..plot.x_max, ENERGY_MIN..ENERGY_MAX)
        .map_err(DosbandError::render)?;

    // 横轴不显示刻度，纵轴只显示整数刻度
    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_labels((ENERGY_MAX - ENERGY_MIN) as usize + 1)
        .y_label_formatter(&|v| format!("{:.0}", v))
        .y_desc("energy, eV")
        .label_style((FONT, pt(FONT_PT)))
        .axis_desc_style((FONT, pt(FONT_PT)))
        .axis_style(BLACK.stroke_width(pt(SPINE_PT) as u32))
        .draw()
        .map_err(DosbandError::render)?;

    for series in &plot.series {
        for (i, run) in series.runs.iter().enumerate() {
            let label = (i == 0).then_some(series.label.as_str());
            draw_run(&mut chart, run, &series.style, label)?;
        }
    }

    // total 在图例中排第一，但需要覆盖在其他曲线之上
    for series in plot.series.iter().filter(|s| s.style.on_top) {
        for run in &series.runs {
            draw_run(&mut chart, run, &series.style, None)?;
        }
    }

    chart
        .draw_series(DashedLineSeries::new(
            vec![(0.0, FERMI_LEVEL), (plot.x_max, FERMI_LEVEL)],
            pt(8.0) as u32,
            pt(4.0) as u32,
            BLACK.stroke_width(pt(FERMI_LINE_PT) as u32),
        ))
        .map_err(DosbandError::render)?;

    chart
        .plotting_area()
        .draw(&Rectangle::new(
            [(0.0, ENERGY_MIN), (plot.x_max, ENERGY_MAX)],
            BLACK.stroke_width(pt(SPINE_PT) as u32),
        ))
        .map_err(DosbandError::render)?;

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::LowerRight)
        .legend_area_size(pt(LEGEND_AREA_PT) as u32)
        .label_font((FONT, pt(LEGEND_FONT_PT)).into_font())
        .draw()
        .map_err(DosbandError::render)?;

    let anchor = chart.backend_coord(&(plot.x_max, FERMI_LEVEL));
    draw_fermi_label(root, anchor, pt(FONT_PT))?;

    Ok(())
}
