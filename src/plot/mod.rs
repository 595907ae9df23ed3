//! # 绘图模块
//!
//! 使用 `plotters` 生成 DOS 与能带图 (PNG, 300 DPI)。
//!
//! ## 子模块
//! - `style`: DOS 曲线配色规则
//! - `dos`: DOS 图的排序、坐标范围与渲染
//! - `band`: 能带图的刻度布局与渲染
//!
//! ## 依赖关系
//! - 被 `commands/` 调用
//! - 使用 `models/` 的数据结构
//! - 使用 `plotters`, `regex`

pub mod band;
pub mod dos;
pub mod style;

use crate::error::{DosbandError, Result};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// 输出分辨率
pub const DPI: f64 = 300.0;

/// 字体族
pub const FONT: &str = "sans-serif";

/// 费米能级参考线位置 (eV)
pub const FERMI_LEVEL: f64 = 0.0;

static DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("digit pattern is valid"));

/// 英寸换算为像素
pub fn inches(value: f64) -> u32 {
    (value * DPI).round() as u32
}

/// 磅 (pt) 换算为像素
pub fn pt(value: f64) -> f64 {
    value * DPI / 72.0
}

/// 目录名（路径末尾为 `.` 等情况时先取规范路径）
pub fn folder_basename(folder: &Path) -> String {
    folder
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .or_else(|| {
            folder
                .canonicalize()
                .ok()
                .and_then(|p| p.file_name().map(|n| n.to_string_lossy().to_string()))
        })
        .unwrap_or_default()
}

/// 结构名：目录名中第一个 `-` 之前的部分
pub fn structure_name(folder: &Path) -> String {
    let basename = folder_basename(folder);
    basename.split('-').next().unwrap_or_default().to_string()
}

/// 将数字转换为 Unicode 下标，如 `Fe2O3` -> `Fe₂O₃`
pub fn subscript_digits(text: &str) -> String {
    DIGITS
        .replace_all(text, |caps: &regex::Captures| {
            caps[0]
                .chars()
                .map(|c| match c.to_digit(10) {
                    Some(d) => char::from_u32(0x2080 + d).unwrap_or(c),
                    None => c,
                })
                .collect::<String>()
        })
        .to_string()
}

/// 图标题：下标化的结构名加后缀
pub fn plot_title(folder: &Path, suffix: &str) -> String {
    format!("{} {}", subscript_digits(&structure_name(folder)), suffix)
}

/// 按缺失值切分曲线，每段连续的有效点单独绘制
pub fn contiguous_runs(points: &[(Option<f64>, Option<f64>)]) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for point in points {
        match point {
            (Some(x), Some(y)) => current.push((*x, *y)),
            _ => {
                if !current.is_empty() {
                    runs.push(std::mem::take(&mut current));
                }
            }
        }
    }
    if !current.is_empty() {
        runs.push(current);
    }

    runs
}

/// 将曲线段裁剪到坐标矩形 `x` × `y` 内
///
/// 跨越边界的线段在交点处截断；离开矩形后再进入时开始新的一段。
/// 窗口外的点不会被传给后端（plotters 会把它们压到绘图区边缘）。
pub fn clip_runs(runs: &[Vec<(f64, f64)>], x: (f64, f64), y: (f64, f64)) -> Vec<Vec<(f64, f64)>> {
    let inside = |(px, py): (f64, f64)| px >= x.0 && px <= x.1 && py >= y.0 && py <= y.1;
    let mut clipped = Vec::new();

    for run in runs {
        if let [only] = run.as_slice() {
            if inside(*only) {
                clipped.push(vec![*only]);
            }
            continue;
        }

        let mut current: Vec<(f64, f64)> = Vec::new();
        for pair in run.windows(2) {
            match clip_segment(pair[0], pair[1], x, y) {
                Some(segment) => {
                    if segment.entered && !current.is_empty() {
                        clipped.push(std::mem::take(&mut current));
                    }
                    if current.is_empty() {
                        current.push(segment.start);
                    }
                    current.push(segment.end);
                    if segment.left {
                        clipped.push(std::mem::take(&mut current));
                    }
                }
                None => {
                    if !current.is_empty() {
                        clipped.push(std::mem::take(&mut current));
                    }
                }
            }
        }
        if !current.is_empty() {
            clipped.push(current);
        }
    }

    clipped
}

/// 裁剪后的线段
struct ClippedSegment {
    start: (f64, f64),
    end: (f64, f64),
    /// 起点位于矩形外
    entered: bool,
    /// 终点位于矩形外
    left: bool,
}

/// Liang-Barsky 线段裁剪，线段与矩形不相交时返回 None
fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    x: (f64, f64),
    y: (f64, f64),
) -> Option<ClippedSegment> {
    let (dx, dy) = (b.0 - a.0, b.1 - a.1);
    let mut t0 = 0.0_f64;
    let mut t1 = 1.0_f64;

    for (p, q) in [(-dx, a.0 - x.0), (dx, x.1 - a.0), (-dy, a.1 - y.0), (dy, y.1 - a.1)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    Some(ClippedSegment {
        start: (a.0 + t0 * dx, a.1 + t0 * dy),
        end: (a.0 + t1 * dx, a.1 + t1 * dy),
        entered: t0 > 0.0,
        left: t1 < 1.0,
    })
}

/// 在坐标点右侧绘制 E_F 标注（F 为下标）
///
/// `anchor` 为费米能级线右端的像素坐标，标注向右偏移 10 pt。
pub fn draw_fermi_label<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    anchor: (i32, i32),
    font_size: f64,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (x, y) = anchor;
    let x = x + pt(10.0) as i32;

    let main_style = TextStyle::from((FONT, font_size).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center));
    root.draw_text("E", &main_style, (x, y))
        .map_err(DosbandError::render)?;

    let (e_width, _) = root
        .estimate_text_size("E", &main_style)
        .map_err(DosbandError::render)?;

    let sub_style = TextStyle::from((FONT, font_size * 0.7).into_font())
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Top));
    root.draw_text("F", &sub_style, (x + e_width as i32, y))
        .map_err(DosbandError::render)?;

    Ok(())
}
