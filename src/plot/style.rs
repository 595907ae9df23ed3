//! # DOS 曲线配色规则
//!
//! 根据标签和目录内全部元素决定曲线颜色与线型。
//!
//! ## 规则（按优先级）
//! 1. `total` → 黑色实线，绘制在最上层
//! 2. `e` → 深灰色虚线
//! 3. 按目录中真实元素个数 N（元素已按 Mendeleev 序号升序）：
//!    - N=1: 唯一元素 → 蓝
//!    - N=2: 第一个 → 蓝，其他 → 红
//!    - N=3: 第一个 → 蓝；过渡金属 → 灰；第三个 → 红
//!    - N=4: 第一个 → 蓝；过渡金属 → 灰；第三个 → 绿；第四个 → 红
//!    - 其余情况 → 黑色实线
//!
//! 规则并不完备（如 N=3 中间的非过渡金属、N≥5），这些情况保持默认黑色。
//!
//! ## 依赖关系
//! - 被 `plot/dos.rs` 使用
//! - 使用 `models/element.rs`

use crate::models::dos::{E_LABEL, TOTAL_LABEL};
use crate::models::element::is_transition_metal;

use plotters::style::RGBColor;

/// 曲线颜色（取值与 CSS 同名颜色一致）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeriesColor {
    Black,
    DarkGrey,
    Blue,
    Red,
    Grey,
    Green,
}

impl SeriesColor {
    pub fn rgb(self) -> RGBColor {
        match self {
            SeriesColor::Black => RGBColor(0, 0, 0),
            SeriesColor::DarkGrey => RGBColor(169, 169, 169),
            SeriesColor::Blue => RGBColor(0, 0, 255),
            SeriesColor::Red => RGBColor(255, 0, 0),
            SeriesColor::Grey => RGBColor(128, 128, 128),
            SeriesColor::Green => RGBColor(0, 128, 0),
        }
    }
}

/// 线型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// 曲线样式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesStyle {
    pub color: SeriesColor,
    pub line: LineStyle,
    /// 是否绘制在其他曲线之上
    pub on_top: bool,
}

impl SeriesStyle {
    const fn solid(color: SeriesColor) -> Self {
        SeriesStyle {
            color,
            line: LineStyle::Solid,
            on_top: false,
        }
    }
}

/// 计算曲线样式
///
/// `elements` 为目录中出现的全部元素，需已按 Mendeleev 序号升序排列。
pub fn classify(label: &str, elements: &[String]) -> SeriesStyle {
    if label.eq_ignore_ascii_case(TOTAL_LABEL) {
        return SeriesStyle {
            on_top: true,
            ..SeriesStyle::solid(SeriesColor::Black)
        };
    }
    if label.eq_ignore_ascii_case(E_LABEL) {
        return SeriesStyle {
            line: LineStyle::Dashed,
            ..SeriesStyle::solid(SeriesColor::DarkGrey)
        };
    }

    let elements: Vec<&str> = elements
        .iter()
        .map(String::as_str)
        .filter(|e| !e.eq_ignore_ascii_case(E_LABEL))
        .collect();

    let color = match elements.as_slice() {
        [_] => Some(SeriesColor::Blue),
        [first, _] => Some(if label == *first {
            SeriesColor::Blue
        } else {
            SeriesColor::Red
        }),
        [first, _, third] => {
            if label == *first {
                Some(SeriesColor::Blue)
            } else if is_transition_metal(label) {
                Some(SeriesColor::Grey)
            } else if label == *third {
                Some(SeriesColor::Red)
            } else {
                None
            }
        }
        [first, _, third, fourth] => {
            if label == *first {
                Some(SeriesColor::Blue)
            } else if is_transition_metal(label) {
                Some(SeriesColor::Grey)
            } else if label == *third {
                Some(SeriesColor::Green)
            } else if label == *fourth {
                Some(SeriesColor::Red)
            } else {
                None
            }
        }
        _ => None,
    };

    SeriesStyle::solid(color.unwrap_or(SeriesColor::Black))
}
