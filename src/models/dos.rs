//! # DOS 数据模型
//!
//! 一个 `DOS-<label>.csv` 文件对应一条 DOS 曲线。
//!
//! ## 说明
//! 数值列均为 `Option<f64>`：无法解析的单元格记为 `None`，绘图时形成断点，
//! 不会中断处理。
//!
//! ## 依赖关系
//! - 被 `parsers/dos_csv.rs` 构造
//! - 被 `plot/dos.rs` 使用
//! - 使用 `models/element.rs` 提取元素

use super::element::extract_elements;

/// 总 DOS 的标签
pub const TOTAL_LABEL: &str = "total";

/// 特殊的 "E" 曲线标签
pub const E_LABEL: &str = "e";

/// 单条 DOS 曲线
#[derive(Debug, Clone, PartialEq)]
pub struct DosSeries {
    /// 显示标签（文件名去掉 `DOS-` 前缀与扩展名）
    pub label: String,

    /// 能量 (eV)
    pub energy: Vec<Option<f64>>,

    /// 态密度
    pub dos: Vec<Option<f64>>,

    /// 积分态密度
    pub integrated_dos: Vec<Option<f64>>,
}

impl DosSeries {
    pub fn new(label: impl Into<String>) -> Self {
        DosSeries {
            label: label.into(),
            energy: Vec::new(),
            dos: Vec::new(),
            integrated_dos: Vec::new(),
        }
    }

    /// 追加一行数据
    pub fn push(&mut self, energy: Option<f64>, dos: Option<f64>, integrated_dos: Option<f64>) {
        self.energy.push(energy);
        self.dos.push(dos);
        self.integrated_dos.push(integrated_dos);
    }

    pub fn len(&self) -> usize {
        self.energy.len()
    }

    pub fn is_empty(&self) -> bool {
        self.energy.is_empty()
    }

    /// 是否为 "E" 曲线（不区分大小写）
    pub fn is_e(&self) -> bool {
        self.label.eq_ignore_ascii_case(E_LABEL)
    }

    /// 标签中包含的元素符号
    pub fn elements(&self) -> Vec<String> {
        extract_elements(&self.label)
    }

    /// 绘图点 (DOS, energy)，横轴为 DOS、纵轴为能量
    pub fn plot_points(&self) -> Vec<(Option<f64>, Option<f64>)> {
        self.dos
            .iter()
            .zip(self.energy.iter())
            .map(|(d, e)| (*d, *e))
            .collect()
    }

    /// 能量落在 [min, max] 区间内的 DOS 值，缺失值不计入
    pub fn dos_in_window(&self, min: f64, max: f64) -> impl Iterator<Item = f64> + '_ {
        self.energy
            .iter()
            .zip(self.dos.iter())
            .filter_map(move |(e, d)| match (e, d) {
                (Some(e), Some(d)) if *e >= min && *e <= max => Some(*d),
                _ => None,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_special_labels() {
        assert!(DosSeries::new("E").is_e());
        assert!(DosSeries::new("e").is_e());
        assert!(!DosSeries::new("Fe").is_e());
    }

    #[test]
    fn test_dos_in_window_skips_missing() {
        let mut series = DosSeries::new("Fe");
        series.push(Some(-9.0), Some(100.0), None);
        series.push(Some(-1.0), Some(3.0), None);
        series.push(None, Some(50.0), None);
        series.push(Some(0.5), None, None);
        series.push(Some(2.0), Some(4.0), Some(1.0));

        let values: Vec<f64> = series.dos_in_window(-8.0, 2.0).collect();
        assert_eq!(values, vec![3.0, 4.0]);
    }
}
