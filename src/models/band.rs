//! # 能带数据模型
//!
//! 高对称点刻度集合与 k 路径上的能量曲线。
//!
//! ## 依赖关系
//! - 被 `parsers/band_csv.rs` 构造
//! - 被 `plot/band.rs` 使用

/// 高对称点
#[derive(Debug, Clone, PartialEq)]
pub struct HighSymmetryPoint {
    /// 在 k 路径上的位置
    pub position: f64,
    /// 刻度标签，如 Γ, X, M
    pub label: String,
}

/// 高对称点刻度集合（保持文件中的顺序）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandTicks {
    pub points: Vec<HighSymmetryPoint>,
}

impl BandTicks {
    pub fn push(&mut self, position: f64, label: impl Into<String>) {
        self.points.push(HighSymmetryPoint {
            position,
            label: label.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// 横轴范围 [最小刻度, 最大刻度]，空集合返回 None
    pub fn range(&self) -> Option<(f64, f64)> {
        if self.is_empty() {
            return None;
        }
        let min = self
            .points
            .iter()
            .map(|p| p.position)
            .fold(f64::INFINITY, f64::min);
        let max = self
            .points
            .iter()
            .map(|p| p.position)
            .fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}

/// k 路径能量曲线，缺失值记为 None
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BandPath {
    pub k: Vec<Option<f64>>,
    pub energy: Vec<Option<f64>>,
}

impl BandPath {
    pub fn push(&mut self, k: Option<f64>, energy: Option<f64>) {
        self.k.push(k);
        self.energy.push(energy);
    }

    pub fn len(&self) -> usize {
        self.k.len()
    }

    pub fn is_empty(&self) -> bool {
        self.k.is_empty()
    }

    /// 绘图点 (k, energy)
    pub fn plot_points(&self) -> Vec<(Option<f64>, Option<f64>)> {
        self.k
            .iter()
            .zip(self.energy.iter())
            .map(|(k, e)| (*k, *e))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_range() {
        let mut ticks = BandTicks::default();
        assert_eq!(ticks.range(), None);

        ticks.push(1.0, "X");
        ticks.push(0.0, "Γ");
        ticks.push(2.5, "M");
        assert_eq!(ticks.range(), Some((0.0, 2.5)));
    }
}
