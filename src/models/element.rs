//! # 元素常量表
//!
//! 提供 Mendeleev 序号表和过渡金属集合，用于 DOS 曲线的排序与配色。
//!
//! ## 说明
//! Mendeleev 序号在这里只是一个确定性的排序键，不参与任何物理计算。
//!
//! ## 依赖关系
//! - 被 `parsers/dos_csv.rs`, `plot/style.rs`, `plot/dos.rs` 使用
//! - 纯静态数据，进程内只初始化一次

use regex::Regex;
use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

/// Mendeleev 序号表 (元素符号 -> 序号)
pub static MENDELEEV_NUMBERS: LazyLock<HashMap<&'static str, u32>> = LazyLock::new(|| {
    [
        ("H", 92), ("He", 98), ("Li", 1), ("Be", 67), ("B", 72), ("C", 77),
        ("N", 82), ("O", 87), ("F", 93), ("Ne", 99), ("Na", 2), ("Mg", 68),
        ("Al", 73), ("Si", 78), ("P", 83), ("S", 88), ("Cl", 94), ("Ar", 100),
        ("K", 3), ("Ca", 7), ("Sc", 11), ("Ti", 43), ("V", 46), ("Cr", 49),
        ("Mn", 52), ("Fe", 55), ("Co", 58), ("Ni", 61), ("Cu", 64), ("Zn", 69),
        ("Ga", 74), ("Ge", 79), ("As", 84), ("Se", 89), ("Br", 95), ("Kr", 101),
        ("Rb", 4), ("Sr", 8), ("Y", 12), ("Zr", 44), ("Nb", 47), ("Mo", 50),
        ("Tc", 53), ("Ru", 56), ("Rh", 59), ("Pd", 62), ("Ag", 65), ("Cd", 70),
        ("In", 75), ("Sn", 80), ("Sb", 85), ("Te", 90), ("I", 96), ("Xe", 102),
        ("Cs", 5), ("Ba", 9), ("La", 13), ("Ce", 15), ("Pr", 17), ("Nd", 19),
        ("Pm", 21), ("Sm", 23), ("Eu", 25), ("Gd", 27), ("Tb", 29), ("Dy", 31),
        ("Ho", 33), ("Er", 35), ("Tm", 37), ("Yb", 39), ("Lu", 41), ("Hf", 45),
        ("Ta", 48), ("W", 51), ("Re", 54), ("Os", 57), ("Ir", 60), ("Pt", 63),
        ("Au", 66), ("Hg", 71), ("Tl", 76), ("Pb", 81), ("Bi", 86), ("Po", 91),
        ("At", 97), ("Rn", 103), ("Fr", 6), ("Ra", 10), ("Ac", 14), ("Th", 16),
        ("Pa", 18), ("U", 20), ("Np", 22), ("Pu", 24), ("Am", 26), ("Cm", 28),
        ("Bk", 30), ("Cf", 32), ("Es", 34), ("Fm", 36), ("Md", 38), ("No", 40),
        ("Lr", 42),
    ]
    .into_iter()
    .collect()
});

/// 过渡金属集合
pub static TRANSITION_METALS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", // 3d
        "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", // 4d
        "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", // 5d
    ]
    .into_iter()
    .collect()
});

static ELEMENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][a-z]?").expect("element pattern is valid"));

/// 查询 Mendeleev 序号，未知符号返回 None
pub fn mendeleev_number(symbol: &str) -> Option<u32> {
    MENDELEEV_NUMBERS.get(symbol).copied()
}

/// 排序用的序号：未知符号排在所有已知元素之后
pub fn mendeleev_rank(symbol: &str) -> u32 {
    mendeleev_number(symbol).unwrap_or(u32::MAX)
}

pub fn is_transition_metal(symbol: &str) -> bool {
    TRANSITION_METALS.contains(symbol)
}

/// 从标签中提取元素符号（大写字母 + 可选的一个小写字母）
///
/// 不校验是否为真实元素，例如 `"Fe2O3"` -> `["Fe", "O"]`。
pub fn extract_elements(label: &str) -> Vec<String> {
    ELEMENT_PATTERN
        .find_iter(label)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// 去重并按 Mendeleev 序号升序排列
///
/// 序号相同（均为未知符号）时按符号字母序，保证结果确定。
pub fn sort_by_mendeleev<I, S>(symbols: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let unique: BTreeSet<String> = symbols.into_iter().map(Into::into).collect();
    let mut sorted: Vec<String> = unique.into_iter().collect();
    sorted.sort_by_key(|s| mendeleev_rank(s));
    sorted
}
