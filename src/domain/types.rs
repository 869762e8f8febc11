// ==========================================
// FRA 参考目录 - 领域类型定义
// ==========================================
// 职责: 潜力等级 / CFR 百分比区间 / 颜色格式
// ==========================================

use serde::{Deserialize, Serialize};
use std::fmt;

// ==========================================
// 潜力等级 (Potential Level)
// ==========================================
// 顺序: VeryHigh < High < Moderate < Low < VeryLow (由高到低排列)
// 序列化格式: 展示标签 (与目录文件一致)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PotentialLevel {
    #[serde(rename = "Very High Potential")]
    VeryHigh,
    #[serde(rename = "High Potential")]
    High,
    #[serde(rename = "Moderate Potential")]
    Moderate,
    #[serde(rename = "Low Potential")]
    Low,
    #[serde(rename = "Very Low Potential")]
    VeryLow,
}

impl PotentialLevel {
    /// 全部等级，由高到低
    pub const ALL: [PotentialLevel; 5] = [
        PotentialLevel::VeryHigh,
        PotentialLevel::High,
        PotentialLevel::Moderate,
        PotentialLevel::Low,
        PotentialLevel::VeryLow,
    ];

    /// 展示标签
    pub fn label(&self) -> &'static str {
        match self {
            PotentialLevel::VeryHigh => "Very High Potential",
            PotentialLevel::High => "High Potential",
            PotentialLevel::Moderate => "Moderate Potential",
            PotentialLevel::Low => "Low Potential",
            PotentialLevel::VeryLow => "Very Low Potential",
        }
    }

    /// 从展示标签解析（忽略首尾空白与大小写）
    pub fn from_label(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|level| level.label().eq_ignore_ascii_case(s))
    }
}

impl fmt::Display for PotentialLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

// ==========================================
// CFR 百分比区间 (Percent Bounds)
// ==========================================
// 原文为自由文本（"> 70%" / "50-70%" / "< 10%"），展示时保留原文，
// 这里只提供数值视图用于校验等级顺序
// 端点为近似值: ">"/"<" 在原文中不含端点，这里不区分开闭
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PercentBounds {
    pub lower: u8, // 下端点
    pub upper: u8, // 上端点
}

impl PercentBounds {
    /// 解析百分比文本
    ///
    /// # 支持格式
    /// - `> N%`: N..100（N 本身不在原文区间内）
    /// - `< N%`: 0..N（N 本身不在原文区间内）
    /// - `A-B%`: A..B
    ///
    /// # 返回
    /// - None: 格式不识别，或数值超出 0..=100，或 A > B
    pub fn parse(text: &str) -> Option<Self> {
        let body = text.trim().strip_suffix('%')?.trim();

        let bounds = if let Some(rest) = body.strip_prefix('>') {
            PercentBounds {
                lower: parse_percent(rest)?,
                upper: 100,
            }
        } else if let Some(rest) = body.strip_prefix('<') {
            PercentBounds {
                lower: 0,
                upper: parse_percent(rest)?,
            }
        } else {
            let (lo, hi) = body.split_once('-')?;
            PercentBounds {
                lower: parse_percent(lo)?,
                upper: parse_percent(hi)?,
            }
        };

        (bounds.lower <= bounds.upper).then_some(bounds)
    }
}

impl fmt::Display for PercentBounds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}%", self.lower, self.upper)
    }
}

fn parse_percent(s: &str) -> Option<u8> {
    let value: u8 = s.trim().trim_end_matches('%').trim().parse().ok()?;
    (value <= 100).then_some(value)
}

// ==========================================
// 名称比较
// ==========================================

/// 比较用的规范化键（去空白、忽略 ASCII 大小写）
pub fn normalize_key(s: &str) -> String {
    s.trim().to_ascii_lowercase()
}

// ==========================================
// 颜色格式
// ==========================================

/// 判断是否为 `#rrggbb` 格式的颜色
pub fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}
