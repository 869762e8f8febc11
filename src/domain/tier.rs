// ==========================================
// FRA 参考目录 - 地区潜力分级领域模型
// ==========================================
// 职责: 按 CFR 认定潜力对地区分级
// 红线: 每个地区恰好属于一个等级
// ==========================================

use crate::domain::types::{normalize_key, PercentBounds, PotentialLevel};
use serde::{Deserialize, Serialize};

// ==========================================
// PotentialTier - 潜力等级
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialTier {
    #[serde(rename = "label")]
    pub level: PotentialLevel, // 等级 (唯一键)

    pub districts: Vec<String>, // 所属地区 (有序, 非空)

    #[serde(default)]
    pub characteristics: String, // 特征说明

    pub cfr_potential_percent: String, // CFR 潜力区间 (原文)
    pub color: String,                 // 图例颜色 (#rrggbb)
}

impl PotentialTier {
    /// 展示标签
    pub fn label(&self) -> &'static str {
        self.level.label()
    }

    /// CFR 潜力区间数值视图（已校验的目录中必定存在）
    pub fn cfr_bounds(&self) -> Option<PercentBounds> {
        PercentBounds::parse(&self.cfr_potential_percent)
    }

    /// 是否包含地区（忽略首尾空白与大小写）
    pub fn contains(&self, district: &str) -> bool {
        let key = normalize_key(district);
        self.districts.iter().any(|d| normalize_key(d) == key)
    }

    /// 逗号拼接的地区列表
    pub fn joined_districts(&self) -> String {
        self.districts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PotentialTier {
        PotentialTier {
            level: PotentialLevel::VeryHigh,
            districts: vec!["Kandhamal".to_string(), "Koraput".to_string()],
            characteristics: "High tribal population".to_string(),
            cfr_potential_percent: "> 70%".to_string(),
            color: "#27ae60".to_string(),
        }
    }

    #[test]
    fn test_contains_ignores_case() {
        let tier = sample();
        assert!(tier.contains("koraput"));
        assert!(tier.contains(" Kandhamal "));
        assert!(!tier.contains("Puri"));
    }

    #[test]
    fn test_contains_ignores_padding_on_stored_name() {
        let mut tier = sample();
        tier.districts.push("Puri ".to_string());
        assert!(tier.contains("Puri"));
        assert!(tier.contains("PURI"));
    }

    #[test]
    fn test_label_and_bounds() {
        let tier = sample();
        assert_eq!(tier.label(), "Very High Potential");
        assert_eq!(tier.cfr_bounds(), Some(PercentBounds { lower: 70, upper: 100 }));
        assert_eq!(tier.joined_districts(), "Kandhamal, Koraput");
    }

    #[test]
    fn test_serde_uses_label_key() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["label"], "Very High Potential");
        assert!(json.get("level").is_none());
    }
}
