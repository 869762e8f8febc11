// ==========================================
// FRA 参考目录 - 目录不变量校验器
// ==========================================
// 职责: 唯一键 / 地区覆盖 / 字段格式 / 等级顺序 校验
// 规则: 一次收集全部违规，由调用方折叠为 CatalogError
// ==========================================

use crate::catalog::error::CatalogError;
use crate::domain::{
    is_hex_color, normalize_key, PercentBounds, PotentialLevel, PotentialTier, RightsCategory,
};
use std::collections::{HashMap, HashSet};

pub struct CatalogValidator;

impl CatalogValidator {
    /// 校验地区主表（非空、唯一）
    pub fn validate_districts(districts: &[String]) -> Vec<CatalogError> {
        let mut violations = Vec::new();
        let mut seen = HashSet::new();

        for district in districts {
            if district.trim().is_empty() {
                violations.push(CatalogError::EmptyField {
                    entity: "district registry".to_string(),
                    field: "district".to_string(),
                });
                continue;
            }
            if !seen.insert(normalize_key(district)) {
                violations.push(CatalogError::DuplicateDistrict(district.clone()));
            }
        }

        violations
    }

    /// 校验权利类别（名称唯一、说明非空、颜色格式）
    pub fn validate_categories(categories: &[RightsCategory]) -> Vec<CatalogError> {
        let mut violations = Vec::new();
        let mut seen = HashSet::new();

        for category in categories {
            let entity = format!("category '{}'", category.name);

            if category.name.trim().is_empty() {
                violations.push(CatalogError::EmptyField {
                    entity: "category".to_string(),
                    field: "name".to_string(),
                });
            } else if !seen.insert(normalize_key(&category.name)) {
                violations.push(CatalogError::DuplicateCategory(category.name.clone()));
            }

            if category.description.trim().is_empty() {
                violations.push(CatalogError::EmptyField {
                    entity: entity.clone(),
                    field: "description".to_string(),
                });
            }

            if !is_hex_color(&category.color) {
                violations.push(CatalogError::InvalidColor {
                    entity,
                    color: category.color.clone(),
                });
            }
        }

        violations
    }

    /// 校验潜力等级
    ///
    /// # 规则
    /// 1. 五个等级各出现一次
    /// 2. 每个等级非空，颜色与百分比区间格式正确
    /// 3. 等级引用的地区均在主表中，且不被两个等级同时引用
    /// 4. 主表中的每个地区均被某个等级引用
    /// 5. 由高到低，下一等级的上界不超过上一等级的下界
    pub fn validate_tiers(tiers: &[PotentialTier], districts: &[String]) -> Vec<CatalogError> {
        let mut violations = Vec::new();

        // 规则1: 等级唯一且齐全
        let mut levels = HashSet::new();
        for tier in tiers {
            if !levels.insert(tier.level) {
                violations.push(CatalogError::DuplicateTier(tier.label().to_string()));
            }
        }
        for level in PotentialLevel::ALL {
            if !levels.contains(&level) {
                violations.push(CatalogError::MissingTier(level.label().to_string()));
            }
        }

        // 规则2: 字段格式
        for tier in tiers {
            let entity = format!("tier '{}'", tier.label());

            if tier.districts.is_empty() {
                violations.push(CatalogError::EmptyTier(tier.label().to_string()));
            }
            if !is_hex_color(&tier.color) {
                violations.push(CatalogError::InvalidColor {
                    entity,
                    color: tier.color.clone(),
                });
            }
            if tier.cfr_bounds().is_none() {
                violations.push(CatalogError::InvalidPercentRange {
                    tier: tier.label().to_string(),
                    value: tier.cfr_potential_percent.clone(),
                });
            }
        }

        // 规则3/4: 地区覆盖
        let known: HashSet<String> = districts.iter().map(|d| normalize_key(d)).collect();
        let mut assigned: HashMap<String, PotentialLevel> = HashMap::new();

        for tier in tiers {
            for district in &tier.districts {
                let key = normalize_key(district);
                if !known.contains(&key) {
                    violations.push(CatalogError::UnknownDistrict {
                        tier: tier.label().to_string(),
                        district: district.clone(),
                    });
                    continue;
                }
                if let Some(first) = assigned.get(&key) {
                    violations.push(CatalogError::DistrictAssignedTwice {
                        district: district.clone(),
                        first: first.label().to_string(),
                        second: tier.label().to_string(),
                    });
                    continue;
                }
                assigned.insert(key, tier.level);
            }
        }

        for district in districts {
            if !district.trim().is_empty() && !assigned.contains_key(&normalize_key(district)) {
                violations.push(CatalogError::UnassignedDistrict(district.clone()));
            }
        }

        // 规则5: 区间顺序
        let mut ordered: Vec<(&PotentialTier, PercentBounds)> = tiers
            .iter()
            .filter_map(|tier| tier.cfr_bounds().map(|bounds| (tier, bounds)))
            .collect();
        ordered.sort_by_key(|(tier, _)| tier.level);

        for pair in ordered.windows(2) {
            let (above, above_bounds) = pair[0];
            let (tier, bounds) = pair[1];
            if above.level != tier.level && bounds.upper > above_bounds.lower {
                violations.push(CatalogError::TierOrderViolation {
                    tier: tier.label().to_string(),
                    range: tier.cfr_potential_percent.clone(),
                    above: above.label().to_string(),
                });
            }
        }

        violations
    }

    /// 全量校验
    pub fn validate(
        region: &str,
        categories: &[RightsCategory],
        tiers: &[PotentialTier],
        districts: &[String],
    ) -> Vec<CatalogError> {
        let mut violations = Vec::new();

        if region.trim().is_empty() {
            violations.push(CatalogError::EmptyField {
                entity: "catalog".to_string(),
                field: "region".to_string(),
            });
        }

        violations.extend(Self::validate_districts(districts));
        violations.extend(Self::validate_categories(categories));
        violations.extend(Self::validate_tiers(tiers, districts));

        if !violations.is_empty() {
            tracing::debug!(count = violations.len(), "目录校验发现违规");
        }

        violations
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tier(level: PotentialLevel, pct: &str, districts: &[&str]) -> PotentialTier {
        PotentialTier {
            level,
            districts: districts.iter().map(|d| d.to_string()).collect(),
            characteristics: String::new(),
            cfr_potential_percent: pct.to_string(),
            color: "#27ae60".to_string(),
        }
    }

    fn five_tiers() -> Vec<PotentialTier> {
        vec![
            tier(PotentialLevel::VeryHigh, "> 70%", &["A"]),
            tier(PotentialLevel::High, "50-70%", &["B"]),
            tier(PotentialLevel::Moderate, "30-50%", &["C"]),
            tier(PotentialLevel::Low, "10-30%", &["D"]),
            tier(PotentialLevel::VeryLow, "< 10%", &["E"]),
        ]
    }

    fn districts(names: &[&str]) -> Vec<String> {
        names.iter().map(|d| d.to_string()).collect()
    }

    #[test]
    fn test_valid_tiers_pass() {
        let violations =
            CatalogValidator::validate_tiers(&five_tiers(), &districts(&["A", "B", "C", "D", "E"]));
        assert!(violations.is_empty(), "{:?}", violations);
    }

    #[test]
    fn test_unassigned_district() {
        let violations = CatalogValidator::validate_tiers(
            &five_tiers(),
            &districts(&["A", "B", "C", "D", "E", "Subarnapur"]),
        );
        assert_eq!(
            violations,
            vec![CatalogError::UnassignedDistrict("Subarnapur".to_string())]
        );
    }

    #[test]
    fn test_unknown_and_twice_assigned_district() {
        let mut tiers = five_tiers();
        tiers[1].districts.push("A".to_string());
        tiers[2].districts.push("Z".to_string());

        let violations =
            CatalogValidator::validate_tiers(&tiers, &districts(&["A", "B", "C", "D", "E"]));

        assert!(violations.contains(&CatalogError::DistrictAssignedTwice {
            district: "A".to_string(),
            first: "Very High Potential".to_string(),
            second: "High Potential".to_string(),
        }));
        assert!(violations.contains(&CatalogError::UnknownDistrict {
            tier: "Moderate Potential".to_string(),
            district: "Z".to_string(),
        }));
        assert_eq!(violations.len(), 2);
    }

    #[test]
    fn test_duplicate_and_missing_tier() {
        let mut tiers = five_tiers();
        tiers[4] = tier(PotentialLevel::Low, "< 10%", &["E"]);

        let violations =
            CatalogValidator::validate_tiers(&tiers, &districts(&["A", "B", "C", "D", "E"]));

        assert!(violations.contains(&CatalogError::DuplicateTier("Low Potential".to_string())));
        assert!(violations.contains(&CatalogError::MissingTier("Very Low Potential".to_string())));
    }

    #[test]
    fn test_empty_tier_and_bad_range() {
        let mut tiers = five_tiers();
        tiers[0].districts.clear();
        tiers[0].cfr_potential_percent = "lots".to_string();

        let violations =
            CatalogValidator::validate_tiers(&tiers, &districts(&["B", "C", "D", "E"]));

        assert!(violations.contains(&CatalogError::EmptyTier("Very High Potential".to_string())));
        assert!(violations.contains(&CatalogError::InvalidPercentRange {
            tier: "Very High Potential".to_string(),
            value: "lots".to_string(),
        }));
    }

    #[test]
    fn test_overlapping_ranges_rejected() {
        let mut tiers = five_tiers();
        tiers[1].cfr_potential_percent = "50-80%".to_string();

        let violations =
            CatalogValidator::validate_tiers(&tiers, &districts(&["A", "B", "C", "D", "E"]));

        assert_eq!(
            violations,
            vec![CatalogError::TierOrderViolation {
                tier: "High Potential".to_string(),
                range: "50-80%".to_string(),
                above: "Very High Potential".to_string(),
            }]
        );
    }

    #[test]
    fn test_district_keys_ignore_case() {
        let violations = CatalogValidator::validate_districts(&districts(&["Puri", "puri "]));
        assert_eq!(violations, vec![CatalogError::DuplicateDistrict("puri ".to_string())]);
    }

    #[test]
    fn test_category_checks() {
        let categories = vec![
            RightsCategory::new("Habitat Rights", "Rights of PVTGs over their habitat", "#96ceb4"),
            RightsCategory::new("Habitat Rights", "", "96ceb4"),
        ];

        let violations = CatalogValidator::validate_categories(&categories);

        assert_eq!(
            violations,
            vec![
                CatalogError::DuplicateCategory("Habitat Rights".to_string()),
                CatalogError::EmptyField {
                    entity: "category 'Habitat Rights'".to_string(),
                    field: "description".to_string(),
                },
                CatalogError::InvalidColor {
                    entity: "category 'Habitat Rights'".to_string(),
                    color: "96ceb4".to_string(),
                },
            ]
        );
    }
}
