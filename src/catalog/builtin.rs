// ==========================================
// FRA 参考目录 - 内置数据（奥里萨邦）
// ==========================================
// 内容: 5 个 FRA 权利类别 / 5 个潜力等级 / 30 个地区
// 注意: Subarnapur 归入 Very Low Potential（地图图层中记作 Sonepur）
// ==========================================

use crate::catalog::error::CatalogResult;
use crate::catalog::ReferenceCatalog;
use crate::domain::{PotentialLevel, PotentialTier, RightsCategory};

/// 内置目录的地区名称
pub const REGION: &str = "Odisha";

/// 奥里萨邦全部 30 个地区
pub const ODISHA_DISTRICTS: [&str; 30] = [
    "Angul", "Balangir", "Balasore", "Bargarh", "Bhadrak", "Boudh", "Cuttack", "Debagarh",
    "Dhenkanal", "Gajapati", "Ganjam", "Jagatsinghpur", "Jajpur", "Jharsuguda", "Kalahandi",
    "Kandhamal", "Kendrapara", "Keonjhar", "Khordha", "Koraput", "Malkangiri", "Mayurbhanj",
    "Nawarangpur", "Nayagarh", "Nuapada", "Puri", "Rayagada", "Sambalpur", "Sundargarh",
    "Subarnapur",
];

/// 构建内置目录
pub fn odisha() -> CatalogResult<ReferenceCatalog> {
    ReferenceCatalog::new(
        REGION,
        rights_categories(),
        potential_tiers(),
        ODISHA_DISTRICTS.iter().map(|d| d.to_string()).collect(),
    )
}

fn rights_categories() -> Vec<RightsCategory> {
    vec![
        RightsCategory::new(
            "Individual Forest Rights (IFR)",
            "Individual occupancy rights on forest land",
            "#ff6b6b",
        )
        .with_attribute("area_limit", "Up to 4 hectares per individual")
        .with_attribute(
            "eligibility",
            "Forest dwelling ST and OTFD residing before 13th Dec 2005",
        ),
        RightsCategory::new(
            "Community Forest Rights (CFR)",
            "Rights to protect, regenerate, conserve or manage community forest resource",
            "#4ecdc4",
        )
        .with_attribute("scope", "Traditional and customary boundaries of village")
        .with_attribute("authority", "Gram Sabha"),
        RightsCategory::new(
            "Community Rights (CR)",
            "Rights over minor forest produce, grazing, fishing",
            "#45b7d1",
        )
        .with_attribute("includes", "NTFP, water bodies, grazing grounds"),
        RightsCategory::new("Habitat Rights", "Rights of PVTGs over their habitat", "#96ceb4")
            .with_attribute("scope", "Particularly Vulnerable Tribal Groups"),
        RightsCategory::new(
            "Forest Village Conversion",
            "Conversion of forest villages to revenue villages",
            "#feca57",
        )
        .with_attribute("process", "Settlement and conversion rights"),
    ]
}

fn potential_tiers() -> Vec<PotentialTier> {
    vec![
        tier(
            PotentialLevel::VeryHigh,
            &["Kandhamal", "Mayurbhanj", "Rayagada", "Keonjhar", "Koraput"],
            "High tribal population, significant forest cover, active CFR recognition",
            "> 70%",
            "#27ae60",
        ),
        tier(
            PotentialLevel::High,
            &["Kalahandi", "Sundargarh", "Ganjam", "Angul", "Balangir"],
            "Moderate to high tribal population, good forest cover",
            "50-70%",
            "#2ecc71",
        ),
        tier(
            PotentialLevel::Moderate,
            &["Sambalpur", "Dhenkanal", "Nawarangpur", "Malkangiri", "Gajapati"],
            "Moderate tribal population and forest cover",
            "30-50%",
            "#f39c12",
        ),
        tier(
            PotentialLevel::Low,
            &["Boudh", "Debagarh", "Jharsuguda", "Bargarh", "Nuapada"],
            "Lower tribal population or forest cover",
            "10-30%",
            "#e74c3c",
        ),
        tier(
            PotentialLevel::VeryLow,
            &[
                "Puri",
                "Jagatsinghpur",
                "Khordha",
                "Cuttack",
                "Bhadrak",
                "Balasore",
                "Jajpur",
                "Kendrapara",
                "Nayagarh",
                "Subarnapur",
            ],
            "Coastal areas, urban centers, minimal forest cover",
            "< 10%",
            "#95a5a6",
        ),
    ]
}

fn tier(
    level: PotentialLevel,
    districts: &[&str],
    characteristics: &str,
    cfr_potential_percent: &str,
    color: &str,
) -> PotentialTier {
    PotentialTier {
        level,
        districts: districts.iter().map(|d| d.to_string()).collect(),
        characteristics: characteristics.to_string(),
        cfr_potential_percent: cfr_potential_percent.to_string(),
        color: color.to_string(),
    }
}
