// ==========================================
// FRA 参考目录 - JSON / CSV 导出
// ==========================================
// JSON: 目录全量 + 地区数量
// CSV: 每个地区一行（按主表顺序）
// ==========================================

use crate::catalog::ReferenceCatalog;
use crate::domain::{PotentialTier, RightsCategory};
use serde::Serialize;
use thiserror::Error;

/// 导出错误类型
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV output is not valid UTF-8: {0}")]
    Encoding(String),
}

/// Result 类型别名
pub type ReportResult<T> = Result<T, ReportError>;

// ==========================================
// JSON
// ==========================================

#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub region: &'a str,
    pub district_count: usize,
    pub categories: &'a [RightsCategory],
    pub tiers: &'a [PotentialTier],
    pub districts: &'a [String],
}

impl<'a> From<&'a ReferenceCatalog> for JsonReport<'a> {
    fn from(catalog: &'a ReferenceCatalog) -> Self {
        Self {
            region: catalog.region(),
            district_count: catalog.district_count(),
            categories: catalog.load_categories(),
            tiers: catalog.load_tiers(),
            districts: catalog.list_all_districts(),
        }
    }
}

pub fn to_json(catalog: &ReferenceCatalog) -> ReportResult<String> {
    let mut out = serde_json::to_string_pretty(&JsonReport::from(catalog))?;
    out.push('\n');
    Ok(out)
}

// ==========================================
// CSV
// ==========================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DistrictRow<'a> {
    pub district: &'a str,
    pub tier: &'a str,
    pub color: &'a str,
    pub cfr_potential_percent: &'a str,
}

/// 地区行（按主表顺序，每个地区一行）
///
/// 已校验的目录中每个地区恰好对应一个等级；未命中时仍输出该行，
/// 等级相关字段留空并记录告警
pub fn district_rows(catalog: &ReferenceCatalog) -> Vec<DistrictRow<'_>> {
    catalog
        .list_all_districts()
        .iter()
        .map(|district| {
            match catalog.load_tiers().iter().find(|tier| tier.contains(district)) {
                Some(tier) => DistrictRow {
                    district: district.as_str(),
                    tier: tier.label(),
                    color: tier.color.as_str(),
                    cfr_potential_percent: tier.cfr_potential_percent.as_str(),
                },
                None => {
                    tracing::warn!(district = %district, "地区未归入任何等级");
                    DistrictRow {
                        district: district.as_str(),
                        tier: "",
                        color: "",
                        cfr_potential_percent: "",
                    }
                }
            }
        })
        .collect()
}

pub fn to_csv(catalog: &ReferenceCatalog) -> ReportResult<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for row in district_rows(catalog) {
        writer.serialize(row)?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ReportError::Csv(e.into_error().into()))?;

    String::from_utf8(bytes).map_err(|e| ReportError::Encoding(e.to_string()))
}
