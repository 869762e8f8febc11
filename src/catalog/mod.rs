// ==========================================
// FRA 参考目录 - 目录层
// ==========================================
// 职责: 持有权利类别 / 潜力等级 / 地区主表，提供只读访问与报告渲染
// 红线: 构造即校验，构造成功的目录必定满足全部不变量
// 红线: 构造后不可变，可跨线程共享只读引用
// ==========================================

pub mod builtin;
pub mod error;
pub mod validator;

pub use error::{CatalogError, CatalogResult};
pub use validator::CatalogValidator;

use crate::domain::{normalize_key, PotentialLevel, PotentialTier, RightsCategory};
use crate::report::TextReport;

/// 未知地区的图例颜色
pub const FALLBACK_COLOR: &str = "#cccccc";

// ==========================================
// ReferenceCatalog - 参考目录
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReferenceCatalog {
    region: String,
    categories: Vec<RightsCategory>,
    tiers: Vec<PotentialTier>, // 按等级由高到低排序
    districts: Vec<String>,
}

impl ReferenceCatalog {
    /// 构建并校验目录
    ///
    /// # 返回
    /// - Ok: 目录满足全部不变量
    /// - Err(CatalogError): 单个违规，或 Invalid 汇总多个违规
    pub fn new(
        region: impl Into<String>,
        categories: Vec<RightsCategory>,
        mut tiers: Vec<PotentialTier>,
        districts: Vec<String>,
    ) -> CatalogResult<Self> {
        let region = region.into();

        // 地区名称去首尾空白，主表与等级引用保持同一拼写
        let districts: Vec<String> = districts.iter().map(|d| d.trim().to_string()).collect();
        for tier in &mut tiers {
            for district in &mut tier.districts {
                *district = district.trim().to_string();
            }
        }

        CatalogError::from_violations(CatalogValidator::validate(
            &region,
            &categories,
            &tiers,
            &districts,
        ))?;

        tiers.sort_by_key(|tier| tier.level);

        tracing::info!(
            region = %region,
            categories = categories.len(),
            tiers = tiers.len(),
            districts = districts.len(),
            "参考目录加载完成"
        );

        Ok(Self {
            region,
            categories,
            tiers,
            districts,
        })
    }

    /// 内置奥里萨邦目录
    pub fn builtin() -> CatalogResult<Self> {
        builtin::odisha()
    }

    // ==========================================
    // 只读访问
    // ==========================================

    /// 权利类别（定义顺序）
    pub fn load_categories(&self) -> &[RightsCategory] {
        &self.categories
    }

    /// 潜力等级（由高到低）
    pub fn load_tiers(&self) -> &[PotentialTier] {
        &self.tiers
    }

    /// 地区主表
    pub fn list_all_districts(&self) -> &[String] {
        &self.districts
    }

    pub fn region(&self) -> &str {
        &self.region
    }

    pub fn district_count(&self) -> usize {
        self.districts.len()
    }

    // ==========================================
    // 查询
    // ==========================================

    /// 按名称查找权利类别（忽略大小写）
    pub fn category(&self, name: &str) -> Option<&RightsCategory> {
        let key = normalize_key(name);
        self.categories
            .iter()
            .find(|c| normalize_key(&c.name) == key)
    }

    pub fn tier(&self, level: PotentialLevel) -> Option<&PotentialTier> {
        self.tiers.iter().find(|t| t.level == level)
    }

    /// 按展示标签查找潜力等级
    pub fn tier_by_label(&self, label: &str) -> Option<&PotentialTier> {
        PotentialLevel::from_label(label).and_then(|level| self.tier(level))
    }

    /// 查找地区所属等级
    pub fn tier_for_district(&self, district: &str) -> Option<&PotentialTier> {
        let found = self.tiers.iter().find(|t| t.contains(district));
        match found {
            Some(tier) => tracing::debug!(district, tier = tier.label(), "地区等级命中"),
            None => tracing::warn!(district, "未知地区"),
        }
        found
    }

    /// 地区的图例颜色，未知地区返回 FALLBACK_COLOR
    pub fn legend_color(&self, district: &str) -> &str {
        self.tier_for_district(district)
            .map(|t| t.color.as_str())
            .unwrap_or(FALLBACK_COLOR)
    }

    // ==========================================
    // 渲染
    // ==========================================

    /// 渲染文本报告
    pub fn render(&self) -> String {
        TextReport::new(self).render()
    }
}
