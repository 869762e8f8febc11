// ==========================================
// FRA 参考目录 - 目录层错误类型
// ==========================================
// 工具: thiserror 派生宏
// 红线: 所有不变量违反均为启动期致命错误，不重试
// ==========================================

use thiserror::Error;

/// 目录不变量错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CatalogError {
    // ===== 唯一键错误 =====
    #[error("duplicate rights category: {0}")]
    DuplicateCategory(String),

    #[error("duplicate potential tier: {0}")]
    DuplicateTier(String),

    #[error("duplicate district in master list: {0}")]
    DuplicateDistrict(String),

    // ===== 地区覆盖错误 =====
    #[error("tier '{tier}' references unknown district: {district}")]
    UnknownDistrict { tier: String, district: String },

    #[error("district '{district}' assigned to both '{first}' and '{second}'")]
    DistrictAssignedTwice {
        district: String,
        first: String,
        second: String,
    },

    #[error("district not assigned to any tier: {0}")]
    UnassignedDistrict(String),

    #[error("tier has no districts: {0}")]
    EmptyTier(String),

    #[error("potential tier not defined: {0}")]
    MissingTier(String),

    // ===== 字段错误 =====
    #[error("{entity}: field '{field}' is empty")]
    EmptyField { entity: String, field: String },

    #[error("{entity}: invalid color '{color}' (expected #rrggbb)")]
    InvalidColor { entity: String, color: String },

    #[error("tier '{tier}': unrecognised CFR potential range '{value}'")]
    InvalidPercentRange { tier: String, value: String },

    #[error("tier '{tier}': CFR range {range} reaches above the lower bound of '{above}'")]
    TierOrderViolation {
        tier: String,
        range: String,
        above: String,
    },

    // ===== 汇总 =====
    #[error("catalog has {} invariant violations:\n{}", .0.len(), list_violations(.0))]
    Invalid(Vec<CatalogError>),
}

impl CatalogError {
    /// 将校验结果折叠为单个错误
    ///
    /// # 返回
    /// - Ok(()): 无违规
    /// - Err(单个违规): 恰好一个
    /// - Err(Invalid): 多个
    pub fn from_violations(mut violations: Vec<CatalogError>) -> CatalogResult<()> {
        match violations.len() {
            0 => Ok(()),
            1 => Err(violations.remove(0)),
            _ => Err(CatalogError::Invalid(violations)),
        }
    }

    /// 展开为违规列表
    pub fn violations(&self) -> Vec<&CatalogError> {
        match self {
            CatalogError::Invalid(all) => all.iter().collect(),
            other => vec![other],
        }
    }
}

fn list_violations(violations: &[CatalogError]) -> String {
    violations
        .iter()
        .map(|v| format!("  - {}", v))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Result 类型别名
pub type CatalogResult<T> = Result<T, CatalogError>;
