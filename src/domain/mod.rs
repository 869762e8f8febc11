// ==========================================
// FRA 参考目录 - 领域模型层
// ==========================================
// 职责: 权利类别、潜力等级及其值类型
// 红线: 不含校验与渲染逻辑
// ==========================================

pub mod category;
pub mod tier;
pub mod types;

// 重导出核心类型
pub use category::RightsCategory;
pub use tier::PotentialTier;
pub use types::{is_hex_color, normalize_key, PercentBounds, PotentialLevel};
