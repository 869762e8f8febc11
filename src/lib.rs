// ==========================================
// FRA 参考目录 - 核心库
// ==========================================
// 内容: FRA 权利类别 + 奥里萨邦地区 CFR 潜力分级
// 系统定位: 只读参考数据，构造即校验
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 类别、等级与值类型
pub mod domain;

// 目录层 - 数据持有、校验、查询
pub mod catalog;

// 报告层 - 文本 / JSON / CSV
pub mod report;

// 配置层 - 数据来源
pub mod config;

// 命令行
pub mod cli;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

pub use catalog::{CatalogError, CatalogResult, ReferenceCatalog};
pub use config::{CatalogFile, CatalogSource, ConfigError, ConfigResult};
pub use domain::{PercentBounds, PotentialLevel, PotentialTier, RightsCategory};
pub use report::{ReportFormat, TextReport};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "FRA Atlas";
