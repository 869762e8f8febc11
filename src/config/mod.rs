// ==========================================
// FRA 参考目录 - 配置层
// ==========================================
// 职责: 决定目录数据来源（内置 / 外部 JSON 文件）并加载
// 优先级: --catalog 参数 > FRA_ATLAS_CATALOG 环境变量 > 内置数据
// ==========================================

pub mod catalog_file;
pub mod error;

pub use catalog_file::CatalogFile;
pub use error::{ConfigError, ConfigResult};

use crate::catalog::ReferenceCatalog;
use std::path::PathBuf;

/// 目录文件路径的环境变量
pub const CATALOG_ENV: &str = "FRA_ATLAS_CATALOG";

/// 目录数据来源
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CatalogSource {
    #[default]
    Builtin,
    File(PathBuf),
}

impl CatalogSource {
    /// 由可选路径构造来源
    pub fn from_path(path: Option<PathBuf>) -> Self {
        match path {
            Some(path) => CatalogSource::File(path),
            None => CatalogSource::Builtin,
        }
    }

    /// 加载并校验目录
    pub fn load(&self) -> ConfigResult<ReferenceCatalog> {
        match self {
            CatalogSource::Builtin => {
                tracing::debug!("使用内置目录");
                Ok(ReferenceCatalog::builtin()?)
            }
            CatalogSource::File(path) => {
                tracing::debug!(path = %path.display(), "加载目录文件");
                CatalogFile::load(path)?.into_catalog()
            }
        }
    }
}

/// 加载目录（便捷函数）
pub fn load_catalog(path: Option<PathBuf>) -> ConfigResult<ReferenceCatalog> {
    CatalogSource::from_path(path).load()
}
