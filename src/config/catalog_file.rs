// ==========================================
// FRA 参考目录 - 目录文件
// ==========================================
// 格式: JSON，结构与 ReferenceCatalog 一一对应
// 用途: 以外部文件替换内置数据，契约不变（加载即校验）
// ==========================================

use crate::catalog::ReferenceCatalog;
use crate::config::error::{ConfigError, ConfigResult};
use crate::domain::{PotentialTier, RightsCategory};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// 目录文件（持久化对象）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogFile {
    /// 地区名称（用于报告标题）
    pub region: String,

    /// 权利类别（按展示顺序）
    #[serde(default)]
    pub categories: Vec<RightsCategory>,

    /// 潜力等级（任意顺序，加载后按等级排序）
    #[serde(default)]
    pub tiers: Vec<PotentialTier>,

    /// 地区主表
    #[serde(default)]
    pub districts: Vec<String>,
}

impl CatalogFile {
    /// 读取目录文件
    ///
    /// # 错误
    /// - FileNotFound: 路径不存在
    /// - UnsupportedFormat: 扩展名不是 .json
    /// - FileReadError / ParseError: 读取或解析失败
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let display = path.display().to_string();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(display));
        }

        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => {}
            other => {
                return Err(ConfigError::UnsupportedFormat(
                    other.unwrap_or("<none>").to_string(),
                ))
            }
        }

        let content = fs::read_to_string(path).map_err(|source| ConfigError::FileReadError {
            path: display.clone(),
            source,
        })?;

        Self::from_json(&content).map_err(|source| ConfigError::ParseError {
            path: display,
            source,
        })
    }

    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// 转换为已校验的目录
    pub fn into_catalog(self) -> ConfigResult<ReferenceCatalog> {
        Ok(ReferenceCatalog::new(
            self.region,
            self.categories,
            self.tiers,
            self.districts,
        )?)
    }
}

impl From<&ReferenceCatalog> for CatalogFile {
    fn from(catalog: &ReferenceCatalog) -> Self {
        Self {
            region: catalog.region().to_string(),
            categories: catalog.load_categories().to_vec(),
            tiers: catalog.load_tiers().to_vec(),
            districts: catalog.list_all_districts().to_vec(),
        }
    }
}
