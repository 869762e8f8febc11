// ==========================================
// FRA 参考目录 - 配置层错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use crate::catalog::CatalogError;
use thiserror::Error;

/// 配置层错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 文件相关错误 =====
    #[error("catalog file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported catalog file format: {0} (only .json is supported)")]
    UnsupportedFormat(String),

    #[error("failed to read catalog file {path}: {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog file {path}: {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    // ===== 目录不变量错误 =====
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Result 类型别名
pub type ConfigResult<T> = Result<T, ConfigError>;
