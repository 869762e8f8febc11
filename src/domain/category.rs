// ==========================================
// FRA 参考目录 - 权利类别领域模型
// ==========================================
// 职责: FRA 法定权利类别（个人/社区/栖息地等）
// 红线: 构造后不可变
// ==========================================

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// ==========================================
// RightsCategory - 权利类别
// ==========================================
// 各类别的附加属性键不同（area_limit / authority / process 等），
// 统一用 键 -> 文本 映射保存
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RightsCategory {
    pub name: String,        // 类别名称 (唯一键)
    pub description: String, // 说明

    #[serde(default)]
    pub attributes: BTreeMap<String, String>, // 附加属性

    pub color: String, // 图例颜色 (#rrggbb)
}

impl RightsCategory {
    pub fn new(name: impl Into<String>, description: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            attributes: BTreeMap::new(),
            color: color.into(),
        }
    }

    /// 追加附加属性
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// 读取附加属性
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}
