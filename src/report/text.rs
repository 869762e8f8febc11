// ==========================================
// FRA 参考目录 - 文本报告
// ==========================================
// 格式:
//   FRA Categories for Interactive Map Legend:
//   ==================================================
//   <类别>: <颜色>
//     Description: <说明>
//   (空行)
//   (空行)
//   <地区> District FRA Classification:
//   ==================================================
//   <等级>: <颜色>
//     Districts: <逗号拼接>
//     CFR Potential: <区间>
//   (空行)
//   (空行)
//   Total <地区> Districts: <数量>
// ==========================================

use crate::catalog::ReferenceCatalog;

const RULE_WIDTH: usize = 50;

pub struct TextReport<'a> {
    catalog: &'a ReferenceCatalog,
    detailed: bool,
}

impl<'a> TextReport<'a> {
    pub fn new(catalog: &'a ReferenceCatalog) -> Self {
        Self {
            catalog,
            detailed: false,
        }
    }

    /// 附加类别属性与等级特征
    pub fn detailed(mut self, detailed: bool) -> Self {
        self.detailed = detailed;
        self
    }

    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();
        let rule = "=".repeat(RULE_WIDTH);

        // ===== 权利类别 =====
        lines.push("FRA Categories for Interactive Map Legend:".to_string());
        lines.push(rule.clone());
        for category in self.catalog.load_categories() {
            lines.push(format!("{}: {}", category.name, category.color));
            lines.push(format!("  Description: {}", category.description));
            if self.detailed {
                for (key, value) in &category.attributes {
                    lines.push(format!("  {}: {}", humanize_key(key), value));
                }
            }
            lines.push(String::new());
        }

        // ===== 潜力等级 =====
        lines.push(String::new());
        lines.push(format!("{} District FRA Classification:", self.catalog.region()));
        lines.push(rule);
        for tier in self.catalog.load_tiers() {
            lines.push(format!("{}: {}", tier.label(), tier.color));
            if self.detailed && !tier.characteristics.is_empty() {
                lines.push(format!("  Characteristics: {}", tier.characteristics));
            }
            lines.push(format!("  Districts: {}", tier.joined_districts()));
            lines.push(format!("  CFR Potential: {}", tier.cfr_potential_percent));
            lines.push(String::new());
        }

        // ===== 汇总 =====
        lines.push(String::new());
        lines.push(format!(
            "Total {} Districts: {}",
            self.catalog.region(),
            self.catalog.district_count()
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }
}

/// area_limit -> Area Limit
fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
