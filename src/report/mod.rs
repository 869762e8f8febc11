// ==========================================
// FRA 参考目录 - 报告层
// ==========================================
// 职责: 将已校验的目录渲染为文本 / JSON / CSV
// 红线: 文本渲染不可失败，且对同一目录输出字节级一致
// ==========================================

pub mod export;
pub mod text;

pub use export::{DistrictRow, JsonReport, ReportError, ReportResult};
pub use text::TextReport;

use crate::catalog::ReferenceCatalog;

/// 报告格式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
    Csv,
}

/// 按格式渲染报告
///
/// # 参数
/// - detailed: 仅对文本格式生效，附加类别属性与等级特征
pub fn render(catalog: &ReferenceCatalog, format: ReportFormat, detailed: bool) -> ReportResult<String> {
    match format {
        ReportFormat::Text => Ok(TextReport::new(catalog).detailed(detailed).render()),
        ReportFormat::Json => export::to_json(catalog),
        ReportFormat::Csv => export::to_csv(catalog),
    }
}
