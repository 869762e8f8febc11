// ==========================================
// 文本报告测试
// ==========================================
// 测试范围:
// 1. 每个类别名称与等级标签作为条目标题恰好出现一次
// 2. 末行报告地区总数 30
// 3. 幂等: 两次渲染字节级一致
// 4. 等级条目后跟地区列表与区间
// ==========================================


use fra_atlas::report::{self, ReportFormat};
use test_helpers::{builtin_catalog, heading_count};

#[test]
fn test_every_entry_heading_appears_once() {
    let catalog = builtin_catalog();
    let report = catalog.render();

    for category in catalog.load_categories() {
        assert_eq!(heading_count(&report, &category.name), 1, "{}", category.name);
    }
    for tier in catalog.load_tiers() {
        assert_eq!(heading_count(&report, tier.label()), 1, "{}", tier.label());
    }
}

#[test]
fn test_final_line_reports_count() {
    let report = builtin_catalog().render();
    let last = report.lines().last().unwrap();

    assert_eq!(last, "Total Odisha Districts: 30");
}

#[test]
fn test_render_is_idempotent() {
    let catalog = builtin_catalog();
    assert_eq!(catalog.render(), catalog.render());
    assert_eq!(catalog.render(), builtin_catalog().render());
}

#[test]
fn test_very_high_entry() {
    let report = builtin_catalog().render();

    let heading = report.find("Very High Potential: #27ae60").unwrap();
    let districts = report
        .find("Kandhamal, Mayurbhanj, Rayagada, Keonjhar, Koraput")
        .unwrap();
    let percent = report.find("> 70%").unwrap();

    assert!(heading < districts);
    assert!(districts < percent);
}

#[test]
fn test_section_layout() {
    let report = builtin_catalog().render();

    assert!(report.starts_with("FRA Categories for Interactive Map Legend:\n"));
    assert!(report.contains(
        "Forest Village Conversion: #feca57\n  Description: Conversion of forest villages to revenue villages\n\n\nOdisha District FRA Classification:\n"
    ));
    assert!(report.contains(
        "Very Low Potential: #95a5a6\n  Districts: Puri, Jagatsinghpur, Khordha, Cuttack, Bhadrak, Balasore, Jajpur, Kendrapara, Nayagarh, Subarnapur\n  CFR Potential: < 10%\n\n\nTotal Odisha Districts: 30\n"
    ));
}

#[test]
fn test_render_matches_text_format() {
    let catalog = builtin_catalog();
    let via_format = report::render(&catalog, ReportFormat::Text, false).unwrap();
    assert_eq!(via_format, catalog.render());
}
