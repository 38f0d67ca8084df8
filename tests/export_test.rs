//! End-to-end tests for the export pipeline.

use gongwen::export::{export_docx, HtmlEnvelopeSerializer, PulldownConverter};
use gongwen::{normalize, DocConfig, Mode, PresetId};

/// Normalize then export the spec'd minimal official document and check the
/// assembled envelope.
#[test]
fn test_official_export_end_to_end() {
    let markdown = normalize("短标题\n\n一、内容");
    assert_eq!(markdown, "# 短标题\n\n## 一、内容");

    let config = DocConfig::Preset(PresetId::Default)
        .update(|l| l.masthead_text = Some("示例机构".to_string()));

    let exported = export_docx(
        &markdown,
        Mode::Official,
        &config,
        &PulldownConverter::new(),
        &HtmlEnvelopeSerializer,
    )
    .unwrap();

    let envelope = String::from_utf8(exported.data).unwrap();

    // Masthead block precedes the body
    let masthead_pos = envelope.find("<div class=\"red-header\">示例机构</div>").unwrap();
    let heading_pos = envelope.find("<h2>一、内容</h2>").unwrap();
    assert!(masthead_pos < heading_pos);

    // The level-2 heading rule carries the bold-sans stack and the configured
    // indent, with Word's character-count companion property
    let h2_rule_start = envelope.find("h2 {").unwrap();
    let h2_rule = &envelope[h2_rule_start..envelope[h2_rule_start..].find('}').unwrap() + h2_rule_start];
    assert!(h2_rule.contains("font-family: '黑体'"));
    assert!(h2_rule.contains("text-indent: 2em;"));
    assert!(h2_rule.contains("mso-char-indent-count: 2.0;"));

    // Default-preset page geometry: 2098/1985/1588/1474 twips, whole cm
    assert!(envelope.contains("margin: 4cm 3cm 4cm 3cm;"));

    // Official chrome: odd/even footers with page-number fields
    assert!(envelope.contains("id=\"f1\""));
    assert!(envelope.contains("id=\"f2\""));
    assert!(envelope.contains("mso-field-code:PAGE"));

    assert!(exported.filename.starts_with("短标题-"));
    assert!(exported.filename.ends_with(".docx"));
}

#[test]
fn test_signature_block_in_exported_document() {
    let markdown = "# 通知\n\n正文内容在此。\n\n2026年1月23日";
    let exported = export_docx(
        markdown,
        Mode::Official,
        &DocConfig::default(),
        &PulldownConverter::new(),
        &HtmlEnvelopeSerializer,
    )
    .unwrap();

    let envelope = String::from_utf8(exported.data).unwrap();
    assert!(envelope.contains("<div class=\"signature-box\">2026年1月23日</div>"));
    // The ordinary paragraph is untouched
    assert!(envelope.contains("<p>正文内容在此。</p>"));
}

#[test]
fn test_standard_export_has_no_official_chrome() {
    let exported = export_docx(
        "# Title\n\nBody text.",
        Mode::Standard,
        &DocConfig::default(),
        &PulldownConverter::new(),
        &HtmlEnvelopeSerializer,
    )
    .unwrap();

    let envelope = String::from_utf8(exported.data).unwrap();
    assert!(!envelope.contains("red-header"));
    assert!(!envelope.contains("mso-element:footer"));
    assert!(!envelope.contains("@page"));
    assert!(envelope.contains("'Calibri'"));
}

#[test]
fn test_markdown_table_survives_conversion() {
    let markdown = "# 表格\n\n| 模块 | 说明 |\n| --- | --- |\n| 导出 | 生成文档 |";
    let exported = export_docx(
        markdown,
        Mode::Official,
        &DocConfig::default(),
        &PulldownConverter::new(),
        &HtmlEnvelopeSerializer,
    )
    .unwrap();

    let envelope = String::from_utf8(exported.data).unwrap();
    assert!(envelope.contains("<table>"));
    assert!(envelope.contains("<th>模块</th>"));
    assert!(envelope.contains("<td>生成文档</td>"));
}

#[test]
fn test_empty_document_is_rejected() {
    let err = export_docx(
        "",
        Mode::Official,
        &DocConfig::default(),
        &PulldownConverter::new(),
        &HtmlEnvelopeSerializer,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "document is empty");
}
