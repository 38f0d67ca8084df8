//! Official-document (gongwen) stylesheet generation.
//!
//! One configuration model feeds two stylesheet dialects. The export dialect
//! follows word-processor conventions: `mso-*` properties, indentation
//! expressed both as a visual length and as a character count (so it survives
//! re-layout), and `@page` geometry in whole centimeters. The preview dialect
//! swaps those for browser-friendly equivalents and platform font fallbacks
//! while keeping visual parity.

use std::fmt::Write;

use crate::config::Layout;
use crate::signature;
use crate::style::fonts::FontRole;
use crate::style::Target;

/// Derive the word-processor character-count indent from the CSS length.
///
/// `2em` means two character widths; anything not expressed in `em` falls
/// back to the conventional two characters.
fn indent_char_count(indent: &str) -> f64 {
    indent
        .trim()
        .strip_suffix("em")
        .and_then(|n| n.trim().parse().ok())
        .unwrap_or(2.0)
}

/// Generate the official-document stylesheet.
///
/// `scope` prefixes every selector (for embedding in a preview container);
/// when `scope` is `None` the stylesheet targets `body` and includes the
/// `@page` geometry section.
pub fn official_styles(layout: &Layout, target: Target, scope: Option<&str>) -> String {
    let s = scope.map(|s| format!("{s} ")).unwrap_or_default();
    let root = scope.unwrap_or("body");

    let heading = FontRole::resolve_heading(&layout.heading_font);
    let body = FontRole::resolve_body(&layout.body_font);
    let line_height = layout.line_height;
    let indent = &layout.indent;
    let chars = indent_char_count(indent);

    let mut css = String::new();

    // Page geometry only makes sense for a full-document stylesheet; a scoped
    // fragment lives inside a simulated page.
    if scope.is_none() {
        write!(
            css,
            "  @page Section1 {{\n    size: A4;\n    margin: {}cm {}cm {}cm {}cm;\n    mso-header-margin: 1.5cm;\n    mso-footer-margin: 1.75cm;\n    mso-footer: f1;\n    mso-even-footer: f2;\n  }}\n\n  div.Section1 {{\n    page: Section1;\n  }}\n\n",
            layout.margin_top.to_cm_rounded(),
            layout.margin_right.to_cm_rounded(),
            layout.margin_bottom.to_cm_rounded(),
            layout.margin_left.to_cm_rounded(),
        )
        .unwrap();
    }

    write!(
        css,
        "  {root} {{\n    {}\n    font-size: {};\n    line-height: {line_height};\n    color: #000000;\n  }}\n\n",
        body.font_css(target),
        layout.body_size,
    )
    .unwrap();

    // Masthead: large red title block with the separating rule rendered as a
    // bottom border, so text, rule, and gaps stay glued together in Word.
    if layout.has_masthead() {
        write!(
            css,
            "  {s}.red-header {{\n    {}\n    color: #FF0000;\n    font-size: 58pt;\n    text-align: center;\n    line-height: 1.2;\n    font-weight: 500;\n    margin: 0;\n    text-indent: 0;\n    mso-char-indent-count: 0;\n    letter-spacing: 0;\n    border-bottom: 3px solid #FF0000;\n    padding-bottom: 10pt;\n    margin-bottom: 30pt;\n  }}\n\n",
            FontRole::SmallStandardSong.font_css(target),
        )
        .unwrap();
    }

    // H1: the document title.
    write!(
        css,
        "  {s}h1 {{\n    {}\n    font-size: {};\n    text-align: center;\n    font-weight: normal;\n    margin: 0;\n    mso-para-margin-top: 0;\n    mso-para-margin-bottom: 0;\n    color: #000000;\n    line-height: 35pt;\n  }}\n\n",
        heading.font_css(target),
        layout.heading_size,
    )
    .unwrap();

    // H2/H3: first- and second-rank section headings, conventionally 黑体
    // then 楷体, indented like body text.
    for (tag, role) in [("h2", FontRole::BoldSans), ("h3", FontRole::RegularScript)] {
        write!(
            css,
            "  {s}{tag} {{\n    {}\n    font-size: {};\n    font-weight: normal;\n    margin: 0;\n    mso-para-margin-top: 0;\n    mso-para-margin-bottom: 0;\n    text-indent: {indent};\n    mso-char-indent-count: {chars:.1};\n    line-height: {line_height};\n  }}\n\n",
            role.font_css(target),
            layout.body_size,
        )
        .unwrap();
    }

    write!(
        css,
        "  {s}p {{\n    margin: 0;\n    mso-para-margin-top: 0;\n    mso-para-margin-bottom: 0;\n    text-indent: {indent};\n    mso-char-indent-count: {chars:.1};\n    text-align: justify;\n    text-justify: inter-ideograph;\n    line-height: {line_height};\n  }}\n\n",
    )
    .unwrap();

    write!(
        css,
        "  {s}ul, {s}ol {{\n    margin: 0;\n    padding: 0;\n    mso-para-margin-top: 0;\n    mso-para-margin-bottom: 0;\n    list-style-position: inside;\n  }}\n\n",
    )
    .unwrap();

    write!(
        css,
        "  {s}li {{\n    margin: 0;\n    mso-para-margin-top: 0;\n    mso-para-margin-bottom: 0;\n    text-indent: {indent};\n    mso-char-indent-count: {chars:.1};\n    line-height: {line_height};\n    text-align: justify;\n    text-justify: inter-ideograph;\n  }}\n\n",
    )
    .unwrap();

    write!(
        css,
        "  {s}table {{\n    border-collapse: collapse;\n    width: 100%;\n    margin: 1em 0;\n    border: 1px solid #000;\n    text-indent: 0;\n    mso-char-indent-count: 0;\n  }}\n\n  {s}th, {s}td {{\n    border: 1px solid #000;\n    padding: 8px;\n    text-align: center;\n    font-size: 14pt;\n    line-height: 1.5;\n  }}\n\n",
    )
    .unwrap();

    write!(
        css,
        "  {s}img {{\n    display: block;\n    margin: 10pt auto;\n    max-width: 90%;\n  }}\n\n",
    )
    .unwrap();

    write!(
        css,
        "  {s}.signature-box {{\n    text-align: right;\n    margin-top: 30pt;\n    margin-right: 2em;\n    text-indent: 0;\n    mso-char-indent-count: 0;\n    line-height: 1.5;\n  }}\n",
    )
    .unwrap();

    // The CSS last-paragraph shortcut is only a visual approximation; the
    // export path rewrites the markup through the signature detector instead.
    if target == Target::Preview {
        css.push('\n');
        css.push_str(&signature::preview_rule(&s));
    }

    css
}
