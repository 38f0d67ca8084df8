//! Standard-mode stylesheet: everyday documents without the official rules.
//!
//! Fixed fonts and sizes (no configuration model), but the same dual-dialect
//! structure as the official generator so both targets stay in visual parity.

use std::fmt::Write;

use crate::signature;
use crate::style::Target;

/// Generate the standard-document stylesheet.
pub fn standard_styles(target: Target, scope: Option<&str>) -> String {
    let s = scope.map(|s| format!("{s} ")).unwrap_or_default();
    let root = scope.unwrap_or("body");

    let mut css = String::new();

    write!(
        css,
        "  {root} {{\n    font-family: 'Calibri', 'Microsoft YaHei', sans-serif;\n    font-size: 12pt;\n    line-height: 28pt;\n    color: #333333;\n  }}\n\n",
    )
    .unwrap();

    write!(
        css,
        "  {s}h1 {{\n    font-family: 'Cambria', 'Microsoft YaHei UI', serif;\n    font-size: 22pt;\n    font-weight: bold;\n    color: #000000;\n    margin: 0;\n    mso-para-margin-top: 0;\n    mso-para-margin-bottom: 0;\n    text-align: center;\n    line-height: 1.5;\n  }}\n\n",
    )
    .unwrap();

    for (tag, size) in [("h2", "16pt"), ("h3", "14pt")] {
        write!(
            css,
            "  {s}{tag} {{\n    font-size: {size};\n    margin: 0;\n    mso-para-margin-top: 0;\n    mso-para-margin-bottom: 0;\n    font-weight: bold;\n    line-height: 1.5;\n  }}\n\n",
        )
        .unwrap();
    }

    write!(
        css,
        "  {s}p {{\n    margin: 0;\n    mso-para-margin-top: 0;\n    mso-para-margin-bottom: 0;\n    text-align: justify;\n    text-indent: 2em;\n    mso-char-indent-count: 2.0;\n    line-height: 28pt;\n  }}\n\n",
    )
    .unwrap();

    write!(
        css,
        "  {s}ul, {s}ol {{\n    margin: 0;\n    padding: 0;\n    mso-para-margin-top: 0;\n    mso-para-margin-bottom: 0;\n    list-style-position: inside;\n  }}\n\n  {s}li {{\n    margin: 0;\n    mso-para-margin-top: 0;\n    mso-para-margin-bottom: 0;\n    text-align: justify;\n    text-indent: 2em;\n    mso-char-indent-count: 2.0;\n    line-height: 28pt;\n  }}\n\n",
    )
    .unwrap();

    write!(
        css,
        "  {s}a {{ color: #0563C1; text-decoration: underline; }}\n\n  {s}table {{\n    border-collapse: collapse;\n    width: 100%;\n    margin-bottom: 12pt;\n    border: 1px solid #d1d5db;\n    mso-char-indent-count: 0;\n  }}\n\n  {s}th {{\n    background-color: #f3f4f6;\n    font-weight: bold;\n    border: 1px solid #9ca3af;\n    padding: 8px;\n    text-align: left;\n  }}\n\n  {s}td {{\n    border: 1px solid #d1d5db;\n    padding: 8px;\n  }}\n\n",
    )
    .unwrap();

    write!(
        css,
        "  {s}blockquote {{\n    border-left: 4px solid #d1d5db;\n    margin-left: 0;\n    padding-left: 12pt;\n    color: #4b5563;\n    font-style: italic;\n  }}\n\n",
    )
    .unwrap();

    write!(
        css,
        "  {s}.signature-box {{\n    text-align: right;\n    margin-top: 20pt;\n    margin-right: 2em;\n    padding-right: 10pt;\n  }}\n",
    )
    .unwrap();

    if target == Target::Preview {
        css.push('\n');
        css.push_str(&signature::preview_rule(&s));
    }

    css
}
