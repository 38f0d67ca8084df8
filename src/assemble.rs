//! Document assembly: compose the export-ready envelope.
//!
//! The envelope is Word-flavored HTML: a compatibility declaration with the
//! Office namespaces, the embedded export stylesheet, an optional masthead
//! block, the body markup after the signature pass, and (official mode only)
//! an odd/even footer pair carrying native page-number fields.
//!
//! The margins embedded in the stylesheet's `@page` rule and the margins
//! handed to the binary serializer are both derived from [`page_margins`],
//! so they cannot drift apart.

use std::fmt::Write;

use crate::config::{DocConfig, Twips};
use crate::signature::apply_signature_heuristic;
use crate::style::{official_styles, standard_styles, Target};

/// Formatting mode for an assembled document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Mode {
    /// Everyday document: fixed standard styles, no masthead or footers.
    #[default]
    Standard,
    /// Strict administrative-document rules: configured layout, masthead,
    /// odd/even pagination footers.
    Official,
}

/// Page margins handed to the binary serializer, in twips.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageMargins {
    pub top: Twips,
    pub right: Twips,
    pub bottom: Twips,
    pub left: Twips,
}

/// Standard-mode margin on every edge (0.5 inch).
const STANDARD_MARGIN: Twips = Twips(720);

/// The margins for a document in the given mode.
pub fn page_margins(config: &DocConfig, mode: Mode) -> PageMargins {
    match mode {
        Mode::Standard => PageMargins {
            top: STANDARD_MARGIN,
            right: STANDARD_MARGIN,
            bottom: STANDARD_MARGIN,
            left: STANDARD_MARGIN,
        },
        Mode::Official => {
            let layout = config.layout();
            PageMargins {
                top: layout.margin_top,
                right: layout.margin_right,
                bottom: layout.margin_bottom,
                left: layout.margin_left,
            }
        }
    }
}

/// Assemble a complete export envelope around converted body markup.
///
/// The signature detector runs here, on the export path, for both modes;
/// the preview relies on its CSS approximation instead.
pub fn assemble(body_html: &str, config: &DocConfig, mode: Mode) -> String {
    let layout = config.layout();

    let stylesheet = match mode {
        Mode::Official => official_styles(layout, Target::Export, None),
        Mode::Standard => standard_styles(Target::Export, None),
    };

    let body = apply_signature_heuristic(body_html);

    let mut doc = String::new();
    doc.push_str(
        "<!DOCTYPE html>\n<html xmlns:o=\"urn:schemas-microsoft-com:office:office\" xmlns:w=\"urn:schemas-microsoft-com:office:word\" xmlns=\"http://www.w3.org/TR/REC-html40\">\n<head>\n<meta charset=\"UTF-8\">\n",
    );
    doc.push_str(
        "<!--[if gte mso 9]><xml><w:WordDocument><w:View>Print</w:View><w:Zoom>100</w:Zoom></w:WordDocument></xml><![endif]-->\n",
    );
    doc.push_str("<style>\n");
    doc.push_str(&stylesheet);
    doc.push_str("</style>\n</head>\n<body>\n");

    match mode {
        Mode::Official => {
            doc.push_str("<div class=\"Section1\">\n");
            if layout.has_masthead() {
                let text = layout.masthead_text.as_deref().unwrap_or_default();
                writeln!(doc, "<div class=\"red-header\">{}</div>", escape_html(text)).unwrap();
            }
            doc.push_str(&body);
            if !body.ends_with('\n') {
                doc.push('\n');
            }
            push_footers(&mut doc);
            doc.push_str("</div>\n");
        }
        Mode::Standard => {
            doc.push_str(&body);
            if !body.ends_with('\n') {
                doc.push('\n');
            }
        }
    }

    doc.push_str("</body>\n</html>\n");
    doc
}

/// Odd/even footer pair with native page-number fields.
///
/// Odd pages align right, even pages align left, each inset one character
/// width from the margin, per the administrative pagination convention.
fn push_footers(doc: &mut String) {
    doc.push_str(
        "<div style=\"mso-element:footer\" id=\"f1\">\n<p style=\"text-align:right;margin-right:28pt;line-height:1.5\">&#8212; <span style=\"mso-field-code:PAGE\"></span> &#8212;</p>\n</div>\n",
    );
    doc.push_str(
        "<div style=\"mso-element:footer\" id=\"f2\">\n<p style=\"text-align:left;margin-left:28pt;line-height:1.5\">&#8212; <span style=\"mso-field-code:PAGE\"></span> &#8212;</p>\n</div>\n",
    );
}

/// Escape special HTML characters.
pub fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            _ => result.push(c),
        }
    }
    result
}
