//! Signature-block detection for the trailing paragraph.
//!
//! Formal documents conventionally end with a right-aligned date/name block
//! (e.g. `2026年1月23日`). After Markdown conversion that block is just the
//! last `<p>`; this module decides, from text shape alone, whether to wrap it
//! in a right-aligned container.
//!
//! Both rendering targets consume this one abstraction: the export path uses
//! [`apply_signature_heuristic`] to rewrite the markup (word processors do not
//! reliably honor positional CSS selectors), while the preview stylesheet
//! embeds [`preview_rule`], a last-paragraph CSS shortcut that is a visual
//! approximation only — never the source of truth.

use std::borrow::Cow;
use std::sync::OnceLock;

use regex::Regex;

/// Visible-character ceiling below which a trailing paragraph is treated as a
/// signature block. Empirically tuned for Chinese-language documents.
pub const SIGNATURE_MAX_CHARS: usize = 50;

fn tag_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]*>").unwrap())
}

/// Strip markup tags and count the remaining visible characters.
pub fn visible_len(html: &str) -> usize {
    tag_re().replace_all(html, "").trim().chars().count()
}

/// Wrap the final paragraph in a right-aligned signature container when its
/// visible text is short enough.
///
/// The last block is located by a trailing-anchor match: the document must end
/// with `</p>` (modulo whitespace). Inner markup is preserved exactly. Applied
/// at most once; any other outcome returns the input unchanged.
pub fn apply_signature_heuristic(body: &str) -> Cow<'_, str> {
    apply_with_ceiling(body, SIGNATURE_MAX_CHARS)
}

/// [`apply_signature_heuristic`] with an explicit length ceiling.
pub fn apply_with_ceiling(body: &str, max_chars: usize) -> Cow<'_, str> {
    let trailing_ws_start = body.trim_end().len();
    let trimmed = &body[..trailing_ws_start];

    let Some(content_end) = trimmed.len().checked_sub("</p>".len()) else {
        return Cow::Borrowed(body);
    };
    if !trimmed.ends_with("</p>") {
        return Cow::Borrowed(body);
    }

    // Find the opening tag of that same paragraph.
    let Some(open_start) = trimmed.rfind("<p") else {
        return Cow::Borrowed(body);
    };
    // Reject matches like <pre>; the tag name must end right here.
    let after_name = &trimmed[open_start + 2..];
    if !(after_name.starts_with('>') || after_name.starts_with(' ') || after_name.starts_with('\t'))
    {
        return Cow::Borrowed(body);
    }
    let Some(open_end) = after_name.find('>') else {
        return Cow::Borrowed(body);
    };
    let inner_start = open_start + 2 + open_end + 1;
    let inner = &trimmed[inner_start..content_end];

    let len = visible_len(inner);
    if len == 0 || len >= max_chars {
        return Cow::Borrowed(body);
    }

    let mut out = String::with_capacity(body.len() + 32);
    out.push_str(&trimmed[..open_start]);
    out.push_str("<div class=\"signature-box\">");
    out.push_str(inner);
    out.push_str("</div>");
    out.push_str(&body[trailing_ws_start..]);
    Cow::Owned(out)
}

/// Preview-only CSS approximation: right-align the visually-last paragraph.
///
/// `prefix` is the scope selector prefix (including its trailing space), as
/// used throughout the generated stylesheets.
pub fn preview_rule(prefix: &str) -> String {
    format!(
        "  {prefix}p:last-of-type {{\n    text-align: right;\n    text-indent: 0;\n    margin-right: 2em;\n  }}\n"
    )
}
