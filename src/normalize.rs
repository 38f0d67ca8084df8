//! Structural normalizer: impose a heading hierarchy on plain text.
//!
//! Official documents pasted as plain text rarely carry Markdown heading
//! markers, but their structure is encoded in conventional enumeration
//! prefixes: `一、` sections, `（一）` subsections, `1、` sub-subsections.
//! This module rewrites such lines as ATX headings in a single pass.
//!
//! The pass is a two-state machine: [`State::AwaitingTitle`] until the first
//! non-blank line has been judged (promoted to `#` when short enough, left
//! alone otherwise — one attempt only), then [`State::InBody`] where the
//! enumeration patterns apply. Lines that already carry structural markup
//! (headings, table rows, code fences) are never reclassified, and a fence
//! flag keeps everything between a code-fence opener and its closer verbatim.
//!
//! The transform is pure and deterministic, preserves line count and order,
//! and is idempotent: re-running it on its own output is a no-op.

use std::sync::OnceLock;

use regex::Regex;

/// Maximum visible length (in chars) for first-line title promotion.
///
/// Empirically tuned for Chinese-language documents; short enough to
/// plausibly be a title, nothing more.
pub const TITLE_MAX_CHARS: usize = 60;

/// Classifier state: before or after the one-shot title decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    AwaitingTitle,
    InBody,
}

/// Heading level assigned to a body line, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Promotion {
    Section,       // 一、 -> ##
    Subsection,    // （一） -> ###
    SubSubsection, // 1、 -> ####
}

fn section_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[一二三四五六七八九十]+、").unwrap())
}

fn subsection_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[(（][一二三四五六七八九十]+[)）]").unwrap())
}

fn subsubsection_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // `1、` only: `1.` denotes an ordinary list item and stays untouched.
    RE.get_or_init(|| Regex::new(r"^[0-9]+、").unwrap())
}

/// Classify a trimmed body line against the enumeration patterns,
/// in priority order.
fn classify(trimmed: &str) -> Option<Promotion> {
    if section_re().is_match(trimmed) {
        Some(Promotion::Section)
    } else if subsection_re().is_match(trimmed) {
        Some(Promotion::Subsection)
    } else if subsubsection_re().is_match(trimmed) {
        Some(Promotion::SubSubsection)
    } else {
        None
    }
}

/// Lines already carrying structural markup are passed through verbatim.
fn is_structural(trimmed: &str) -> bool {
    trimmed.starts_with('#') || trimmed.starts_with('|') || trimmed.starts_with("```")
}

fn is_fence(trimmed: &str) -> bool {
    trimmed.starts_with("```")
}

/// Pure per-line transition: given the current state and a line, produce the
/// next state and the (possibly rewritten) line.
///
/// `in_fence` tracks fenced code blocks; every line between an opener and its
/// closer passes through verbatim, whatever it looks like.
fn step(state: State, in_fence: bool, line: &str, title_max_chars: usize) -> (State, bool, String) {
    let trimmed = line.trim();

    if in_fence {
        let closes = is_fence(trimmed);
        return (state, !closes, line.to_string());
    }

    if trimmed.is_empty() {
        // Blank lines never consume the title attempt.
        return (state, false, line.to_string());
    }

    match state {
        State::AwaitingTitle => {
            if is_fence(trimmed) {
                (State::InBody, true, line.to_string())
            } else if trimmed.starts_with('#') {
                (State::InBody, false, line.to_string())
            } else if trimmed.chars().count() < title_max_chars {
                (State::InBody, false, format!("# {trimmed}"))
            } else {
                // Too long to be a title; give up, never retry later.
                (State::InBody, false, line.to_string())
            }
        }
        State::InBody => {
            if is_fence(trimmed) {
                return (State::InBody, true, line.to_string());
            }
            if is_structural(trimmed) {
                return (State::InBody, false, line.to_string());
            }
            let rewritten = match classify(trimmed) {
                Some(Promotion::Section) => format!("## {trimmed}"),
                Some(Promotion::Subsection) => format!("### {trimmed}"),
                Some(Promotion::SubSubsection) => format!("#### {trimmed}"),
                None => line.to_string(),
            };
            (State::InBody, false, rewritten)
        }
    }
}

/// Normalize raw text into a canonical heading hierarchy.
///
/// See the module docs for the classification rules. The output has exactly
/// as many lines as the input, in the same order.
pub fn normalize(text: &str) -> String {
    normalize_with_title_limit(text, TITLE_MAX_CHARS)
}

/// [`normalize`] with an explicit title-length threshold.
pub fn normalize_with_title_limit(text: &str, title_max_chars: usize) -> String {
    let mut state = State::AwaitingTitle;
    let mut in_fence = false;
    let mut out = Vec::new();

    for line in text.split('\n') {
        let (next, fence, rewritten) = step(state, in_fence, line, title_max_chars);
        state = next;
        in_fence = fence;
        out.push(rewritten);
    }

    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_first_line_becomes_title() {
        assert_eq!(normalize("短标题"), "# 短标题");
    }

    #[test]
    fn test_title_length_boundary() {
        // 59 chars: promoted. 60 chars: left untouched.
        let at_59 = "标".repeat(59);
        let at_60 = "标".repeat(60);
        assert_eq!(normalize(&at_59), format!("# {at_59}"));
        assert_eq!(normalize(&at_60), at_60);
    }

    #[test]
    fn test_title_detection_is_one_shot() {
        // First non-blank line too long; the short second line must NOT be
        // promoted to a title (but enumeration rules still apply to it).
        let long = "长".repeat(70);
        let input = format!("{long}\n短句");
        assert_eq!(normalize(&input), input);
    }

    #[test]
    fn test_blank_lines_do_not_consume_title_state() {
        assert_eq!(normalize("\n\n短标题"), "\n\n# 短标题");
    }

    #[test]
    fn test_explicit_heading_passes_through() {
        let input = "# 已有标题\n\n正文段落。";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn test_enumeration_levels() {
        let input = "短标题\n\n一、总体要求\n\n（一）基本原则\n\n1、具体措施";
        let expected = "# 短标题\n\n## 一、总体要求\n\n### （一）基本原则\n\n#### 1、具体措施";
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_half_width_parenthesized_ordinal() {
        let input = "# t\n(一)原则";
        assert_eq!(normalize(input), "# t\n### (一)原则");
    }

    #[test]
    fn test_arabic_dot_is_a_list_not_a_heading() {
        let input = "# t\n1、概述\n1. 概述";
        assert_eq!(normalize(input), "# t\n#### 1、概述\n1. 概述");
    }

    #[test]
    fn test_structural_lines_never_reclassified() {
        let input = "# t\n```\n一、见下表\n```\n| 一、x | y |";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn test_fenced_content_verbatim_even_when_enumerated() {
        // Inside the fence nothing is touched; after the closer the same
        // prefix is promoted again.
        let input = "# t\n```\n一、见下表\n短句\n```\n一、正文节";
        let expected = "# t\n```\n一、见下表\n短句\n```\n## 一、正文节";
        assert_eq!(normalize(input), expected);
    }

    #[test]
    fn test_unclosed_fence_runs_to_end() {
        let input = "# t\n```\n一、见下表";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn test_leading_fence_skips_title_promotion() {
        let input = "```\n短标题\n```";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn test_unmatched_line_keeps_whitespace_verbatim() {
        let input = "# t\n  缩进的正文  ";
        assert_eq!(normalize(input), input);
    }

    #[test]
    fn test_idempotent() {
        let input = "短标题\n\n一、内容\n正文。\n\n2026年1月23日";
        let once = normalize(input);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_line_count_preserved() {
        let input = "标题\n\n一、a\n\nb\n";
        assert_eq!(
            normalize(input).split('\n').count(),
            input.split('\n').count()
        );
    }

    #[test]
    fn test_custom_title_limit() {
        assert_eq!(normalize_with_title_limit("四字标题", 4), "四字标题");
        assert_eq!(normalize_with_title_limit("四字标题", 5), "# 四字标题");
    }
}
