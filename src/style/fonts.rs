//! Canonical CJK font stacks and role resolution.
//!
//! Configured font names are free text; they are resolved to one of four
//! canonical stacks by substring match. Unmapped names are an explicit
//! [`FontRole::Unknown`] resolved to a documented default (small standard
//! song for headings, formal script for the body) — availability over
//! strictness, never a hard error.

use crate::style::Target;

/// The four canonical font roles used by official-document layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    /// 方正小标宋: document titles and the masthead.
    SmallStandardSong,
    /// 仿宋_GB2312: body text.
    FormalScript,
    /// 楷体_GB2312: second-rank headings.
    RegularScript,
    /// 黑体: first-rank headings.
    BoldSans,
    /// Unrecognized name; resolved per role default.
    Unknown,
}

impl FontRole {
    /// Classify a configured font name by substring match.
    pub fn classify(name: &str) -> FontRole {
        if name.contains("小标宋") {
            FontRole::SmallStandardSong
        } else if name.contains("仿宋") {
            FontRole::FormalScript
        } else if name.contains("楷体") {
            FontRole::RegularScript
        } else if name.contains("黑体") {
            FontRole::BoldSans
        } else {
            FontRole::Unknown
        }
    }

    /// Resolve a heading font name; unknown falls back to small standard song.
    pub fn resolve_heading(name: &str) -> FontRole {
        match Self::classify(name) {
            FontRole::Unknown => FontRole::SmallStandardSong,
            role => role,
        }
    }

    /// Resolve a body font name; unknown falls back to regular script.
    pub fn resolve_body(name: &str) -> FontRole {
        match Self::classify(name) {
            FontRole::Unknown => FontRole::RegularScript,
            role => role,
        }
    }

    /// The CJK family list for this role.
    ///
    /// Export names the single processor-known family; preview appends
    /// platform fallbacks so browsers without the document fonts still render
    /// in the right genre.
    fn stack(self, target: Target) -> &'static str {
        match (self, target) {
            (FontRole::SmallStandardSong | FontRole::Unknown, Target::Export) => {
                "'方正小标宋简体'"
            }
            (FontRole::SmallStandardSong | FontRole::Unknown, Target::Preview) => {
                "'方正小标宋简体', 'SimSun', serif"
            }
            (FontRole::FormalScript, Target::Export) => "'仿宋_GB2312'",
            (FontRole::FormalScript, Target::Preview) => "'仿宋_GB2312', 'FangSong', serif",
            (FontRole::RegularScript, Target::Export) => "'楷体_GB2312'",
            (FontRole::RegularScript, Target::Preview) => "'楷体_GB2312', 'KaiTi', serif",
            (FontRole::BoldSans, Target::Export) => "'黑体'",
            (FontRole::BoldSans, Target::Preview) => "'黑体', 'SimHei', sans-serif",
        }
    }

    /// Emit the `font-family` declaration(s) for this role.
    ///
    /// For export, every mapped font also carries the processor-specific
    /// ASCII/Latin override fields so Latin runs render in a Western font
    /// while CJK runs keep the configured family.
    pub fn font_css(self, target: Target) -> String {
        match target {
            Target::Export => format!(
                "font-family: {};\n    mso-ascii-font-family: 'Times New Roman';\n    mso-hansi-font-family: 'Times New Roman';",
                self.stack(target)
            ),
            Target::Preview => {
                format!("font-family: {}, 'Times New Roman';", self.stack(target))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_by_substring() {
        assert_eq!(FontRole::classify("方正小标宋简体"), FontRole::SmallStandardSong);
        assert_eq!(FontRole::classify("仿宋_GB2312"), FontRole::FormalScript);
        assert_eq!(FontRole::classify("楷体_GB2312"), FontRole::RegularScript);
        assert_eq!(FontRole::classify("黑体"), FontRole::BoldSans);
        assert_eq!(FontRole::classify("Comic Sans"), FontRole::Unknown);
    }

    #[test]
    fn test_unknown_falls_back_per_role() {
        assert_eq!(FontRole::resolve_heading("Arial"), FontRole::SmallStandardSong);
        assert_eq!(FontRole::resolve_body("Arial"), FontRole::RegularScript);
    }

    #[test]
    fn test_export_css_carries_latin_overrides() {
        let css = FontRole::FormalScript.font_css(Target::Export);
        assert!(css.contains("font-family: '仿宋_GB2312'"));
        assert!(css.contains("mso-ascii-font-family: 'Times New Roman'"));
        assert!(css.contains("mso-hansi-font-family: 'Times New Roman'"));
    }

    #[test]
    fn test_preview_css_has_platform_fallbacks() {
        let css = FontRole::BoldSans.font_css(Target::Preview);
        assert!(css.contains("'SimHei'"));
        assert!(!css.contains("mso-ascii-font-family"));
    }
}
