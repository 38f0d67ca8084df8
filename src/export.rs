//! Export pipeline: Markdown in, named binary document out.
//!
//! The pipeline is a straight line: validate input, convert Markdown to HTML
//! through the [`MarkdownConverter`] collaborator, assemble the Word-HTML
//! envelope, then hand envelope and margins to the [`DocxSerializer`]
//! collaborator. Collaborator failures are surfaced as errors, never
//! swallowed; the pure transforms in between cannot fail.
//!
//! The pipeline holds no queue and no state. Callers that accept concurrent
//! export requests are responsible for serializing them (an in-flight flag is
//! enough) and for resetting that flag on both success and failure.

use std::sync::OnceLock;

use regex::Regex;

use crate::assemble::{assemble, page_margins, Mode, PageMargins};
use crate::config::DocConfig;
use crate::error::{Error, Result};

/// Placeholder title when the document has no level-1 heading.
const FALLBACK_TITLE: &str = "公文文档";

/// Markdown -> HTML conversion collaborator.
///
/// `breaks` requests that single newlines be treated as hard line breaks.
pub trait MarkdownConverter {
    fn to_html(&self, markdown: &str, breaks: bool) -> Result<String>;
}

/// Binary document serializer collaborator.
///
/// Accepts the complete HTML envelope and the page margins (which the
/// assembler guarantees match the margins embedded in the stylesheet) and
/// produces the document bytes.
pub trait DocxSerializer {
    fn serialize(&self, html: &str, margins: &PageMargins) -> Result<Vec<u8>>;
}

/// Default [`MarkdownConverter`] backed by pulldown-cmark, with GFM tables
/// and strikethrough enabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct PulldownConverter;

impl PulldownConverter {
    pub fn new() -> Self {
        Self
    }
}

impl MarkdownConverter for PulldownConverter {
    fn to_html(&self, markdown: &str, breaks: bool) -> Result<String> {
        use pulldown_cmark::{html, Event, Options, Parser};

        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);

        let parser = Parser::new_ext(markdown, options).map(|event| match event {
            Event::SoftBreak if breaks => Event::HardBreak,
            other => other,
        });

        let mut out = String::with_capacity(markdown.len() * 2);
        html::push_html(&mut out, parser);
        Ok(out)
    }
}

/// Pass-through serializer emitting the envelope's UTF-8 bytes.
///
/// Word processors open an HTML envelope saved with a `.doc` extension
/// directly; a true binary serializer can be substituted without touching
/// the pipeline.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlEnvelopeSerializer;

impl DocxSerializer for HtmlEnvelopeSerializer {
    fn serialize(&self, html: &str, _margins: &PageMargins) -> Result<Vec<u8>> {
        Ok(html.as_bytes().to_vec())
    }
}

/// A finished export: derived filename plus document bytes.
#[derive(Debug, Clone)]
pub struct Exported {
    pub filename: String,
    pub data: Vec<u8>,
}

/// Run the full export pipeline.
///
/// Fails with [`Error::EmptyInput`] before any transform runs when the
/// Markdown is blank; collaborator failures surface as their own variants.
pub fn export_docx<C, S>(
    markdown: &str,
    mode: Mode,
    config: &DocConfig,
    converter: &C,
    serializer: &S,
) -> Result<Exported>
where
    C: MarkdownConverter,
    S: DocxSerializer,
{
    if markdown.trim().is_empty() {
        return Err(Error::EmptyInput);
    }

    let body = converter.to_html(markdown, false)?;
    let envelope = assemble(&body, config, mode);
    let margins = page_margins(config, mode);
    log::debug!(
        "assembled {:?} envelope: {} bytes",
        mode,
        envelope.len()
    );

    let data = serializer.serialize(&envelope, &margins)?;
    if data.is_empty() {
        return Err(Error::Serializer("serializer produced no output".to_string()));
    }

    let date = chrono::Local::now().format("%Y-%m-%d");
    let filename = format!("{}-{}.docx", document_title(markdown), date);
    Ok(Exported { filename, data })
}

fn title_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^#\s+(.+)$").unwrap())
}

/// Derive the document title from the first level-1 heading.
///
/// Path-unsafe characters are stripped; a fixed placeholder is used when no
/// heading is present.
pub fn document_title(markdown: &str) -> String {
    let title = title_re()
        .captures(markdown)
        .and_then(|c| c.get(1))
        .map(|m| {
            m.as_str()
                .trim()
                .chars()
                .filter(|c| !matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
                .collect::<String>()
        })
        .unwrap_or_default();

    if title.is_empty() {
        FALLBACK_TITLE.to_string()
    } else {
        title
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PresetId;

    struct FailingSerializer;

    impl DocxSerializer for FailingSerializer {
        fn serialize(&self, _html: &str, _margins: &PageMargins) -> Result<Vec<u8>> {
            Err(Error::Serializer("boom".to_string()))
        }
    }

    struct NoBlobSerializer;

    impl DocxSerializer for NoBlobSerializer {
        fn serialize(&self, _html: &str, _margins: &PageMargins) -> Result<Vec<u8>> {
            Ok(Vec::new())
        }
    }

    #[test]
    fn test_empty_input_rejected_before_transforms() {
        let err = export_docx(
            "   \n\t ",
            Mode::Standard,
            &DocConfig::default(),
            &PulldownConverter::new(),
            &HtmlEnvelopeSerializer,
        )
        .unwrap_err();
        assert!(matches!(err, Error::EmptyInput));
    }

    #[test]
    fn test_serializer_failure_surfaces() {
        let err = export_docx(
            "# 标题",
            Mode::Standard,
            &DocConfig::default(),
            &PulldownConverter::new(),
            &FailingSerializer,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Serializer(_)));
    }

    #[test]
    fn test_missing_blob_is_a_serializer_failure() {
        let err = export_docx(
            "# 标题",
            Mode::Standard,
            &DocConfig::default(),
            &PulldownConverter::new(),
            &NoBlobSerializer,
        )
        .unwrap_err();
        assert!(matches!(err, Error::Serializer(_)));
    }

    #[test]
    fn test_document_title_from_first_heading() {
        assert_eq!(document_title("# 关于某事的通知\n\n正文"), "关于某事的通知");
        assert_eq!(document_title("前言\n\n# 标题"), "标题");
    }

    #[test]
    fn test_document_title_strips_unsafe_chars() {
        assert_eq!(document_title("# a/b\\c:d*e?f\"g<h>i|j"), "abcdefghij");
    }

    #[test]
    fn test_document_title_fallback() {
        assert_eq!(document_title("没有标题的正文"), "公文文档");
        assert_eq!(document_title("# ///"), "公文文档");
    }

    #[test]
    fn test_filename_carries_title_and_date() {
        let exported = export_docx(
            "# 会议纪要\n\n内容",
            Mode::Official,
            &DocConfig::Preset(PresetId::Minutes),
            &PulldownConverter::new(),
            &HtmlEnvelopeSerializer,
        )
        .unwrap();
        assert!(exported.filename.starts_with("会议纪要-"));
        assert!(exported.filename.ends_with(".docx"));
        assert!(!exported.data.is_empty());
    }

    #[test]
    fn test_pulldown_breaks_flag() {
        let converter = PulldownConverter::new();
        let soft = converter.to_html("a\nb", false).unwrap();
        let hard = converter.to_html("a\nb", true).unwrap();
        assert!(!soft.contains("<br"));
        assert!(hard.contains("<br"));
    }
}
