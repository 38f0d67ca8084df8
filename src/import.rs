//! Document import: HTML back to Markdown, then normalized.
//!
//! Word documents arrive as HTML (extracted by an external reader). The
//! [`HtmlToMarkdown`] collaborator converts that HTML to Markdown using a
//! style-to-heading mapping — Word's named paragraph styles carry the
//! structure that raw tags lose — and the result optionally passes through
//! the structural normalizer.

use crate::error::Result;
use crate::normalize::normalize;

/// Mapping from word-processor paragraph style names to heading ranks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingStyleMap {
    entries: Vec<(String, u8)>,
}

impl Default for HeadingStyleMap {
    /// The conventional mapping: Title becomes the document heading, the
    /// first three heading ranks shift down one level beneath it.
    fn default() -> Self {
        Self {
            entries: vec![
                ("Title".to_string(), 1),
                ("Heading 1".to_string(), 2),
                ("Heading 2".to_string(), 3),
                ("Heading 3".to_string(), 4),
            ],
        }
    }
}

impl HeadingStyleMap {
    /// The heading rank for a style name, if mapped.
    pub fn rank(&self, style_name: &str) -> Option<u8> {
        self.entries
            .iter()
            .find(|(name, _)| name == style_name)
            .map(|(_, rank)| *rank)
    }

    /// Iterate over `(style_name, rank)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u8)> {
        self.entries.iter().map(|(name, rank)| (name.as_str(), *rank))
    }
}

/// HTML -> Markdown conversion collaborator.
pub trait HtmlToMarkdown {
    fn to_markdown(&self, html: &str, map: &HeadingStyleMap) -> Result<String>;
}

/// Convert imported HTML to Markdown, optionally imposing the canonical
/// heading hierarchy on the result.
pub fn import_document<C>(html: &str, converter: &C, apply_normalizer: bool) -> Result<String>
where
    C: HtmlToMarkdown,
{
    let markdown = converter.to_markdown(html, &HeadingStyleMap::default())?;
    if apply_normalizer {
        Ok(normalize(&markdown))
    } else {
        Ok(markdown)
    }
}
