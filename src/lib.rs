//! # gongwen
//!
//! A typesetting engine for Chinese official documents (公文): it turns
//! free-form Markdown into Word-compatible HTML that obeys the strict
//! administrative formatting rules — fixed fonts and line heights,
//! character-count indentation, twip page margins, a red masthead, and
//! odd/even footer pagination.
//!
//! ## Features
//!
//! - Heuristic structural normalizer promoting plain paragraphs into a
//!   canonical heading hierarchy (`一、` / `（一）` / `1、` enumeration)
//! - Dual-target stylesheet generator: one configuration model, one CSS
//!   dialect for live preview and one for word-processor export, in visual
//!   parity
//! - Signature-block detection for the trailing date/name paragraph
//! - Full export envelope assembly with masthead and pagination footers
//!
//! ## Quick Start
//!
//! ```
//! use gongwen::{normalize, DocConfig, Mode, PresetId};
//! use gongwen::export::{export_docx, HtmlEnvelopeSerializer, PulldownConverter};
//!
//! // Impose a heading hierarchy on plain text
//! let markdown = normalize("短标题\n\n一、内容");
//! assert_eq!(markdown, "# 短标题\n\n## 一、内容");
//!
//! // Export as an official document with a red masthead
//! let config = DocConfig::Preset(PresetId::RedHeader);
//! let exported = export_docx(
//!     &markdown,
//!     Mode::Official,
//!     &config,
//!     &PulldownConverter::new(),
//!     &HtmlEnvelopeSerializer,
//! )?;
//! assert!(exported.filename.ends_with(".docx"));
//! # Ok::<(), gongwen::Error>(())
//! ```
//!
//! ## Configuration
//!
//! A [`DocConfig`] is either a named preset or a custom layout; any edit
//! produces a `Custom` value so the distinction is carried by the type:
//!
//! ```
//! use gongwen::{DocConfig, PresetId};
//!
//! let config = DocConfig::Preset(PresetId::Default)
//!     .update(|layout| layout.indent = "3em".to_string());
//! assert!(matches!(config, DocConfig::Custom(_)));
//! ```

pub mod assemble;
pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod normalize;
pub mod signature;
pub mod style;

pub use assemble::{assemble, page_margins, Mode, PageMargins};
pub use config::{DocConfig, Layout, LineHeight, PresetId, Pt, Twips};
pub use error::{Error, Result};
pub use normalize::normalize;
pub use signature::apply_signature_heuristic;
pub use style::{official_styles, standard_styles, Target};
