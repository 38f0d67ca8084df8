//! Document formatting configuration.
//!
//! A [`DocConfig`] is either one of three fixed presets or a fully custom
//! [`Layout`]. The distinction is carried by the type itself: any edit goes
//! through [`DocConfig::update`], which always yields a `Custom` value, so
//! "preset with silently diverged fields" cannot be represented.
//!
//! Margins are stored in twips (1/20 pt, 567 per centimeter), the unit the
//! word-processor page setup uses. Font sizes always carry an explicit point
//! unit; line height is either a fixed point value or a unitless multiplier.

mod units;

pub use units::{LineHeight, Pt, Twips, PX_PER_TWIP, TWIPS_PER_CM};

use std::sync::OnceLock;

/// The three fixed presets selectable as a starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "cli", serde(rename_all = "snake_case"))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum PresetId {
    /// Standard official document: 小标宋 title, 仿宋 body, fixed 28pt leading.
    Default,
    /// Same layout with a red institutional masthead above the title.
    RedHeader,
    /// Meeting minutes: 黑体 title, 楷体 body, 1.5x leading, narrower margins.
    Minutes,
}

/// The editable formatting fields.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "cli", derive(serde::Serialize, serde::Deserialize))]
pub struct Layout {
    /// Masthead text; `None` or empty means no masthead block is emitted.
    pub masthead_text: Option<String>,
    /// Title font name, resolved to a canonical stack by substring match.
    pub heading_font: String,
    /// Body font name, resolved the same way.
    pub body_font: String,
    pub heading_size: Pt,
    pub body_size: Pt,
    pub line_height: LineHeight,
    /// First-line indent as a CSS length (e.g. `2em`), applied identically to
    /// paragraphs, list items, and sub-headings.
    pub indent: String,
    pub margin_top: Twips,
    pub margin_bottom: Twips,
    pub margin_left: Twips,
    pub margin_right: Twips,
}

/// A document configuration: a named preset or user-edited values.
#[derive(Debug, Clone, PartialEq)]
pub enum DocConfig {
    Preset(PresetId),
    Custom(Box<Layout>),
}

impl Default for DocConfig {
    fn default() -> Self {
        DocConfig::Preset(PresetId::Default)
    }
}

impl DocConfig {
    /// Resolve to the concrete layout values.
    pub fn layout(&self) -> &Layout {
        match self {
            DocConfig::Preset(id) => id.layout(),
            DocConfig::Custom(layout) => layout,
        }
    }

    /// Apply an edit, producing a `Custom` configuration.
    ///
    /// The whole layout is cloned and replaced; there is no partial merge.
    /// Switching presets is done by constructing `DocConfig::Preset` instead.
    pub fn update(self, edit: impl FnOnce(&mut Layout)) -> DocConfig {
        let mut layout = self.layout().clone();
        edit(&mut layout);
        DocConfig::Custom(Box::new(layout))
    }
}

impl PresetId {
    /// The constant layout record for this preset.
    pub fn layout(self) -> &'static Layout {
        match self {
            PresetId::Default => {
                static LAYOUT: OnceLock<Layout> = OnceLock::new();
                LAYOUT.get_or_init(|| Layout {
                    masthead_text: None,
                    heading_font: "方正小标宋简体".to_string(),
                    body_font: "仿宋_GB2312".to_string(),
                    heading_size: Pt(22.0), // 2号
                    body_size: Pt(16.0),    // 3号
                    line_height: LineHeight::Fixed(Pt(28.0)),
                    indent: "2em".to_string(),
                    margin_top: Twips(2098), // 3.7cm
                    margin_bottom: Twips(1985), // 3.5cm
                    margin_left: Twips(1588), // 2.8cm
                    margin_right: Twips(1474), // 2.6cm
                })
            }
            PresetId::RedHeader => {
                static LAYOUT: OnceLock<Layout> = OnceLock::new();
                LAYOUT.get_or_init(|| Layout {
                    masthead_text: Some("公文自动排版系统".to_string()),
                    ..PresetId::Default.layout().clone()
                })
            }
            PresetId::Minutes => {
                static LAYOUT: OnceLock<Layout> = OnceLock::new();
                LAYOUT.get_or_init(|| Layout {
                    masthead_text: None,
                    heading_font: "黑体".to_string(),
                    body_font: "楷体_GB2312".to_string(),
                    heading_size: Pt(18.0),
                    body_size: Pt(14.0), // 4号
                    line_height: LineHeight::Multiple(1.5),
                    indent: "2em".to_string(),
                    margin_top: Twips(1440),
                    margin_bottom: Twips(1440),
                    margin_left: Twips(1100),
                    margin_right: Twips(1100),
                })
            }
        }
    }
}

impl Layout {
    /// Whether a masthead block should be emitted.
    pub fn has_masthead(&self) -> bool {
        self.masthead_text.as_deref().is_some_and(|t| !t.trim().is_empty())
    }
}
