//! Stylesheet generation for the two rendering targets.
//!
//! One configuration model maps to two CSS dialects sharing the same semantic
//! rules:
//!
//! - [`Target::Preview`] — screen rendering inside a simulated page container:
//!   platform font fallbacks, no page geometry, a last-paragraph CSS shortcut
//!   approximating the signature detector.
//! - [`Target::Export`] — word-processor conventions: `mso-*` Latin font
//!   overrides, character-count indentation, `@page` geometry in whole
//!   centimeters (full-document stylesheets only).
//!
//! Output is derived text: cheap to regenerate, keyed only by its inputs, and
//! always safe to rebuild on every render.

mod fonts;
mod official;
mod standard;

pub use fonts::FontRole;
pub use official::official_styles;
pub use standard::standard_styles;

/// Which dialect of stylesheet to generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Live on-screen preview.
    Preview,
    /// Word-processor export.
    Export,
}
