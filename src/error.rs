//! Error types for gongwen operations.

use thiserror::Error;

/// Errors that can occur while importing or exporting a document.
///
/// The pure transforms (normalizer, stylesheet generator, signature detector)
/// are total functions and never fail; errors only arise at the pipeline
/// boundaries where external collaborators are involved.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("document is empty")]
    EmptyInput,

    #[error("Markdown conversion failed: {0}")]
    Markdown(String),

    #[error("HTML conversion failed: {0}")]
    Html(String),

    #[error("document serialization failed: {0}")]
    Serializer(String),
}

pub type Result<T> = std::result::Result<T, Error>;
