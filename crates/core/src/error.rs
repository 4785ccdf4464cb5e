//! Error types for strata layout reconstruction.

use thiserror::Error;

/// Primary error type for layout reconstruction.
#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("xml error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed geometry on page {page}: {detail}")]
    MalformedGeometry { page: usize, detail: String },

    #[error("unknown preset '{name}', valid presets are: {valid}")]
    UnknownPreset { name: String, valid: String },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("thread pool error: {0}")]
    ThreadPool(String),
}

impl LayoutError {
    /// Returns true if this error only invalidates a single page.
    pub fn is_page_local(&self) -> bool {
        matches!(self, LayoutError::MalformedGeometry { .. })
    }
}

/// Convenience Result type alias for LayoutError.
pub type Result<T> = std::result::Result<T, LayoutError>;
