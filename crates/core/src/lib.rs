//! strata - layout reconstruction for OCR'd financial statements.
//!
//! Reads positioned text fragments from geometry XML, rebuilds lines,
//! classifies them by role and renders flowing documents or tables.

pub mod api;
pub mod converter;
pub mod error;
pub mod geometry;
pub mod input;
pub mod layout;
pub mod normalize;

pub use api::high_level;

pub use api::{Engine, ExtractOptions, OutputType};
pub use error::{LayoutError, Result};
pub use geometry::{HasBBox, Rect};
pub use layout::LayoutParams;
pub use normalize::{BasicNormalizer, PassThrough, WordNormalizer};
