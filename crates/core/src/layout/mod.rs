//! Layout reconstruction engine.
//!
//! This module contains:
//! - Layout element types (Fragment, Word, Line, Paragraph)
//! - Layout parameters and presets (LayoutParams)
//! - Line building, word merging, classification and paragraph segmentation
//! - Header/footer phrase detection
//! - Column building and table grids

pub mod analysis;
pub mod elements;
pub mod params;
pub mod phrases;
pub mod table;

pub use params::*;

pub use elements::*;

pub use analysis::*;

pub use phrases::{PhraseBook, p_l_filter};

pub use table::*;
