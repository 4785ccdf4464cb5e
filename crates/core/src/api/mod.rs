//! High-level API module for layout reconstruction.
//!
//! # Example
//!
//! ```ignore
//! use strata_core::api::{Engine, ExtractOptions, extract_text};
//!
//! let xml = std::fs::read_to_string("statement.xml")?;
//! let text = extract_text(&xml, &Engine::default(), &ExtractOptions::default())?;
//! ```

pub mod engine;
pub mod high_level;

pub use engine::{Engine, PageLayout};
pub use high_level::{
    AnalyzedDocument, ExtractOptions, OutputType, analyze_document, extract_many_to,
    extract_tables, extract_tables_to, extract_text, extract_to,
};
