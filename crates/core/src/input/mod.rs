//! Geometry input.
//!
//! Pages arrive as pdfminer-style XML produced by an external OCR and
//! PDF-to-geometry step. Only positioned text lines are read.

pub mod xml;

pub use xml::{PageFragments, ParsedDocument, read_pages, write_pages};
