//! Output converters.
//!
//! - TextConverter: plain text, form feed per page
//! - HTMLConverter: paginated HTML document
//! - CsvConverter: fully quoted table records
//! - XMLConverter: geometry XML, readable by the input reader

mod base;
mod delimited;
mod html;
mod text;
mod xml;

pub use base::{Block, ComposedPage, TabularPage, compose_blocks};
pub use delimited::CsvConverter;
pub use html::HTMLConverter;
pub use text::TextConverter;
pub use xml::XMLConverter;
