//! Layout analysis stages.
//!
//! - `lines`: clustering fragments into lines
//! - `merge`: coalescing close words within a line
//! - `classify`: assigning each line its structural role
//! - `paragraphs`: grouping paragraph lines into blocks

mod classify;
mod lines;
mod merge;
mod paragraphs;

pub use classify::{
    PageContext, apply_fallback, classify_lines, correct_isolated_tables, is_centred,
    mark_centred, mark_footers, mark_headers, mark_tables, mark_wide_paragraphs,
    propagate_neighbours,
};
pub use lines::group_fragments;
pub use merge::{merge_lines, merge_words};
pub use paragraphs::segment_paragraphs;
