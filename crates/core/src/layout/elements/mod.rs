//! Layout element types produced by the reconstruction pipeline.
//!
//! - Fragment: raw positioned text span read from the geometry XML
//! - Word: normalized token with its bounding box and grid position
//! - Line: horizontal cluster of words with a structural role
//! - Paragraph: vertically contiguous run of paragraph lines

/// Implements HasBBox by returning a `Rect` field.
///
/// ```ignore
/// impl_has_bbox!(Word, bbox);
/// // expands to: fn bbox(&self) -> Rect { self.bbox }
/// ```
macro_rules! impl_has_bbox {
    ($type:ty, $field:ident) => {
        impl crate::geometry::HasBBox for $type {
            fn bbox(&self) -> crate::geometry::Rect {
                self.$field
            }
        }
    };
}

pub(crate) use impl_has_bbox;

mod line;
mod paragraph;
mod word;

pub use line::{Line, LineType};
pub(crate) use line::sort_top_down;
pub use paragraph::Paragraph;
pub use word::{Fragment, Word};
