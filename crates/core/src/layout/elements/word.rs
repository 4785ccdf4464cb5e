//! Fragments and words.

use crate::geometry::Rect;

use super::impl_has_bbox;

/// A single OCR-recognized text span, the atomic input unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Fragment {
    pub text: String,
    pub bbox: Rect,
}

impl Fragment {
    pub fn new(text: impl Into<String>, bbox: Rect) -> Self {
        Self {
            text: text.into(),
            bbox,
        }
    }
}

impl_has_bbox!(Fragment, bbox);

/// A normalized text token placed on the page.
///
/// `row_num` and `col_num` are filled in by the table stage; `col_num` stays
/// `None` for words that never took part in column building.
#[derive(Debug, Clone, PartialEq)]
pub struct Word {
    pub text: String,
    pub bbox: Rect,
    pub row_num: usize,
    pub col_num: Option<usize>,
}

impl Word {
    pub fn new(text: impl Into<String>, bbox: Rect) -> Self {
        Self {
            text: text.into(),
            bbox,
            row_num: 0,
            col_num: None,
        }
    }

    /// Appends `other` to this word: texts joined by one space, boxes unioned.
    pub fn merge(&mut self, other: &Word) {
        self.text.push(' ');
        self.text.push_str(&other.text);
        self.bbox.merge(&other.bbox);
    }

    /// Case-insensitive substring test against an uppercase marker.
    pub fn contains_marker(&self, marker: &str) -> bool {
        self.text.to_uppercase().contains(marker)
    }
}

impl_has_bbox!(Word, bbox);

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}
