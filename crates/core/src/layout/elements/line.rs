//! Lines and their structural roles.

use std::fmt;

use crate::geometry::{HasBBox, Rect};

use super::word::Word;

/// Structural role assigned to a line by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineType {
    /// Not yet claimed by any classification pass.
    #[default]
    Unclassified,
    /// Short line centred on the page, rendered as a heading.
    Centre,
    /// Row of a table.
    Table,
    /// Body text.
    Para,
    /// Statement title block at the top of the page.
    Header,
    /// Boilerplate at the bottom of the page.
    Footer,
}

impl LineType {
    pub fn is_classified(self) -> bool {
        self != LineType::Unclassified
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LineType::Unclassified => "unclassified",
            LineType::Centre => "centre",
            LineType::Table => "table",
            LineType::Para => "para",
            LineType::Header => "header",
            LineType::Footer => "footer",
        };
        f.write_str(name)
    }
}

/// A horizontal cluster of words believed to share a baseline.
///
/// The bounding box is the union of the word boxes and is kept up to date as
/// words are added. A line with no words is a valid intermediate state.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Line {
    words: Vec<Word>,
    bbox: Rect,
    pub line_type: LineType,
    pub row_num: usize,
}

impl Line {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_word(word: Word) -> Self {
        let mut line = Self::new();
        line.add_word(word);
        line
    }

    /// Creates an empty line carrying over `other`'s role and row.
    pub fn empty_like(other: &Line) -> Self {
        Self {
            line_type: other.line_type,
            row_num: other.row_num,
            ..Self::default()
        }
    }

    pub fn add_word(&mut self, word: Word) {
        self.bbox.merge(&word.bbox);
        self.words.push(word);
    }

    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Mutable access for grid bookkeeping. Callers must not move boxes.
    pub(crate) fn words_mut(&mut self) -> &mut [Word] {
        &mut self.words
    }

    pub fn into_words(self) -> Vec<Word> {
        self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &Word> {
        self.words.iter()
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Stable left-to-right sort on `x1`.
    pub fn sort_words(&mut self) {
        self.words.sort_by(|a, b| a.bbox.x1.total_cmp(&b.bbox.x1));
    }

    /// Words joined by single spaces.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for (i, word) in self.words.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            out.push_str(&word.text);
        }
        out
    }

    /// True if every marker appears, case-insensitively, inside some word.
    pub fn matches_markers(&self, markers: &[&str]) -> bool {
        markers
            .iter()
            .all(|marker| self.words.iter().any(|word| word.contains_marker(marker)))
    }
}

impl HasBBox for Line {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Stable top-down sort: higher `y1` first.
pub(crate) fn sort_top_down(lines: &mut [Line]) {
    lines.sort_by(|a, b| b.bbox.y1.total_cmp(&a.bbox.y1));
}
