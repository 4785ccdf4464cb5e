//! Column building over table rows.

use tracing::trace;

use crate::geometry::{HasBBox, Rect, within};
use crate::layout::elements::Line;

/// Position of a word inside the slice handed to [`build_columns`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WordRef {
    pub line: usize,
    pub word: usize,
}

/// A vertical cluster of words believed to share a tabular field.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Member words in discovery order.
    pub members: Vec<WordRef>,
    pub bbox: Rect,
    pub col_num: usize,
}

impl Column {
    fn new(at: WordRef, bbox: Rect) -> Self {
        Self {
            members: vec![at],
            bbox,
            col_num: 0,
        }
    }

    /// True if a word box belongs in this column: its left edges agree, or
    /// its right edges agree, or it fits inside the column widened by
    /// `margin`. All tests are strict.
    pub fn accepts(&self, word: &Rect, margin: f64) -> bool {
        within(word.x1, self.bbox.x1, margin)
            || within(word.x2, self.bbox.x2, margin)
            || self.bbox.hcontains(word, margin)
    }

    fn push(&mut self, at: WordRef, bbox: &Rect) {
        self.members.push(at);
        self.bbox.merge(bbox);
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

impl HasBBox for Column {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}

/// Assigns every word of `lines` to exactly one column.
///
/// Words are visited line by line, left to right. Each joins the first
/// column, in creation order, that accepts it against the column's box at
/// that moment; otherwise it starts a new column. Columns are then ordered
/// by left edge and numbered from zero. Each word records its column in
/// `col_num` and each line and word records its index in `row_num`.
pub fn build_columns(lines: &mut [Line], margin: f64) -> Vec<Column> {
    let mut columns: Vec<Column> = Vec::new();

    for (row, line) in lines.iter_mut().enumerate() {
        line.row_num = row;
        for (idx, word) in line.words_mut().iter_mut().enumerate() {
            word.row_num = row;
            let at = WordRef { line: row, word: idx };
            match columns.iter_mut().find(|c| c.accepts(&word.bbox, margin)) {
                Some(column) => column.push(at, &word.bbox),
                None => columns.push(Column::new(at, word.bbox)),
            }
        }
    }

    columns.sort_by(|a, b| a.bbox.x1.total_cmp(&b.bbox.x1));
    for (num, column) in columns.iter_mut().enumerate() {
        column.col_num = num;
        for at in &column.members {
            lines[at.line].words_mut()[at.word].col_num = Some(num);
        }
    }

    trace!(rows = lines.len(), columns = columns.len(), "built columns");
    columns
}
