//! Row and column grids built from numbered table words.

use crate::layout::elements::Line;

/// A single cell: `None` where a row has no word in that column.
pub type Cell = Option<String>;
pub type Row = Vec<Cell>;
pub type Table = Vec<Row>;

/// Rows of cells, one row per table line and one cell per column.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TableGrid {
    rows: Vec<Row>,
    columns: usize,
}

impl TableGrid {
    /// Lays out `lines` whose words already carry a `col_num` below
    /// `columns`. Words sharing a cell are joined with a space; words without
    /// a column are ignored.
    pub fn from_lines(lines: &[Line], columns: usize) -> Self {
        let rows = lines
            .iter()
            .map(|line| {
                let mut row: Row = vec![None; columns];
                for word in line.iter() {
                    let Some(slot) = word.col_num.and_then(|c| row.get_mut(c)) else {
                        continue;
                    };
                    if let Some(text) = slot.as_mut() {
                        text.push(' ');
                        text.push_str(&word.text);
                    } else {
                        *slot = Some(word.text.clone());
                    }
                }
                row
            })
            .filter(|row| row.iter().any(Option::is_some))
            .collect();
        Self { rows, columns }
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows with empty strings in place of missing cells.
    pub fn records(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.as_deref().unwrap_or("")).collect())
    }
}
