//! Text Converter - outputs plain text.

use std::io::Write;

use itertools::Itertools;

use crate::error::Result;
use crate::layout::TableGrid;

use super::base::{Block, ComposedPage};

/// Width that centred lines are indented against.
const TEXT_WIDTH: usize = 80;

/// Text Converter - outputs plain text, one form feed per page.
pub struct TextConverter<W: Write> {
    outfp: W,
}

impl<W: Write> TextConverter<W> {
    pub fn new(outfp: W) -> Self {
        Self { outfp }
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.outfp.write_all(text.as_bytes())?;
        Ok(())
    }

    /// Receive and render a composed page.
    pub fn receive_page(&mut self, page: &ComposedPage) -> Result<()> {
        for block in &page.blocks {
            match block {
                Block::Centred(text) => {
                    let pad = TEXT_WIDTH.saturating_sub(text.chars().count()) / 2;
                    self.write(&format!("{:pad$}{text}\n\n", ""))?;
                }
                Block::Paragraph { lead, body } => {
                    if let Some(lead) = lead {
                        self.write(&lead.to_uppercase())?;
                        self.write("\n")?;
                    }
                    if !body.is_empty() {
                        self.write(body)?;
                        self.write("\n")?;
                    }
                    self.write("\n")?;
                }
                Block::Table(grid) => {
                    self.write(&render_grid(grid))?;
                    self.write("\n")?;
                }
            }
        }
        // Form feed at end of page
        self.write("\x0c")
    }

    pub fn close(&mut self) -> Result<()> {
        self.outfp.flush()?;
        Ok(())
    }
}

/// Pads every column to its widest cell and separates cells with `|`.
fn render_grid(grid: &TableGrid) -> String {
    let mut widths = vec![0usize; grid.columns()];
    for record in grid.records() {
        for (width, cell) in widths.iter_mut().zip(&record) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for record in grid.records() {
        let cells = record
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .join(" | ");
        out.push_str("| ");
        out.push_str(&cells);
        out.push_str(" |\n");
    }
    out
}
