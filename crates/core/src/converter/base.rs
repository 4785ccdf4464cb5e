//! Document composition shared by the flowing converters.
//!
//! A classified page is folded into ordered blocks: runs of consecutive lines
//! with the same role become one unit of output.
//!
//! - CENTRE and HEADER lines: one centred bold block per line
//! - PARA runs: paragraphs split on vertical gaps
//! - TABLE runs: a grid, or a plain paragraph when fewer than two columns
//!   are found
//! - FOOTER lines: dropped

use itertools::Itertools;
use tracing::debug;

use crate::geometry::Rect;
use crate::layout::elements::{Line, LineType};
use crate::layout::params::LayoutParams;
use crate::layout::{TableGrid, build_columns, segment_paragraphs};

/// Unit of flowing output.
#[derive(Debug, Clone, PartialEq)]
pub enum Block {
    /// A single centred heading line.
    Centred(String),
    /// Paragraph text with an optional bold lead line.
    Paragraph { lead: Option<String>, body: String },
    /// Rows by columns, missing cells empty.
    Table(TableGrid),
}

/// A page ready for a flowing converter.
#[derive(Debug, Clone, PartialEq)]
pub struct ComposedPage {
    pub number: usize,
    pub blocks: Vec<Block>,
}

/// Tabular extraction result of one page.
#[derive(Debug, Clone, PartialEq)]
pub struct TabularPage {
    pub number: usize,
    pub grid: TableGrid,
}

/// Folds classified lines, given top-down, into output blocks.
pub fn compose_blocks(lines: &[Line], page: &Rect, params: &LayoutParams) -> Vec<Block> {
    let mut blocks = Vec::new();

    for (line_type, run) in &lines.iter().chunk_by(|line| line.line_type) {
        let run: Vec<Line> = run.cloned().collect();
        match line_type {
            LineType::Footer => {}
            LineType::Centre | LineType::Header => {
                blocks.extend(run.iter().map(|line| Block::Centred(line.text())));
            }
            LineType::Table => blocks.push(table_block(run, params)),
            LineType::Para | LineType::Unclassified => {
                let paragraphs =
                    segment_paragraphs(run, page, params.para_margin, params.bold_cutoff);
                blocks.extend(paragraphs.iter().map(|paragraph| {
                    let (lead, body) = paragraph.lead_and_body();
                    Block::Paragraph { lead, body }
                }));
            }
        }
    }
    blocks
}

fn table_block(mut run: Vec<Line>, params: &LayoutParams) -> Block {
    let columns = build_columns(&mut run, params.column_margin);
    if columns.len() < 2 {
        debug!(
            rows = run.len(),
            columns = columns.len(),
            "table run rendered as paragraph"
        );
        let body = run.iter().map(Line::text).join(" ");
        return Block::Paragraph { lead: None, body };
    }
    Block::Table(TableGrid::from_lines(&run, columns.len()))
}
