//! Paragraph blocks.

use crate::geometry::{HasBBox, Rect};

use super::line::Line;

/// A vertically contiguous run of paragraph lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    lines: Vec<Line>,
    bbox: Rect,
    /// The first line is short enough to be rendered as a bold sub-heading.
    pub lead_is_heading: bool,
}

impl Paragraph {
    pub fn new(line: Line) -> Self {
        let bbox = line.bbox();
        Self {
            lines: vec![line],
            bbox,
            lead_is_heading: false,
        }
    }

    pub fn add_line(&mut self, line: Line) {
        self.bbox.merge(&line.bbox());
        self.lines.push(line);
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    pub fn last(&self) -> Option<&Line> {
        self.lines.last()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Splits into the optional bold lead and the joined body text.
    pub fn lead_and_body(&self) -> (Option<String>, String) {
        let (lead, rest) = if self.lead_is_heading {
            match self.lines.split_first() {
                Some((first, rest)) => (Some(first.text()), rest),
                None => (None, &self.lines[..]),
            }
        } else {
            (None, &self.lines[..])
        };
        let body = rest.iter().map(Line::text).collect::<Vec<_>>().join(" ");
        (lead, body)
    }
}

impl HasBBox for Paragraph {
    fn bbox(&self) -> Rect {
        self.bbox
    }
}
