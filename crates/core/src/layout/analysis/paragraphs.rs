//! Paragraph segmentation.

use tracing::trace;

use crate::geometry::{HasBBox, Rect};
use crate::layout::elements::{Line, Paragraph};

/// Partitions paragraph lines, given top-down, into contiguous blocks.
///
/// A new paragraph starts whenever the gap between the previous line's
/// bottom edge and the next line's top edge exceeds `para_margin`. The
/// first line of each paragraph is flagged as a bold lead when it covers
/// less than `bold_cutoff` of the page width.
pub fn segment_paragraphs(
    lines: Vec<Line>,
    page: &Rect,
    para_margin: f64,
    bold_cutoff: f64,
) -> Vec<Paragraph> {
    let mut paragraphs: Vec<Paragraph> = Vec::new();

    for line in lines {
        if line.is_empty() {
            continue;
        }
        let continues = paragraphs
            .last()
            .and_then(Paragraph::last)
            .is_some_and(|prev| prev.bbox().gap_above(&line.bbox()) <= para_margin);

        match paragraphs.last_mut() {
            Some(current) if continues => current.add_line(line),
            _ => {
                let mut paragraph = Paragraph::new(line);
                paragraph.lead_is_heading = paragraph
                    .lines()
                    .first()
                    .is_some_and(|first| first.bbox().width_fraction_of(page) < bold_cutoff);
                paragraphs.push(paragraph);
            }
        }
    }

    trace!(paragraphs = paragraphs.len(), "segmented paragraphs");
    paragraphs
}
