//! Line role classification.
//!
//! Lines move from `Unclassified` to exactly one role through a fixed series
//! of passes. Each pass is a plain function from lines to lines so it can be
//! exercised on its own:
//!
//! 1. `mark_tables`            multi-word lines are table rows
//! 2. `mark_headers`           statement title block at the top of the page
//! 3. `mark_footers`           boilerplate at the bottom of the page
//! 4. `mark_centred`           short lines straddling the page centre
//! 5. `mark_wide_paragraphs`   lines spanning most of the page width
//! 6. `propagate_neighbours`   stragglers inherit an adjacent line's role
//! 7. `apply_fallback`         everything left gets the configured role
//! 8. `correct_isolated_tables` lone rows inside prose become prose
//!
//! Passes 2 and 3 may also reclaim lines that pass 1 marked as table rows,
//! since a title split into several fragments looks like a row. Every other
//! pass only touches unclassified lines.

use tracing::debug;

use crate::geometry::{HasBBox, Rect};

use crate::layout::elements::{Line, LineType, sort_top_down};
use crate::layout::params::{Fallback, LayoutParams};
use crate::layout::phrases::PhraseBook;

/// Page-level inputs shared by the passes.
#[derive(Debug, Clone, Copy)]
pub struct PageContext<'a> {
    pub page: Rect,
    pub params: &'a LayoutParams,
    pub phrases: &'a PhraseBook,
}

impl<'a> PageContext<'a> {
    pub fn new(page: Rect, params: &'a LayoutParams, phrases: &'a PhraseBook) -> Self {
        Self {
            page,
            params,
            phrases,
        }
    }

    fn in_header_region(&self, line: &Line) -> bool {
        line.bbox().y1 > self.page.y2 - self.params.header_fraction * self.page.height()
    }

    fn in_footer_region(&self, line: &Line) -> bool {
        line.bbox().y1 < self.page.y1 + self.params.footer_fraction * self.page.height()
    }
}

/// Runs every pass in order and returns the lines sorted top-down, each with
/// a role other than `Unclassified`.
pub fn classify_lines(mut lines: Vec<Line>, ctx: &PageContext<'_>) -> Vec<Line> {
    sort_top_down(&mut lines);

    let lines = mark_tables(lines);
    let lines = mark_headers(lines, ctx);
    let lines = mark_footers(lines, ctx);
    let lines = mark_centred(lines, ctx);
    let lines = mark_wide_paragraphs(lines, ctx);
    let lines = propagate_neighbours(lines, ctx.params.adj_margin);
    let lines = apply_fallback(lines, ctx.params.fallback);
    let lines = if ctx.params.isolate_tables {
        correct_isolated_tables(lines)
    } else {
        lines
    };

    debug!(
        lines = lines.len(),
        tables = count(&lines, LineType::Table),
        paras = count(&lines, LineType::Para),
        centred = count(&lines, LineType::Centre),
        headers = count(&lines, LineType::Header),
        footers = count(&lines, LineType::Footer),
        "classified page"
    );
    lines
}

fn count(lines: &[Line], kind: LineType) -> usize {
    lines.iter().filter(|l| l.line_type == kind).count()
}

fn claimable_by_phrase(line: &Line) -> bool {
    matches!(line.line_type, LineType::Unclassified | LineType::Table)
}

/// Unmerged multi-word lines are likely rows with separated columns.
pub fn mark_tables(mut lines: Vec<Line>) -> Vec<Line> {
    for line in &mut lines {
        if line.line_type == LineType::Unclassified && line.len() > 1 {
            line.line_type = LineType::Table;
        }
    }
    lines
}

/// Marks the statement title block. Expects lines sorted top-down.
///
/// Lines in the header region that precede the title (company name, report
/// name) are held back and only marked once a title or an ending phrase
/// shows up. After the title, lines keep being marked while they carry a
/// title or ending phrase; the first other line ends the block.
pub fn mark_headers(mut lines: Vec<Line>, ctx: &PageContext<'_>) -> Vec<Line> {
    let mut pending: Vec<usize> = Vec::new();
    let mut claimed: Vec<usize> = Vec::new();
    let mut started = false;

    for (idx, line) in lines.iter().enumerate() {
        if !ctx.in_header_region(line) || !claimable_by_phrase(line) {
            break;
        }
        let title = ctx.phrases.is_title(line);
        let ending = ctx.phrases.is_ending(line);

        if started {
            if title || ending {
                claimed.push(idx);
                continue;
            }
            break;
        }

        if title || ending {
            claimed.append(&mut pending);
            claimed.push(idx);
            if ending {
                break;
            }
            started = true;
        } else {
            pending.push(idx);
        }
    }

    for idx in claimed {
        lines[idx].line_type = LineType::Header;
    }
    lines
}

/// Marks footer boilerplate, scanning bottom-up. Expects lines sorted
/// top-down.
///
/// Non-matching lines below the first match are skipped; once a footer run
/// has started, the first non-matching line ends it.
pub fn mark_footers(mut lines: Vec<Line>, ctx: &PageContext<'_>) -> Vec<Line> {
    let mut started = false;

    for line in lines.iter_mut().rev() {
        if !ctx.in_footer_region(line) {
            break;
        }
        if claimable_by_phrase(line) && ctx.phrases.is_footer(line) {
            line.line_type = LineType::Footer;
            started = true;
        } else if started {
            break;
        }
    }
    lines
}

/// True if the line straddles the page midpoint with balanced overhangs and
/// is narrower than `centre_cutoff` of the page.
///
/// ```text
///   page.x1             mid              page.x2
///   |          +---------|---------+          |
///   |          |<-left-->|<-right->|          |
///   |          +---------|---------+          |
///   |left - right| < centre_margin
/// ```
pub fn is_centred(line: &Rect, page: &Rect, params: &LayoutParams) -> bool {
    let mid = page.mid_x();
    if !(line.x1 < mid && mid < line.x2) {
        return false;
    }
    let left = mid - line.x1;
    let right = line.x2 - mid;
    (left - right).abs() < params.centre_margin
        && line.width_fraction_of(page) < params.centre_cutoff
}

pub fn mark_centred(mut lines: Vec<Line>, ctx: &PageContext<'_>) -> Vec<Line> {
    for line in &mut lines {
        if line.line_type == LineType::Unclassified
            && is_centred(&line.bbox(), &ctx.page, ctx.params)
        {
            line.line_type = LineType::Centre;
        }
    }
    lines
}

pub fn mark_wide_paragraphs(mut lines: Vec<Line>, ctx: &PageContext<'_>) -> Vec<Line> {
    for line in &mut lines {
        if line.line_type == LineType::Unclassified
            && line.bbox().width_fraction_of(&ctx.page) > ctx.params.large_cutoff
        {
            line.line_type = LineType::Para;
        }
    }
    lines
}

/// Unclassified lines inherit the role of the line directly below, or failing
/// that directly above, when the vertical gap to it is under `adj_margin`.
///
/// Reads the roles as they were before the pass, so the outcome does not
/// depend on visiting order. Expects lines sorted top-down.
pub fn propagate_neighbours(mut lines: Vec<Line>, adj_margin: f64) -> Vec<Line> {
    let before: Vec<LineType> = lines.iter().map(|l| l.line_type).collect();
    let boxes: Vec<Rect> = lines.iter().map(HasBBox::bbox).collect();

    for idx in 0..lines.len() {
        if before[idx].is_classified() {
            continue;
        }
        let below = idx + 1 < lines.len()
            && before[idx + 1].is_classified()
            && boxes[idx].gap_above(&boxes[idx + 1]) < adj_margin;
        let above = idx > 0
            && before[idx - 1].is_classified()
            && boxes[idx - 1].gap_above(&boxes[idx]) < adj_margin;

        if below {
            lines[idx].line_type = before[idx + 1];
        } else if above {
            lines[idx].line_type = before[idx - 1];
        }
    }
    lines
}

pub fn apply_fallback(mut lines: Vec<Line>, fallback: Fallback) -> Vec<Line> {
    let role = match fallback {
        Fallback::Para => LineType::Para,
        Fallback::Table => LineType::Table,
    };
    for line in &mut lines {
        if line.line_type == LineType::Unclassified {
            line.line_type = role;
        }
    }
    lines
}

/// A table line with paragraph lines directly above and below it is prose
/// that happened to split into several words.
pub fn correct_isolated_tables(mut lines: Vec<Line>) -> Vec<Line> {
    let before: Vec<LineType> = lines.iter().map(|l| l.line_type).collect();
    for idx in 1..lines.len().saturating_sub(1) {
        if before[idx] == LineType::Table
            && before[idx - 1] == LineType::Para
            && before[idx + 1] == LineType::Para
        {
            lines[idx].line_type = LineType::Para;
        }
    }
    lines
}
