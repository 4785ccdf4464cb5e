//! Per-page layout pipeline.
//!
//! ```text
//! fragments -> lines -> merged lines -> classified lines -+-> blocks (text/html)
//!                                                         +-> grid   (csv)
//! ```

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::converter::{ComposedPage, TabularPage, compose_blocks};
use crate::geometry::Rect;
use crate::input::PageFragments;
use crate::layout::elements::{Line, LineType};
use crate::layout::params::LayoutParams;
use crate::layout::phrases::{PhraseBook, p_l_filter};
use crate::layout::{
    PageContext, TableGrid, Triage, build_columns, classify_lines, group_fragments, merge_lines,
};
use crate::normalize::{BasicNormalizer, WordNormalizer};

/// Classified lines of one page, top-down.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub number: usize,
    pub bbox: Rect,
    pub lines: Vec<Line>,
}

impl PageLayout {
    /// The page's words as input fragments, for re-ingestion.
    pub fn to_fragments(&self) -> PageFragments {
        PageFragments::from_lines(self.number, self.bbox, &self.lines)
    }

    pub fn count(&self, line_type: LineType) -> usize {
        self.lines.iter().filter(|l| l.line_type == line_type).count()
    }
}

/// Read-only state shared by every page worker.
#[derive(Clone)]
pub struct Engine {
    params: LayoutParams,
    normalizer: Arc<dyn WordNormalizer>,
    phrases: PhraseBook,
    triage: Triage,
}

impl fmt::Debug for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Engine")
            .field("params", &self.params)
            .field("phrases", &self.phrases)
            .field("triage_entries", &self.triage.len())
            .finish_non_exhaustive()
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new(LayoutParams::default())
    }
}

impl Engine {
    /// An engine with the basic normalizer, the standard phrase book and
    /// the standard triage vocabulary.
    pub fn new(params: LayoutParams) -> Self {
        Self {
            params,
            normalizer: Arc::new(BasicNormalizer::new()),
            phrases: PhraseBook::standard().clone(),
            triage: Triage::standard(),
        }
    }

    pub fn with_params(mut self, params: LayoutParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_normalizer(mut self, normalizer: Arc<dyn WordNormalizer>) -> Self {
        self.normalizer = normalizer;
        self
    }

    pub fn with_phrases(mut self, phrases: PhraseBook) -> Self {
        self.phrases = phrases;
        self
    }

    pub fn with_triage(mut self, triage: Triage) -> Self {
        self.triage = triage;
        self
    }

    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    pub fn phrases(&self) -> &PhraseBook {
        &self.phrases
    }

    pub fn triage(&self) -> &Triage {
        &self.triage
    }

    /// Builds, merges and classifies the lines of one page.
    pub fn analyze_page(&self, page: &PageFragments) -> PageLayout {
        self.analyze_with(page, &self.params)
    }

    fn analyze_with(&self, page: &PageFragments, params: &LayoutParams) -> PageLayout {
        let lines = group_fragments(&page.fragments, self.normalizer.as_ref(), params.line_margin);
        let built = lines.len();
        let mut lines = merge_lines(lines, params.merge_margin);
        lines.retain(|line| !line.is_empty());

        let ctx = PageContext::new(page.bbox, params, &self.phrases);
        let lines = classify_lines(lines, &ctx);
        debug!(
            page = page.number,
            fragments = page.fragments.len(),
            lines = built,
            words = lines.iter().map(Line::len).sum::<usize>(),
            "analyzed page"
        );

        PageLayout {
            number: page.number,
            bbox: page.bbox,
            lines,
        }
    }

    /// Folds an analyzed page into blocks for the flowing converters.
    pub fn compose(&self, layout: &PageLayout) -> ComposedPage {
        ComposedPage {
            number: layout.number,
            blocks: compose_blocks(&layout.lines, &layout.bbox, &self.params),
        }
    }

    /// Runs the tabular variant of the pipeline.
    ///
    /// Returns `None` for pages without a profit-and-loss title line.
    pub fn tabulate(&self, page: &PageFragments) -> Option<TabularPage> {
        let params = self.params.tabular();
        let layout = self.analyze_with(page, &params);
        if !p_l_filter(&layout.lines, &self.phrases) {
            debug!(page = page.number, "no statement title, page left out of tables");
            return None;
        }

        let mut rows: Vec<Line> = layout
            .lines
            .into_iter()
            .filter(|line| line.line_type == LineType::Table)
            .collect();
        let columns = build_columns(&mut rows, params.column_margin);
        self.triage.apply(&mut rows);
        debug!(
            page = page.number,
            rows = rows.len(),
            columns = columns.len(),
            "tabulated page"
        );

        Some(TabularPage {
            number: page.number,
            grid: TableGrid::from_lines(&rows, columns.len()),
        })
    }
}
