//! Boilerplate phrase patterns for statement headers and footers.
//!
//! A pattern is a list of uppercase marker words. A line matches when each
//! marker occurs, case-insensitively, inside some word of the line; order and
//! exclusivity do not matter.

use once_cell::sync::Lazy;

use super::elements::Line;

/// A set of marker words that together identify a phrase.
pub type Pattern = &'static [&'static str];

const TITLES: &[Pattern] = &[
    &["PROFIT", "LOSS", "ACCOUNT"],
    &["STATEMENT", "COMPREHENSIVE", "INCOME"],
    &["ABRIDGED", "PROFIT", "LOSS", "ACCOUNT"],
    &["INCOME", "EXPENDITURE"],
    &["INCOME", "STATEMENT"],
    &["OTHER", "COMPREHENSIVE", "INCOME"],
    &["STATEMENT", "FINANCIAL", "ACTIVITIES"],
    &["STATEMENT", "INCOME", "RETAINED", "EARNINGS"],
];

const HEADER_ENDINGS: &[Pattern] = &[
    &["FOR", "THE", "YEAR", "ENDED"],
    &["FOR", "THE", "PERIOD", "ENDED"],
    &["YEAR", "ENDED"],
];

const FOOTERS: &[Pattern] = &[
    &["NOTES", "FORM", "PART", "THESE", "FINANCIAL", "STATEMENTS"],
    &["PAGE"],
];

static STANDARD: Lazy<PhraseBook> = Lazy::new(|| PhraseBook {
    titles: TITLES.to_vec(),
    endings: HEADER_ENDINGS.to_vec(),
    footers: FOOTERS.to_vec(),
});

/// Ordered pattern lists used by the header and footer passes.
#[derive(Debug, Clone, PartialEq)]
pub struct PhraseBook {
    /// Profit-and-loss statement titles.
    pub titles: Vec<Pattern>,
    /// "For the year ended" style lines that close a header block.
    pub endings: Vec<Pattern>,
    /// Footer boilerplate.
    pub footers: Vec<Pattern>,
}

impl PhraseBook {
    /// The built-in book, shared process-wide.
    pub fn standard() -> &'static PhraseBook {
        &STANDARD
    }

    pub fn is_title(&self, line: &Line) -> bool {
        matches_any(line, &self.titles)
    }

    pub fn is_ending(&self, line: &Line) -> bool {
        matches_any(line, &self.endings)
    }

    pub fn is_footer(&self, line: &Line) -> bool {
        matches_any(line, &self.footers)
    }
}

impl Default for PhraseBook {
    fn default() -> Self {
        STANDARD.clone()
    }
}

/// True if `line` matches at least one of `patterns`.
pub fn matches_any(line: &Line, patterns: &[Pattern]) -> bool {
    patterns.iter().any(|pattern| line.matches_markers(pattern))
}

/// True if any line carries a profit-and-loss statement title.
///
/// Pages failing this test are left out of tabular output.
pub fn p_l_filter(lines: &[Line], book: &PhraseBook) -> bool {
    lines.iter().any(|line| book.is_title(line))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::layout::elements::Word;

    fn line(words: &[&str]) -> Line {
        let mut line = Line::new();
        for (i, text) in words.iter().enumerate() {
            let x = i as f64 * 100.0;
            line.add_word(Word::new(*text, Rect::new(x, 700.0, x + 80.0, 712.0)));
        }
        line
    }

    #[test]
    fn title_split_across_words_matches() {
        let book = PhraseBook::standard();
        assert!(book.is_title(&line(&["PROFIT", "AND", "LOSS", "ACCOUNT"])));
        assert!(book.is_title(&line(&["Income and Expenditure Account"])));
    }

    #[test]
    fn partial_title_does_not_match() {
        let book = PhraseBook::standard();
        assert!(!book.is_title(&line(&["PROFIT", "AND", "LOSS"])));
    }

    #[test]
    fn endings_and_footers() {
        let book = PhraseBook::standard();
        assert!(book.is_ending(&line(&["for the year ended 31 March 2019"])));
        assert!(book.is_footer(&line(&["Page 4"])));
        assert!(book.is_footer(&line(&[
            "The notes on pages 6 to 9 form part of these financial statements"
        ])));
        assert!(!book.is_footer(&line(&["Turnover", "1,000"])));
    }

    #[test]
    fn p_l_filter_needs_a_title_line() {
        let book = PhraseBook::standard();
        let with_title = vec![line(&["Turnover", "1,000"]), line(&["Income statement"])];
        let without = vec![line(&["Balance sheet"]), line(&["Turnover", "1,000"])];
        assert!(p_l_filter(&with_title, book));
        assert!(!p_l_filter(&without, book));
    }
}
