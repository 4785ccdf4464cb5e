//! Word normalization seam.
//!
//! OCR text passes through a [`WordNormalizer`] before it becomes a word. The
//! trait stands in for an external spelling service; the implementations here
//! only filter noise and tidy characters, they never consult a dictionary.

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Accepts or rejects raw fragment text and rewrites accepted text.
///
/// Implementations are shared read-only across page workers.
pub trait WordNormalizer: Send + Sync {
    /// Returns false for text that should be dropped before line building.
    fn accept(&self, text: &str) -> bool;

    /// Rewrites accepted text. Text the implementation does not recognise
    /// must come back unchanged.
    fn normalize(&self, text: &str) -> String;
}

/// Accepts any non-blank text and trims it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassThrough;

impl WordNormalizer for PassThrough {
    fn accept(&self, text: &str) -> bool {
        !text.trim().is_empty()
    }

    fn normalize(&self, text: &str) -> String {
        text.trim().to_string()
    }
}

static ACCOUNTING_NEGATIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\(\s*([0-9][0-9,.]*)\s*\)$").expect("static regex"));

/// Noise filter tuned for OCR'd financial statements.
///
/// Rejects stray single letters (other than `a`) and short punctuation debris,
/// folds compatibility characters with NFKC and collapses runs of whitespace.
#[derive(Debug, Clone, Copy, Default)]
pub struct BasicNormalizer {
    /// Rewrite `(1,234)` as `-1,234`.
    pub negative_parens: bool,
}

impl BasicNormalizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_negative_parens(mut self, enabled: bool) -> Self {
        self.negative_parens = enabled;
        self
    }
}

impl WordNormalizer for BasicNormalizer {
    fn accept(&self, text: &str) -> bool {
        let text = text.trim();
        if text.is_empty() {
            return false;
        }

        let mut chars = text.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            if c.is_alphabetic() {
                return c == 'a' || c == 'A';
            }
        }

        if !text.chars().any(char::is_alphabetic) && text.chars().count() <= 3 {
            return text.chars().all(|c| c.is_ascii_digit());
        }
        true
    }

    fn normalize(&self, text: &str) -> String {
        let folded: String = text.nfkc().collect();
        let collapsed = folded.split_whitespace().collect::<Vec<_>>().join(" ");

        if self.negative_parens
            && let Some(caps) = ACCOUNTING_NEGATIVE.captures(&collapsed)
        {
            return format!("-{}", &caps[1]);
        }
        collapsed
    }
}
