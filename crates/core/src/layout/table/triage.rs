//! Canonical line-item vocabulary for tabular output.

use indexmap::IndexMap;

use crate::error::{LayoutError, Result};
use crate::layout::elements::Line;

const STANDARD_VOCABULARY: &[(&str, &str)] = &[
    ("turnover", "Turnover"),
    ("revenue", "Turnover"),
    ("sales", "Turnover"),
    ("cost of sales", "Cost of sales"),
    ("gross profit", "Gross profit"),
    ("gross loss", "Gross loss"),
    ("administrative expenses", "Administrative expenses"),
    ("distribution costs", "Distribution costs"),
    ("other operating income", "Other operating income"),
    ("operating profit", "Operating profit"),
    ("operating loss", "Operating loss"),
    ("interest receivable", "Interest receivable and similar income"),
    ("interest payable", "Interest payable and similar charges"),
    ("profit before tax", "Profit on ordinary activities before taxation"),
    ("profit before taxation", "Profit on ordinary activities before taxation"),
    ("loss before tax", "Loss on ordinary activities before taxation"),
    ("loss before taxation", "Loss on ordinary activities before taxation"),
    ("tax on profit", "Tax on profit on ordinary activities"),
    ("tax on loss", "Tax on loss on ordinary activities"),
    ("profit for the financial year", "Profit for the financial year"),
    ("profit for the year", "Profit for the financial year"),
    ("loss for the financial year", "Loss for the financial year"),
    ("loss for the year", "Loss for the financial year"),
    ("dividends", "Dividends"),
    ("retained profit", "Retained profit for the financial year"),
    // Canonical labels are fixed points.
    ("interest receivable and similar income", "Interest receivable and similar income"),
    ("interest payable and similar charges", "Interest payable and similar charges"),
    (
        "profit on ordinary activities before taxation",
        "Profit on ordinary activities before taxation",
    ),
    ("loss on ordinary activities before taxation", "Loss on ordinary activities before taxation"),
    ("tax on profit on ordinary activities", "Tax on profit on ordinary activities"),
    ("tax on loss on ordinary activities", "Tax on loss on ordinary activities"),
    ("retained profit for the financial year", "Retained profit for the financial year"),
];

/// Maps observed line-item labels onto a fixed report vocabulary.
///
/// Keys are matched as lowercase substrings. When several keys match, the
/// longest wins; equal lengths fall back to declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct Triage {
    entries: Vec<(String, String)>,
}

impl Triage {
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut entries: Vec<(String, String)> = entries
            .into_iter()
            .map(|(k, v)| (k.into().to_lowercase(), v.into()))
            .filter(|(k, _)| !k.is_empty())
            .collect();
        entries.sort_by(|a, b| b.0.len().cmp(&a.0.len()));
        Self { entries }
    }

    /// The built-in profit-and-loss vocabulary.
    pub fn standard() -> Self {
        Self::new(STANDARD_VOCABULARY.iter().copied())
    }

    /// Loads a JSON object of `"observed phrase": "canonical label"` pairs.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let map: IndexMap<String, String> = serde_json::from_str(json)?;
        if map.is_empty() {
            return Err(LayoutError::InvalidConfig(
                "triage table has no entries".to_string(),
            ));
        }
        Ok(Self::new(map))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Canonical label for `text`, or `text` lowercased if no key matches.
    pub fn canonicalize(&self, text: &str) -> String {
        let lower = text.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| lower.contains(key.as_str()))
            .map(|(_, label)| label.clone())
            .unwrap_or(lower)
    }

    /// Rewrites every word of `lines` in place.
    pub fn apply(&self, lines: &mut [Line]) {
        for line in lines {
            for word in line.words_mut() {
                word.text = self.canonicalize(&word.text);
            }
        }
    }
}

impl Default for Triage {
    fn default() -> Self {
        Self::standard()
    }
}
