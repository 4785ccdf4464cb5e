//! Layout reconstruction parameters.
//!
//! Contains LayoutParams and the named presets that bundle them.

use serde::Deserialize;

use crate::error::{LayoutError, Result};

/// Names accepted by [`LayoutParams::preset`], in display order.
pub const PRESET_NAMES: &[&str] = &["standard", "sparse", "dense"];

/// Role given to lines that no heuristic claimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Fallback {
    /// Flowing document output.
    #[default]
    Para,
    /// Tabular extraction, where stray labels are usually row headings.
    Table,
}

/// Parameters for layout reconstruction.
///
/// All margins are in page coordinate units; cutoffs are fractions of the
/// page width. Every comparison against them is strict.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LayoutParams {
    /// Vertical tolerance for clustering fragments into lines. Both the top and
    /// bottom edge of a fragment must fall within this distance of the line's.
    pub line_margin: f64,

    /// Words closer than this horizontally are merged into one token.
    pub merge_margin: f64,

    /// Vertical gap under which an unclassified line inherits its
    /// neighbour's role.
    pub adj_margin: f64,

    /// Lines wider than this fraction of the page are paragraph text.
    pub large_cutoff: f64,

    /// Vertical gap above which a new paragraph starts.
    pub para_margin: f64,

    /// Horizontal tolerance for grouping table words into columns.
    pub column_margin: f64,

    /// Allowed difference between left and right overhang of a centred line.
    #[serde(default = "default_centre_margin")]
    pub centre_margin: f64,

    /// Centred lines must be narrower than this fraction of the page.
    #[serde(default = "default_centre_cutoff")]
    pub centre_cutoff: f64,

    /// A paragraph's first line narrower than this fraction of the page is
    /// rendered as a bold lead.
    #[serde(default = "default_bold_cutoff")]
    pub bold_cutoff: f64,

    /// Height fraction, from the top edge, scanned for statement titles.
    #[serde(default = "default_region_fraction")]
    pub header_fraction: f64,

    /// Height fraction, from the bottom edge, scanned for footer boilerplate.
    #[serde(default = "default_region_fraction")]
    pub footer_fraction: f64,

    /// Role for lines left unclassified after neighbour propagation.
    #[serde(default)]
    pub fallback: Fallback,

    /// Demote a lone table row wedged between paragraph lines.
    #[serde(default = "default_isolate_tables")]
    pub isolate_tables: bool,
}

fn default_centre_margin() -> f64 {
    15.0
}

fn default_centre_cutoff() -> f64 {
    0.8
}

fn default_bold_cutoff() -> f64 {
    0.6
}

fn default_region_fraction() -> f64 {
    0.25
}

fn default_isolate_tables() -> bool {
    true
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            line_margin: 7.0,
            merge_margin: 15.0,
            adj_margin: 15.0,
            large_cutoff: 0.6,
            para_margin: 20.0,
            column_margin: 20.0,
            centre_margin: default_centre_margin(),
            centre_cutoff: default_centre_cutoff(),
            bold_cutoff: default_bold_cutoff(),
            header_fraction: default_region_fraction(),
            footer_fraction: default_region_fraction(),
            fallback: Fallback::Para,
            isolate_tables: default_isolate_tables(),
        }
    }
}

impl LayoutParams {
    /// Looks up a named preset.
    pub fn preset(name: &str) -> Result<Self> {
        let base = Self::default();
        match name.trim().to_lowercase().as_str() {
            "standard" | "default" => Ok(base),
            "sparse" => Ok(Self {
                merge_margin: 20.0,
                column_margin: 25.0,
                ..base
            }),
            "dense" => Ok(Self {
                line_margin: 5.0,
                merge_margin: 10.0,
                column_margin: 15.0,
                ..base
            }),
            _ => Err(LayoutError::UnknownPreset {
                name: name.to_string(),
                valid: PRESET_NAMES.join(", "),
            }),
        }
    }

    /// Parses a JSON object. The six margin/cutoff options are required.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let params: Self =
            serde_json::from_str(json).map_err(|e| LayoutError::InvalidConfig(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    /// The variant used for CSV extraction: unclaimed lines become table
    /// rows and lone rows are kept.
    pub fn tabular(&self) -> Self {
        Self {
            fallback: Fallback::Table,
            isolate_tables: false,
            ..self.clone()
        }
    }

    /// Checks that margins are non-negative and cutoffs lie in (0, 1].
    pub fn validate(&self) -> Result<()> {
        let margins = [
            ("line_margin", self.line_margin),
            ("merge_margin", self.merge_margin),
            ("adj_margin", self.adj_margin),
            ("para_margin", self.para_margin),
            ("column_margin", self.column_margin),
            ("centre_margin", self.centre_margin),
        ];
        for (name, value) in margins {
            if !value.is_finite() || value < 0.0 {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must be a non-negative number, got {value}"
                )));
            }
        }

        let fractions = [
            ("large_cutoff", self.large_cutoff),
            ("centre_cutoff", self.centre_cutoff),
            ("bold_cutoff", self.bold_cutoff),
            ("header_fraction", self.header_fraction),
            ("footer_fraction", self.footer_fraction),
        ];
        for (name, value) in fractions {
            if !(value > 0.0 && value <= 1.0) {
                return Err(LayoutError::InvalidConfig(format!(
                    "{name} must lie in (0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}
