//! Axis-aligned rectangles in page space.
//!
//! Coordinates follow the geometry producer: y grows upward, so a larger
//! `y1` means a line sits higher on the page.

use crate::error::{LayoutError, Result};

/// Sentinel used for the bounding box of an empty container.
pub const INF_F64: f64 = f64::MAX;

/// Bounding box `(x1, y1, x2, y2)` with `x1 <= x2` and `y1 <= y2`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Trait for objects that carry a bounding box.
pub trait HasBBox {
    fn bbox(&self) -> Rect;

    fn width(&self) -> f64 {
        self.bbox().width()
    }

    fn height(&self) -> f64 {
        self.bbox().height()
    }
}

impl Rect {
    /// Creates a rectangle, swapping corners if they arrive inverted.
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            x1: x1.min(x2),
            y1: y1.min(y2),
            x2: x1.max(x2),
            y2: y1.max(y2),
        }
    }

    /// The identity element for [`Rect::merge`]. Reports `is_empty() == true`.
    pub const fn empty() -> Self {
        Self {
            x1: INF_F64,
            y1: INF_F64,
            x2: -INF_F64,
            y2: -INF_F64,
        }
    }

    /// Parses a `"x1,y1,x2,y2"` attribute value.
    ///
    /// `page` is only used to label the error.
    pub fn parse_bbox(value: &str, page: usize) -> Result<Self> {
        let coords: Vec<f64> = value
            .split(',')
            .map(|part| part.trim().parse::<f64>())
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| LayoutError::MalformedGeometry {
                page,
                detail: format!("bbox '{value}': {e}"),
            })?;

        match coords.as_slice() {
            [x1, y1, x2, y2] if coords.iter().all(|c| c.is_finite()) => {
                Ok(Self::new(*x1, *y1, *x2, *y2))
            }
            _ => Err(LayoutError::MalformedGeometry {
                page,
                detail: format!("bbox '{value}' needs four finite numbers"),
            }),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.x1 > self.x2 || self.y1 > self.y2
    }

    pub fn width(&self) -> f64 {
        self.x2 - self.x1
    }

    pub fn height(&self) -> f64 {
        self.y2 - self.y1
    }

    pub fn mid_x(&self) -> f64 {
        (self.x1 + self.x2) / 2.0
    }

    /// Grows this rectangle to the bounding union with `other`.
    pub fn merge(&mut self, other: &Rect) {
        self.x1 = self.x1.min(other.x1);
        self.y1 = self.y1.min(other.y1);
        self.x2 = self.x2.max(other.x2);
        self.y2 = self.y2.max(other.y2);
    }

    pub fn union(mut self, other: &Rect) -> Rect {
        self.merge(other);
        self
    }

    /// Fraction of `reference`'s width covered by this rectangle.
    pub fn width_fraction_of(&self, reference: &Rect) -> f64 {
        let total = reference.width();
        if total <= 0.0 {
            return 0.0;
        }
        self.width() / total
    }

    /// True if both vertical edges lie strictly within `margin` of `other`'s.
    pub fn is_vertically_aligned_with(&self, other: &Rect, margin: f64) -> bool {
        within(self.y1, other.y1, margin) && within(self.y2, other.y2, margin)
    }

    /// True if `other` lies strictly inside this rectangle widened by `margin`
    /// on both horizontal sides.
    pub fn hcontains(&self, other: &Rect, margin: f64) -> bool {
        self.x1 - margin < other.x1 && other.x2 < self.x2 + margin
    }

    /// Vertical distance from this rectangle's bottom edge down to `below`'s top.
    ///
    /// Negative when the two overlap vertically.
    pub fn gap_above(&self, below: &Rect) -> f64 {
        self.y1 - below.y2
    }

    /// Formats as the `bbox` attribute used by the geometry XML.
    pub fn to_bbox_str(&self) -> String {
        format!("{:.3},{:.3},{:.3},{:.3}", self.x1, self.y1, self.x2, self.y2)
    }
}

impl Default for Rect {
    fn default() -> Self {
        Self::empty()
    }
}

impl HasBBox for Rect {
    fn bbox(&self) -> Rect {
        *self
    }
}

/// Strict two-sided tolerance test: `reference - margin < value < reference + margin`.
pub fn within(value: f64, reference: f64, margin: f64) -> bool {
    reference - margin < value && value < reference + margin
}
