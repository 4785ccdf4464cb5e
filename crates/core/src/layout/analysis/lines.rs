//! Fragment-to-line clustering.

use tracing::trace;

use crate::geometry::HasBBox;
use crate::normalize::WordNormalizer;

use super::super::elements::{Fragment, Line, Word};

/// Groups fragments into horizontal lines.
///
/// Fragments are visited in source order. Each one joins the first existing
/// line (in creation order) whose current bounding box has both its bottom
/// and top edge within `margin` of the fragment's:
///
/// ```text
///   line.y2 ± margin   - - - - +-----------+ - - - -
///                              | fragment  |
///   line.y1 ± margin   - - - - +-----------+ - - - -
/// ```
///
/// The test runs against the line's box as it stands at insertion time, so
/// earlier fragments bias later grouping; callers must keep source order
/// stable. A fragment that fits no line starts a new one.
///
/// Text rejected by `normalizer` is dropped before clustering.
pub fn group_fragments(
    fragments: &[Fragment],
    normalizer: &dyn WordNormalizer,
    margin: f64,
) -> Vec<Line> {
    let mut lines: Vec<Line> = Vec::new();

    for fragment in fragments {
        if !normalizer.accept(&fragment.text) {
            trace!(text = %fragment.text, "fragment rejected by normalizer");
            continue;
        }
        let text = normalizer.normalize(&fragment.text);
        if text.is_empty() {
            continue;
        }
        let word = Word::new(text, fragment.bbox);

        let target = lines
            .iter()
            .position(|line| word.bbox.is_vertically_aligned_with(&line.bbox(), margin));
        match target {
            Some(idx) => lines[idx].add_word(word),
            None => lines.push(Line::from_word(word)),
        }
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::Rect;
    use crate::normalize::PassThrough;

    fn frag(text: &str, x1: f64, y1: f64, x2: f64, y2: f64) -> Fragment {
        Fragment::new(text, Rect::new(x1, y1, x2, y2))
    }

    #[test]
    fn fragments_on_one_baseline_share_a_line() {
        let fragments = vec![
            frag("Revenue", 10.0, 100.0, 60.0, 110.0),
            frag("1,000", 200.0, 100.0, 240.0, 110.0),
            frag("1,200", 300.0, 100.0, 340.0, 110.0),
        ];
        let lines = group_fragments(&fragments, &PassThrough, 10.0);
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].len(), 3);
    }

    #[test]
    fn distant_fragments_start_new_lines() {
        let fragments = vec![
            frag("top", 10.0, 700.0, 60.0, 710.0),
            frag("bottom", 10.0, 100.0, 60.0, 110.0),
        ];
        let lines = group_fragments(&fragments, &PassThrough, 10.0);
        assert_eq!(lines.len(), 2);
    }

    #[test]
    fn margin_boundary_is_exclusive() {
        let fragments = vec![
            frag("a1", 10.0, 100.0, 60.0, 110.0),
            frag("a2", 100.0, 105.0, 160.0, 115.0),
        ];
        assert_eq!(group_fragments(&fragments, &PassThrough, 5.0).len(), 2);
        assert_eq!(group_fragments(&fragments, &PassThrough, 5.1).len(), 1);
    }

    #[test]
    fn fragment_joins_only_first_qualifying_line() {
        // Two lines 6 units apart; the third fragment sits between them and
        // qualifies for both under a margin of 10.
        let fragments = vec![
            frag("upper", 10.0, 106.0, 60.0, 116.0),
            frag("lower", 10.0, 94.0, 60.0, 104.0),
            frag("middle", 200.0, 100.0, 240.0, 110.0),
        ];
        let lines = group_fragments(&fragments, &PassThrough, 7.0);
        assert_eq!(lines.len(), 2);
        let total: usize = lines.iter().map(Line::len).sum();
        assert_eq!(total, 3);
        assert_eq!(lines[0].text(), "upper middle");
    }

    #[test]
    fn rejected_text_is_dropped() {
        let fragments = vec![frag("   ", 10.0, 100.0, 60.0, 110.0)];
        assert!(group_fragments(&fragments, &PassThrough, 10.0).is_empty());
    }

    #[test]
    fn wider_margin_never_yields_more_lines() {
        let fragments: Vec<Fragment> = (0..12)
            .map(|i| {
                let y = 100.0 + (i as f64) * 4.5;
                frag("w", 10.0 * i as f64, y, 10.0 * i as f64 + 8.0, y + 9.0)
            })
            .collect();
        let mut previous = usize::MAX;
        for margin in [1.0, 3.0, 5.0, 8.0, 13.0, 40.0] {
            let count = group_fragments(&fragments, &PassThrough, margin).len();
            assert!(count <= previous, "margin {margin} gave {count} > {previous}");
            previous = count;
        }
    }
}
