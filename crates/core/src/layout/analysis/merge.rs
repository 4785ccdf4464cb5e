//! Horizontal word merging within a line.

use super::super::elements::{Line, Word};

/// Coalesces closely spaced words of a line.
///
/// Words are sorted by left edge, then folded left to right: the next word
/// is appended to the running accumulator while
///
/// ```text
///   +-------------+           +--------+
///   | accumulator |- - - - - -|  next  |
///   +-------------+           +--------+
///                 |<-margin->|
///   acc.x2 + margin > next.x1
/// ```
///
/// otherwise the accumulator is flushed and `next` starts a new one. The
/// returned line keeps the input line's role and row.
pub fn merge_words(line: Line, margin: f64) -> Line {
    let mut merged = Line::empty_like(&line);
    let mut line = line;
    line.sort_words();

    let mut accumulator: Option<Word> = None;
    for word in line.into_words() {
        accumulator = match accumulator.take() {
            Some(mut acc) if acc.bbox.x2 + margin > word.bbox.x1 => {
                acc.merge(&word);
                Some(acc)
            }
            Some(acc) => {
                merged.add_word(acc);
                Some(word)
            }
            None => Some(word),
        };
    }
    if let Some(acc) = accumulator {
        merged.add_word(acc);
    }

    merged
}

/// Applies [`merge_words`] to every line.
pub fn merge_lines(lines: Vec<Line>, margin: f64) -> Vec<Line> {
    lines
        .into_iter()
        .map(|line| merge_words(line, margin))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::{HasBBox, Rect};

    fn line(words: &[(&str, f64, f64)]) -> Line {
        let mut line = Line::new();
        for (text, x1, x2) in words {
            line.add_word(Word::new(*text, Rect::new(*x1, 100.0, *x2, 110.0)));
        }
        line
    }

    #[test]
    fn separated_columns_stay_apart() {
        let merged = merge_words(
            line(&[("Revenue", 10.0, 60.0), ("1,000", 200.0, 240.0), ("1,200", 300.0, 340.0)]),
            15.0,
        );
        assert_eq!(merged.len(), 3);
    }

    #[test]
    fn close_words_merge_in_position_order() {
        let merged = merge_words(
            line(&[("loss", 90.0, 120.0), ("Profit", 10.0, 50.0), ("and", 55.0, 80.0)]),
            15.0,
        );
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.words()[0].text, "Profit and loss");
        assert_eq!(merged.bbox(), Rect::new(10.0, 100.0, 120.0, 110.0));
    }

    #[test]
    fn single_word_line_is_unchanged() {
        let merged = merge_words(line(&[("Turnover", 10.0, 60.0)]), 15.0);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged.text(), "Turnover");
    }

    #[test]
    fn empty_line_stays_empty() {
        assert!(merge_words(Line::new(), 15.0).is_empty());
    }

    #[test]
    fn gap_equal_to_margin_does_not_merge() {
        let merged = merge_words(line(&[("a1", 0.0, 10.0), ("b2", 25.0, 30.0)]), 15.0);
        assert_eq!(merged.len(), 2);
    }
}
