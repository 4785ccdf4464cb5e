//! Tests for line classification over whole pages.

use strata_core::geometry::Rect;
use strata_core::layout::{
    LayoutParams, Line, LineType, PageContext, PhraseBook, Word, classify_lines, p_l_filter,
};

const PAGE: Rect = Rect {
    x1: 0.0,
    y1: 0.0,
    x2: 600.0,
    y2: 800.0,
};

fn line(words: &[(&str, f64, f64)], y1: f64) -> Line {
    let mut line = Line::new();
    for (text, x1, x2) in words {
        line.add_word(Word::new(*text, Rect::new(*x1, y1, *x2, y1 + 10.0)));
    }
    line
}

fn classify_with(lines: Vec<Line>, params: &LayoutParams) -> Vec<Line> {
    let ctx = PageContext::new(PAGE, params, PhraseBook::standard());
    classify_lines(lines, &ctx)
}

fn classify(lines: Vec<Line>) -> Vec<Line> {
    classify_with(lines, &LayoutParams::default())
}

fn types(lines: &[Line]) -> Vec<LineType> {
    lines.iter().map(|l| l.line_type).collect()
}

#[test]
fn profit_and_loss_title_in_top_quarter_is_header() {
    let lines = vec![line(
        &[("PROFIT", 180.0, 230.0), ("AND", 240.0, 270.0), ("LOSS", 280.0, 320.0), ("ACCOUNT", 330.0, 400.0)],
        750.0,
    )];
    assert!(p_l_filter(&lines, PhraseBook::standard()));
    let lines = classify(lines);
    assert_eq!(lines[0].line_type, LineType::Header);
}

#[test]
fn wide_single_word_line_is_para() {
    let lines = classify(vec![line(&[("These financial statements were approved", 30.0, 570.0)], 400.0)]);
    assert_eq!(lines[0].line_type, LineType::Para);
}

#[test]
fn input_order_does_not_matter_for_classification() {
    let lines = vec![
        line(&[("Gross profit", 10.0, 90.0), ("400", 300.0, 340.0)], 370.0),
        line(&[("Turnover", 10.0, 70.0), ("1,000", 300.0, 340.0)], 400.0),
        line(&[("Cost", 10.0, 40.0)], 385.0),
    ];
    let lines = classify(lines);
    assert_eq!(lines[0].text(), "Turnover 1,000");
    assert_eq!(types(&lines), vec![LineType::Table; 3]);
}

#[test]
fn classification_is_total() {
    let mut seed = 7u64;
    let mut next = |lo: f64, hi: f64| {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        lo + (seed >> 11) as f64 / (1u64 << 53) as f64 * (hi - lo)
    };

    for fallback_table in [false, true] {
        let params = if fallback_table {
            LayoutParams::default().tabular()
        } else {
            LayoutParams::default()
        };
        for _ in 0..25 {
            let lines: Vec<Line> = (0..20)
                .map(|i| {
                    let y1 = next(0.0, 790.0);
                    let x1 = next(0.0, 400.0);
                    let x2 = x1 + next(5.0, 600.0 - x1);
                    if i % 3 == 0 {
                        line(&[("left", x1, x1 + 5.0), ("right", x2 - 5.0, x2)], y1)
                    } else {
                        line(&[("text", x1, x2)], y1)
                    }
                })
                .collect();
            let classified = classify_with(lines, &params);
            assert_eq!(classified.len(), 20);
            assert!(classified.iter().all(|l| l.line_type.is_classified()));
        }
    }
}

#[test]
fn adjacency_margin_is_strict() {
    // Gap between the table row and the straggler is exactly 15.
    let lines = classify(vec![
        line(&[("Turnover", 10.0, 70.0), ("1,000", 300.0, 340.0)], 400.0),
        line(&[("Costs", 10.0, 50.0)], 375.0),
    ]);
    assert_eq!(lines[1].line_type, LineType::Para);

    let params = LayoutParams {
        adj_margin: 15.5,
        ..LayoutParams::default()
    };
    let lines = classify_with(
        vec![
            line(&[("Turnover", 10.0, 70.0), ("1,000", 300.0, 340.0)], 400.0),
            line(&[("Costs", 10.0, 50.0)], 375.0),
        ],
        &params,
    );
    assert_eq!(lines[1].line_type, LineType::Table);
}

#[test]
fn tabular_variant_keeps_lone_rows_and_defaults_to_table() {
    let build = || {
        vec![
            line(&[("Our auditors have examined the accounts in full", 20.0, 580.0)], 500.0),
            line(&[("Directors", 20.0, 90.0), ("J Smith", 300.0, 360.0)], 470.0),
            line(&[("The company is limited by shares and registered", 20.0, 580.0)], 440.0),
            line(&[("Stray", 20.0, 60.0)], 300.0),
        ]
    };

    let doc = classify(build());
    assert_eq!(
        types(&doc),
        vec![LineType::Para, LineType::Para, LineType::Para, LineType::Para]
    );

    let tab = classify_with(build(), &LayoutParams::default().tabular());
    assert_eq!(
        types(&tab),
        vec![LineType::Para, LineType::Table, LineType::Para, LineType::Table]
    );
}

#[test]
fn footers_are_found_from_the_bottom() {
    let lines = classify(vec![
        line(&[("Turnover", 10.0, 70.0), ("1,000", 300.0, 340.0)], 400.0),
        line(&[("Page 7", 280.0, 320.0)], 30.0),
    ]);
    assert_eq!(types(&lines), vec![LineType::Table, LineType::Footer]);
}
