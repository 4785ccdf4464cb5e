//! Inline geometry XML builders shared by the integration tests.

#![allow(dead_code)]

/// `(text, x1, y1, x2, y2)`
pub type Frag<'a> = (&'a str, f64, f64, f64, f64);

fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// One `<page>` element on a 600x800 page, one textbox per fragment with
/// one `<text>` per character.
pub fn page_xml(id: usize, fragments: &[Frag<'_>]) -> String {
    let mut out = format!("<page id=\"{id}\" bbox=\"0.000,0.000,600.000,800.000\" rotate=\"0\">\n");
    for (i, (text, x1, y1, x2, y2)) in fragments.iter().enumerate() {
        let bbox = format!("{x1:.3},{y1:.3},{x2:.3},{y2:.3}");
        out.push_str(&format!("<textbox id=\"{i}\" bbox=\"{bbox}\">\n<textline bbox=\"{bbox}\">\n"));
        for ch in text.chars() {
            if ch == ' ' {
                out.push_str("<text> </text>\n");
            } else {
                out.push_str(&format!(
                    "<text font=\"Times\" size=\"10.000\">{}</text>\n",
                    escape(&ch.to_string())
                ));
            }
        }
        out.push_str("<text>\n</text>\n</textline>\n</textbox>\n");
    }
    out.push_str("</page>\n");
    out
}

pub fn document(pages: &[String]) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n<pages>\n");
    for page in pages {
        out.push_str(page);
    }
    out.push_str("</pages>\n");
    out
}

fn row<'a>(y: f64, cells: &[(&'a str, f64, f64)]) -> Vec<Frag<'a>> {
    cells
        .iter()
        .map(|(text, x1, x2)| (*text, *x1, y, *x2, y + 10.0))
        .collect()
}

/// A profit-and-loss statement: title block, five table rows and a footer.
pub fn statement_fragments() -> Vec<Frag<'static>> {
    let mut frags = vec![
        ("ACME LIMITED", 250.0, 770.0, 350.0, 780.0),
        ("PROFIT AND LOSS ACCOUNT", 200.0, 750.0, 400.0, 760.0),
        ("FOR THE YEAR ENDED 31 MARCH 2019", 180.0, 735.0, 420.0, 745.0),
    ];
    frags.extend(row(690.0, &[("2019", 400.0, 430.0), ("2018", 500.0, 530.0)]));
    frags.extend(row(
        670.0,
        &[("Turnover", 20.0, 80.0), ("12,000", 390.0, 430.0), ("10,500", 490.0, 530.0)],
    ));
    frags.extend(row(
        655.0,
        &[("Cost of sales", 20.0, 110.0), ("(7,000)", 385.0, 430.0), ("(6,100)", 485.0, 530.0)],
    ));
    frags.extend(row(
        640.0,
        &[("Gross profit", 20.0, 100.0), ("5,000", 395.0, 430.0), ("4,400", 495.0, 530.0)],
    ));
    frags.extend(row(
        600.0,
        &[("Profit before tax", 20.0, 130.0), ("1,200", 395.0, 430.0), ("900", 505.0, 530.0)],
    ));
    frags.push((
        "The notes on pages 5 to 9 form part of these financial statements",
        40.0,
        40.0,
        560.0,
        50.0,
    ));
    frags
}

/// Narrative page without a statement title.
pub fn narrative_fragments() -> Vec<Frag<'static>> {
    vec![
        ("DIRECTORS REPORT", 240.0, 760.0, 360.0, 770.0),
        ("Principal activities", 20.0, 700.0, 140.0, 710.0),
        ("The principal activity of the company during the year was trading", 20.0, 685.0, 570.0, 695.0),
        ("in office supplies across the United Kingdom and Ireland.", 20.0, 670.0, 560.0, 680.0),
        ("Directors", 20.0, 600.0, 80.0, 610.0),
        ("J Smith", 300.0, 600.0, 350.0, 610.0),
        ("Page 2", 285.0, 30.0, 315.0, 40.0),
    ]
}
