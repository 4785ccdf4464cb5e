//! Tests for reading geometry XML.

mod common;

use strata_core::LayoutError;
use strata_core::api::{Engine, ExtractOptions, analyze_document};
use strata_core::input::read_pages;

use common::{document, page_xml, statement_fragments};

#[test]
fn pages_are_read_in_document_order() {
    let xml = document(&[
        page_xml(1, &[("first", 10.0, 700.0, 60.0, 710.0)]),
        page_xml(2, &[("second", 10.0, 700.0, 60.0, 710.0)]),
    ]);
    let doc = read_pages(&xml).unwrap();
    let numbers: Vec<usize> = doc.pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(doc.pages[1].fragments[0].text, "second");
}

#[test]
fn spaces_between_characters_are_kept() {
    let xml = document(&[page_xml(1, &[("Cost of sales", 10.0, 700.0, 90.0, 710.0)])]);
    let doc = read_pages(&xml).unwrap();
    assert_eq!(doc.pages[0].fragments[0].text, "Cost of sales");
}

#[test]
fn malformed_page_is_skipped_and_the_rest_processed() {
    let broken = r#"<page id="2" bbox="0,0,600,800">
<textbox id="0" bbox="1,1,2,2"><textline bbox="10,700,sixty,710"><text>x</text></textline></textbox>
</page>
"#;
    let xml = document(&[
        page_xml(1, &statement_fragments()),
        broken.to_string(),
        page_xml(3, &[("Turnover", 10.0, 700.0, 60.0, 710.0)]),
    ]);

    let analyzed = analyze_document(&xml, &Engine::default(), &ExtractOptions::default()).unwrap();
    assert_eq!(analyzed.skipped, vec![2]);
    let numbers: Vec<usize> = analyzed.pages.iter().map(|p| p.number).collect();
    assert_eq!(numbers, vec![1, 3]);
}

#[test]
fn syntax_errors_fail_the_document() {
    let err = read_pages("<pages><page id=\"1\" bbox=\"0,0,1,1\"><textbox></page></pages>")
        .unwrap_err();
    assert!(matches!(err, LayoutError::Xml(_)));
    assert!(!err.is_page_local());
}

#[test]
fn escaped_text_is_decoded() {
    let xml = document(&[page_xml(1, &[("P&L <draft>", 10.0, 700.0, 90.0, 710.0)])]);
    let doc = read_pages(&xml).unwrap();
    assert_eq!(doc.pages[0].fragments[0].text, "P&L <draft>");
}
