//! Reader and writer for pdfminer-style geometry XML.
//!
//! ```text
//! <pages>
//!   <page id="1" bbox="0,0,612,792">
//!     <textbox id="0" bbox="...">
//!       <textline bbox="56.8,740.1,300.1,752.1">
//!         <text>P</text><text>r</text>...<text>
//! </text>
//!       </textline>
//!     </textbox>
//!   </page>
//! </pages>
//! ```
//!
//! Each `textline` inside a `textbox` becomes one [`Fragment`]. Lines inside
//! figures and the `<layout>` grouping section are ignored.

use std::io::Write;

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use tracing::{debug, warn};

use crate::converter::XMLConverter;
use crate::error::{LayoutError, Result};
use crate::geometry::{HasBBox, Rect};
use crate::layout::elements::{Fragment, Line};

/// Fragments of one page in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct PageFragments {
    /// 1-based page number.
    pub number: usize,
    pub bbox: Rect,
    pub fragments: Vec<Fragment>,
}

impl PageFragments {
    pub fn new(number: usize, bbox: Rect) -> Self {
        Self {
            number,
            bbox,
            fragments: Vec::new(),
        }
    }

    /// One fragment per word, lines taken in the given order.
    pub fn from_lines(number: usize, bbox: Rect, lines: &[Line]) -> Self {
        let fragments = lines
            .iter()
            .flat_map(Line::iter)
            .map(|word| Fragment::new(word.text.clone(), word.bbox()))
            .collect();
        Self {
            number,
            bbox,
            fragments,
        }
    }
}

/// Pages read from one document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    pub pages: Vec<PageFragments>,
    /// Numbers of pages dropped because of malformed geometry.
    pub skipped: Vec<usize>,
}

/// Page under construction. The first geometry error poisons the page.
struct PageState {
    page: PageFragments,
    error: Option<LayoutError>,
}

impl PageState {
    fn fail(&mut self, err: LayoutError) {
        if self.error.is_none() {
            self.error = Some(err);
        }
    }
}

/// Textline under construction.
struct LineState {
    bbox: Option<Rect>,
    text: String,
}

fn attr_value(e: &BytesStart<'_>, name: &[u8]) -> Result<Option<String>> {
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == name {
            return Ok(Some(attr.unescape_value()?.into_owned()));
        }
    }
    Ok(None)
}

fn required_bbox(e: &BytesStart<'_>, page: usize, element: &str) -> Result<Rect> {
    match attr_value(e, b"bbox")? {
        Some(value) => Rect::parse_bbox(&value, page),
        None => Err(LayoutError::MalformedGeometry {
            page,
            detail: format!("<{element}> without bbox"),
        }),
    }
}

/// Reads every page of a geometry XML document.
///
/// Syntax errors abort the whole document. A missing or unparseable `bbox` on
/// a page or textline drops only that page, which is logged and listed in
/// [`ParsedDocument::skipped`].
pub fn read_pages(xml: &str) -> Result<ParsedDocument> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();

    let mut doc = ParsedDocument::default();
    let mut page: Option<PageState> = None;
    let mut line: Option<LineState> = None;
    let mut textbox_depth = 0usize;
    let mut figure_depth = 0usize;
    // Some(true) once a <text> element received content.
    let mut text_open: Option<bool> = None;

    loop {
        let event = reader.read_event_into(&mut buf)?;
        match event {
            Event::Start(ref e) | Event::Empty(ref e) => {
                let empty = matches!(event, Event::Empty(_));
                match e.name().as_ref() {
                    b"page" => {
                        let ordinal = doc.pages.len() + doc.skipped.len() + 1;
                        let number = attr_value(e, b"id")?
                            .and_then(|id| id.trim().parse().ok())
                            .unwrap_or(ordinal);
                        let mut state = PageState {
                            page: PageFragments::new(number, Rect::empty()),
                            error: None,
                        };
                        match required_bbox(e, number, "page") {
                            Ok(bbox) => state.page.bbox = bbox,
                            Err(err) => state.fail(err),
                        }
                        page = Some(state);
                    }
                    b"textbox" if !empty => textbox_depth += 1,
                    b"figure" if !empty => figure_depth += 1,
                    b"textline" if textbox_depth > 0 && figure_depth == 0 => {
                        if let Some(state) = page.as_mut() {
                            let bbox = match required_bbox(e, state.page.number, "textline") {
                                Ok(bbox) => Some(bbox),
                                Err(err) => {
                                    state.fail(err);
                                    None
                                }
                            };
                            line = (!empty).then(|| LineState {
                                bbox,
                                text: String::new(),
                            });
                        }
                    }
                    b"text" if line.is_some() => {
                        if empty {
                            if let Some(current) = line.as_mut() {
                                current.text.push(' ');
                            }
                        } else {
                            text_open = Some(false);
                        }
                    }
                    _ => {}
                }
            }
            Event::Text(e) => {
                if let (Some(filled), Some(current)) = (text_open.as_mut(), line.as_mut()) {
                    current.text.push_str(&e.unescape()?);
                    *filled = true;
                }
            }
            Event::End(e) => match e.name().as_ref() {
                b"text" => {
                    if let (Some(false), Some(current)) = (text_open, line.as_mut()) {
                        current.text.push(' ');
                    }
                    text_open = None;
                }
                b"textline" => {
                    if let (Some(current), Some(state)) = (line.take(), page.as_mut())
                        && let Some(bbox) = current.bbox
                    {
                        let text = current.text.trim();
                        if !text.is_empty() {
                            state.page.fragments.push(Fragment::new(text, bbox));
                        }
                    }
                }
                b"textbox" => textbox_depth = textbox_depth.saturating_sub(1),
                b"figure" => figure_depth = figure_depth.saturating_sub(1),
                b"page" => {
                    if let Some(state) = page.take() {
                        finish_page(&mut doc, state);
                    }
                    textbox_depth = 0;
                    figure_depth = 0;
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(state) = page.take() {
        finish_page(&mut doc, state);
    }

    debug!(
        pages = doc.pages.len(),
        skipped = doc.skipped.len(),
        "read geometry xml"
    );
    Ok(doc)
}

fn finish_page(doc: &mut ParsedDocument, state: PageState) {
    match state.error {
        Some(err) => {
            warn!(page = state.page.number, error = %err, "skipping page");
            doc.skipped.push(state.page.number);
        }
        None => doc.pages.push(state.page),
    }
}

/// Writes pages back as geometry XML, one textline per fragment.
///
/// The output reads back through [`read_pages`] to the same fragments, up to
/// the three decimal places kept for coordinates.
pub fn write_pages<W: Write>(writer: W, pages: &[PageFragments]) -> Result<()> {
    let mut converter = XMLConverter::new(writer);
    for page in pages {
        converter.receive_page(page)?;
    }
    converter.close()
}
