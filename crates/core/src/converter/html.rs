//! HTML Converter - outputs a paginated HTML document.

use std::io::Write;

use html_escape::encode_text;

use crate::error::Result;
use crate::layout::TableGrid;

use super::base::{Block, ComposedPage};

/// HTML Converter - one `<div class="page">` per page, separated by page
/// breaks when printed.
pub struct HTMLConverter<W: Write> {
    outfp: W,
    codec: String,
}

impl<W: Write> HTMLConverter<W> {
    /// Create a new HTML converter and write the document header.
    pub fn new(outfp: W, codec: &str) -> Result<Self> {
        let mut converter = Self {
            outfp,
            codec: codec.to_string(),
        };
        converter.write_header()?;
        Ok(converter)
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.outfp.write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        self.write("<html><head>\n")?;
        if !self.codec.is_empty() {
            let meta = format!(
                "<meta http-equiv=\"Content-Type\" content=\"text/html; charset={}\">\n",
                self.codec
            );
            self.write(&meta)?;
        } else {
            self.write("<meta http-equiv=\"Content-Type\" content=\"text/html\">\n")?;
        }
        self.write("<style>.centre { text-align: center; } td { padding: 0 8px; }</style>\n")?;
        self.write("</head><body>\n")
    }

    fn write_footer(&mut self) -> Result<()> {
        self.write("</body></html>\n")
    }

    /// Receive and render a composed page.
    pub fn receive_page(&mut self, page: &ComposedPage) -> Result<()> {
        self.write(&format!(
            "<div class=\"page\" id=\"page-{}\" style=\"page-break-after: always\">\n",
            page.number
        ))?;
        for block in &page.blocks {
            match block {
                Block::Centred(text) => {
                    self.write(&format!(
                        "<h2 class=\"centre\"><b>{}</b></h2>\n",
                        encode_text(text)
                    ))?;
                }
                Block::Paragraph { lead, body } => {
                    self.write("<p>")?;
                    if let Some(lead) = lead {
                        self.write(&format!("<b>{}</b>", encode_text(lead)))?;
                        if !body.is_empty() {
                            self.write("<br>")?;
                        }
                    }
                    self.write(&encode_text(body))?;
                    self.write("</p>\n")?;
                }
                Block::Table(grid) => self.write_table(grid)?,
            }
        }
        self.write("</div>\n")
    }

    fn write_table(&mut self, grid: &TableGrid) -> Result<()> {
        self.write("<table>\n")?;
        for record in grid.records() {
            self.write("<tr>")?;
            for cell in record {
                self.write(&format!("<td>{}</td>", encode_text(cell)))?;
            }
            self.write("</tr>\n")?;
        }
        self.write("</table>\n")
    }

    /// Close the converter.
    pub fn close(&mut self) -> Result<()> {
        self.write_footer()?;
        self.outfp.flush()?;
        Ok(())
    }
}
