//! XML Converter - writes fragments back as geometry XML.

use std::io::Write;

use html_escape::encode_text;

use crate::error::Result;
use crate::input::PageFragments;

/// XML Converter - the pdfminer page/textbox/textline layout, one textbox
/// and textline per fragment.
pub struct XMLConverter<W: Write> {
    outfp: W,
    header_written: bool,
}

impl<W: Write> XMLConverter<W> {
    pub fn new(outfp: W) -> Self {
        Self {
            outfp,
            header_written: false,
        }
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.outfp.write_all(text.as_bytes())?;
        Ok(())
    }

    fn write_header(&mut self) -> Result<()> {
        if !self.header_written {
            self.header_written = true;
            self.write("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n<pages>\n")?;
        }
        Ok(())
    }

    /// Receive and render one page.
    pub fn receive_page(&mut self, page: &PageFragments) -> Result<()> {
        self.write_header()?;
        self.write(&format!(
            "<page id=\"{}\" bbox=\"{}\" rotate=\"0\">\n",
            page.number,
            page.bbox.to_bbox_str()
        ))?;
        for (id, fragment) in page.fragments.iter().enumerate() {
            let bbox = fragment.bbox.to_bbox_str();
            self.write(&format!(
                "<textbox id=\"{id}\" bbox=\"{bbox}\">\n<textline bbox=\"{bbox}\">\n<text>{}</text>\n</textline>\n</textbox>\n",
                encode_text(&fragment.text)
            ))?;
        }
        self.write("</page>\n")
    }

    /// Close the document.
    pub fn close(&mut self) -> Result<()> {
        self.write_header()?;
        self.write("</pages>\n")?;
        self.outfp.flush()?;
        Ok(())
    }
}
