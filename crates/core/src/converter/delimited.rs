//! CSV Converter - outputs fully quoted table records.

use std::io::Write;

use csv::{QuoteStyle, WriterBuilder};

use crate::error::Result;

use super::base::TabularPage;

/// CSV Converter - one record per table row, every field quoted.
///
/// Pages may have different column counts, so records are not required to
/// share a length.
pub struct CsvConverter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> CsvConverter<W> {
    pub fn new(outfp: W) -> Self {
        let writer = WriterBuilder::new()
            .quote_style(QuoteStyle::Always)
            .flexible(true)
            .from_writer(outfp);
        Self { writer }
    }

    /// Receive and write one page's grid.
    pub fn receive_table(&mut self, page: &TabularPage) -> Result<()> {
        for record in page.grid.records() {
            self.writer.write_record(&record)?;
        }
        Ok(())
    }

    pub fn close(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
