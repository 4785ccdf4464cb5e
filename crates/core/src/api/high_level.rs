//! High-level extraction API.
//!
//! Provides the main public API for layout reconstruction:
//! - `analyze_document()` - classified lines for every page
//! - `extract_to()` - flowing text, HTML or geometry XML to a writer
//! - `extract_many_to()` - the same for several documents as one output
//! - `extract_tables_to()` - CSV records for profit-and-loss pages
//!
//! Pages are independent, so each document is spread over a rayon pool and
//! the results are put back in document order before they are written.

use std::io::Write;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;
use tracing::info;

use crate::converter::{CsvConverter, HTMLConverter, TabularPage, TextConverter};
use crate::error::{LayoutError, Result};
use crate::input::{PageFragments, read_pages, write_pages};
use crate::layout::params::LayoutParams;

use super::engine::{Engine, PageLayout};

pub use crate::layout::table::{Cell, Row, Table};

pub(crate) fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Options for one extraction run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractOptions {
    /// Layout parameters. None uses the engine's own.
    pub params: Option<LayoutParams>,

    /// Worker threads. None uses the available parallelism.
    pub threads: Option<usize>,
}

/// Output produced by [`extract_to`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputType {
    #[default]
    Text,
    Html,
    Csv,
    /// Merged words as geometry XML, readable as input again.
    Xml,
}

/// Every readable page of a document, analyzed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnalyzedDocument {
    pub pages: Vec<PageLayout>,
    /// Pages dropped for malformed geometry.
    pub skipped: Vec<usize>,
}

fn engine_for(engine: &Engine, options: &ExtractOptions) -> Result<Engine> {
    match &options.params {
        Some(params) => {
            params.validate()?;
            Ok(engine.clone().with_params(params.clone()))
        }
        None => Ok(engine.clone()),
    }
}

/// Applies `f` to every page on a dedicated pool, keeping document order.
fn map_pages<T, F>(pages: &[PageFragments], threads: Option<usize>, f: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(&PageFragments) -> T + Sync + Send,
{
    let thread_count = threads.unwrap_or_else(default_thread_count).max(1);
    let pool = ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .build()
        .map_err(|e| LayoutError::ThreadPool(e.to_string()))?;

    let mut results: Vec<(usize, T)> = pool.install(|| {
        pages
            .par_iter()
            .enumerate()
            .map(|(idx, page)| (idx, f(page)))
            .collect()
    });

    results.sort_by_key(|(idx, _)| *idx);
    Ok(results.into_iter().map(|(_, result)| result).collect())
}

/// Reads and analyzes every page of a geometry XML document.
pub fn analyze_document(
    xml: &str,
    engine: &Engine,
    options: &ExtractOptions,
) -> Result<AnalyzedDocument> {
    let engine = engine_for(engine, options)?;
    let doc = read_pages(xml)?;
    let pages = map_pages(&doc.pages, options.threads, |page| engine.analyze_page(page))?;

    info!(
        pages = pages.len(),
        skipped = doc.skipped.len(),
        "analyzed document"
    );
    Ok(AnalyzedDocument {
        pages,
        skipped: doc.skipped,
    })
}

/// Runs the tabular pipeline; pages without a statement title are left out.
pub fn extract_tables(
    xml: &str,
    engine: &Engine,
    options: &ExtractOptions,
) -> Result<Vec<TabularPage>> {
    let engine = engine_for(engine, options)?;
    let doc = read_pages(xml)?;
    let total = doc.pages.len();
    let tables: Vec<TabularPage> =
        map_pages(&doc.pages, options.threads, |page| engine.tabulate(page))?
            .into_iter()
            .flatten()
            .collect();

    info!(
        pages = total,
        tabulated = tables.len(),
        skipped = doc.skipped.len(),
        "extracted tables"
    );
    Ok(tables)
}

/// Writes CSV records for every profit-and-loss page. Returns the number of
/// pages written.
pub fn extract_tables_to<W: Write>(
    writer: W,
    xml: &str,
    engine: &Engine,
    options: &ExtractOptions,
) -> Result<usize> {
    let tables = extract_tables(xml, engine, options)?;
    let mut converter = CsvConverter::new(writer);
    for table in &tables {
        converter.receive_table(table)?;
    }
    converter.close()?;
    Ok(tables.len())
}

/// Writes the document in the requested output type.
pub fn extract_to<W: Write>(
    writer: W,
    output: OutputType,
    xml: &str,
    engine: &Engine,
    options: &ExtractOptions,
) -> Result<()> {
    extract_many_to(writer, output, &[xml], engine, options)
}

/// Writes several documents as one output.
///
/// Pages follow in document order inside a single HTML or XML wrapper, so
/// the result is one well-formed document whatever the number of inputs.
pub fn extract_many_to<W: Write, S: AsRef<str>>(
    writer: W,
    output: OutputType,
    xmls: &[S],
    engine: &Engine,
    options: &ExtractOptions,
) -> Result<()> {
    let engine = engine_for(engine, options)?;
    let options = ExtractOptions {
        params: None,
        threads: options.threads,
    };
    let pages = || -> Result<Vec<PageLayout>> {
        let mut pages = Vec::new();
        for xml in xmls {
            pages.extend(analyze_document(xml.as_ref(), &engine, &options)?.pages);
        }
        Ok(pages)
    };

    match output {
        OutputType::Csv => {
            let mut converter = CsvConverter::new(writer);
            for xml in xmls {
                for table in &extract_tables(xml.as_ref(), &engine, &options)? {
                    converter.receive_table(table)?;
                }
            }
            converter.close()
        }
        OutputType::Text => {
            let pages = pages()?;
            let mut converter = TextConverter::new(writer);
            for layout in &pages {
                converter.receive_page(&engine.compose(layout))?;
            }
            converter.close()
        }
        OutputType::Html => {
            let pages = pages()?;
            let mut converter = HTMLConverter::new(writer, "utf-8")?;
            for layout in &pages {
                converter.receive_page(&engine.compose(layout))?;
            }
            converter.close()
        }
        OutputType::Xml => {
            let fragments: Vec<PageFragments> =
                pages()?.iter().map(PageLayout::to_fragments).collect();
            write_pages(writer, &fragments)
        }
    }
}

/// Extracts flowing text as a String.
pub fn extract_text(xml: &str, engine: &Engine, options: &ExtractOptions) -> Result<String> {
    let mut output = Vec::new();
    extract_to(&mut output, OutputType::Text, xml, engine, options)?;
    Ok(String::from_utf8_lossy(&output).into_owned())
}
