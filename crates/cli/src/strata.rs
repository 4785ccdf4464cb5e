//! strata - Rebuild the layout of OCR'd financial statements
//!
//! Reads geometry XML (pdfminer page/textbox/textline layout) and writes
//! flowing text, HTML, CSV tables or re-ingestible XML.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser, ValueEnum};
use strata_core::api::{Engine, ExtractOptions, extract_many_to};
use strata_core::layout::{LayoutParams, Triage};
use strata_core::normalize::BasicNormalizer;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Output type for the reconstructed content.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
enum OutputType {
    /// Plain text output (default)
    #[default]
    Text,
    /// Paginated HTML document
    Html,
    /// Fully quoted CSV records for profit-and-loss tables
    Csv,
    /// Merged words as geometry XML
    Xml,
}

impl From<OutputType> for strata_core::OutputType {
    fn from(value: OutputType) -> Self {
        match value {
            OutputType::Text => Self::Text,
            OutputType::Html => Self::Html,
            OutputType::Csv => Self::Csv,
            OutputType::Xml => Self::Xml,
        }
    }
}

/// Rebuild paragraphs, headings and tables from OCR geometry XML.
#[derive(Parser, Debug)]
#[command(name = "strata")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// One or more geometry XML files
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,

    // === Layout options ===
    /// Parameter preset: standard, sparse or dense
    #[arg(short = 'm', long, default_value = "standard")]
    mode: String,

    /// JSON file with layout parameters, replacing the preset
    #[arg(long)]
    config: Option<PathBuf>,

    /// Vertical tolerance for clustering fragments into lines
    #[arg(long = "line-margin")]
    line_margin: Option<f64>,

    /// Horizontal gap under which words are merged
    #[arg(long = "merge-margin")]
    merge_margin: Option<f64>,

    /// Vertical gap under which a line inherits its neighbour's role
    #[arg(long = "adj-margin")]
    adj_margin: Option<f64>,

    /// Width fraction above which a line is paragraph text
    #[arg(long = "large-cutoff")]
    large_cutoff: Option<f64>,

    /// Vertical gap above which a new paragraph starts
    #[arg(long = "para-margin")]
    para_margin: Option<f64>,

    /// Horizontal tolerance for grouping table columns
    #[arg(long = "column-margin")]
    column_margin: Option<f64>,

    // === Normalization options ===
    /// JSON object mapping observed labels to canonical ones (CSV output)
    #[arg(long)]
    triage: Option<PathBuf>,

    /// Rewrite accounting negatives such as (1,234) as -1,234
    #[arg(long = "negative-parens", action = ArgAction::SetTrue)]
    negative_parens: bool,

    // === Output options ===
    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// Type of output to generate
    #[arg(short = 't', long = "output-type", value_enum, default_value = "text")]
    output_type: OutputType,

    /// Shorthand for --output-type csv
    #[arg(long, action = ArgAction::SetTrue)]
    csv: bool,

    /// Number of worker threads (default: available parallelism)
    #[arg(long)]
    threads: Option<usize>,
}

/// Infer output type from file extension.
fn infer_output_type(path: &str) -> Option<OutputType> {
    let path_lower = path.to_lowercase();
    if path_lower.ends_with(".htm") || path_lower.ends_with(".html") {
        Some(OutputType::Html)
    } else if path_lower.ends_with(".csv") {
        Some(OutputType::Csv)
    } else if path_lower.ends_with(".xml") {
        Some(OutputType::Xml)
    } else {
        None
    }
}

/// Build LayoutParams: preset, then config file, then per-option flags.
fn build_params(args: &Args) -> Result<LayoutParams> {
    let mut params = match &args.config {
        Some(path) => {
            let json = fs::read_to_string(path)
                .with_context(|| format!("failed to read config {}", path.display()))?;
            LayoutParams::from_json_str(&json)?
        }
        None => LayoutParams::preset(&args.mode)?,
    };

    let overrides = [
        (args.line_margin, &mut params.line_margin),
        (args.merge_margin, &mut params.merge_margin),
        (args.adj_margin, &mut params.adj_margin),
        (args.large_cutoff, &mut params.large_cutoff),
        (args.para_margin, &mut params.para_margin),
        (args.column_margin, &mut params.column_margin),
    ];
    for (value, slot) in overrides {
        if let Some(value) = value {
            *slot = value;
        }
    }

    params.validate()?;
    Ok(params)
}

fn build_engine(args: &Args, params: LayoutParams) -> Result<Engine> {
    let normalizer = BasicNormalizer::new().with_negative_parens(args.negative_parens);
    let mut engine = Engine::new(params).with_normalizer(Arc::new(normalizer));
    if let Some(path) = &args.triage {
        let json = fs::read_to_string(path)
            .with_context(|| format!("failed to read triage table {}", path.display()))?;
        engine = engine.with_triage(Triage::from_json_str(&json)?);
    }
    Ok(engine)
}

/// Reads every input up front so that a missing file fails before any output.
fn read_inputs(files: &[PathBuf]) -> Result<Vec<String>> {
    let mut documents = Vec::with_capacity(files.len());
    for path in files {
        if !path.exists() {
            bail!("file not found: {}", path.display());
        }
        let xml = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        documents.push(xml);
    }
    Ok(documents)
}

fn init_tracing(debug: bool) {
    let level = if debug {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.debug);

    let params = build_params(&args)?;
    let engine = build_engine(&args, params)?;
    let options = ExtractOptions {
        params: None,
        threads: args.threads,
    };

    // Determine output type (may be inferred from output filename)
    let output_type = if args.csv {
        OutputType::Csv
    } else if args.output_type == OutputType::Text && args.outfile != "-" {
        infer_output_type(&args.outfile).unwrap_or(args.output_type)
    } else {
        args.output_type
    };

    let documents = read_inputs(&args.files)?;

    // Open output file or use stdout
    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    // All files go through one converter, so HTML and XML stay one document
    extract_many_to(&mut output, output_type.into(), &documents[..], &engine, &options)
        .with_context(|| format!("error processing {} file(s)", documents.len()))?;
    info!(files = documents.len(), "processed");

    // Ensure output is flushed
    output.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["strata"];
        argv.extend_from_slice(extra);
        argv.push("page.xml");
        Args::parse_from(argv)
    }

    #[test]
    fn flags_override_preset() {
        let params = build_params(&args(&["-m", "dense", "--column-margin", "30"])).unwrap();
        assert_eq!(params.line_margin, 5.0);
        assert_eq!(params.column_margin, 30.0);
    }

    #[test]
    fn unknown_mode_lists_presets() {
        let err = build_params(&args(&["--mode", "tight"])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("standard") && msg.contains("sparse") && msg.contains("dense"));
    }

    #[test]
    fn csv_flag_and_extension_select_output() {
        assert!(args(&["--csv"]).csv);
        assert_eq!(infer_output_type("out.HTML"), Some(OutputType::Html));
        assert_eq!(infer_output_type("out.csv"), Some(OutputType::Csv));
        assert_eq!(infer_output_type("out.txt"), None);
    }

    #[test]
    fn missing_input_is_reported() {
        let err = read_inputs(&[PathBuf::from("no/such/statement.xml")]).unwrap_err();
        assert!(err.to_string().contains("file not found"));
    }
}
