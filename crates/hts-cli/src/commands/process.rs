//! Process command - convert a single report PDF to CSV.

use std::path::{Path, PathBuf};

use clap::Args;
use console::style;
use tracing::info;

use hts_core::models::config::HtsConfig;
use hts_core::{process_report, ConversionReport, JsonTableSource, PdfReport};

/// Arguments for the process command.
#[derive(Args)]
pub struct ProcessArgs {
    /// Input report PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Sidecar table dump from the lattice extractor
    /// (default: <input>.tables.json)
    #[arg(short, long)]
    tables: Option<PathBuf>,

    /// Output format for the result summary
    #[arg(short, long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// Styled terminal summary
    Text,
    /// Machine-readable result contract
    Json,
}

pub async fn run(args: ProcessArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = if let Some(path) = config_path {
        HtsConfig::from_file(Path::new(path))?
    } else {
        HtsConfig::default()
    };

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let tables_path = args
        .tables
        .clone()
        .unwrap_or_else(|| args.input.with_extension("tables.json"));
    if !tables_path.exists() {
        anyhow::bail!(
            "Table dump not found: {}. Run the lattice extractor first or pass --tables.",
            tables_path.display()
        );
    }

    info!("Processing report: {}", args.input.display());

    let report = match open_report(&args.input, &tables_path) {
        Ok(doc) => process_report(&doc, &args.input, &config),
        Err(e) => ConversionReport::failure(&e),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string(&report)?),
        OutputFormat::Text => print_summary(&report),
    }

    Ok(())
}

fn open_report(input: &Path, tables: &Path) -> hts_core::Result<PdfReport> {
    let source = JsonTableSource::from_file(tables)?;
    PdfReport::open(input, Box::new(source))
}

fn print_summary(report: &ConversionReport) {
    if report.success {
        println!("{} {}", style("✓").green(), report.message);
        if let Some(data) = &report.data {
            println!("  Output:  {}", data.output_path.display());
            println!("  Records: {}", data.record_count);
        }
    } else {
        println!("{} {}", style("✗").red(), report.message);
    }
}
