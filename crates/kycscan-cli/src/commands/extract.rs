//! Extract command - pull Aadhaar details out of a single OCR text file.

use std::fs;
use std::path::PathBuf;
use std::time::Instant;

use clap::Args;
use console::style;
use tracing::{debug, info};

use kycscan_core::document::{AadhaarParser, ExtractionResult, OcrHints, mask_document_number};
use kycscan_core::models::record::ExtractedRecord;

use super::{load_config, read_input};

/// Arguments for the extract command.
#[derive(Args)]
pub struct ExtractArgs {
    /// Input text file (`-` for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Aadhaar number reported by the OCR service, used if none is found
    #[arg(long)]
    hint_number: Option<String>,

    /// Name reported by the OCR service, used if none is found
    #[arg(long)]
    hint_name: Option<String>,

    /// Show the full Aadhaar number in text output
    #[arg(long)]
    raw: bool,

    /// Show which rule produced each field
    #[arg(long)]
    show_sources: bool,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// CSV output
    Csv,
    /// Plain text summary
    Text,
}

impl OutputFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
            OutputFormat::Text => "txt",
        }
    }
}

pub async fn run(args: ExtractArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = load_config(config_path)?;

    info!("Processing file: {}", args.input.display());
    let text = read_input(&args.input)?;

    let hints = OcrHints {
        document_number: args.hint_number.clone(),
        name: args.hint_name.clone(),
    };

    let parser = AadhaarParser::from_config(&config.extraction);
    let result = parser.parse_with_hints(&text, &hints);

    for warning in &result.warnings {
        eprintln!("{} {}", style("⚠").yellow(), warning);
    }

    let mask = config.review.mask_document_number && !args.raw;
    let output = format_record(&result.record, args.format, mask)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if args.show_sources {
        print_sources(&result);
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}

fn print_sources(result: &ExtractionResult) {
    println!();
    for source in &result.sources {
        println!(
            "{} {}: {} ({:.0}%)",
            style("ℹ").blue(),
            source.field,
            source.rule,
            source.confidence * 100.0
        );
    }
}

/// Render a record in the requested format.
///
/// Masking only applies to the text summary; JSON and CSV carry the full number.
pub fn format_record(
    record: &ExtractedRecord,
    format: OutputFormat,
    mask: bool,
) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string(record)?),
        OutputFormat::Csv => format_csv(record),
        OutputFormat::Text => Ok(format_text(record, mask)),
    }
}

fn format_csv(record: &ExtractedRecord) -> anyhow::Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record(["full_name", "document_number", "date_of_birth", "address"])?;
    wtr.write_record([
        &record.full_name,
        &record.document_number,
        &record.date_of_birth,
        &record.address,
    ])?;

    let data = String::from_utf8(wtr.into_inner()?)?;
    Ok(data)
}

fn format_text(record: &ExtractedRecord, mask: bool) -> String {
    let number = if mask {
        mask_document_number(&record.document_number)
    } else {
        record.document_number.clone()
    };

    let mut output = String::new();
    output.push_str(&format!("Full name:      {}\n", record.full_name));
    output.push_str(&format!("Aadhaar number: {}\n", number));
    output.push_str(&format!("Date of birth:  {}\n", record.date_of_birth));
    output.push_str(&format!("Address:        {}\n", record.address));
    output
}
