//! Mask and submit commands - review extracted details.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use console::style;
use tracing::info;

use kycscan_core::document::{
    AadhaarParser, DocumentExtractor, OcrHints, OcrScan, mask_document_number,
};
use kycscan_core::kyc::ReviewForm;

use super::{load_config, read_input};

/// Arguments for the mask command.
#[derive(Args)]
pub struct MaskArgs {
    /// Aadhaar number to mask
    number: String,
}

/// Arguments for the submit command.
#[derive(Args)]
pub struct SubmitArgs {
    /// Input text file (`-` for stdin)
    #[arg(required = true)]
    input: PathBuf,

    /// Id of the signed-in user
    #[arg(short, long)]
    user: Option<String>,

    /// Confirm that the extracted details are correct
    #[arg(long)]
    confirm: bool,

    /// Replace the extracted name
    #[arg(long)]
    name: Option<String>,

    /// Replace the extracted date of birth (DD/MM/YYYY)
    #[arg(long)]
    dob: Option<String>,

    /// Replace the extracted address
    #[arg(long)]
    address: Option<String>,

    /// Aadhaar number reported by the OCR service, used if none is found
    #[arg(long)]
    hint_number: Option<String>,
}

pub async fn mask(args: MaskArgs) -> anyhow::Result<()> {
    println!("{}", mask_document_number(&args.number));
    Ok(())
}

pub async fn submit(args: SubmitArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let text = read_input(&args.input)?;

    let scan = OcrScan::new(text).with_hints(OcrHints {
        document_number: args.hint_number.clone(),
        name: None,
    });
    let record = AadhaarParser::from_config(&config.extraction).extract(&scan);

    let mut form = ReviewForm::new(record)
        .with_confirmation_required(config.review.require_confirmation);
    if let Some(name) = args.name {
        form.set_full_name(name);
    }
    if let Some(dob) = args.dob {
        form.set_date_of_birth(dob);
    }
    if let Some(address) = args.address {
        form.set_address(address);
    }
    form.set_confirmed(args.confirm);

    eprintln!(
        "{} Reviewing {} ({})",
        style("ℹ").blue(),
        form.record().full_name,
        form.masked_document_number()
    );

    let submission = form.submit(args.user.as_deref(), Utc::now())?;
    info!("Submitted Aadhaar details for user {}", submission.user_id);

    println!("{}", serde_json::to_string_pretty(&submission)?);
    eprintln!(
        "{} Submitted for verification, status: {}",
        style("✓").green(),
        submission.status.as_str()
    );

    Ok(())
}
