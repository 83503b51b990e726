//! Aadhaar field extraction module.

pub mod hints;
pub mod mask;
mod parser;
pub mod rules;

pub use hints::{HintSource, OcrHints, OcrScan};
pub use mask::mask_document_number;
pub use parser::{AadhaarParser, ExtractionResult, FieldSource, extract_aadhaar};

use crate::models::record::ExtractedRecord;

/// Trait for document field extractors.
pub trait DocumentExtractor {
    /// Extract fields from an OCR result, including its hints.
    fn extract(&self, scan: &OcrScan) -> ExtractedRecord;

    /// Extract fields from plain text.
    fn extract_from_text(&self, text: &str) -> ExtractedRecord;
}
