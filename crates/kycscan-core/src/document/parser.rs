//! Aadhaar parser combining the per-field rule cascades.

use std::time::Instant;

use serde::Serialize;
use tracing::debug;

use crate::models::config::ExtractionConfig;
use crate::models::record::ExtractedRecord;

use super::hints::{OcrHints, OcrScan};
use super::rules::{
    AddressExtractor, DateOfBirthExtractor, DocumentNumberExtractor, ExtractionMatch,
    FieldExtractor, NameExtractor,
};
use super::DocumentExtractor;

/// Which rule produced a field.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSource {
    /// Record field name.
    pub field: &'static str,
    /// Rule name, or `"hint"` for second-pass values.
    pub rule: &'static str,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
}

/// Result of Aadhaar extraction.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    /// Extracted fields.
    pub record: ExtractedRecord,
    /// Raw recognized text.
    pub raw_text: String,
    /// Rule that produced each non-empty field.
    pub sources: Vec<FieldSource>,
    /// Extraction warnings.
    pub warnings: Vec<String>,
    /// Processing time in milliseconds.
    pub processing_time_ms: u64,
}

// wasm32-unknown-unknown has no monotonic clock.
#[cfg(not(target_arch = "wasm32"))]
fn clock_start() -> Option<Instant> {
    Some(Instant::now())
}

#[cfg(target_arch = "wasm32")]
fn clock_start() -> Option<Instant> {
    None
}

/// Extract Aadhaar fields from recognized text.
///
/// Never fails: fields that cannot be located are empty strings.
pub fn extract_aadhaar(text: &str) -> ExtractedRecord {
    extract_with_sources(text).0
}

fn extract_with_sources(text: &str) -> (ExtractedRecord, Vec<FieldSource>) {
    let mut sources = Vec::new();
    let mut take = |field: &'static str, found: Option<ExtractionMatch<String>>| -> String {
        match found {
            Some(m) => {
                sources.push(FieldSource {
                    field,
                    rule: m.rule,
                    confidence: m.confidence,
                });
                m.value
            }
            None => String::new(),
        }
    };

    let record = ExtractedRecord {
        document_number: take("documentNumber", DocumentNumberExtractor::new().extract(text)),
        date_of_birth: take("dateOfBirth", DateOfBirthExtractor::new().extract(text)),
        full_name: take("fullName", NameExtractor::new().extract(text)),
        address: take("address", AddressExtractor::new().extract(text)),
    };

    (record, sources)
}

/// Aadhaar card parser.
#[derive(Debug, Clone)]
pub struct AadhaarParser {
    /// Whether to fill empty fields from OCR hints.
    apply_hints: bool,
    /// Whether to report empty fields as warnings.
    warn_on_missing: bool,
}

impl AadhaarParser {
    /// Create a new parser with default settings.
    pub fn new() -> Self {
        Self {
            apply_hints: true,
            warn_on_missing: true,
        }
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &ExtractionConfig) -> Self {
        Self {
            apply_hints: config.apply_hints,
            warn_on_missing: config.warn_on_missing,
        }
    }

    /// Set hint enrichment.
    pub fn with_hints(mut self, apply: bool) -> Self {
        self.apply_hints = apply;
        self
    }

    /// Set missing-field warnings.
    pub fn with_missing_warnings(mut self, warn: bool) -> Self {
        self.warn_on_missing = warn;
        self
    }

    /// Parse recognized text without hints.
    pub fn parse(&self, text: &str) -> ExtractionResult {
        self.parse_with_hints(text, &OcrHints::default())
    }

    /// Parse recognized text, then fill gaps from hints if enabled.
    pub fn parse_with_hints(&self, text: &str, hints: &OcrHints) -> ExtractionResult {
        let start = clock_start();

        let (mut record, mut sources) = extract_with_sources(text);
        for source in &sources {
            debug!("{} matched rule {}", source.field, source.rule);
        }

        if self.apply_hints {
            for field in hints.apply_to(&mut record) {
                debug!("{} filled from OCR hint", field);
                sources.push(FieldSource {
                    field,
                    rule: "hint",
                    confidence: 0.5,
                });
            }
        }

        let mut warnings = Vec::new();
        if self.warn_on_missing {
            for field in record.missing_fields() {
                warnings.push(format!("{} not found", field));
            }
        }
        if self.apply_hints && hints.has_invalid_document_number() {
            warnings.push("documentNumber hint ignored, expected 12 digits".to_string());
        }

        let processing_time_ms = start.map_or(0, |s| s.elapsed().as_millis() as u64);
        debug!(
            "Extracted {} of 4 fields in {} ms",
            4 - record.missing_fields().len(),
            processing_time_ms
        );

        ExtractionResult {
            record,
            raw_text: text.to_string(),
            sources,
            warnings,
            processing_time_ms,
        }
    }
}

impl Default for AadhaarParser {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentExtractor for AadhaarParser {
    fn extract(&self, scan: &OcrScan) -> ExtractedRecord {
        self.parse_with_hints(&scan.text, &scan.hints).record
    }

    fn extract_from_text(&self, text: &str) -> ExtractedRecord {
        self.parse(text).record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const CARD: &str = "भारत सरकार\nRAHUL KUMAR SHARMA\nDOB: 01/01/1985\n1234 5678 9012\nAddress: 123 MG Road\nBangalore 560001";

    #[test]
    fn test_extract_full_card() {
        assert_eq!(
            extract_aadhaar(CARD),
            ExtractedRecord {
                full_name: "RAHUL KUMAR SHARMA".to_string(),
                document_number: "123456789012".to_string(),
                date_of_birth: "01/01/1985".to_string(),
                address: "123 MG Road Bangalore 560001".to_string(),
            }
        );
    }

    #[test]
    fn test_empty_text_gives_empty_record() {
        assert_eq!(extract_aadhaar(""), ExtractedRecord::default());
    }

    #[test]
    fn test_extraction_is_deterministic() {
        assert_eq!(extract_aadhaar(CARD), extract_aadhaar(CARD));
    }

    #[test]
    fn test_parse_reports_sources() {
        let result = AadhaarParser::new().parse(CARD);

        let rules: Vec<(&str, &str)> = result.sources.iter().map(|s| (s.field, s.rule)).collect();
        assert_eq!(
            rules,
            vec![
                ("documentNumber", "grouped_digits"),
                ("dateOfBirth", "dd/mm/yyyy"),
                ("fullName", "after_issuer"),
                ("address", "labeled"),
            ]
        );
        assert!(result.warnings.is_empty());
        assert_eq!(result.raw_text, CARD);
    }

    #[test]
    fn test_parse_warns_about_missing_fields() {
        let result = AadhaarParser::new().parse("DOB: 15/08/1990");
        assert_eq!(
            result.warnings,
            vec!["fullName not found", "documentNumber not found", "address not found"]
        );

        let quiet = AadhaarParser::new().with_missing_warnings(false).parse("DOB: 15/08/1990");
        assert!(quiet.warnings.is_empty());
    }

    #[test]
    fn test_hint_does_not_override_primary_number() {
        let scan = OcrScan::new(CARD).with_hints(OcrHints::new().with_document_number("999988887777"));
        let record = AadhaarParser::new().extract(&scan);
        assert_eq!(record.document_number, "123456789012");
    }

    #[test]
    fn test_hint_fills_missing_number() {
        let scan = OcrScan::new("Name: RAHUL KUMAR DOB: 01/01/1985")
            .with_hints(OcrHints::new().with_document_number("999988887777"));

        let result = AadhaarParser::new().parse_with_hints(&scan.text, &scan.hints);
        assert_eq!(result.record.document_number, "999988887777");
        assert!(result.sources.iter().any(|s| s.field == "documentNumber" && s.rule == "hint"));
    }

    #[test]
    fn test_hints_can_be_disabled() {
        let scan = OcrScan::new("DOB: 01/01/1985")
            .with_hints(OcrHints::new().with_document_number("999988887777"));

        let record = AadhaarParser::new().with_hints(false).extract(&scan);
        assert_eq!(record.document_number, "");
    }

    #[test]
    fn test_invalid_hint_number_is_flagged_and_ignored() {
        for hint in ["12345", "१२३४५६७८९०१२"] {
            let hints = OcrHints::new().with_document_number(hint);
            let result = AadhaarParser::new().parse_with_hints("", &hints);

            assert_eq!(result.record.document_number, "");
            assert!(result.warnings.iter().any(|w| w.contains("expected 12 digits")));
        }
    }

    #[test]
    fn test_trailing_newline_keeps_labeled_address() {
        let text = format!("{}\n", CARD);
        assert_eq!(extract_aadhaar(&text), extract_aadhaar(CARD));

        let result = AadhaarParser::new().parse(&text);
        assert!(result.sources.iter().any(|s| s.field == "address" && s.rule == "labeled"));
    }

    #[test]
    fn test_record_fields_are_single_spaced() {
        let record = extract_aadhaar("भारत सरकार\nRAHUL\nKUMAR  SHARMA\nDOB: 01/01/1985\n12   Main Rd\nDelhi");
        assert_eq!(record.full_name, "RAHUL KUMAR SHARMA");
        assert_eq!(record.address, "12 Main Rd Delhi");
    }
}
