//! OCR service results and second-pass hints.

use serde::{Deserialize, Serialize};

use crate::models::record::{ExtractedRecord, is_valid_document_number};

use super::rules::collapse_whitespace;

/// Field guesses from a recognition strategy other than the rule cascade.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrHints {
    /// Document number guess.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_number: Option<String>,

    /// Name guess.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl OcrHints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document_number(mut self, number: impl Into<String>) -> Self {
        self.document_number = Some(number.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Document number hint with space/dash separators removed, if it is
    /// then exactly 12 ASCII digits.
    pub fn valid_document_number(&self) -> Option<String> {
        let number: String = self
            .document_number
            .as_deref()?
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '-')
            .collect();
        is_valid_document_number(&number).then_some(number)
    }

    /// Whether a non-empty document number hint cannot be used.
    pub fn has_invalid_document_number(&self) -> bool {
        self.document_number.as_deref().is_some_and(|n| !n.is_empty())
            && self.valid_document_number().is_none()
    }

    /// Fill the record's empty fields from these hints.
    ///
    /// A field the rule cascade already found is never overwritten, and an
    /// empty hint is ignored, as is a number hint that is not 12 digits.
    /// Returns the names of the fields that were filled.
    pub fn apply_to(&self, record: &mut ExtractedRecord) -> Vec<&'static str> {
        let mut filled = Vec::new();

        if let Some(number) = self.valid_document_number() {
            if record.document_number.is_empty() {
                record.document_number = number;
                filled.push("documentNumber");
            }
        }

        if let Some(name) = self.name.as_deref().map(collapse_whitespace).filter(|n| !n.is_empty()) {
            if record.full_name.is_empty() {
                record.full_name = name;
                filled.push("fullName");
            }
        }

        filled
    }
}

/// Source of second-pass hints for a recognized text.
pub trait HintSource {
    /// Document number guess for the text.
    fn document_number_hint(&self, text: &str) -> Option<String>;

    /// Name guess for the text.
    fn name_hint(&self, text: &str) -> Option<String>;

    /// Collect both hints.
    fn hints(&self, text: &str) -> OcrHints {
        OcrHints {
            document_number: self.document_number_hint(text),
            name: self.name_hint(text),
        }
    }
}

/// Precomputed hints act as a source that ignores the text.
impl HintSource for OcrHints {
    fn document_number_hint(&self, _text: &str) -> Option<String> {
        self.document_number.clone()
    }

    fn name_hint(&self, _text: &str) -> Option<String> {
        self.name.clone()
    }
}

/// Result of recognizing one document image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OcrScan {
    /// Full recognized text, lines separated by `\n`.
    pub text: String,

    /// Hints from the OCR service's own extractors.
    #[serde(default)]
    pub hints: OcrHints,
}

impl OcrScan {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            hints: OcrHints::default(),
        }
    }

    pub fn with_hints(mut self, hints: OcrHints) -> Self {
        self.hints = hints;
        self
    }

    /// Attach hints computed by a source from this scan's text.
    pub fn with_hints_from(mut self, source: &impl HintSource) -> Self {
        self.hints = source.hints(&self.text);
        self
    }
}
