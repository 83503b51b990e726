//! Structured fields extracted from an Aadhaar card.

use serde::{Deserialize, Serialize};

/// Fields extracted from one document image.
///
/// Every field is an empty string when nothing was found for it; there is
/// no separate "missing" marker.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedRecord {
    /// Card holder's name, trimmed.
    pub full_name: String,

    /// 12-digit Aadhaar number without separators.
    pub document_number: String,

    /// Date of birth as `DD/MM/YYYY`.
    pub date_of_birth: String,

    /// Postal address on a single line.
    pub address: String,
}

impl ExtractedRecord {
    /// Returns true when no field was extracted.
    pub fn is_empty(&self) -> bool {
        self.full_name.is_empty()
            && self.document_number.is_empty()
            && self.date_of_birth.is_empty()
            && self.address.is_empty()
    }

    /// Names of the fields that are still empty.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.full_name.is_empty() {
            missing.push("fullName");
        }
        if self.document_number.is_empty() {
            missing.push("documentNumber");
        }
        if self.date_of_birth.is_empty() {
            missing.push("dateOfBirth");
        }
        if self.address.is_empty() {
            missing.push("address");
        }
        missing
    }

    /// Whether the document number is exactly 12 ASCII digits.
    pub fn has_valid_document_number(&self) -> bool {
        is_valid_document_number(&self.document_number)
    }
}

/// Exactly 12 ASCII digits, no separators.
pub fn is_valid_document_number(number: &str) -> bool {
    number.len() == 12 && number.bytes().all(|b| b.is_ascii_digit())
}
