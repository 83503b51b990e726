//! Display masking for document numbers.

/// Mask a document number for display as `XXXX-XXXX-1234`.
///
/// Only 12-character inputs are masked; anything else (including the empty
/// string) is returned unchanged.
pub fn mask_document_number(number: &str) -> String {
    if number.chars().count() != 12 {
        return number.to_string();
    }

    let last4: String = number.chars().skip(8).collect();
    format!("XXXX-XXXX-{}", last4)
}
