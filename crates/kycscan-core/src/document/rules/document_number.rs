//! Aadhaar number extraction.

use super::patterns::AADHAAR_NUMBER;
use super::{ExtractionMatch, FieldExtractor};

/// Aadhaar number extractor.
///
/// Takes the first run of three 4-digit groups in document order. No
/// checksum (Verhoeff) validation is done; verification happens in
/// manual review.
pub struct DocumentNumberExtractor;

impl DocumentNumberExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DocumentNumberExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DocumentNumberExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        let caps = AADHAAR_NUMBER.captures(text)?;
        let number = format!("{}{}{}", &caps[1], &caps[2], &caps[3]);
        let full_match = caps.get(0)?;

        Some(
            ExtractionMatch::new(number, 0.9, "grouped_digits")
                .with_position(full_match.start(), full_match.end()),
        )
    }
}

/// Extract the Aadhaar number from text, or an empty string.
pub fn extract_document_number(text: &str) -> String {
    DocumentNumberExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_with_separators() {
        assert_eq!(extract_document_number("1234 5678 9012"), "123456789012");
        assert_eq!(extract_document_number("1234-5678-9012"), "123456789012");
        assert_eq!(extract_document_number("12345678 9012"), "123456789012");
        assert_eq!(extract_document_number("1234 - 5678 - 9012"), "123456789012");
        assert_eq!(extract_document_number("123456789012"), "123456789012");
    }

    #[test]
    fn test_first_match_wins() {
        let text = "VID: 1111 2222 3333\nAadhaar: 4444 5555 6666";
        assert_eq!(extract_document_number(text), "111122223333");
    }

    #[test]
    fn test_groups_do_not_span_lines() {
        let text = "DOB: 01/01/1985\n1234 5678 9012";
        assert_eq!(extract_document_number(text), "123456789012");
    }

    #[test]
    fn test_requires_word_boundaries() {
        assert_eq!(extract_document_number("1234567890123"), "");
        assert_eq!(extract_document_number("1234 5678 901"), "");
    }

    #[test]
    fn test_reports_position() {
        let text = "No: 1234 5678 9012";
        let m = DocumentNumberExtractor::new().extract(text).unwrap();
        assert_eq!(m.position, Some((4, 18)));
        assert_eq!(&text[4..18], "1234 5678 9012");
    }

    #[test]
    fn test_no_number() {
        assert_eq!(extract_document_number(""), "");
        assert_eq!(extract_document_number("Government of India"), "");
    }
}
