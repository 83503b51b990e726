//! Postal address extraction.

use super::patterns::{ADDRESS_FALLBACK_LINES, ADDRESS_LABELED, BIRTH_LINE};
use super::{ExtractionMatch, FieldExtractor};

/// Address extractor.
///
/// Prefers an `Address:` / `पता:` labelled block. Without a label, the lines
/// following the date-of-birth line are taken instead.
pub struct AddressExtractor;

impl AddressExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_labeled(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let caps = ADDRESS_LABELED.captures(text)?;
        let block = caps.get(1)?;
        let address = collapse_whitespace(block.as_str());
        if address.is_empty() {
            return None;
        }

        Some(ExtractionMatch::new(address, 0.9, "labeled").with_position(block.start(), block.end()))
    }

    fn extract_after_birth_line(&self, text: &str) -> Option<ExtractionMatch<String>> {
        let lines: Vec<&str> = text.split('\n').collect();
        let birth_index = lines.iter().position(|line| BIRTH_LINE.is_match(line))?;

        if birth_index + 1 >= lines.len() {
            return None;
        }

        let end = (birth_index + 1 + ADDRESS_FALLBACK_LINES).min(lines.len());
        let address = collapse_whitespace(&lines[birth_index + 1..end].join(" "));
        if address.is_empty() {
            return None;
        }

        Some(ExtractionMatch::new(address, 0.4, "after_birth_line"))
    }
}

impl Default for AddressExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for AddressExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_labeled(text)
            .or_else(|| self.extract_after_birth_line(text))
    }
}

/// Trim and collapse every whitespace run (newlines included) to one space.
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Extract the address on a single line, or an empty string.
pub fn extract_address(text: &str) -> String {
    AddressExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_default()
}
