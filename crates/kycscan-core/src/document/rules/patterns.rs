//! Common regex patterns and keyword lists for Aadhaar extraction.
//!
//! Keywords are kept as explicit per-field lists (Latin and Devanagari)
//! and assembled into patterns once, on first use.

use lazy_static::lazy_static;
use regex::Regex;

/// Labels that introduce the card holder's name.
pub const NAME_LABELS: &[&str] = &["Name", "नाम"];

/// Keywords that follow the name on the card (date/year of birth).
pub const BIRTH_KEYWORDS: &[&str] = &["DOB", "Year", "Date", "जन्म"];

/// Birth keywords used by the unlabelled name rules.
pub const BIRTH_KEYWORDS_LATIN: &[&str] = &["DOB", "Year", "Date"];

/// Issuer boilerplate printed above the name.
pub const ISSUER_PHRASES: &[&str] = &["Government of India", "भारत सरकार"];

/// Labels that introduce the postal address.
pub const ADDRESS_LABELS: &[&str] = &["Address", "पता"];

/// Case-sensitive markers of the date-of-birth line, used by the address fallback.
pub const BIRTH_LINE_MARKERS: &[&str] = &["DOB", "Date", "Year"];

/// Number of leading lines searched by the name fallback.
pub const NAME_FALLBACK_LINES: usize = 5;

/// Number of lines after the birth line taken by the address fallback.
pub const ADDRESS_FALLBACK_LINES: usize = 4;

/// Build a non-capturing alternation from a keyword list.
pub fn alternation(words: &[&str]) -> String {
    let escaped: Vec<String> = words.iter().map(|w| regex::escape(w)).collect();
    format!("(?:{})", escaped.join("|"))
}

lazy_static! {
    // Aadhaar number: three groups of four digits on one line, optional
    // space/dash separators. Digit boundaries are ASCII, so a group glued
    // to Devanagari text still matches.
    pub static ref AADHAAR_NUMBER: Regex = Regex::new(
        r"(?-u:\b)([0-9]{4})[\s&&[^\r\n]]*-?[\s&&[^\r\n]]*([0-9]{4})[\s&&[^\r\n]]*-?[\s&&[^\r\n]]*([0-9]{4})(?-u:\b)"
    ).unwrap();

    // Date of birth patterns, in priority order
    pub static ref DOB_SLASH: Regex = Regex::new(
        r"(?-u:\b)([0-9]{2})/([0-9]{2})/([0-9]{4})(?-u:\b)"
    ).unwrap();

    pub static ref DOB_DASH: Regex = Regex::new(
        r"(?-u:\b)([0-9]{2})-([0-9]{2})-([0-9]{4})(?-u:\b)"
    ).unwrap();

    pub static ref DOB_MONTH_NAME: Regex = Regex::new(
        r"(?i)(?-u:\b)([0-9]{1,2})\s+(Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\s+([0-9]{4})(?-u:\b)"
    ).unwrap();

    // Name patterns, in priority order
    pub static ref NAME_LABELED: Regex = Regex::new(&format!(
        r"(?i){}\s*:?\s*([A-Z][A-Z\s]+?)(?:\s+{})",
        alternation(NAME_LABELS),
        alternation(BIRTH_KEYWORDS),
    )).unwrap();

    pub static ref NAME_LEADING: Regex = Regex::new(&format!(
        r"(?i)^([A-Z][A-Z\s]{{3,30}})(?:\s+{})",
        alternation(BIRTH_KEYWORDS_LATIN),
    )).unwrap();

    pub static ref NAME_AFTER_ISSUER: Regex = Regex::new(&format!(
        r"(?i){}\s+([A-Z][A-Z\s]+?)(?:\s+{})",
        alternation(ISSUER_PHRASES),
        alternation(BIRTH_KEYWORDS_LATIN),
    )).unwrap();

    // Capitalised word ("Rahul"), used by the name fallback
    pub static ref CAPITALIZED_WORD: Regex = Regex::new(
        r"^[A-Z][a-z]+$"
    ).unwrap();

    // Labelled address: runs until a blank line, a line opening with two
    // uppercase letters, or trailing whitespace at the end of the text
    pub static ref ADDRESS_LABELED: Regex = Regex::new(&format!(
        r"(?i:{})[\s:]*([^\n]+(?:\n[^\n]+)*?)(?:\n\n|\n[A-Z]{{2,}}|\s*$)",
        ADDRESS_LABELS.join("|"),
    )).unwrap();

    pub static ref BIRTH_LINE: Regex = Regex::new(
        &alternation(BIRTH_LINE_MARKERS)
    ).unwrap();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternation_escapes_keywords() {
        assert_eq!(alternation(&["DOB", "a.b"]), r"(?:DOB|a\.b)");
    }

    #[test]
    fn test_address_terminator_is_case_sensitive() {
        let caps = ADDRESS_LABELED
            .captures("address: 12 Park St\nKolkata\nVID 1234")
            .unwrap();
        assert_eq!(&caps[1], "12 Park St\nKolkata");
    }

    #[test]
    fn test_digit_boundaries_are_ascii() {
        let caps = AADHAAR_NUMBER.captures("आधार संख्या1234 5678 9012").unwrap();
        assert_eq!((&caps[1], &caps[2], &caps[3]), ("1234", "5678", "9012"));
        assert!(DOB_SLASH.is_match("जन्म01/01/1985"));
        assert!(!AADHAAR_NUMBER.is_match("x1234 5678 9012"));
    }

    #[test]
    fn test_birth_line_is_case_sensitive() {
        assert!(BIRTH_LINE.is_match("Year of Birth: 1990"));
        assert!(!BIRTH_LINE.is_match("dob 1990"));
    }
}
