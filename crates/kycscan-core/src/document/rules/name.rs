//! Card holder name extraction.

use lazy_static::lazy_static;
use regex::Regex;

use super::address::collapse_whitespace;
use super::patterns::{
    CAPITALIZED_WORD, NAME_AFTER_ISSUER, NAME_FALLBACK_LINES, NAME_LABELED, NAME_LEADING,
};
use super::{ExtractionMatch, FieldExtractor};

struct NameRule {
    name: &'static str,
    pattern: &'static Regex,
    confidence: f32,
}

lazy_static! {
    static ref NAME_RULES: [NameRule; 3] = [
        NameRule { name: "labeled", pattern: &NAME_LABELED, confidence: 0.95 },
        NameRule { name: "leading", pattern: &NAME_LEADING, confidence: 0.8 },
        NameRule { name: "after_issuer", pattern: &NAME_AFTER_ISSUER, confidence: 0.85 },
    ];
}

/// Full name extractor.
///
/// The pattern rules look for an all-caps name run ahead of a birth
/// keyword. The fallback instead accepts a line of capitalised words
/// ("Rahul Kumar") near the top of the card.
pub struct NameExtractor;

impl NameExtractor {
    pub fn new() -> Self {
        Self
    }

    fn extract_capitalized_line(&self, text: &str) -> Option<ExtractionMatch<String>> {
        text.split('\n').take(NAME_FALLBACK_LINES).find_map(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.len() >= 2 && words.iter().all(|w| CAPITALIZED_WORD.is_match(w)) {
                Some(ExtractionMatch::new(words.join(" "), 0.5, "capitalized_line"))
            } else {
                None
            }
        })
    }
}

impl Default for NameExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for NameExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        for rule in NAME_RULES.iter() {
            let Some(caps) = rule.pattern.captures(text) else {
                continue;
            };
            let Some(name) = caps.get(1) else {
                continue;
            };

            let value = collapse_whitespace(name.as_str());
            if value.is_empty() {
                continue;
            }

            return Some(
                ExtractionMatch::new(value, rule.confidence, rule.name)
                    .with_position(name.start(), name.end()),
            );
        }

        self.extract_capitalized_line(text)
    }
}

/// Extract the card holder's name, or an empty string.
pub fn extract_full_name(text: &str) -> String {
    NameExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labeled_name() {
        assert_eq!(
            extract_full_name("Name: RAHUL KUMAR SHARMA DOB: 01/01/1985"),
            "RAHUL KUMAR SHARMA"
        );
    }

    #[test]
    fn test_hindi_label_and_keyword() {
        assert_eq!(
            extract_full_name("नाम: PRIYA SINGH जन्म तिथि 02/03/1992"),
            "PRIYA SINGH"
        );
    }

    #[test]
    fn test_leading_name_without_label() {
        let m = NameExtractor::new()
            .extract("ANITA DESAI\nYear of Birth: 1975")
            .unwrap();
        assert_eq!(m.value, "ANITA DESAI");
        assert_eq!(m.rule, "leading");
    }

    #[test]
    fn test_leading_name_needs_four_characters() {
        // "AB" is too short for the leading rule and the fallback wants two words.
        assert_eq!(extract_full_name("AB DOB 01/01/1990"), "");
    }

    #[test]
    fn test_name_after_issuer() {
        let text = "भारत सरकार\nRAHUL KUMAR SHARMA\nDOB: 01/01/1985";
        let m = NameExtractor::new().extract(text).unwrap();
        assert_eq!(m.value, "RAHUL KUMAR SHARMA");
        assert_eq!(m.rule, "after_issuer");

        assert_eq!(
            extract_full_name(
                "Unique Identification Authority\nGovernment of India MEERA NAIR Date of Birth 01/01/1990"
            ),
            "MEERA NAIR"
        );
    }

    #[test]
    fn test_name_split_across_lines_is_single_spaced() {
        let text = "भारत सरकार\nRAHUL\nKUMAR  SHARMA\nDOB: 01/01/1985";
        let m = NameExtractor::new().extract(text).unwrap();
        assert_eq!(m.value, "RAHUL KUMAR SHARMA");
        assert_eq!(m.rule, "after_issuer");

        assert_eq!(
            extract_full_name("Name:  ANITA \t DESAI DOB: 05/05/1995"),
            "ANITA DESAI"
        );
    }

    #[test]
    fn test_capitalized_line_fallback() {
        let text = "1234 5678 9012\nRahul Kumar\nMale";
        let m = NameExtractor::new().extract(text).unwrap();
        assert_eq!(m.value, "Rahul Kumar");
        assert_eq!(m.rule, "capitalized_line");
    }

    #[test]
    fn test_fallback_rejects_all_caps_and_single_words() {
        assert_eq!(extract_full_name("RAHUL KUMAR\nMale"), "");
        assert_eq!(extract_full_name("Rahul\nMale"), "");
        assert_eq!(extract_full_name("Rahul kumar"), "");
    }

    #[test]
    fn test_fallback_only_scans_first_five_lines() {
        let text = "1\n2\n3\n4\n5\nRahul Kumar";
        assert_eq!(extract_full_name(text), "");
    }

    #[test]
    fn test_no_name() {
        assert_eq!(extract_full_name(""), "");
    }
}
