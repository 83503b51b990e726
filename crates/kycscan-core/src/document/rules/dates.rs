//! Date of birth extraction.

use lazy_static::lazy_static;
use regex::{Captures, Regex};

use super::patterns::{DOB_DASH, DOB_MONTH_NAME, DOB_SLASH};
use super::{ExtractionMatch, FieldExtractor};

/// How a rule's captures map to `DD/MM/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateLayout {
    /// Day, month and year are already two/two/four digits.
    Numeric,
    /// Day of one or two digits, English month name, four-digit year.
    MonthName,
}

struct DateRule {
    name: &'static str,
    pattern: &'static Regex,
    layout: DateLayout,
    confidence: f32,
}

lazy_static! {
    static ref DATE_RULES: [DateRule; 3] = [
        DateRule { name: "dd/mm/yyyy", pattern: &DOB_SLASH, layout: DateLayout::Numeric, confidence: 0.9 },
        DateRule { name: "dd-mm-yyyy", pattern: &DOB_DASH, layout: DateLayout::Numeric, confidence: 0.9 },
        DateRule { name: "d month yyyy", pattern: &DOB_MONTH_NAME, layout: DateLayout::MonthName, confidence: 0.85 },
    ];
}

/// Date of birth extractor.
///
/// Output is always normalised to `DD/MM/YYYY`. Day and month values are
/// not range-checked.
pub struct DateOfBirthExtractor;

impl DateOfBirthExtractor {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DateOfBirthExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl FieldExtractor for DateOfBirthExtractor {
    type Output = ExtractionMatch<String>;

    fn extract(&self, text: &str) -> Option<Self::Output> {
        for rule in DATE_RULES.iter() {
            let Some(caps) = rule.pattern.captures(text) else {
                continue;
            };
            let Some(date) = normalize(&caps, rule.layout) else {
                continue;
            };

            let full_match = caps.get(0)?;
            return Some(
                ExtractionMatch::new(date, rule.confidence, rule.name)
                    .with_position(full_match.start(), full_match.end()),
            );
        }

        None
    }
}

fn normalize(caps: &Captures<'_>, layout: DateLayout) -> Option<String> {
    match layout {
        DateLayout::Numeric => Some(format!("{}/{}/{}", &caps[1], &caps[2], &caps[3])),
        DateLayout::MonthName => {
            let month = month_number(&caps[2])?;
            Some(format!("{:0>2}/{}/{}", &caps[1], month, &caps[3]))
        }
    }
}

/// Map an English month name or abbreviation to its two-digit number.
///
/// Only the first three letters are considered, case-insensitively.
pub fn month_number(month: &str) -> Option<&'static str> {
    let prefix: String = month.chars().take(3).collect::<String>().to_lowercase();
    let number = match prefix.as_str() {
        "jan" => "01",
        "feb" => "02",
        "mar" => "03",
        "apr" => "04",
        "may" => "05",
        "jun" => "06",
        "jul" => "07",
        "aug" => "08",
        "sep" => "09",
        "oct" => "10",
        "nov" => "11",
        "dec" => "12",
        _ => return None,
    };
    Some(number)
}

/// Extract the date of birth as `DD/MM/YYYY`, or an empty string.
pub fn extract_date_of_birth(text: &str) -> String {
    DateOfBirthExtractor::new()
        .extract(text)
        .map(|m| m.value)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_slash_date() {
        assert_eq!(extract_date_of_birth("DOB: 15/08/1990"), "15/08/1990");
    }

    #[test]
    fn test_extract_dash_date() {
        assert_eq!(extract_date_of_birth("DOB: 15-08-1990"), "15/08/1990");
    }

    #[test]
    fn test_extract_month_name_date() {
        assert_eq!(extract_date_of_birth("DOB: 5 Aug 1990"), "05/08/1990");
        assert_eq!(extract_date_of_birth("DOB: 21 DECEMBER 1985"), "21/12/1985");
        assert_eq!(extract_date_of_birth("born 3 september 2001"), "03/09/2001");
    }

    #[test]
    fn test_rule_priority_beats_document_order() {
        // The dash date appears first, but slash dates have priority.
        let text = "Issued 01-02-2020\nDOB: 15/08/1990";
        let m = DateOfBirthExtractor::new().extract(text).unwrap();
        assert_eq!(m.value, "15/08/1990");
        assert_eq!(m.rule, "dd/mm/yyyy");
    }

    #[test]
    fn test_no_date() {
        assert_eq!(extract_date_of_birth("Year of Birth"), "");
        assert_eq!(extract_date_of_birth("1990"), "");
        assert_eq!(extract_date_of_birth("5/8/1990"), "");
        assert_eq!(extract_date_of_birth(""), "");
    }

    #[test]
    fn test_month_number() {
        assert_eq!(month_number("Jan"), Some("01"));
        assert_eq!(month_number("october"), Some("10"));
        assert_eq!(month_number("Foo"), None);
    }
}
