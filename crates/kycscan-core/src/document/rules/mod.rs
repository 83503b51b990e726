//! Rule-based field extractors for Aadhaar cards.
//!
//! Each field has an ordered rule table evaluated first-match-wins.

pub mod address;
pub mod dates;
pub mod document_number;
pub mod name;
pub mod patterns;

pub use address::{AddressExtractor, collapse_whitespace, extract_address};
pub use dates::{DateOfBirthExtractor, extract_date_of_birth, month_number};
pub use document_number::{DocumentNumberExtractor, extract_document_number};
pub use name::{NameExtractor, extract_full_name};
pub use patterns::*;

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the field from text, using the first rule that matches.
    fn extract(&self, text: &str) -> Option<Self::Output>;
}

/// Extracted value together with where it came from.
#[derive(Debug, Clone)]
pub struct ExtractionMatch<T> {
    /// Extracted value.
    pub value: T,
    /// Confidence score (0.0 - 1.0).
    pub confidence: f32,
    /// Name of the rule that produced the value.
    pub rule: &'static str,
    /// Position in source text.
    pub position: Option<(usize, usize)>,
}

impl<T> ExtractionMatch<T> {
    pub fn new(value: T, confidence: f32, rule: &'static str) -> Self {
        Self {
            value,
            confidence,
            rule,
            position: None,
        }
    }

    pub fn with_position(mut self, start: usize, end: usize) -> Self {
        self.position = Some((start, end));
        self
    }
}
