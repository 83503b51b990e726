//! Core library for Aadhaar KYC scanning.
//!
//! This crate provides:
//! - Aadhaar field extraction from OCR text (name, number, date of birth, address)
//! - Second-pass enrichment from OCR service hints
//! - Review and pending-submission handling for extracted records
//! - Decoding of payment checkout bridge messages

pub mod checkout;
pub mod document;
pub mod error;
pub mod kyc;
pub mod models;

pub use checkout::{CheckoutEvent, CheckoutHandler, CheckoutOrder};
pub use document::{
    AadhaarParser, DocumentExtractor, ExtractionResult, HintSource, OcrHints, OcrScan,
    extract_aadhaar, mask_document_number,
};
pub use error::{CheckoutError, KycError, Result, SubmissionError};
pub use kyc::{ReviewForm, ScanAttempt, ScanSession};
pub use models::record::ExtractedRecord;
pub use models::submission::{DocumentType, KycSubmission, VerificationStatus};
