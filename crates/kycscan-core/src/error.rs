//! Error types for the kycscan-core library.
//!
//! Field extraction itself never fails; these cover the review,
//! submission and checkout code around it.

use thiserror::Error;

/// Main error type for the kycscan library.
#[derive(Error, Debug)]
pub enum KycError {
    /// KYC submission was rejected.
    #[error("submission error: {0}")]
    Submission(#[from] SubmissionError),

    /// Checkout bridge error.
    #[error("checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Reasons a reviewed record cannot be submitted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// The user has not confirmed the reviewed details.
    #[error("please confirm that the Aadhaar details are correct")]
    ConfirmationRequired,

    /// The document number is missing or not 12 ASCII digits.
    #[error("invalid Aadhaar number: expected 12 digits, got {0:?}")]
    InvalidDocumentNumber(String),

    /// No signed-in user to own the submission.
    #[error("user not found, please sign in again")]
    MissingUser,
}

/// Errors related to the payment checkout bridge.
#[derive(Error, Debug)]
pub enum CheckoutError {
    /// The posted message was not a JSON event object.
    #[error("malformed checkout message: {0}")]
    MalformedMessage(#[from] serde_json::Error),

    /// The order amount cannot be charged.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),
}

/// Result type for the kycscan library.
pub type Result<T> = std::result::Result<T, KycError>;
