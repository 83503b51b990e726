//! KYC submission record handed to the store layer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Indian Aadhaar card.
    Aadhaar,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Aadhaar => "aadhaar",
        }
    }
}

/// Verification state of a submission.
///
/// Submissions are always created as `Pending`; the later states are set by
/// manual review outside this crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationStatus {
    #[default]
    Pending,
    Verified,
    Rejected,
}

impl VerificationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerificationStatus::Pending => "pending",
            VerificationStatus::Verified => "verified",
            VerificationStatus::Rejected => "rejected",
        }
    }
}

/// A reviewed document submitted for verification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KycSubmission {
    /// Owner of the submission.
    pub user_id: String,

    /// Kind of document scanned.
    pub document_type: DocumentType,

    /// Unmasked 12-digit document number.
    pub document_number: String,

    /// Verification state.
    pub status: VerificationStatus,

    /// Time of submission.
    pub submitted_at: DateTime<Utc>,
}

impl KycSubmission {
    /// Create a pending Aadhaar submission.
    pub fn pending_aadhaar(
        user_id: impl Into<String>,
        document_number: impl Into<String>,
        submitted_at: DateTime<Utc>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            document_type: DocumentType::Aadhaar,
            document_number: document_number.into(),
            status: VerificationStatus::Pending,
            submitted_at,
        }
    }
}
