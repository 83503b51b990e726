//! Review form shown after extraction.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::document::mask_document_number;
use crate::error::SubmissionError;
use crate::models::record::ExtractedRecord;
use crate::models::submission::KycSubmission;

/// Extracted details under review by the user.
///
/// Name, date of birth and address may be edited. The document number is
/// read-only and only ever shown masked.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewForm {
    record: ExtractedRecord,
    confirmed: bool,
    require_confirmation: bool,
}

impl ReviewForm {
    pub fn new(record: ExtractedRecord) -> Self {
        Self {
            record,
            confirmed: false,
            require_confirmation: true,
        }
    }

    /// Set whether submitting requires the confirmation checkbox.
    pub fn with_confirmation_required(mut self, required: bool) -> Self {
        self.require_confirmation = required;
        self
    }

    pub fn record(&self) -> &ExtractedRecord {
        &self.record
    }

    pub fn set_full_name(&mut self, name: impl Into<String>) {
        self.record.full_name = name.into();
    }

    pub fn set_date_of_birth(&mut self, date: impl Into<String>) {
        self.record.date_of_birth = date.into();
    }

    pub fn set_address(&mut self, address: impl Into<String>) {
        self.record.address = address.into();
    }

    /// Document number as displayed, e.g. `XXXX-XXXX-9012`.
    pub fn masked_document_number(&self) -> String {
        mask_document_number(&self.record.document_number)
    }

    pub fn set_confirmed(&mut self, confirmed: bool) {
        self.confirmed = confirmed;
    }

    pub fn is_confirmed(&self) -> bool {
        self.confirmed
    }

    /// Build a pending submission owned by `user_id`.
    ///
    /// Checks, in order: confirmation, a 12-digit document number, a
    /// signed-in user.
    pub fn submit(
        &self,
        user_id: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<KycSubmission, SubmissionError> {
        if self.require_confirmation && !self.confirmed {
            return Err(SubmissionError::ConfirmationRequired);
        }

        if !self.record.has_valid_document_number() {
            return Err(SubmissionError::InvalidDocumentNumber(
                self.record.document_number.clone(),
            ));
        }

        let user_id = user_id
            .filter(|id| !id.is_empty())
            .ok_or(SubmissionError::MissingUser)?;

        Ok(KycSubmission::pending_aadhaar(
            user_id,
            self.record.document_number.clone(),
            now,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::submission::{DocumentType, VerificationStatus};
    use chrono::TimeZone;

    fn form() -> ReviewForm {
        ReviewForm::new(ExtractedRecord {
            full_name: "RAHUL KUMAR SHARMA".to_string(),
            document_number: "123456789012".to_string(),
            date_of_birth: "01/01/1985".to_string(),
            address: "123 MG Road Bangalore 560001".to_string(),
        })
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_submit_requires_confirmation_first() {
        let mut form = form();
        form.record.document_number = "123".to_string();

        assert_eq!(
            form.submit(None, now()),
            Err(SubmissionError::ConfirmationRequired)
        );
    }

    #[test]
    fn test_submit_rejects_short_number() {
        let mut form = ReviewForm::new(ExtractedRecord::default());
        form.set_confirmed(true);

        assert_eq!(
            form.submit(Some("user-1"), now()),
            Err(SubmissionError::InvalidDocumentNumber(String::new()))
        );
    }

    #[test]
    fn test_submit_rejects_non_ascii_digits() {
        let mut form = ReviewForm::new(ExtractedRecord {
            document_number: "१२३४५६७८९०१२".to_string(),
            ..Default::default()
        });
        form.set_confirmed(true);

        assert!(matches!(
            form.submit(Some("user-1"), now()),
            Err(SubmissionError::InvalidDocumentNumber(_))
        ));
    }

    #[test]
    fn test_submit_requires_user() {
        let mut form = form();
        form.set_confirmed(true);

        assert_eq!(form.submit(None, now()), Err(SubmissionError::MissingUser));
        assert_eq!(form.submit(Some(""), now()), Err(SubmissionError::MissingUser));
    }

    #[test]
    fn test_submit_builds_pending_record() {
        let mut form = form();
        form.set_full_name("Rahul K Sharma");
        form.set_confirmed(true);

        let submission = form.submit(Some("user-1"), now()).unwrap();
        assert_eq!(submission.user_id, "user-1");
        assert_eq!(submission.document_type, DocumentType::Aadhaar);
        assert_eq!(submission.document_number, "123456789012");
        assert_eq!(submission.status, VerificationStatus::Pending);
        assert_eq!(submission.submitted_at, now());
    }

    #[test]
    fn test_edits_keep_number_masked() {
        let mut form = form();
        form.set_full_name("Rahul Sharma");
        form.set_date_of_birth("02/01/1985");
        form.set_address("Bangalore");

        assert_eq!(form.masked_document_number(), "XXXX-XXXX-9012");
        assert_eq!(form.record().full_name, "Rahul Sharma");
        assert_eq!(form.record().date_of_birth, "02/01/1985");
        assert_eq!(form.record().address, "Bangalore");
    }

    #[test]
    fn test_confirmation_can_be_waived() {
        let form = form().with_confirmation_required(false);
        assert!(form.submit(Some("user-1"), now()).is_ok());
    }
}
