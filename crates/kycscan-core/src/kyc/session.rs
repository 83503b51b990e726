//! Scan attempt sequencing for one user session.
//!
//! Capture, OCR, extraction and review run one after another. Starting a
//! new capture supersedes the previous attempt, and results that arrive
//! late for a superseded attempt are dropped.

use tracing::{debug, warn};

use crate::document::{AadhaarParser, DocumentExtractor, OcrScan};

use super::review::ReviewForm;

/// Handle for one capture attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScanAttempt(u64);

impl ScanAttempt {
    /// Rebuild a handle from an id handed across an FFI boundary.
    pub fn from_id(id: u64) -> Self {
        Self(id)
    }

    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Per-session scan state.
#[derive(Debug)]
pub struct ScanSession {
    parser: AadhaarParser,
    require_confirmation: bool,
    next_id: u64,
    current: Option<ScanAttempt>,
    form: Option<ReviewForm>,
}

impl ScanSession {
    pub fn new(parser: AadhaarParser) -> Self {
        Self {
            parser,
            require_confirmation: true,
            next_id: 0,
            current: None,
            form: None,
        }
    }

    /// Set whether review forms created by this session require confirmation.
    pub fn with_confirmation_required(mut self, required: bool) -> Self {
        self.require_confirmation = required;
        self
    }

    /// Start a new capture, discarding any previous form or pending attempt.
    pub fn begin_attempt(&mut self) -> ScanAttempt {
        self.next_id += 1;
        let attempt = ScanAttempt(self.next_id);
        if let Some(previous) = self.current.replace(attempt) {
            debug!("Attempt {} superseded by {}", previous.0, attempt.0);
        }
        self.form = None;
        attempt
    }

    /// Whether `attempt` is the one currently in flight.
    pub fn is_current(&self, attempt: ScanAttempt) -> bool {
        self.current == Some(attempt) && self.form.is_none()
    }

    /// Deliver the OCR result for `attempt`.
    ///
    /// Returns the review form when the attempt is still current, or `None`
    /// when it was superseded or already completed.
    pub fn complete(&mut self, attempt: ScanAttempt, scan: &OcrScan) -> Option<&mut ReviewForm> {
        if !self.is_current(attempt) {
            warn!("Dropping OCR result for stale attempt {}", attempt.0);
            return None;
        }

        let record = self.parser.extract(scan);
        let form = ReviewForm::new(record).with_confirmation_required(self.require_confirmation);
        Some(self.form.insert(form))
    }

    /// Abandon `attempt` after an OCR failure so a new capture can start.
    ///
    /// Returns `false` when the attempt was no longer in flight.
    pub fn fail(&mut self, attempt: ScanAttempt) -> bool {
        if !self.is_current(attempt) {
            return false;
        }
        self.current = None;
        true
    }

    /// Review form for the completed current attempt.
    pub fn form(&self) -> Option<&ReviewForm> {
        self.form.as_ref()
    }

    pub fn form_mut(&mut self) -> Option<&mut ReviewForm> {
        self.form.as_mut()
    }
}

impl Default for ScanSession {
    fn default() -> Self {
        Self::new(AadhaarParser::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = "Name: RAHUL KUMAR DOB: 01/01/1985\n1234 5678 9012";

    #[test]
    fn test_complete_current_attempt() {
        let mut session = ScanSession::default();
        let attempt = session.begin_attempt();

        let form = session.complete(attempt, &OcrScan::new(CARD)).unwrap();
        assert_eq!(form.record().full_name, "RAHUL KUMAR");
        assert_eq!(form.masked_document_number(), "XXXX-XXXX-9012");
        assert!(session.form().is_some());
    }

    #[test]
    fn test_stale_attempt_is_dropped() {
        let mut session = ScanSession::new(AadhaarParser::new());
        let first = session.begin_attempt();
        let second = session.begin_attempt();

        assert!(session.complete(first, &OcrScan::new(CARD)).is_none());
        assert!(session.form().is_none());

        assert!(session.complete(second, &OcrScan::new(CARD)).is_some());
    }

    #[test]
    fn test_retake_discards_form() {
        let mut session = ScanSession::default();
        let attempt = session.begin_attempt();
        session.complete(attempt, &OcrScan::new(CARD));

        session.begin_attempt();
        assert!(session.form().is_none());
    }

    #[test]
    fn test_attempt_completes_once() {
        let mut session = ScanSession::default();
        let attempt = session.begin_attempt();
        assert!(session.complete(attempt, &OcrScan::new(CARD)).is_some());
        assert!(session.complete(attempt, &OcrScan::new("")).is_none());
        assert_eq!(session.form().unwrap().record().full_name, "RAHUL KUMAR");
    }

    #[test]
    fn test_failed_attempt_is_not_current() {
        let mut session = ScanSession::default();
        let attempt = session.begin_attempt();
        assert!(session.fail(attempt));
        assert!(!session.is_current(attempt));
        assert!(!session.fail(attempt));
        assert!(session.complete(attempt, &OcrScan::new(CARD)).is_none());
    }
}
