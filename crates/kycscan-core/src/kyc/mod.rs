//! Review and submission of extracted Aadhaar details.

mod review;
mod session;

pub use review::ReviewForm;
pub use session::{ScanAttempt, ScanSession};
