//! WASM bindings for Aadhaar KYC scanning.
//!
//! This crate provides WebAssembly bindings for use in browsers and Node.js.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use wasm_bindgen::prelude::*;

use kycscan_core::checkout::{CheckoutOrder, decode_event};
use kycscan_core::document::{AadhaarParser, OcrHints, OcrScan};
use kycscan_core::kyc::{ReviewForm, ScanAttempt, ScanSession};
use kycscan_core::models::config::CheckoutConfig;
use kycscan_core::models::record::ExtractedRecord;

/// Initialize panic hook for better error messages in console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Version information.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

// Maps become plain objects rather than `Map`.
fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
        .map_err(js_error)
}

fn js_error(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn now() -> DateTime<Utc> {
    DateTime::from_timestamp_millis(js_sys::Date::now() as i64).unwrap_or_default()
}

/// Extract Aadhaar details from recognized text.
///
/// Returns `{ fullName, documentNumber, dateOfBirth, address }`, with empty
/// strings for fields that were not found.
#[wasm_bindgen]
pub fn extract_aadhaar_from_text(text: &str) -> Result<JsValue, JsValue> {
    to_js(&kycscan_core::extract_aadhaar(text))
}

/// Mask an Aadhaar number as `XXXX-XXXX-1234`.
#[wasm_bindgen]
pub fn mask_document_number(number: &str) -> String {
    kycscan_core::mask_document_number(number)
}

/// Decode a message posted by the checkout page.
///
/// Returns `null` for messages of a type the bridge does not handle.
#[wasm_bindgen]
pub fn decode_checkout_event(message: &str) -> Result<JsValue, JsValue> {
    match decode_event(message).map_err(js_error)? {
        Some(event) => to_js(&event),
        None => Ok(JsValue::NULL),
    }
}

/// Build the options object for the hosted checkout script.
///
/// `amount` is in rupees as a decimal string, e.g. `"499.50"`.
#[wasm_bindgen]
pub fn checkout_options(order_id: &str, key_id: &str, amount: &str) -> Result<JsValue, JsValue> {
    let amount = Decimal::from_str(amount).map_err(js_error)?;
    let order = CheckoutOrder::new(order_id, key_id, amount).map_err(js_error)?;
    let options = order
        .options(&CheckoutConfig::default())
        .map_err(js_error)?;
    to_js(&options)
}

/// Aadhaar extractor class for browser use.
#[wasm_bindgen]
pub struct AadhaarExtractor {
    parser: AadhaarParser,
    hints: OcrHints,
}

#[wasm_bindgen]
impl AadhaarExtractor {
    /// Create a new extractor.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            parser: AadhaarParser::new(),
            hints: OcrHints::default(),
        }
    }

    /// Aadhaar number reported by the OCR service.
    #[wasm_bindgen]
    pub fn set_hint_number(&mut self, number: &str) {
        self.hints.document_number = Some(number.to_string());
    }

    /// Name reported by the OCR service.
    #[wasm_bindgen]
    pub fn set_hint_name(&mut self, name: &str) {
        self.hints.name = Some(name.to_string());
    }

    /// Extract details from text, filling gaps from the hints.
    #[wasm_bindgen]
    pub fn extract(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse_with_hints(text, &self.hints).record)
    }

    /// Get extraction result with sources and warnings.
    #[wasm_bindgen]
    pub fn extract_with_metadata(&self, text: &str) -> Result<JsValue, JsValue> {
        to_js(&self.parser.parse_with_hints(text, &self.hints))
    }
}

impl Default for AadhaarExtractor {
    fn default() -> Self {
        Self::new()
    }
}

/// Scan and review flow for one screen.
///
/// A scan started with `begin_scan` is only applied if no newer scan was
/// started before its OCR result arrived.
#[wasm_bindgen]
pub struct KycReview {
    session: ScanSession,
}

#[wasm_bindgen]
impl KycReview {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {
            session: ScanSession::default(),
        }
    }

    /// Start a scan and return its attempt id.
    #[wasm_bindgen]
    pub fn begin_scan(&mut self) -> f64 {
        self.session.begin_attempt().id() as f64
    }

    /// Apply the OCR result of a scan. Returns `false` if the scan was superseded.
    #[wasm_bindgen]
    pub fn complete_scan(
        &mut self,
        attempt: f64,
        text: &str,
        hint_number: Option<String>,
        hint_name: Option<String>,
    ) -> bool {
        let scan = OcrScan::new(text).with_hints(OcrHints {
            document_number: hint_number,
            name: hint_name,
        });
        let applied = self
            .session
            .complete(ScanAttempt::from_id(attempt as u64), &scan)
            .is_some();
        if !applied {
            web_sys::console::warn_1(
                &format!("Dropping OCR result for superseded scan {}", attempt).into(),
            );
        }
        applied
    }

    /// Report that a scan failed. Returns `false` if the scan was superseded.
    #[wasm_bindgen]
    pub fn fail_scan(&mut self, attempt: f64) -> bool {
        self.session.fail(ScanAttempt::from_id(attempt as u64))
    }

    /// Current record, or `null` before a scan has completed.
    #[wasm_bindgen]
    pub fn record(&self) -> Result<JsValue, JsValue> {
        match self.session.form() {
            Some(form) => to_js(form.record()),
            None => Ok(JsValue::NULL),
        }
    }

    /// Masked document number of the current record.
    #[wasm_bindgen]
    pub fn masked_document_number(&self) -> Option<String> {
        self.session.form().map(ReviewForm::masked_document_number)
    }

    #[wasm_bindgen]
    pub fn set_full_name(&mut self, name: &str) -> Result<(), JsValue> {
        self.form_mut()?.set_full_name(name);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_date_of_birth(&mut self, date: &str) -> Result<(), JsValue> {
        self.form_mut()?.set_date_of_birth(date);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_address(&mut self, address: &str) -> Result<(), JsValue> {
        self.form_mut()?.set_address(address);
        Ok(())
    }

    #[wasm_bindgen]
    pub fn set_confirmed(&mut self, confirmed: bool) -> Result<(), JsValue> {
        self.form_mut()?.set_confirmed(confirmed);
        Ok(())
    }

    /// Build the pending submission for the signed-in user.
    #[wasm_bindgen]
    pub fn submit(&self, user_id: Option<String>) -> Result<JsValue, JsValue> {
        let form = self
            .session
            .form()
            .ok_or_else(|| JsValue::from_str("No scan to submit"))?;
        let submission = form.submit(user_id.as_deref(), now()).map_err(js_error)?;
        to_js(&submission)
    }
}

impl KycReview {
    fn form_mut(&mut self) -> Result<&mut ReviewForm, JsValue> {
        self.session
            .form_mut()
            .ok_or_else(|| JsValue::from_str("No scan to review"))
    }
}

impl Default for KycReview {
    fn default() -> Self {
        Self::new()
    }
}

/// Record with every field empty, for initialising forms.
#[wasm_bindgen]
pub fn empty_record() -> Result<JsValue, JsValue> {
    to_js(&ExtractedRecord::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_mask_document_number() {
        assert_eq!(mask_document_number("123456789012"), "XXXX-XXXX-9012");
        assert_eq!(mask_document_number("12345"), "12345");
    }

    #[wasm_bindgen_test]
    fn test_decode_unknown_event_is_null() {
        let value = decode_checkout_event(r#"{"type":"SOMETHING_ELSE"}"#).unwrap();
        assert!(value.is_null());
    }

    #[wasm_bindgen_test]
    fn test_decode_invalid_event_is_error() {
        assert!(decode_checkout_event("not json").is_err());
    }

    #[wasm_bindgen_test]
    fn test_review_superseded_scan() {
        let mut review = KycReview::new();
        let first = review.begin_scan();
        let second = review.begin_scan();

        assert!(!review.complete_scan(first, "1234 5678 9012", None, None));
        assert!(review.complete_scan(second, "1234 5678 9012", None, None));
        assert_eq!(
            review.masked_document_number().as_deref(),
            Some("XXXX-XXXX-9012")
        );
    }

    #[wasm_bindgen_test]
    fn test_review_submit_requires_confirmation() {
        let mut review = KycReview::new();
        let attempt = review.begin_scan();
        review.complete_scan(attempt, "1234 5678 9012", None, None);

        assert!(review.submit(Some("user-1".to_string())).is_err());
        review.set_confirmed(true).unwrap();
        assert!(review.submit(Some("user-1".to_string())).is_ok());
    }
}
