//! Checkout page events.

use serde::{Deserialize, Deserializer, Serialize};
use tracing::{debug, error};

use crate::error::CheckoutError;

/// Message used when the page reports a failure without a description.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Payment failed";

const KNOWN_TYPES: &[&str] = &["PAYMENT_SUCCESS", "PAYMENT_FAILED", "PAYMENT_CLOSED"];

/// Outcome reported by the hosted checkout page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CheckoutEvent {
    /// Payment captured.
    #[serde(rename_all = "camelCase")]
    PaymentSuccess {
        #[serde(default)]
        payment_id: String,
        #[serde(default)]
        order_id: String,
        #[serde(default)]
        signature: String,
    },

    /// Payment attempt failed.
    PaymentFailed {
        #[serde(
            default = "default_failure_message",
            deserialize_with = "failure_message"
        )]
        error: String,
    },

    /// User dismissed the checkout.
    PaymentClosed,
}

fn default_failure_message() -> String {
    DEFAULT_FAILURE_MESSAGE.to_string()
}

fn failure_message<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let message: Option<String> = Option::deserialize(deserializer)?;
    Ok(message
        .filter(|m| !m.is_empty())
        .unwrap_or_else(default_failure_message))
}

impl CheckoutEvent {
    /// Encode as the page would post it.
    pub fn to_message(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Decode a posted message.
///
/// Returns `Ok(None)` for well-formed messages of a type the bridge does not
/// handle, and an error when the message is not valid JSON.
pub fn decode_event(message: &str) -> Result<Option<CheckoutEvent>, CheckoutError> {
    let value: serde_json::Value = serde_json::from_str(message)?;

    let kind = value.get("type").and_then(|t| t.as_str());
    match kind {
        Some(kind) if KNOWN_TYPES.contains(&kind) => Ok(Some(serde_json::from_value(value)?)),
        _ => {
            debug!("Ignoring checkout message of type {:?}", kind);
            Ok(None)
        }
    }
}

/// Native side of the checkout bridge.
pub trait CheckoutHandler {
    fn on_success(&mut self, payment_id: &str, order_id: &str, signature: &str);

    fn on_error(&mut self, message: &str);

    fn on_close(&mut self);
}

/// Decode a posted message and route it to `handler`.
///
/// Malformed messages are logged and dropped.
pub fn dispatch(message: &str, handler: &mut impl CheckoutHandler) {
    match decode_event(message) {
        Ok(Some(CheckoutEvent::PaymentSuccess {
            payment_id,
            order_id,
            signature,
        })) => handler.on_success(&payment_id, &order_id, &signature),
        Ok(Some(CheckoutEvent::PaymentFailed { error })) => handler.on_error(&error),
        Ok(Some(CheckoutEvent::PaymentClosed)) => handler.on_close(),
        Ok(None) => {}
        Err(e) => error!("Error parsing checkout message: {}", e),
    }
}
