//! Checkout order amounts and page options.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::CheckoutError;
use crate::models::config::CheckoutConfig;

/// An order to be paid through the hosted checkout page.
///
/// Deserialization goes through [`CheckoutOrder::new`], so the amount
/// checks apply to orders read from JSON too.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "OrderFields")]
pub struct CheckoutOrder {
    /// Provider order id.
    pub order_id: String,

    /// Public key id of the merchant account.
    pub key_id: String,

    /// Amount in rupees.
    pub amount: Decimal,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderFields {
    order_id: String,
    key_id: String,
    amount: Decimal,
}

impl TryFrom<OrderFields> for CheckoutOrder {
    type Error = CheckoutError;

    fn try_from(fields: OrderFields) -> Result<Self, Self::Error> {
        Self::new(fields.order_id, fields.key_id, fields.amount)
    }
}

impl CheckoutOrder {
    /// Create an order, rejecting amounts that cannot be charged in paise.
    pub fn new(
        order_id: impl Into<String>,
        key_id: impl Into<String>,
        amount: Decimal,
    ) -> Result<Self, CheckoutError> {
        if amount <= Decimal::ZERO {
            return Err(CheckoutError::InvalidAmount(format!(
                "{} must be positive",
                amount
            )));
        }
        if amount.normalize().scale() > 2 {
            return Err(CheckoutError::InvalidAmount(format!(
                "{} has more than two decimal places",
                amount
            )));
        }

        Ok(Self {
            order_id: order_id.into(),
            key_id: key_id.into(),
            amount,
        })
    }

    /// Amount in paise, the unit the provider charges in.
    pub fn amount_in_paise(&self) -> Result<i64, CheckoutError> {
        (self.amount * Decimal::ONE_HUNDRED)
            .round()
            .to_i64()
            .ok_or_else(|| CheckoutError::InvalidAmount(format!("{} is out of range", self.amount)))
    }

    /// Amount as shown on the checkout page, e.g. `₹499.50`.
    pub fn display_amount(&self) -> String {
        format!("₹{:.2}", self.amount)
    }

    /// Options object passed to the hosted checkout script.
    pub fn options(&self, config: &CheckoutConfig) -> Result<serde_json::Value, CheckoutError> {
        Ok(json!({
            "key": self.key_id,
            "amount": self.amount_in_paise()?,
            "currency": config.currency,
            "name": config.merchant_name,
            "description": config.description,
            "order_id": self.order_id,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn amount(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_amount_in_paise() {
        let order = CheckoutOrder::new("order_1", "rzp_test", amount("499.50")).unwrap();
        assert_eq!(order.amount_in_paise().unwrap(), 49950);
        assert_eq!(order.display_amount(), "₹499.50");
    }

    #[test]
    fn test_whole_rupees_display_two_decimals() {
        let order = CheckoutOrder::new("order_1", "rzp_test", amount("100")).unwrap();
        assert_eq!(order.amount_in_paise().unwrap(), 10000);
        assert_eq!(order.display_amount(), "₹100.00");
    }

    #[test]
    fn test_rejects_uncharged_amounts() {
        assert!(matches!(
            CheckoutOrder::new("o", "k", Decimal::ZERO),
            Err(CheckoutError::InvalidAmount(_))
        ));
        assert!(matches!(
            CheckoutOrder::new("o", "k", amount("-5")),
            Err(CheckoutError::InvalidAmount(_))
        ));
        assert!(matches!(
            CheckoutOrder::new("o", "k", amount("1.005")),
            Err(CheckoutError::InvalidAmount(_))
        ));
        assert!(CheckoutOrder::new("o", "k", amount("1.500")).is_ok());
    }

    #[test]
    fn test_options_use_config() {
        let order = CheckoutOrder::new("order_1", "rzp_test", amount("250")).unwrap();
        let options = order.options(&CheckoutConfig::default()).unwrap();

        assert_eq!(options["key"], "rzp_test");
        assert_eq!(options["amount"], 25000);
        assert_eq!(options["currency"], "INR");
        assert_eq!(options["name"], "PowerNetPro");
        assert_eq!(options["description"], "Wallet Top-up");
        assert_eq!(options["order_id"], "order_1");
    }

    #[test]
    fn test_deserialize_validates_amount() {
        let order: CheckoutOrder =
            serde_json::from_str(r#"{"orderId":"order_1","keyId":"rzp_test","amount":"499.50"}"#)
                .unwrap();
        assert_eq!(order.amount_in_paise().unwrap(), 49950);

        for amount in ["\"0\"", "\"-5\"", "\"1.005\""] {
            let json = format!(r#"{{"orderId":"order_1","keyId":"rzp_test","amount":{}}}"#, amount);
            assert!(serde_json::from_str::<CheckoutOrder>(&json).is_err());
        }
    }
}
