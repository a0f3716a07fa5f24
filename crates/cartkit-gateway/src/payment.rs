//! Payment collaborator port.
//!
//! The popup-style provider is a black box: the storefront hands it a charge
//! request and gets back either a payment reference (proof of payment) or a
//! terminal failure for that attempt. Amounts cross this boundary in kobo.

use crate::config::StoreConfig;
use async_trait::async_trait;
use cartkit_commerce::Naira;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// The transaction reference the provider returns on a successful charge.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PaymentReference(String);

impl PaymentReference {
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PaymentReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A custom metadata field attached to the charge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CustomField {
    pub display_name: String,
    pub variable_name: String,
    pub value: String,
}

/// Charge metadata; carries the customer's mobile number so the provider's
/// dashboard shows it against the transaction.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChargeMetadata {
    pub custom_fields: Vec<CustomField>,
}

/// One charge attempt, shaped the way the inline provider expects it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChargeRequest {
    /// Public key identifying the merchant.
    pub key: String,
    /// Customer email.
    pub email: String,
    /// Amount in kobo (naira x 100).
    pub amount: i64,
    /// Currency code.
    pub currency: String,
    /// Custom-field metadata.
    pub metadata: ChargeMetadata,
}

impl ChargeRequest {
    /// Build a charge for the cart subtotal, converting to kobo and tucking
    /// the mobile number into the metadata.
    pub fn new(config: &StoreConfig, email: &str, phone: &str, subtotal: Naira) -> Self {
        Self {
            key: config.payment_public_key.clone(),
            email: email.to_string(),
            amount: subtotal.to_kobo(),
            currency: config.currency.clone(),
            metadata: ChargeMetadata {
                custom_fields: vec![CustomField {
                    display_name: "Mobile Number".to_string(),
                    variable_name: "mobile_number".to_string(),
                    value: phone.to_string(),
                }],
            },
        }
    }
}

/// Terminal failures of one charge attempt. No retry loop sits behind these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// The customer dismissed the payment popup without completing.
    #[error("transaction was not completed")]
    Abandoned,

    /// The provider reported a failure.
    #[error("payment provider error: {0}")]
    Provider(String),
}

/// Payment collaborator interface.
#[async_trait]
pub trait PaymentProvider: Send + Sync {
    /// Run one charge attempt to completion (success, failure, or
    /// abandonment).
    async fn charge(&self, request: ChargeRequest) -> Result<PaymentReference, PaymentError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_charge_request_converts_to_kobo() {
        let config = StoreConfig::new("https://hooks.example/x", "pk_test_abc");
        let request = ChargeRequest::new(&config, "ada@example.com", "08010000000", Naira::new(9000));

        assert_eq!(request.amount, 900_000);
        assert_eq!(request.currency, "NGN");
        assert_eq!(request.key, "pk_test_abc");
    }

    #[test]
    fn test_charge_request_carries_mobile_number() {
        let config = StoreConfig::new("https://hooks.example/x", "pk_test_abc");
        let request = ChargeRequest::new(&config, "ada@example.com", "08010000000", Naira::new(500));

        let field = &request.metadata.custom_fields[0];
        assert_eq!(field.variable_name, "mobile_number");
        assert_eq!(field.value, "08010000000");
    }

    #[test]
    fn test_charge_request_wire_shape() {
        let config = StoreConfig::new("https://hooks.example/x", "pk_test_abc");
        let request = ChargeRequest::new(&config, "ada@example.com", "08010000000", Naira::new(500));
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["amount"], 50_000);
        assert_eq!(
            value["metadata"]["custom_fields"][0]["display_name"],
            "Mobile Number"
        );
    }
}
