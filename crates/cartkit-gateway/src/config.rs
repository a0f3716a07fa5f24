//! Storefront configuration.

use serde::{Deserialize, Serialize};

/// Configuration for the storefront gateway.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Order-intake webhook endpoint; receives both order and contact
    /// payloads.
    pub webhook_url: String,
    /// Public key handed to the payment provider.
    pub payment_public_key: String,
    /// The single locality deliveries are accepted for.
    #[serde(default = "default_locality")]
    pub delivery_locality: String,
    /// Charge currency code.
    #[serde(default = "default_currency")]
    pub currency: String,
}

fn default_locality() -> String {
    "Amuwo-Odofin".to_string()
}

fn default_currency() -> String {
    "NGN".to_string()
}

impl StoreConfig {
    /// Create a configuration with the default locality and currency.
    pub fn new(webhook_url: impl Into<String>, payment_public_key: impl Into<String>) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            payment_public_key: payment_public_key.into(),
            delivery_locality: default_locality(),
            currency: default_currency(),
        }
    }

    /// Override the serviced delivery locality.
    pub fn with_delivery_locality(mut self, locality: impl Into<String>) -> Self {
        self.delivery_locality = locality.into();
        self
    }

    /// Override the charge currency.
    pub fn with_currency(mut self, currency: impl Into<String>) -> Self {
        self.currency = currency.into();
        self
    }
}
