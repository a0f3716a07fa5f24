//! Transient form bundles and their validation.
//!
//! Checkout validation runs in a fixed order and short-circuits on the first
//! failure: delivery locality, then the honeypot, then the computed subtotal.
//! The honeypot failure is deliberately indistinguishable from silence on the
//! outside; the typed error exists so the orchestrator can abort without
//! touching the UI.

use crate::error::StoreError;
use crate::money::Naira;
use serde::{Deserialize, Serialize};

/// Checkout form input. Not persisted anywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CheckoutForm {
    /// Customer name.
    pub name: String,
    /// Customer email, handed to the payment provider.
    pub email: String,
    /// Mobile number, carried in the payment metadata.
    pub phone: String,
    /// Delivery address.
    pub address: String,
    /// Delivery locality (LGA); must match the single serviced locality.
    pub lga: String,
    /// Hidden honeypot field. Humans never fill it.
    #[serde(default)]
    pub bot_check: String,
}

impl CheckoutForm {
    /// Validate against the serviced locality and the cart subtotal.
    ///
    /// Check order matters and is part of the contract: a bad locality is
    /// reported before the honeypot is even looked at.
    pub fn validate(&self, subtotal: Naira, allowed_locality: &str) -> Result<(), StoreError> {
        if self.lga != allowed_locality {
            return Err(StoreError::IneligibleLocality(self.lga.clone()));
        }
        if !self.bot_check.is_empty() {
            return Err(StoreError::BotDetected);
        }
        if subtotal.is_zero() {
            return Err(StoreError::EmptyCart);
        }
        Ok(())
    }

    /// Blank every field, as after a successful order.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Contact form input. Not persisted anywhere.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Hidden honeypot field.
    #[serde(default)]
    pub bot_check: String,
}

impl ContactForm {
    /// Honeypot check; the only validation the contact path carries.
    pub fn validate(&self) -> Result<(), StoreError> {
        if !self.bot_check.is_empty() {
            return Err(StoreError::BotDetected);
        }
        Ok(())
    }

    /// Blank every field, as after a successful send.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
