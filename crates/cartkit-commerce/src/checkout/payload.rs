//! Webhook payload types.
//!
//! The intake webhook receives one JSON shape with a `type` discriminator it
//! routes on: `"Order"` after a successful payment, `"Contact"` for contact
//! messages.

use crate::cart::{Cart, LineItem};
use crate::checkout::form::{CheckoutForm, ContactForm};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two payload shapes the intake webhook accepts, discriminated by the
/// `type` field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum WebhookPayload {
    /// A paid order awaiting fulfillment.
    Order(OrderPayload),
    /// A contact message.
    Contact(ContactPayload),
}

/// Order payload posted after the payment callback delivers a reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct OrderPayload {
    /// Customer name.
    pub name: String,
    /// Customer email.
    pub email: String,
    /// Delivery locality.
    pub lga: String,
    /// Delivery address.
    pub address: String,
    /// Mobile number.
    pub phone: String,
    /// Full line-item list at submission time.
    pub order_details: Vec<LineItem>,
    /// Subtotal display string, e.g. "₦9,000".
    pub total_value: String,
    /// Payment reference: the proof of payment the provider returned.
    pub payment_ref: String,
    /// Submission timestamp.
    pub timestamp: DateTime<Utc>,
}

impl OrderPayload {
    /// Assemble the payload from the validated form, the cart, and the
    /// payment reference.
    pub fn assemble(
        form: &CheckoutForm,
        cart: &Cart,
        payment_ref: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            lga: form.lga.clone(),
            address: form.address.clone(),
            phone: form.phone.clone(),
            order_details: cart.items().to_vec(),
            total_value: cart.subtotal().display(),
            payment_ref: payment_ref.into(),
            timestamp,
        }
    }
}

/// Contact payload; no payment involved.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ContactPayload {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
    /// Submission timestamp.
    pub timestamp: DateTime<Utc>,
}

impl ContactPayload {
    /// Assemble the payload from the validated form.
    pub fn assemble(form: &ContactForm, timestamp: DateTime<Utc>) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            message: form.message.clone(),
            timestamp,
        }
    }
}
