//! Gateway error types.

use crate::payment::{PaymentError, PaymentReference};
use crate::webhook::WebhookError;
use thiserror::Error;

/// Failures crossing a collaborator boundary.
///
/// The split between the two delivery variants matters: an order delivery
/// failure happens after funds have moved, so it carries the payment
/// reference the customer needs for manual follow-up, while a contact
/// delivery failure has no side effects at all.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The charge attempt ended without a payment.
    #[error(transparent)]
    Payment(#[from] PaymentError),

    /// Payment succeeded but the order notification did not get through.
    /// Never retried automatically; the reference is the customer's proof.
    #[error("order notification failed after successful payment (ref {reference})")]
    OrderDeliveryFailed {
        reference: PaymentReference,
        #[source]
        source: WebhookError,
    },

    /// The contact message did not get through.
    #[error("contact message could not be delivered")]
    ContactDeliveryFailed(#[source] WebhookError),
}
