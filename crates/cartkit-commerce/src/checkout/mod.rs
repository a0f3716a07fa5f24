//! Checkout module.
//!
//! Contains the modal view state machine, the transient form bundles with
//! their validation, and the webhook payload types.

mod form;
mod payload;
mod view;

pub use form::{CheckoutForm, ContactForm};
pub use payload::{ContactPayload, OrderPayload, WebhookPayload};
pub use view::ViewState;
