//! Storefront error types.

use thiserror::Error;

/// Errors that can occur in storefront operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// Delivery locality is outside the service area.
    #[error("delivery is not available in \"{0}\"")]
    IneligibleLocality(String),

    /// The hidden honeypot field was populated; treat as an automated
    /// submission and discard it without any user-visible signal.
    #[error("submission flagged as automated")]
    BotDetected,

    /// The cart holds no items (or totals to zero).
    #[error("cart is empty")]
    EmptyCart,

    /// Invalid view transition.
    #[error("invalid view transition from {from} to {to}")]
    InvalidViewTransition {
        from: &'static str,
        to: &'static str,
    },
}
