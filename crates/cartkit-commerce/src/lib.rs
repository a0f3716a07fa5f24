//! Storefront cart and checkout domain logic for CartKit.
//!
//! This crate is the pure half of the system: no I/O, no async, no rendering.
//! It provides:
//!
//! - **Catalog**: product tags and seasonal pricing
//! - **Cart**: the cart store with minimum-order-quantity floors, plus the
//!   display derivation used by whatever renders it
//! - **Checkout**: the view state machine, form validation, and the webhook
//!   payload types
//!
//! # Example
//!
//! ```rust
//! use cartkit_commerce::prelude::*;
//!
//! let ice = ProductTag::new("w2", "Ice Block", Naira::new(300));
//!
//! let mut cart = Cart::new();
//! cart.add(&ice);
//!
//! let display = CartDisplay::from_cart(&cart);
//! assert_eq!(display.subtotal_label, "₦6,000");
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod error;
pub mod ids;
pub mod money;

pub use error::StoreError;
pub use ids::ProductId;
pub use money::Naira;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::StoreError;
    pub use crate::ids::ProductId;
    pub use crate::money::Naira;

    // Catalog
    pub use crate::catalog::{
        apply_seasonal_pricing, minimum_order_quantity, seasonal_unit_price, ProductTag,
    };

    // Cart
    pub use crate::cart::{AddOutcome, Cart, CartDisplay, CartRow, DecreaseOutcome, LineItem};

    // Checkout
    pub use crate::checkout::{
        CheckoutForm, ContactForm, ContactPayload, OrderPayload, ViewState, WebhookPayload,
    };
}
