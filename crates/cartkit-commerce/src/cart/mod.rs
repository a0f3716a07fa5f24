//! Shopping cart module.
//!
//! Contains the cart store with minimum-order-quantity floors and the pure
//! display derivation used by the renderer.

mod render;
mod store;

pub use render::{CartDisplay, CartRow, EMPTY_CART_TEXT};
pub use store::{AddOutcome, Cart, DecreaseOutcome, LineItem};
