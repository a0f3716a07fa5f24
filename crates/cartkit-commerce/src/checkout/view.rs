//! Checkout modal view state machine.

use crate::error::StoreError;
use serde::{Deserialize, Serialize};

/// The three exclusive modal views, plus the closed state.
///
/// Closing the modal hides it without clearing any cart or form state;
/// reopening always lands on the cart view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ViewState {
    /// Modal hidden.
    #[default]
    Closed,
    /// Cart review.
    Cart,
    /// Checkout form.
    Checkout,
    /// Order confirmation.
    ThankYou,
}

impl ViewState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewState::Closed => "closed",
            ViewState::Cart => "cart",
            ViewState::Checkout => "checkout",
            ViewState::ThankYou => "thank-you",
        }
    }

    /// Open the modal on the cart view.
    pub fn open(&mut self) {
        *self = ViewState::Cart;
    }

    /// Close the modal, preserving all other state.
    pub fn close(&mut self) {
        *self = ViewState::Closed;
    }

    /// Move from cart review to the checkout form. The caller must have
    /// already established the cart is non-empty.
    pub fn proceed(&mut self) -> Result<(), StoreError> {
        match self {
            ViewState::Cart => {
                *self = ViewState::Checkout;
                Ok(())
            }
            other => Err(StoreError::InvalidViewTransition {
                from: other.as_str(),
                to: ViewState::Checkout.as_str(),
            }),
        }
    }

    /// Return from the checkout form to cart review.
    pub fn back(&mut self) -> Result<(), StoreError> {
        match self {
            ViewState::Checkout => {
                *self = ViewState::Cart;
                Ok(())
            }
            other => Err(StoreError::InvalidViewTransition {
                from: other.as_str(),
                to: ViewState::Cart.as_str(),
            }),
        }
    }

    /// Land on the confirmation view. Only a fully successful submit gets
    /// here.
    pub fn complete(&mut self) -> Result<(), StoreError> {
        match self {
            ViewState::Checkout => {
                *self = ViewState::ThankYou;
                Ok(())
            }
            other => Err(StoreError::InvalidViewTransition {
                from: other.as_str(),
                to: ViewState::ThankYou.as_str(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_then_full_flow() {
        let mut view = ViewState::default();
        assert_eq!(view, ViewState::Closed);

        view.open();
        assert_eq!(view, ViewState::Cart);

        view.proceed().unwrap();
        assert_eq!(view, ViewState::Checkout);

        view.complete().unwrap();
        assert_eq!(view, ViewState::ThankYou);
    }

    #[test]
    fn test_back_from_checkout() {
        let mut view = ViewState::Checkout;
        view.back().unwrap();
        assert_eq!(view, ViewState::Cart);
    }

    #[test]
    fn test_invalid_transitions() {
        let mut view = ViewState::Closed;
        assert!(view.proceed().is_err());
        assert!(view.back().is_err());
        assert!(view.complete().is_err());
        assert_eq!(view, ViewState::Closed);
    }

    #[test]
    fn test_close_preserves_nothing_but_view() {
        let mut view = ViewState::ThankYou;
        view.close();
        assert_eq!(view, ViewState::Closed);

        // Reopening lands back on the cart view.
        view.open();
        assert_eq!(view, ViewState::Cart);
    }
}
