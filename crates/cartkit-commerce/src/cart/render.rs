//! Cart display derivation.
//!
//! A pure function of the current cart state: rows, subtotal, item count,
//! and the ready-made label strings the rendering surface shows verbatim.

use crate::cart::store::{Cart, LineItem};
use crate::ids::ProductId;
use crate::money::Naira;
use serde::Serialize;

/// Placeholder text shown when the cart holds nothing.
pub const EMPTY_CART_TEXT: &str = "Your cart is empty.";

/// One rendered cart row.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartRow {
    /// Product identifier (used to route row actions back to the store).
    pub id: ProductId,
    /// Product name.
    pub name: String,
    /// Unit price.
    pub unit_price: Naira,
    /// Quantity.
    pub quantity: i64,
    /// Extended price (unit price x quantity).
    pub extended_price: Naira,
    /// Pricing summary line, e.g. "₦300 x 20 = ₦6,000".
    pub summary: String,
}

impl CartRow {
    fn from_item(item: &LineItem) -> Self {
        let extended = item.extended_price();
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            unit_price: item.unit_price,
            quantity: item.quantity,
            extended_price: extended,
            summary: format!(
                "{} x {} = {}",
                item.unit_price.display(),
                item.quantity,
                extended.display()
            ),
        }
    }
}

/// Display representation of the whole cart.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct CartDisplay {
    /// One row per line item, in display order. Empty when the cart is empty.
    pub rows: Vec<CartRow>,
    /// Cart-wide subtotal.
    pub subtotal: Naira,
    /// Subtotal label, e.g. "₦9,000" ("₦0" when empty).
    pub subtotal_label: String,
    /// Total item count (sum of quantities).
    pub item_count: i64,
    /// Label for the cart-access control, e.g. "Cart (30)".
    pub cart_button_label: String,
    /// Placeholder text, present only when the cart is empty.
    pub placeholder: Option<&'static str>,
}

impl CartDisplay {
    /// Derive the display representation from the cart.
    pub fn from_cart(cart: &Cart) -> Self {
        let subtotal = cart.subtotal();
        let item_count = cart.item_count();
        Self {
            rows: cart.items().iter().map(CartRow::from_item).collect(),
            subtotal,
            subtotal_label: subtotal.display(),
            item_count,
            cart_button_label: format!("Cart ({})", item_count),
            placeholder: cart.is_empty().then_some(EMPTY_CART_TEXT),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ProductTag;

    #[test]
    fn test_empty_cart_display() {
        let display = CartDisplay::from_cart(&Cart::new());

        assert!(display.rows.is_empty());
        assert_eq!(display.subtotal_label, "₦0");
        assert_eq!(display.item_count, 0);
        assert_eq!(display.cart_button_label, "Cart (0)");
        assert_eq!(display.placeholder, Some(EMPTY_CART_TEXT));
    }

    #[test]
    fn test_rows_and_totals() {
        let mut cart = Cart::new();
        cart.add(&ProductTag::new("w2", "Ice Block", Naira::new(300)));
        cart.add(&ProductTag::new("d1", "Soft Drink", Naira::new(1500)));

        let display = CartDisplay::from_cart(&cart);

        assert_eq!(display.rows.len(), 2);
        assert_eq!(display.rows[0].summary, "₦300 x 20 = ₦6,000");
        assert_eq!(display.rows[1].summary, "₦1,500 x 1 = ₦1,500");
        assert_eq!(display.subtotal, Naira::new(7500));
        assert_eq!(display.subtotal_label, "₦7,500");
        assert_eq!(display.cart_button_label, "Cart (21)");
        assert_eq!(display.placeholder, None);
    }

    #[test]
    fn test_display_tracks_mutations() {
        let mut cart = Cart::new();
        let ice = ProductTag::new("w2", "Ice Block", Naira::new(300));
        cart.add(&ice);
        let before = CartDisplay::from_cart(&cart);

        cart.increase(&"w2".into());
        let after = CartDisplay::from_cart(&cart);

        assert_eq!(before.subtotal, Naira::new(6000));
        assert_eq!(after.subtotal, Naira::new(6300));
    }
}
