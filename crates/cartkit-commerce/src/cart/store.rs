//! Cart store and line item types.
//!
//! Operations are pure state transitions returning outcome values; the
//! session layer maps outcomes to notifications, confirmation prompts, and
//! re-renders. Operations on an id that is not in the cart are silent no-ops,
//! not errors.

use crate::catalog::{minimum_order_quantity, ProductTag};
use crate::ids::ProductId;
use crate::money::Naira;
use serde::{Deserialize, Serialize};

/// A line item in the cart.
///
/// Unique by product id within the cart; created on first add with the
/// product's minimum order quantity and mutated in place afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LineItem {
    /// Product identifier.
    pub id: ProductId,
    /// Product name (denormalized for display and the order payload).
    pub name: String,
    /// Unit price in whole naira, captured at add time.
    #[serde(rename = "price")]
    pub unit_price: Naira,
    /// Quantity; never below the product's minimum while in the cart.
    pub quantity: i64,
}

impl LineItem {
    /// Extended price (unit price x quantity).
    pub fn extended_price(&self) -> Naira {
        self.unit_price.multiply(self.quantity)
    }

    /// The minimum order quantity for this item's product.
    pub fn minimum(&self) -> i64 {
        minimum_order_quantity(&self.id)
    }
}

/// Result of an add operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// A new line item was inserted at the product's minimum quantity.
    /// A minimum above one warrants an informational notice.
    Inserted { minimum: i64 },
    /// The item was already in the cart; its quantity grew by one.
    Incremented { quantity: i64 },
}

/// Result of a decrease operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DecreaseOutcome {
    /// Quantity dropped by one, still at or above the minimum.
    Decremented { quantity: i64 },
    /// The item sits at its minimum; going lower means removing it, which
    /// needs the user's confirmation.
    AtMinimum { name: String, minimum: i64 },
    /// No such item; nothing happened.
    NotInCart,
}

/// An ordered shopping cart. Insertion order is display order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Cart {
    items: Vec<LineItem>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a product to the cart.
    ///
    /// If an item with the same id exists its quantity grows by one;
    /// otherwise a new line item is inserted at the product's minimum order
    /// quantity, capturing the tag's current unit price.
    pub fn add(&mut self, tag: &ProductTag) -> AddOutcome {
        if let Some(existing) = self.items.iter_mut().find(|i| i.id == tag.id) {
            existing.quantity += 1;
            return AddOutcome::Incremented {
                quantity: existing.quantity,
            };
        }

        let minimum = minimum_order_quantity(&tag.id);
        self.items.push(LineItem {
            id: tag.id.clone(),
            name: tag.name.clone(),
            unit_price: tag.unit_price,
            quantity: minimum,
        });
        AddOutcome::Inserted { minimum }
    }

    /// Increment an item's quantity by one. Silent no-op when absent.
    pub fn increase(&mut self, id: &ProductId) -> bool {
        match self.items.iter_mut().find(|i| &i.id == id) {
            Some(item) => {
                item.quantity += 1;
                true
            }
            None => false,
        }
    }

    /// Decrement an item's quantity by one, unless it already sits at its
    /// minimum; in that case nothing changes and the caller is told a removal
    /// confirmation is needed.
    pub fn decrease(&mut self, id: &ProductId) -> DecreaseOutcome {
        let Some(item) = self.items.iter_mut().find(|i| &i.id == id) else {
            return DecreaseOutcome::NotInCart;
        };

        let minimum = minimum_order_quantity(&item.id);
        if item.quantity > minimum {
            item.quantity -= 1;
            DecreaseOutcome::Decremented {
                quantity: item.quantity,
            }
        } else {
            DecreaseOutcome::AtMinimum {
                name: item.name.clone(),
                minimum,
            }
        }
    }

    /// Delete an item unconditionally. Returns whether anything was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let len_before = self.items.len();
        self.items.retain(|i| &i.id != id);
        self.items.len() < len_before
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Cart subtotal: sum of extended prices. Always recomputed, never
    /// cached.
    pub fn subtotal(&self) -> Naira {
        self.items.iter().map(LineItem::extended_price).sum()
    }

    /// Total item count (sum of quantities).
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    /// Check if the cart is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Items in display order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Get an item by product id.
    pub fn get(&self, id: &ProductId) -> Option<&LineItem> {
        self.items.iter().find(|i| &i.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn water() -> ProductTag {
        ProductTag::new("w1", "Sachet Water", Naira::new(300))
    }

    fn ice() -> ProductTag {
        ProductTag::new("w2", "Ice Block", Naira::new(300))
    }

    fn soda() -> ProductTag {
        ProductTag::new("d1", "Soft Drink", Naira::new(250))
    }

    #[test]
    fn test_add_inserts_at_minimum() {
        let mut cart = Cart::new();
        assert_eq!(cart.add(&water()), AddOutcome::Inserted { minimum: 10 });
        assert_eq!(cart.add(&ice()), AddOutcome::Inserted { minimum: 20 });
        assert_eq!(cart.add(&soda()), AddOutcome::Inserted { minimum: 1 });

        assert_eq!(cart.get(&"w1".into()).unwrap().quantity, 10);
        assert_eq!(cart.get(&"w2".into()).unwrap().quantity, 20);
        assert_eq!(cart.get(&"d1".into()).unwrap().quantity, 1);
    }

    #[test]
    fn test_add_same_id_accumulates_without_duplicates() {
        let mut cart = Cart::new();
        cart.add(&water());
        assert_eq!(cart.add(&water()), AddOutcome::Incremented { quantity: 11 });

        assert_eq!(cart.items().len(), 1);
        assert_eq!(cart.get(&"w1".into()).unwrap().quantity, 11);
    }

    #[test]
    fn test_increase_missing_id_is_noop() {
        let mut cart = Cart::new();
        assert!(!cart.increase(&"w1".into()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrease_above_minimum() {
        let mut cart = Cart::new();
        cart.add(&water());
        cart.increase(&"w1".into());

        assert_eq!(
            cart.decrease(&"w1".into()),
            DecreaseOutcome::Decremented { quantity: 10 }
        );
    }

    #[test]
    fn test_decrease_at_minimum_requests_confirmation() {
        let mut cart = Cart::new();
        cart.add(&ice());

        let outcome = cart.decrease(&"w2".into());
        assert_eq!(
            outcome,
            DecreaseOutcome::AtMinimum {
                name: "Ice Block".to_string(),
                minimum: 20
            }
        );
        // Declined confirmation: quantity untouched.
        assert_eq!(cart.get(&"w2".into()).unwrap().quantity, 20);

        // Confirmed: the whole item goes.
        assert!(cart.remove(&"w2".into()));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_decrease_missing_id_is_noop() {
        let mut cart = Cart::new();
        assert_eq!(cart.decrease(&"w1".into()), DecreaseOutcome::NotInCart);
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cart = Cart::new();
        cart.add(&water());
        cart.add(&soda());

        assert!(cart.remove(&"w1".into()));
        assert!(!cart.remove(&"w1".into()));
        assert_eq!(cart.items().len(), 1);

        cart.clear();
        assert!(cart.is_empty());
        assert_eq!(cart.subtotal(), Naira::zero());
    }

    #[test]
    fn test_subtotal_and_count_recomputed() {
        let mut cart = Cart::new();
        cart.add(&water()); // 10 x 300
        cart.add(&ice()); // 20 x 300

        assert_eq!(cart.subtotal(), Naira::new(9000));
        assert_eq!(cart.item_count(), 30);

        cart.increase(&"w2".into());
        assert_eq!(cart.subtotal(), Naira::new(9300));
        assert_eq!(cart.item_count(), 31);
    }

    #[test]
    fn test_quantity_floor_holds_across_sequences() {
        let mut cart = Cart::new();
        cart.add(&water());
        cart.add(&ice());
        cart.add(&soda());
        cart.increase(&"w1".into());
        for _ in 0..5 {
            cart.decrease(&"w1".into());
            cart.decrease(&"w2".into());
            cart.decrease(&"d1".into());
        }
        cart.add(&ice());
        cart.decrease(&"w2".into());

        for item in cart.items() {
            assert!(
                item.quantity >= item.minimum(),
                "{} below minimum",
                item.id
            );
        }
    }
}
