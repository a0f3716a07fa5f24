//! Product tags and per-product order rules.

use crate::ids::ProductId;
use crate::money::Naira;
use serde::{Deserialize, Serialize};

/// Product code for sachet water, sold in bags of ten.
pub const SACHET_WATER_ID: &str = "w1";

/// Product code for ice blocks, sold in batches of twenty and priced
/// seasonally.
pub const ICE_BLOCK_ID: &str = "w2";

/// The attribute bundle a product control carries: identifier, display name,
/// and the current unit price. Read at add-to-cart time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductTag {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Current unit price in whole naira.
    pub unit_price: Naira,
}

impl ProductTag {
    /// Create a new product tag.
    pub fn new(id: impl Into<ProductId>, name: impl Into<String>, unit_price: Naira) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            unit_price,
        }
    }

    /// The price label shown next to the product control (e.g., "₦300").
    pub fn price_label(&self) -> String {
        self.unit_price.display()
    }
}

/// Minimum order quantity for a product.
///
/// Sachet water and ice blocks are only sold in bulk; everything else starts
/// at a single unit.
pub fn minimum_order_quantity(id: &ProductId) -> i64 {
    match id.as_str() {
        SACHET_WATER_ID => 10,
        ICE_BLOCK_ID => 20,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimum_order_quantities() {
        assert_eq!(minimum_order_quantity(&ProductId::new("w1")), 10);
        assert_eq!(minimum_order_quantity(&ProductId::new("w2")), 20);
        assert_eq!(minimum_order_quantity(&ProductId::new("w9")), 1);
    }

    #[test]
    fn test_price_label() {
        let tag = ProductTag::new("w2", "Ice Block", Naira::new(300));
        assert_eq!(tag.price_label(), "₦300");
    }
}
