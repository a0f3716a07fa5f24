//! Product catalog module.
//!
//! Contains the product tag bundle read at add-to-cart time, per-product
//! order rules, and seasonal pricing.

mod pricing;
mod product;

pub use pricing::{
    apply_seasonal_pricing, is_rainy_season, seasonal_unit_price, DRY_SEASON_PRICE,
    RAINY_SEASON_PRICE,
};
pub use product::{minimum_order_quantity, ProductTag, ICE_BLOCK_ID, SACHET_WATER_ID};
