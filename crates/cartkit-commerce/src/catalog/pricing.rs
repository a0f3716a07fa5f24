//! Seasonal pricing.
//!
//! Ice sells cheaper through the rainy months. The season is derived from the
//! calendar month once at startup and written into the catalog tags, so every
//! later add-to-cart picks up the current price.

use crate::catalog::product::{ProductTag, ICE_BLOCK_ID};
use crate::money::Naira;

/// Ice block unit price during the rainy season.
pub const RAINY_SEASON_PRICE: Naira = Naira::new(300);

/// Ice block unit price for the rest of the year.
pub const DRY_SEASON_PRICE: Naira = Naira::new(500);

/// Whether a zero-based month index falls in the rainy season (April through
/// October).
pub fn is_rainy_season(month0: u32) -> bool {
    (3..=9).contains(&month0)
}

/// The seasonal ice block unit price for a zero-based month index.
pub fn seasonal_unit_price(month0: u32) -> Naira {
    if is_rainy_season(month0) {
        RAINY_SEASON_PRICE
    } else {
        DRY_SEASON_PRICE
    }
}

/// Rewrite the price on every ice block tag in the catalog for the given
/// month. Returns how many tags were touched; zero tags is a valid no-op.
pub fn apply_seasonal_pricing(tags: &mut [ProductTag], month0: u32) -> usize {
    let price = seasonal_unit_price(month0);
    let mut touched = 0;
    for tag in tags.iter_mut().filter(|t| t.id.as_str() == ICE_BLOCK_ID) {
        tag.unit_price = price;
        touched += 1;
    }
    touched
}
