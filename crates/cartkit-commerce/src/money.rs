//! Money type for whole-naira amounts.
//!
//! The storefront prices everything in whole naira, so amounts are plain
//! integers; the only scaling happens at the payment boundary, where the
//! provider wants kobo (naira x 100).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Mul};

/// The naira sign used in display strings.
pub const NAIRA_SIGN: &str = "\u{20a6}";

/// A monetary amount in whole naira.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Naira(pub i64);

impl Naira {
    /// Create an amount from whole naira.
    pub const fn new(amount: i64) -> Self {
        Self(amount)
    }

    /// The zero amount.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the raw whole-naira value.
    pub const fn amount(&self) -> i64 {
        self.0
    }

    /// Check if this is zero.
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Convert to kobo, the minor unit the payment provider charges in.
    pub const fn to_kobo(&self) -> i64 {
        self.0 * 100
    }

    /// Multiply by a quantity.
    pub const fn multiply(&self, factor: i64) -> Naira {
        Naira(self.0 * factor)
    }

    /// Format as a display string with thousands grouping (e.g., "₦12,345").
    pub fn display(&self) -> String {
        format!("{}{}", NAIRA_SIGN, group_thousands(self.0))
    }
}

impl Add for Naira {
    type Output = Naira;

    fn add(self, other: Naira) -> Naira {
        Naira(self.0 + other.0)
    }
}

impl Mul<i64> for Naira {
    type Output = Naira;

    fn mul(self, factor: i64) -> Naira {
        self.multiply(factor)
    }
}

impl Sum for Naira {
    fn sum<I: Iterator<Item = Naira>>(iter: I) -> Naira {
        iter.fold(Naira::zero(), Add::add)
    }
}

impl fmt::Display for Naira {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// Group an integer with comma thousands separators.
fn group_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if amount < 0 {
        grouped.push('-');
    }
    let first = digits.len() % 3;
    if first > 0 {
        grouped.push_str(&digits[..first]);
    }
    for (i, chunk) in digits[first..].as_bytes().chunks(3).enumerate() {
        if first > 0 || i > 0 {
            grouped.push(',');
        }
        grouped.push_str(std::str::from_utf8(chunk).unwrap_or(""));
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naira_basics() {
        let m = Naira::new(500);
        assert_eq!(m.amount(), 500);
        assert!(!m.is_zero());
        assert!(Naira::zero().is_zero());
    }

    #[test]
    fn test_kobo_conversion() {
        assert_eq!(Naira::new(6000).to_kobo(), 600_000);
        assert_eq!(Naira::zero().to_kobo(), 0);
    }

    #[test]
    fn test_multiply_and_sum() {
        let unit = Naira::new(300);
        assert_eq!(unit * 20, Naira::new(6000));

        let total: Naira = [Naira::new(3000), Naira::new(6000)].into_iter().sum();
        assert_eq!(total, Naira::new(9000));
    }

    #[test]
    fn test_display_grouping() {
        assert_eq!(Naira::new(0).display(), "₦0");
        assert_eq!(Naira::new(500).display(), "₦500");
        assert_eq!(Naira::new(6000).display(), "₦6,000");
        assert_eq!(Naira::new(12345).display(), "₦12,345");
        assert_eq!(Naira::new(1_234_567).display(), "₦1,234,567");
    }

    #[test]
    fn test_serde_transparent() {
        let json = serde_json::to_string(&Naira::new(300)).unwrap();
        assert_eq!(json, "300");
        let back: Naira = serde_json::from_str("300").unwrap();
        assert_eq!(back, Naira::new(300));
    }
}
