//! # Money Module
//!
//! Provides the `Money` type for Rupiah amounts.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Rupiah has no minor unit in everyday retail: prices are whole rupiah. │
//! │                                                                         │
//! │  Kopi Susu Gula Aren  Rp 18.000  → stored as 18000                      │
//! │  Americano            Rp 15.000  → stored as 15000                      │
//! │                                                                         │
//! │  Totals, profits and stock values are exact integer sums.              │
//! │  Arithmetic saturates at the i64 bounds instead of overflowing.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::money::Money;
//!
//! let price = Money::from_rupiah(15_000);
//! let line_total = price * 3;
//! assert_eq!(line_total.rupiah(), 45_000);
//! assert_eq!(line_total.to_string(), "Rp 45.000");
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

/// A monetary value in whole rupiah.
///
/// Signed so that a sale below cost shows up as negative profit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Money(#[ts(type = "number")] i64);

impl Money {
    /// Creates a Money value from whole rupiah.
    #[inline]
    pub const fn from_rupiah(rupiah: i64) -> Self {
        Money(rupiah)
    }

    /// Returns the value in whole rupiah.
    #[inline]
    pub const fn rupiah(&self) -> i64 {
        self.0
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies money by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use kasir_core::money::Money;
    ///
    /// let unit_price = Money::from_rupiah(22_000);
    /// assert_eq!(unit_price.multiply_quantity(2).rupiah(), 44_000);
    /// ```
    #[inline]
    pub const fn multiply_quantity(&self, qty: u32) -> Self {
        Money(self.0.saturating_mul(qty as i64))
    }
}

/// Indonesian display format: `Rp 18.000`, thousands grouped with dots.
///
/// ## Note
/// Front ends may still localise on their side; this is what receipts,
/// logs and alerts use.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.0.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(ch);
        }
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}Rp {}", sign, grouped)
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0.saturating_sub(other.0))
    }
}

/// Multiplication by a cart quantity.
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        self.multiply_quantity(qty)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(Money::from_rupiah(18_000).to_string(), "Rp 18.000");
        assert_eq!(Money::from_rupiah(500).to_string(), "Rp 500");
        assert_eq!(Money::from_rupiah(1_234_567).to_string(), "Rp 1.234.567");
        assert_eq!(Money::from_rupiah(-5_000).to_string(), "-Rp 5.000");
        assert_eq!(Money::zero().to_string(), "Rp 0");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_rupiah(18_000);
        let b = Money::from_rupiah(10_000);

        assert_eq!((a + b).rupiah(), 28_000);
        assert_eq!((a - b).rupiah(), 8_000);
        assert_eq!((a * 3).rupiah(), 54_000);
        assert!((b - a).is_negative());
    }

    #[test]
    fn test_sum() {
        let total: Money = [1_000, 2_500, 500]
            .into_iter()
            .map(Money::from_rupiah)
            .sum();
        assert_eq!(total.rupiah(), 4_000);

        let empty: Money = std::iter::empty().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_saturates_instead_of_overflowing() {
        let huge = Money::from_rupiah(i64::MAX / 2);
        assert_eq!((huge * 3).rupiah(), i64::MAX);
        assert_eq!((huge + huge + huge).rupiah(), i64::MAX);
        assert_eq!((Money::from_rupiah(i64::MIN) - huge).rupiah(), i64::MIN);

        let mut total = huge;
        total += huge;
        total += huge;
        assert_eq!(total.rupiah(), i64::MAX);
    }
}
