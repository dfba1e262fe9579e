//! Money type for representing monetary values.
//!
//! Uses cents-based integer representation to avoid floating-point
//! precision issues that plague monetary calculations. The register is
//! single-currency (USD); amounts cross the backend wire as decimal
//! dollars and are converted at the boundary.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Mul, Sub};

/// A monetary value in US cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default, PartialOrd, Ord)]
pub struct Money {
    /// Amount in cents.
    pub amount_cents: i64,
}

impl Money {
    /// Create a new Money value from cents.
    pub fn new(amount_cents: i64) -> Self {
        Self { amount_cents }
    }

    /// Create a Money value from a decimal dollar amount.
    ///
    /// ```
    /// use teapos_core::money::Money;
    /// let price = Money::from_decimal(5.50);
    /// assert_eq!(price.amount_cents, 550);
    /// ```
    pub fn from_decimal(amount: f64) -> Self {
        Self::new((amount * 100.0).round() as i64)
    }

    /// Create a zero amount.
    pub fn zero() -> Self {
        Self::new(0)
    }

    /// Check if this is zero.
    pub fn is_zero(&self) -> bool {
        self.amount_cents == 0
    }

    /// Check if this is positive.
    pub fn is_positive(&self) -> bool {
        self.amount_cents > 0
    }

    /// Convert to a decimal dollar value.
    pub fn to_decimal(&self) -> f64 {
        self.amount_cents as f64 / 100.0
    }

    /// Format as a display string (e.g., "$5.50").
    pub fn display(&self) -> String {
        format!("${:.2}", self.to_decimal())
    }

    /// Format as a display string without symbol (e.g., "5.50").
    pub fn display_amount(&self) -> String {
        format!("{:.2}", self.to_decimal())
    }

    /// Multiply by a scalar (e.g., a line quantity).
    pub fn multiply(&self, factor: i64) -> Money {
        Money::new(self.amount_cents * factor)
    }

    /// Multiply by a decimal factor, rounding to the nearest cent.
    pub fn multiply_decimal(&self, factor: f64) -> Money {
        Money::new((self.amount_cents as f64 * factor).round() as i64)
    }

    /// Sum an iterator of Money values.
    pub fn sum<'a>(iter: impl Iterator<Item = &'a Money>) -> Money {
        iter.fold(Money::zero(), |acc, m| acc + *m)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money::new(self.amount_cents + other.amount_cents)
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money::new(self.amount_cents - other.amount_cents)
    }
}

impl Mul<i64> for Money {
    type Output = Money;

    fn mul(self, factor: i64) -> Money {
        self.multiply(factor)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_money_from_cents() {
        let m = Money::new(550);
        assert_eq!(m.amount_cents, 550);
    }

    #[test]
    fn test_money_from_decimal() {
        assert_eq!(Money::from_decimal(5.50).amount_cents, 550);
        assert_eq!(Money::from_decimal(5.25).amount_cents, 525);
        // 0.1 + 0.2 style float dust rounds away
        assert_eq!(Money::from_decimal(0.30000000000000004).amount_cents, 30);
    }

    #[test]
    fn test_money_to_decimal() {
        let m = Money::new(1350);
        assert!((m.to_decimal() - 13.50).abs() < 1e-9);
    }

    #[test]
    fn test_money_display() {
        assert_eq!(Money::new(550).display(), "$5.50");
        assert_eq!(Money::new(1461).display(), "$14.61");
        assert_eq!(Money::zero().display(), "$0.00");
    }

    #[test]
    fn test_money_addition() {
        let c = Money::new(1000) + Money::new(350);
        assert_eq!(c.amount_cents, 1350);
    }

    #[test]
    fn test_money_subtraction() {
        let c = Money::new(1000) - Money::new(300);
        assert_eq!(c.amount_cents, 700);
    }

    #[test]
    fn test_money_multiply() {
        assert_eq!((Money::new(500) * 2).amount_cents, 1000);
    }

    #[test]
    fn test_money_multiply_decimal_rounds_to_cent() {
        // 13.50 * 0.0825 = 1.11375, rounds to $1.11
        let tax = Money::new(1350).multiply_decimal(0.0825);
        assert_eq!(tax.amount_cents, 111);
    }

    #[test]
    fn test_money_sum() {
        let values = [Money::new(1000), Money::new(350)];
        assert_eq!(Money::sum(values.iter()).amount_cents, 1350);
    }
}
