//! Fixed-point monetary amounts and percentage rates
//!
//! Premiums, balances, coverage amounts, and payouts are all whole units
//! of a single implicit currency. `Amount` wraps an `i64` so balance
//! arithmetic stays integral; `Rate` carries percentage thresholds on
//! `rust_decimal` so comparisons like "2% of original value" never touch
//! floating point.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Neg, Sub};
use thiserror::Error;

/// Errors that can occur during amount operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MoneyError {
    #[error("Amount must be positive, got {0}")]
    NotPositive(i64),

    #[error("Overflow during calculation")]
    Overflow,

    #[error("Division by zero")]
    DivisionByZero,
}

/// An integral monetary amount in whole currency units
///
/// Negative values are meaningful for outstanding balances, where they
/// represent credit from an over-payment.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(i64);

impl Amount {
    /// The zero amount
    pub const ZERO: Amount = Amount(0);

    /// Creates a new amount from whole units
    pub const fn new(units: i64) -> Self {
        Self(units)
    }

    /// Returns the underlying whole-unit value
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// Returns true if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Returns true if the amount is strictly negative
    pub fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Returns the smaller of two amounts
    pub fn min(self, other: Amount) -> Amount {
        Amount(self.0.min(other.0))
    }

    /// Checked addition
    pub fn checked_add(&self, other: Amount) -> Result<Amount, MoneyError> {
        self.0
            .checked_add(other.0)
            .map(Amount)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked subtraction
    pub fn checked_sub(&self, other: Amount) -> Result<Amount, MoneyError> {
        self.0
            .checked_sub(other.0)
            .map(Amount)
            .ok_or(MoneyError::Overflow)
    }

    /// Checked multiplication by a scalar (e.g. payments per year)
    pub fn checked_mul(&self, factor: i64) -> Result<Amount, MoneyError> {
        self.0
            .checked_mul(factor)
            .map(Amount)
            .ok_or(MoneyError::Overflow)
    }

    /// Splits the amount into `parts` equal shares by integer division
    ///
    /// The remainder is not distributed; each share is `floor(self / parts)`.
    /// This is the claim-payout split rule: coverage 30 over 4 affected
    /// persons pays 7 each.
    pub fn split_evenly(&self, parts: u32) -> Result<Amount, MoneyError> {
        if parts == 0 {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Amount(self.0 / i64::from(parts)))
    }

    /// Halves the amount by integer division (coverage derivation)
    pub fn halved(&self) -> Amount {
        Amount(self.0 / 2)
    }

    /// Returns the amount as a decimal for rate comparisons
    pub fn as_decimal(&self) -> Decimal {
        Decimal::from(self.0)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        self.checked_add(other).expect("Overflow in Amount::add")
    }
}

impl Sub for Amount {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        self.checked_sub(other).expect("Overflow in Amount::sub")
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Amount(-self.0)
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Amount>>(iter: I) -> Amount {
        iter.fold(Amount::ZERO, |acc, a| acc + a)
    }
}

impl From<i64> for Amount {
    fn from(units: i64) -> Self {
        Amount(units)
    }
}

/// A percentage rate used for policy thresholds
///
/// Stored as a decimal fraction (0.02 for 2%). Used for the
/// minimum-premium rule and the total-loss damage threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rate {
    value: Decimal,
}

impl Rate {
    /// Creates a rate from a decimal fraction (e.g. 0.02 for 2%)
    pub fn new(value: Decimal) -> Self {
        Self { value }
    }

    /// Creates a rate from a percentage (e.g. 2.0 for 2%)
    pub fn from_percentage(percentage: Decimal) -> Self {
        Self {
            value: percentage / dec!(100),
        }
    }

    /// Returns the rate as a decimal fraction
    pub fn as_decimal(&self) -> Decimal {
        self.value
    }

    /// Applies this rate to an amount, yielding an exact decimal
    pub fn of(&self, amount: Amount) -> Decimal {
        amount.as_decimal() * self.value
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.value * dec!(100))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_amount_arithmetic() {
        let a = Amount::new(100);
        let b = Amount::new(30);

        assert_eq!((a + b).units(), 130);
        assert_eq!((a - b).units(), 70);
        assert_eq!((b - a).units(), -70);
    }

    #[test]
    fn test_amount_signs() {
        assert!(Amount::new(1).is_positive());
        assert!(!Amount::ZERO.is_positive());
        assert!(Amount::new(-1).is_negative());
        assert!(Amount::ZERO.is_zero());
    }

    #[test]
    fn test_amount_overflow_is_checked() {
        let max = Amount::new(i64::MAX);
        assert_eq!(max.checked_add(Amount::new(1)), Err(MoneyError::Overflow));
    }

    #[test]
    fn test_split_evenly_truncates() {
        let coverage = Amount::new(30);
        assert_eq!(coverage.split_evenly(4).unwrap(), Amount::new(7));
    }

    #[test]
    fn test_split_by_zero_fails() {
        assert_eq!(
            Amount::new(10).split_evenly(0),
            Err(MoneyError::DivisionByZero)
        );
    }

    #[test]
    fn test_halved_truncates() {
        assert_eq!(Amount::new(15_001).halved(), Amount::new(7_500));
    }

    #[test]
    fn test_rate_of_amount() {
        let two_percent = Rate::from_percentage(dec!(2));
        assert_eq!(two_percent.of(Amount::new(10_000)), dec!(200));

        let seventy = Rate::from_percentage(dec!(70));
        assert_eq!(seventy.of(Amount::new(15)), dec!(10.5));
    }
}
