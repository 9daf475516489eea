use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};

use thiserror::Error;

/// Number of fractional digits every monetary value carries
pub const SCALE: u32 = 2;

#[derive(Error, Debug)]
pub enum MoneyError {
    #[error("Overflow error while applying {0} operation on {1} and {2}")]
    Overflow(&'static str, Money, Money),

    #[error("Amount too large to hold two fractional digits: {0}")]
    OutOfRange(Decimal),
}

/// Exact decimal amount, always held at two fractional digits.
///
/// Every constructor rounds with round-half-to-even, so two `Money` values can be compared and
/// combined without worrying about mismatched scales.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Money(Decimal);

impl Money {
    /// Fails when `amount` is too large to keep two fractional digits
    pub fn new(amount: Decimal) -> Result<Self, MoneyError> {
        let mut rounded = amount.round_dp_with_strategy(SCALE, RoundingStrategy::MidpointNearestEven);

        // rescale stops short of SCALE when the mantissa can't hold the extra digits
        rounded.rescale(SCALE);
        if rounded.scale() != SCALE {
            Err(MoneyError::OutOfRange(amount))?
        }

        // -0.00 and 0.00 must render the same
        if rounded.is_zero() {
            rounded.set_sign_positive(true);
        }

        return Ok(Self(rounded));
    }

    pub fn zero() -> Self {
        return Self(Decimal::new(0, SCALE));
    }

    pub fn from_cents(cents: i64) -> Self {
        return Self(Decimal::new(cents, SCALE));
    }

    pub fn amount(&self) -> Decimal {
        return self.0;
    }

    pub fn is_zero(&self) -> bool {
        return self.0.is_zero();
    }

    pub fn is_negative(&self) -> bool {
        return self.0 < Decimal::ZERO;
    }

    pub fn checked_add(self, other: Self) -> Result<Self, MoneyError> {
        return self
            .0
            .checked_add(other.0)
            .and_then(|sum| Self::new(sum).ok())
            .ok_or(MoneyError::Overflow("add", self, other));
    }

    pub fn checked_sub(self, other: Self) -> Result<Self, MoneyError> {
        return self
            .0
            .checked_sub(other.0)
            .and_then(|difference| Self::new(difference).ok())
            .ok_or(MoneyError::Overflow("sub", self, other));
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
