//! Money calculation utilities using rust_decimal for precision
//!
//! All calculations are done using `Decimal` internally, then converted to
//! `f64` for serialization. Money leaves this module rounded to cents;
//! ratios (percentages, unrounded per-member costs) use [`to_f64_raw`].
//!
//! Conversions and arithmetic are checked: a value `Decimal` cannot hold
//! (NaN, infinities, magnitudes past ~7.9e28) or an overflowing product
//! is an error, never a silent zero or a panic.

use rust_decimal::prelude::*;
use thiserror::Error;

/// Rounding strategy for monetary values (2 decimal places, half away from zero)
const DECIMAL_PLACES: u32 = 2;

/// Tolerance for monetary comparisons (0.01)
#[cfg(test)]
pub const MONEY_TOLERANCE: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MoneyError {
    #[error("{0} is outside the supported money range")]
    OutOfRange(f64),

    #[error("money arithmetic overflowed")]
    Overflow,
}

/// Convert f64 to Decimal for calculation
#[inline]
pub fn to_decimal(value: f64) -> Result<Decimal, MoneyError> {
    Decimal::from_f64(value).ok_or(MoneyError::OutOfRange(value))
}

/// Round a Decimal to cents
#[inline]
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Convert Decimal back to f64, rounded to 2 decimal places
#[inline]
pub fn to_f64(value: Decimal) -> f64 {
    round_money(value).to_f64().unwrap_or_default()
}

/// Convert Decimal back to f64 without rounding
#[inline]
pub fn to_f64_raw(value: Decimal) -> f64 {
    value.to_f64().unwrap_or_default()
}

#[inline]
pub fn add(a: Decimal, b: Decimal) -> Result<Decimal, MoneyError> {
    a.checked_add(b).ok_or(MoneyError::Overflow)
}

#[inline]
pub fn mul(a: Decimal, b: Decimal) -> Result<Decimal, MoneyError> {
    a.checked_mul(b).ok_or(MoneyError::Overflow)
}

/// Checked sum of amounts
pub fn sum<I>(values: I) -> Result<Decimal, MoneyError>
where
    I: IntoIterator<Item = Decimal>,
{
    values.into_iter().try_fold(Decimal::ZERO, add)
}

/// `base * percentage / 100`
#[inline]
pub fn percent_of(base: Decimal, percentage: Decimal) -> Result<Decimal, MoneyError> {
    mul(base, percentage)?
        .checked_div(Decimal::ONE_HUNDRED)
        .ok_or(MoneyError::Overflow)
}

/// Whether two amounts are equal within one cent
#[cfg(test)]
pub fn money_eq(a: f64, b: f64) -> bool {
    match (to_decimal(a), to_decimal(b)) {
        (Ok(a), Ok(b)) => (a - b).abs() < MONEY_TOLERANCE,
        _ => false,
    }
}
