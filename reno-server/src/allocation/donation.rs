//! Donation calculation
//!
//! Preset and custom percentages go through the same formula
//! (`amount = earnings * pct / 100`). A custom amount derives the
//! percentage instead, which is undefined for zero earnings.
//! Net earnings are not clamped: a donation above earnings yields a
//! negative net.

use rust_decimal::Decimal;
use shared::models::{DonationChoice, DonationQuote, DonationSelection};

use super::AllocationError;
use crate::money::{MoneyError, mul, percent_of, round_money, to_decimal, to_f64, to_f64_raw};

/// Marginal tax rate used when none is configured
pub const DEFAULT_TAX_BRACKET_RATE: f64 = 0.24;

fn from_percentage(earnings: f64, percentage: f64) -> Result<DonationChoice, AllocationError> {
    let amount = percent_of(to_decimal(earnings)?, to_decimal(percentage)?)?;
    Ok(DonationChoice {
        earnings_amount: earnings,
        percentage,
        amount: to_f64(amount),
    })
}

/// Donation picked from the preset buttons
pub fn from_preset(earnings: f64, preset_percentage: f64) -> Result<DonationChoice, AllocationError> {
    from_percentage(earnings, preset_percentage)
}

/// Donation typed as a percentage
pub fn from_custom_percentage(
    earnings: f64,
    percentage: f64,
) -> Result<DonationChoice, AllocationError> {
    from_percentage(earnings, percentage)
}

/// Donation typed as an amount
///
/// The amount is rounded to cents like every other donation amount, and
/// the percentage is derived from the rounded figure.
pub fn from_custom_amount(earnings: f64, amount: f64) -> Result<DonationChoice, AllocationError> {
    let earnings_dec = to_decimal(earnings)?;
    if earnings_dec.is_zero() {
        return Err(AllocationError::ZeroEarnings);
    }
    let amount_dec = round_money(to_decimal(amount)?);
    let percentage = amount_dec
        .checked_div(earnings_dec)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .ok_or(MoneyError::Overflow)?;
    Ok(DonationChoice {
        earnings_amount: earnings,
        percentage: to_f64_raw(percentage.normalize()),
        amount: to_f64(amount_dec),
    })
}

/// What the contributor keeps after the donation
///
/// Not rounded: `net_earnings + amount` gives back `earnings` exactly
/// for whatever the caller passes in.
pub fn net_earnings(earnings: f64, donation_amount: f64) -> Result<f64, AllocationError> {
    let net = to_decimal(earnings)?
        .checked_sub(to_decimal(donation_amount)?)
        .ok_or(MoneyError::Overflow)?;
    Ok(to_f64_raw(net))
}

/// Rough tax benefit of the donation, for display only
pub fn estimated_tax_benefit(
    donation_amount: f64,
    bracket_rate: f64,
) -> Result<f64, AllocationError> {
    Ok(to_f64(mul(to_decimal(donation_amount)?, to_decimal(bracket_rate)?)?))
}

/// Resolve a selection into a full quote
pub fn quote(
    earnings: f64,
    selection: &DonationSelection,
    bracket_rate: f64,
) -> Result<DonationQuote, AllocationError> {
    let choice = match *selection {
        DonationSelection::Preset { percentage } => from_preset(earnings, percentage)?,
        DonationSelection::CustomPercentage { percentage } => {
            from_custom_percentage(earnings, percentage)?
        }
        DonationSelection::CustomAmount { amount } => from_custom_amount(earnings, amount)?,
    };

    Ok(DonationQuote {
        net_earnings: net_earnings(earnings, choice.amount)?,
        estimated_tax_benefit: estimated_tax_benefit(choice.amount, bracket_rate)?,
        bracket_rate,
        choice,
    })
}
