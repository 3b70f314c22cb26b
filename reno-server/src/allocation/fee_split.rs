//! Platform fee split
//!
//! The fee is rounded to cents and the business gets the exact rest, so
//! the two parts always add back up to the invoice total. The
//! percentage comes from business settings and is not range-checked here.

use shared::models::FeeSplit;

use super::AllocationError;
use crate::money::{percent_of, round_money, to_decimal, to_f64};

/// Fee percentage used when a business has not configured one
pub const DEFAULT_PLATFORM_FEE_PERCENTAGE: f64 = 5.0;

pub fn split(invoice_total: f64, fee_percentage: f64) -> Result<FeeSplit, AllocationError> {
    let total = round_money(to_decimal(invoice_total)?);
    let platform_fee = round_money(percent_of(total, to_decimal(fee_percentage)?)?);
    let business_amount = total - platform_fee;

    Ok(FeeSplit {
        invoice_total: to_f64(total),
        platform_fee_percentage: fee_percentage,
        platform_fee: to_f64(platform_fee),
        business_amount: to_f64(business_amount),
    })
}
