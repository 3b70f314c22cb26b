//! Platform Fee Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Split of an invoice total between the business and the platform
///
/// `platform_fee + business_amount == invoice_total` to the cent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeeSplit {
    pub invoice_total: f64,
    pub platform_fee_percentage: f64,
    pub platform_fee: f64,
    pub business_amount: f64,
}

/// Fee split request. The percentage defaults to the business setting.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct FeeSplitRequest {
    #[validate(
        range(min = 0.0, max = 1_000_000_000_000.0, message = "must be between 0 and 1e12"),
        custom(function = "crate::models::validate_finite")
    )]
    pub invoice_total: f64,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "must be between 0 and 100"))]
    pub platform_fee_percentage: Option<f64>,
}
