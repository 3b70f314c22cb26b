//! Estimate Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::team::{PayType, TeamAssignment};

/// Inputs of the estimate summary panel
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct EstimateRequest {
    #[serde(default)]
    #[validate(nested)]
    pub assignments: Vec<TeamAssignment>,
    #[serde(default)]
    #[validate(
        range(min = 0.0, max = 1_000_000_000_000.0, message = "must be between 0 and 1e12"),
        custom(function = "crate::models::validate_finite")
    )]
    pub materials: f64,
    #[serde(default)]
    #[validate(
        range(min = 0.0, max = 1_000_000_000_000.0, message = "must be between 0 and 1e12"),
        custom(function = "crate::models::validate_finite")
    )]
    pub equipment: f64,
    #[serde(default)]
    #[validate(
        range(min = 0.0, max = 1_000_000_000_000.0, message = "must be between 0 and 1e12"),
        custom(function = "crate::models::validate_finite")
    )]
    pub permits: f64,
    /// Slider bounded to [0, 20] in the builder
    #[serde(default)]
    #[validate(range(min = 0.0, max = 20.0, message = "must be between 0 and 20"))]
    pub contingency_percentage: f64,
}

/// Labor cost of one assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaborLine {
    pub member_id: String,
    pub pay_type: PayType,
    pub amount: f64,
}

/// Estimate totals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateBreakdown {
    pub labor_lines: Vec<LaborLine>,
    pub labor: f64,
    pub materials: f64,
    pub equipment: f64,
    pub permits: f64,
    pub subtotal: f64,
    pub contingency_percentage: f64,
    pub contingency_amount: f64,
    pub total: f64,
}
