//! Team Assignment Model

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::milestone::Milestone;

/// How a team member is paid for an assignment
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayType {
    #[default]
    Fixed,
    Hourly,
    Milestone,
}

/// A team member's work on an estimate
///
/// With `PayType::Milestone` the `pay_amount` is ignored and the pay is
/// the sum of the milestone amounts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct TeamAssignment {
    #[validate(length(min = 1, max = 64))]
    pub member_id: String,
    #[serde(default)]
    pub tasks: Vec<String>,
    #[serde(default)]
    #[validate(
        range(min = 0.0, max = 1_000_000_000_000.0, message = "must be between 0 and 1e12"),
        custom(function = "crate::models::validate_finite")
    )]
    pub pay_amount: f64,
    #[serde(default)]
    pub pay_type: PayType,
    #[serde(default)]
    #[validate(nested)]
    pub milestones: Vec<Milestone>,
}

impl TeamAssignment {
    pub fn fixed(member_id: impl Into<String>, pay_amount: f64) -> Self {
        Self {
            member_id: member_id.into(),
            tasks: Vec::new(),
            pay_amount,
            pay_type: PayType::Fixed,
            milestones: Vec::new(),
        }
    }

    pub fn with_milestones(member_id: impl Into<String>, milestones: Vec<Milestone>) -> Self {
        Self {
            member_id: member_id.into(),
            tasks: Vec::new(),
            pay_amount: 0.0,
            pay_type: PayType::Milestone,
            milestones,
        }
    }
}
