//! Task Model

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use validator::Validate;

/// A task row in the estimate builder. Its cost is shared evenly by the
/// assigned members.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Task {
    #[validate(length(min = 1, max = 64))]
    pub id: String,
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(
        range(min = 0.0, max = 1_000_000_000_000.0, message = "must be between 0 and 1e12"),
        custom(function = "crate::models::validate_finite")
    )]
    pub total_cost: f64,
    /// Ordered by id, so settlement shares come out in a stable order
    #[serde(default)]
    pub assigned_member_ids: BTreeSet<String>,
}

impl Task {
    pub fn new(id: impl Into<String>, name: impl Into<String>, total_cost: f64) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            total_cost,
            assigned_member_ids: BTreeSet::new(),
        }
    }
}

/// Add or remove one member from a task
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct TaskMembershipRequest {
    #[validate(nested)]
    pub task: Task,
    #[validate(length(min = 1, max = 64))]
    pub member_id: String,
}

/// One member's cent-rounded part of a task total
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberShare {
    pub member_id: String,
    pub amount: f64,
}

/// Cost split of a task across its members
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskCostSummary {
    pub task: Task,
    pub member_count: usize,
    /// Unrounded `total_cost / member_count`, 0 when nobody is assigned
    pub cost_per_member: f64,
    /// Cent-rounded shares that add up to `total_cost` exactly
    pub shares: Vec<MemberShare>,
}
