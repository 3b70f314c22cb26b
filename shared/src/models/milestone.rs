//! Milestone Model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Milestone lifecycle
///
/// Created in the builder as `Pending`, later marked complete and paid
/// by the payment workflow. Status only moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneStatus {
    #[default]
    Pending,
    Completed,
    Paid,
}

impl MilestoneStatus {
    /// Whether `next` is strictly later in the lifecycle
    pub fn can_transition_to(&self, next: MilestoneStatus) -> bool {
        next > *self
    }
}

/// A named, dollar-amount-bearing checkpoint of a project or assignment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Milestone {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[validate(
        range(min = 0.0, max = 1_000_000_000_000.0, message = "must be between 0 and 1e12"),
        custom(function = "crate::models::validate_finite")
    )]
    pub amount: f64,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: MilestoneStatus,
}

impl Milestone {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            description: None,
            amount,
            due_date: None,
            status: MilestoneStatus::Pending,
        }
    }
}

/// Move a milestone to a later status
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MilestoneTransitionRequest {
    #[validate(nested)]
    pub milestone: Milestone,
    pub status: MilestoneStatus,
}

/// Merge freshly received milestone rows into the list held by a form
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct MilestoneMergeRequest {
    #[serde(default)]
    #[validate(nested)]
    pub current: Vec<Milestone>,
    #[serde(default)]
    #[validate(nested)]
    pub incoming: Vec<Milestone>,
}

/// Merged milestone rows with their total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MilestoneSchedule {
    pub milestones: Vec<Milestone>,
    pub total: f64,
}
