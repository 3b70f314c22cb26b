//! Onboarding Model (team member onboarding stepper)

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Status of a single onboarding step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
    Failed,
}

/// Status of the whole workflow, derived from its steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkflowStatus {
    NotStarted,
    InProgress,
    Completed,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OnboardingStep {
    pub name: String,
    pub status: StepStatus,
    /// Unix millis
    pub started_at: Option<i64>,
    /// Unix millis
    pub finished_at: Option<i64>,
    pub failure_reason: Option<String>,
}

impl OnboardingStep {
    pub fn pending(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: StepStatus::Pending,
            started_at: None,
            finished_at: None,
            failure_reason: None,
        }
    }
}

/// Read model of an onboarding workflow
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnboardingSnapshot {
    pub id: String,
    pub business_id: String,
    pub member_id: String,
    pub status: WorkflowStatus,
    /// Index of the step in progress, if any
    pub current_step: Option<usize>,
    pub steps: Vec<OnboardingStep>,
    pub created_at: i64,
    pub updated_at: i64,
}

/// Start onboarding for a member. Without `steps` the default list is used.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OnboardingCreate {
    #[validate(length(min = 1, max = 64))]
    pub member_id: String,
    #[serde(default)]
    #[validate(
        length(min = 1, max = 20, message = "must list between 1 and 20 steps"),
        custom(function = "validate_step_names")
    )]
    pub steps: Option<Vec<String>>,
}

/// Longest accepted step name, in characters
pub const MAX_STEP_NAME_LEN: usize = 64;

fn validate_step_names(steps: &[String]) -> Result<(), ValidationError> {
    if steps
        .iter()
        .all(|s| !s.trim().is_empty() && s.chars().count() <= MAX_STEP_NAME_LEN)
    {
        Ok(())
    } else {
        Err(ValidationError::new("step_name")
            .with_message("step names must be 1 to 64 characters".into()))
    }
}

/// Mark the current step failed
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OnboardingFailure {
    #[validate(length(min = 1, max = 500))]
    pub reason: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create(steps: Option<Vec<String>>) -> OnboardingCreate {
        OnboardingCreate {
            member_id: "member-1".into(),
            steps,
        }
    }

    #[test]
    fn test_default_steps_need_no_list() {
        assert!(create(None).validate().is_ok());
        assert!(create(Some(vec!["Paperwork".into(), "Safety".into()])).validate().is_ok());
    }

    #[test]
    fn test_step_count_is_bounded() {
        assert!(create(Some(vec![])).validate().is_err());

        let many: Vec<String> = (0..21).map(|i| format!("step {}", i)).collect();
        let errors = create(Some(many)).validate().unwrap_err();
        assert!(errors.field_errors().contains_key("steps"));

        let twenty: Vec<String> = (0..20).map(|i| format!("step {}", i)).collect();
        assert!(create(Some(twenty)).validate().is_ok());
    }

    #[test]
    fn test_step_names_are_bounded() {
        let long = "x".repeat(MAX_STEP_NAME_LEN + 1);
        let errors = create(Some(vec!["Paperwork".into(), long])).validate().unwrap_err();
        assert_eq!(errors.field_errors()["steps"][0].code, "step_name");

        assert!(create(Some(vec!["   ".into()])).validate().is_err());
        assert!(create(Some(vec!["x".repeat(MAX_STEP_NAME_LEN)])).validate().is_ok());
    }
}
