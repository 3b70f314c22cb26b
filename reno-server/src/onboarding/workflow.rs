use shared::error::{AppError, ErrorCode};
use shared::models::{OnboardingSnapshot, OnboardingStep, StepStatus, WorkflowStatus};
use shared::util::now_millis;
use std::collections::HashSet;
use thiserror::Error;

/// Steps used when the caller does not provide its own list
pub const DEFAULT_STEPS: [&str; 5] = [
    "profile",
    "workspace_account",
    "org_email",
    "permissions",
    "welcome",
];

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OnboardingError {
    #[error("invalid step list: {0}")]
    InvalidSteps(String),

    #[error("step '{0}' is already in progress")]
    StepInProgress(String),

    #[error("no step is in progress")]
    NoStepInProgress,

    #[error("all steps are completed")]
    AlreadyCompleted,

    #[error("onboarding halted: step '{0}' failed")]
    Halted(String),
}

impl From<OnboardingError> for AppError {
    fn from(err: OnboardingError) -> Self {
        let code = match &err {
            OnboardingError::InvalidSteps(_) => ErrorCode::OnboardingInvalidSteps,
            OnboardingError::StepInProgress(_) => ErrorCode::OnboardingStepInProgress,
            OnboardingError::NoStepInProgress => ErrorCode::OnboardingNoStepInProgress,
            OnboardingError::AlreadyCompleted => ErrorCode::OnboardingCompleted,
            OnboardingError::Halted(_) => ErrorCode::OnboardingFailed,
        };
        AppError::with_message(code, err.to_string())
    }
}

/// Onboarding progress of one team member
#[derive(Debug, Clone)]
pub struct OnboardingWorkflow {
    id: String,
    business_id: String,
    member_id: String,
    steps: Vec<OnboardingStep>,
    created_at: i64,
    updated_at: i64,
}

impl OnboardingWorkflow {
    /// Create a workflow with every step pending.
    ///
    /// Step names must be non-empty and unique.
    pub fn new(
        business_id: impl Into<String>,
        member_id: impl Into<String>,
        step_names: Vec<String>,
    ) -> Result<Self, OnboardingError> {
        if step_names.is_empty() {
            return Err(OnboardingError::InvalidSteps("no steps".to_string()));
        }
        let mut seen = HashSet::new();
        for name in &step_names {
            let name = name.trim();
            if name.is_empty() {
                return Err(OnboardingError::InvalidSteps("empty step name".to_string()));
            }
            if !seen.insert(name) {
                return Err(OnboardingError::InvalidSteps(format!(
                    "duplicate step '{}'",
                    name
                )));
            }
        }

        let steps = step_names
            .iter()
            .map(|n| OnboardingStep::pending(n.trim()))
            .collect();
        Ok(Self::build(business_id.into(), member_id.into(), steps))
    }

    pub fn with_default_steps(
        business_id: impl Into<String>,
        member_id: impl Into<String>,
    ) -> Self {
        let steps = DEFAULT_STEPS.iter().map(|s| OnboardingStep::pending(*s)).collect();
        Self::build(business_id.into(), member_id.into(), steps)
    }

    fn build(business_id: String, member_id: String, steps: Vec<OnboardingStep>) -> Self {
        let now = now_millis();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            business_id,
            member_id,
            steps,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn business_id(&self) -> &str {
        &self.business_id
    }

    pub fn member_id(&self) -> &str {
        &self.member_id
    }

    pub fn steps(&self) -> &[OnboardingStep] {
        &self.steps
    }

    /// Index of the step in progress
    pub fn current_step(&self) -> Option<usize> {
        self.steps
            .iter()
            .position(|s| s.status == StepStatus::InProgress)
    }

    pub fn status(&self) -> WorkflowStatus {
        if self.steps.iter().any(|s| s.status == StepStatus::Failed) {
            WorkflowStatus::Failed
        } else if self.steps.iter().all(|s| s.status == StepStatus::Completed) {
            WorkflowStatus::Completed
        } else if self.steps.iter().all(|s| s.status == StepStatus::Pending) {
            WorkflowStatus::NotStarted
        } else {
            WorkflowStatus::InProgress
        }
    }

    /// Completed or failed: nothing can change any more
    pub fn is_terminal(&self) -> bool {
        matches!(
            self.status(),
            WorkflowStatus::Completed | WorkflowStatus::Failed
        )
    }

    /// Unix millis of the last step change
    pub fn updated_at(&self) -> i64 {
        self.updated_at
    }

    fn ensure_not_halted(&self) -> Result<(), OnboardingError> {
        match self.steps.iter().find(|s| s.status == StepStatus::Failed) {
            Some(failed) => Err(OnboardingError::Halted(failed.name.clone())),
            None => Ok(()),
        }
    }

    /// Put the first pending step in progress
    pub fn start_next(&mut self) -> Result<&OnboardingStep, OnboardingError> {
        self.ensure_not_halted()?;
        if let Some(idx) = self.current_step() {
            return Err(OnboardingError::StepInProgress(self.steps[idx].name.clone()));
        }

        let idx = self
            .steps
            .iter()
            .position(|s| s.status == StepStatus::Pending)
            .ok_or(OnboardingError::AlreadyCompleted)?;

        let now = now_millis();
        let step = &mut self.steps[idx];
        step.status = StepStatus::InProgress;
        step.started_at = Some(now);
        self.updated_at = now;

        tracing::info!(
            workflow_id = %self.id,
            member_id = %self.member_id,
            step = %self.steps[idx].name,
            "Onboarding step started"
        );
        Ok(&self.steps[idx])
    }

    /// Complete the step in progress
    pub fn complete_current(&mut self) -> Result<&OnboardingStep, OnboardingError> {
        self.finish_current(StepStatus::Completed, None)
    }

    /// Fail the step in progress; the workflow halts
    pub fn fail_current(
        &mut self,
        reason: impl Into<String>,
    ) -> Result<&OnboardingStep, OnboardingError> {
        self.finish_current(StepStatus::Failed, Some(reason.into()))
    }

    fn finish_current(
        &mut self,
        outcome: StepStatus,
        reason: Option<String>,
    ) -> Result<&OnboardingStep, OnboardingError> {
        self.ensure_not_halted()?;
        let idx = match self.current_step() {
            Some(idx) => idx,
            None if self.status() == WorkflowStatus::Completed => {
                return Err(OnboardingError::AlreadyCompleted);
            }
            None => return Err(OnboardingError::NoStepInProgress),
        };

        let now = now_millis();
        let step = &mut self.steps[idx];
        step.status = outcome;
        step.finished_at = Some(now);
        step.failure_reason = reason;
        self.updated_at = now;

        match outcome {
            StepStatus::Failed => tracing::warn!(
                workflow_id = %self.id,
                step = %self.steps[idx].name,
                reason = ?self.steps[idx].failure_reason,
                "Onboarding step failed"
            ),
            _ => tracing::info!(
                workflow_id = %self.id,
                step = %self.steps[idx].name,
                "Onboarding step completed"
            ),
        }
        Ok(&self.steps[idx])
    }

    pub fn snapshot(&self) -> OnboardingSnapshot {
        OnboardingSnapshot {
            id: self.id.clone(),
            business_id: self.business_id.clone(),
            member_id: self.member_id.clone(),
            status: self.status(),
            current_step: self.current_step(),
            steps: self.steps.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}
