use dashmap::DashMap;
use shared::error::{AppError, AppResult, ErrorCode};

use crate::onboarding::OnboardingWorkflow;

/// Workflows a single business may hold at once when none is configured
pub const DEFAULT_MAX_WORKFLOWS_PER_BUSINESS: usize = 500;

/// Onboarding workflows keyed by id
///
/// Lookups are scoped by business: a workflow owned by another business
/// is reported as not found. Each business holds at most
/// `max_per_business` workflows; finished ones are dropped by
/// [`prune_finished`](Self::prune_finished) once they have been idle for
/// the retention period.
#[derive(Debug)]
pub struct OnboardingStore {
    workflows: DashMap<String, OnboardingWorkflow>,
    max_per_business: usize,
}

impl Default for OnboardingStore {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MAX_WORKFLOWS_PER_BUSINESS)
    }
}

impl OnboardingStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(max_per_business: usize) -> Self {
        Self {
            workflows: DashMap::new(),
            max_per_business,
        }
    }

    /// Store a new workflow, refusing it once its business is at the limit
    pub fn insert(&self, workflow: OnboardingWorkflow) -> AppResult<()> {
        let held = self.count_for(workflow.business_id());
        if held >= self.max_per_business {
            return Err(AppError::new(ErrorCode::OnboardingLimitReached)
                .with_detail("limit", self.max_per_business));
        }
        self.workflows.insert(workflow.id().to_string(), workflow);
        Ok(())
    }

    pub fn get(&self, business_id: &str, id: &str) -> AppResult<OnboardingWorkflow> {
        self.workflows
            .get(id)
            .filter(|w| w.business_id() == business_id)
            .map(|w| w.value().clone())
            .ok_or_else(|| not_found(id))
    }

    /// Run `f` against the workflow while holding its entry lock
    pub fn update<T>(
        &self,
        business_id: &str,
        id: &str,
        f: impl FnOnce(&mut OnboardingWorkflow) -> AppResult<T>,
    ) -> AppResult<T> {
        let mut entry = self
            .workflows
            .get_mut(id)
            .filter(|w| w.business_id() == business_id)
            .ok_or_else(|| not_found(id))?;
        f(entry.value_mut())
    }

    pub fn remove(&self, business_id: &str, id: &str) -> AppResult<OnboardingWorkflow> {
        self.workflows
            .remove_if(id, |_, w| w.business_id() == business_id)
            .map(|(_, w)| w)
            .ok_or_else(|| not_found(id))
    }

    /// Drop completed and failed workflows untouched for `retention_ms`.
    ///
    /// Returns how many were dropped.
    pub fn prune_finished(&self, now: i64, retention_ms: i64) -> usize {
        let mut removed = 0;
        self.workflows.retain(|_, w| {
            let expired = w.is_terminal() && now - w.updated_at() >= retention_ms;
            if expired {
                removed += 1;
            }
            !expired
        });
        removed
    }

    pub fn count_for(&self, business_id: &str) -> usize {
        self.workflows
            .iter()
            .filter(|w| w.business_id() == business_id)
            .count()
    }

    pub fn len(&self) -> usize {
        self.workflows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.workflows.is_empty()
    }
}

fn not_found(id: &str) -> AppError {
    AppError::new(ErrorCode::OnboardingNotFound).with_detail("id", id)
}
