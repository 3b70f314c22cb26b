//! Onboarding API Handlers

use axum::extract::{Path, State};
use shared::error::{ApiResponse, AppResult};
use shared::models::{OnboardingCreate, OnboardingFailure, OnboardingSnapshot};

use crate::context::BusinessContext;
use crate::core::ServerState;
use crate::onboarding::OnboardingWorkflow;
use crate::utils::ValidatedJson;

/// POST /api/onboarding
pub async fn create(
    State(state): State<ServerState>,
    ctx: BusinessContext,
    ValidatedJson(payload): ValidatedJson<OnboardingCreate>,
) -> AppResult<ApiResponse<OnboardingSnapshot>> {
    let workflow = match payload.steps {
        Some(steps) => OnboardingWorkflow::new(&ctx.business_id, &payload.member_id, steps)?,
        None => OnboardingWorkflow::with_default_steps(&ctx.business_id, &payload.member_id),
    };
    let snapshot = workflow.snapshot();
    state.onboarding.insert(workflow)?;

    tracing::info!(
        business_id = %ctx.business_id,
        workflow_id = %snapshot.id,
        member_id = %snapshot.member_id,
        steps = snapshot.steps.len(),
        "Onboarding workflow created"
    );
    Ok(ApiResponse::success_with_message("Onboarding started", snapshot))
}

/// GET /api/onboarding/{id}
pub async fn get_by_id(
    State(state): State<ServerState>,
    ctx: BusinessContext,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<OnboardingSnapshot>> {
    let workflow = state.onboarding.get(&ctx.business_id, &id)?;
    Ok(ApiResponse::success(workflow.snapshot()))
}

/// DELETE /api/onboarding/{id}
pub async fn remove(
    State(state): State<ServerState>,
    ctx: BusinessContext,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<OnboardingSnapshot>> {
    let workflow = state.onboarding.remove(&ctx.business_id, &id)?;
    tracing::info!(
        business_id = %ctx.business_id,
        workflow_id = %id,
        "Onboarding workflow removed"
    );
    Ok(ApiResponse::success_with_message(
        "Onboarding removed",
        workflow.snapshot(),
    ))
}

/// POST /api/onboarding/{id}/start
pub async fn start_next(
    State(state): State<ServerState>,
    ctx: BusinessContext,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<OnboardingSnapshot>> {
    let snapshot = state.onboarding.update(&ctx.business_id, &id, |w| {
        w.start_next()?;
        Ok(w.snapshot())
    })?;
    Ok(ApiResponse::success(snapshot))
}

/// POST /api/onboarding/{id}/complete
pub async fn complete(
    State(state): State<ServerState>,
    ctx: BusinessContext,
    Path(id): Path<String>,
) -> AppResult<ApiResponse<OnboardingSnapshot>> {
    let snapshot = state.onboarding.update(&ctx.business_id, &id, |w| {
        w.complete_current()?;
        Ok(w.snapshot())
    })?;
    Ok(ApiResponse::success(snapshot))
}

/// POST /api/onboarding/{id}/fail
pub async fn fail(
    State(state): State<ServerState>,
    ctx: BusinessContext,
    Path(id): Path<String>,
    ValidatedJson(payload): ValidatedJson<OnboardingFailure>,
) -> AppResult<ApiResponse<OnboardingSnapshot>> {
    let snapshot = state.onboarding.update(&ctx.business_id, &id, |w| {
        w.fail_current(payload.reason)?;
        Ok(w.snapshot())
    })?;
    Ok(ApiResponse::success(snapshot))
}
