//! Milestone API Handlers

use shared::error::{ApiResponse, AppResult};
use shared::models::{Milestone, MilestoneMergeRequest, MilestoneSchedule, MilestoneTransitionRequest};

use crate::allocation::milestones;
use crate::context::BusinessContext;
use crate::utils::ValidatedJson;

/// POST /api/milestones/transition
pub async fn transition(
    ctx: BusinessContext,
    ValidatedJson(req): ValidatedJson<MilestoneTransitionRequest>,
) -> AppResult<ApiResponse<Milestone>> {
    let mut milestone = req.milestone;
    let from = milestone.status;
    milestones::transition(&mut milestone, req.status)?;
    tracing::info!(
        business_id = %ctx.business_id,
        milestone = %milestone.name,
        from = ?from,
        to = ?milestone.status,
        "Milestone status changed"
    );
    Ok(ApiResponse::success(milestone))
}

/// POST /api/milestones/merge
pub async fn merge(
    _ctx: BusinessContext,
    ValidatedJson(req): ValidatedJson<MilestoneMergeRequest>,
) -> AppResult<ApiResponse<MilestoneSchedule>> {
    let merged = milestones::merge(req.current, req.incoming);
    let total = milestones::milestones_total(&merged)?;
    Ok(ApiResponse::success(MilestoneSchedule {
        milestones: merged,
        total,
    }))
}
