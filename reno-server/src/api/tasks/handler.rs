//! Task API Handlers

use shared::error::{ApiResponse, AppResult};
use shared::models::{Task, TaskCostSummary, TaskMembershipRequest};

use crate::allocation::task_split;
use crate::context::BusinessContext;
use crate::utils::ValidatedJson;

/// POST /api/tasks/cost-split
pub async fn cost_split(
    ctx: BusinessContext,
    ValidatedJson(task): ValidatedJson<Task>,
) -> AppResult<ApiResponse<TaskCostSummary>> {
    tracing::debug!(business_id = %ctx.business_id, task_id = %task.id, "Task cost split");
    Ok(ApiResponse::success(task_split::summarize(task)?))
}

/// POST /api/tasks/assign
pub async fn assign(
    ctx: BusinessContext,
    ValidatedJson(req): ValidatedJson<TaskMembershipRequest>,
) -> AppResult<ApiResponse<TaskCostSummary>> {
    let mut task = req.task;
    task_split::assign(&mut task, &req.member_id);
    tracing::info!(
        business_id = %ctx.business_id,
        task_id = %task.id,
        member_id = %req.member_id,
        "Member assigned to task"
    );
    Ok(ApiResponse::success(task_split::summarize(task)?))
}

/// POST /api/tasks/unassign
pub async fn unassign(
    ctx: BusinessContext,
    ValidatedJson(req): ValidatedJson<TaskMembershipRequest>,
) -> AppResult<ApiResponse<TaskCostSummary>> {
    let mut task = req.task;
    task_split::unassign(&mut task, &req.member_id);
    tracing::info!(
        business_id = %ctx.business_id,
        task_id = %task.id,
        member_id = %req.member_id,
        "Member unassigned from task"
    );
    Ok(ApiResponse::success(task_split::summarize(task)?))
}
