use shared::error::{ApiResponse, AppResult};
use shared::models::{EstimateBreakdown, EstimateRequest};

use crate::allocation::estimate;
use crate::context::BusinessContext;
use crate::utils::ValidatedJson;

/// POST /api/estimates/summary
///
/// The contingency percentage is range checked by the request validator
/// (0 to 20); the aggregator itself does not clamp.
pub async fn summary(
    ctx: BusinessContext,
    ValidatedJson(req): ValidatedJson<EstimateRequest>,
) -> AppResult<ApiResponse<EstimateBreakdown>> {
    let breakdown = estimate::breakdown(&req)?;
    tracing::debug!(
        business_id = %ctx.business_id,
        assignments = req.assignments.len(),
        total = breakdown.total,
        "Estimate summarized"
    );
    Ok(ApiResponse::success(breakdown))
}
