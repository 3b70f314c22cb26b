use axum::extract::State;
use shared::error::{ApiResponse, AppResult};
use shared::models::{FeeSplit, FeeSplitRequest};

use crate::allocation::fee_split;
use crate::context::BusinessContext;
use crate::core::ServerState;
use crate::utils::ValidatedJson;

/// POST /api/invoices/fee-split
///
/// Without an explicit percentage the business setting applies.
pub async fn fee_split(
    State(state): State<ServerState>,
    ctx: BusinessContext,
    ValidatedJson(req): ValidatedJson<FeeSplitRequest>,
) -> AppResult<ApiResponse<FeeSplit>> {
    let percentage = req
        .platform_fee_percentage
        .unwrap_or_else(|| state.settings.get(&ctx.business_id).platform_fee_percentage);
    let split = fee_split::split(req.invoice_total, percentage)?;

    tracing::info!(
        business_id = %ctx.business_id,
        invoice_total = split.invoice_total,
        platform_fee = split.platform_fee,
        "Invoice fee split"
    );
    Ok(ApiResponse::success(split))
}
