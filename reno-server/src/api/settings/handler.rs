use axum::extract::State;
use shared::error::{ApiResponse, AppResult};
use shared::models::{BusinessSettings, BusinessSettingsUpdate};

use crate::context::BusinessContext;
use crate::core::ServerState;
use crate::utils::ValidatedJson;

/// GET /api/settings
pub async fn get(
    State(state): State<ServerState>,
    ctx: BusinessContext,
) -> AppResult<ApiResponse<BusinessSettings>> {
    Ok(ApiResponse::success(state.settings.get(&ctx.business_id)))
}

/// PUT /api/settings
pub async fn update(
    State(state): State<ServerState>,
    ctx: BusinessContext,
    ValidatedJson(update): ValidatedJson<BusinessSettingsUpdate>,
) -> AppResult<ApiResponse<BusinessSettings>> {
    let settings = state.settings.update(&ctx.business_id, update);
    Ok(ApiResponse::success_with_message("Settings updated", settings))
}
