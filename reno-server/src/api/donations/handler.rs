//! Donation API Handlers
//!
//! The calculator does not clamp, so the range rules live here: a preset
//! must be one the business offers, and a donation may not exceed the
//! earnings it comes from.

use axum::extract::State;
use shared::error::{ApiResponse, AppError, AppResult, ErrorCode};
use shared::models::{BusinessSettings, DonationQuote, DonationRequest, DonationSelection};

use crate::allocation::donation;
use crate::context::BusinessContext;
use crate::core::ServerState;
use crate::money::to_decimal;
use crate::utils::ValidatedJson;

/// POST /api/donations/quote
pub async fn quote(
    State(state): State<ServerState>,
    ctx: BusinessContext,
    ValidatedJson(req): ValidatedJson<DonationRequest>,
) -> AppResult<ApiResponse<DonationQuote>> {
    let settings = state.settings.get(&ctx.business_id);
    check_selection(&req, &settings)?;

    let bracket_rate = req.bracket_rate.unwrap_or(settings.tax_bracket_rate);
    let quote = donation::quote(req.earnings, &req.selection, bracket_rate)?;

    tracing::info!(
        business_id = %ctx.business_id,
        earnings = req.earnings,
        amount = quote.choice.amount,
        percentage = quote.choice.percentage,
        "Donation quoted"
    );
    Ok(ApiResponse::success(quote))
}

fn check_selection(req: &DonationRequest, settings: &BusinessSettings) -> AppResult<()> {
    match req.selection {
        DonationSelection::Preset { percentage } => {
            let wanted = to_decimal(percentage)?;
            let offered = settings
                .donation_presets
                .iter()
                .filter_map(|p| to_decimal(*p).ok())
                .any(|p| p == wanted);
            if !offered {
                return Err(AppError::new(ErrorCode::InvalidDonationPreset)
                    .with_detail("percentage", percentage)
                    .with_detail("presets", settings.donation_presets.clone()));
            }
        }
        DonationSelection::CustomPercentage { percentage } => {
            if !percentage.is_finite() || percentage < 0.0 {
                return Err(negative("percentage", percentage));
            }
            if percentage > 100.0 {
                return Err(exceeds_earnings(req.earnings).with_detail("percentage", percentage));
            }
        }
        DonationSelection::CustomAmount { amount } => {
            if !amount.is_finite() || amount < 0.0 {
                return Err(negative("amount", amount));
            }
            if to_decimal(amount)? > to_decimal(req.earnings)? {
                return Err(exceeds_earnings(req.earnings).with_detail("amount", amount));
            }
        }
    }
    Ok(())
}

fn negative(field: &str, value: f64) -> AppError {
    AppError::with_message(
        ErrorCode::ValueOutOfRange,
        format!("Donation {} must be a non-negative number", field),
    )
    .with_detail(field, value)
}

fn exceeds_earnings(earnings: f64) -> AppError {
    AppError::new(ErrorCode::DonationExceedsEarnings).with_detail("earnings", earnings)
}
