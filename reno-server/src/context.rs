//! Request context extractor
//!
//! Every `/api` request names the business it acts for. Identity itself
//! is resolved upstream; this server only trusts the forwarded headers.

use axum::{extract::FromRequestParts, http::request::Parts};
use shared::error::{AppError, ErrorCode};

pub const BUSINESS_ID_HEADER: &str = "x-business-id";
pub const USER_ID_HEADER: &str = "x-user-id";

const MAX_ID_LEN: usize = 64;

/// Business (and optionally user) a request acts for
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessContext {
    pub business_id: String,
    pub user_id: Option<String>,
}

impl<S> FromRequestParts<S> for BusinessContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if let Some(ctx) = parts.extensions.get::<BusinessContext>() {
            return Ok(ctx.clone());
        }

        let business_id = header_value(parts, BUSINESS_ID_HEADER)?.ok_or_else(|| {
            tracing::warn!(uri = %parts.uri, "Request without business context");
            AppError::context_missing(BUSINESS_ID_HEADER)
        })?;
        let user_id = header_value(parts, USER_ID_HEADER)?;

        let ctx = BusinessContext {
            business_id,
            user_id,
        };
        parts.extensions.insert(ctx.clone());
        Ok(ctx)
    }
}

fn header_value(parts: &Parts, name: &'static str) -> Result<Option<String>, AppError> {
    let Some(raw) = parts.headers.get(name) else {
        return Ok(None);
    };
    let value = raw
        .to_str()
        .ok()
        .map(str::trim)
        .filter(|v| is_valid_id(v))
        .ok_or_else(|| AppError::new(ErrorCode::ContextInvalid).with_detail("header", name))?;
    Ok(Some(value.to_string()))
}

fn is_valid_id(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= MAX_ID_LEN
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
}
