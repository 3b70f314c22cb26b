//! Validated JSON extractor
//!
//! Deserializes the body like `Json<T>` and runs the `validator` rules
//! before the handler sees it.

use axum::extract::{FromRequest, Json, Request};
use serde::de::DeserializeOwned;
use shared::error::{AppError, ErrorCode};
use validator::Validate;

#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| {
            tracing::debug!(error = %rejection.body_text(), "Rejected request body");
            AppError::with_message(ErrorCode::InvalidFormat, rejection.body_text())
        })?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
