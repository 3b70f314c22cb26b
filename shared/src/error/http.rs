//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // Success
            Self::Success => StatusCode::OK,

            // 404 Not Found
            Self::OnboardingNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::MilestoneTransitionInvalid
            | Self::OnboardingStepInProgress
            | Self::OnboardingNoStepInProgress
            | Self::OnboardingCompleted
            | Self::OnboardingFailed => StatusCode::CONFLICT,

            // 401 Unauthorized
            Self::ContextMissing | Self::ContextInvalid => StatusCode::UNAUTHORIZED,

            // 422 Unprocessable Entity (well-formed but degenerate arithmetic)
            Self::ZeroEarnings => StatusCode::UNPROCESSABLE_ENTITY,

            // 429 Too Many Requests
            Self::OnboardingLimitReached => StatusCode::TOO_MANY_REQUESTS,

            // 500 Internal Server Error
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
