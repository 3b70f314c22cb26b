//! Data models
//!
//! Typed DTOs exchanged with the frontend and persisted verbatim by the
//! hosted backend. Request payloads derive `Validate` and are checked at
//! the HTTP boundary before they reach the calculators.

pub mod donation;
pub mod estimate;
pub mod fee;
pub mod milestone;
pub mod onboarding;
pub mod settings;
pub mod task;
pub mod team;

// Re-exports
pub use donation::*;
pub use estimate::*;
pub use fee::*;
pub use milestone::*;
pub use onboarding::*;
pub use settings::*;
pub use task::*;
pub use team::*;

use validator::ValidationError;

/// Reject NaN and infinities.
pub(crate) fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("finite").with_message("must be a finite number".into()))
    }
}
