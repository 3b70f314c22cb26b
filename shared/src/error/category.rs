//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// - 0xxx: General errors
/// - 1xxx: Request context errors
/// - 4xxx: Task and estimate errors
/// - 5xxx: Payment and donation errors
/// - 8xxx: Team and onboarding errors
/// - 9xxx: System errors
///
/// Unassigned ranges fall back to `General`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Request context errors (1xxx)
    Context,
    /// Task and estimate errors (4xxx)
    Estimate,
    /// Payment and donation errors (5xxx)
    Payment,
    /// Team and onboarding errors (8xxx)
    Team,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            1000..2000 => Self::Context,
            4000..5000 => Self::Estimate,
            5000..6000 => Self::Payment,
            8000..9000 => Self::Team,
            9000.. => Self::System,
            _ => Self::General,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Context => "context",
            Self::Estimate => "estimate",
            Self::Payment => "payment",
            Self::Team => "team",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Context);
        assert_eq!(ErrorCategory::from_code(2500), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(4101), ErrorCategory::Estimate);
        assert_eq!(ErrorCategory::from_code(5004), ErrorCategory::Payment);
        assert_eq!(ErrorCategory::from_code(8001), ErrorCategory::Team);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::ValueOutOfRange.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::ContextMissing.category(), ErrorCategory::Context);
        assert_eq!(
            ErrorCode::MilestoneTransitionInvalid.category(),
            ErrorCategory::Estimate
        );
        assert_eq!(ErrorCode::ZeroEarnings.category(), ErrorCategory::Payment);
        assert_eq!(
            ErrorCode::OnboardingFailed.category(),
            ErrorCategory::Team
        );
        assert_eq!(ErrorCode::InternalError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Payment).unwrap();
        assert_eq!(json, "\"payment\"");
        assert_eq!(ErrorCategory::Team.name(), "team");
    }
}
