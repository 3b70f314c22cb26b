//! Unified error codes
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Request context errors
//! - 4xxx: Task and estimate errors
//! - 5xxx: Payment and donation errors
//! - 8xxx: Team and onboarding errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so the frontend can
/// switch on them without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Invalid format
    InvalidFormat = 6,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Context ====================
    /// Request carries no business context
    ContextMissing = 1001,
    /// Business context headers are malformed
    ContextInvalid = 1002,

    // ==================== 4xxx: Task / Estimate ====================
    /// Milestone status cannot move that way
    MilestoneTransitionInvalid = 4101,

    // ==================== 5xxx: Payment / Donation ====================
    /// Donation exceeds the milestone earnings
    DonationExceedsEarnings = 5001,
    /// Earnings are zero, percentage cannot be derived
    ZeroEarnings = 5002,
    /// Preset percentage is not offered by the business
    InvalidDonationPreset = 5004,

    // ==================== 8xxx: Team / Onboarding ====================
    /// Onboarding workflow not found
    OnboardingNotFound = 8001,
    /// A step is already in progress
    OnboardingStepInProgress = 8002,
    /// No step is in progress
    OnboardingNoStepInProgress = 8003,
    /// All steps are completed
    OnboardingCompleted = 8004,
    /// Workflow halted by a failed step
    OnboardingFailed = 8005,
    /// Step list is empty or has duplicate names
    OnboardingInvalidSteps = 8006,
    /// Business already holds the maximum number of workflows
    OnboardingLimitReached = 8007,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Context
            ErrorCode::ContextMissing => "Business context is required",
            ErrorCode::ContextInvalid => "Business context is invalid",

            // Task / Estimate
            ErrorCode::MilestoneTransitionInvalid => "Milestone status transition is not allowed",

            // Payment / Donation
            ErrorCode::DonationExceedsEarnings => "Donation exceeds earnings",
            ErrorCode::ZeroEarnings => "Earnings must be greater than zero",
            ErrorCode::InvalidDonationPreset => "Donation preset is not available",

            // Team / Onboarding
            ErrorCode::OnboardingNotFound => "Onboarding workflow not found",
            ErrorCode::OnboardingStepInProgress => "An onboarding step is already in progress",
            ErrorCode::OnboardingNoStepInProgress => "No onboarding step is in progress",
            ErrorCode::OnboardingCompleted => "Onboarding is already completed",
            ErrorCode::OnboardingFailed => "Onboarding halted by a failed step",
            ErrorCode::OnboardingInvalidSteps => "Onboarding steps must be non-empty and unique",
            ErrorCode::OnboardingLimitReached => "Too many onboarding workflows for this business",

            // System
            ErrorCode::InternalError => "Internal server error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            6 => Ok(ErrorCode::InvalidFormat),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Context
            1001 => Ok(ErrorCode::ContextMissing),
            1002 => Ok(ErrorCode::ContextInvalid),

            // Task / Estimate
            4101 => Ok(ErrorCode::MilestoneTransitionInvalid),

            // Payment / Donation
            5001 => Ok(ErrorCode::DonationExceedsEarnings),
            5002 => Ok(ErrorCode::ZeroEarnings),
            5004 => Ok(ErrorCode::InvalidDonationPreset),

            // Team / Onboarding
            8001 => Ok(ErrorCode::OnboardingNotFound),
            8002 => Ok(ErrorCode::OnboardingStepInProgress),
            8003 => Ok(ErrorCode::OnboardingNoStepInProgress),
            8004 => Ok(ErrorCode::OnboardingCompleted),
            8005 => Ok(ErrorCode::OnboardingFailed),
            8006 => Ok(ErrorCode::OnboardingInvalidSteps),
            8007 => Ok(ErrorCode::OnboardingLimitReached),

            // System
            9001 => Ok(ErrorCode::InternalError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::ValidationFailed.code(), 2);
        assert_eq!(ErrorCode::ContextMissing.code(), 1001);
        assert_eq!(ErrorCode::MilestoneTransitionInvalid.code(), 4101);
        assert_eq!(ErrorCode::ZeroEarnings.code(), 5002);
        assert_eq!(ErrorCode::OnboardingNotFound.code(), 8001);
        assert_eq!(ErrorCode::InternalError.code(), 9001);
    }

    #[test]
    fn test_try_from_round_trips_every_code() {
        let all = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::InvalidFormat,
            ErrorCode::ValueOutOfRange,
            ErrorCode::ContextMissing,
            ErrorCode::ContextInvalid,
            ErrorCode::MilestoneTransitionInvalid,
            ErrorCode::DonationExceedsEarnings,
            ErrorCode::ZeroEarnings,
            ErrorCode::InvalidDonationPreset,
            ErrorCode::OnboardingNotFound,
            ErrorCode::OnboardingStepInProgress,
            ErrorCode::OnboardingNoStepInProgress,
            ErrorCode::OnboardingCompleted,
            ErrorCode::OnboardingFailed,
            ErrorCode::OnboardingInvalidSteps,
            ErrorCode::OnboardingLimitReached,
            ErrorCode::InternalError,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_invalid() {
        assert_eq!(ErrorCode::try_from(999), Err(InvalidErrorCode(999)));
        assert_eq!(ErrorCode::try_from(4999), Err(InvalidErrorCode(4999)));
        // retired codes are not decoded
        for retired in [1, 3, 4, 5, 7, 4001, 4002, 4003, 5003, 9002, 9003] {
            assert_eq!(ErrorCode::try_from(retired), Err(InvalidErrorCode(retired)));
        }
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::DonationExceedsEarnings).unwrap();
        assert_eq!(json, "5001");

        let code: ErrorCode = serde_json::from_str("8003").unwrap();
        assert_eq!(code, ErrorCode::OnboardingNoStepInProgress);

        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::ZeroEarnings.to_string(), "5002");
        assert!(ErrorCode::Success.is_success());
    }
}
