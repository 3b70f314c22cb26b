//! Cost Allocation & Milestone Engine
//!
//! Pure calculation functions over in-memory form state:
//!
//! - [`task_split`] - even split of a task cost across assigned members
//! - [`estimate`] - labor + materials + equipment + permits + contingency
//! - [`donation`] - preset or custom donation of a milestone payment
//! - [`fee_split`] - platform fee / business payout split of an invoice
//! - [`milestones`] - milestone status transitions and row merging
//!
//! Nothing here clamps its inputs. Range checks (contingency in [0, 20],
//! donation not above earnings) belong to the caller; the HTTP layer
//! enforces them before calling in. The calculators only fail on a
//! degenerate division or on amounts outside the `Decimal` range.

pub mod donation;
pub mod estimate;
pub mod fee_split;
pub mod milestones;
pub mod task_split;

#[cfg(test)]
mod tests;

use shared::error::{AppError, ErrorCode};
use shared::models::MilestoneStatus;
use thiserror::Error;

use crate::money::MoneyError;

/// Inputs the calculators refuse to compute with
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AllocationError {
    #[error("earnings are zero, donation percentage is undefined")]
    ZeroEarnings,

    #[error(transparent)]
    Money(#[from] MoneyError),

    #[error("milestone cannot move from {from:?} to {to:?}")]
    MilestoneTransition {
        from: MilestoneStatus,
        to: MilestoneStatus,
    },
}

impl From<AllocationError> for AppError {
    fn from(err: AllocationError) -> Self {
        match &err {
            AllocationError::ZeroEarnings => {
                AppError::with_message(ErrorCode::ZeroEarnings, err.to_string())
            }
            AllocationError::MilestoneTransition { from, to } => AppError::with_message(
                ErrorCode::MilestoneTransitionInvalid,
                err.to_string(),
            )
            .with_detail("from", format!("{:?}", from).to_lowercase())
            .with_detail("to", format!("{:?}", to).to_lowercase()),
            AllocationError::Money(MoneyError::OutOfRange(value)) => {
                AppError::with_message(ErrorCode::ValueOutOfRange, err.to_string())
                    .with_detail("value", value.to_string())
            }
            AllocationError::Money(MoneyError::Overflow) => {
                AppError::with_message(ErrorCode::ValueOutOfRange, err.to_string())
            }
        }
    }
}

impl From<MoneyError> for AppError {
    fn from(err: MoneyError) -> Self {
        AllocationError::Money(err).into()
    }
}
