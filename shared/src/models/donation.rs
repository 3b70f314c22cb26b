//! Donation Model
//!
//! A contractor may give part of a milestone payment to the nonprofit
//! the network is affiliated with, either by picking a preset
//! percentage or by typing a custom amount or percentage.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Resolved donation for one milestone payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonationChoice {
    pub earnings_amount: f64,
    /// `amount / earnings_amount * 100`
    pub percentage: f64,
    pub amount: f64,
}

/// How the contributor expressed the donation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DonationSelection {
    Preset { percentage: f64 },
    CustomAmount { amount: f64 },
    CustomPercentage { percentage: f64 },
}

/// Donation quote request
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DonationRequest {
    #[validate(
        range(min = 0.0, max = 1_000_000_000_000.0, message = "must be between 0 and 1e12"),
        custom(function = "crate::models::validate_finite")
    )]
    pub earnings: f64,
    pub selection: DonationSelection,
    /// Marginal tax rate for the benefit estimate (defaults to the business setting)
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0, message = "must be between 0 and 1"))]
    pub bracket_rate: Option<f64>,
}

/// Donation quote shown before the contributor confirms
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonationQuote {
    pub choice: DonationChoice,
    pub net_earnings: f64,
    pub bracket_rate: f64,
    /// Display estimate only, not a financial guarantee
    pub estimated_tax_benefit: f64,
}
