//! Business Settings Model

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Per-business calculation settings, owned by the backend and cached here
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessSettings {
    /// Share of each invoice kept by the platform (5 = 5%)
    pub platform_fee_percentage: f64,
    /// Marginal tax rate used for the donation benefit estimate
    pub tax_bracket_rate: f64,
    /// Donation percentages offered as one-click presets
    pub donation_presets: Vec<f64>,
}

/// Partial update of the business settings
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[validate(schema(function = "validate_presets"))]
pub struct BusinessSettingsUpdate {
    #[serde(default)]
    #[validate(range(min = 0.0, max = 100.0, message = "must be between 0 and 100"))]
    pub platform_fee_percentage: Option<f64>,
    #[serde(default)]
    #[validate(range(min = 0.0, max = 1.0, message = "must be between 0 and 1"))]
    pub tax_bracket_rate: Option<f64>,
    #[serde(default)]
    pub donation_presets: Option<Vec<f64>>,
}

fn validate_presets(update: &BusinessSettingsUpdate) -> Result<(), ValidationError> {
    let Some(presets) = &update.donation_presets else {
        return Ok(());
    };
    if presets.is_empty() {
        return Err(ValidationError::new("donation_presets")
            .with_message("at least one preset is required".into()));
    }
    if presets.iter().any(|p| !p.is_finite() || !(0.0..=100.0).contains(p)) {
        return Err(ValidationError::new("donation_presets")
            .with_message("presets must be between 0 and 100".into()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update_is_valid() {
        assert!(BusinessSettingsUpdate::default().validate().is_ok());
    }

    #[test]
    fn test_presets_out_of_range() {
        let update = BusinessSettingsUpdate {
            donation_presets: Some(vec![5.0, 150.0]),
            ..Default::default()
        };
        assert!(update.validate().is_err());

        let update = BusinessSettingsUpdate {
            donation_presets: Some(vec![]),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }

    #[test]
    fn test_fee_percentage_out_of_range() {
        let update = BusinessSettingsUpdate {
            platform_fee_percentage: Some(101.0),
            ..Default::default()
        };
        assert!(update.validate().is_err());
    }
}
