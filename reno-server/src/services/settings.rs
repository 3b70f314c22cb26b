use dashmap::DashMap;
use shared::models::{BusinessSettings, BusinessSettingsUpdate};

use crate::core::Config;

/// Per-business settings, falling back to the configured defaults
#[derive(Debug)]
pub struct SettingsRegistry {
    defaults: BusinessSettings,
    overrides: DashMap<String, BusinessSettings>,
}

impl SettingsRegistry {
    pub fn new(defaults: BusinessSettings) -> Self {
        Self {
            defaults,
            overrides: DashMap::new(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(BusinessSettings {
            platform_fee_percentage: config.platform_fee_percentage,
            tax_bracket_rate: config.tax_bracket_rate,
            donation_presets: config.donation_presets.clone(),
        })
    }

    pub fn defaults(&self) -> &BusinessSettings {
        &self.defaults
    }

    pub fn get(&self, business_id: &str) -> BusinessSettings {
        self.overrides
            .get(business_id)
            .map(|s| s.value().clone())
            .unwrap_or_else(|| self.defaults.clone())
    }

    /// Apply a validated partial update and return the new settings
    pub fn update(&self, business_id: &str, update: BusinessSettingsUpdate) -> BusinessSettings {
        let mut entry = self
            .overrides
            .entry(business_id.to_string())
            .or_insert_with(|| self.defaults.clone());

        if let Some(pct) = update.platform_fee_percentage {
            entry.platform_fee_percentage = pct;
        }
        if let Some(rate) = update.tax_bracket_rate {
            entry.tax_bracket_rate = rate;
        }
        if let Some(presets) = update.donation_presets {
            entry.donation_presets = presets;
        }

        tracing::info!(business_id = %business_id, settings = ?*entry, "Business settings updated");
        entry.value().clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> SettingsRegistry {
        SettingsRegistry::new(BusinessSettings {
            platform_fee_percentage: 5.0,
            tax_bracket_rate: 0.24,
            donation_presets: vec![5.0, 10.0],
        })
    }

    #[test]
    fn test_unknown_business_gets_defaults() {
        let registry = registry();
        assert_eq!(registry.get("biz-1"), *registry.defaults());
    }

    #[test]
    fn test_partial_update_is_scoped_to_business() {
        let registry = registry();
        let updated = registry.update(
            "biz-1",
            BusinessSettingsUpdate {
                platform_fee_percentage: Some(3.0),
                ..Default::default()
            },
        );
        assert_eq!(updated.platform_fee_percentage, 3.0);
        assert_eq!(updated.tax_bracket_rate, 0.24);
        assert_eq!(registry.get("biz-1").platform_fee_percentage, 3.0);
        assert_eq!(registry.get("biz-2").platform_fee_percentage, 5.0);
    }
}
