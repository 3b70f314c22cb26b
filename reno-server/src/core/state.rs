use std::sync::Arc;

use crate::core::Config;
use crate::services::{OnboardingStore, SettingsRegistry};

/// Shared server state
///
/// Cheap to clone; every handler receives a copy through `State`.
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub settings: Arc<SettingsRegistry>,
    pub onboarding: Arc<OnboardingStore>,
}

impl ServerState {
    pub fn new(config: Config) -> Self {
        let settings = Arc::new(SettingsRegistry::from_config(&config));
        let onboarding = Arc::new(OnboardingStore::with_limit(
            config.onboarding_max_per_business,
        ));
        Self {
            config,
            settings,
            onboarding,
        }
    }
}
