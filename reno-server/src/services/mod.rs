//! In-memory registries shared by the handlers

pub mod onboarding_store;
pub mod settings;

pub use onboarding_store::{DEFAULT_MAX_WORKFLOWS_PER_BUSINESS, OnboardingStore};
pub use settings::SettingsRegistry;
