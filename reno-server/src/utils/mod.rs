//! Utilities: logging setup and request validation

pub mod logger;
pub mod validation;

pub use validation::ValidatedJson;
