//! Shared types for the renovation engine
//!
//! Typed models exchanged with the frontend, error codes and the
//! unified API response envelope.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use axum::Json;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCode};
