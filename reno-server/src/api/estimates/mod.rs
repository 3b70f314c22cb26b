//! Estimate routes
//!
//! | Path | Method | Operation |
//! |------|--------|-----------|
//! | /api/estimates/summary | POST | labor, materials, contingency and total |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/estimates/summary", post(handler::summary))
}
