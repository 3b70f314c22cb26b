//! Business settings routes
//!
//! | Path | Method | Operation |
//! |------|--------|-----------|
//! | /api/settings | GET | settings of the calling business |
//! | /api/settings | PUT | partial update |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/settings", get(handler::get).put(handler::update))
}
