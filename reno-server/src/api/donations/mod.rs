//! Donation routes
//!
//! | Path | Method | Operation |
//! |------|--------|-----------|
//! | /api/donations/quote | POST | donation, net earnings and tax benefit |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/donations/quote", post(handler::quote))
}
