//! Invoice routes
//!
//! | Path | Method | Operation |
//! |------|--------|-----------|
//! | /api/invoices/fee-split | POST | platform fee and business payout |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/api/invoices/fee-split", post(handler::fee_split))
}
