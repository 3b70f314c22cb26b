//! Task cost split routes
//!
//! | Path | Method | Operation |
//! |------|--------|-----------|
//! | /api/tasks/cost-split | POST | per-member cost and settlement shares |
//! | /api/tasks/assign | POST | add a member, return the new split |
//! | /api/tasks/unassign | POST | remove a member, return the new split |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tasks", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/cost-split", post(handler::cost_split))
        .route("/assign", post(handler::assign))
        .route("/unassign", post(handler::unassign))
}
