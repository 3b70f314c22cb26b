//! Milestone routes
//!
//! | Path | Method | Operation |
//! |------|--------|-----------|
//! | /api/milestones/transition | POST | move a milestone forward |
//! | /api/milestones/merge | POST | merge rows by name and due date |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/milestones", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/transition", post(handler::transition))
        .route("/merge", post(handler::merge))
}
