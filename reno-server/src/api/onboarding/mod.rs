//! Onboarding routes
//!
//! | Path | Method | Operation |
//! |------|--------|-----------|
//! | /api/onboarding | POST | start a workflow for a member |
//! | /api/onboarding/{id} | GET | workflow snapshot |
//! | /api/onboarding/{id} | DELETE | drop a workflow |
//! | /api/onboarding/{id}/start | POST | begin the next pending step |
//! | /api/onboarding/{id}/complete | POST | complete the step in progress |
//! | /api/onboarding/{id}/fail | POST | fail the step in progress |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/api/onboarding", post(handler::create))
        .route(
            "/api/onboarding/{id}",
            get(handler::get_by_id).delete(handler::remove),
        )
        .route("/api/onboarding/{id}/start", post(handler::start_next))
        .route("/api/onboarding/{id}/complete", post(handler::complete))
        .route("/api/onboarding/{id}/fail", post(handler::fail))
}
