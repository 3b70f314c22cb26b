//! HTTP API
//!
//! Every area exposes `router()`; [`build_app`] merges them. Routes under
//! `/api` need a [`BusinessContext`](crate::context::BusinessContext).

pub mod donations;
pub mod estimates;
pub mod health;
pub mod invoices;
pub mod milestones;
pub mod onboarding;
pub mod settings;
pub mod tasks;

use axum::Router;

use crate::core::ServerState;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(health::router())
        .merge(tasks::router())
        .merge(estimates::router())
        .merge(milestones::router())
        .merge(donations::router())
        .merge(invoices::router())
        .merge(settings::router())
        .merge(onboarding::router())
}
