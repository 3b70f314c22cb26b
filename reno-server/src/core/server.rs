//! Server Implementation
//!
//! HTTP server startup and shutdown

use std::time::Duration;

use axum::{Router, middleware};
use http::StatusCode;
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::api::build_app;
use crate::core::{Config, Result, ServerError, ServerState};

/// How often finished onboarding workflows are swept
const ONBOARDING_SWEEP_INTERVAL_SECS: u64 = 300;

/// Access log middleware
async fn log_request(
    request: http::Request<axum::body::Body>,
    next: middleware::Next,
) -> http::Response<axum::body::Body> {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    tracing::info!(target: "http_access", "{} {} {}", method, uri, response.status());
    response
}

/// HTTP Server
pub struct Server {
    config: Config,
    state: ServerState,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let state = ServerState::new(config.clone());
        Self { config, state }
    }

    /// Create server with existing state (for sharing with oneshot)
    pub fn with_state(config: Config, state: ServerState) -> Self {
        Self { config, state }
    }

    pub fn state(&self) -> &ServerState {
        &self.state
    }

    /// Fully layered router bound to this server's state
    pub fn router(&self) -> Router {
        build_app()
            .with_state(self.state.clone())
            .layer(TimeoutLayer::with_status_code(
                StatusCode::SERVICE_UNAVAILABLE,
                Duration::from_millis(self.config.request_timeout_ms),
            ))
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive())
            .layer(middleware::from_fn(log_request))
    }

    /// Periodically drop finished onboarding workflows past retention
    fn spawn_onboarding_sweep(&self) {
        let store = self.state.onboarding.clone();
        let retention_ms = i64::try_from(self.config.onboarding_retention_secs)
            .unwrap_or(i64::MAX / 1000)
            .saturating_mul(1000);
        tokio::spawn(async move {
            let mut interval =
                tokio::time::interval(Duration::from_secs(ONBOARDING_SWEEP_INTERVAL_SECS));
            loop {
                interval.tick().await;
                let removed = store.prune_finished(shared::util::now_millis(), retention_ms);
                if removed > 0 {
                    tracing::info!(removed, remaining = store.len(), "Onboarding workflows pruned");
                }
            }
        });
    }

    pub async fn run(&self) -> Result<()> {
        let addr = std::net::SocketAddr::from(([0, 0, 0, 0], self.config.http_port));
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|source| ServerError::Bind { addr, source })?;

        tracing::info!("Reno server listening on {}", addr);

        self.spawn_onboarding_sweep();

        let shutdown = async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("Shutting down...");
        };

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| ServerError::Internal(e.into()))?;

        Ok(())
    }
}
