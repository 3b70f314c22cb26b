//! Reno Server - cost allocation and milestone engine for renovation crews
//!
//! # Overview
//!
//! - **Allocation** (`allocation`): task cost split, estimate totals,
//!   donations, platform fee split, milestone lifecycle
//! - **Onboarding** (`onboarding`): linear team member onboarding stepper
//! - **HTTP API** (`api`): JSON routes scoped by business context
//!
//! # Layout
//!
//! ```text
//! reno-server/src/
//! ├── core/          # config, state, server, errors
//! ├── allocation/    # calculators
//! ├── onboarding/    # onboarding workflow
//! ├── services/      # in-memory registries
//! ├── api/           # routes and handlers
//! └── utils/         # logging, validated JSON
//! ```

pub mod allocation;
pub mod api;
pub mod context;
pub mod core;
pub mod money;
pub mod onboarding;
pub mod services;
pub mod utils;

pub use context::BusinessContext;
pub use crate::core::{Config, Server, ServerError, ServerState};
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};

pub use utils::logger::init_logger_with_file;

/// Load `.env`, initialize logging and record the start time
pub fn setup_environment() -> Result<Config, ServerError> {
    let _ = dotenv::dotenv();

    let config = Config::from_env();
    if let Some(dir) = &config.log_dir {
        std::fs::create_dir_all(dir)
            .map_err(|e| ServerError::Config(format!("cannot create LOG_DIR {}: {}", dir, e)))?;
    }
    init_logger_with_file(
        Some(&config.log_level),
        config.is_production(),
        config.log_dir.as_deref(),
    );
    api::health::mark_started();

    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    ____
   / __ \___  ____  ____
  / /_/ / _ \/ __ \/ __ \
 / _, _/  __/ / / / /_/ /
/_/ |_|\___/_/ /_/\____/
    "#
    );
}
