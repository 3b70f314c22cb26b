//! Logging Infrastructure
//!
//! `RUST_LOG` wins when set; otherwise the configured level applies to
//! this crate, the access log and `tower_http`. Production logs are JSON.

use std::path::Path;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Initialize the logger with optional daily rolling file output
pub fn init_logger_with_file(log_level: Option<&str>, json: bool, log_dir: Option<&str>) {
    let level = log_level.unwrap_or("info");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "reno_server={level},shared={level},http_access={level},tower_http={level}"
        ))
    });

    let file_dir = log_dir
        .map(Path::new)
        .filter(|p| p.exists())
        .and_then(|p| p.to_str());
    let (writer, ansi) = match file_dir {
        Some(dir) => (
            BoxMakeWriter::new(tracing_appender::rolling::daily(dir, "reno-server")),
            false,
        ),
        None => (BoxMakeWriter::new(std::io::stdout), true),
    };

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_target(false)
        .with_ansi(ansi && !json)
        .with_writer(writer);

    if json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}
