//! Tracing initialization and subscriber setup.

use super::file_writer::FileWriter;
use crate::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the state directory.
pub const LOG_FILE_NAME: &str = "roster.log";

/// Builds the level filter: `RUST_LOG` wins, then `config.log_level`.
///
/// An unparsable directive string falls back to `info`.
#[must_use]
pub fn env_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Initializes the tracing subscriber with a rotating log file.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events by `RUST_LOG` or the configured `log_level`
/// 2. Formats them as plain text lines with timestamps and span context
/// 3. Writes to `roster.log` in the state directory, rotating at 10 MB
///
/// # Initialization Behavior
///
/// - Creates the state directory if it doesn't exist
/// - Silently skips logging if there is no home directory or the directory
///   cannot be created
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```no_run
/// use roster::observability::init_tracing;
/// use roster::Config;
///
/// init_tracing(&Config::default());
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let Some(state_dir) = crate::infrastructure::state_dir() else {
        return;
    };
    if std::fs::create_dir_all(&state_dir).is_err() {
        return;
    }

    let writer = FileWriter::new(state_dir.join(LOG_FILE_NAME));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_thread_names(true);

    let _ = tracing_subscriber::registry()
        .with(env_filter(config))
        .with(fmt_layer)
        .try_init();
}
