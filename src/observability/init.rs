//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber with a JSON fmt layer
//! writing to a rotating log file, keeping stdout free for the list screen.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::FileWriter;
use crate::Config;

/// Initializes the tracing subscriber with file-based JSON logging.
///
/// Sets up a tracing subscriber pipeline that:
/// 1. Filters events based on the configured log level
/// 2. Formats events and spans as JSON lines
/// 3. Writes to a rotating file with backups
///
/// stdout stays untouched; the terminal screen owns it.
///
/// # Parameters
///
/// * `config` - Application configuration containing the `log_level` option
///
/// # Log Level Resolution
///
/// Level is determined by:
/// 1. `RUST_LOG` environment variable, if set
/// 2. `config.log_level`, if set
/// 3. Default: `"info"`
///
/// # File Location
///
/// Logs are written to `shoplist.log` inside the data directory
/// (`$XDG_DATA_HOME/shoplist` or `~/.local/share/shoplist`).
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently returns if directory creation fails (logging is optional)
/// - Idempotent: safe to call multiple times (only the first call takes effect)
///
/// # Example
///
/// ```no_run
/// use shoplist::observability::init_tracing;
/// use shoplist::Config;
///
/// let config = Config {
///     log_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
///
/// tracing::debug!("logging is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = crate::infrastructure::paths::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        // Run without logging rather than refusing to start.
        return;
    }

    let log_file = data_dir.join("shoplist.log");
    let writer = FileWriter::new(log_file);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(writer);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
