//! File-based structured logging.
//!
//! This module provides the logging infrastructure for the application.
//! Events and spans emitted through `tracing` macros are serialized as JSON
//! lines and written to a rotating log file, so nothing ever reaches the
//! terminal the list screen is drawing on.
//!
//! # Architecture
//!
//! ```text
//! tracing macros → EnvFilter → JSON fmt layer → FileWriter → Log Files
//! ```
//!
//! # Features
//!
//! - **File-Based Output**: Logs written to `~/.local/share/shoplist/shoplist.log`
//! - **Automatic Rotation**: Files rotate at 10MB with 3-backup retention
//! - **JSON Lines Format**: One structured event per line for offline analysis
//!
//! # Configuration
//!
//! Log level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `log_level` option in the configuration file
//! 3. Default: `"info"`
//!
//! # Usage
//!
//! Initialize logging early in startup:
//!
//! ```no_run
//! use shoplist::observability::init_tracing;
//! use shoplist::Config;
//!
//! let config = Config::default();
//! init_tracing(&config);
//!
//! tracing::debug!("application initialized");
//! ```
//!
//! # Modules
//!
//! - `init`: Tracing initialization and subscriber setup
//! - `file_writer`: Rotating file writer with size-based rotation

mod file_writer;
mod init;

pub use init::init_tracing;
