//! Shoplist: an interactive shopping list for the terminal.
//!
//! Shoplist is a single-screen terminal application that provides:
//! - A checklist of shopping items with add, toggle, rename, and delete
//! - Case-insensitive substring search over item names
//! - A hide-completed filter that composes with search
//! - Theme support with built-in Catppuccin palettes and custom TOML themes
//! - Structured JSON logging to a rotating file, away from the screen
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Terminal Shim (main.rs)                            │  ← Entry point, event loop
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │
//! │  - ListStore: items and view filters                │
//! │  - ViewRenderer: event → mutation → repaint         │
//! │  - Surface: rendering seam (trait)                  │
//! └─────────────────────────────────────────────────────┘
//!          │                              │
//! ┌───────────────────────┐   ┌───────────────────────┐
//! │ UI Layer (ui/)        │   │ Domain Layer (domain/)│
//! │ - Screen, key modes   │   │ - Item, ItemId        │
//! │ - Theming             │   │ - IdMinter            │
//! │ - Components          │   │ - Error types         │
//! └───────────────────────┘   └───────────────────────┘
//!          │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Observability                     │
//! │  - XDG paths (infrastructure/)                      │
//! │  - Rotating JSON log files (observability/)         │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: List store, events, and the render-trigger policy
//! - [`domain`]: Core domain types (items, ids, errors)
//! - [`infrastructure`]: Platform utilities (XDG paths)
//! - [`ui`]: Terminal rendering with theme support
//! - [`observability`]: File-based structured logging
//!
//! # Configuration
//!
//! The application is configured via a TOML file at
//! `~/.config/shoplist/config.toml` (or `$XDG_CONFIG_HOME/shoplist/config.toml`):
//!
//! ```toml
//! theme = "catppuccin-mocha"
//! log_level = "debug"
//!
//! [[seed_items]]
//! name = "apples"
//!
//! [[seed_items]]
//! name = "milk"
//! checked = true
//! ```
//!
//! Environment variables `SHOPLIST_THEME`, `SHOPLIST_THEME_FILE`, and
//! `SHOPLIST_LOG` override the corresponding file options.
//!
//! # Initialization Flow
//!
//! 1. **Startup** (`main.rs`):
//!    - Load configuration from disk with defaults
//!    - Initialize file-based logging (optional)
//!    - Resolve the theme (file, name, or default)
//!    - Seed the list store and paint the first frame
//!
//! 2. **Event Loop**:
//!    - Read key presses from the terminal
//!    - Translate them into interaction events
//!    - Apply each event as one store mutation plus one repaint
//!
//! 3. **Edit Prompt**:
//!    - A modal read loop collects the new name
//!    - Cancelling leaves both the list and the screen untouched
//!
//! # Examples
//!
//! ## Basic Usage (Library)
//!
//! ```
//! use shoplist::{initialize, Config, Event, Surface, ViewItem, ViewRenderer};
//!
//! struct NullSurface;
//! impl Surface for NullSurface {
//!     fn paint_list(&mut self, _items: &[ViewItem]) {}
//!     fn prompt_for_text(&mut self, _message: &str) -> Option<String> {
//!         None
//!     }
//! }
//!
//! let mut renderer = ViewRenderer::new(initialize(&Config::default()));
//! let mut surface = NullSurface;
//!
//! renderer.handle(&Event::SubmitNewItem("bananas".to_string()), &mut surface)?;
//! assert!(renderer.store().items().iter().any(|item| item.name == "bananas"));
//! # Ok::<(), shoplist::ShoplistError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Sequential Filters
//!
//! The visible list is computed fresh on every render by running the
//! hide-completed filter and then the search filter over the full item list.
//! No filtered copies are cached, so filters can never drift out of sync
//! with the items.
//!
//! ## Surface Seam
//!
//! The renderer talks to the terminal through the [`Surface`] trait. Tests
//! substitute a recording fake; the binary plugs in the crossterm-backed
//! [`ui::Screen`].
//!
//! ## Chrome Stays in the Adapter
//!
//! Selection, entry buffers, and scroll position live in the screen, not in
//! the list store. The store models the list itself and nothing about how a
//! particular terminal displays it.
//!
//! # Platform Support
//!
//! - **Terminal**: Any ANSI-capable terminal emulator
//! - **OS Support**: Linux, macOS, Windows (via crossterm)

#![allow(clippy::multiple_crate_versions)]

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod ui;

pub use app::{Event, ListStore, Surface, ViewItem, ViewRenderer};
pub use domain::{IdMinter, Item, ItemId, Result, ShoplistError, UuidMinter};
pub use ui::Theme;

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// One item to pre-populate the list with on startup.
///
/// Seed items come from the configuration file and exist so a fresh start
/// shows something to interact with. Blank names are skipped during
/// seeding.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SeedItem {
    /// Item name.
    pub name: String,

    /// Whether the item starts checked off.
    #[serde(default)]
    pub checked: bool,
}

/// Application configuration loaded from the TOML config file.
///
/// Every field has a default, so an absent or partial file still yields a
/// working configuration.
///
/// # Example
///
/// ```toml
/// # ~/.config/shoplist/config.toml
/// theme = "catppuccin-latte"
/// theme_file = "~/themes/custom.toml"
/// log_level = "debug"
///
/// [[seed_items]]
/// name = "apples"
/// ```
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Items the list starts with.
    ///
    /// Defaults to a small starter list. An explicit empty array in the
    /// config file starts the list empty.
    #[serde(default = "default_seed_items")]
    pub seed_items: Vec<SeedItem>,

    /// Built-in theme name to use.
    ///
    /// Options: `catppuccin-mocha`, `catppuccin-latte`. Ignored if
    /// `theme_file` is set and loadable.
    pub theme: Option<String>,

    /// Path to a custom TOML theme file.
    ///
    /// Takes precedence over `theme`. Supports `~` expansion. See
    /// [`ui::theme`] for the format.
    pub theme_file: Option<String>,

    /// Log level for the file-based logger.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default:
    /// `"info"`. The `RUST_LOG` environment variable takes precedence.
    pub log_level: Option<String>,
}

/// The starter list used when the config file provides no seed items.
fn default_seed_items() -> Vec<SeedItem> {
    [("apples", false), ("oranges", false), ("milk", true), ("bread", false)]
        .into_iter()
        .map(|(name, checked)| SeedItem {
            name: name.to_string(),
            checked,
        })
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed_items: default_seed_items(),
            theme: None,
            theme_file: None,
            log_level: None,
        }
    }
}

impl Config {
    /// Loads configuration from the default location with environment
    /// overrides applied.
    ///
    /// Reads `~/.config/shoplist/config.toml` (or the XDG equivalent). A
    /// missing or unparsable file falls back to defaults; startup never
    /// fails on configuration problems.
    #[must_use]
    pub fn load() -> Self {
        let mut config = Self::load_from(&infrastructure::config_file());
        config.apply_env_overrides();
        config
    }

    /// Loads configuration from a specific file.
    ///
    /// # Fallback Rules
    ///
    /// - Missing file: defaults, logged at debug level
    /// - Unparsable file: defaults, logged at warn level
    ///
    /// # Example
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use shoplist::Config;
    ///
    /// let config = Config::load_from(Path::new("/etc/shoplist/config.toml"));
    /// println!("{} seed items", config.seed_items.len());
    /// ```
    #[must_use]
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(_) => {
                tracing::debug!(path = %path.display(), "no config file, using defaults");
                return Self::default();
            }
        };

        match toml::from_str(&contents) {
            Ok(config) => config,
            Err(error) => {
                tracing::warn!(
                    path = %path.display(),
                    error = %error,
                    "config file unparsable, using defaults"
                );
                Self::default()
            }
        }
    }

    /// Applies `SHOPLIST_*` environment variable overrides.
    ///
    /// Recognized variables: `SHOPLIST_THEME`, `SHOPLIST_THEME_FILE`,
    /// `SHOPLIST_LOG`. Empty values are ignored.
    fn apply_env_overrides(&mut self) {
        for (var, field) in [
            ("SHOPLIST_THEME", &mut self.theme),
            ("SHOPLIST_THEME_FILE", &mut self.theme_file),
            ("SHOPLIST_LOG", &mut self.log_level),
        ] {
            if let Ok(value) = std::env::var(var) {
                if !value.trim().is_empty() {
                    *field = Some(value);
                }
            }
        }
    }
}

/// Builds the seeded list store from configuration.
///
/// Creates a [`ListStore`] with UUID-minted ids containing the configured
/// seed items. Blank seed names are skipped; checked flags are preserved.
///
/// # Example
///
/// ```
/// use shoplist::{initialize, Config};
///
/// let store = initialize(&Config::default());
/// assert_eq!(store.len(), 4);
/// ```
#[must_use]
pub fn initialize(config: &Config) -> ListStore {
    tracing::debug!(seed_count = config.seed_items.len(), "initializing shopping list");

    ListStore::seeded(Box::new(UuidMinter), &config.seed_items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seed_names(config: &Config) -> Vec<&str> {
        config
            .seed_items
            .iter()
            .map(|seed| seed.name.as_str())
            .collect()
    }

    #[test]
    fn default_config_carries_the_starter_list() {
        let config = Config::default();

        assert_eq!(seed_names(&config), vec!["apples", "oranges", "milk", "bread"]);
        assert!(config.seed_items[2].checked);
        assert!(!config.seed_items[0].checked);
        assert!(config.theme.is_none());
    }

    #[test]
    fn load_from_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let config = Config::load_from(&dir.path().join("absent.toml"));

        assert_eq!(seed_names(&config), vec!["apples", "oranges", "milk", "bread"]);
    }

    #[test]
    fn load_from_unparsable_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "theme = [not toml").unwrap();

        let config = Config::load_from(&path);

        assert_eq!(config.seed_items.len(), 4);
        assert!(config.theme.is_none());
    }

    #[test]
    fn load_from_reads_options_and_seed_items() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            r#"theme = "catppuccin-latte"
log_level = "debug"

[[seed_items]]
name = "coffee"

[[seed_items]]
name = "filters"
checked = true
"#,
        )
        .unwrap();

        let config = Config::load_from(&path);

        assert_eq!(config.theme.as_deref(), Some("catppuccin-latte"));
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(seed_names(&config), vec!["coffee", "filters"]);
        assert!(config.seed_items[1].checked);
    }

    #[test]
    fn explicit_empty_seed_list_stays_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "seed_items = []\n").unwrap();

        let config = Config::load_from(&path);

        assert!(config.seed_items.is_empty());
    }

    #[test]
    fn env_overrides_replace_file_options() {
        std::env::set_var("SHOPLIST_THEME", "catppuccin-latte");

        let mut config = Config {
            theme: Some("catppuccin-mocha".to_string()),
            ..Config::default()
        };
        config.apply_env_overrides();

        assert_eq!(config.theme.as_deref(), Some("catppuccin-latte"));
        std::env::remove_var("SHOPLIST_THEME");
    }

    #[test]
    fn initialize_seeds_the_store_from_config() {
        let config = Config {
            seed_items: vec![
                SeedItem {
                    name: "tea".to_string(),
                    checked: false,
                },
                SeedItem {
                    name: "honey".to_string(),
                    checked: true,
                },
            ],
            ..Config::default()
        };

        let store = initialize(&config);

        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[0].name, "tea");
        assert!(store.items()[1].checked);
        assert!(!store.hide_completed());
    }
}
