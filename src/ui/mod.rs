//! Terminal user interface layer with component-based architecture.
//!
//! This module orchestrates the terminal screen, transforming painted list
//! rows into ANSI-styled output through composable rendering components. It
//! provides theme support, responsive layout, and search match highlighting.
//!
//! # Architecture
//!
//! The UI layer follows a declarative rendering model:
//!
//! ```text
//! Painted Rows + Chrome State → compose_model → ScreenModel → components → ANSI Output
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable screen state
//! - [`screen`]: The crossterm-backed surface, input modes, and windowing
//! - [`components`]: Composable UI component renderers
//! - [`helpers`]: Shared rendering utilities (highlighting, positioning)
//! - [`theme`]: Color scheme definitions and ANSI escape sequence generation
//!
//! # Example
//!
//! ```
//! use shoplist::ui::{Screen, Theme};
//!
//! let screen = Screen::new(Theme::default(), 24, 80);
//! drop(screen); // Wired to the event loop in real use
//! ```

pub mod components;
pub mod helpers;
pub mod screen;
pub mod theme;
pub mod viewmodel;

pub use screen::{EntryField, KeyOutcome, Screen, ScreenMode};
pub use theme::Theme;
pub use viewmodel::{EmptyState, EntryInfo, FooterInfo, HeaderInfo, RowView, ScreenModel};
