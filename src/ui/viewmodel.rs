//! View model types representing renderable screen state.
//!
//! This module defines immutable view models computed from the painted list
//! and adapter-local chrome state (selection, entry buffers). View models are
//! optimized for rendering and contain pre-computed display information like
//! highlight ranges and selection state.
//!
//! # Architecture
//!
//! View models are created via `Screen::compose_model()` and consumed by the
//! component renderers. They contain no list logic, only display-ready data.
//!
//! # Example
//!
//! ```
//! use shoplist::ui::viewmodel::{FooterInfo, HeaderInfo, RowView, ScreenModel};
//!
//! let model = ScreenModel {
//!     rows: vec![RowView {
//!         name: "apples".to_string(),
//!         checked: false,
//!         is_selected: true,
//!         highlight_ranges: vec![(0, 3)],
//!     }],
//!     selected_index: 0,
//!     header: HeaderInfo { title: "Shopping List (1)".to_string() },
//!     footer: FooterInfo { keybindings: "q: quit".to_string() },
//!     empty_state: None,
//!     entry: None,
//! };
//! assert!(model.rows[0].is_selected);
//! ```

/// Complete screen view model for rendering.
///
/// Contains all display information needed to render the list screen. The
/// view model is computed from the last painted rows plus chrome state and
/// includes pre-processed rows, selection state, and optional elements like
/// entry boxes and empty states.
#[derive(Debug, Clone)]
pub struct ScreenModel {
    /// Rows to display, already windowed to the visible height.
    pub rows: Vec<RowView>,

    /// Index of the currently selected row within `rows`.
    pub selected_index: usize,

    /// Header information (title, list counters).
    pub header: HeaderInfo,

    /// Footer information (keybindings, help text).
    pub footer: FooterInfo,

    /// Optional empty state message (when no rows are visible).
    pub empty_state: Option<EmptyState>,

    /// Optional text entry box (when typing a new item or a search term).
    pub entry: Option<EntryInfo>,
}

/// Display information for a single list row.
///
/// Represents one row of the shopping list. Contains pre-computed highlight
/// ranges for search match rendering.
#[derive(Debug, Clone)]
pub struct RowView {
    /// Item name to display.
    pub name: String,

    /// Whether the item is checked off.
    pub checked: bool,

    /// Whether this row is currently selected.
    pub is_selected: bool,

    /// Character ranges to highlight (for search matches).
    ///
    /// Each tuple is `(start_index, end_index)` in character indices, end
    /// exclusive.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Header display information.
///
/// Contains the title line for the top of the screen.
#[derive(Debug, Clone)]
pub struct HeaderInfo {
    /// Title text to display in the header.
    pub title: String,
}

/// Footer display information.
///
/// Contains help text and keybinding hints for the bottom of the screen.
#[derive(Debug, Clone)]
pub struct FooterInfo {
    /// Keybinding help text (e.g., "a: add | /: search | q: quit").
    pub keybindings: String,
}

/// Empty state message display information.
///
/// Shown when no rows are visible, either because the list is empty or
/// because the active filters hide every item.
#[derive(Debug, Clone)]
pub struct EmptyState {
    /// Primary message (e.g., "Your shopping list is empty").
    pub message: String,

    /// Secondary explanatory text (e.g., "Press a to add your first item").
    pub subtitle: String,
}

/// Text entry box display information.
///
/// Contains the label and in-progress buffer for rendering the entry input
/// box used by both new-item entry and search entry.
#[derive(Debug, Clone)]
pub struct EntryInfo {
    /// Box label (e.g., "New item" or "Search").
    pub label: String,

    /// Current buffer text.
    pub buffer: String,
}

/// Modal prompt display information.
///
/// Contains the question and in-progress answer for the blocking edit
/// prompt.
#[derive(Debug, Clone)]
pub struct PromptInfo {
    /// Prompt message (the question being asked).
    pub message: String,

    /// Current answer buffer text.
    pub buffer: String,
}
