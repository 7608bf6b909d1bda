//! Composable UI component renderers.
//!
//! This module provides specialized rendering components for different parts
//! of the list screen, following a component-based architecture. Each
//! component is responsible for rendering a specific part of the interface.
//!
//! # Components
//!
//! - [`header`]: Title bar with list counters
//! - [`footer`]: Help text and keybinding hints
//! - [`entry`]: Text entry box (new item names, search terms)
//! - [`rows`]: Shopping list rows with checkbox markers
//! - [`empty`]: Empty state message for no visible rows
//! - [`prompt`]: Centered modal box for the blocking edit prompt
//!
//! # Layout Modes
//!
//! The module provides two high-level layout functions:
//!
//! - [`render_browse_mode`]: Header + Rows + Footer
//! - [`render_entry_mode`]: Header + Entry Box + Rows + Footer

mod empty;
mod entry;
mod footer;
mod header;
mod prompt;
mod rows;

pub use empty::render_empty_state;
pub use prompt::render_prompt;

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{EntryInfo, ScreenModel};

use entry::render_entry_box;
use footer::render_footer;
use header::render_header;
use rows::render_rows;

/// Renders a horizontal border line at the specified row.
///
/// Used to separate screen sections (header/list, list/footer).
///
/// # Parameters
///
/// * `row` - Row position to render the border (1-indexed)
/// * `color` - Hex color for the border
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 1)
fn render_border(row: usize, color: &str, cols: usize) -> usize {
    position_cursor(row, 1);
    print!("{}", Theme::fg(color));
    print!("{}", "─".repeat(cols));
    print!("{}", Theme::reset());
    row + 1
}

/// Renders the browse mode layout (no entry box).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [List Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// # Parameters
///
/// * `model` - View model with rows and chrome metadata
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
///
/// # Line Accounting
///
/// Reserves 6 lines for chrome (blank, header, 2 borders, footer, trailing
/// blank). Fills the remaining space with list rows and blank lines.
pub fn render_browse_mode(model: &ScreenModel, theme: &Theme, cols: usize, rows: usize) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &model.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    let _current_row = render_rows(current_row, &model.rows, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &model.footer, theme, cols);
}

/// Renders the entry mode layout (with the text entry box).
///
/// Layout structure:
/// ```text
/// [blank line]
/// [Header]
/// [Border]
/// [Entry Box - 3 lines]
/// [List Rows]
/// [Blank padding to fill screen]
/// [Border]
/// [Footer]
/// ```
///
/// # Parameters
///
/// * `model` - View model with rows and chrome metadata
/// * `entry` - Entry box information (label and buffer text)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
///
/// # Line Accounting
///
/// Reserves 9 lines for chrome (blank, header, 2 borders, entry box
/// [3 lines], footer, trailing blank). Fills the remaining space with list
/// rows and blank lines.
pub fn render_entry_mode(
    model: &ScreenModel,
    entry: &EntryInfo,
    theme: &Theme,
    cols: usize,
    rows: usize,
) {
    let mut current_row = 2; // Start at row 2 (skip blank line at row 1)

    current_row = render_header(current_row, &model.header, theme, cols);
    current_row = render_border(current_row, &theme.colors.border, cols);
    current_row = render_entry_box(current_row, entry, theme, cols);
    let _current_row = render_rows(current_row, &model.rows, theme, cols);

    let footer_start = rows.saturating_sub(1);
    let border_row = footer_start.saturating_sub(1);

    render_border(border_row, &theme.colors.border, cols);
    render_footer(footer_start, &model.footer, theme, cols);
}
