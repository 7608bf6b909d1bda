//! List row component renderer.
//!
//! This module renders the shopping list rows with a checkbox marker per
//! item. It supports selection highlighting, checked-off styling, and search
//! match highlighting.

use crate::ui::helpers::{self, position_cursor};
use crate::ui::theme::Theme;
use crate::ui::viewmodel::RowView;

/// Visible width of the checkbox marker, including its trailing space.
const MARKER_WIDTH: usize = 4;

/// Renders all list rows starting at the specified row.
///
/// Iterates through the visible rows and renders each with proper selection,
/// checked-off, and highlight styling.
///
/// # Parameters
///
/// * `row` - Starting row position for the list (1-indexed)
/// * `items` - Rows to render, already windowed to the visible height
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns (for padding)
///
/// # Returns
///
/// The next available row position (row + number of rows)
pub fn render_rows(row: usize, items: &[RowView], theme: &Theme, cols: usize) -> usize {
    let mut current_row = row;
    for item in items {
        current_row = render_row(current_row, item, theme, cols);
    }
    current_row
}

/// Renders a single list row at the specified row position.
///
/// Displays one item as:
///
/// ```text
/// [ ] oat milk
/// [x] bread
/// ```
///
/// # Styling Precedence
///
/// 1. Selection colors (full row background) when `is_selected`
/// 2. Checked-off styling (dim, strikethrough name, colored marker)
/// 3. Search match highlights (suppressed under 1 and 2)
/// 4. Normal text color
///
/// The row is padded to fill the entire terminal width so the selection
/// background renders as a full bar.
fn render_row(row: usize, item: &RowView, theme: &Theme, cols: usize) -> usize {
    position_cursor(row, 1);

    if item.is_selected {
        print!("{}", Theme::fg(&theme.colors.selection_fg));
        print!("{}", Theme::bg(&theme.colors.selection_bg));
    } else if item.checked {
        print!("{}", Theme::fg(&theme.colors.text_dim));
    } else {
        print!("{}", Theme::fg(&theme.colors.text_normal));
    }

    if item.checked {
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.checked_fg));
        }
        print!("[x] ");
        if !item.is_selected {
            print!("{}", Theme::fg(&theme.colors.text_dim));
            print!("{}", Theme::dim());
            print!("{}", Theme::strikethrough());
        }
    } else {
        print!("[ ] ");
    }

    helpers::render_highlighted_text(
        &item.name,
        &item.highlight_ranges,
        theme,
        item.is_selected || item.checked,
    );

    let line_len = MARKER_WIDTH + item.name.chars().count();
    let padding = cols.saturating_sub(line_len);

    if item.is_selected {
        // Pad before resetting so the selection background covers the line.
        print!("{}", " ".repeat(padding));
        print!("{}", Theme::reset());
    } else {
        // Reset first so dim and strikethrough never bleed into the padding.
        print!("{}", Theme::reset());
        print!("{}", " ".repeat(padding));
    }

    row + 1
}
