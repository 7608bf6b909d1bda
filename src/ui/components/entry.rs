//! Text entry box component renderer.
//!
//! This module renders the entry input box used for typing a new item name
//! or a search term, with a bordered frame and a labelled buffer display.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EntryInfo;

/// Horizontal margin for the entry box (spaces on left and right).
const ENTRY_BOX_MARGIN: usize = 5;

/// Renders the entry input box at the specified row.
///
/// Displays a 3-line bordered box containing the label and the in-progress
/// buffer text. The box is horizontally centered with margins on both sides.
///
/// # Parameters
///
/// * `row` - Starting row position for the entry box (1-indexed)
/// * `entry` - Entry box information (label and buffer text)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Returns
///
/// The next available row position (row + 3, since the box uses 3 lines)
///
/// # Layout
///
/// ```text
/// [margin] ┌──────────────────┐ [margin]
/// [margin] │ New item: milk_  │ [margin]
/// [margin] └──────────────────┘ [margin]
/// ```
///
/// The box width is calculated as `cols - (2 * ENTRY_BOX_MARGIN)`. The inner
/// content width is `box_width - 2` (accounting for left and right borders).
///
/// # Rendering Details
///
/// - Borders use theme `entry_border` color
/// - Label and buffer use theme `text_normal` color
/// - Content is displayed as " {label}: {buffer}_" with a cursor underscore
/// - Right padding fills remaining space to the box edge
pub fn render_entry_box(row: usize, entry: &EntryInfo, theme: &Theme, cols: usize) -> usize {
    let box_width = cols.saturating_sub(ENTRY_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);

    position_cursor(row, 1);
    print!("{}", " ".repeat(ENTRY_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.entry_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    let entry_text = format!(" {}: {}_", entry.label, entry.buffer);
    let text_len = entry_text.chars().count();
    let padding = inner_width.saturating_sub(text_len);

    position_cursor(row + 1, 1);
    print!("{}", " ".repeat(ENTRY_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.entry_border));
    print!("│");
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{entry_text}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::fg(&theme.colors.entry_border));
    print!("│");
    print!("{}", Theme::reset());

    position_cursor(row + 2, 1);
    print!("{}", " ".repeat(ENTRY_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.entry_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    row + 3
}
