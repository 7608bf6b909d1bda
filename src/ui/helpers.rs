//! Shared rendering utilities and helpers.
//!
//! This module provides low-level rendering utilities used across multiple UI
//! components. It handles text rendering tasks like search match highlighting
//! with proper ANSI escape sequence management.
//!
//! # Features
//!
//! - **Search Match Highlighting**: Renders text with highlighted character ranges
//! - **UTF-8 Safe**: Operates on character indices, not byte indices
//!
//! # Example
//!
//! ```
//! use shoplist::ui::helpers::render_highlighted_text;
//! use shoplist::Theme;
//!
//! let theme = Theme::default();
//! render_highlighted_text("oat milk", &[(4, 8)], &theme, false);
//! // Prints "oat milk" with "milk" highlighted
//! ```

use crate::ui::theme::Theme;

/// Positions the cursor at a specific row and column.
///
/// Uses ANSI escape sequence `\u{1b}[{row};{col}H` to move the cursor.
/// Coordinates are 1-indexed (row 1 = first row, col 1 = first column).
///
/// # Parameters
///
/// * `row` - Target row (1-indexed)
/// * `col` - Target column (1-indexed, typically 1 for start of line)
///
/// # Example
///
/// ```
/// use shoplist::ui::helpers::position_cursor;
///
/// position_cursor(5, 1); // Move to start of row 5
/// print!("Content at row 5");
/// ```
pub fn position_cursor(row: usize, col: usize) {
    print!("\u{1b}[{row};{col}H");
}

/// Clears the whole screen.
///
/// Uses ANSI escape sequence `\u{1b}[2J`. The cursor position is left
/// unchanged; callers position it explicitly afterwards.
pub fn clear_screen() {
    print!("\u{1b}[2J");
}

/// Renders text with highlighted character ranges for search matches.
///
/// Splits the text into highlighted and normal sections based on the provided
/// character ranges. Highlighted sections use match highlight colors.
///
/// # Parameters
///
/// * `text` - The text to render
/// * `ranges` - Character index ranges to highlight `(start, end)` (inclusive start, exclusive end)
/// * `theme` - Active color theme for highlight colors
/// * `suppress_highlight` - Render plain text instead (used when the row
///   already carries row-wide styling such as selection colors or checked-off
///   dimming, which a mid-row reset would destroy)
///
/// # Character Indices
///
/// Ranges use UTF-8 character indices (not byte indices). The function
/// converts the text to a character vector for proper indexing.
///
/// # Output
///
/// Prints to stdout using ANSI escape sequences:
/// - Normal sections: whatever styling is already active
/// - Highlighted sections: `match_highlight_fg` + `match_highlight_bg`
pub fn render_highlighted_text(
    text: &str,
    ranges: &[(usize, usize)],
    theme: &Theme,
    suppress_highlight: bool,
) {
    if ranges.is_empty() || suppress_highlight {
        print!("{text}");
        return;
    }

    let chars: Vec<char> = text.chars().collect();
    let mut current_pos = 0;

    for &(start, end) in ranges {
        if start > current_pos {
            let normal_section: String = chars[current_pos..start].iter().collect();
            print!("{normal_section}");
        }

        print!("{}", Theme::fg(&theme.colors.match_highlight_fg));
        print!("{}", Theme::bg(&theme.colors.match_highlight_bg));
        let highlighted_section: String = chars[start..end.min(chars.len())].iter().collect();
        print!("{highlighted_section}");
        print!("{}", Theme::reset());
        print!("{}", Theme::fg(&theme.colors.text_normal));

        current_pos = end;
    }

    if current_pos < chars.len() {
        let remaining: String = chars[current_pos..].iter().collect();
        print!("{remaining}");
    }
}
