//! Empty state component renderer.
//!
//! This module renders the empty state message displayed when no list rows
//! are visible.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::EmptyState;

/// Renders the empty state message.
///
/// Displays a centered two-line message when no rows are visible. Typically
/// shown when:
/// - The shopping list has no items yet
/// - The active search matches nothing
/// - Hiding completed items leaves nothing to show
///
/// # Parameters
///
/// * `empty` - Empty state information (message and subtitle)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
///
/// # Layout
///
/// ```text
/// [5 blank lines]
/// [left padding] MESSAGE [right padding]
/// [left padding] subtitle [right padding]
/// ```
///
/// Both lines are horizontally centered. The message uses the
/// `empty_state_fg` theme color, and the subtitle uses `text_dim` with dim
/// styling. The message is positioned starting at row 6, with the subtitle
/// at row 7.
///
/// # Example
///
/// ```
/// use shoplist::ui::components::render_empty_state;
/// use shoplist::ui::viewmodel::EmptyState;
/// use shoplist::Theme;
///
/// let empty = EmptyState {
///     message: "Your shopping list is empty".to_string(),
///     subtitle: "Press 'a' to add your first item".to_string(),
/// };
/// let theme = Theme::default();
/// render_empty_state(&empty, &theme, 80);
/// ```
pub fn render_empty_state(empty: &EmptyState, theme: &Theme, cols: usize) {
    let msg_len = empty.message.chars().count();
    let msg_padding = (cols.saturating_sub(msg_len)) / 2;

    position_cursor(6, 1);
    print!("{}", Theme::fg(&theme.colors.empty_state_fg));
    print!("{}", " ".repeat(msg_padding));
    print!("{}", empty.message);
    print!("{}", " ".repeat(cols.saturating_sub(msg_padding + msg_len)));
    print!("{}", Theme::reset());

    let sub_len = empty.subtitle.chars().count();
    let sub_padding = (cols.saturating_sub(sub_len)) / 2;

    position_cursor(7, 1);
    print!("{}", Theme::dim());
    print!("{}", Theme::fg(&theme.colors.text_dim));
    print!("{}", " ".repeat(sub_padding));
    print!("{}", empty.subtitle);
    print!("{}", " ".repeat(cols.saturating_sub(sub_padding + sub_len)));
    print!("{}", Theme::reset());
}
