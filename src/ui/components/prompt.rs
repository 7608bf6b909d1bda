//! Modal prompt component renderer.
//!
//! This module renders the blocking edit prompt as a centered bordered box
//! with a question line and an answer line.

use crate::ui::helpers::position_cursor;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::PromptInfo;

/// Horizontal margin for the prompt box (spaces on left and right).
const PROMPT_BOX_MARGIN: usize = 8;

/// Total height of the prompt box in lines.
const PROMPT_BOX_HEIGHT: usize = 4;

/// Renders the modal prompt box, vertically centered.
///
/// Displays a 4-line bordered box over the current screen contents. The box
/// holds the prompt message on one line and the in-progress answer on the
/// next.
///
/// # Parameters
///
/// * `prompt` - Prompt information (message and answer buffer)
/// * `theme` - Active color theme
/// * `cols` - Terminal width in columns
/// * `rows` - Terminal height in rows
///
/// # Layout
///
/// ```text
/// [margin] ┌───────────────────────────────┐ [margin]
/// [margin] │ What is your new item name?   │ [margin]
/// [margin] │ > oat milk_                   │ [margin]
/// [margin] └───────────────────────────────┘ [margin]
/// ```
///
/// # Example
///
/// ```
/// use shoplist::ui::components::render_prompt;
/// use shoplist::ui::viewmodel::PromptInfo;
/// use shoplist::Theme;
///
/// let prompt = PromptInfo {
///     message: "What is your new item name?".to_string(),
///     buffer: "oat milk".to_string(),
/// };
/// let theme = Theme::default();
/// render_prompt(&prompt, &theme, 80, 24);
/// ```
pub fn render_prompt(prompt: &PromptInfo, theme: &Theme, cols: usize, rows: usize) {
    let box_width = cols.saturating_sub(PROMPT_BOX_MARGIN * 2);
    let inner_width = box_width.saturating_sub(2);
    let top = (rows.saturating_sub(PROMPT_BOX_HEIGHT) / 2).max(1);

    position_cursor(top, 1);
    print!("{}", " ".repeat(PROMPT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.entry_border));
    print!("┌{}┐", "─".repeat(inner_width));
    print!("{}", Theme::reset());

    render_box_line(top + 1, &format!(" {}", prompt.message), false, theme, inner_width);
    render_box_line(top + 2, &format!(" > {}_", prompt.buffer), true, theme, inner_width);

    position_cursor(top + 3, 1);
    print!("{}", " ".repeat(PROMPT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.entry_border));
    print!("└{}┘", "─".repeat(inner_width));
    print!("{}", Theme::reset());
}

/// Renders one bordered content line of the prompt box.
///
/// Truncates the text to the inner width and pads the remainder so the right
/// border always lines up.
fn render_box_line(row: usize, text: &str, bold: bool, theme: &Theme, inner_width: usize) {
    let shown: String = text.chars().take(inner_width).collect();
    let shown_len = shown.chars().count();
    let padding = inner_width.saturating_sub(shown_len);

    position_cursor(row, 1);
    print!("{}", " ".repeat(PROMPT_BOX_MARGIN));
    print!("{}", Theme::fg(&theme.colors.entry_border));
    print!("│");
    if bold {
        print!("{}", Theme::bold());
    }
    print!("{}", Theme::fg(&theme.colors.text_normal));
    print!("{shown}");
    print!("{}", " ".repeat(padding));
    print!("{}", Theme::reset());
    print!("{}", Theme::fg(&theme.colors.entry_border));
    print!("│");
    print!("{}", Theme::reset());
}
