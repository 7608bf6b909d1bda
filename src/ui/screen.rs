//! Terminal screen adapter.
//!
//! This module implements [`Screen`], the crossterm-backed rendering surface.
//! It owns everything the list store deliberately does not know about: the
//! selection cursor, input modes, entry buffers, scroll windowing, and the
//! modal edit prompt.
//!
//! # State Machine
//!
//! The screen operates in one of two input modes:
//! - **Browse**: Default navigation and command mode
//! - **Entry**: Typing a new item name or a search term into the entry box
//!
//! The blocking edit prompt is not a mode; it runs its own small read loop
//! inside [`Surface::prompt_for_text`] and returns to the caller when the
//! user commits or cancels.
//!
//! # Mirrors
//!
//! The screen keeps read-only mirrors of the hide-completed flag and the
//! last submitted search term. They feed chrome only (header suffixes, match
//! highlights, empty state wording) and are updated at the moment the
//! corresponding event is produced; both operations are infallible, so the
//! mirrors cannot drift from the store.
//!
//! # Key Map (Browse)
//!
//! | Key            | Effect                                   |
//! |----------------|------------------------------------------|
//! | `j` / `Down`   | Move selection down (wraps)              |
//! | `k` / `Up`     | Move selection up (wraps)                |
//! | `Space`/`Enter`| Toggle the selected item                 |
//! | `d` / `x`      | Delete the selected item                 |
//! | `e`            | Edit the selected item (modal prompt)    |
//! | `a`            | Open the new-item entry box              |
//! | `/`            | Open the search entry box (prefilled)    |
//! | `h`            | Toggle hiding of completed items         |
//! | `Esc`          | Clear the active search, if any          |
//! | `q` / `Ctrl+C` | Quit                                     |
//!
//! # Key Map (Entry)
//!
//! | Key         | Effect                                      |
//! |-------------|---------------------------------------------|
//! | printable   | Append to the buffer                        |
//! | `Backspace` | Remove the last character                   |
//! | `Enter`     | Submit the buffer and return to Browse      |
//! | `Esc`       | Discard the buffer and return to Browse     |

use std::io::{self, Write};
use std::mem;

use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};

use crate::app::events::Event;
use crate::app::surface::{Surface, ViewItem};
use crate::domain::ItemId;
use crate::ui::components;
use crate::ui::helpers;
use crate::ui::theme::Theme;
use crate::ui::viewmodel::{
    EmptyState, EntryInfo, FooterInfo, HeaderInfo, PromptInfo, RowView, ScreenModel,
};

/// Chrome lines reserved in browse mode (blank, header, 2 borders, footer,
/// trailing blank).
const BROWSE_CHROME_LINES: usize = 6;

/// Chrome lines reserved in entry mode (browse chrome plus the 3-line entry
/// box).
const ENTRY_CHROME_LINES: usize = 9;

/// Which text entry field is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    /// Typing the name of a new item.
    NewItem,
    /// Typing a search term.
    Search,
}

/// Current input handling mode.
///
/// Controls which keybindings are active and whether the entry box is drawn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenMode {
    /// Default navigation and command mode.
    Browse,

    /// Typing into the entry box.
    ///
    /// Carries the target field and the in-progress buffer. The buffer is
    /// submitted whole on `Enter`; no event is produced while typing.
    Entry {
        /// The field being typed into.
        field: EntryField,
        /// Text accumulated so far.
        buffer: String,
    },
}

/// What the event loop should do after a key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Forward the event to the view renderer.
    Dispatch(Event),

    /// Chrome-only change (selection move, mode switch, buffer edit);
    /// repaint the screen without touching the store.
    Repaint,

    /// Tear down the terminal and exit.
    Quit,

    /// The key means nothing right now.
    Ignored,
}

/// Crossterm-backed rendering surface and input interpreter.
///
/// Holds the last painted rows and all adapter-local chrome state. The event
/// loop feeds key presses to [`Screen::on_key`] and forwards any produced
/// [`Event`] to the view renderer, which paints back through the [`Surface`]
/// implementation.
#[derive(Debug)]
pub struct Screen {
    /// Active color theme.
    theme: Theme,

    /// Terminal height in rows.
    rows: usize,

    /// Terminal width in columns.
    cols: usize,

    /// Current input mode.
    mode: ScreenMode,

    /// Zero-based index of the selected row within `items`.
    ///
    /// Clamped on every paint. Wraps around during navigation.
    selected_index: usize,

    /// Mirror of the store's hide-completed flag, for chrome only.
    hide_completed: bool,

    /// Mirror of the store's submitted search term, for chrome only.
    ///
    /// Empty string means no active search.
    search_term: String,

    /// Rows from the most recent paint.
    items: Vec<ViewItem>,
}

impl Screen {
    /// Creates a screen for a terminal of the given size.
    ///
    /// Starts in browse mode with nothing painted yet.
    #[must_use]
    pub fn new(theme: Theme, rows: usize, cols: usize) -> Self {
        Self {
            theme,
            rows,
            cols,
            mode: ScreenMode::Browse,
            selected_index: 0,
            hide_completed: false,
            search_term: String::new(),
            items: Vec::new(),
        }
    }

    /// Interprets one key press.
    ///
    /// Pure with respect to the terminal: no drawing happens here. The
    /// caller repaints on [`KeyOutcome::Repaint`] and forwards
    /// [`KeyOutcome::Dispatch`] events to the view renderer.
    pub fn on_key(&mut self, key: &KeyEvent) -> KeyOutcome {
        match self.mode {
            ScreenMode::Browse => self.on_key_browse(key),
            ScreenMode::Entry { .. } => self.on_key_entry(key),
        }
    }

    /// Records a new terminal size.
    ///
    /// The caller repaints afterwards; resizing alone draws nothing.
    pub fn resize(&mut self, rows: usize, cols: usize) {
        self.rows = rows;
        self.cols = cols;
    }

    /// Redraws the screen from the last painted rows.
    pub fn repaint(&mut self) {
        self.draw();
    }

    fn on_key_browse(&mut self, key: &KeyEvent) -> KeyOutcome {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                KeyOutcome::Quit
            }
            KeyCode::Char('q') => KeyOutcome::Quit,
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection_down();
                KeyOutcome::Repaint
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection_up();
                KeyOutcome::Repaint
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.dispatch_for_selected(Event::ToggleItem),
            KeyCode::Char('d') | KeyCode::Char('x') => {
                self.dispatch_for_selected(Event::DeleteItem)
            }
            KeyCode::Char('e') => self.dispatch_for_selected(Event::EditItem),
            KeyCode::Char('a') => {
                self.mode = ScreenMode::Entry {
                    field: EntryField::NewItem,
                    buffer: String::new(),
                };
                KeyOutcome::Repaint
            }
            KeyCode::Char('/') => {
                self.mode = ScreenMode::Entry {
                    field: EntryField::Search,
                    buffer: self.search_term.clone(),
                };
                KeyOutcome::Repaint
            }
            KeyCode::Char('h') => {
                self.hide_completed = !self.hide_completed;
                KeyOutcome::Dispatch(Event::ToggleHideCompleted)
            }
            KeyCode::Esc if !self.search_term.is_empty() => {
                self.search_term.clear();
                KeyOutcome::Dispatch(Event::SubmitSearch(String::new()))
            }
            _ => KeyOutcome::Ignored,
        }
    }

    fn on_key_entry(&mut self, key: &KeyEvent) -> KeyOutcome {
        let ScreenMode::Entry { field, buffer } = &mut self.mode else {
            return KeyOutcome::Ignored;
        };

        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                buffer.push(c);
                KeyOutcome::Repaint
            }
            KeyCode::Backspace => {
                buffer.pop();
                KeyOutcome::Repaint
            }
            KeyCode::Enter => {
                let text = mem::take(buffer);
                let submitted = *field;
                self.mode = ScreenMode::Browse;
                match submitted {
                    EntryField::NewItem => KeyOutcome::Dispatch(Event::SubmitNewItem(text)),
                    EntryField::Search => {
                        self.search_term = text.trim().to_string();
                        KeyOutcome::Dispatch(Event::SubmitSearch(text))
                    }
                }
            }
            KeyCode::Esc => {
                self.mode = ScreenMode::Browse;
                KeyOutcome::Repaint
            }
            _ => KeyOutcome::Ignored,
        }
    }

    /// Builds the event for the selected row, or ignores the key when the
    /// list is empty.
    fn dispatch_for_selected(&self, make: impl Fn(ItemId) -> Event) -> KeyOutcome {
        match self.items.get(self.selected_index) {
            Some(item) => KeyOutcome::Dispatch(make(item.id.clone())),
            None => KeyOutcome::Ignored,
        }
    }

    /// Moves selection cursor down by one position, wrapping to the top.
    fn move_selection_down(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.selected_index = (self.selected_index + 1) % self.items.len();
    }

    /// Moves selection cursor up by one position, wrapping to the bottom.
    fn move_selection_up(&mut self) {
        if self.items.is_empty() {
            return;
        }
        if self.selected_index == 0 {
            self.selected_index = self.items.len() - 1;
        } else {
            self.selected_index -= 1;
        }
    }

    /// Keeps the selection inside the painted rows.
    fn clamp_selection(&mut self) {
        if self.items.is_empty() {
            self.selected_index = 0;
        } else {
            self.selected_index = self.selected_index.min(self.items.len() - 1);
        }
    }

    /// Rows available for the list after subtracting chrome.
    fn available_rows(&self) -> usize {
        match self.mode {
            ScreenMode::Browse => self.rows.saturating_sub(BROWSE_CHROME_LINES),
            ScreenMode::Entry { .. } => self.rows.saturating_sub(ENTRY_CHROME_LINES),
        }
    }

    /// Computes the renderable view model from painted rows and chrome
    /// state.
    ///
    /// Windows the rows around the selection so it stays centered where
    /// possible, clamping at both ends of the list.
    fn compose_model(&self) -> ScreenModel {
        let available = self.available_rows();

        let mut visible_start = self.selected_index.saturating_sub(available / 2);
        let visible_end = (visible_start + available).min(self.items.len());

        let actual_count = visible_end - visible_start;
        if actual_count < available && self.items.len() >= available {
            visible_start = visible_end.saturating_sub(available);
        }

        let rows: Vec<RowView> = self.items[visible_start..visible_end]
            .iter()
            .enumerate()
            .map(|(relative_idx, item)| {
                let absolute_idx = visible_start + relative_idx;
                RowView {
                    name: item.name.clone(),
                    checked: item.checked,
                    is_selected: absolute_idx == self.selected_index,
                    highlight_ranges: match_range(&item.name, &self.search_term),
                }
            })
            .collect();

        ScreenModel {
            rows,
            selected_index: self.selected_index.saturating_sub(visible_start),
            header: self.compose_header(),
            footer: self.compose_footer(),
            empty_state: self.compose_empty_state(),
            entry: self.compose_entry(),
        }
    }

    /// Computes the header title with visible count and filter suffixes.
    fn compose_header(&self) -> HeaderInfo {
        let mut title = format!(" Shopping List ({}) ", self.items.len());
        if !self.search_term.is_empty() {
            title.push_str(&format!("· search: \"{}\" ", self.search_term));
        }
        if self.hide_completed {
            title.push_str("· hiding completed ");
        }
        HeaderInfo { title }
    }

    /// Computes footer keybinding hints for the current mode.
    fn compose_footer(&self) -> FooterInfo {
        let keybindings = match &self.mode {
            ScreenMode::Browse => {
                "j/k: navigate  Space: toggle  a: add  e: edit  d: delete  h: hide done  /: search  q: quit"
                    .to_string()
            }
            ScreenMode::Entry {
                field: EntryField::NewItem,
                ..
            } => "Enter: add item  ESC: cancel".to_string(),
            ScreenMode::Entry {
                field: EntryField::Search,
                ..
            } => "Enter: apply search  ESC: cancel".to_string(),
        };

        FooterInfo { keybindings }
    }

    /// Computes the empty state message, if one should be shown.
    ///
    /// Only browse mode shows an empty state; the wording distinguishes a
    /// truly empty list from one where the filters hide everything.
    fn compose_empty_state(&self) -> Option<EmptyState> {
        if !self.items.is_empty() || !matches!(self.mode, ScreenMode::Browse) {
            return None;
        }

        if self.search_term.is_empty() && !self.hide_completed {
            Some(EmptyState {
                message: "Your shopping list is empty".to_string(),
                subtitle: "Press 'a' to add your first item".to_string(),
            })
        } else {
            Some(EmptyState {
                message: "No items match your filters".to_string(),
                subtitle: "Press '/' to change the search or 'h' to show completed".to_string(),
            })
        }
    }

    /// Computes the entry box contents when in entry mode.
    fn compose_entry(&self) -> Option<EntryInfo> {
        match &self.mode {
            ScreenMode::Entry { field, buffer } => Some(EntryInfo {
                label: match field {
                    EntryField::NewItem => "New item".to_string(),
                    EntryField::Search => "Search".to_string(),
                },
                buffer: buffer.clone(),
            }),
            ScreenMode::Browse => None,
        }
    }

    /// Clears the terminal and draws the full screen.
    fn draw(&mut self) {
        let model = self.compose_model();

        helpers::clear_screen();
        match &model.entry {
            Some(entry) => {
                components::render_entry_mode(&model, entry, &self.theme, self.cols, self.rows);
            }
            None => components::render_browse_mode(&model, &self.theme, self.cols, self.rows),
        }
        if let Some(empty) = &model.empty_state {
            components::render_empty_state(empty, &self.theme, self.cols);
        }

        let _ = io::stdout().flush();
    }

    /// Draws the modal prompt box over the current screen.
    fn draw_prompt(&self, message: &str, buffer: &str) {
        let prompt = PromptInfo {
            message: message.to_string(),
            buffer: buffer.to_string(),
        };
        components::render_prompt(&prompt, &self.theme, self.cols, self.rows);

        let _ = io::stdout().flush();
    }

    /// Runs the blocking prompt read loop.
    ///
    /// Returns `Some(answer)` on `Enter` and `None` on `Esc` or `Ctrl+C`.
    /// Read failures cancel the prompt rather than crashing the screen.
    fn run_prompt(&mut self, message: &str) -> Option<String> {
        let mut buffer = String::new();
        self.draw_prompt(message, &buffer);

        loop {
            match event::read() {
                Ok(CrosstermEvent::Key(key)) if key.kind == event::KeyEventKind::Press => {
                    match key.code {
                        KeyCode::Enter => return Some(buffer),
                        KeyCode::Esc => {
                            // A cancelled edit triggers no store render, so
                            // the chrome repaint happens here.
                            self.draw();
                            return None;
                        }
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            self.draw();
                            return None;
                        }
                        KeyCode::Char(c) => {
                            buffer.push(c);
                            self.draw_prompt(message, &buffer);
                        }
                        KeyCode::Backspace => {
                            buffer.pop();
                            self.draw_prompt(message, &buffer);
                        }
                        _ => {}
                    }
                }
                Ok(CrosstermEvent::Resize(cols, rows)) => {
                    self.resize(rows as usize, cols as usize);
                    self.draw();
                    self.draw_prompt(message, &buffer);
                }
                Ok(_) => {}
                Err(error) => {
                    tracing::warn!(error = %error, "failed to read prompt input, cancelling edit");
                    self.draw();
                    return None;
                }
            }
        }
    }
}

impl Surface for Screen {
    fn paint_list(&mut self, items: &[ViewItem]) {
        self.items = items.to_vec();
        self.clamp_selection();
        self.draw();
    }

    fn prompt_for_text(&mut self, message: &str) -> Option<String> {
        self.run_prompt(message)
    }
}

/// Finds the first case-insensitive occurrence of `term` in `name`.
///
/// Returns at most one `(start, end)` character range, end exclusive. The
/// comparison lowercases per character so indices stay aligned with the
/// rendered text.
fn match_range(name: &str, term: &str) -> Vec<(usize, usize)> {
    if term.is_empty() {
        return Vec::new();
    }

    let lower = |c: char| c.to_lowercase().next().unwrap_or(c);
    let haystack: Vec<char> = name.chars().map(lower).collect();
    let needle: Vec<char> = term.chars().map(lower).collect();

    if needle.is_empty() || needle.len() > haystack.len() {
        return Vec::new();
    }

    for start in 0..=(haystack.len() - needle.len()) {
        if haystack[start..start + needle.len()] == needle[..] {
            return vec![(start, start + needle.len())];
        }
    }

    Vec::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn view_items(names: &[(&str, bool)]) -> Vec<ViewItem> {
        names
            .iter()
            .enumerate()
            .map(|(idx, (name, checked))| ViewItem {
                id: ItemId::new(format!("item-{idx}")),
                name: (*name).to_string(),
                checked: *checked,
            })
            .collect()
    }

    fn screen_with(names: &[(&str, bool)]) -> Screen {
        let mut screen = Screen::new(Theme::default(), 24, 80);
        screen.paint_list(&view_items(names));
        screen
    }

    #[test]
    fn key_events_default_to_press_kind() {
        assert_eq!(key(KeyCode::Char('j')).kind, KeyEventKind::Press);
    }

    #[test]
    fn selection_wraps_both_directions() {
        let mut screen = screen_with(&[("a", false), ("b", false), ("c", false)]);

        assert_eq!(screen.on_key(&key(KeyCode::Char('j'))), KeyOutcome::Repaint);
        assert_eq!(screen.selected_index, 1);

        screen.on_key(&key(KeyCode::Char('j')));
        screen.on_key(&key(KeyCode::Char('j')));
        assert_eq!(screen.selected_index, 0);

        screen.on_key(&key(KeyCode::Char('k')));
        assert_eq!(screen.selected_index, 2);

        screen.on_key(&key(KeyCode::Up));
        assert_eq!(screen.selected_index, 1);
    }

    #[test]
    fn space_and_enter_toggle_the_selected_row() {
        let mut screen = screen_with(&[("apples", false), ("milk", false)]);
        screen.on_key(&key(KeyCode::Down));

        let expected = KeyOutcome::Dispatch(Event::ToggleItem(ItemId::new("item-1")));
        assert_eq!(screen.on_key(&key(KeyCode::Char(' '))), expected);
        assert_eq!(screen.on_key(&key(KeyCode::Enter)), expected);
    }

    #[test]
    fn d_and_x_delete_and_e_edits() {
        let mut screen = screen_with(&[("apples", false)]);
        let id = ItemId::new("item-0");

        assert_eq!(
            screen.on_key(&key(KeyCode::Char('d'))),
            KeyOutcome::Dispatch(Event::DeleteItem(id.clone()))
        );
        assert_eq!(
            screen.on_key(&key(KeyCode::Char('x'))),
            KeyOutcome::Dispatch(Event::DeleteItem(id.clone()))
        );
        assert_eq!(
            screen.on_key(&key(KeyCode::Char('e'))),
            KeyOutcome::Dispatch(Event::EditItem(id))
        );
    }

    #[test]
    fn row_keys_are_ignored_on_an_empty_list() {
        let mut screen = screen_with(&[]);

        assert_eq!(screen.on_key(&key(KeyCode::Char(' '))), KeyOutcome::Ignored);
        assert_eq!(screen.on_key(&key(KeyCode::Char('d'))), KeyOutcome::Ignored);
        assert_eq!(screen.on_key(&key(KeyCode::Char('e'))), KeyOutcome::Ignored);
    }

    #[test]
    fn h_toggles_hiding_and_mirrors_the_flag() {
        let mut screen = screen_with(&[("apples", false)]);

        assert_eq!(
            screen.on_key(&key(KeyCode::Char('h'))),
            KeyOutcome::Dispatch(Event::ToggleHideCompleted)
        );
        assert!(screen.hide_completed);

        screen.on_key(&key(KeyCode::Char('h')));
        assert!(!screen.hide_completed);
    }

    #[test]
    fn q_and_ctrl_c_quit() {
        let mut screen = screen_with(&[]);

        assert_eq!(screen.on_key(&key(KeyCode::Char('q'))), KeyOutcome::Quit);
        assert_eq!(screen.on_key(&ctrl('c')), KeyOutcome::Quit);
    }

    #[test]
    fn new_item_entry_accumulates_and_submits() {
        let mut screen = screen_with(&[]);

        assert_eq!(screen.on_key(&key(KeyCode::Char('a'))), KeyOutcome::Repaint);
        screen.on_key(&key(KeyCode::Char('m')));
        screen.on_key(&key(KeyCode::Char('i')));
        screen.on_key(&key(KeyCode::Char('l')));
        screen.on_key(&key(KeyCode::Char('k')));
        screen.on_key(&key(KeyCode::Backspace));

        assert_eq!(
            screen.on_key(&key(KeyCode::Enter)),
            KeyOutcome::Dispatch(Event::SubmitNewItem("mil".to_string()))
        );
        assert_eq!(screen.mode, ScreenMode::Browse);
    }

    #[test]
    fn search_entry_is_prefilled_with_the_active_term() {
        let mut screen = screen_with(&[("apples", false)]);

        screen.on_key(&key(KeyCode::Char('/')));
        screen.on_key(&key(KeyCode::Char('a')));
        assert_eq!(
            screen.on_key(&key(KeyCode::Enter)),
            KeyOutcome::Dispatch(Event::SubmitSearch("a".to_string()))
        );
        assert_eq!(screen.search_term, "a");

        screen.on_key(&key(KeyCode::Char('/')));
        match &screen.mode {
            ScreenMode::Entry { buffer, .. } => assert_eq!(buffer, "a"),
            other => panic!("expected entry mode, got {other:?}"),
        }
    }

    #[test]
    fn entry_escape_cancels_without_dispatching() {
        let mut screen = screen_with(&[]);

        screen.on_key(&key(KeyCode::Char('/')));
        screen.on_key(&key(KeyCode::Char('z')));
        assert_eq!(screen.on_key(&key(KeyCode::Esc)), KeyOutcome::Repaint);
        assert_eq!(screen.mode, ScreenMode::Browse);
        assert_eq!(screen.search_term, "");
    }

    #[test]
    fn browse_escape_clears_only_an_active_search() {
        let mut screen = screen_with(&[("apples", false)]);

        assert_eq!(screen.on_key(&key(KeyCode::Esc)), KeyOutcome::Ignored);

        screen.on_key(&key(KeyCode::Char('/')));
        screen.on_key(&key(KeyCode::Char('a')));
        screen.on_key(&key(KeyCode::Enter));

        assert_eq!(
            screen.on_key(&key(KeyCode::Esc)),
            KeyOutcome::Dispatch(Event::SubmitSearch(String::new()))
        );
        assert_eq!(screen.search_term, "");
    }

    #[test]
    fn paint_clamps_a_stale_selection() {
        let mut screen = screen_with(&[("a", false), ("b", false), ("c", false)]);
        screen.on_key(&key(KeyCode::Char('j')));
        screen.on_key(&key(KeyCode::Char('j')));
        assert_eq!(screen.selected_index, 2);

        screen.paint_list(&view_items(&[("a", false)]));
        assert_eq!(screen.selected_index, 0);
    }

    #[test]
    fn windowing_centers_the_selection() {
        let names: Vec<(String, bool)> = (0..30).map(|i| (format!("item {i}"), false)).collect();
        let refs: Vec<(&str, bool)> = names.iter().map(|(n, c)| (n.as_str(), *c)).collect();
        let mut screen = Screen::new(Theme::default(), 16, 80);
        screen.paint_list(&view_items(&refs));
        screen.selected_index = 20;

        let model = screen.compose_model();
        assert_eq!(model.rows.len(), 10);
        assert_eq!(model.rows[0].name, "item 15");
        assert_eq!(model.selected_index, 5);
        assert!(model.rows[5].is_selected);
    }

    #[test]
    fn windowing_clamps_at_the_list_end() {
        let names: Vec<(String, bool)> = (0..30).map(|i| (format!("item {i}"), false)).collect();
        let refs: Vec<(&str, bool)> = names.iter().map(|(n, c)| (n.as_str(), *c)).collect();
        let mut screen = Screen::new(Theme::default(), 16, 80);
        screen.paint_list(&view_items(&refs));
        screen.selected_index = 29;

        let model = screen.compose_model();
        assert_eq!(model.rows.len(), 10);
        assert_eq!(model.rows[0].name, "item 20");
        assert_eq!(model.selected_index, 9);
    }

    #[test]
    fn header_title_reflects_count_and_filters() {
        let mut screen = screen_with(&[("apples", false), ("milk", true)]);
        screen.on_key(&key(KeyCode::Char('h')));
        screen.on_key(&key(KeyCode::Char('/')));
        screen.on_key(&key(KeyCode::Char('m')));
        screen.on_key(&key(KeyCode::Enter));

        let title = screen.compose_header().title;
        assert!(title.contains("Shopping List (2)"));
        assert!(title.contains("search: \"m\""));
        assert!(title.contains("hiding completed"));
    }

    #[test]
    fn empty_state_wording_depends_on_active_filters() {
        let mut screen = screen_with(&[]);
        let empty = screen.compose_empty_state().unwrap();
        assert_eq!(empty.message, "Your shopping list is empty");

        screen.on_key(&key(KeyCode::Char('h')));
        let empty = screen.compose_empty_state().unwrap();
        assert_eq!(empty.message, "No items match your filters");
    }

    #[test]
    fn entry_mode_suppresses_the_empty_state() {
        let mut screen = screen_with(&[]);
        screen.on_key(&key(KeyCode::Char('a')));

        let model = screen.compose_model();
        assert!(model.empty_state.is_none());
        assert_eq!(model.entry.unwrap().label, "New item");
    }

    #[test]
    fn match_range_finds_case_insensitive_substrings() {
        assert_eq!(match_range("Oat Milk", "milk"), vec![(4, 8)]);
        assert_eq!(match_range("apples", "APp"), vec![(0, 3)]);
        assert!(match_range("apples", "zzz").is_empty());
        assert!(match_range("apples", "").is_empty());
        assert!(match_range("ab", "abc").is_empty());
    }

    #[test]
    fn resize_changes_the_visible_window() {
        let names: Vec<(String, bool)> = (0..30).map(|i| (format!("item {i}"), false)).collect();
        let refs: Vec<(&str, bool)> = names.iter().map(|(n, c)| (n.as_str(), *c)).collect();
        let mut screen = Screen::new(Theme::default(), 16, 80);
        screen.paint_list(&view_items(&refs));

        screen.resize(26, 100);
        let model = screen.compose_model();
        assert_eq!(model.rows.len(), 20);
    }
}
