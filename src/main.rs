//! Terminal entry point and event loop.
//!
//! This module provides the thin integration layer between the shoplist
//! library and the terminal. It owns the crossterm lifecycle (raw mode,
//! alternate screen, cursor visibility) and the blocking event loop.
//!
//! # Architecture
//!
//! ```text
//! ┌───────────────────────────────┐
//! │  crossterm event::read()      │  ← blocking input
//! └───────────────────────────────┘
//!         │ KeyEvent / Resize
//!         ▼
//! ┌───────────────────────────────┐
//! │  Screen::on_key → KeyOutcome  │  ← chrome: selection, modes, buffers
//! └───────────────────────────────┘
//!         │ Dispatch(Event)
//!         ▼
//! ┌───────────────────────────────┐
//! │  ViewRenderer::handle         │  ← one store mutation, one repaint
//! └───────────────────────────────┘
//! ```
//!
//! # Lifecycle
//!
//! 1. **Startup**: Load config, initialize logging, resolve theme, seed the
//!    list store
//! 2. **Terminal Setup**: Enable raw mode, enter the alternate screen, hide
//!    the cursor
//! 3. **Initial Render**: Paint the seeded list before the first key press
//! 4. **Event Loop**: Read input until quit; rejected operations are logged
//!    and never fatal
//! 5. **Teardown**: Restore the terminal even when the loop returns an error
//!
//! # Keybindings
//!
//! In browse mode:
//! - `j`/`Down`, `k`/`Up`: Move selection (wraps around)
//! - `Space`/`Enter`: Toggle the selected item
//! - `d`/`x`: Delete the selected item
//! - `e`: Edit the selected item via a modal prompt
//! - `a`: Open the new-item entry box
//! - `/`: Open the search entry box, prefilled with the active term
//! - `h`: Toggle hiding of completed items
//! - `Esc`: Clear the active search
//! - `q`, `Ctrl+C`: Quit
//!
//! In entry mode:
//! - Printable keys: Type into the buffer
//! - `Enter`: Submit
//! - `Esc`: Cancel without submitting
//!
//! In the edit prompt:
//! - `Enter`: Commit the new name
//! - `Esc`, `Ctrl+C`: Cancel, keeping the current name

#![allow(clippy::multiple_crate_versions)]

use std::io;

use crossterm::event::{self, Event as CrosstermEvent, KeyEventKind};
use crossterm::{cursor, execute, terminal};

use shoplist::observability::init_tracing;
use shoplist::ui::{KeyOutcome, Screen};
use shoplist::{initialize, Config, Theme, ViewRenderer};

fn main() -> shoplist::Result<()> {
    let config = Config::load();
    init_tracing(&config);

    let startup = tracing::debug_span!("startup").entered();
    let theme = Theme::resolve(&config);
    let mut renderer = ViewRenderer::new(initialize(&config));

    let (cols, rows) = terminal::size()?;
    let mut screen = Screen::new(theme, rows as usize, cols as usize);
    tracing::debug!(rows, cols, item_count = renderer.store().len(), "startup complete");
    drop(startup);

    terminal::enable_raw_mode()?;
    if let Err(error) = execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide) {
        terminal::disable_raw_mode().ok();
        return Err(error.into());
    }

    renderer.render(&mut screen);

    let result = run_event_loop(&mut renderer, &mut screen);

    execute!(io::stdout(), cursor::Show, terminal::LeaveAlternateScreen).ok();
    terminal::disable_raw_mode().ok();

    result
}

/// Reads terminal events until the user quits.
///
/// Key presses go through the screen's key interpreter; produced events are
/// forwarded to the view renderer. Store rejections (missing ids, blank
/// names) are logged and the loop continues.
fn run_event_loop(renderer: &mut ViewRenderer, screen: &mut Screen) -> shoplist::Result<()> {
    loop {
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                match screen.on_key(&key) {
                    KeyOutcome::Dispatch(event) => {
                        if let Err(error) = renderer.handle(&event, screen) {
                            tracing::warn!(error = %error, "operation rejected");
                        }
                    }
                    KeyOutcome::Repaint => screen.repaint(),
                    KeyOutcome::Quit => {
                        tracing::debug!("quit requested");
                        return Ok(());
                    }
                    KeyOutcome::Ignored => {}
                }
            }
            CrosstermEvent::Resize(cols, rows) => {
                screen.resize(rows as usize, cols as usize);
                screen.repaint();
            }
            _ => {}
        }
    }
}
