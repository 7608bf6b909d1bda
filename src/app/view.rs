//! Event handling and render-trigger policy.
//!
//! This module implements [`ViewRenderer`], the glue between adapter-reported
//! interaction events and the list store. Every event is translated into
//! exactly one store mutation followed by exactly one re-render; the single
//! exception is a cancelled edit prompt, which performs neither.
//!
//! # Architecture
//!
//! The renderer follows a unidirectional flow:
//!
//! ```text
//! Event → ViewRenderer::handle → ListStore mutation → filtered_view → paint
//! ```
//!
//! Mutation failures (missing id, blank name) are returned to the event loop
//! after the repaint has already happened, so the screen always reflects the
//! store even when an operation was rejected. No failure is ever fatal.
//!
//! # Example
//!
//! ```
//! use shoplist::{Event, ListStore, Surface, ViewItem, ViewRenderer};
//!
//! struct NullSurface;
//! impl Surface for NullSurface {
//!     fn paint_list(&mut self, _items: &[ViewItem]) {}
//!     fn prompt_for_text(&mut self, _message: &str) -> Option<String> {
//!         None
//!     }
//! }
//!
//! let mut renderer = ViewRenderer::new(ListStore::default());
//! let mut surface = NullSurface;
//! renderer.handle(&Event::SubmitNewItem("apples".to_string()), &mut surface)?;
//! assert_eq!(renderer.store().len(), 1);
//! # Ok::<(), shoplist::ShoplistError>(())
//! ```

use crate::app::events::Event;
use crate::app::store::ListStore;
use crate::app::surface::{Surface, ViewItem};
use crate::domain::{ItemId, Result};

/// Message shown by the edit prompt.
const EDIT_PROMPT: &str = "What is your new item name?";

/// Maps interaction events onto store mutations and re-renders.
///
/// Owns the [`ListStore`]; the rendering surface is borrowed per call so the
/// event loop can keep using it for adapter-side concerns (selection
/// repaints, resize) between events.
#[derive(Debug)]
pub struct ViewRenderer {
    store: ListStore,
}

impl ViewRenderer {
    /// Creates a renderer owning the given store.
    #[must_use]
    pub fn new(store: ListStore) -> Self {
        Self { store }
    }

    /// Returns a read-only handle to the owned store.
    #[must_use]
    pub fn store(&self) -> &ListStore {
        &self.store
    }

    /// Processes one interaction event.
    ///
    /// Dispatches to the operation matching the event variant. Each
    /// operation performs its single store mutation and repaints the
    /// surface; the mutation outcome is returned afterwards so the event
    /// loop can report rejected operations.
    ///
    /// # Errors
    ///
    /// Returns [`ShoplistError::NotFound`](crate::ShoplistError::NotFound)
    /// when the event referenced a missing item and
    /// [`ShoplistError::BlankName`](crate::ShoplistError::BlankName) when a
    /// submitted name was blank. The repaint has already happened in both
    /// cases.
    ///
    /// # Tracing
    ///
    /// Each call creates a debug-level span carrying the event.
    pub fn handle(&mut self, event: &Event, surface: &mut dyn Surface) -> Result<()> {
        let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

        match event {
            Event::SubmitNewItem(name) => self.on_submit_new_item(name, surface),
            Event::ToggleItem(id) => self.on_toggle_item(id, surface),
            Event::DeleteItem(id) => self.on_delete_item(id, surface),
            Event::EditItem(id) => self.on_edit_item(id, surface),
            Event::ToggleHideCompleted => self.on_toggle_hide_completed(surface),
            Event::SubmitSearch(term) => self.on_submit_search(term, surface),
        }
    }

    /// Paints the current filtered view onto the surface.
    ///
    /// Maps each visible item to a [`ViewItem`] and hands the ordered
    /// sequence to the adapter. Safe to call at any time; painting is
    /// idempotent with respect to store state.
    pub fn render(&self, surface: &mut dyn Surface) {
        let view: Vec<ViewItem> = self
            .store
            .filtered_view()
            .into_iter()
            .map(ViewItem::from)
            .collect();

        tracing::debug!(item_count = view.len(), "painting shopping list");
        surface.paint_list(&view);
    }

    fn on_submit_new_item(&mut self, raw: &str, surface: &mut dyn Surface) -> Result<()> {
        let outcome = self.store.add_item(raw);
        // Repaint even when the add was rejected so the adapter's cleared
        // entry field matches what is on screen.
        self.render(surface);
        outcome
    }

    fn on_toggle_item(&mut self, id: &ItemId, surface: &mut dyn Surface) -> Result<()> {
        let outcome = self.store.toggle_checked(id);
        self.render(surface);
        outcome
    }

    fn on_delete_item(&mut self, id: &ItemId, surface: &mut dyn Surface) -> Result<()> {
        let outcome = self.store.delete_item(id);
        self.render(surface);
        outcome
    }

    fn on_edit_item(&mut self, id: &ItemId, surface: &mut dyn Surface) -> Result<()> {
        let Some(new_name) = surface.prompt_for_text(EDIT_PROMPT) else {
            tracing::debug!(id = %id, "edit cancelled, keeping current name");
            return Ok(());
        };

        let outcome = self.store.rename_item(id, &new_name);
        self.render(surface);
        outcome
    }

    fn on_toggle_hide_completed(&mut self, surface: &mut dyn Surface) -> Result<()> {
        let hide = !self.store.hide_completed();
        self.store.set_hide_completed(hide);
        self.render(surface);
        Ok(())
    }

    fn on_submit_search(&mut self, raw: &str, surface: &mut dyn Surface) -> Result<()> {
        self.store.set_search_term(raw);
        self.render(surface);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{IdMinter, ShoplistError};
    use crate::SeedItem;

    struct SequentialMinter(usize);

    impl IdMinter for SequentialMinter {
        fn mint(&mut self) -> ItemId {
            self.0 += 1;
            ItemId::new(format!("item-{}", self.0))
        }
    }

    /// Records every paint and answers prompts from a script.
    struct FakeSurface {
        paints: Vec<Vec<ViewItem>>,
        prompts: Vec<String>,
        prompt_reply: Option<String>,
    }

    impl FakeSurface {
        fn new() -> Self {
            Self {
                paints: Vec::new(),
                prompts: Vec::new(),
                prompt_reply: None,
            }
        }

        fn replying(reply: &str) -> Self {
            let mut surface = Self::new();
            surface.prompt_reply = Some(reply.to_string());
            surface
        }

        fn last_paint(&self) -> &[ViewItem] {
            self.paints.last().map(Vec::as_slice).unwrap_or(&[])
        }
    }

    impl Surface for FakeSurface {
        fn paint_list(&mut self, items: &[ViewItem]) {
            self.paints.push(items.to_vec());
        }

        fn prompt_for_text(&mut self, message: &str) -> Option<String> {
            self.prompts.push(message.to_string());
            self.prompt_reply.clone()
        }
    }

    fn renderer_with(seeds: &[(&str, bool)]) -> ViewRenderer {
        let seeds: Vec<SeedItem> = seeds
            .iter()
            .map(|(name, checked)| SeedItem {
                name: (*name).to_string(),
                checked: *checked,
            })
            .collect();
        ViewRenderer::new(ListStore::seeded(Box::new(SequentialMinter(0)), &seeds))
    }

    fn painted_names(paint: &[ViewItem]) -> Vec<&str> {
        paint.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn submit_new_item_adds_and_repaints() {
        let mut renderer = renderer_with(&[]);
        let mut surface = FakeSurface::new();

        renderer
            .handle(&Event::SubmitNewItem("apples".to_string()), &mut surface)
            .unwrap();

        assert_eq!(renderer.store().len(), 1);
        assert_eq!(surface.paints.len(), 1);
        assert_eq!(painted_names(surface.last_paint()), vec!["apples"]);
    }

    #[test]
    fn blank_submit_is_rejected_but_still_repaints() {
        let mut renderer = renderer_with(&[("apples", false)]);
        let mut surface = FakeSurface::new();

        let result = renderer.handle(&Event::SubmitNewItem("   ".to_string()), &mut surface);

        assert!(matches!(result, Err(ShoplistError::BlankName)));
        assert_eq!(renderer.store().len(), 1);
        assert_eq!(surface.paints.len(), 1);
    }

    #[test]
    fn toggle_flips_checked_state_in_painted_rows() {
        let mut renderer = renderer_with(&[("milk", false)]);
        let mut surface = FakeSurface::new();
        let id = renderer.store().items()[0].id.clone();

        renderer
            .handle(&Event::ToggleItem(id), &mut surface)
            .unwrap();

        assert!(surface.last_paint()[0].checked);
    }

    #[test]
    fn toggle_missing_id_reports_not_found_after_repaint() {
        let mut renderer = renderer_with(&[("milk", false)]);
        let mut surface = FakeSurface::new();

        let result = renderer.handle(&Event::ToggleItem(ItemId::new("item-999")), &mut surface);

        assert!(matches!(result, Err(ShoplistError::NotFound { .. })));
        assert_eq!(surface.paints.len(), 1);
    }

    #[test]
    fn delete_removes_the_row_and_repaints() {
        let mut renderer = renderer_with(&[("apples", false), ("oranges", false)]);
        let mut surface = FakeSurface::new();
        let id = renderer.store().items()[0].id.clone();

        renderer
            .handle(&Event::DeleteItem(id), &mut surface)
            .unwrap();

        assert_eq!(painted_names(surface.last_paint()), vec!["oranges"]);
    }

    #[test]
    fn edit_commit_renames_through_the_prompt() {
        let mut renderer = renderer_with(&[("milk", false)]);
        let mut surface = FakeSurface::replying("oat milk");
        let id = renderer.store().items()[0].id.clone();

        renderer.handle(&Event::EditItem(id), &mut surface).unwrap();

        assert_eq!(surface.prompts, vec!["What is your new item name?"]);
        assert_eq!(renderer.store().items()[0].name, "oat milk");
        assert_eq!(surface.paints.len(), 1);
    }

    #[test]
    fn edit_cancel_skips_mutation_and_repaint() {
        let mut renderer = renderer_with(&[("milk", false)]);
        let mut surface = FakeSurface::new();
        let id = renderer.store().items()[0].id.clone();

        renderer.handle(&Event::EditItem(id), &mut surface).unwrap();

        assert_eq!(renderer.store().items()[0].name, "milk");
        assert!(surface.paints.is_empty());
    }

    #[test]
    fn edit_blank_reply_is_a_noop_but_repaints() {
        let mut renderer = renderer_with(&[("milk", false)]);
        let mut surface = FakeSurface::replying("   ");
        let id = renderer.store().items()[0].id.clone();

        let result = renderer.handle(&Event::EditItem(id), &mut surface);

        assert!(matches!(result, Err(ShoplistError::BlankName)));
        assert_eq!(renderer.store().items()[0].name, "milk");
        assert_eq!(surface.paints.len(), 1);
    }

    #[test]
    fn hide_toggle_flips_flag_and_filters_paint() {
        let mut renderer = renderer_with(&[("apples", false), ("milk", true)]);
        let mut surface = FakeSurface::new();

        renderer
            .handle(&Event::ToggleHideCompleted, &mut surface)
            .unwrap();
        assert!(renderer.store().hide_completed());
        assert_eq!(painted_names(surface.last_paint()), vec!["apples"]);

        renderer
            .handle(&Event::ToggleHideCompleted, &mut surface)
            .unwrap();
        assert!(!renderer.store().hide_completed());
        assert_eq!(painted_names(surface.last_paint()), vec!["apples", "milk"]);
    }

    #[test]
    fn search_submit_filters_and_empty_submit_clears() {
        let mut renderer = renderer_with(&[("apples", false), ("oranges", false)]);
        let mut surface = FakeSurface::new();

        renderer
            .handle(&Event::SubmitSearch("app".to_string()), &mut surface)
            .unwrap();
        assert_eq!(painted_names(surface.last_paint()), vec!["apples"]);

        renderer
            .handle(&Event::SubmitSearch(String::new()), &mut surface)
            .unwrap();
        assert!(renderer.store().search_term().is_none());
        assert_eq!(painted_names(surface.last_paint()), vec!["apples", "oranges"]);
    }

    #[test]
    fn render_paints_items_in_insertion_order() {
        let renderer = renderer_with(&[("apples", false), ("milk", true)]);
        let mut surface = FakeSurface::new();

        renderer.render(&mut surface);

        let paint = surface.last_paint();
        assert_eq!(painted_names(paint), vec!["apples", "milk"]);
        assert!(!paint[0].checked);
        assert!(paint[1].checked);
    }

    #[test]
    fn every_handled_event_paints_exactly_once() {
        let mut renderer = renderer_with(&[("apples", false)]);
        let mut surface = FakeSurface::new();
        let id = renderer.store().items()[0].id.clone();

        let events = [
            Event::SubmitNewItem("oranges".to_string()),
            Event::ToggleItem(id.clone()),
            Event::ToggleHideCompleted,
            Event::SubmitSearch("a".to_string()),
            Event::DeleteItem(id),
        ];
        for event in &events {
            let _ = renderer.handle(event, &mut surface);
        }

        assert_eq!(surface.paints.len(), events.len());
    }
}
