//! List state management and filtered view computation.
//!
//! This module defines [`ListStore`], the single source of truth for the
//! shopping list. It owns the canonical item collection and the two display
//! filters (hide-completed, search term), and exposes every mutation the
//! system supports plus the read-only filtered query the renderer consumes.
//!
//! # Architecture
//!
//! All mutation and filtering logic lives here so the view layer never
//! inspects or mutates raw state directly. Fields are private; the renderer
//! sees only [`ListStore::filtered_view`] and the flag accessors.
//!
//! # Filtering
//!
//! [`ListStore::filtered_view`] applies two named predicates in order:
//! first the hide-completed filter drops checked items, then the search
//! filter keeps case-insensitive substring matches. The result is a fresh
//! sequence in insertion order; the store is never mutated by a query.

use crate::domain::{IdMinter, Item, ItemId, Result, ShoplistError};
use crate::SeedItem;
use std::fmt;

/// Keeps an item visible while the hide-completed filter is active.
fn passes_hide_completed(item: &Item) -> bool {
    !item.checked
}

/// Keeps an item whose name contains the search needle.
///
/// The needle must already be lowercased; the item name is lowercased per
/// call so the comparison is case-insensitive on both sides.
fn matches_search_term(item: &Item, needle: &str) -> bool {
    item.name.to_lowercase().contains(needle)
}

/// Single source of truth for items and display filters.
///
/// Created once at startup (seeded from configuration) and owned by the
/// process-lifetime root. Mutated by [`ViewRenderer`](crate::app::ViewRenderer)
/// in response to interaction events; queried via [`ListStore::filtered_view`]
/// on every render.
///
/// # Examples
///
/// ```
/// use shoplist::ListStore;
///
/// let mut store = ListStore::default();
/// store.add_item("apples")?;
/// store.set_search_term("app");
/// assert_eq!(store.filtered_view().len(), 1);
/// # Ok::<(), shoplist::ShoplistError>(())
/// ```
pub struct ListStore {
    /// Canonical ordered item collection.
    ///
    /// Insertion order is display order; no sorting is ever applied.
    items: Vec<Item>,

    /// When true, the filtered view excludes checked items.
    hide_completed: bool,

    /// Active search filter, trimmed. `None` means no filter.
    ///
    /// Normalized by [`ListStore::set_search_term`]: blank input clears.
    search_term: Option<String>,

    /// Source of unique ids, consulted once per added item.
    minter: Box<dyn IdMinter>,
}

impl ListStore {
    /// Creates an empty store backed by the given id minter.
    #[must_use]
    pub fn new(minter: Box<dyn IdMinter>) -> Self {
        Self {
            items: Vec::new(),
            hide_completed: false,
            search_term: None,
            minter,
        }
    }

    /// Creates a store pre-populated from configured seed items.
    ///
    /// Seeds go through the same blank-name policy as [`ListStore::add_item`]
    /// (blank names are skipped with a log line) but may start checked, which
    /// the add path never produces. Ids are minted normally.
    #[must_use]
    pub fn seeded(minter: Box<dyn IdMinter>, seeds: &[SeedItem]) -> Self {
        let mut store = Self::new(minter);

        for seed in seeds {
            let trimmed = seed.name.trim();
            if trimmed.is_empty() {
                tracing::debug!("skipping blank seed item");
                continue;
            }

            let id = store.minter.mint();
            let mut item = Item::new(id, trimmed.to_string());
            item.checked = seed.checked;
            store.items.push(item);
        }

        tracing::debug!(item_count = store.items.len(), "store seeded");
        store
    }

    /// Appends a new unchecked item with a freshly minted id.
    ///
    /// The name is trimmed before storage. A name that is empty after
    /// trimming is rejected without mutating the store.
    ///
    /// # Errors
    ///
    /// Returns [`ShoplistError::BlankName`] if `name` trims to empty.
    ///
    /// # Examples
    ///
    /// ```
    /// use shoplist::ListStore;
    ///
    /// let mut store = ListStore::default();
    /// store.add_item("  bread  ")?;
    /// assert_eq!(store.items()[0].name, "bread");
    /// assert!(store.add_item("   ").is_err());
    /// # Ok::<(), shoplist::ShoplistError>(())
    /// ```
    pub fn add_item(&mut self, name: &str) -> Result<()> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(ShoplistError::BlankName);
        }

        let id = self.minter.mint();
        tracing::debug!(name = %trimmed, id = %id, "adding item to shopping list");
        self.items.push(Item::new(id, trimmed.to_string()));
        Ok(())
    }

    /// Flips the completion state of the item with the given id.
    ///
    /// # Errors
    ///
    /// Returns [`ShoplistError::NotFound`] if no item has that id; the store
    /// is left unchanged.
    pub fn toggle_checked(&mut self, id: &ItemId) -> Result<()> {
        let item = self.find_mut(id)?;
        item.checked = !item.checked;
        tracing::debug!(id = %id, checked = item.checked, "toggled checked state");
        Ok(())
    }

    /// Removes the item with the given id.
    ///
    /// Exactly one item is removed; all other items keep their relative
    /// order.
    ///
    /// # Errors
    ///
    /// Returns [`ShoplistError::NotFound`] if no item has that id.
    pub fn delete_item(&mut self, id: &ItemId) -> Result<()> {
        let index = self
            .items
            .iter()
            .position(|item| &item.id == id)
            .ok_or_else(|| ShoplistError::NotFound { id: id.clone() })?;

        self.items.remove(index);
        tracing::debug!(id = %id, remaining = self.items.len(), "deleted item from shopping list");
        Ok(())
    }

    /// Replaces the name of the item with the given id.
    ///
    /// The new name is trimmed before storage; id and checked state are
    /// unaffected.
    ///
    /// # Errors
    ///
    /// Returns [`ShoplistError::BlankName`] if `new_name` trims to empty, or
    /// [`ShoplistError::NotFound`] if no item has that id. Neither mutates
    /// the store.
    pub fn rename_item(&mut self, id: &ItemId, new_name: &str) -> Result<()> {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return Err(ShoplistError::BlankName);
        }

        let item = self.find_mut(id)?;
        tracing::debug!(id = %id, from = %item.name, to = %trimmed, "renaming item");
        item.name = trimmed.to_string();
        Ok(())
    }

    /// Sets the hide-completed display flag unconditionally.
    pub fn set_hide_completed(&mut self, hide: bool) {
        self.hide_completed = hide;
        tracing::debug!(hide_completed = hide, "hide-completed filter set");
    }

    /// Sets or clears the active search filter.
    ///
    /// Input is trimmed; empty or whitespace-only input normalizes to
    /// "no filter" and clears any active term.
    pub fn set_search_term(&mut self, raw: &str) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            if self.search_term.take().is_some() {
                tracing::debug!("search filter cleared");
            }
        } else {
            tracing::debug!(term = %trimmed, "search filter set");
            self.search_term = Some(trimmed.to_string());
        }
    }

    /// Returns the current hide-completed flag.
    #[must_use]
    pub fn hide_completed(&self) -> bool {
        self.hide_completed
    }

    /// Returns the active search term, if any.
    #[must_use]
    pub fn search_term(&self) -> Option<&str> {
        self.search_term.as_deref()
    }

    /// Returns the full item collection in insertion order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Returns the number of items, ignoring filters.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the store holds no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Computes the current filtered view.
    ///
    /// Applies, in order: the hide-completed filter (drops checked items),
    /// then the search filter (keeps case-insensitive substring matches).
    /// Returns a fresh sequence in insertion order; never mutates the store.
    ///
    /// # Tracing
    ///
    /// Creates a debug-level span with item count and active filter state.
    ///
    /// # Examples
    ///
    /// ```
    /// use shoplist::ListStore;
    ///
    /// let mut store = ListStore::default();
    /// store.add_item("apples")?;
    /// store.add_item("oranges")?;
    /// store.set_search_term("APP");
    /// let view = store.filtered_view();
    /// assert_eq!(view.len(), 1);
    /// assert_eq!(view[0].name, "apples");
    /// # Ok::<(), shoplist::ShoplistError>(())
    /// ```
    #[must_use]
    pub fn filtered_view(&self) -> Vec<&Item> {
        let _span = tracing::debug_span!(
            "filtered_view",
            total_items = self.items.len(),
            hide_completed = self.hide_completed,
            has_search = self.search_term.is_some()
        )
        .entered();

        let needle = self.search_term.as_ref().map(|term| term.to_lowercase());

        let view: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| !self.hide_completed || passes_hide_completed(item))
            .filter(|item| {
                needle
                    .as_deref()
                    .map_or(true, |needle| matches_search_term(item, needle))
            })
            .collect();

        tracing::debug!(visible_count = view.len(), "filters applied");
        view
    }

    fn find_mut(&mut self, id: &ItemId) -> Result<&mut Item> {
        self.items
            .iter_mut()
            .find(|item| &item.id == id)
            .ok_or_else(|| ShoplistError::NotFound { id: id.clone() })
    }
}

impl Default for ListStore {
    /// Creates an empty store backed by the production UUID minter.
    fn default() -> Self {
        Self::new(Box::new(crate::domain::UuidMinter))
    }
}

impl fmt::Debug for ListStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ListStore")
            .field("items", &self.items)
            .field("hide_completed", &self.hide_completed)
            .field("search_term", &self.search_term)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    /// Deterministic minter so tests can predict and fabricate ids.
    struct SequentialMinter(usize);

    impl IdMinter for SequentialMinter {
        fn mint(&mut self) -> ItemId {
            self.0 += 1;
            ItemId::new(format!("item-{}", self.0))
        }
    }

    fn store() -> ListStore {
        ListStore::new(Box::new(SequentialMinter(0)))
    }

    fn seeded_store(seeds: &[(&str, bool)]) -> ListStore {
        let seeds: Vec<SeedItem> = seeds
            .iter()
            .map(|(name, checked)| SeedItem {
                name: (*name).to_string(),
                checked: *checked,
            })
            .collect();
        ListStore::seeded(Box::new(SequentialMinter(0)), &seeds)
    }

    fn names(view: &[&Item]) -> Vec<String> {
        view.iter().map(|item| item.name.clone()).collect()
    }

    #[test]
    fn added_ids_are_pairwise_distinct() {
        let mut store = store();
        for name in ["apples", "oranges", "milk", "bread"] {
            store.add_item(name).unwrap();
        }

        let ids: HashSet<ItemId> = store.items().iter().map(|item| item.id.clone()).collect();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn blank_add_is_a_noop() {
        let mut store = store();
        assert!(matches!(store.add_item(""), Err(ShoplistError::BlankName)));
        assert!(matches!(
            store.add_item("   "),
            Err(ShoplistError::BlankName)
        ));
        assert!(store.is_empty());
    }

    #[test]
    fn add_trims_and_appends_unchecked() {
        let mut store = store();
        store.add_item("apples").unwrap();
        store.add_item("  bananas  ").unwrap();

        assert_eq!(store.len(), 2);
        let last = &store.items()[1];
        assert_eq!(last.name, "bananas");
        assert!(!last.checked);
    }

    #[test]
    fn toggle_twice_restores_original_state() {
        let mut store = store();
        store.add_item("milk").unwrap();
        let id = store.items()[0].id.clone();

        store.toggle_checked(&id).unwrap();
        assert!(store.items()[0].checked);

        store.toggle_checked(&id).unwrap();
        assert!(!store.items()[0].checked);
    }

    #[test]
    fn toggle_missing_id_reports_not_found() {
        let mut store = store();
        store.add_item("milk").unwrap();

        let missing = ItemId::new("item-999");
        assert!(matches!(
            store.toggle_checked(&missing),
            Err(ShoplistError::NotFound { .. })
        ));
        assert!(!store.items()[0].checked);
    }

    #[test]
    fn delete_removes_exactly_one_and_preserves_order() {
        let mut store = store();
        for name in ["apples", "oranges", "milk"] {
            store.add_item(name).unwrap();
        }
        let middle = store.items()[1].id.clone();

        store.delete_item(&middle).unwrap();

        assert_eq!(store.len(), 2);
        assert!(store.items().iter().all(|item| item.id != middle));
        assert_eq!(names(&store.filtered_view()), vec!["apples", "milk"]);
    }

    #[test]
    fn delete_missing_id_reports_not_found() {
        let mut store = store();
        store.add_item("apples").unwrap();

        assert!(matches!(
            store.delete_item(&ItemId::new("item-999")),
            Err(ShoplistError::NotFound { .. })
        ));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn rename_replaces_name_in_place() {
        let mut store = seeded_store(&[("milk", true)]);
        let id = store.items()[0].id.clone();

        store.rename_item(&id, "  oat milk ").unwrap();

        let item = &store.items()[0];
        assert_eq!(item.name, "oat milk");
        assert_eq!(item.id, id);
        assert!(item.checked);
    }

    #[test]
    fn rename_missing_id_reports_not_found() {
        let mut store = store();
        store.add_item("apples").unwrap();

        let result = store.rename_item(&ItemId::new("item-999"), "x");
        assert!(matches!(result, Err(ShoplistError::NotFound { .. })));
        assert_eq!(store.items()[0].name, "apples");
    }

    #[test]
    fn rename_blank_is_a_noop() {
        let mut store = store();
        store.add_item("apples").unwrap();
        let id = store.items()[0].id.clone();

        assert!(matches!(
            store.rename_item(&id, "   "),
            Err(ShoplistError::BlankName)
        ));
        assert_eq!(store.items()[0].name, "apples");
    }

    #[test]
    fn hide_completed_drops_checked_items() {
        let mut store = seeded_store(&[("apples", false), ("oranges", true), ("milk", true)]);
        store.set_hide_completed(true);

        let view = store.filtered_view();
        assert_eq!(names(&view), vec!["apples"]);
        assert!(!view[0].checked);
    }

    #[test]
    fn search_matches_case_insensitive_substring() {
        let mut store = seeded_store(&[("apples", false), ("oranges", false), ("milk", false)]);

        store.set_search_term("app");
        assert_eq!(names(&store.filtered_view()), vec!["apples"]);

        store.set_search_term("ORANGE");
        assert_eq!(names(&store.filtered_view()), vec!["oranges"]);
    }

    #[test]
    fn combined_filters_compose() {
        let mut store = seeded_store(&[("milk", false), ("milk2", true)]);
        store.set_hide_completed(true);
        store.set_search_term("milk");

        assert_eq!(names(&store.filtered_view()), vec!["milk"]);
    }

    #[test]
    fn blank_search_term_clears_filter() {
        let mut store = seeded_store(&[("apples", false), ("milk", false)]);

        store.set_search_term("milk");
        assert_eq!(store.filtered_view().len(), 1);

        store.set_search_term("   ");
        assert!(store.search_term().is_none());
        assert_eq!(store.filtered_view().len(), 2);
    }

    #[test]
    fn filtered_view_is_fresh_and_never_mutates() {
        let mut store = seeded_store(&[("apples", false), ("oranges", true)]);
        store.set_hide_completed(true);

        let first = names(&store.filtered_view());
        let second = names(&store.filtered_view());

        assert_eq!(first, second);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn round_trip_add_then_view() {
        let mut store = store();
        store.add_item("bananas").unwrap();

        let view = store.filtered_view();
        assert!(view
            .iter()
            .any(|item| item.name == "bananas" && !item.checked));
    }

    #[test]
    fn seeding_skips_blank_names_and_keeps_checked_state() {
        let store = seeded_store(&[("apples", false), ("   ", false), ("milk", true)]);

        assert_eq!(store.len(), 2);
        assert_eq!(store.items()[1].name, "milk");
        assert!(store.items()[1].checked);
    }
}
