//! Interaction events emitted by the rendering adapter.
//!
//! This module defines the [`Event`] enum, the complete vocabulary of user
//! interactions that reach the core. The adapter is responsible for resolving
//! a raw interaction target (a clicked row, the selected line) to the owning
//! item's id before dispatching; the core never inspects adapter internals.
//!
//! Each event maps to exactly one [`ViewRenderer`](crate::app::ViewRenderer)
//! operation, which performs one store mutation followed by one re-render.

use crate::domain::ItemId;

/// Interaction events carrying the minimal payload each operation needs.
///
/// Events are produced by the adapter (keyboard handling in the terminal
/// surface) and consumed sequentially by
/// [`ViewRenderer::handle`](crate::app::ViewRenderer::handle), ensuring
/// deterministic state transitions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// A new item name was submitted from the entry field.
    SubmitNewItem(String),
    /// The completion toggle was activated on the item with this id.
    ToggleItem(ItemId),
    /// The delete control was activated on the item with this id.
    DeleteItem(ItemId),
    /// The edit control was activated on the item with this id.
    ///
    /// Handling this event opens the adapter's synchronous text prompt.
    EditItem(ItemId),
    /// The hide-completed filter control was toggled.
    ToggleHideCompleted,
    /// A search term was submitted from the search field.
    ///
    /// A blank term clears the active filter.
    SubmitSearch(String),
}
