//! Shopping item domain model.
//!
//! This module defines the core [`Item`] type representing one entry on the
//! shopping list, together with its opaque identifier [`ItemId`]. Items are
//! owned exclusively by the list store; identifiers are minted once at
//! creation and never change afterwards.

use std::fmt;

/// Opaque unique identifier for a shopping item.
///
/// Wraps the string produced by the id minter (a UUID v7 in production,
/// sequential strings in tests). The inner representation is deliberately
/// hidden; callers compare, clone, and display ids but never interpret them.
///
/// # Examples
///
/// ```
/// use shoplist::ItemId;
///
/// let id = ItemId::new("0192d5e0-7b3a-7c41-a000-000000000001");
/// assert_eq!(id.to_string(), id.as_str());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ItemId(String);

impl ItemId {
    /// Wraps a raw id string.
    ///
    /// Used by minters when creating items and by adapters when echoing an
    /// id back into an event.
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One entry on the shopping list.
///
/// An item is a named label with a completion state. The `id` is assigned at
/// creation and immutable thereafter; `name` and `checked` are mutated in
/// place by the store's rename and toggle operations.
///
/// # Fields
///
/// - `id`: opaque unique identifier, stable for the item's lifetime
/// - `name`: display label, always non-empty after trimming
/// - `checked`: whether the item has been ticked off
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub checked: bool,
}

impl Item {
    /// Creates a new unchecked item with the given id and name.
    ///
    /// The store's add path trims and validates the name before calling this;
    /// seeded construction may set `checked` afterwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use shoplist::{Item, ItemId};
    ///
    /// let item = Item::new(ItemId::new("a1"), "apples".to_string());
    /// assert_eq!(item.name, "apples");
    /// assert!(!item.checked);
    /// ```
    #[must_use]
    pub fn new(id: ItemId, name: String) -> Self {
        Self {
            id,
            name,
            checked: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_items_start_unchecked() {
        let item = Item::new(ItemId::new("x"), "bread".to_string());
        assert!(!item.checked);
        assert_eq!(item.id.as_str(), "x");
    }

    #[test]
    fn ids_compare_by_value() {
        assert_eq!(ItemId::new("a"), ItemId::new("a"));
        assert_ne!(ItemId::new("a"), ItemId::new("b"));
    }

    #[test]
    fn id_displays_inner_string() {
        assert_eq!(ItemId::new("42").to_string(), "42");
    }
}
