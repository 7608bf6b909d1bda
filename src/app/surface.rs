//! Rendering adapter boundary.
//!
//! This module defines the [`Surface`] trait, the seam between the core and
//! whatever paints the list, together with [`ViewItem`], the display tuple
//! handed across that seam. The core calls the surface; it never reaches
//! around it to touch the terminal (or any other output device) directly.
//!
//! The production implementation is the crossterm-backed
//! [`Screen`](crate::ui::Screen); tests substitute a recording fake.

use crate::domain::{Item, ItemId};

/// Display-ready projection of one item.
///
/// Carries exactly the fields the adapter needs to paint a row: the opaque id
/// (so the adapter can resolve later interactions back to the item), the
/// name, and the completion state. A fresh sequence is built on every render;
/// the adapter never holds references into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewItem {
    /// Owning item's id, echoed back in toggle/delete/edit events.
    pub id: ItemId,
    /// Display label.
    pub name: String,
    /// Completion state, rendered as the checkbox mark.
    pub checked: bool,
}

impl From<&Item> for ViewItem {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            checked: item.checked,
        }
    }
}

/// Capabilities the core requires from a rendering adapter.
///
/// Both operations are synchronous. `paint_list` replaces the visible list
/// wholesale; `prompt_for_text` blocks the single UI thread until the user
/// confirms or cancels, which is exactly the modal semantics the edit flow
/// needs.
///
/// Implementations keep whatever presentation state they like (selection,
/// scroll position, entry buffers); the core only ever sees the two calls
/// below.
pub trait Surface {
    /// Replaces the visual representation with the given ordered items.
    fn paint_list(&mut self, items: &[ViewItem]);

    /// Synchronously prompts the user for a line of text.
    ///
    /// Returns `None` if the user cancelled, in which case the caller must
    /// not mutate any state.
    fn prompt_for_text(&mut self, message: &str) -> Option<String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn view_item_copies_all_fields() {
        let mut item = Item::new(ItemId::new("i1"), "milk".to_string());
        item.checked = true;

        let view = ViewItem::from(&item);
        assert_eq!(view.id, item.id);
        assert_eq!(view.name, "milk");
        assert!(view.checked);
    }
}
