//! Identifier generation for shopping items.
//!
//! This module defines the [`IdMinter`] seam between the store and whatever
//! supplies unique ids. The store never constructs ids itself; it asks the
//! minter once per added item. Production code uses [`UuidMinter`]; tests
//! substitute deterministic minters.

use crate::domain::item::ItemId;
use uuid::Uuid;

/// Source of unique item identifiers.
///
/// Implementations must return a distinct id on every call for the lifetime
/// of the process. The store owns its minter as a boxed trait object, so
/// alternative implementations (deterministic test minters, external id
/// services) can be swapped in without touching list logic.
pub trait IdMinter: Send {
    /// Mints a fresh globally-unique id.
    fn mint(&mut self) -> ItemId;
}

/// Production id minter backed by UUID version 7.
///
/// Version 7 UUIDs are time-ordered, so ids created later sort later, and
/// collision-free without any shared state. The string form is what the rest
/// of the system treats as the opaque id.
///
/// # Examples
///
/// ```
/// use shoplist::{IdMinter, UuidMinter};
///
/// let mut minter = UuidMinter;
/// let a = minter.mint();
/// let b = minter.mint();
/// assert_ne!(a, b);
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct UuidMinter;

impl IdMinter for UuidMinter {
    fn mint(&mut self) -> ItemId {
        ItemId::new(Uuid::now_v7().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn minted_ids_are_distinct() {
        let mut minter = UuidMinter;
        let ids: HashSet<ItemId> = (0..256).map(|_| minter.mint()).collect();
        assert_eq!(ids.len(), 256);
    }

    #[test]
    fn minted_ids_are_nonempty_strings() {
        let mut minter = UuidMinter;
        assert!(!minter.mint().as_str().is_empty());
    }
}
