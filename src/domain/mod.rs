//! Domain layer for the shoplist crate.
//!
//! This module contains the core domain types and rules for the shopping
//! list, independent of terminal APIs or infrastructure concerns: the item
//! model, the id-minting seam, and the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Item model and opaque identifiers
//! - [`id`]: Id-minting trait and the UUID-backed production minter
//!
//! # Examples
//!
//! ```
//! use shoplist::domain::{Item, ItemId};
//!
//! let item = Item::new(ItemId::new("a1"), "oranges".to_string());
//! assert!(!item.checked);
//! ```

pub mod error;
pub mod id;
pub mod item;

pub use error::{Result, ShoplistError};
pub use id::{IdMinter, UuidMinter};
pub use item::{Item, ItemId};
