//! Application layer coordinating the list store, events, and rendering.
//!
//! This module defines the core application logic layer, sitting between the
//! terminal adapter (main.rs and the ui layer) and the domain layer. It
//! implements the event-driven flow that powers the interactive list.
//!
//! # Architecture
//!
//! The application layer follows a unidirectional data flow pattern:
//!
//! ```text
//! User Input → Events → ViewRenderer → ListStore Mutation → Filtered View → Surface Paint
//! ```
//!
//! # Modules
//!
//! - [`events`]: Interaction events reported by the adapter
//! - [`store`]: The list store holding items and view filters
//! - [`surface`]: The rendering surface abstraction and its row type
//! - [`view`]: Event dispatch and the one-mutation-one-repaint policy
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
//! renderer.handle(&Event::ToggleHideCompleted, &mut NullSurface)?;
//! assert!(renderer.store().hide_completed());
//! # Ok::<(), shoplist::ShoplistError>(())
//! ```

pub mod events;
pub mod store;
pub mod surface;
pub mod view;

pub use events::Event;
pub use store::ListStore;
pub use surface::{Surface, ViewItem};
pub use view::ViewRenderer;
