//! Error types for the shoplist crate.
//!
//! This module defines the centralized error type [`ShoplistError`] and a type
//! alias [`Result`] for convenient error handling throughout the crate. All
//! errors are implemented using the `thiserror` crate for automatic `Error`
//! trait implementation.
//!
//! List mutations fail in exactly two domain-level ways: the referenced item
//! id does not exist ([`ShoplistError::NotFound`]) or a submitted name is
//! blank after trimming ([`ShoplistError::BlankName`]). Neither is fatal; the
//! event loop logs the failure and carries on. The remaining variants cover
//! the surrounding program (terminal I/O, configuration, themes).

use crate::domain::item::ItemId;
use thiserror::Error;

/// The main error type for shoplist operations.
///
/// Consolidates all error conditions that can occur while running the list,
/// from failed item lookups to terminal I/O and configuration problems.
///
/// # Examples
///
/// ```
/// use shoplist::{ShoplistError, ItemId};
///
/// let err = ShoplistError::NotFound { id: ItemId::new("0-missing") };
/// assert_eq!(err.to_string(), "no item with id 0-missing");
/// ```
#[derive(Debug, Error)]
pub enum ShoplistError {
    /// A mutation referenced an item id that is not in the store.
    ///
    /// Reported to the caller as a failed operation; the store is left
    /// unchanged and the process keeps running.
    #[error("no item with id {id}")]
    NotFound {
        /// The id that failed to resolve.
        id: ItemId,
    },

    /// A submitted item name was empty or whitespace-only.
    ///
    /// Add and rename require a non-empty name after trimming. The operation
    /// is a no-op; callers surface this as a warning rather than a failure.
    #[error("item name is blank")]
    BlankName,

    /// Terminal or filesystem I/O failed.
    ///
    /// Wraps errors from standard library and crossterm I/O operations.
    /// Automatically converts from `std::io::Error` via `#[from]`.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file is invalid or malformed.
    ///
    /// The string describes the specific configuration problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Theme loading or parsing failed.
    ///
    /// Occurs when a theme file cannot be read or its TOML cannot be parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for shoplist operations.
///
/// This is a type alias for `std::result::Result<T, ShoplistError>` that
/// simplifies function signatures throughout the codebase.
///
/// # Examples
///
/// ```
/// use shoplist::Result;
///
/// fn validate_name(name: &str) -> Result<()> {
///     if name.trim().is_empty() {
///         return Err(shoplist::ShoplistError::BlankName);
///     }
///     Ok(())
/// }
///
/// assert!(validate_name("apples").is_ok());
/// assert!(validate_name("   ").is_err());
/// ```
pub type Result<T> = std::result::Result<T, ShoplistError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_names_the_missing_id() {
        let err = ShoplistError::NotFound {
            id: ItemId::new("abc123"),
        };
        assert_eq!(err.to_string(), "no item with id abc123");
    }

    #[test]
    fn io_errors_convert_automatically() {
        fn read() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }
        assert!(matches!(read(), Err(ShoplistError::Io(_))));
    }
}
