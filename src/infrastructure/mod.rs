//! Infrastructure layer for filesystem and environment interactions.
//!
//! This module provides utilities for locating configuration and data on
//! disk, following the XDG base directory convention.

pub mod paths;

pub use paths::{config_file, data_dir, expand_tilde};
