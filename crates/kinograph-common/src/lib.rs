//! # kinograph-common
//!
//! Foundation layer for Kinograph: identifier types, errors, and hashing
//! utilities.
//!
//! This crate has no internal dependencies and should be kept minimal.
//!
//! ## Modules
//!
//! - [`types`] - Core type definitions (NodeId, EdgeId)
//! - [`utils`] - Utility functions and helpers (hashing, errors)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod types;
pub mod utils;

// Re-export commonly used types at crate root
pub use types::{EdgeId, NodeId};
pub use utils::error::{Error, Result};
