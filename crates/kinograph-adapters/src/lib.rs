//! # kinograph-adapters
//!
//! Adapters layer for Kinograph: graph algorithms and text importers.
//!
//! ## Modules
//!
//! - [`plugins`] - Algorithm plugins (paths, A*, spanning tree, link prediction)
//! - [`import`] - Line-oriented readers producing pre-parsed records

pub mod import;
pub mod plugins;
