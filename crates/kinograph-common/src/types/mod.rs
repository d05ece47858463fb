//! Core type definitions for Kinograph.
//!
//! Identifier types ([`NodeId`], [`EdgeId`]) index into the arenas owned by
//! the graph stores.

mod id;

pub use id::{EdgeId, NodeId};
