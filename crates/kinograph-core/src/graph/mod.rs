//! Graph model implementations.
//!
//! - [`actor`] - Bipartite collaboration graph: actors joined by movies
//! - [`city`] - Planar road graph: cities with coordinates joined by roads
//! - [`path`] - Rendered shortest paths shared by both models

pub mod actor;
pub mod city;
pub mod path;
