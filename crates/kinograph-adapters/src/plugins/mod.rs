//! Plugin system for Kinograph.
//!
//! ## Modules
//!
//! - [`algorithms`] - Graph algorithms (BFS, Dijkstra, A*, MST, link prediction)

pub mod algorithms;
