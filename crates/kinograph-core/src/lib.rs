//! # kinograph-core
//!
//! Core layer for Kinograph: the in-memory graph stores and the value types
//! that flow through them.
//!
//! This crate depends only on `kinograph-common`. Stores are built once by
//! repeated insertion and are read-only while an analysis runs.
//!
//! ## Modules
//!
//! - [`graph`] - Actor/movie and city/road stores, rendered paths
//! - [`record`] - Pre-parsed input records consumed by the stores

pub mod graph;
pub mod record;

// Re-export commonly used types
pub use graph::actor::{Actor, ActorStore, ActorStoreConfig, Movie, MovieKey, Weighting};
pub use graph::city::{City, CityStore, Point};
pub use graph::path::{Hop, Path};
pub use record::{CastRecord, CityRecord, RoadRecord};
