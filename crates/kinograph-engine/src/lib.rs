//! # kinograph-engine
//!
//! The main entry point for Kinograph: graph facades over the stores,
//! configuration, and batch runners that answer query files.
//!
//! ## Modules
//!
//! - [`config`] - Weighting, top-K and heuristic settings
//! - [`actor_graph`] - [`ActorGraph`]: paths, spanning tree, link prediction
//! - [`city_graph`] - [`CityGraph`]: A* navigation
//! - [`batch`] - Query-file runners producing the line-oriented reports
//!
//! ```
//! use kinograph_engine::{ActorGraph, Config};
//!
//! let graph = ActorGraph::with_config(Config::weighted()).unwrap();
//! graph.insert("A", "m1", 2011);
//! graph.insert("B", "m1", 2011);
//!
//! let path = graph.shortest_path("A", "B", true).unwrap();
//! assert_eq!(path.to_string(), "(A)--[m1#@2011]-->(B)");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod actor_graph;
pub mod batch;
pub mod city_graph;
pub mod config;

pub use actor_graph::{ActorGraph, ActorGraphStats};
pub use batch::BatchSummary;
pub use city_graph::{CityGraph, CityGraphStats};
pub use config::Config;
pub use kinograph_core::graph::actor::Weighting;
pub use kinograph_core::graph::path::Path;
