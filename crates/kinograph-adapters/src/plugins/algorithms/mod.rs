//! Graph algorithms for Kinograph.
//!
//! Every algorithm borrows its store immutably and keeps per-run scratch
//! (distances, predecessors, priorities, heuristics) in a context built
//! fresh for that call, so a store can be queried any number of times and
//! from several threads at once.
//!
//! ## Algorithm Categories
//!
//! - [`traversal`] - Breadth-first shortest paths over the actor graph
//! - [`shortest_path`] - Dijkstra over the actor graph, A* over the city graph
//! - [`components`] - Union-find and connected component counts
//! - [`mst`] - Kruskal spanning tree over movie weights
//! - [`link_prediction`] - Two-hop collaborator ranking
//!
//! ## Usage
//!
//! ```
//! use kinograph_adapters::plugins::algorithms::{bfs_path, dijkstra_path};
//! use kinograph_core::graph::actor::{ActorStore, Weighting};
//!
//! let mut store = ActorStore::with_weighting(Weighting::default_age());
//! store.insert("A", "m1", 2011);
//! store.insert("B", "m1", 2011);
//!
//! let path = bfs_path(&store, "A", "B").unwrap();
//! assert_eq!(path.to_string(), "(A)--[m1#@2011]-->(B)");
//! assert_eq!(dijkstra_path(&store, "A", "B").unwrap().cost(), 9.0);
//! ```

mod components;
mod link_prediction;
mod mst;
mod shortest_path;
mod traits;
mod traversal;

// Core traits
pub use traits::{MinScored, Score, SearchState, ranking_order, traversal_name_order};

// Traversal algorithms
pub use traversal::bfs_path;

// Shortest path algorithms
pub use shortest_path::{astar, dijkstra_path, shortest_path};

// Component algorithms
pub use components::{UnionFind, connected_component_count};

// Minimum Spanning Tree algorithms
pub use mst::{MstResult, TreeEdge, kruskal};

// Link prediction
pub use link_prediction::{LinkPrediction, RankedActor, predict_links, tab_terminated};
