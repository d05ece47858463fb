//! Minimum spanning tree over the actor graph.

use super::components::UnionFind;
use kinograph_core::graph::actor::{ActorStore, Movie};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// One chosen tree edge: two actors joined by a movie.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeEdge {
    /// First actor, earlier in the movie's cast order.
    pub from: Arc<str>,
    /// Second actor.
    pub to: Arc<str>,
    /// Rendered movie key.
    pub movie: Arc<str>,
    /// The movie's weight.
    pub weight: u64,
}

impl fmt::Display for TreeEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})<--[{}]-->({})", self.from, self.movie, self.to)
    }
}

/// A spanning tree covering every actor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MstResult {
    /// Chosen edges in selection order.
    pub edges: Vec<TreeEdge>,
    /// Number of actors connected by the tree.
    pub node_count: usize,
    /// Sum of the weights of the movies used, each movie counted once.
    pub total_weight: u64,
}

impl MstResult {
    /// Number of chosen edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// The three summary lines without the edge listing.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "#NODE CONNECTED: {}\n#EDGE CHOSEN: {}\nTOTAL EDGE WEIGHTS: {}",
            self.node_count,
            self.edge_count(),
            self.total_weight
        )
    }
}

impl fmt::Display for MstResult {
    /// Edge lines followed by the summary, newline separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for edge in &self.edges {
            writeln!(f, "{edge}")?;
        }
        f.write_str(&self.summary())
    }
}

/// Builds a minimum spanning tree with Kruskal's algorithm.
///
/// Movies are taken in ascending weight, equal weights in insertion order.
/// Every pair of cast members in different components is joined and
/// recorded; a movie's weight enters the total once, however many pairs it
/// joins. Returns as soon as `actors - 1` edges are chosen.
///
/// Returns `None` for an empty store and for a graph that is not connected.
pub fn kruskal(store: &ActorStore) -> Option<MstResult> {
    let node_count = store.actor_count();
    if node_count == 0 {
        return None;
    }
    let target = node_count - 1;

    let mut result = MstResult {
        edges: Vec::with_capacity(target),
        node_count,
        total_weight: 0,
    };
    if target == 0 {
        return Some(result);
    }

    let mut movies: Vec<&Movie> = store.movies().map(|(_, m)| m).collect();
    movies.sort_by_key(|m| m.weight());

    let mut sets = UnionFind::new(node_count);
    for movie in movies {
        let cast = movie.cast();
        let mut counted = false;

        for (i, &a) in cast.iter().enumerate() {
            for &b in &cast[i + 1..] {
                if !sets.union(a.index(), b.index()) {
                    continue;
                }
                if !counted {
                    result.total_weight += movie.weight();
                    counted = true;
                }
                result.edges.push(TreeEdge {
                    from: Arc::clone(store.actor(a).name_arc()),
                    to: Arc::clone(store.actor(b).name_arc()),
                    movie: Arc::clone(movie.label_arc()),
                    weight: movie.weight(),
                });
                if result.edges.len() == target {
                    tracing::debug!(
                        nodes = node_count,
                        weight = result.total_weight,
                        "spanning tree complete"
                    );
                    return Some(result);
                }
            }
        }
    }

    tracing::debug!(
        nodes = node_count,
        chosen = result.edges.len(),
        components = sets.component_count(),
        "graph is not connected, no spanning tree"
    );
    None
}
