//! Shared building blocks: heap entries, orderings, and per-run search state.

use kinograph_common::types::{EdgeId, NodeId};
use kinograph_core::graph::path::Path;
use std::cmp::Ordering;
use std::sync::Arc;

// ============================================================================
// Orderings
// ============================================================================

/// Name comparator for traversal frontiers.
///
/// Compares in descending order. Under [`std::collections::BinaryHeap`]'s
/// max-first semantics this makes the lexicographically smaller name pop
/// first among entries with equal scores.
#[must_use]
pub fn traversal_name_order(a: &str, b: &str) -> Ordering {
    b.cmp(a)
}

/// Comparator for link-prediction rankings: higher priority first, then
/// ascending name.
///
/// Use with `sort_by`. Independent of
/// [`traversal_name_order`].
#[must_use]
pub fn ranking_order(a: (&str, u32), b: (&str, u32)) -> Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0))
}

// ============================================================================
// Heap entries
// ============================================================================

/// A totally ordered score usable as a frontier key.
pub trait Score: Copy {
    /// Total order over scores.
    fn cmp_score(&self, other: &Self) -> Ordering;
}

impl Score for u64 {
    fn cmp_score(&self, other: &Self) -> Ordering {
        self.cmp(other)
    }
}

impl Score for f64 {
    fn cmp_score(&self, other: &Self) -> Ordering {
        self.total_cmp(other)
    }
}

/// Frontier entry for a min-priority queue built on
/// [`std::collections::BinaryHeap`].
///
/// The smallest score is the greatest entry; equal scores are broken by
/// [`traversal_name_order`].
#[derive(Debug, Clone)]
pub struct MinScored<S> {
    /// Priority key (running distance, or `g + w * h` for A*).
    pub score: S,
    /// Node this entry refers to.
    pub node: NodeId,
    /// The node's name, used for tie-breaking.
    pub name: Arc<str>,
}

impl<S> MinScored<S> {
    /// Creates an entry.
    pub fn new(score: S, node: NodeId, name: Arc<str>) -> Self {
        Self { score, node, name }
    }
}

impl<S: Score> PartialEq for MinScored<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: Score> Eq for MinScored<S> {}

impl<S: Score> PartialOrd for MinScored<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: Score> Ord for MinScored<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .score
            .cmp_score(&self.score)
            .then_with(|| traversal_name_order(&self.name, &other.name))
    }
}

// ============================================================================
// Search state
// ============================================================================

/// Per-run distances and predecessor links, indexed by [`NodeId`].
///
/// Built fresh for every query; nothing is written back to the store.
#[derive(Debug, Clone)]
pub struct SearchState<D> {
    infinity: D,
    distance: Vec<D>,
    predecessor: Vec<Option<(NodeId, Option<EdgeId>)>>,
}

impl<D: Copy + PartialEq> SearchState<D> {
    /// Creates state for `node_count` nodes, all at `infinity`.
    pub fn new(node_count: usize, infinity: D) -> Self {
        Self {
            infinity,
            distance: vec![infinity; node_count],
            predecessor: vec![None; node_count],
        }
    }

    /// Marks `node` as the source at distance `zero`.
    pub fn set_source(&mut self, node: NodeId, zero: D) {
        self.distance[node.index()] = zero;
        self.predecessor[node.index()] = None;
    }

    /// Returns the best known distance to `node`.
    #[must_use]
    pub fn distance(&self, node: NodeId) -> D {
        self.distance[node.index()]
    }

    /// Returns `true` if `node` has not been reached.
    #[must_use]
    pub fn is_unreached(&self, node: NodeId) -> bool {
        self.distance[node.index()] == self.infinity
    }

    /// Records a better distance to `node` through `from` along `via`.
    pub fn relax(&mut self, node: NodeId, distance: D, from: NodeId, via: Option<EdgeId>) {
        self.distance[node.index()] = distance;
        self.predecessor[node.index()] = Some((from, via));
    }

    /// Returns the predecessor link recorded for `node`.
    #[must_use]
    pub fn predecessor(&self, node: NodeId) -> Option<(NodeId, Option<EdgeId>)> {
        self.predecessor[node.index()]
    }

    /// Walks predecessor links back from `end` to `start` and renders the
    /// path in start-to-end order.
    ///
    /// Returns `None` if `end` was never reached.
    pub fn path_to<N, E>(
        &self,
        start: NodeId,
        end: NodeId,
        node_name: N,
        edge_label: E,
    ) -> Option<Path>
    where
        N: Fn(NodeId) -> Arc<str>,
        E: Fn(EdgeId) -> Arc<str>,
    {
        if self.is_unreached(end) {
            return None;
        }

        let mut steps = Vec::new();
        let mut current = end;
        while current != start {
            let (prev, via) = self.predecessor(current)?;
            steps.push((via, current));
            current = prev;
        }

        let mut path = Path::new(node_name(start));
        for (via, node) in steps.into_iter().rev() {
            path.push(via.map(&edge_label), node_name(node));
        }
        Some(path)
    }
}
