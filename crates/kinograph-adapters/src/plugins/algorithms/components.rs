//! Union-find and connected components.

use kinograph_core::graph::actor::ActorStore;

// ============================================================================
// Union-Find
// ============================================================================

/// Disjoint-set forest with path compression and union by size.
///
/// Elements are dense indices `0..n`, normally [`NodeId`] slots. Built fresh
/// for each run and owned by it.
///
/// [`NodeId`]: kinograph_common::types::NodeId
#[derive(Debug, Clone)]
pub struct UnionFind {
    parent: Vec<usize>,
    size: Vec<usize>,
    components: usize,
}

impl UnionFind {
    /// Creates `n` singleton sets.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            size: vec![1; n],
            components: n,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if there are no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Returns the representative of `x`'s set, compressing the path walked.
    pub fn find(&mut self, mut x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        while self.parent[x] != root {
            let next = self.parent[x];
            self.parent[x] = root;
            x = next;
        }
        root
    }

    /// Merges the sets holding `a` and `b`. The larger set's representative
    /// survives. Returns `false` if they were already one set.
    pub fn union(&mut self, a: usize, b: usize) -> bool {
        let mut a = self.find(a);
        let mut b = self.find(b);
        if a == b {
            return false;
        }
        if self.size[a] < self.size[b] {
            std::mem::swap(&mut a, &mut b);
        }
        self.parent[b] = a;
        self.size[a] += self.size[b];
        self.components -= 1;
        true
    }

    /// Returns `true` if `a` and `b` are in the same set.
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }

    /// Returns the size of the set holding `x`.
    pub fn set_size(&mut self, x: usize) -> usize {
        let root = self.find(x);
        self.size[root]
    }

    /// Returns the number of disjoint sets.
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components
    }
}

/// Counts connected components of the actor graph.
///
/// Actors with no shared movie are components of their own.
pub fn connected_component_count(store: &ActorStore) -> usize {
    let mut sets = UnionFind::new(store.actor_count());
    for (_, movie) in store.movies() {
        if let Some((first, rest)) = movie.cast().split_first() {
            for other in rest {
                sets.union(first.index(), other.index());
            }
        }
    }
    sets.component_count()
}
