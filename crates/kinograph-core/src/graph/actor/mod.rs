//! Actor/movie collaboration graph.
//!
//! Actors are nodes. A movie is a hyper-edge joining every actor credited in
//! it, so two actors are adjacent when they share at least one movie.

mod key;
mod store;
mod weighting;

pub use key::MovieKey;
pub use store::{ActorStore, ActorStoreConfig};
pub use weighting::Weighting;

use kinograph_common::types::{EdgeId, NodeId};
use smallvec::SmallVec;
use std::sync::Arc;

/// An actor node.
#[derive(Debug, Clone)]
pub struct Actor {
    name: Arc<str>,
    /// Incident movies, sorted by rendered movie key.
    movies: Vec<EdgeId>,
}

impl Actor {
    pub(crate) fn new(name: Arc<str>) -> Self {
        Self {
            name,
            movies: Vec::new(),
        }
    }

    /// Returns the actor's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a shared handle to the actor's name.
    #[must_use]
    pub fn name_arc(&self) -> &Arc<str> {
        &self.name
    }

    /// Returns the movies this actor appeared in, ordered by movie key.
    #[must_use]
    pub fn movies(&self) -> &[EdgeId] {
        &self.movies
    }

    /// Returns the number of movies this actor appeared in.
    #[must_use]
    pub fn degree(&self) -> usize {
        self.movies.len()
    }
}

/// A movie edge.
#[derive(Debug, Clone)]
pub struct Movie {
    key: MovieKey,
    /// `title#@year`, cached for ordering and rendering.
    label: Arc<str>,
    weight: u64,
    /// Credited actors, sorted by name.
    cast: SmallVec<[NodeId; 8]>,
}

impl Movie {
    pub(crate) fn new(key: MovieKey, weight: u64) -> Self {
        let label: Arc<str> = key.to_string().into();
        Self {
            key,
            label,
            weight,
            cast: SmallVec::new(),
        }
    }

    /// Returns the movie key.
    #[must_use]
    pub fn key(&self) -> &MovieKey {
        &self.key
    }

    /// Returns the rendered key, `title#@year`.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns a shared handle to the rendered key.
    #[must_use]
    pub fn label_arc(&self) -> &Arc<str> {
        &self.label
    }

    /// Returns the movie title.
    #[must_use]
    pub fn title(&self) -> &str {
        self.key.title()
    }

    /// Returns the release year.
    #[must_use]
    pub fn year(&self) -> u32 {
        self.key.year()
    }

    /// Returns the edge weight fixed when the movie was first inserted.
    #[must_use]
    pub fn weight(&self) -> u64 {
        self.weight
    }

    /// Returns the credited actors, ordered by name.
    #[must_use]
    pub fn cast(&self) -> &[NodeId] {
        &self.cast
    }
}
