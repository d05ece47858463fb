//! Actor graph store implementation.

use super::{Actor, Movie, MovieKey, Weighting};
use kinograph_common::types::{EdgeId, NodeId};
use kinograph_common::utils::hash::FastIndexMap;
use std::sync::Arc;

/// Configuration for the actor store.
#[derive(Debug, Clone)]
pub struct ActorStoreConfig {
    /// How movie years become edge weights.
    pub weighting: Weighting,
    /// Initial capacity for actors.
    pub initial_actor_capacity: usize,
    /// Initial capacity for movies.
    pub initial_movie_capacity: usize,
}

impl Default for ActorStoreConfig {
    fn default() -> Self {
        Self {
            weighting: Weighting::Unit,
            initial_actor_capacity: 1024,
            initial_movie_capacity: 1024,
        }
    }
}

/// The actor/movie graph store.
///
/// Actors and movies live in insertion-ordered arenas; a [`NodeId`] or
/// [`EdgeId`] is the slot index. Nothing is ever removed, so ids stay valid
/// for the lifetime of the store.
#[derive(Debug, Clone)]
pub struct ActorStore {
    /// Configuration.
    config: ActorStoreConfig,

    /// Actors keyed by name.
    actors: FastIndexMap<Arc<str>, Actor>,

    /// Movies keyed by rendered `title#@year`.
    movies: FastIndexMap<Arc<str>, Movie>,

    /// Number of distinct (actor, movie) credits.
    credit_count: usize,
}

impl ActorStore {
    /// Creates an unweighted store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ActorStoreConfig::default())
    }

    /// Creates a store with the given weighting and default capacities.
    #[must_use]
    pub fn with_weighting(weighting: Weighting) -> Self {
        Self::with_config(ActorStoreConfig {
            weighting,
            ..ActorStoreConfig::default()
        })
    }

    /// Creates a store with custom configuration.
    #[must_use]
    pub fn with_config(config: ActorStoreConfig) -> Self {
        Self {
            actors: FastIndexMap::with_capacity_and_hasher(
                config.initial_actor_capacity,
                Default::default(),
            ),
            movies: FastIndexMap::with_capacity_and_hasher(
                config.initial_movie_capacity,
                Default::default(),
            ),
            credit_count: 0,
            config,
        }
    }

    /// Returns the weighting fixed at construction.
    #[must_use]
    pub fn weighting(&self) -> Weighting {
        self.config.weighting
    }

    // === Insertion ===

    /// Records that `actor` appeared in `title` released in `year`.
    ///
    /// Creates the actor and the movie when absent. The first insertion of
    /// a movie fixes its weight. Inserting the same credit twice is a no-op.
    pub fn insert(&mut self, actor: &str, title: &str, year: u32) -> (NodeId, EdgeId) {
        let node = self.get_or_create_actor(actor);
        let edge = self.get_or_create_movie(&MovieKey::new(title, year));
        if self.link(node, edge) {
            self.credit_count += 1;
        }
        (node, edge)
    }

    fn get_or_create_actor(&mut self, name: &str) -> NodeId {
        if let Some(index) = self.actors.get_index_of(name) {
            return NodeId::from_index(index);
        }
        let name: Arc<str> = name.into();
        let (index, _) = self
            .actors
            .insert_full(Arc::clone(&name), Actor::new(name));
        NodeId::from_index(index)
    }

    fn get_or_create_movie(&mut self, key: &MovieKey) -> EdgeId {
        let label = key.to_string();
        if let Some(index) = self.movies.get_index_of(label.as_str()) {
            return EdgeId::from_index(index);
        }

        let weighting = self.config.weighting;
        if weighting.raw_weight(key.year()) < 1 {
            tracing::warn!(
                movie = %label,
                ?weighting,
                "movie is not older than the baseline year, clamping weight to 1"
            );
        }

        let movie = Movie::new(key.clone(), weighting.weight(key.year()));
        let (index, _) = self.movies.insert_full(Arc::clone(&movie.label), movie);
        EdgeId::from_index(index)
    }

    /// Links actor and movie both ways, keeping both lists sorted.
    /// Returns `false` if they were already linked.
    fn link(&mut self, node: NodeId, edge: EdgeId) -> bool {
        let Self { actors, movies, .. } = self;

        let label = Arc::clone(&movies[edge.index()].label);
        let credits = &mut actors[node.index()].movies;
        let slot = match credits.binary_search_by(|e| movies[e.index()].label.cmp(&label)) {
            Ok(_) => return false,
            Err(slot) => slot,
        };
        credits.insert(slot, edge);

        let name = Arc::clone(&actors[node.index()].name);
        let cast = &mut movies[edge.index()].cast;
        if let Err(slot) = cast.binary_search_by(|n| actors[n.index()].name.cmp(&name)) {
            cast.insert(slot, node);
        }
        true
    }

    // === Lookup ===

    /// Returns the id of the named actor.
    #[must_use]
    pub fn actor_id(&self, name: &str) -> Option<NodeId> {
        self.actors.get_index_of(name).map(NodeId::from_index)
    }

    /// Returns the named actor.
    #[must_use]
    pub fn get_actor(&self, name: &str) -> Option<&Actor> {
        self.actors.get(name)
    }

    /// Returns the actor with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id did not come from this store.
    #[must_use]
    pub fn actor(&self, id: NodeId) -> &Actor {
        &self.actors[id.index()]
    }

    /// Returns the id of the movie with the rendered key `title#@year`.
    #[must_use]
    pub fn movie_id(&self, label: &str) -> Option<EdgeId> {
        self.movies.get_index_of(label).map(EdgeId::from_index)
    }

    /// Returns the movie with the rendered key `title#@year`.
    #[must_use]
    pub fn get_movie(&self, label: &str) -> Option<&Movie> {
        self.movies.get(label)
    }

    /// Returns the movie with the given key.
    #[must_use]
    pub fn get_movie_by_key(&self, key: &MovieKey) -> Option<&Movie> {
        self.get_movie(&key.to_string())
    }

    /// Returns the movie with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id did not come from this store.
    #[must_use]
    pub fn movie(&self, id: EdgeId) -> &Movie {
        &self.movies[id.index()]
    }

    /// Returns the number of actors.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.actors.len()
    }

    /// Returns the number of movies.
    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.movies.len()
    }

    /// Returns the number of distinct (actor, movie) credits.
    #[must_use]
    pub fn credit_count(&self) -> usize {
        self.credit_count
    }

    /// Returns `true` if no actor has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Iterates over actors in insertion order.
    pub fn actors(&self) -> impl Iterator<Item = (NodeId, &Actor)> + '_ {
        self.actors
            .values()
            .enumerate()
            .map(|(i, a)| (NodeId::from_index(i), a))
    }

    /// Iterates over movies in insertion order.
    pub fn movies(&self) -> impl Iterator<Item = (EdgeId, &Movie)> + '_ {
        self.movies
            .values()
            .enumerate()
            .map(|(i, m)| (EdgeId::from_index(i), m))
    }

    // === Traversal ===

    /// Iterates over `(movie, co-actor)` pairs reachable from `actor` in one
    /// hop, excluding the actor itself.
    ///
    /// Order is fixed: movies by key, then co-actors by name. A co-actor
    /// appears once per shared movie.
    pub fn co_actors(&self, actor: NodeId) -> impl Iterator<Item = (EdgeId, NodeId)> + '_ {
        self.actor(actor).movies.iter().flat_map(move |&edge| {
            self.movie(edge)
                .cast
                .iter()
                .copied()
                .filter(move |&other| other != actor)
                .map(move |other| (edge, other))
        })
    }

    /// Returns `true` if the two actors share at least one movie.
    #[must_use]
    pub fn have_collaborated(&self, a: NodeId, b: NodeId) -> bool {
        a != b && self.co_actors(a).any(|(_, other)| other == b)
    }
}

impl Default for ActorStore {
    fn default() -> Self {
        Self::new()
    }
}
