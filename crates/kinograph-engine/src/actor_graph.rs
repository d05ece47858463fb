//! The actor collaboration graph facade.

use parking_lot::RwLock;
use serde::Serialize;

use kinograph_adapters::plugins::algorithms::{
    LinkPrediction, MstResult, connected_component_count, kruskal, predict_links, shortest_path,
};
use kinograph_common::types::{EdgeId, NodeId};
use kinograph_common::utils::error::Result;
use kinograph_core::graph::actor::{ActorStore, ActorStoreConfig, Weighting};
use kinograph_core::graph::path::Path;
use kinograph_core::record::CastRecord;

use crate::config::Config;

/// Summary counts for an [`ActorGraph`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActorGraphStats {
    /// Number of actors.
    pub actor_count: usize,
    /// Number of distinct (title, year) movies.
    pub movie_count: usize,
    /// Number of distinct actor/movie credits.
    pub credit_count: usize,
    /// Number of connected groups of actors.
    pub component_count: usize,
    /// Weighting policy the movies were built with.
    pub weighting: Weighting,
}

/// An actor/movie graph with the analyses that run over it.
///
/// Inserts take the write lock and analyses share the read lock, so a
/// query never observes a half-applied insert.
#[derive(Debug)]
pub struct ActorGraph {
    config: Config,
    store: RwLock<ActorStore>,
}

impl ActorGraph {
    /// Creates an empty graph with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::from_valid_config(Config::default())
    }

    /// Creates an empty graph with `config`.
    ///
    /// # Errors
    ///
    /// Returns [`kinograph_common::Error::InvalidConfig`] if `config` fails
    /// validation.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    /// Builds a graph from pre-parsed cast records.
    pub fn from_records<I>(config: Config, records: I) -> Result<Self>
    where
        I: IntoIterator<Item = CastRecord>,
    {
        let graph = Self::with_config(config)?;
        let inserted = graph.insert_records(records);
        tracing::info!(
            records = inserted,
            actors = graph.actor_count(),
            movies = graph.movie_count(),
            "actor graph built"
        );
        Ok(graph)
    }

    fn from_valid_config(config: Config) -> Self {
        let store = ActorStore::with_config(ActorStoreConfig {
            weighting: config.weighting,
            ..ActorStoreConfig::default()
        });
        Self {
            config,
            store: RwLock::new(store),
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Records that `actor` appeared in `title` released in `year`.
    ///
    /// Creates the actor and the movie if absent. Repeating a credit is a
    /// no-op; a movie's weight is fixed by its first insertion.
    pub fn insert(&self, actor: &str, title: &str, year: u32) -> (NodeId, EdgeId) {
        self.store.write().insert(actor, title, year)
    }

    /// Inserts every record under a single write lock and returns how many
    /// were applied.
    pub fn insert_records<I>(&self, records: I) -> usize
    where
        I: IntoIterator<Item = CastRecord>,
    {
        let mut store = self.store.write();
        let mut count = 0;
        for record in records {
            store.insert(&record.actor, &record.title, record.year);
            count += 1;
        }
        count
    }

    /// Finds a shortest path between two actors.
    ///
    /// Unweighted search minimizes the number of movies; weighted search
    /// minimizes the total movie weight. Returns `None` when the names are
    /// equal, either is unknown, or the actors are not connected.
    pub fn shortest_path(&self, start: &str, end: &str, weighted: bool) -> Option<Path> {
        shortest_path(&self.store.read(), start, end, weighted)
    }

    /// Builds a minimum spanning tree over all actors.
    ///
    /// Returns `None` if the graph is empty or not connected.
    pub fn build_mst(&self) -> Option<MstResult> {
        kruskal(&self.store.read())
    }

    /// Ranks existing and potential collaborators of `actor`, keeping the
    /// configured top-K of each.
    pub fn predict_links(&self, actor: &str) -> LinkPrediction {
        predict_links(&self.store.read(), actor, self.config.top_k)
    }

    /// Number of actors.
    #[must_use]
    pub fn actor_count(&self) -> usize {
        self.store.read().actor_count()
    }

    /// Number of movies.
    #[must_use]
    pub fn movie_count(&self) -> usize {
        self.store.read().movie_count()
    }

    /// Returns summary counts.
    #[must_use]
    pub fn stats(&self) -> ActorGraphStats {
        let store = self.store.read();
        ActorGraphStats {
            actor_count: store.actor_count(),
            movie_count: store.movie_count(),
            credit_count: store.credit_count(),
            component_count: connected_component_count(&store),
            weighting: store.weighting(),
        }
    }

    /// Runs `f` against the underlying store under the read lock.
    pub fn with_store<R>(&self, f: impl FnOnce(&ActorStore) -> R) -> R {
        f(&self.store.read())
    }
}

impl Default for ActorGraph {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinograph_common::utils::error::Error;

    fn chain(config: Config) -> ActorGraph {
        let graph = ActorGraph::with_config(config).unwrap();
        graph.insert("A", "m1", 2011);
        graph.insert("B", "m1", 2011);
        graph.insert("B", "m2", 2016);
        graph.insert("C", "m2", 2016);
        graph.insert("B", "m3", 2019);
        graph.insert("D", "m3", 2019);
        graph
    }

    #[test]
    fn test_unweighted_chain() {
        let graph = chain(Config::unweighted());
        let path = graph.shortest_path("A", "D", false).unwrap();
        assert_eq!(path.to_string(), "(A)--[m1#@2011]-->(B)--[m3#@2019]-->(D)");
        assert_eq!(path.cost(), 2.0);
    }

    #[test]
    fn test_weighted_chain_cost() {
        let graph = chain(Config::weighted());
        let path = graph.shortest_path("A", "D", true).unwrap();
        assert_eq!(path.to_string(), "(A)--[m1#@2011]-->(B)--[m3#@2019]-->(D)");
        assert_eq!(path.cost(), 10.0);
    }

    #[test]
    fn test_absent_paths() {
        let graph = chain(Config::weighted());
        graph.insert("Loner", "solo", 2000);
        assert!(graph.shortest_path("A", "A", false).is_none());
        assert!(graph.shortest_path("A", "Nobody", true).is_none());
        assert!(graph.shortest_path("A", "Loner", false).is_none());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let err = ActorGraph::with_config(Config::default().with_top_k(0)).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_debug_output() {
        let graph = chain(Config::unweighted());
        let rendered = format!("{graph:?}");
        assert!(rendered.starts_with("ActorGraph"));
        assert!(rendered.contains("top_k: 4"));
    }

    #[test]
    fn test_stats() {
        let graph = chain(Config::weighted());
        graph.insert("A", "m1", 2011);
        graph.insert("Loner", "solo", 2000);
        let stats = graph.stats();
        assert_eq!(stats.actor_count, 5);
        assert_eq!(stats.movie_count, 4);
        assert_eq!(stats.credit_count, 7);
        assert_eq!(stats.component_count, 2);
        assert_eq!(stats.weighting, Weighting::default_age());
    }

    #[test]
    fn test_from_records() {
        let records = vec![
            CastRecord::new("A", "m", 2000),
            CastRecord::new("B", "m", 2000),
            CastRecord::new("A", "m", 2000),
        ];
        let graph = ActorGraph::from_records(Config::unweighted(), records).unwrap();
        assert_eq!(graph.actor_count(), 2);
        assert_eq!(graph.movie_count(), 1);
        assert_eq!(graph.with_store(ActorStore::credit_count), 2);
    }

    #[test]
    fn test_mst_single_actor() {
        let graph = ActorGraph::new();
        graph.insert("Solo", "one", 2019);
        let mst = graph.build_mst().unwrap();
        assert_eq!(mst.edge_count(), 0);
        assert_eq!(mst.total_weight, 0);
        assert!(ActorGraph::new().build_mst().is_none());
    }
}
