//! The city road graph facade.

use parking_lot::RwLock;
use serde::Serialize;

use kinograph_adapters::plugins::algorithms::astar;
use kinograph_common::types::NodeId;
use kinograph_common::utils::error::Result;
use kinograph_core::graph::city::CityStore;
use kinograph_core::graph::path::Path;
use kinograph_core::record::{CityRecord, RoadRecord};

use crate::config::Config;

/// Summary counts for a [`CityGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CityGraphStats {
    /// Number of cities.
    pub city_count: usize,
    /// Number of distinct roads.
    pub road_count: usize,
}

/// A city/road graph answering A* navigation queries.
#[derive(Debug)]
pub struct CityGraph {
    config: Config,
    store: RwLock<CityStore>,
}

impl CityGraph {
    /// Creates an empty graph with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
            store: RwLock::new(CityStore::new()),
        }
    }

    /// Creates an empty graph with `config`.
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            store: RwLock::new(CityStore::new()),
        })
    }

    /// Builds a graph from city and road records.
    ///
    /// Roads naming an unknown city are dropped.
    pub fn from_records<C, R>(config: Config, cities: C, roads: R) -> Result<Self>
    where
        C: IntoIterator<Item = CityRecord>,
        R: IntoIterator<Item = RoadRecord>,
    {
        let graph = Self::with_config(config)?;
        {
            let mut store = graph.store.write();
            for city in cities {
                store.insert_city(&city.name, city.x, city.y);
            }
            let mut dropped = 0usize;
            for road in roads {
                if store.city_id(&road.from).is_none() || store.city_id(&road.to).is_none() {
                    dropped += 1;
                    continue;
                }
                store.insert_road(&road.from, &road.to);
            }
            if dropped > 0 {
                tracing::warn!(dropped, "roads referencing unknown cities were ignored");
            }
            tracing::info!(
                cities = store.city_count(),
                roads = store.road_count(),
                "city graph built"
            );
        }
        Ok(graph)
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Adds a city. The first insertion of a name wins.
    pub fn insert_city(&self, name: &str, x: i32, y: i32) -> NodeId {
        self.store.write().insert_city(name, x, y)
    }

    /// Adds an undirected road. Returns `false` if either city is unknown,
    /// the endpoints are equal, or the road already exists.
    pub fn insert_road(&self, a: &str, b: &str) -> bool {
        self.store.write().insert_road(a, b)
    }

    /// Finds a shortest road route with A*, weighting the heuristic by the
    /// configured multiplier.
    pub fn a_star(&self, start: &str, end: &str) -> Option<Path> {
        astar(&self.store.read(), start, end, self.config.heuristic_weight)
    }

    /// Returns summary counts.
    #[must_use]
    pub fn stats(&self) -> CityGraphStats {
        let store = self.store.read();
        CityGraphStats {
            city_count: store.city_count(),
            road_count: store.road_count(),
        }
    }
}

impl Default for CityGraph {
    fn default() -> Self {
        Self::new()
    }
}
