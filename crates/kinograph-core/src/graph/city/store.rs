//! City graph store implementation.

use super::{City, Point};
use kinograph_common::types::NodeId;
use kinograph_common::utils::hash::FastIndexMap;
use std::sync::Arc;

/// The city/road graph store.
///
/// Cities live in an insertion-ordered arena indexed by [`NodeId`].
#[derive(Debug, Clone, Default)]
pub struct CityStore {
    /// Cities keyed by name.
    cities: FastIndexMap<Arc<str>, City>,

    /// Number of distinct roads.
    road_count: usize,
}

impl CityStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    // === Insertion ===

    /// Inserts a city. The first insertion of a name fixes its position.
    pub fn insert_city(&mut self, name: &str, x: i32, y: i32) -> NodeId {
        if let Some(index) = self.cities.get_index_of(name) {
            return NodeId::from_index(index);
        }
        let name: Arc<str> = name.into();
        let (index, _) = self
            .cities
            .insert_full(Arc::clone(&name), City::new(name, Point::new(x, y)));
        NodeId::from_index(index)
    }

    /// Connects two cities with a road.
    ///
    /// Returns `false` without changing anything if either city is unknown,
    /// the endpoints are the same city, or the road already exists.
    pub fn insert_road(&mut self, a: &str, b: &str) -> bool {
        let (Some(a), Some(b)) = (self.city_id(a), self.city_id(b)) else {
            return false;
        };
        if a == b {
            return false;
        }
        if !self.attach(a, b) {
            return false;
        }
        self.attach(b, a);
        self.road_count += 1;
        true
    }

    fn attach(&mut self, from: NodeId, to: NodeId) -> bool {
        let name = Arc::clone(&self.cities[to.index()].name);
        let cities = &self.cities;
        let slot = match cities[from.index()]
            .roads
            .binary_search_by(|n| cities[n.index()].name.cmp(&name))
        {
            Ok(_) => return false,
            Err(slot) => slot,
        };
        self.cities[from.index()].roads.insert(slot, to);
        true
    }

    // === Lookup ===

    /// Returns the id of the named city.
    #[must_use]
    pub fn city_id(&self, name: &str) -> Option<NodeId> {
        self.cities.get_index_of(name).map(NodeId::from_index)
    }

    /// Returns the named city.
    #[must_use]
    pub fn get_city(&self, name: &str) -> Option<&City> {
        self.cities.get(name)
    }

    /// Returns the city with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id did not come from this store.
    #[must_use]
    pub fn city(&self, id: NodeId) -> &City {
        &self.cities[id.index()]
    }

    /// Returns the number of cities.
    #[must_use]
    pub fn city_count(&self) -> usize {
        self.cities.len()
    }

    /// Returns the number of roads.
    #[must_use]
    pub fn road_count(&self) -> usize {
        self.road_count
    }

    /// Returns `true` if no city has been inserted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Iterates over cities in insertion order.
    pub fn cities(&self) -> impl Iterator<Item = (NodeId, &City)> + '_ {
        self.cities
            .values()
            .enumerate()
            .map(|(i, c)| (NodeId::from_index(i), c))
    }

    /// Straight-line length of the road between two cities.
    #[must_use]
    pub fn road_length(&self, a: NodeId, b: NodeId) -> f64 {
        self.city(a).position.distance(self.city(b).position)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_city_first_wins() {
        let mut store = CityStore::new();
        let a = store.insert_city("A", 0, 3);
        let again = store.insert_city("A", 9, 9);

        assert_eq!(a, again);
        assert_eq!(store.city_count(), 1);
        assert_eq!(store.city(a).position(), Point::new(0, 3));
    }

    #[test]
    fn test_insert_road_links_both_ways() {
        let mut store = CityStore::new();
        let a = store.insert_city("A", 0, 0);
        let b = store.insert_city("B", 3, 4);

        assert!(store.insert_road("A", "B"));
        assert!(!store.insert_road("B", "A"));
        assert_eq!(store.road_count(), 1);
        assert_eq!(store.city(a).roads(), &[b]);
        assert_eq!(store.city(b).roads(), &[a]);
        assert_eq!(store.road_length(a, b), 5.0);
    }

    #[test]
    fn test_insert_road_requires_known_cities() {
        let mut store = CityStore::new();
        store.insert_city("A", 0, 0);

        assert!(!store.insert_road("A", "Nowhere"));
        assert!(!store.insert_road("A", "A"));
        assert_eq!(store.road_count(), 0);
        assert!(store.get_city("A").unwrap().roads().is_empty());
    }

    #[test]
    fn test_roads_sorted_by_name() {
        let mut store = CityStore::new();
        store.insert_city("Hub", 0, 0);
        store.insert_city("Zeta", 1, 0);
        store.insert_city("Alpha", 2, 0);
        store.insert_city("Mid", 3, 0);
        store.insert_road("Hub", "Zeta");
        store.insert_road("Hub", "Alpha");
        store.insert_road("Mid", "Hub");

        let hub = store.get_city("Hub").unwrap();
        let names: Vec<_> = hub.roads().iter().map(|&c| store.city(c).name()).collect();
        assert_eq!(names, ["Alpha", "Mid", "Zeta"]);
    }
}
