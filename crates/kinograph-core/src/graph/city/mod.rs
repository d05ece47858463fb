//! City/road graph.
//!
//! Cities are nodes with fixed integer coordinates. Roads are undirected and
//! carry no stored weight; a road is as long as the straight line between
//! its endpoints.

mod store;

pub use store::CityStore;

use kinograph_common::types::NodeId;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A point on the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Self) -> f64 {
        let dx = f64::from(self.x) - f64::from(other.x);
        let dy = f64::from(self.y) - f64::from(other.y);
        dx.hypot(dy)
    }
}

/// A city node.
#[derive(Debug, Clone)]
pub struct City {
    name: Arc<str>,
    position: Point,
    /// Neighbouring cities, sorted by name.
    roads: Vec<NodeId>,
}

impl City {
    pub(crate) fn new(name: Arc<str>, position: Point) -> Self {
        Self {
            name,
            position,
            roads: Vec::new(),
        }
    }

    /// Returns the city's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns a shared handle to the city's name.
    #[must_use]
    pub fn name_arc(&self) -> &Arc<str> {
        &self.name
    }

    /// Returns the city's coordinates.
    #[must_use]
    pub fn position(&self) -> Point {
        self.position
    }

    /// Returns the neighbouring cities, ordered by name.
    #[must_use]
    pub fn roads(&self) -> &[NodeId] {
        &self.roads
    }
}
