//! Pre-parsed input records.
//!
//! Text parsing happens upstream (see the importers in
//! `kinograph-adapters`). Stores only ever see these well-formed values.

use serde::{Deserialize, Serialize};

/// One credit: an actor appeared in a movie released in a given year.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CastRecord {
    /// Actor name.
    pub actor: String,
    /// Movie title.
    pub title: String,
    /// Release year.
    pub year: u32,
}

impl CastRecord {
    /// Creates a record.
    pub fn new(actor: impl Into<String>, title: impl Into<String>, year: u32) -> Self {
        Self {
            actor: actor.into(),
            title: title.into(),
            year,
        }
    }
}

/// A city and its coordinates.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityRecord {
    /// City name.
    pub name: String,
    /// X coordinate.
    pub x: i32,
    /// Y coordinate.
    pub y: i32,
}

impl CityRecord {
    /// Creates a record.
    pub fn new(name: impl Into<String>, x: i32, y: i32) -> Self {
        Self {
            name: name.into(),
            x,
            y,
        }
    }
}

/// An undirected road between two named cities.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoadRecord {
    /// One endpoint.
    pub from: String,
    /// The other endpoint.
    pub to: String,
}

impl RoadRecord {
    /// Creates a record.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }
}
