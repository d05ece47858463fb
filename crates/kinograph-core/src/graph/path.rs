//! Rendered paths.
//!
//! A [`Path`] is the output of every path query. Its [`Display`] form is a
//! literal contract consumed by downstream tools:
//!
//! - actor paths: `(A)--[m1#@2011]-->(B)--[m3#@2019]-->(D)`
//! - city paths: `(A)-->(D)-->(C)`
//!
//! [`Display`]: std::fmt::Display

use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// One step of a path: the edge taken and the node it reaches.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hop {
    /// Rendered edge key, or `None` for unlabeled edges such as roads.
    pub via: Option<Arc<str>>,
    /// Name of the node reached.
    pub to: Arc<str>,
}

/// A path from a start node through zero or more hops.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Path {
    start: Arc<str>,
    hops: Vec<Hop>,
    cost: f64,
}

impl Path {
    /// Creates a path consisting only of `start`.
    pub fn new(start: impl Into<Arc<str>>) -> Self {
        Self {
            start: start.into(),
            hops: Vec::new(),
            cost: 0.0,
        }
    }

    /// Appends a hop.
    pub fn push(&mut self, via: Option<Arc<str>>, to: impl Into<Arc<str>>) {
        self.hops.push(Hop { via, to: to.into() });
    }

    /// Sets the total cost.
    #[must_use]
    pub fn with_cost(mut self, cost: f64) -> Self {
        self.cost = cost;
        self
    }

    /// Returns the start node's name.
    #[must_use]
    pub fn start(&self) -> &str {
        &self.start
    }

    /// Returns the last node's name.
    #[must_use]
    pub fn end(&self) -> &str {
        self.hops.last().map_or(&self.start, |h| &h.to)
    }

    /// Returns the hops in start-to-end order.
    #[must_use]
    pub fn hops(&self) -> &[Hop] {
        &self.hops
    }

    /// Number of edges on the path.
    #[must_use]
    pub fn len(&self) -> usize {
        self.hops.len()
    }

    /// Returns `true` if the path has no edges.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hops.is_empty()
    }

    /// Sum of edge costs along the path.
    #[must_use]
    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Node names in order, start first.
    pub fn nodes(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(&*self.start).chain(self.hops.iter().map(|h| &*h.to))
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.start)?;
        for hop in &self.hops {
            match &hop.via {
                Some(via) => write!(f, "--[{via}]-->({})", hop.to)?,
                None => write!(f, "-->({})", hop.to)?,
            }
        }
        Ok(())
    }
}
