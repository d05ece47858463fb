//! Query file readers.

use super::{for_each_line, split_exact};
use kinograph_common::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

/// A start/end pair to route between.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairQuery {
    /// Start node name.
    pub start: String,
    /// End node name.
    pub end: String,
}

impl PairQuery {
    /// Creates a query.
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

fn read_pairs<R: BufRead>(reader: R, header: bool, separator: char) -> Result<Vec<PairQuery>> {
    let mut queries = Vec::new();
    for_each_line(reader, header, |line_no, line| {
        match split_exact::<2>(line, separator) {
            Some([start, end]) => queries.push(PairQuery::new(start, end)),
            None => tracing::debug!(line = line_no, "skipping query row without 2 fields"),
        }
        Ok(())
    })?;
    Ok(queries)
}

/// Reads tab-separated actor pairs after a header line.
pub fn read_actor_pairs<R: BufRead>(reader: R) -> Result<Vec<PairQuery>> {
    read_pairs(reader, true, '\t')
}

/// Reads space-separated city pairs. There is no header.
pub fn read_city_pairs<R: BufRead>(reader: R) -> Result<Vec<PairQuery>> {
    read_pairs(reader, false, ' ')
}

/// Reads one actor name per line after a header line. Blank lines are
/// skipped.
pub fn read_actor_names<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut names = Vec::new();
    for_each_line(reader, true, |_, line| {
        if !line.is_empty() {
            names.push(line.to_string());
        }
        Ok(())
    })?;
    Ok(names)
}
