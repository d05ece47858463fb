//! Batch query runners.
//!
//! Each runner answers a list of pre-parsed queries against a graph and
//! writes one report line per query. An unanswerable query still produces
//! its line (empty), so output lines stay aligned with input queries.

use std::io::Write;

use serde::Serialize;

use kinograph_adapters::import::PairQuery;
use kinograph_adapters::plugins::algorithms::{MstResult, tab_terminated};
use kinograph_common::utils::error::Result;

use crate::actor_graph::ActorGraph;
use crate::city_graph::CityGraph;

/// Header line of a path report.
pub const PATH_HEADER: &str = "(actor)--[movie#@year]-->(actor)--...";

/// Header line of both link-prediction reports.
pub const PREDICTION_HEADER: &str = "Actor1,Actor2,Actor3,Actor4";

/// Header line of a spanning-tree report.
pub const MST_HEADER: &str = "(actor)<--[movie#@year]-->(actor)";

/// How many queries a batch saw and how many had an answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    /// Queries processed.
    pub queries: usize,
    /// Queries with a non-empty answer.
    pub answered: usize,
}

impl BatchSummary {
    fn record(&mut self, answered: bool) {
        self.queries += 1;
        if answered {
            self.answered += 1;
        }
    }
}

/// Writes the shortest path for every actor pair.
pub fn write_paths<W: Write>(
    graph: &ActorGraph,
    queries: &[PairQuery],
    weighted: bool,
    out: &mut W,
) -> Result<BatchSummary> {
    writeln!(out, "{PATH_HEADER}")?;
    let mut summary = BatchSummary::default();
    for query in queries {
        let path = graph.shortest_path(&query.start, &query.end, weighted);
        match &path {
            Some(path) => writeln!(out, "{path}")?,
            None => {
                tracing::debug!(start = %query.start, end = %query.end, "no path");
                writeln!(out)?;
            }
        }
        summary.record(path.is_some());
    }
    out.flush()?;
    Ok(summary)
}

/// Writes the collaborated and not-yet-collaborated rankings for every
/// actor to their respective outputs.
pub fn write_predictions<C: Write, U: Write>(
    graph: &ActorGraph,
    actors: &[String],
    collaborated_out: &mut C,
    uncollaborated_out: &mut U,
) -> Result<BatchSummary> {
    writeln!(collaborated_out, "{PREDICTION_HEADER}")?;
    writeln!(uncollaborated_out, "{PREDICTION_HEADER}")?;
    let mut summary = BatchSummary::default();
    for actor in actors {
        let prediction = graph.predict_links(actor);
        writeln!(
            collaborated_out,
            "{}",
            tab_terminated(&prediction.collaborated_names())
        )?;
        writeln!(
            uncollaborated_out,
            "{}",
            tab_terminated(&prediction.not_collaborated_names())
        )?;
        summary.record(!prediction.collaborated.is_empty());
    }
    collaborated_out.flush()?;
    uncollaborated_out.flush()?;
    Ok(summary)
}

/// Writes the spanning tree and its summary.
///
/// Only the header is written when the graph is not connected.
pub fn write_mst<W: Write>(graph: &ActorGraph, out: &mut W) -> Result<Option<MstResult>> {
    writeln!(out, "{MST_HEADER}")?;
    let mst = graph.build_mst();
    match &mst {
        Some(mst) => writeln!(out, "{mst}")?,
        None => tracing::warn!("actor graph is not connected; no spanning tree"),
    }
    out.flush()?;
    Ok(mst)
}

/// Writes the A* route for every city pair. There is no header.
pub fn write_navigation<W: Write>(
    graph: &CityGraph,
    queries: &[PairQuery],
    out: &mut W,
) -> Result<BatchSummary> {
    let mut summary = BatchSummary::default();
    for query in queries {
        let path = graph.a_star(&query.start, &query.end);
        match &path {
            Some(path) => writeln!(out, "{path}")?,
            None => writeln!(out)?,
        }
        summary.record(path.is_some());
    }
    out.flush()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn graph() -> ActorGraph {
        let graph = ActorGraph::with_config(Config::weighted()).unwrap();
        graph.insert("A", "m1", 2011);
        graph.insert("B", "m1", 2011);
        graph.insert("B", "m2", 2016);
        graph.insert("C", "m2", 2016);
        graph
    }

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_write_paths() {
        let queries = [PairQuery::new("A", "C"), PairQuery::new("A", "Nobody")];
        let mut out = Vec::new();
        let summary = write_paths(&graph(), &queries, false, &mut out).unwrap();
        assert_eq!(
            text(out),
            "(actor)--[movie#@year]-->(actor)--...\n\
             (A)--[m1#@2011]-->(B)--[m2#@2016]-->(C)\n\
             \n"
        );
        assert_eq!(summary, BatchSummary { queries: 2, answered: 1 });
    }

    #[test]
    fn test_write_predictions() {
        let actors = ["A".to_string(), "Nobody".to_string()];
        let (mut yes, mut no) = (Vec::new(), Vec::new());
        let summary = write_predictions(&graph(), &actors, &mut yes, &mut no).unwrap();
        assert_eq!(text(yes), "Actor1,Actor2,Actor3,Actor4\nB\t\n\n");
        assert_eq!(text(no), "Actor1,Actor2,Actor3,Actor4\nC\t\n\n");
        assert_eq!(summary.answered, 1);
    }

    #[test]
    fn test_write_mst() {
        let mut out = Vec::new();
        let mst = write_mst(&graph(), &mut out).unwrap().unwrap();
        assert_eq!(mst.total_weight, 13);
        assert_eq!(
            text(out),
            "(actor)<--[movie#@year]-->(actor)\n\
             (B)<--[m2#@2016]-->(C)\n\
             (A)<--[m1#@2011]-->(B)\n\
             #NODE CONNECTED: 3\n\
             #EDGE CHOSEN: 2\n\
             TOTAL EDGE WEIGHTS: 13\n"
        );
    }

    #[test]
    fn test_write_mst_disconnected() {
        let graph = graph();
        graph.insert("Loner", "solo", 2000);
        let mut out = Vec::new();
        assert!(write_mst(&graph, &mut out).unwrap().is_none());
        assert_eq!(text(out), "(actor)<--[movie#@year]-->(actor)\n");
    }

    #[test]
    fn test_write_navigation() {
        let graph = CityGraph::new();
        graph.insert_city("X", 0, 0);
        graph.insert_city("Y", 3, 4);
        graph.insert_city("Z", 9, 9);
        graph.insert_road("X", "Y");
        let queries = [PairQuery::new("X", "Y"), PairQuery::new("X", "Z")];
        let mut out = Vec::new();
        let summary = write_navigation(&graph, &queries, &mut out).unwrap();
        assert_eq!(text(out), "(X)-->(Y)\n\n");
        assert_eq!(summary, BatchSummary { queries: 2, answered: 1 });
    }
}
