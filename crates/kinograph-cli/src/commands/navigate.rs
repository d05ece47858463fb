//! City navigation command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use kinograph_adapters::import::{read_cities, read_city_pairs, read_roads};
use kinograph_engine::{BatchSummary, CityGraph, Config, batch};
use serde::Serialize;

use crate::OutputFormat;
use crate::output;

/// Arguments for `kinograph navigate`.
#[derive(Args)]
pub struct NavigateArgs {
    /// City coordinates, `name x y` per line
    pub cityxy: PathBuf,
    /// Roads, `a b` per line
    pub citypairs: PathBuf,
    /// City pairs to route, `a b` per line
    pub queries: PathBuf,
    /// Report file to write
    pub output: PathBuf,
}

#[derive(Serialize)]
struct NavigateOutput {
    city_count: usize,
    road_count: usize,
    #[serde(flatten)]
    summary: BatchSummary,
}

/// Run the navigate command.
pub fn run(args: &NavigateArgs, config: Config, format: OutputFormat, quiet: bool) -> Result<()> {
    let cities = read_cities(super::open_input(&args.cityxy)?)
        .with_context(|| format!("failed to read cities {}", args.cityxy.display()))?;
    let roads = read_roads(super::open_input(&args.citypairs)?)
        .with_context(|| format!("failed to read roads {}", args.citypairs.display()))?;
    let graph = CityGraph::from_records(config, cities, roads).context("cannot build city graph")?;

    let queries = read_city_pairs(super::open_input(&args.queries)?)
        .with_context(|| format!("failed to read queries {}", args.queries.display()))?;
    let mut out = super::create_output(&args.output)?;
    let summary = batch::write_navigation(&graph, &queries, &mut out)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    let stats = graph.stats();
    output::print_report(
        &[
            ("Cities", stats.city_count.to_string()),
            ("Roads", stats.road_count.to_string()),
            ("Queries", summary.queries.to_string()),
            ("Routes Found", summary.answered.to_string()),
        ],
        &NavigateOutput {
            city_count: stats.city_count,
            road_count: stats.road_count,
            summary,
        },
        format.into(),
        quiet,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn test_run_routes_queries() {
        let dir = tempfile::tempdir().unwrap();
        let args = NavigateArgs {
            cityxy: fixtures::write(&dir, "xy.txt", "A 0 3\nB 2 3\nC 6 3\nD 1 5\nE 5 0\nF 10 5\n"),
            citypairs: fixtures::write(&dir, "roads.txt", "A D\nA B\nA E\nB E\nD E\nC D\nC E\n"),
            queries: fixtures::write(&dir, "queries.txt", "A C\nA F\n"),
            output: dir.path().join("routes.txt"),
        };
        run(&args, Config::default(), OutputFormat::Table, true).unwrap();
        assert_eq!(
            std::fs::read_to_string(&args.output).unwrap(),
            "(A)-->(D)-->(C)\n\n"
        );
    }
}
