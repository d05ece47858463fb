//! Minimum spanning tree command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use kinograph_engine::{Config, batch};
use serde::Serialize;

use crate::OutputFormat;
use crate::output;

/// Arguments for `kinograph mst`.
#[derive(Args)]
pub struct MstArgs {
    /// Tab-separated cast file
    pub cast: PathBuf,
    /// Report file to write
    pub output: PathBuf,
}

#[derive(Serialize)]
struct MstOutput {
    connected: bool,
    node_count: usize,
    edge_count: usize,
    total_weight: u64,
}

/// Run the mst command.
pub fn run(args: &MstArgs, config: Config, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = super::load_actor_graph(&args.cast, config)?;
    let mut out = super::create_output(&args.output)?;
    let mst = batch::write_mst(&graph, &mut out)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    let report = match &mst {
        Some(mst) => MstOutput {
            connected: true,
            node_count: mst.node_count,
            edge_count: mst.edge_count(),
            total_weight: mst.total_weight,
        },
        None => MstOutput {
            connected: false,
            node_count: graph.actor_count(),
            edge_count: 0,
            total_weight: 0,
        },
    };

    if report.connected {
        output::success(
            &format!("Spanning tree written to {}", args.output.display()),
            quiet,
        );
    }
    output::print_report(
        &[
            ("Connected", report.connected.to_string()),
            ("Nodes", report.node_count.to_string()),
            ("Edges Chosen", report.edge_count.to_string()),
            ("Total Weight", report.total_weight.to_string()),
        ],
        &report,
        format.into(),
        quiet,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::fixtures;

    #[test]
    fn test_run_writes_tree() {
        let dir = tempfile::tempdir().unwrap();
        let args = MstArgs {
            cast: fixtures::write(&dir, "cast.tsv", fixtures::CAST),
            output: dir.path().join("mst.txt"),
        };
        run(&args, Config::default(), OutputFormat::Table, true).unwrap();
        let report = std::fs::read_to_string(&args.output).unwrap();
        assert!(report.starts_with("(actor)<--[movie#@year]-->(actor)\n"));
        assert!(report.ends_with("#NODE CONNECTED: 4\n#EDGE CHOSEN: 3\nTOTAL EDGE WEIGHTS: 14\n"));
    }
}
