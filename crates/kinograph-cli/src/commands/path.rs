//! Actor path finding command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use kinograph_adapters::import::read_actor_pairs;
use kinograph_engine::{BatchSummary, Config, batch};
use serde::Serialize;

use crate::OutputFormat;
use crate::output;

/// Edge cost used when searching.
#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathMode {
    /// Fewest movies
    #[value(name = "u", alias = "unweighted")]
    Unweighted,
    /// Lowest total movie age
    #[value(name = "w", alias = "weighted")]
    Weighted,
}

/// Arguments for `kinograph path`.
#[derive(Args)]
pub struct PathArgs {
    /// Tab-separated cast file
    pub cast: PathBuf,
    /// `u` for fewest movies, `w` for lowest total weight
    pub mode: PathMode,
    /// Tab-separated actor pairs, one per line after a header
    pub queries: PathBuf,
    /// Report file to write
    pub output: PathBuf,
}

#[derive(Serialize)]
struct PathOutput {
    weighted: bool,
    #[serde(flatten)]
    summary: BatchSummary,
    output: String,
}

/// Run the path command.
pub fn run(args: &PathArgs, config: Config, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = super::load_actor_graph(&args.cast, config)?;
    let queries = read_actor_pairs(super::open_input(&args.queries)?)
        .with_context(|| format!("failed to read queries {}", args.queries.display()))?;

    let weighted = args.mode == PathMode::Weighted;
    let mut out = super::create_output(&args.output)?;
    let summary = batch::write_paths(&graph, &queries, weighted, &mut out)
        .with_context(|| format!("failed to write {}", args.output.display()))?;

    let report = PathOutput {
        weighted,
        summary,
        output: args.output.display().to_string(),
    };
    output::print_report(
        &[
            ("Mode", if weighted { "weighted" } else { "unweighted" }.to_string()),
            ("Queries", summary.queries.to_string()),
            ("Paths Found", summary.answered.to_string()),
            ("Output", report.output.clone()),
        ],
        &report,
        format.into(),
        quiet,
    )
}
