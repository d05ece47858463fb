//! Link prediction command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use kinograph_adapters::import::read_actor_names;
use kinograph_engine::{BatchSummary, Config, batch};
use serde::Serialize;

use crate::OutputFormat;
use crate::output;

/// Arguments for `kinograph predict`.
#[derive(Args)]
pub struct PredictArgs {
    /// Tab-separated cast file
    pub cast: PathBuf,
    /// Actor names, one per line after a header
    pub queries: PathBuf,
    /// Report of actors already worked with
    pub collaborated: PathBuf,
    /// Report of actors not yet worked with
    pub uncollaborated: PathBuf,
}

#[derive(Serialize)]
struct PredictOutput {
    top_k: usize,
    #[serde(flatten)]
    summary: BatchSummary,
}

/// Run the predict command.
pub fn run(args: &PredictArgs, config: Config, format: OutputFormat, quiet: bool) -> Result<()> {
    let top_k = config.top_k;
    let graph = super::load_actor_graph(&args.cast, config)?;
    let actors = read_actor_names(super::open_input(&args.queries)?)
        .with_context(|| format!("failed to read queries {}", args.queries.display()))?;

    let mut collaborated = super::create_output(&args.collaborated)?;
    let mut uncollaborated = super::create_output(&args.uncollaborated)?;
    let summary =
        batch::write_predictions(&graph, &actors, &mut collaborated, &mut uncollaborated)
            .context("failed to write prediction reports")?;

    output::print_report(
        &[
            ("Actors", summary.queries.to_string()),
            ("With Collaborators", summary.answered.to_string()),
            ("Top K", top_k.to_string()),
        ],
        &PredictOutput { top_k, summary },
        format.into(),
        quiet,
    )
}
