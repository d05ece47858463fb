//! Actor graph statistics command.

use std::path::Path;

use anyhow::Result;
use kinograph_engine::{Config, Weighting};

use crate::OutputFormat;
use crate::output;

fn describe(weighting: Weighting) -> String {
    match weighting {
        Weighting::Unit => "unit".to_string(),
        Weighting::Age { baseline_year } => format!("age (baseline {baseline_year})"),
    }
}

/// Run the stats command.
pub fn run(cast: &Path, config: Config, format: OutputFormat, quiet: bool) -> Result<()> {
    let graph = super::load_actor_graph(cast, config)?;
    let stats = graph.stats();

    output::print_report(
        &[
            ("Actors", stats.actor_count.to_string()),
            ("Movies", stats.movie_count.to_string()),
            ("Credits", stats.credit_count.to_string()),
            ("Components", stats.component_count.to_string()),
            ("Weighting", describe(stats.weighting)),
        ],
        &stats,
        format.into(),
        quiet,
    )
}
