//! Kinograph CLI - collaboration paths, spanning trees, link prediction and
//! road navigation over line-oriented input files.

mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use kinograph_engine::Config;

/// Kinograph graph analysis tool.
///
/// Builds an actor/movie or city/road graph from text files and answers
/// query files against it, writing one report line per query.
#[derive(Parser)]
#[command(name = "kinograph")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format for summaries
    #[arg(long, global = true, default_value = "table")]
    format: OutputFormat,

    /// Suppress summaries and info messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Enable verbose debug logging
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Year movie ages are measured against when weighting edges
    #[arg(long, global = true)]
    baseline_year: Option<u32>,

    /// Number of actors kept in each link-prediction list
    #[arg(long, global = true)]
    top_k: Option<usize>,

    /// Multiplier applied to the A* straight-line heuristic
    #[arg(long, global = true)]
    heuristic_weight: Option<f64>,
}

impl Cli {
    fn config(&self) -> Config {
        let mut config = Config::default();
        if let Some(year) = self.baseline_year {
            config = config.with_baseline_year(year);
        }
        if let Some(top_k) = self.top_k {
            config = config.with_top_k(top_k);
        }
        if let Some(weight) = self.heuristic_weight {
            config = config.with_heuristic_weight(weight);
        }
        config
    }
}

/// Output format options.
#[derive(Clone, Copy, ValueEnum, Default)]
enum OutputFormat {
    /// Human-readable table format (default for TTY)
    #[default]
    Table,
    /// Machine-readable JSON format
    Json,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// Find actor-to-actor paths for every pair in a query file
    Path(commands::path::PathArgs),

    /// Rank existing and potential collaborators for every listed actor
    Predict(commands::predict::PredictArgs),

    /// Build a minimum spanning tree over all actors
    Mst(commands::mst::MstArgs),

    /// Route between city pairs with A*
    Navigate(commands::navigate::NavigateArgs),

    /// Show actor graph statistics
    Stats {
        /// Tab-separated cast file
        cast: std::path::PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    } else if !cli.quiet {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .with_writer(std::io::stderr)
            .init();
    }

    let config = cli.config();
    let result = match &cli.command {
        Commands::Path(args) => commands::path::run(args, config, cli.format, cli.quiet),
        Commands::Predict(args) => commands::predict::run(args, config, cli.format, cli.quiet),
        Commands::Mst(args) => commands::mst::run(args, config, cli.format, cli.quiet),
        Commands::Navigate(args) => commands::navigate::run(args, config, cli.format, cli.quiet),
        Commands::Stats { cast } => commands::stats::run(cast, config, cli.format, cli.quiet),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}
