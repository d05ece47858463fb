//! CLI command implementations.

pub mod mst;
pub mod navigate;
pub mod path;
pub mod predict;
pub mod stats;

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use anyhow::{Context, Result};
use kinograph_adapters::import::read_cast;
use kinograph_engine::{ActorGraph, Config};

/// Opens `path` for buffered reading.
pub(crate) fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    Ok(BufReader::new(file))
}

/// Creates (or truncates) `path` for buffered writing.
pub(crate) fn create_output(path: &Path) -> Result<BufWriter<File>> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    Ok(BufWriter::new(file))
}

/// Reads a cast file and builds the actor graph from it.
pub(crate) fn load_actor_graph(cast: &Path, config: Config) -> Result<ActorGraph> {
    let records = read_cast(open_input(cast)?)
        .with_context(|| format!("failed to read cast file {}", cast.display()))?;
    ActorGraph::from_records(config, records).context("cannot build actor graph")
}
