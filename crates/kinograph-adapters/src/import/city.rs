//! City coordinate and road readers.

use super::{for_each_line, split_exact};
use kinograph_common::utils::error::{Error, Result};
use kinograph_core::record::{CityRecord, RoadRecord};
use std::io::BufRead;

fn coordinate(line_no: usize, raw: &str) -> Result<i32> {
    raw.parse::<i32>()
        .map_err(|e| Error::parse(line_no, format!("bad coordinate {raw:?}: {e}")))
}

/// Reads space-separated `name x y` rows. There is no header.
pub fn read_cities<R: BufRead>(reader: R) -> Result<Vec<CityRecord>> {
    let mut records = Vec::new();
    for_each_line(reader, false, |line_no, line| {
        let Some([name, x, y]) = split_exact::<3>(line, ' ') else {
            tracing::debug!(line = line_no, "skipping city row without 3 fields");
            return Ok(());
        };
        records.push(CityRecord::new(
            name,
            coordinate(line_no, x)?,
            coordinate(line_no, y)?,
        ));
        Ok(())
    })?;
    Ok(records)
}

/// Reads space-separated `a b` road rows. There is no header.
pub fn read_roads<R: BufRead>(reader: R) -> Result<Vec<RoadRecord>> {
    let mut records = Vec::new();
    for_each_line(reader, false, |line_no, line| {
        match split_exact::<2>(line, ' ') {
            Some([from, to]) => records.push(RoadRecord::new(from, to)),
            None => tracing::debug!(line = line_no, "skipping road row without 2 fields"),
        }
        Ok(())
    })?;
    Ok(records)
}
