//! Cast file reader.

use super::{for_each_line, split_exact};
use kinograph_common::utils::error::{Error, Result};
use kinograph_core::record::CastRecord;
use std::io::BufRead;

/// Reads a tab-separated cast file: a header line, then
/// `actor<TAB>title<TAB>year` rows.
pub fn read_cast<R: BufRead>(reader: R) -> Result<Vec<CastRecord>> {
    let mut records = Vec::new();
    let mut skipped = 0usize;

    for_each_line(reader, true, |line_no, line| {
        let Some([actor, title, year]) = split_exact::<3>(line, '\t') else {
            skipped += 1;
            tracing::debug!(line = line_no, "skipping cast row without 3 fields");
            return Ok(());
        };
        let year = year
            .trim()
            .parse::<u32>()
            .map_err(|e| Error::parse(line_no, format!("bad year {year:?}: {e}")))?;
        records.push(CastRecord::new(actor, title, year));
        Ok(())
    })?;

    if skipped > 0 {
        tracing::warn!(skipped, "skipped malformed cast rows");
    }
    Ok(records)
}
