//! Line-oriented importers.
//!
//! Each reader consumes a [`BufRead`] and produces the pre-parsed records
//! the stores accept. Rows with the wrong number of fields are skipped;
//! a field that should be a number but is not is an error carrying the
//! 1-based line number.
//!
//! | source | separator | header |
//! |---|---|---|
//! | cast file (`actor, title, year`) | tab | yes |
//! | actor pair queries | tab | yes |
//! | actor list queries | line | yes |
//! | city coordinates (`name x y`) | space | no |
//! | city pairs (roads and queries) | space | no |
//!
//! [`BufRead`]: std::io::BufRead

mod cast;
mod city;
mod query;

pub use cast::read_cast;
pub use city::{read_cities, read_roads};
pub use query::{PairQuery, read_actor_names, read_actor_pairs, read_city_pairs};

use kinograph_common::utils::error::Result;
use std::io::BufRead;

/// Reads `reader` line by line, handing each 1-based line number and
/// content (without line terminator) to `visit`.
fn for_each_line<R, F>(reader: R, skip_header: bool, mut visit: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(usize, &str) -> Result<()>,
{
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        if skip_header && index == 0 {
            continue;
        }
        visit(index + 1, line.trim_end_matches('\r'))?;
    }
    Ok(())
}

/// Splits `line` on `separator`, returning the fields only if there are
/// exactly `N` of them.
fn split_exact<const N: usize>(line: &str, separator: char) -> Option<[&str; N]> {
    let mut fields = line.split(separator);
    let mut out = [""; N];
    for slot in &mut out {
        *slot = fields.next()?;
    }
    if fields.next().is_some() {
        return None;
    }
    Some(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_exact() {
        assert_eq!(split_exact::<3>("a\tb\tc", '\t'), Some(["a", "b", "c"]));
        assert_eq!(split_exact::<3>("a\tb", '\t'), None);
        assert_eq!(split_exact::<2>("a b c", ' '), None);
    }

    #[test]
    fn test_for_each_line_skips_header_and_strips_cr() {
        let mut seen = Vec::new();
        for_each_line("head\r\none\r\ntwo".as_bytes(), true, |n, line| {
            seen.push((n, line.to_string()));
            Ok(())
        })
        .unwrap();
        assert_eq!(seen, [(2, "one".to_string()), (3, "two".to_string())]);
    }
}
