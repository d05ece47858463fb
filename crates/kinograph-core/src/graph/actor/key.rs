//! Movie keys.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Separator between title and year in a rendered key.
const SEPARATOR: &str = "#@";

/// Identifies a movie by title and release year.
///
/// Titles repeat across remakes and re-releases, so the year is part of the
/// identity. Renders as `title#@year`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovieKey {
    title: Arc<str>,
    year: u32,
}

impl MovieKey {
    /// Creates a key.
    pub fn new(title: impl Into<Arc<str>>, year: u32) -> Self {
        Self {
            title: title.into(),
            year,
        }
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the release year.
    #[must_use]
    pub fn year(&self) -> u32 {
        self.year
    }
}

impl fmt::Display for MovieKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{SEPARATOR}{}", self.title, self.year)
    }
}
