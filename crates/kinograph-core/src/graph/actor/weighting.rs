//! Edge weighting policies for movie edges.

use serde::{Deserialize, Serialize};

/// How a movie's release year becomes an edge weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Weighting {
    /// Every movie weighs 1.
    Unit,
    /// A movie weighs `baseline_year - year`: newer movies are cheaper.
    Age {
        /// Year subtracted from. Every inserted year should be before it.
        baseline_year: u32,
    },
}

impl Weighting {
    /// Baseline used by [`Weighting::default_age`].
    pub const DEFAULT_BASELINE_YEAR: u32 = 2020;

    /// Age weighting against [`Self::DEFAULT_BASELINE_YEAR`].
    #[must_use]
    pub const fn default_age() -> Self {
        Self::Age {
            baseline_year: Self::DEFAULT_BASELINE_YEAR,
        }
    }

    /// Returns `true` for any policy other than [`Weighting::Unit`].
    #[must_use]
    pub const fn is_weighted(self) -> bool {
        matches!(self, Self::Age { .. })
    }

    /// Returns the unclamped weight, which may be zero or negative when the
    /// year is not before the baseline.
    #[must_use]
    pub fn raw_weight(self, year: u32) -> i64 {
        match self {
            Self::Unit => 1,
            Self::Age { baseline_year } => i64::from(baseline_year) - i64::from(year),
        }
    }

    /// Returns the weight for a movie released in `year`, never below 1.
    #[must_use]
    pub fn weight(self, year: u32) -> u64 {
        self.raw_weight(year).max(1) as u64
    }
}

impl Default for Weighting {
    fn default() -> Self {
        Self::default_age()
    }
}
