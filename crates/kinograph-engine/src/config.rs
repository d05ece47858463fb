//! Engine configuration.

use kinograph_common::utils::error::{Error, Result};
use kinograph_core::graph::actor::Weighting;
use serde::{Deserialize, Serialize};

/// Settings shared by the graph facades.
///
/// # Examples
///
/// ```
/// use kinograph_engine::Config;
///
/// let config = Config::weighted()
///     .with_baseline_year(2024)
///     .with_top_k(10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// How movie years become edge weights. Fixed once a graph is built.
    pub weighting: Weighting,
    /// Size of each link-prediction list.
    pub top_k: usize,
    /// Multiplier on the A* straight-line heuristic.
    pub heuristic_weight: f64,
}

impl Config {
    /// Default link-prediction list size.
    pub const DEFAULT_TOP_K: usize = 4;

    /// Default A* heuristic multiplier.
    pub const DEFAULT_HEURISTIC_WEIGHT: f64 = 1.0;

    /// Every movie weighs 1.
    #[must_use]
    pub fn unweighted() -> Self {
        Self {
            weighting: Weighting::Unit,
            ..Self::default()
        }
    }

    /// Movies weigh their age against the default baseline year.
    #[must_use]
    pub fn weighted() -> Self {
        Self::default()
    }

    /// Sets the weighting policy.
    #[must_use]
    pub fn with_weighting(mut self, weighting: Weighting) -> Self {
        self.weighting = weighting;
        self
    }

    /// Switches to age weighting against `baseline_year`.
    #[must_use]
    pub fn with_baseline_year(mut self, baseline_year: u32) -> Self {
        self.weighting = Weighting::Age { baseline_year };
        self
    }

    /// Sets the link-prediction list size.
    #[must_use]
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Sets the A* heuristic multiplier.
    #[must_use]
    pub fn with_heuristic_weight(mut self, heuristic_weight: f64) -> Self {
        self.heuristic_weight = heuristic_weight;
        self
    }

    /// Checks that every value is in range.
    pub fn validate(&self) -> Result<()> {
        if self.top_k == 0 {
            return Err(Error::InvalidConfig("top_k must be at least 1".into()));
        }
        if !self.heuristic_weight.is_finite() || self.heuristic_weight <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "heuristic_weight must be finite and positive, got {}",
                self.heuristic_weight
            )));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weighting: Weighting::default_age(),
            top_k: Self::DEFAULT_TOP_K,
            heuristic_weight: Self::DEFAULT_HEURISTIC_WEIGHT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.weighting, Weighting::Age { baseline_year: 2020 });
        assert_eq!(config.top_k, 4);
        assert!((config.heuristic_weight - 1.0).abs() < f64::EPSILON);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = Config::unweighted().with_top_k(2).with_heuristic_weight(0.5);
        assert_eq!(config.weighting, Weighting::Unit);
        assert_eq!(config.top_k, 2);

        let config = config.with_baseline_year(1999);
        assert_eq!(config.weighting, Weighting::Age { baseline_year: 1999 });
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        assert!(matches!(
            Config::default().with_top_k(0).validate(),
            Err(Error::InvalidConfig(_))
        ));
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(Config::default().with_heuristic_weight(bad).validate().is_err());
        }
    }
}
