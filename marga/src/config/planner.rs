//! Planner configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;
use crate::error::{MargaError, Result};
use crate::pathfinding;

/// Risk-weight sweep and search settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlannerConfig {
    /// Maximum acceptable path length (cells)
    #[serde(default = "defaults::length_budget")]
    pub length_budget: f64,

    /// Lowest swept risk weight
    #[serde(default = "defaults::risk_weight_min")]
    pub risk_weight_min: f64,

    /// Highest swept risk weight (inclusive)
    #[serde(default = "defaults::risk_weight_max")]
    pub risk_weight_max: f64,

    /// Number of intervals between min and max weight
    #[serde(default = "defaults::risk_weight_steps")]
    pub risk_weight_steps: u32,

    /// Length units worth one unit of risk in the path score
    #[serde(default = "defaults::risk_to_length_ratio")]
    pub risk_to_length_ratio: f64,

    /// Maximum waypoints a single search may add before giving up
    #[serde(default = "defaults::max_search_steps")]
    pub max_search_steps: usize,

    /// Plan targets on the rayon thread pool
    #[serde(default)]
    pub use_parallel: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            length_budget: defaults::length_budget(),
            risk_weight_min: defaults::risk_weight_min(),
            risk_weight_max: defaults::risk_weight_max(),
            risk_weight_steps: defaults::risk_weight_steps(),
            risk_to_length_ratio: defaults::risk_to_length_ratio(),
            max_search_steps: defaults::max_search_steps(),
            use_parallel: false,
        }
    }
}

impl PlannerConfig {
    /// Override the length budget
    pub fn with_length_budget(mut self, budget: f64) -> Self {
        self.length_budget = budget;
        self
    }

    /// Override the swept weight range
    pub fn with_risk_weights(mut self, min: f64, max: f64, steps: u32) -> Self {
        self.risk_weight_min = min;
        self.risk_weight_max = max;
        self.risk_weight_steps = steps;
        self
    }

    /// Enable or disable parallel target planning
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.use_parallel = parallel;
        self
    }

    /// Check that all values are usable
    pub fn validate(&self) -> Result<()> {
        if !(self.length_budget.is_finite() && self.length_budget > 0.0) {
            return Err(MargaError::Config(format!(
                "length_budget must be positive, got {}",
                self.length_budget
            )));
        }
        if !(self.risk_to_length_ratio.is_finite() && self.risk_to_length_ratio > 0.0) {
            return Err(MargaError::Config(format!(
                "risk_to_length_ratio must be positive, got {}",
                self.risk_to_length_ratio
            )));
        }
        if self.risk_weight_steps == 0 {
            return Err(MargaError::Config(
                "risk_weight_steps must be at least 1".to_string(),
            ));
        }
        if !(self.risk_weight_min.is_finite()
            && self.risk_weight_max.is_finite()
            && self.risk_weight_min >= 0.0
            && self.risk_weight_min <= self.risk_weight_max)
        {
            return Err(MargaError::Config(format!(
                "invalid risk weight range [{}, {}]",
                self.risk_weight_min, self.risk_weight_max
            )));
        }
        if self.max_search_steps == 0 {
            return Err(MargaError::Config(
                "max_search_steps must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Risk weights visited by the sweep, ascending, both ends included.
    ///
    /// Computed as `(min * steps + k * (max - min)) / steps` so the default
    /// range yields exactly `i / 25` for `i` in `25..=50`.
    pub fn risk_weights(&self) -> impl Iterator<Item = f64> + '_ {
        let steps = f64::from(self.risk_weight_steps);
        let span = self.risk_weight_max - self.risk_weight_min;
        (0..=self.risk_weight_steps)
            .map(move |k| (self.risk_weight_min * steps + f64::from(k) * span) / steps)
    }

    /// Score of a path with the given risk and length
    #[inline]
    pub fn score(&self, risk: f64, length: f64) -> f64 {
        pathfinding::score(risk, length, self.risk_to_length_ratio)
    }
}
