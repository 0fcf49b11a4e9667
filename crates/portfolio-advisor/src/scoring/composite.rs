//! Composite Aggregator
//!
//! Weighted blend of the four dimension scores with interaction
//! adjustments that reward uniformly good profiles and punish weak spots.

use serde::{Deserialize, Serialize};

/// Unrounded dimension scores, each in 0-100
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DimensionScores {
    pub sector: f64,
    pub asset_class: f64,
    pub geographic: f64,
    pub concentration: f64,
}

impl DimensionScores {
    fn as_array(&self) -> [f64; 4] {
        [self.sector, self.asset_class, self.geographic, self.concentration]
    }

    /// Weighted average before interaction effects
    pub fn weighted_base(&self) -> f64 {
        self.sector * 0.25 + self.asset_class * 0.30 + self.geographic * 0.20 + self.concentration * 0.25
    }

    /// Sum of the interaction rules, each evaluated independently
    pub fn interaction_adjustment(&self) -> f64 {
        let scores = self.as_array();
        let mut adjustment = 0.0;

        if scores.iter().all(|s| *s > 60.0) {
            adjustment += 5.0;
        }

        if scores.iter().any(|s| *s < 30.0) {
            adjustment -= 10.0;
        }

        let max = scores.iter().copied().fold(f64::MIN, f64::max);
        let min = scores.iter().copied().fold(f64::MAX, f64::min);
        let range = max - min;
        if range < 20.0 {
            adjustment += 5.0;
        } else if range > 40.0 {
            adjustment -= 5.0;
        }

        adjustment
    }

    /// Overall score, rounded and clamped to 0-100
    pub fn overall(&self) -> f64 {
        (self.weighted_base() + self.interaction_adjustment())
            .clamp(0.0, 100.0)
            .round()
    }
}
