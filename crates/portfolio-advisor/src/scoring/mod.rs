//! Diversification Scoring
//!
//! Dimension scorers, concentration risk and the composite aggregator.

mod composite;
mod concentration;
mod dimensions;
mod entropy;

pub use composite::DimensionScores;
pub use concentration::concentration_score;
pub use dimensions::{
    asset_class_breakdown, asset_class_score, geographic_score, region_breakdown, sector_breakdown, sector_score,
};
pub use entropy::{Breakdown, diversity_score, group_and_sum};

use crate::model::{DiversificationScores, Holding};

/// Round a 0-100 score to its integer form
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) fn to_score(value: f64) -> u8 {
    value.clamp(0.0, 100.0).round() as u8
}

/// Score each dimension without rounding
pub fn dimension_scores(holdings: &[Holding]) -> DimensionScores {
    DimensionScores {
        sector: sector_score(holdings),
        asset_class: asset_class_score(holdings),
        geographic: geographic_score(holdings),
        concentration: concentration_score(holdings),
    }
}

/// Sub-scores plus the composite. The composite is computed from the
/// unrounded sub-scores; an empty portfolio scores 0 everywhere.
pub fn compute_scores(holdings: &[Holding]) -> DiversificationScores {
    if holdings.is_empty() {
        return DiversificationScores::default();
    }

    let dims = dimension_scores(holdings);
    let scores = DiversificationScores {
        overall: to_score(dims.overall()),
        sector: to_score(dims.sector),
        asset_class: to_score(dims.asset_class),
        geographic: to_score(dims.geographic),
        concentration: to_score(dims.concentration),
    };

    tracing::debug!(
        holdings = holdings.len(),
        overall = scores.overall,
        sector = scores.sector,
        asset_class = scores.asset_class,
        geographic = scores.geographic,
        concentration = scores.concentration,
        "Computed diversification scores"
    );

    scores
}
