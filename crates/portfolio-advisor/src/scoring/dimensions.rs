//! Dimension Scorers
//!
//! Sector, asset-class and geographic diversification. Each groups
//! holdings by one attribute, scores the spread of the group totals with
//! [`diversity_score`], then applies that dimension's bonus/penalty rules.

use super::entropy::{Breakdown, diversity_score, group_and_sum};
use crate::config::{CYCLICAL_SECTORS, DEFENSIVE_SECTORS, DEVELOPED_MARKETS, EMERGING_MARKETS, TECHNOLOGY_SECTOR};
use crate::model::Holding;

/// Percentage totals per sector
pub fn sector_breakdown(holdings: &[Holding]) -> Breakdown<&str> {
    group_and_sum(holdings, |h| h.sector.as_str(), |h| h.percentage)
}

/// Percentage totals per asset class
pub fn asset_class_breakdown(holdings: &[Holding]) -> Breakdown<&str> {
    group_and_sum(holdings, |h| h.asset_class.as_str(), |h| h.percentage)
}

/// Percentage totals per region
pub fn region_breakdown(holdings: &[Holding]) -> Breakdown<&str> {
    group_and_sum(holdings, |h| h.region.as_str(), |h| h.percentage)
}

fn sum_of(breakdown: &Breakdown<&str>, names: &[&str]) -> f64 {
    names.iter().map(|name| breakdown.get(*name)).sum()
}

fn sum_containing(breakdown: &Breakdown<&str>, needles: &[&str]) -> f64 {
    breakdown.sum_where(|class| {
        let lower = class.to_lowercase();
        needles.iter().any(|needle| lower.contains(needle))
    })
}

/// Sector diversification score (0-100)
pub fn sector_score(holdings: &[Holding]) -> f64 {
    let sectors = sector_breakdown(holdings);
    let mut score = diversity_score(&sectors.values());

    let cyclical = sum_of(&sectors, CYCLICAL_SECTORS);
    if cyclical > 60.0 {
        score -= 15.0;
    } else if cyclical > 40.0 {
        score -= 10.0;
    }

    if DEFENSIVE_SECTORS.iter().any(|s| sectors.get(*s) > 5.0) {
        score += 5.0;
    }

    let technology = sectors.get(TECHNOLOGY_SECTOR);
    if technology < 5.0 {
        score -= 10.0;
    } else if technology > 30.0 {
        score -= 5.0;
    }

    score.clamp(0.0, 100.0)
}

/// Asset-class diversification score (0-100)
///
/// Class labels are matched by case-insensitive substring, so "Government
/// Bonds" and "Corporate Bonds" both count as bonds.
pub fn asset_class_score(holdings: &[Holding]) -> f64 {
    let classes = asset_class_breakdown(holdings);
    let mut score = diversity_score(&classes.values());

    let bonds = sum_containing(&classes, &["bond"]);
    if bonds > 10.0 && bonds < 40.0 {
        score += 10.0;
    } else if bonds > 5.0 {
        score += 5.0;
    }

    let international = sum_containing(&classes, &["international", "global"]);
    if international > 10.0 {
        score += 10.0;
    } else if international > 5.0 {
        score += 5.0;
    }

    let equity = sum_containing(&classes, &["equity", "stock"]);
    if equity > 90.0 {
        score -= 15.0;
    } else if equity > 80.0 {
        score -= 10.0;
    }

    let alternatives = sum_containing(&classes, &["commodity", "reit", "gold"]);
    if alternatives > 5.0 && alternatives < 20.0 {
        score += 5.0;
    }

    score.clamp(0.0, 100.0)
}

/// Geographic diversification score (0-100)
pub fn geographic_score(holdings: &[Holding]) -> f64 {
    let regions = region_breakdown(holdings);
    let mut score = diversity_score(&regions.values());

    let largest = regions.max_value();
    if largest > 85.0 {
        score -= 20.0;
    } else if largest > 70.0 {
        score -= 15.0;
    } else if largest > 60.0 {
        score -= 10.0;
    }

    let developed = sum_of(&regions, DEVELOPED_MARKETS);
    if developed > 20.0 && developed < 60.0 {
        score += 5.0;
    }

    let emerging = sum_of(&regions, EMERGING_MARKETS);
    if emerging > 10.0 && emerging < 40.0 {
        score += 5.0;
    } else if emerging > 50.0 {
        score -= 10.0;
    }

    score.clamp(0.0, 100.0)
}
