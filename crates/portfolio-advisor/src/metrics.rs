//! Advanced Metrics
//!
//! Concentration indices over the same holdings the scorers see:
//! Herfindahl-Hirschman Index, effective number of holdings, a sector
//! correlation proxy, value concentration and the diversification ratio.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::model::{Holding, checked_total};
use crate::scoring::{asset_class_breakdown, region_breakdown, sector_breakdown, to_score};

/// Read-only concentration metrics
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvancedMetrics {
    /// 0-10000, higher is more concentrated
    pub herfindahl_index: u32,

    /// `10000 / HHI`, one decimal
    pub effective_number_of_holdings: f64,

    /// Largest sector weight (0-100)
    pub correlation_risk: u8,

    /// Largest single value as a share of total value (0-100)
    pub concentration_by_value: u8,

    /// Effective holdings over actual holdings (0-1), two decimals
    pub diversification_ratio: f64,
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10_f64.powi(decimals);
    (value * factor).round() / factor
}

/// `10000 · Σ (p/100)²` over raw percentages
pub fn herfindahl_index(percentages: &[f64]) -> f64 {
    percentages
        .iter()
        .map(|p| {
            let proportion = p / 100.0;
            proportion * proportion
        })
        .sum::<f64>()
        * 10_000.0
}

/// Inverse HHI, 0 when HHI is 0
pub fn effective_holdings(percentages: &[f64]) -> f64 {
    let hhi = herfindahl_index(percentages);
    if hhi > 0.0 { 10_000.0 / hhi } else { 0.0 }
}

fn value_concentration(holdings: &[Holding]) -> f64 {
    let largest = holdings.iter().map(|h| h.value).max().unwrap_or(Decimal::ZERO);

    match checked_total(holdings.iter().map(|h| h.value)) {
        Some(total) if total > Decimal::ZERO => ((largest / total) * dec!(100)).to_f64().unwrap_or(0.0),
        Some(_) => 0.0,
        // Past Decimal range, approximate in f64
        None => {
            let total: f64 = holdings.iter().filter_map(|h| h.value.to_f64()).sum();
            let largest = largest.to_f64().unwrap_or(0.0);
            if total > 0.0 { largest / total * 100.0 } else { 0.0 }
        }
    }
}

/// All advanced metrics; an empty portfolio yields all zeros
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn compute_advanced_metrics(holdings: &[Holding]) -> AdvancedMetrics {
    if holdings.is_empty() {
        return AdvancedMetrics::default();
    }

    let percentages: Vec<f64> = holdings.iter().map(|h| h.percentage).collect();
    let hhi = herfindahl_index(&percentages);
    let effective = effective_holdings(&percentages);
    let ratio = effective / holdings.len() as f64;

    let metrics = AdvancedMetrics {
        herfindahl_index: hhi.clamp(0.0, 10_000.0).round() as u32,
        effective_number_of_holdings: round_to(effective, 1),
        correlation_risk: to_score(sector_breakdown(holdings).max_value()),
        concentration_by_value: to_score(value_concentration(holdings)),
        diversification_ratio: round_to(ratio.clamp(0.0, 1.0), 2),
    };

    tracing::debug!(
        holdings = holdings.len(),
        hhi = metrics.herfindahl_index,
        effective = metrics.effective_number_of_holdings,
        "Computed advanced metrics"
    );

    metrics
}

/// Totals and per-dimension breakdowns for display
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSummary {
    pub total_value: Decimal,
    pub holdings_count: usize,
    pub sector_breakdown: Vec<(String, f64)>,
    pub asset_class_breakdown: Vec<(String, f64)>,
    pub geographic_breakdown: Vec<(String, f64)>,
}

/// Summarize a snapshot, breakdowns in first-occurrence order.
/// The total saturates at `Decimal::MAX`.
pub fn summarize(holdings: &[Holding]) -> PortfolioSummary {
    let owned = |entries: &[(&str, f64)]| -> Vec<(String, f64)> {
        entries.iter().map(|(k, v)| ((*k).to_string(), *v)).collect()
    };

    PortfolioSummary {
        total_value: checked_total(holdings.iter().map(|h| h.value)).unwrap_or(Decimal::MAX),
        holdings_count: holdings.len(),
        sector_breakdown: owned(sector_breakdown(holdings).entries()),
        asset_class_breakdown: owned(asset_class_breakdown(holdings).entries()),
        geographic_breakdown: owned(region_breakdown(holdings).entries()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn holding(symbol: &str, value: Decimal, pct: f64, sector: &str) -> Holding {
        Holding::new(symbol, value, pct).with_sector(sector)
    }

    #[test]
    fn test_empty_is_all_zero() {
        assert_eq!(compute_advanced_metrics(&[]), AdvancedMetrics::default());
    }

    #[test]
    fn test_equal_weight_hhi() {
        for n in [1_usize, 2, 4, 5, 10] {
            let pct = 100.0 / n as f64;
            let holdings: Vec<Holding> = (0..n)
                .map(|i| holding(&format!("H{i}"), dec!(10), pct, &format!("S{i}")))
                .collect();
            let metrics = compute_advanced_metrics(&holdings);

            assert_eq!(metrics.herfindahl_index, (10_000 / n) as u32);
            assert_relative_eq!(metrics.effective_number_of_holdings, n as f64, epsilon = 1e-9);
            assert_relative_eq!(metrics.diversification_ratio, 1.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_concentrated_portfolio() {
        let holdings = vec![
            holding("A", dec!(7000), 70.0, "Technology"),
            holding("B", dec!(2000), 20.0, "Technology"),
            holding("C", dec!(1000), 10.0, "Banking"),
        ];
        let metrics = compute_advanced_metrics(&holdings);

        // 4900 + 400 + 100
        assert_eq!(metrics.herfindahl_index, 5400);
        assert_relative_eq!(metrics.effective_number_of_holdings, 1.9, epsilon = 1e-9);
        assert_eq!(metrics.correlation_risk, 90);
        assert_eq!(metrics.concentration_by_value, 70);
        // 1.85185 / 3
        assert_relative_eq!(metrics.diversification_ratio, 0.62, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_value_portfolio() {
        let holdings = vec![holding("A", dec!(0), 0.0, "X"), holding("B", dec!(0), 0.0, "Y")];
        let metrics = compute_advanced_metrics(&holdings);
        assert_eq!(metrics.herfindahl_index, 0);
        assert_eq!(metrics.effective_number_of_holdings, 0.0);
        assert_eq!(metrics.concentration_by_value, 0);
        assert_eq!(metrics.diversification_ratio, 0.0);
    }

    #[test]
    fn test_values_past_decimal_range() {
        let holdings = vec![
            holding("A", Decimal::MAX, 50.0, "Technology"),
            holding("B", Decimal::MAX, 50.0, "Banking"),
        ];
        let metrics = compute_advanced_metrics(&holdings);
        assert_eq!(metrics.concentration_by_value, 50);
        assert_eq!(metrics.herfindahl_index, 5000);

        assert_eq!(summarize(&holdings).total_value, Decimal::MAX);
    }

    #[test]
    fn test_summarize() {
        let holdings = vec![
            holding("A", dec!(600), 60.0, "Technology").with_region("India"),
            holding("B", dec!(400), 40.0, "Banking").with_region("India"),
        ];
        let summary = summarize(&holdings);
        assert_eq!(summary.total_value, dec!(1000));
        assert_eq!(summary.holdings_count, 2);
        assert_eq!(summary.sector_breakdown[0], ("Technology".to_string(), 60.0));
        assert_eq!(summary.geographic_breakdown, vec![("India".to_string(), 100.0)]);
    }
}
