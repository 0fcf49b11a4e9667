//! Free-text recommendations, in a fixed rule order

use super::engine::{has_fixed_income, has_international, income_vs_growth};
use crate::config::COMMODITIES_SECTOR;
use crate::metadata::AssetInfo;
use crate::model::Holding;
use crate::scoring::sector_breakdown;

const MIN_HOLDINGS: usize = 8;
const MAX_SECTOR_PCT: f64 = 40.0;
const MAX_HOLDING_PCT: f64 = 20.0;
const MIN_INCOME_PCT: f64 = 20.0;

const WELL_DIVERSIFIED: &str =
    "Your portfolio shows good diversification! Consider periodic rebalancing to maintain target allocations.";

/// Every rule that fires contributes one message. `holdings` must be non-empty.
pub(super) fn recommend(holdings: &[Holding], resolved: &[(&Holding, AssetInfo)]) -> Vec<String> {
    let mut out = Vec::new();

    if holdings.len() < MIN_HOLDINGS {
        out.push("Consider adding more holdings to achieve better diversification (aim for 8-15 holdings)".to_string());
    }

    let largest_sector = sector_breakdown(holdings).max_value();
    if largest_sector > MAX_SECTOR_PCT {
        out.push(format!(
            "Reduce concentration in your largest sector ({largest_sector:.1}%) to below 30%"
        ));
    }

    let largest_holding = holdings.iter().map(|h| h.percentage).fold(f64::MIN, f64::max);
    if largest_holding > MAX_HOLDING_PCT {
        out.push("Consider reducing your largest holding to below 20% of total portfolio".to_string());
    }

    if !has_fixed_income(holdings) {
        out.push("Add fixed income securities (bonds) for portfolio stability and regular income".to_string());
    }

    if !has_international(holdings) {
        out.push("Consider adding international exposure through global ETFs for better diversification".to_string());
    }

    if !holdings.iter().any(|h| h.sector == COMMODITIES_SECTOR) {
        out.push("Consider adding commodity exposure (Gold ETF) as an inflation hedge".to_string());
    }

    if income_vs_growth(resolved).income < MIN_INCOME_PCT {
        out.push("Consider adding more dividend-paying stocks or bonds for regular income generation".to_string());
    }

    if out.is_empty() {
        out.push(WELL_DIVERSIFIED.to_string());
    }

    tracing::debug!(holdings = holdings.len(), count = out.len(), "Generated recommendations");

    out
}

#[cfg(test)]
mod tests {
    use crate::insight::InsightEngine;
    use crate::metadata::StaticAssetCatalog;
    use crate::model::{Position, build_holdings};
    use rust_decimal_macros::dec;

    fn recommendations_for(positions: &[(&str, rust_decimal::Decimal)]) -> Vec<String> {
        let positions: Vec<Position> = positions.iter().map(|(s, v)| Position::new(*s, *v)).collect();
        let holdings = build_holdings(&positions, &StaticAssetCatalog::new()).unwrap();
        InsightEngine::default().generate_recommendations(&holdings)
    }

    #[test]
    fn test_single_stock_fires_every_rule() {
        let recs = recommendations_for(&[("TCS", dec!(1000))]);
        assert_eq!(recs.len(), 7);
        assert_eq!(
            recs[0],
            "Consider adding more holdings to achieve better diversification (aim for 8-15 holdings)"
        );
        assert_eq!(recs[1], "Reduce concentration in your largest sector (100.0%) to below 30%");
        assert!(recs.iter().all(|r| !r.starts_with("Your portfolio shows good")));
    }

    #[test]
    fn test_well_diversified_portfolio() {
        let recs = recommendations_for(&[
            ("TCS", dec!(100)),
            ("HDFCBANK", dec!(100)),
            ("SUNPHARMA", dec!(100)),
            ("ITC", dec!(100)),
            ("NTPC", dec!(100)),
            ("LT", dec!(100)),
            ("NASDAQ100", dec!(100)),
            ("GOLDETF", dec!(100)),
            ("GILT10YR", dec!(100)),
            ("RELIANCE", dec!(100)),
        ]);
        assert_eq!(recs, vec![super::WELL_DIVERSIFIED.to_string()]);
    }

    #[test]
    fn test_low_income_share() {
        // Only HDFCBANK (10%) is income; every other rule is satisfied
        let recs = recommendations_for(&[
            ("TCS", dec!(100)),
            ("HDFCBANK", dec!(100)),
            ("SUNPHARMA", dec!(100)),
            ("HINDUNILVR", dec!(100)),
            ("MARUTI", dec!(100)),
            ("LT", dec!(100)),
            ("NASDAQ100", dec!(100)),
            ("GOLDETF", dec!(0)),
            ("INFY", dec!(100)),
            ("RELIANCE", dec!(100)),
            ("CORPBOND", dec!(0)),
        ]);
        assert_eq!(
            recs,
            vec!["Consider adding more dividend-paying stocks or bonds for regular income generation".to_string()]
        );
    }
}
