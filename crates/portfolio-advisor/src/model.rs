//! Domain Models
//!
//! Core data types for portfolio diversification analysis.
//! Monetary values use `rust_decimal`; allocation percentages and scores are
//! plain `f64` since they feed logarithms and squared terms.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{AdvisorError, Result};
use crate::metadata::{AssetInfo, AssetMetadata};

/// Upper bound on positions accepted by [`build_holdings`].
pub const MAX_HOLDINGS: usize = 10_000;

/// Display label derived from an asset class
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetType {
    Stock,
    #[serde(rename = "ETF")]
    Etf,
    #[serde(rename = "Mutual Fund")]
    MutualFund,
    Bond,
    Commodity,
    Other,
}

impl AssetType {
    /// Classify by asset-class label, falling back to the symbol for funds.
    ///
    /// Checks run in order, so "Commodity ETF" is an ETF and
    /// "International Equity ETF" is an ETF, not a stock.
    pub fn classify(asset_class: &str, symbol: &str) -> Self {
        if asset_class.contains("ETF") {
            Self::Etf
        } else if asset_class.contains("Mutual Fund") || symbol.contains("FUND") {
            Self::MutualFund
        } else if asset_class.contains("Bond") {
            Self::Bond
        } else if asset_class.contains("Commodity") {
            Self::Commodity
        } else if asset_class.contains("Equity") {
            Self::Stock
        } else {
            Self::Other
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Stock => "Stock",
            Self::Etf => "ETF",
            Self::MutualFund => "Mutual Fund",
            Self::Bond => "Bond",
            Self::Commodity => "Commodity",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for AssetType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A holding in a portfolio snapshot
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Ticker symbol, unique within one snapshot
    pub symbol: String,

    /// Display name
    pub name: String,

    pub sector: String,

    pub region: String,

    /// Asset class label (e.g., "Large Cap Equity", "Government Bonds")
    pub asset_class: String,

    /// Derived from `asset_class` and `symbol`
    pub asset_type: AssetType,

    /// Current market value
    pub value: Decimal,

    /// Share of total portfolio value (0-100)
    pub percentage: f64,
}

impl Holding {
    pub fn new(symbol: impl Into<String>, value: Decimal, percentage: f64) -> Self {
        let symbol = symbol.into();
        Self {
            name: symbol.clone(),
            symbol,
            sector: String::new(),
            region: String::new(),
            asset_class: String::new(),
            asset_type: AssetType::Other,
            value,
            percentage,
        }
    }

    /// Build from resolved catalog metadata
    pub fn from_asset(info: &AssetInfo, value: Decimal, percentage: f64) -> Self {
        Self::new(&info.symbol, value, percentage)
            .with_name(&info.name)
            .with_sector(&info.sector)
            .with_region(&info.region)
            .with_asset_class(&info.asset_class)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_sector(mut self, sector: impl Into<String>) -> Self {
        self.sector = sector.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    /// Sets the asset class and re-derives the asset type
    pub fn with_asset_class(mut self, asset_class: impl Into<String>) -> Self {
        self.asset_class = asset_class.into();
        self.asset_type = AssetType::classify(&self.asset_class, &self.symbol);
        self
    }
}

/// A raw position before metadata resolution
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Position {
    pub symbol: String,
    pub value: Decimal,
}

impl Position {
    pub fn new(symbol: impl Into<String>, value: Decimal) -> Self {
        Self {
            symbol: symbol.into().to_uppercase(),
            value,
        }
    }
}

/// Sum of monetary values, `None` if the total overflows `Decimal`
pub fn checked_total(values: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    values.into_iter().try_fold(Decimal::ZERO, Decimal::checked_add)
}

/// Resolve positions against a metadata source and compute percentages.
///
/// Percentages are each value's share of the total and sum to 100 when the
/// total is positive; a zero total yields all-zero percentages.
pub fn build_holdings(positions: &[Position], metadata: &dyn AssetMetadata) -> Result<Vec<Holding>> {
    if positions.len() > MAX_HOLDINGS {
        tracing::warn!(count = positions.len(), max = MAX_HOLDINGS, "Rejecting oversized portfolio");
        return Err(AdvisorError::TooManyHoldings {
            count: positions.len(),
            max: MAX_HOLDINGS,
        });
    }

    if let Some(negative) = positions.iter().find(|p| p.value < Decimal::ZERO) {
        tracing::warn!(symbol = %negative.symbol, "Rejecting negative position value");
        return Err(AdvisorError::InvalidHolding(format!(
            "{} has negative value {}",
            negative.symbol, negative.value
        )));
    }

    let Some(total) = checked_total(positions.iter().map(|p| p.value)) else {
        tracing::warn!(count = positions.len(), "Rejecting portfolio whose total value overflows");
        return Err(AdvisorError::InvalidHolding(
            "total portfolio value is too large to represent".into(),
        ));
    };

    positions
        .iter()
        .map(|position| {
            let info = metadata.resolve(&position.symbol)?;
            let percentage = if total > Decimal::ZERO {
                ((position.value / total) * dec!(100))
                    .to_f64()
                    .unwrap_or(0.0)
            } else {
                0.0
            };
            Ok(Holding::from_asset(&info, position.value, percentage))
        })
        .collect()
}

/// Diversification quality, every field in 0-100
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiversificationScores {
    pub overall: u8,
    pub sector: u8,
    pub asset_class: u8,
    pub geographic: u8,
    pub concentration: u8,
}

impl DiversificationScores {
    /// Headline risk reading of the overall score
    pub const fn risk_band(&self) -> RiskBand {
        match self.overall {
            70.. => RiskBand::Low,
            50..=69 => RiskBand::Moderate,
            _ => RiskBand::High,
        }
    }
}

/// Risk band derived from the overall diversification score
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskBand {
    Low,
    Moderate,
    High,
}

impl RiskBand {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "LOW RISK",
            Self::Moderate => "MODERATE RISK",
            Self::High => "HIGH RISK",
        }
    }
}

impl fmt::Display for RiskBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::StaticAssetCatalog;

    #[test]
    fn test_asset_type_classification() {
        assert_eq!(AssetType::classify("Large Cap Equity", "TCS"), AssetType::Stock);
        assert_eq!(AssetType::classify("International Equity ETF", "NASDAQ100"), AssetType::Etf);
        assert_eq!(AssetType::classify("Commodity ETF", "GOLDETF"), AssetType::Etf);
        assert_eq!(AssetType::classify("Corporate Bonds", "CORPBOND"), AssetType::Bond);
        assert_eq!(AssetType::classify("Debt", "LIQUIDFUND"), AssetType::MutualFund);
        assert_eq!(AssetType::classify("Commodity", "SILVER"), AssetType::Commodity);
        assert_eq!(AssetType::classify("REIT", "REIT"), AssetType::Other);
    }

    #[test]
    fn test_build_holdings_percentages() {
        let catalog = StaticAssetCatalog::new();
        let positions = vec![
            Position::new("tcs", dec!(3000)),
            Position::new("GILT10YR", dec!(1000)),
        ];

        let holdings = build_holdings(&positions, &catalog).unwrap();
        assert_eq!(holdings.len(), 2);
        assert_eq!(holdings[0].symbol, "TCS");
        assert_eq!(holdings[0].sector, "Information Technology");
        assert_eq!(holdings[1].asset_type, AssetType::Bond);
        assert!((holdings[0].percentage - 75.0).abs() < 1e-9);
        assert!((holdings[1].percentage - 25.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_holdings_zero_total() {
        let catalog = StaticAssetCatalog::new();
        let positions = vec![Position::new("TCS", dec!(0)), Position::new("INFY", dec!(0))];

        let holdings = build_holdings(&positions, &catalog).unwrap();
        assert!(holdings.iter().all(|h| h.percentage == 0.0));
    }

    #[test]
    fn test_build_holdings_rejects_bad_input() {
        let catalog = StaticAssetCatalog::new();

        let negative = vec![Position::new("TCS", dec!(-1))];
        assert!(matches!(
            build_holdings(&negative, &catalog),
            Err(AdvisorError::InvalidHolding(_))
        ));

        let unknown = vec![Position::new("NOPE", dec!(100))];
        assert!(matches!(
            build_holdings(&unknown, &catalog),
            Err(AdvisorError::UnsupportedAsset(_))
        ));

        let oversized = vec![Position::new("TCS", dec!(1)); MAX_HOLDINGS + 1];
        assert!(matches!(
            build_holdings(&oversized, &catalog),
            Err(AdvisorError::TooManyHoldings { .. })
        ));

        let overflowing = vec![Position::new("TCS", Decimal::MAX), Position::new("INFY", Decimal::MAX)];
        assert!(matches!(
            build_holdings(&overflowing, &catalog),
            Err(AdvisorError::InvalidHolding(_))
        ));
    }

    #[test]
    fn test_checked_total() {
        assert_eq!(checked_total([dec!(1.5), dec!(2.5)]), Some(dec!(4)));
        assert_eq!(checked_total(Vec::new()), Some(Decimal::ZERO));
        assert_eq!(checked_total([Decimal::MAX, Decimal::MAX]), None);
    }

    #[test]
    fn test_holding_keeps_symbol_as_given() {
        let holding = Holding::new("tcs", dec!(10), 100.0);
        assert_eq!(holding.symbol, "tcs");
        assert_eq!(holding.name, "tcs");
        assert_eq!(Position::new("tcs", dec!(10)).symbol, "TCS");
    }

    #[test]
    fn test_risk_band() {
        let band = |overall| DiversificationScores { overall, ..Default::default() }.risk_band();
        assert_eq!(band(100), RiskBand::Low);
        assert_eq!(band(70), RiskBand::Low);
        assert_eq!(band(69), RiskBand::Moderate);
        assert_eq!(band(50), RiskBand::Moderate);
        assert_eq!(band(49), RiskBand::High);
        assert_eq!(band(0), RiskBand::High);
        assert_eq!(RiskBand::Moderate.to_string(), "MODERATE RISK");
    }
}
