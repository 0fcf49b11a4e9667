//! Static Asset Catalog
//!
//! Built-in reference data for Indian large/mid caps, bonds, a REIT and a
//! couple of international ETFs. Used as the default metadata source and in
//! tests.

use super::{AssetInfo, AssetMetadata, IncomeType, Liquidity};
use crate::error::{AdvisorError, Result};

use super::IncomeType::{Growth, Income};
use super::Liquidity::{High, Medium};

// (symbol, name, sector, region, asset class, income type, liquidity)
type Row = (&'static str, &'static str, &'static str, &'static str, &'static str, IncomeType, Liquidity);

const LARGE_CAP: &str = "Large Cap Equity";

const ASSETS: &[Row] = &[
    // Large caps
    ("RELIANCE", "Reliance Industries Limited", "Energy & Petrochemicals", "India", LARGE_CAP, Growth, High),
    ("TCS", "Tata Consultancy Services", "Information Technology", "India", LARGE_CAP, Growth, High),
    ("HDFCBANK", "HDFC Bank Limited", "Banking & Financial Services", "India", LARGE_CAP, Income, High),
    ("INFY", "Infosys Limited", "Information Technology", "India", LARGE_CAP, Growth, High),
    ("ICICIBANK", "ICICI Bank Limited", "Banking & Financial Services", "India", LARGE_CAP, Income, High),
    ("HINDUNILVR", "Hindustan Unilever Limited", "Consumer Goods", "India", LARGE_CAP, Growth, High),
    ("ITC", "ITC Limited", "Consumer Goods", "India", LARGE_CAP, Income, High),
    ("KOTAKBANK", "Kotak Mahindra Bank Limited", "Banking & Financial Services", "India", LARGE_CAP, Growth, High),
    ("LT", "Larsen & Toubro Limited", "Infrastructure & Construction", "India", LARGE_CAP, Growth, High),
    ("SBIN", "State Bank of India", "Banking & Financial Services", "India", LARGE_CAP, Income, High),
    ("MARUTI", "Maruti Suzuki India Limited", "Automotive", "India", LARGE_CAP, Growth, High),
    ("WIPRO", "Wipro Limited", "Information Technology", "India", LARGE_CAP, Growth, High),
    ("TECHM", "Tech Mahindra Limited", "Information Technology", "India", LARGE_CAP, Growth, High),
    ("HCLTECH", "HCL Technologies Limited", "Information Technology", "India", LARGE_CAP, Growth, High),
    // Mid caps
    ("BAJFINANCE", "Bajaj Finance Limited", "Banking & Financial Services", "India", "Mid Cap Equity", Growth, High),
    // Pharma
    ("SUNPHARMA", "Sun Pharmaceutical Industries", "Pharmaceuticals", "India", LARGE_CAP, Growth, High),
    ("DRREDDY", "Dr. Reddys Laboratories", "Pharmaceuticals", "India", LARGE_CAP, Growth, High),
    // Metals & mining
    ("TATASTEEL", "Tata Steel Limited", "Metals & Mining", "India", LARGE_CAP, Growth, High),
    ("HINDALCO", "Hindalco Industries Limited", "Metals & Mining", "India", LARGE_CAP, Growth, High),
    // Power & utilities
    ("NTPC", "NTPC Limited", "Power & Utilities", "India", LARGE_CAP, Income, High),
    ("POWERGRID", "Power Grid Corporation", "Power & Utilities", "India", LARGE_CAP, Income, High),
    // International ETFs
    ("NASDAQ100", "NASDAQ 100 ETF", "Technology", "United States", "International Equity ETF", Growth, High),
    ("GOLDETF", "Gold ETF", "Commodities", "Global", "Commodity ETF", Income, High),
    // Bonds
    ("GILT10YR", "10 Year Government Bond", "Government Securities", "India", "Government Bonds", Income, Medium),
    ("CORPBOND", "Corporate Bond Fund", "Corporate Debt", "India", "Corporate Bonds", Income, Medium),
    // Real estate
    ("REIT", "Real Estate Investment Trust", "Real Estate", "India", "REIT", Income, Medium),
];

fn to_info(row: &Row) -> AssetInfo {
    let (symbol, name, sector, region, asset_class, income_type, liquidity) = *row;
    AssetInfo {
        symbol: symbol.into(),
        name: name.into(),
        sector: sector.into(),
        region: region.into(),
        asset_class: asset_class.into(),
        income_type,
        liquidity,
    }
}

/// Catalog backed by the built-in asset table
#[derive(Clone, Copy, Debug, Default)]
pub struct StaticAssetCatalog;

impl StaticAssetCatalog {
    pub const fn new() -> Self {
        Self
    }

    /// Number of assets in the table
    pub const fn len(&self) -> usize {
        ASSETS.len()
    }

    pub const fn is_empty(&self) -> bool {
        ASSETS.is_empty()
    }

    /// Case-insensitive substring match over symbol and name
    pub fn search(&self, query: &str) -> Vec<AssetInfo> {
        let needle = query.to_lowercase();
        ASSETS
            .iter()
            .filter(|(symbol, name, ..)| {
                symbol.to_lowercase().contains(&needle) || name.to_lowercase().contains(&needle)
            })
            .map(to_info)
            .collect()
    }

    /// Distinct sectors in table order
    pub fn sectors(&self) -> Vec<&'static str> {
        distinct(ASSETS.iter().map(|row| row.2))
    }

    /// Distinct asset classes in table order
    pub fn asset_classes(&self) -> Vec<&'static str> {
        distinct(ASSETS.iter().map(|row| row.4))
    }

    /// Distinct regions in table order
    pub fn regions(&self) -> Vec<&'static str> {
        distinct(ASSETS.iter().map(|row| row.3))
    }
}

fn distinct(values: impl Iterator<Item = &'static str>) -> Vec<&'static str> {
    values.fold(Vec::new(), |mut seen, value| {
        if !seen.contains(&value) {
            seen.push(value);
        }
        seen
    })
}

impl AssetMetadata for StaticAssetCatalog {
    fn resolve(&self, symbol: &str) -> Result<AssetInfo> {
        let wanted = symbol.to_uppercase();
        ASSETS
            .iter()
            .find(|row| row.0 == wanted)
            .map(to_info)
            .ok_or_else(|| AdvisorError::UnsupportedAsset(symbol.to_string()))
    }

    fn name(&self) -> &str {
        "static-catalog"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_case_insensitive() {
        let catalog = StaticAssetCatalog::new();
        let info = catalog.resolve("infy").unwrap();
        assert_eq!(info.symbol, "INFY");
        assert_eq!(info.sector, "Information Technology");
        assert_eq!(info.income_type, IncomeType::Growth);
        assert_eq!(info.liquidity, Liquidity::High);
    }

    #[test]
    fn test_resolve_unknown() {
        let catalog = StaticAssetCatalog::new();
        assert!(matches!(
            catalog.resolve("DOGE"),
            Err(AdvisorError::UnsupportedAsset(s)) if s == "DOGE"
        ));
    }

    #[test]
    fn test_search() {
        let catalog = StaticAssetCatalog::new();
        let banks = catalog.search("bank");
        assert!(banks.iter().any(|a| a.symbol == "HDFCBANK"));
        assert!(banks.iter().any(|a| a.symbol == "SBIN"));
        assert!(catalog.search("zzz").is_empty());
    }

    #[test]
    fn test_distinct_listings() {
        let catalog = StaticAssetCatalog::new();
        assert_eq!(catalog.len(), 26);
        assert_eq!(catalog.regions(), vec!["India", "United States", "Global"]);
        assert_eq!(catalog.asset_classes().first(), Some(&"Large Cap Equity"));
        let sectors = catalog.sectors();
        assert_eq!(sectors.iter().filter(|s| **s == "Information Technology").count(), 1);
    }
}
