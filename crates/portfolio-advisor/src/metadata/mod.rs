//! Asset Metadata
//!
//! Resolves a ticker to sector, region, asset class, income type and
//! liquidity tier. The engine consumes this through [`AssetMetadata`] and
//! treats lookup failures as "exclude from metadata-dependent aggregates".

mod catalog;

pub use catalog::StaticAssetCatalog;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Whether an asset is held mainly for income or for growth
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeType {
    Income,
    Growth,
}

/// How readily a position can be sold without moving the price
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Liquidity {
    High,
    Medium,
    Low,
}

impl Liquidity {
    /// Liquidity-score points deducted per percentage point of allocation
    pub const fn penalty_per_point(self) -> f64 {
        match self {
            Self::High => 0.0,
            Self::Medium => 0.2,
            Self::Low => 0.5,
        }
    }
}

/// Reference data for one asset
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetInfo {
    pub symbol: String,
    pub name: String,
    pub sector: String,
    pub region: String,
    pub asset_class: String,
    pub income_type: IncomeType,
    pub liquidity: Liquidity,
}

/// Asset metadata source (Strategy pattern)
///
/// Implementations must be read-only; the engine shares one instance
/// across calls.
pub trait AssetMetadata: Send + Sync {
    /// Resolve a symbol, `Err(UnsupportedAsset)` when unknown
    fn resolve(&self, symbol: &str) -> Result<AssetInfo>;

    /// Source name, for logging
    fn name(&self) -> &str;
}
