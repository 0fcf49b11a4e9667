//! Reference Tables
//!
//! Target allocation models, sector/region groupings used by the scoring
//! rules, and the rationale shown next to each recommended asset class.
//! Every threshold list the engine consults lives here.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use crate::error::{AdvisorError, Result};

/// Cyclical sectors whose combined weight is penalized
pub const CYCLICAL_SECTORS: &[&str] = &["Banking", "Real Estate", "Automobile", "Construction", "Metals"];

/// Defensive sectors, any one above 5% earns a bonus
pub const DEFENSIVE_SECTORS: &[&str] = &["Healthcare", "Consumer Staples", "Utilities", "Pharmaceuticals"];

pub const TECHNOLOGY_SECTOR: &str = "Technology";

pub const DEVELOPED_MARKETS: &[&str] = &["US", "Europe", "Japan", "Australia", "Canada"];

pub const EMERGING_MARKETS: &[&str] = &["India", "China", "Brazil", "Asia Pacific", "Latin America"];

/// Sectors every portfolio is expected to touch
pub const MAJOR_SECTORS: &[&str] = &[
    "Banking & Financial Services",
    "Information Technology",
    "Pharmaceuticals",
    "Consumer Goods",
];

pub const FIXED_INCOME_CLASSES: &[&str] = &["Government Bonds", "Corporate Bonds"];

pub const INTERNATIONAL_CLASS: &str = "International Equity ETF";

pub const COMMODITIES_SECTOR: &str = "Commodities";

pub const HOME_REGION: &str = "India";

/// Canonical target model names
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetModelKind {
    Aggressive,
    #[default]
    Balanced,
    Conservative,
}

impl TargetModelKind {
    pub const ALL: [Self; 3] = [Self::Aggressive, Self::Balanced, Self::Conservative];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Aggressive => "aggressive",
            Self::Balanced => "balanced",
            Self::Conservative => "conservative",
        }
    }
}

impl fmt::Display for TargetModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetModelKind {
    type Err = AdvisorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "aggressive" => Ok(Self::Aggressive),
            "balanced" => Ok(Self::Balanced),
            "conservative" => Ok(Self::Conservative),
            other => Err(AdvisorError::UnknownTargetModel(other.to_string())),
        }
    }
}

/// One asset-class weight within a target model
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetWeight {
    pub asset_class: String,
    pub weight: f64,
}

impl TargetWeight {
    pub fn new(asset_class: impl Into<String>, weight: f64) -> Self {
        Self {
            asset_class: asset_class.into(),
            weight,
        }
    }
}

/// A named reference allocation by asset class
///
/// Weights conventionally sum to 100 but are not required to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetModel {
    pub name: String,
    pub weights: Vec<TargetWeight>,
}

impl Default for TargetModel {
    fn default() -> Self {
        Self::balanced()
    }
}

impl TargetModel {
    fn preset(kind: TargetModelKind, weights: [f64; 5]) -> Self {
        let classes = [
            "Large Cap Equity",
            "Mid Cap Equity",
            INTERNATIONAL_CLASS,
            "Government Bonds",
            "Corporate Bonds",
        ];
        Self {
            name: kind.as_str().into(),
            weights: classes
                .iter()
                .zip(weights)
                .map(|(class, weight)| TargetWeight::new(*class, weight))
                .collect(),
        }
    }

    /// Equity heavy, minimal fixed income
    pub fn aggressive() -> Self {
        Self::preset(TargetModelKind::Aggressive, [40.0, 30.0, 20.0, 5.0, 5.0])
    }

    pub fn balanced() -> Self {
        Self::preset(TargetModelKind::Balanced, [50.0, 20.0, 15.0, 10.0, 5.0])
    }

    /// 40% fixed income for capital preservation
    pub fn conservative() -> Self {
        Self::preset(TargetModelKind::Conservative, [40.0, 10.0, 10.0, 25.0, 15.0])
    }

    pub fn from_kind(kind: TargetModelKind) -> Self {
        match kind {
            TargetModelKind::Aggressive => Self::aggressive(),
            TargetModelKind::Balanced => Self::balanced(),
            TargetModelKind::Conservative => Self::conservative(),
        }
    }

    /// Load a custom model from JSON and validate it
    pub fn from_json(json: &str) -> Result<Self> {
        let model: Self = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    pub fn validate(&self) -> Result<()> {
        if self.weights.is_empty() {
            return Err(AdvisorError::Config(format!(
                "target model '{}' has no weights",
                self.name
            )));
        }

        if let Some(bad) = self
            .weights
            .iter()
            .find(|w| !w.weight.is_finite() || w.weight < 0.0)
        {
            return Err(AdvisorError::Config(format!(
                "target model '{}' has invalid weight {} for {}",
                self.name, bad.weight, bad.asset_class
            )));
        }

        Ok(())
    }

    /// Target weight for an asset class, if the model lists it
    pub fn weight_for(&self, asset_class: &str) -> Option<f64> {
        self.weights
            .iter()
            .find(|w| w.asset_class == asset_class)
            .map(|w| w.weight)
    }

    pub fn total_weight(&self) -> f64 {
        self.weights.iter().map(|w| w.weight).sum()
    }
}

/// Why an asset class belongs in a target allocation
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AllocationReason {
    pub reason: &'static str,
    pub benefits: [&'static str; 4],
}

static ALLOCATION_REASONS: LazyLock<HashMap<&'static str, AllocationReason>> = LazyLock::new(|| {
    HashMap::from([
        (
            "Large Cap Equity",
            AllocationReason {
                reason: "Large cap stocks provide stability and steady growth with lower volatility",
                benefits: ["Lower risk than small caps", "Steady dividend income", "Market leadership", "Economic moats"],
            },
        ),
        (
            "Mid Cap Equity",
            AllocationReason {
                reason: "Mid cap stocks offer balanced growth potential with moderate risk",
                benefits: [
                    "Higher growth potential",
                    "Less volatile than small caps",
                    "Good diversification",
                    "Emerging market leaders",
                ],
            },
        ),
        (
            INTERNATIONAL_CLASS,
            AllocationReason {
                reason: "International exposure reduces geographic concentration risk",
                benefits: [
                    "Geographic diversification",
                    "Currency hedging",
                    "Access to global markets",
                    "Reduced country-specific risk",
                ],
            },
        ),
        (
            "Government Bonds",
            AllocationReason {
                reason: "Government bonds provide capital preservation and steady income",
                benefits: ["Capital preservation", "Steady income", "Low credit risk", "Portfolio stability"],
            },
        ),
        (
            "Corporate Bonds",
            AllocationReason {
                reason: "Corporate bonds offer higher yields than government bonds with acceptable risk",
                benefits: ["Higher yields", "Credit diversification", "Fixed income", "Portfolio balance"],
            },
        ),
        (
            "Commodity ETF",
            AllocationReason {
                reason: "Commodities provide inflation protection and portfolio diversification",
                benefits: [
                    "Inflation hedge",
                    "Portfolio diversification",
                    "Tangible assets",
                    "Economic cycle protection",
                ],
            },
        ),
    ])
});

/// Rationale for holding an asset class, if one is on file
pub fn allocation_reason(asset_class: &str) -> Option<&'static AllocationReason> {
    ALLOCATION_REASONS.get(asset_class)
}
