//! Portfolio Insights
//!
//! Qualitative findings against a target allocation model: who drives the
//! risk, what is missing, how income and growth split, how liquid the book
//! is, and which asset classes need rebalancing.

mod engine;
mod recommendations;

pub use engine::{InsightEngine, MAX_RISK_CONTRIBUTORS, REBALANCE_TOLERANCE};

use serde::{Deserialize, Serialize};

/// Severity of a risk contributor
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    High,
    Medium,
    Low,
}

/// A holding or sector that dominates portfolio risk
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskContributor {
    /// "SYMBOL (Name)" or "Sector (Sector)"
    pub holding: String,
    pub reason: String,
    pub impact: Impact,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct IncomeGrowthSplit {
    pub income: f64,
    pub growth: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiquidityRisk {
    /// 0-100, higher is more liquid
    pub score: f64,
    /// Empty when the score is acceptable
    pub warning: String,
}

impl Default for LiquidityRisk {
    fn default() -> Self {
        Self {
            score: 100.0,
            warning: String::new(),
        }
    }
}

/// An asset class off its target by more than the tolerance
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RebalancingAlert {
    pub category: String,
    pub current: f64,
    pub target: f64,
    /// `current - target`
    pub deviation: f64,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioInsights {
    pub top_risk_contributors: Vec<RiskContributor>,
    pub diversification_gaps: Vec<String>,
    pub income_vs_growth: IncomeGrowthSplit,
    pub liquidity_risk: LiquidityRisk,
    pub rebalancing_alerts: Vec<RebalancingAlert>,
}
