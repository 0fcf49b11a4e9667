//! Insight Engine
//!
//! Consumes holdings plus a target model and produces [`PortfolioInsights`].
//! Metadata lookups that fail are skipped; nothing here returns an error.

use std::collections::HashSet;
use std::sync::Arc;

use super::recommendations;
use super::{Impact, IncomeGrowthSplit, LiquidityRisk, PortfolioInsights, RebalancingAlert, RiskContributor};
use crate::config::{
    FIXED_INCOME_CLASSES, HOME_REGION, INTERNATIONAL_CLASS, MAJOR_SECTORS, TargetModel, TargetModelKind,
};
use crate::metadata::{AssetInfo, AssetMetadata, IncomeType, StaticAssetCatalog};
use crate::model::Holding;
use crate::scoring::{asset_class_breakdown, sector_breakdown};

/// Allowed drift from a target weight before an alert fires (exclusive)
pub const REBALANCE_TOLERANCE: f64 = 5.0;

/// Upper bound on the combined holding + sector contributor list
pub const MAX_RISK_CONTRIBUTORS: usize = 5;

const MAX_HOLDING_CONTRIBUTORS: usize = 3;
const LIQUIDITY_WARNING_BELOW: f64 = 80.0;

/// Generates insights and recommendations against a metadata source
#[derive(Clone)]
pub struct InsightEngine {
    metadata: Arc<dyn AssetMetadata>,
}

impl Default for InsightEngine {
    fn default() -> Self {
        Self::new(Arc::new(StaticAssetCatalog::new()))
    }
}

impl InsightEngine {
    pub fn new(metadata: Arc<dyn AssetMetadata>) -> Self {
        Self { metadata }
    }

    /// Insights against one of the canonical target models
    pub fn generate_insights(&self, holdings: &[Holding], target: TargetModelKind) -> PortfolioInsights {
        self.generate_insights_with_model(holdings, &TargetModel::from_kind(target))
    }

    /// Insights against any target model, including custom ones
    pub fn generate_insights_with_model(&self, holdings: &[Holding], target: &TargetModel) -> PortfolioInsights {
        if holdings.is_empty() {
            return PortfolioInsights::default();
        }

        let resolved = self.resolve_all(holdings);

        let insights = PortfolioInsights {
            top_risk_contributors: risk_contributors(holdings),
            diversification_gaps: diversification_gaps(holdings),
            income_vs_growth: income_vs_growth(&resolved),
            liquidity_risk: liquidity_risk(&resolved),
            rebalancing_alerts: rebalancing_alerts(holdings, target),
        };

        tracing::debug!(
            holdings = holdings.len(),
            resolved = resolved.len(),
            source = self.metadata.name(),
            model = %target.name,
            contributors = insights.top_risk_contributors.len(),
            gaps = insights.diversification_gaps.len(),
            alerts = insights.rebalancing_alerts.len(),
            "Generated portfolio insights"
        );

        insights
    }

    /// Free-text recommendations, independent of any target model
    pub fn generate_recommendations(&self, holdings: &[Holding]) -> Vec<String> {
        if holdings.is_empty() {
            return Vec::new();
        }

        let resolved = self.resolve_all(holdings);
        recommendations::recommend(holdings, &resolved)
    }

    /// Holdings paired with their metadata, unresolvable ones dropped
    fn resolve_all<'a>(&self, holdings: &'a [Holding]) -> Vec<(&'a Holding, AssetInfo)> {
        holdings
            .iter()
            .filter_map(|h| self.metadata.resolve(&h.symbol).ok().map(|info| (h, info)))
            .collect()
    }
}

fn concentration_reason(pct: f64) -> String {
    format!("High concentration at {pct:.1}% of portfolio")
}

/// Holdings above 25% (first three), then sectors above 40%
pub(crate) fn risk_contributors(holdings: &[Holding]) -> Vec<RiskContributor> {
    let by_holding = holdings
        .iter()
        .filter(|h| h.percentage > 25.0)
        .take(MAX_HOLDING_CONTRIBUTORS)
        .map(|h| RiskContributor {
            holding: format!("{} ({})", h.symbol, h.name),
            reason: concentration_reason(h.percentage),
            impact: if h.percentage > 40.0 { Impact::High } else { Impact::Medium },
        });

    let sectors = sector_breakdown(holdings);
    let by_sector = sectors
        .iter()
        .filter(|(_, pct)| *pct > 40.0)
        .map(|(sector, pct)| RiskContributor {
            holding: format!("{sector} (Sector)"),
            reason: concentration_reason(*pct),
            impact: if *pct > 60.0 { Impact::High } else { Impact::Medium },
        });

    by_holding.chain(by_sector).take(MAX_RISK_CONTRIBUTORS).collect()
}

pub(crate) fn has_fixed_income(holdings: &[Holding]) -> bool {
    holdings
        .iter()
        .any(|h| FIXED_INCOME_CLASSES.contains(&h.asset_class.as_str()))
}

pub(crate) fn has_international(holdings: &[Holding]) -> bool {
    holdings.iter().any(|h| h.asset_class == INTERNATIONAL_CLASS)
}

pub(crate) fn diversification_gaps(holdings: &[Holding]) -> Vec<String> {
    let sectors: HashSet<&str> = holdings.iter().map(|h| h.sector.as_str()).collect();
    let regions: HashSet<&str> = holdings.iter().map(|h| h.region.as_str()).collect();

    let mut gaps: Vec<String> = MAJOR_SECTORS
        .iter()
        .filter(|sector| !sectors.contains(**sector))
        .map(|sector| format!("No exposure to {sector} sector"))
        .collect();

    if !has_fixed_income(holdings) {
        gaps.push("No fixed income securities for stability".into());
    }

    if !has_international(holdings) {
        gaps.push("No international exposure for global diversification".into());
    }

    if regions.len() == 1 && regions.contains(HOME_REGION) {
        gaps.push("Fully concentrated in Indian markets".into());
    }

    gaps
}

pub(crate) fn income_vs_growth(resolved: &[(&Holding, AssetInfo)]) -> IncomeGrowthSplit {
    resolved
        .iter()
        .fold(IncomeGrowthSplit::default(), |mut split, (h, info)| {
            match info.income_type {
                IncomeType::Income => split.income += h.percentage,
                IncomeType::Growth => split.growth += h.percentage,
            }
            split
        })
}

pub(crate) fn liquidity_risk(resolved: &[(&Holding, AssetInfo)]) -> LiquidityRisk {
    let penalty: f64 = resolved
        .iter()
        .map(|(h, info)| h.percentage * info.liquidity.penalty_per_point())
        .sum();
    let score = (100.0 - penalty).clamp(0.0, 100.0);

    let warning = if score < LIQUIDITY_WARNING_BELOW {
        "Portfolio contains significant illiquid holdings".to_string()
    } else {
        String::new()
    };

    LiquidityRisk { score, warning }
}

pub(crate) fn rebalancing_alerts(holdings: &[Holding], target: &TargetModel) -> Vec<RebalancingAlert> {
    let current = asset_class_breakdown(holdings);

    target
        .weights
        .iter()
        .filter_map(|tw| {
            let now = current.get(tw.asset_class.as_str());
            let deviation = now - tw.weight;
            (deviation.abs() > REBALANCE_TOLERANCE).then(|| RebalancingAlert {
                category: tw.asset_class.clone(),
                current: now,
                target: tw.weight,
                deviation,
            })
        })
        .collect()
}
