//! # portfolio-advisor
//!
//! Diversification scoring and insight engine for an in-memory portfolio
//! snapshot.
//!
//! ## Scoring
//!
//! - **Sector, asset class, geographic** - entropy-based diversity with
//!   domain bonuses and penalties
//! - **Concentration** - penalizes heavy single and top-N positions
//! - **Overall** - weighted blend with interaction adjustments
//!
//! ## Data Flow
//!
//! ```text
//! ┌──────────────┐     ┌─────────────────────────────┐     ┌────────────────────────┐
//! │  Position[]  │ ──▶ │  build_holdings(metadata)   │ ──▶ │       Holding[]        │
//! └──────────────┘     └─────────────────────────────┘     └───────────┬────────────┘
//!                                                                      │
//!          ┌──────────────────────────┬───────────────────────────────┼──────────────────────┐
//!          ▼                          ▼                               ▼                      ▼
//!  ┌────────────────┐      ┌────────────────────┐        ┌──────────────────────┐  ┌──────────────────┐
//!  │ compute_scores │      │ compute_advanced_  │        │ generate_insights    │  │ generate_        │
//!  │  sector  25%   │      │ metrics            │        │  (+ TargetModel)     │  │ recommendations  │
//!  │  class   30%   │      │  HHI, effective N, │        │  risks, gaps, split, │  │  free text       │
//!  │  geo     20%   │      │  ratio             │        │  liquidity, alerts   │  │                  │
//!  │  conc    25%   │      └────────────────────┘        └──────────────────────┘  └──────────────────┘
//!  └────────────────┘
//! ```
//!
//! Every entry point is a pure function of its inputs and never fails.
//! An empty portfolio yields zero scores, zero metrics and empty insights.

pub mod config;
pub mod error;
pub mod insight;
pub mod metadata;
pub mod metrics;
pub mod model;
pub mod scoring;

pub use config::{TargetModel, TargetModelKind, TargetWeight};
pub use error::{AdvisorError, Result};
pub use insight::{InsightEngine, PortfolioInsights};
pub use metadata::{AssetInfo, AssetMetadata, StaticAssetCatalog};
pub use metrics::AdvancedMetrics;
pub use model::{AssetType, DiversificationScores, Holding, Position, RiskBand, build_holdings};

/// Four sub-scores and the composite, each in 0-100
pub fn compute_scores(holdings: &[Holding]) -> DiversificationScores {
    scoring::compute_scores(holdings)
}

pub fn compute_advanced_metrics(holdings: &[Holding]) -> AdvancedMetrics {
    metrics::compute_advanced_metrics(holdings)
}

/// Insights against a canonical target model, using the built-in catalog
pub fn generate_insights(holdings: &[Holding], target: TargetModelKind) -> PortfolioInsights {
    InsightEngine::default().generate_insights(holdings, target)
}

/// Recommendations using the built-in catalog
pub fn generate_recommendations(holdings: &[Holding]) -> Vec<String> {
    InsightEngine::default().generate_recommendations(holdings)
}
