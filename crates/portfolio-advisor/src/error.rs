//! Error Types for Portfolio Advisor
//!
//! Scoring and insight generation never fail. Errors only surface at the
//! edges: building holdings from raw positions and loading target models.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, AdvisorError>;

#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Asset not supported: {0}")]
    UnsupportedAsset(String),

    #[error("Invalid holding: {0}")]
    InvalidHolding(String),

    #[error("Too many holdings: {count} exceeds {max} max")]
    TooManyHoldings {
        count: usize,
        max: usize,
    },

    #[error("Unknown target model: {0}")]
    UnknownTargetModel(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
