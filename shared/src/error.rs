//! Policy table errors

use thiserror::Error;

/// Errors raised when a custom rate card fails structural validation
///
/// The built-in standard tables never produce these; they guard tables
/// supplied by deployments (usually parsed from JSON).
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("Premium table has no tiers")]
    EmptyPremiumTable,

    #[error("Premium tier {index} does not ascend past the previous threshold")]
    NonAscendingPremiumTier { index: usize },

    #[error("Premium tier {index} omits its threshold but is not the final tier")]
    UnboundedTierNotLast { index: usize },

    #[error("The final premium tier must omit its threshold")]
    MissingCatchAllTier,

    #[error("Rate {rate} is outside 0..=1")]
    InvalidRate { rate: f64 },

    #[error("Courier rate card has no UK weight tiers")]
    EmptyCourierTable,

    #[error("Courier weight tier {index} does not ascend past the previous bound")]
    NonAscendingWeightTier { index: usize },

    #[error("Cost {cost} is negative or not finite")]
    InvalidCost { cost: f64 },

    #[error("Insurance bands for {destination} are empty")]
    EmptyInsuranceBands { destination: &'static str },

    #[error("Insurance cover for {destination} must start at 0")]
    InsuranceCoverGapAtZero { destination: &'static str },

    #[error("Insurance band {index} for {destination} does not start where the previous band ends")]
    InsuranceBandGap {
        destination: &'static str,
        index: usize,
    },

    #[error("Invalid policy JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type PolicyResult<T> = Result<T, PolicyError>;
