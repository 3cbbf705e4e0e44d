//! Buyer's Premium Schedule

use serde::{Deserialize, Serialize};

use crate::error::{PolicyError, PolicyResult};

/// One tier of the buyer's premium schedule
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PremiumTier {
    /// Upper bound of the tier in GBP; `None` marks the final catch-all tier
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threshold: Option<f64>,
    /// Rate charged on the slice of hammer price falling in this tier (fraction)
    pub rate: f64,
}

/// Ordered premium tiers, contiguous and exhaustive over all prices
///
/// Every non-negative hammer price has exactly one decomposition across the
/// tiers: thresholds ascend strictly and the final tier is unbounded.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BuyersPremiumTable {
    pub tiers: Vec<PremiumTier>,
}

impl BuyersPremiumTable {
    /// Build a custom schedule, rejecting one that would leave a price band
    /// without exactly one decomposition
    pub fn new(tiers: Vec<PremiumTier>) -> PolicyResult<Self> {
        let table = Self { tiers };
        table.validate()?;
        Ok(table)
    }

    /// Standard schedule: 25% on the first 100,000, 15% on the excess
    pub fn standard() -> Self {
        Self {
            tiers: vec![
                PremiumTier {
                    threshold: Some(100_000.0),
                    rate: 0.25,
                },
                PremiumTier {
                    threshold: None,
                    rate: 0.15,
                },
            ],
        }
    }

    pub fn validate(&self) -> PolicyResult<()> {
        if self.tiers.is_empty() {
            return Err(PolicyError::EmptyPremiumTable);
        }
        let mut prev = 0.0_f64;
        for (index, tier) in self.tiers.iter().enumerate() {
            if !(0.0..=1.0).contains(&tier.rate) {
                return Err(PolicyError::InvalidRate { rate: tier.rate });
            }
            let is_last = index == self.tiers.len() - 1;
            match tier.threshold {
                Some(threshold) => {
                    if is_last {
                        return Err(PolicyError::MissingCatchAllTier);
                    }
                    if !threshold.is_finite() || threshold <= prev {
                        return Err(PolicyError::NonAscendingPremiumTier { index });
                    }
                    prev = threshold;
                }
                None => {
                    if !is_last {
                        return Err(PolicyError::UnboundedTierNotLast { index });
                    }
                }
            }
        }
        Ok(())
    }
}

impl Default for BuyersPremiumTable {
    fn default() -> Self {
        Self::standard()
    }
}
