//! Courier Rate Card
//!
//! Base costs charged by the courier before the invoice-facing service
//! multiplier. UK consignments price by flat weight tier; international
//! consignments price per kg by country.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{PolicyError, PolicyResult};

/// One UK weight tier
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UkWeightTier {
    /// Upper bound in kg; exclusive, except the final tier which closes at
    /// the billable-weight cap
    pub max_weight_kg: f64,
    /// Flat base cost in GBP
    pub cost: f64,
}

/// Courier rate card: UK flat tiers plus international per-kg rates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CourierRates {
    pub uk_tiers: Vec<UkWeightTier>,
    /// Per-kg base rate by country name
    pub international_per_kg: BTreeMap<String, f64>,
    /// Per-kg base rate for countries not on the card
    pub default_international_per_kg: f64,
}

impl CourierRates {
    pub fn new(
        uk_tiers: Vec<UkWeightTier>,
        international_per_kg: BTreeMap<String, f64>,
        default_international_per_kg: f64,
    ) -> PolicyResult<Self> {
        let rates = Self {
            uk_tiers,
            international_per_kg,
            default_international_per_kg,
        };
        rates.validate()?;
        Ok(rates)
    }

    /// Standard Evri-based card
    pub fn standard() -> Self {
        let mut international_per_kg = BTreeMap::new();
        for (country, rate) in [
            ("Australia", 16.50),
            ("Belgium", 8.50),
            ("Canada", 14.80),
            ("China", 13.60),
            ("France", 8.50),
            ("Germany", 8.50),
            ("Hong Kong", 13.60),
            ("Ireland", 7.80),
            ("Italy", 9.20),
            ("Japan", 15.90),
            ("Netherlands", 8.50),
            ("Portugal", 9.80),
            ("Spain", 9.20),
            ("Switzerland", 11.50),
            ("United States", 14.20),
        ] {
            international_per_kg.insert(country.to_string(), rate);
        }

        Self {
            uk_tiers: vec![
                UkWeightTier {
                    max_weight_kg: 1.0,
                    cost: 4.36,
                },
                UkWeightTier {
                    max_weight_kg: 2.0,
                    cost: 5.78,
                },
                UkWeightTier {
                    max_weight_kg: 5.0,
                    cost: 7.49,
                },
                UkWeightTier {
                    max_weight_kg: 10.0,
                    cost: 9.65,
                },
                UkWeightTier {
                    max_weight_kg: 15.0,
                    cost: 12.29,
                },
            ],
            international_per_kg,
            default_international_per_kg: 15.00,
        }
    }

    /// Flat UK base cost for a billable weight already capped to the final tier
    ///
    /// A weight at or beyond the final bound lands in the top tier.
    pub fn uk_tier_cost(&self, weight_kg: f64) -> f64 {
        for tier in &self.uk_tiers {
            if weight_kg < tier.max_weight_kg {
                return tier.cost;
            }
        }
        self.uk_tiers.last().map(|t| t.cost).unwrap_or_default()
    }

    /// Per-kg base rate for a country; `None` when the country is not on the card
    pub fn country_rate(&self, country: &str) -> Option<f64> {
        self.international_per_kg.get(country).copied()
    }

    pub fn validate(&self) -> PolicyResult<()> {
        if self.uk_tiers.is_empty() {
            return Err(PolicyError::EmptyCourierTable);
        }
        let mut prev = 0.0_f64;
        for (index, tier) in self.uk_tiers.iter().enumerate() {
            if !tier.max_weight_kg.is_finite() || tier.max_weight_kg <= prev {
                return Err(PolicyError::NonAscendingWeightTier { index });
            }
            if !tier.cost.is_finite() || tier.cost < 0.0 {
                return Err(PolicyError::InvalidCost { cost: tier.cost });
            }
            prev = tier.max_weight_kg;
        }
        for rate in self
            .international_per_kg
            .values()
            .chain(std::iter::once(&self.default_international_per_kg))
        {
            if !rate.is_finite() || *rate < 0.0 {
                return Err(PolicyError::InvalidCost { cost: *rate });
            }
        }
        Ok(())
    }
}

impl Default for CourierRates {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uk_tier_boundaries() {
        let rates = CourierRates::standard();
        assert_eq!(rates.uk_tier_cost(0.5), 4.36);
        // Bounds are exclusive: exactly 1 kg moves into the 1-2 kg tier
        assert_eq!(rates.uk_tier_cost(1.0), 5.78);
        assert_eq!(rates.uk_tier_cost(1.85), 5.78);
        assert_eq!(rates.uk_tier_cost(2.0), 7.49);
        assert_eq!(rates.uk_tier_cost(7.3), 9.65);
        assert_eq!(rates.uk_tier_cost(14.99), 12.29);
        // The billable cap closes the final tier
        assert_eq!(rates.uk_tier_cost(15.0), 12.29);
    }

    #[test]
    fn test_country_rate_lookup() {
        let rates = CourierRates::standard();
        assert_eq!(rates.country_rate("France"), Some(8.50));
        assert_eq!(rates.country_rate("United States"), Some(14.20));
        assert_eq!(rates.country_rate("Narnia"), None);
        assert_eq!(rates.default_international_per_kg, 15.00);
    }

    #[test]
    fn test_rejects_non_ascending_tiers() {
        let result = CourierRates::new(
            vec![
                UkWeightTier {
                    max_weight_kg: 5.0,
                    cost: 7.49,
                },
                UkWeightTier {
                    max_weight_kg: 2.0,
                    cost: 5.78,
                },
            ],
            BTreeMap::new(),
            15.00,
        );
        assert!(matches!(
            result,
            Err(PolicyError::NonAscendingWeightTier { index: 1 })
        ));
    }

    #[test]
    fn test_rejects_negative_cost() {
        let result = CourierRates::new(
            vec![UkWeightTier {
                max_weight_kg: 1.0,
                cost: -4.36,
            }],
            BTreeMap::new(),
            15.00,
        );
        assert!(matches!(result, Err(PolicyError::InvalidCost { .. })));
    }

    #[test]
    fn test_rejects_empty_uk_tiers() {
        let result = CourierRates::new(vec![], BTreeMap::new(), 15.00);
        assert!(matches!(result, Err(PolicyError::EmptyCourierTable)));
    }
}
