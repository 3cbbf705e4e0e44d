//! Insurance Charge Bands

use serde::{Deserialize, Serialize};

use crate::error::{PolicyError, PolicyResult};
use crate::models::DestinationClass;

/// One insurance band: a flat charge while the insured total falls inside it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsuranceBand {
    /// Lower bound in GBP, inclusive
    pub min: f64,
    /// Upper bound in GBP; exclusive, except the final band which closes the
    /// cover limit
    pub max: f64,
    /// Flat charge in GBP
    pub charge: f64,
}

/// Insurance bands per destination class, contiguous from 0 to the cover limit
///
/// Totals above the cover limit are not priced here; cover for them is a
/// manually negotiated contract.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InsuranceRates {
    pub uk: Vec<InsuranceBand>,
    pub international: Vec<InsuranceBand>,
}

impl InsuranceRates {
    pub fn new(uk: Vec<InsuranceBand>, international: Vec<InsuranceBand>) -> PolicyResult<Self> {
        let rates = Self { uk, international };
        rates.validate()?;
        Ok(rates)
    }

    /// Standard bands, covering 0 to 50,000 per destination class
    pub fn standard() -> Self {
        Self {
            uk: vec![
                InsuranceBand {
                    min: 0.0,
                    max: 1_000.0,
                    charge: 20.0,
                },
                InsuranceBand {
                    min: 1_000.0,
                    max: 5_000.0,
                    charge: 35.0,
                },
                InsuranceBand {
                    min: 5_000.0,
                    max: 10_000.0,
                    charge: 50.0,
                },
                InsuranceBand {
                    min: 10_000.0,
                    max: 20_000.0,
                    charge: 75.0,
                },
                InsuranceBand {
                    min: 20_000.0,
                    max: 50_000.0,
                    charge: 100.0,
                },
            ],
            international: vec![
                InsuranceBand {
                    min: 0.0,
                    max: 1_000.0,
                    charge: 35.0,
                },
                InsuranceBand {
                    min: 1_000.0,
                    max: 5_000.0,
                    charge: 60.0,
                },
                InsuranceBand {
                    min: 5_000.0,
                    max: 10_000.0,
                    charge: 90.0,
                },
                InsuranceBand {
                    min: 10_000.0,
                    max: 20_000.0,
                    charge: 130.0,
                },
                InsuranceBand {
                    min: 20_000.0,
                    max: 50_000.0,
                    charge: 180.0,
                },
            ],
        }
    }

    pub fn bands(&self, destination: DestinationClass) -> &[InsuranceBand] {
        match destination {
            DestinationClass::Uk => &self.uk,
            DestinationClass::International => &self.international,
        }
    }

    /// Band covering `total`; `None` above the cover limit
    pub fn band_for(&self, destination: DestinationClass, total: f64) -> Option<&InsuranceBand> {
        let bands = self.bands(destination);
        let last = bands.last()?;
        if total > last.max {
            return None;
        }
        bands.iter().find(|band| total < band.max).or(Some(last))
    }

    pub fn validate(&self) -> PolicyResult<()> {
        Self::validate_bands(&self.uk, DestinationClass::Uk.as_str())?;
        Self::validate_bands(&self.international, DestinationClass::International.as_str())?;
        Ok(())
    }

    fn validate_bands(bands: &[InsuranceBand], destination: &'static str) -> PolicyResult<()> {
        if bands.is_empty() {
            return Err(PolicyError::EmptyInsuranceBands { destination });
        }
        if bands[0].min != 0.0 {
            return Err(PolicyError::InsuranceCoverGapAtZero { destination });
        }
        let mut prev_max = 0.0_f64;
        for (index, band) in bands.iter().enumerate() {
            if !band.charge.is_finite() || band.charge < 0.0 {
                return Err(PolicyError::InvalidCost { cost: band.charge });
            }
            if band.min != prev_max || !band.max.is_finite() || band.max <= band.min {
                return Err(PolicyError::InsuranceBandGap { destination, index });
            }
            prev_max = band.max;
        }
        Ok(())
    }
}

impl Default for InsuranceRates {
    fn default() -> Self {
        Self::standard()
    }
}
