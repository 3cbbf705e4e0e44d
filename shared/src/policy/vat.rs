//! VAT Rate Schedule

use serde::{Deserialize, Serialize};

use crate::error::{PolicyError, PolicyResult};
use crate::models::VatCode;

/// VAT rates by treatment class
///
/// The zero-class codes (M, N, Z, E) are definitionally free of VAT; only
/// the standard and reduced rates are policy data. The buyer's premium
/// service charge is always standard-rated, whatever the item's own code.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VatRates {
    /// Standard rate (code V), as a fraction
    pub standard_rate: f64,
    /// Reduced rate (code W), as a fraction
    pub reduced_rate: f64,
}

impl VatRates {
    pub fn new(standard_rate: f64, reduced_rate: f64) -> PolicyResult<Self> {
        let rates = Self {
            standard_rate,
            reduced_rate,
        };
        rates.validate()?;
        Ok(rates)
    }

    /// Current UK rates: 20% standard, 5% reduced
    pub fn standard() -> Self {
        Self {
            standard_rate: 0.20,
            reduced_rate: 0.05,
        }
    }

    /// Rate for a recognised code
    pub fn rate_for(&self, code: VatCode) -> f64 {
        match code {
            VatCode::V => self.standard_rate,
            VatCode::W => self.reduced_rate,
            VatCode::M | VatCode::N | VatCode::Z | VatCode::E => 0.0,
        }
    }

    pub fn validate(&self) -> PolicyResult<()> {
        for rate in [self.standard_rate, self.reduced_rate] {
            if !(0.0..=1.0).contains(&rate) {
                return Err(PolicyError::InvalidRate { rate });
            }
        }
        Ok(())
    }
}

impl Default for VatRates {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_rates() {
        let rates = VatRates::standard();
        assert_eq!(rates.rate_for(VatCode::V), 0.20);
        assert_eq!(rates.rate_for(VatCode::W), 0.05);
        assert_eq!(rates.rate_for(VatCode::M), 0.0);
        assert_eq!(rates.rate_for(VatCode::N), 0.0);
        assert_eq!(rates.rate_for(VatCode::Z), 0.0);
        assert_eq!(rates.rate_for(VatCode::E), 0.0);
    }

    #[test]
    fn test_zero_class_codes_ignore_configured_rates() {
        // Even a nonstandard card charges nothing on zero-class codes
        let rates = VatRates::new(0.21, 0.10).unwrap();
        assert_eq!(rates.rate_for(VatCode::Z), 0.0);
        assert_eq!(rates.rate_for(VatCode::V), 0.21);
    }

    #[test]
    fn test_rejects_rate_outside_unit_interval() {
        assert!(matches!(
            VatRates::new(20.0, 0.05),
            Err(PolicyError::InvalidRate { .. })
        ));
        assert!(matches!(
            VatRates::new(0.20, -0.05),
            Err(PolicyError::InvalidRate { .. })
        ));
    }
}
