//! VAT Calculator

use rust_decimal::Decimal;
use shared::models::VatCode;
use shared::policy::VatRates;

use crate::money::to_decimal;

/// VAT amount plus the rate that produced it
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VatBreakdown {
    pub vat_amount: Decimal,
    pub vat_rate: Decimal,
}

/// Calculate VAT on an amount for a persisted code letter
///
/// Codes M, N, Z and E carry no VAT; V charges the standard rate and W the
/// reduced rate. A code outside the vocabulary falls back to the standard
/// rate: mistyped codes must never silently zero-rate a sale.
pub fn calculate_vat(amount: Decimal, vat_code: &str, rates: &VatRates) -> VatBreakdown {
    let vat_rate = match VatCode::from_code(vat_code) {
        Some(code) => to_decimal(rates.rate_for(code)),
        None => {
            tracing::warn!(
                vat_code = %vat_code,
                "Unknown VAT code, falling back to the standard rate"
            );
            to_decimal(rates.standard_rate)
        }
    };

    VatBreakdown {
        vat_amount: amount * vat_rate,
        vat_rate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> VatRates {
        VatRates::standard()
    }

    #[test]
    fn test_standard_rated_code() {
        let breakdown = calculate_vat(Decimal::from(100), "V", &rates());
        assert_eq!(breakdown.vat_amount, Decimal::from(20));
        assert_eq!(breakdown.vat_rate, to_decimal(0.20));
    }

    #[test]
    fn test_reduced_rated_code() {
        let breakdown = calculate_vat(Decimal::from(100), "W", &rates());
        assert_eq!(breakdown.vat_amount, Decimal::from(5));
        assert_eq!(breakdown.vat_rate, to_decimal(0.05));
    }

    #[test]
    fn test_zero_class_codes() {
        for code in ["M", "N", "Z", "E"] {
            let breakdown = calculate_vat(Decimal::from(100), code, &rates());
            assert_eq!(breakdown.vat_amount, Decimal::ZERO, "code {code}");
            assert_eq!(breakdown.vat_rate, Decimal::ZERO, "code {code}");
        }
    }

    #[test]
    fn test_unknown_code_falls_back_to_standard_rate() {
        let breakdown = calculate_vat(Decimal::from(100), "UNKNOWN_CODE", &rates());
        assert_eq!(breakdown.vat_rate, to_decimal(0.20));
        assert_eq!(breakdown.vat_amount, Decimal::from(20));

        let breakdown = calculate_vat(Decimal::from(100), "", &rates());
        assert_eq!(breakdown.vat_rate, to_decimal(0.20));
    }

    #[test]
    fn test_fractional_amount_keeps_precision() {
        // 123.45 * 20% = 24.69 exactly
        let breakdown = calculate_vat(Decimal::new(12_345, 2), "V", &rates());
        assert_eq!(breakdown.vat_amount, Decimal::new(2_469, 2));
    }
}
