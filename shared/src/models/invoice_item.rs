//! Invoice Item Model

use serde::{Deserialize, Serialize};

/// VAT treatment code for an invoice item
///
/// Items persist the raw code letter; [`VatCode::from_code`] parses it back.
/// Codes outside this vocabulary are charged at the standard rate by the
/// engine rather than silently zero-rated.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum VatCode {
    /// Margin scheme
    M,
    /// Margin scheme, no VAT shown on the invoice
    N,
    /// Standard rate
    V,
    /// Reduced rate
    W,
    /// Zero-rated
    Z,
    /// Exempt
    E,
}

impl VatCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            VatCode::M => "M",
            VatCode::N => "N",
            VatCode::V => "V",
            VatCode::W => "W",
            VatCode::Z => "Z",
            VatCode::E => "E",
        }
    }

    /// Parse a persisted code letter; `None` for anything outside the vocabulary
    pub fn from_code(code: &str) -> Option<VatCode> {
        match code {
            "M" => Some(VatCode::M),
            "N" => Some(VatCode::N),
            "V" => Some(VatCode::V),
            "W" => Some(VatCode::W),
            "Z" => Some(VatCode::Z),
            "E" => Some(VatCode::E),
            _ => None,
        }
    }

    /// Codes that never attract VAT on the hammer price
    pub fn is_zero_rated(&self) -> bool {
        matches!(self, VatCode::M | VatCode::N | VatCode::Z | VatCode::E)
    }
}

/// Invoice line item
///
/// Charges are derived from the hammer price and VAT code; recomputing with
/// the same inputs always reproduces the same figures.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvoiceItem {
    pub id: String,
    pub title: String,
    /// Hammer price in GBP
    pub hammer_price: f64,
    /// VAT treatment code letter (see [`VatCode`])
    pub vat_code: String,
    /// Premium rate agreed with the client at consignment (fraction, e.g. 0.20);
    /// bypasses the tier schedule when present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub premium_rate_override: Option<f64>,
    /// Shipping charge allocated to this item; absent counts as zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<f64>,
    /// Insurance charge allocated to this item; absent counts as zero
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insurance_cost: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vat_code_round_trip() {
        for code in [
            VatCode::M,
            VatCode::N,
            VatCode::V,
            VatCode::W,
            VatCode::Z,
            VatCode::E,
        ] {
            assert_eq!(VatCode::from_code(code.as_str()), Some(code));
        }
    }

    #[test]
    fn test_unknown_vat_codes_do_not_parse() {
        assert_eq!(VatCode::from_code("X"), None);
        assert_eq!(VatCode::from_code(""), None);
        // Codes are stored uppercase; lowercase input is not recognised
        assert_eq!(VatCode::from_code("v"), None);
    }

    #[test]
    fn test_zero_rated_codes() {
        assert!(VatCode::M.is_zero_rated());
        assert!(VatCode::N.is_zero_rated());
        assert!(VatCode::Z.is_zero_rated());
        assert!(VatCode::E.is_zero_rated());
        assert!(!VatCode::V.is_zero_rated());
        assert!(!VatCode::W.is_zero_rated());
    }

    #[test]
    fn test_vat_code_serializes_as_bare_letter() {
        let json = serde_json::to_string(&VatCode::V).unwrap();
        assert_eq!(json, "\"V\"");
    }
}
