//! Insurance Charge Calculator

use rust_decimal::Decimal;
use shared::models::DestinationClass;
use shared::policy::InsuranceRates;

use crate::money::{to_decimal, to_f64};

/// Flat insurance charge for an invoice total
///
/// Returns zero above the cover limit: cover there is a manually negotiated
/// contract, not a priced charge. Callers that must distinguish "free" from
/// "unsupported" check [`InsuranceRates::band_for`] themselves.
pub fn calculate_insurance_cost(
    total_price: Decimal,
    destination: DestinationClass,
    rates: &InsuranceRates,
) -> Decimal {
    match rates.band_for(destination, to_f64(total_price)) {
        Some(band) => to_decimal(band.charge),
        None => {
            tracing::warn!(
                total = %total_price,
                destination = destination.as_str(),
                "Invoice total exceeds the insurance cover limit, charge needs a manual quote"
            );
            Decimal::ZERO
        }
    }
}
