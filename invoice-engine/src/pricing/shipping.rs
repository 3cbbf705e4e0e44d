//! Shipping Charge Calculator

use rust_decimal::Decimal;
use shared::models::DestinationClass;
use shared::policy::CourierRates;

use crate::dimensions::ItemDimensions;
use crate::money::to_decimal;

/// Courier ceiling on billable weight per consignment (kg)
///
/// The sum of billable weights is capped here before rate selection, so an
/// arbitrarily heavy consignment bills at the top tier rather than
/// extrapolating beyond the rate card.
pub const MAX_BILLABLE_WEIGHT_KG: f64 = 15.0;

/// Invoice-facing multiplier applied to the courier base cost
///
/// Covers packing materials, crating labour and handling on top of the raw
/// courier charge. Applied exactly once, here.
pub const SHIPPING_INVOICE_MULTIPLIER: u32 = 5;

/// Calculate the shipping charge invoiced for a consignment
///
/// # Arguments
/// * `items` - Package dimensions per artwork, already padded for crating
/// * `destination` - UK or international rating
/// * `country` - Destination country for international consignments
/// * `rates` - Courier rate card
///
/// # Calculation Steps
/// 1. Sum billable weights across all packages
/// 2. Cap the sum at the courier ceiling (15 kg)
/// 3. UK: flat cost of the matching weight tier
///    International: per-kg country rate (falling back to the default rate
///    for a country not on the card) times the capped weight
/// 4. Multiply the base cost by the invoice multiplier
///
/// Collection and customer-courier consignments never reach this function;
/// the logistics reconciler forces their shipping cost to zero instead.
pub fn calculate_shipping_invoice_cost(
    items: &[ItemDimensions],
    destination: DestinationClass,
    country: Option<&str>,
    rates: &CourierRates,
) -> Decimal {
    // Step 1: total billable weight
    let total_billable: f64 = items.iter().map(ItemDimensions::billable_weight).sum();
    if total_billable <= 0.0 {
        // Nothing to ship, nothing to charge
        return Decimal::ZERO;
    }

    // Step 2: courier ceiling
    let capped = total_billable.min(MAX_BILLABLE_WEIGHT_KG);

    // Step 3: base courier cost
    let base_cost = match destination {
        DestinationClass::Uk => to_decimal(rates.uk_tier_cost(capped)),
        DestinationClass::International => {
            let per_kg = country.and_then(|c| rates.country_rate(c)).unwrap_or_else(|| {
                tracing::warn!(
                    country = country.unwrap_or("<unset>"),
                    "Country not on the courier rate card, using the default per-kg rate"
                );
                rates.default_international_per_kg
            });
            to_decimal(per_kg) * to_decimal(capped)
        }
    };

    // Step 4: invoice multiplier
    base_cost * Decimal::from(SHIPPING_INVOICE_MULTIPLIER)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rates() -> CourierRates {
        CourierRates::standard()
    }

    /// A package whose volumetric weight is negligible
    fn dense_package(weight_kg: f64) -> ItemDimensions {
        ItemDimensions::new(1.0, 1.0, 1.0, Some(weight_kg))
    }

    #[test]
    fn test_uk_tier_charge() {
        // 1.5 kg -> 1-2 kg tier, base 5.78, invoiced 28.90
        let cost = calculate_shipping_invoice_cost(
            &[dense_package(1.5)],
            DestinationClass::Uk,
            None,
            &rates(),
        );
        assert_eq!(cost, Decimal::new(2_890, 2));
    }

    #[test]
    fn test_uk_sums_billable_weight_across_packages() {
        // 1.2 + 2.3 = 3.5 kg -> 2-5 kg tier, base 7.49, invoiced 37.45
        let cost = calculate_shipping_invoice_cost(
            &[dense_package(1.2), dense_package(2.3)],
            DestinationClass::Uk,
            None,
            &rates(),
        );
        assert_eq!(cost, Decimal::new(3_745, 2));
    }

    #[test]
    fn test_volumetric_weight_drives_the_tier() {
        // 50 x 40 x 5 cm and 0.5 kg actual: volumetric 2 kg wins,
        // 2-5 kg tier, base 7.49, invoiced 37.45
        let bulky = ItemDimensions::new(50.0, 40.0, 5.0, Some(0.5));
        let cost =
            calculate_shipping_invoice_cost(&[bulky], DestinationClass::Uk, None, &rates());
        assert_eq!(cost, Decimal::new(3_745, 2));
    }

    #[test]
    fn test_weight_cap_holds_the_top_tier() {
        // A single 40 kg consignment caps at 15 kg: base 12.29, invoiced 61.45
        let single = calculate_shipping_invoice_cost(
            &[dense_package(40.0)],
            DestinationClass::Uk,
            None,
            &rates(),
        );
        assert_eq!(single, Decimal::new(6_145, 2));

        // Several packages summing past the cap behave identically
        let summed = calculate_shipping_invoice_cost(
            &[dense_package(9.0), dense_package(9.0)],
            DestinationClass::Uk,
            None,
            &rates(),
        );
        assert_eq!(summed, single);
    }

    #[test]
    fn test_international_charges_per_kg() {
        // France at 8.50/kg, 2 kg: base 17.00, invoiced 85.00
        let cost = calculate_shipping_invoice_cost(
            &[dense_package(2.0)],
            DestinationClass::International,
            Some("France"),
            &rates(),
        );
        assert_eq!(cost, Decimal::from(85));
    }

    #[test]
    fn test_international_cap_applies_before_the_rate() {
        // 20 kg to Japan caps at 15 kg: 15 * 15.90 = 238.50, invoiced 1,192.50
        let cost = calculate_shipping_invoice_cost(
            &[dense_package(20.0)],
            DestinationClass::International,
            Some("Japan"),
            &rates(),
        );
        assert_eq!(cost, Decimal::new(119_250, 2));
    }

    #[test]
    fn test_unlisted_country_uses_default_rate() {
        // 2 kg at the 15.00 default: base 30.00, invoiced 150.00
        let cost = calculate_shipping_invoice_cost(
            &[dense_package(2.0)],
            DestinationClass::International,
            Some("Narnia"),
            &rates(),
        );
        assert_eq!(cost, Decimal::from(150));

        // No country selected yet rates the same way
        let unset = calculate_shipping_invoice_cost(
            &[dense_package(2.0)],
            DestinationClass::International,
            None,
            &rates(),
        );
        assert_eq!(unset, cost);
    }

    #[test]
    fn test_empty_consignment_ships_free() {
        let cost =
            calculate_shipping_invoice_cost(&[], DestinationClass::Uk, None, &rates());
        assert_eq!(cost, Decimal::ZERO);

        // Packages with no volume and no weight charge nothing either
        let weightless = ItemDimensions::new(0.0, 0.0, 0.0, None);
        let cost =
            calculate_shipping_invoice_cost(&[weightless], DestinationClass::Uk, None, &rates());
        assert_eq!(cost, Decimal::ZERO);
    }
}
