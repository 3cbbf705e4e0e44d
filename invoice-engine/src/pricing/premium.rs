//! Buyer's Premium Calculator

use rust_decimal::Decimal;
use shared::policy::BuyersPremiumTable;

use crate::money::to_decimal;

/// Calculate the buyer's premium on a hammer price
///
/// # Arguments
/// * `hammer_price` - Hammer price in GBP
/// * `explicit_rate` - Premium rate agreed with the client at consignment
///   (fraction); bypasses the tier schedule when present
/// * `table` - Premium tier schedule
///
/// # Calculation Steps
/// 1. An explicit client rate short-circuits the schedule:
///    premium = hammer_price * rate
/// 2. Otherwise the price is consumed tier by tier: each tier charges its
///    rate on the slice of the price falling inside it, so a price of
///    150,000 under the standard schedule yields
///    100,000 * 25% + 50,000 * 15% = 32,500
///
/// Non-positive hammer prices yield zero.
pub fn calculate_buyers_premium(
    hammer_price: Decimal,
    explicit_rate: Option<Decimal>,
    table: &BuyersPremiumTable,
) -> Decimal {
    if hammer_price <= Decimal::ZERO {
        return Decimal::ZERO;
    }

    // Step 1: explicit client rate
    if let Some(rate) = explicit_rate {
        return hammer_price * rate;
    }

    // Step 2: walk the schedule, consuming the price slice by slice
    let mut remaining = hammer_price;
    let mut consumed = Decimal::ZERO;
    let mut premium = Decimal::ZERO;

    for tier in &table.tiers {
        if remaining <= Decimal::ZERO {
            break;
        }
        let slice = match tier.threshold {
            Some(threshold) => remaining.min(to_decimal(threshold) - consumed),
            None => remaining,
        };
        premium += slice * to_decimal(tier.rate);
        consumed += slice;
        remaining -= slice;
    }

    premium
}
