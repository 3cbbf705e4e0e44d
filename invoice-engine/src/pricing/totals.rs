//! Invoice Line and Total Aggregation
//!
//! Per-item charge breakdowns and the invoice column totals. Everything
//! stays in `Decimal` with no per-item rounding, so the grand total always
//! equals both the sum of item totals and the sum of the component columns
//! down to the last digit. Rounding happens once, at the display boundary.

use rust_decimal::Decimal;
use shared::models::{InvoiceItem, VatCode};
use shared::policy::PolicyTables;

use crate::money::to_decimal;
use crate::pricing::{calculate_buyers_premium, calculate_vat};

/// Charge breakdown for a single invoice item, unrounded
#[derive(Debug, Clone, PartialEq)]
pub struct ItemChargeBreakdown {
    pub hammer_price: Decimal,
    pub buyers_premium: Decimal,
    pub premium_vat: Decimal,
    pub item_vat: Decimal,
    pub shipping_cost: Decimal,
    pub insurance_cost: Decimal,
    /// Sum of the six components above
    pub total: Decimal,
}

/// Column totals across an invoice
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InvoiceTotals {
    pub hammer_total: Decimal,
    pub premium_total: Decimal,
    pub premium_vat_total: Decimal,
    pub item_vat_total: Decimal,
    pub shipping_total: Decimal,
    pub insurance_total: Decimal,
    pub grand_total: Decimal,
}

/// Calculate the full charge breakdown for one invoice item
///
/// # Calculation Steps
/// 1. Buyer's premium from the tier schedule, or the item's agreed rate
/// 2. VAT on the premium, always at the standard rate: the service charge
///    is standard-rated whatever the item's own VAT treatment
/// 3. VAT on the hammer price per the item's VAT code
/// 4. Shipping and insurance allocations, zero when absent
pub fn calculate_item_total(item: &InvoiceItem, tables: &PolicyTables) -> ItemChargeBreakdown {
    let hammer_price = to_decimal(item.hammer_price);

    // Step 1: buyer's premium
    let buyers_premium = calculate_buyers_premium(
        hammer_price,
        item.premium_rate_override.map(to_decimal),
        &tables.buyers_premium,
    );

    // Step 2: premium VAT, always standard-rated
    let premium_vat = calculate_vat(buyers_premium, VatCode::V.as_str(), &tables.vat).vat_amount;

    // Step 3: hammer price VAT per the item's code
    let item_vat = calculate_vat(hammer_price, &item.vat_code, &tables.vat).vat_amount;

    // Step 4: logistics allocations
    let shipping_cost = to_decimal(item.shipping_cost.unwrap_or(0.0));
    let insurance_cost = to_decimal(item.insurance_cost.unwrap_or(0.0));

    let total =
        hammer_price + buyers_premium + premium_vat + item_vat + shipping_cost + insurance_cost;

    ItemChargeBreakdown {
        hammer_price,
        buyers_premium,
        premium_vat,
        item_vat,
        shipping_cost,
        insurance_cost,
        total,
    }
}

/// Sum per-item breakdowns into invoice column totals
pub fn calculate_invoice_totals(items: &[InvoiceItem], tables: &PolicyTables) -> InvoiceTotals {
    let mut totals = InvoiceTotals::default();
    for item in items {
        let breakdown = calculate_item_total(item, tables);
        totals.hammer_total += breakdown.hammer_price;
        totals.premium_total += breakdown.buyers_premium;
        totals.premium_vat_total += breakdown.premium_vat;
        totals.item_vat_total += breakdown.item_vat;
        totals.shipping_total += breakdown.shipping_cost;
        totals.insurance_total += breakdown.insurance_cost;
        totals.grand_total += breakdown.total;
    }
    totals
}
