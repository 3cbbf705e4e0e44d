//! Charge Calculation Module
//!
//! The pure charge calculators: buyer's premium, VAT, insurance, shipping
//! and invoice aggregation. All take their rate tables as arguments and
//! compute in `Decimal`; none of them round.

mod insurance;
mod premium;
mod shipping;
mod totals;
mod vat;

pub use insurance::*;
pub use premium::*;
pub use shipping::*;
pub use totals::*;
pub use vat::*;
