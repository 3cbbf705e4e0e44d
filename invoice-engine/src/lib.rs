//! Metsab Invoice Engine - invoice cost and logistics calculation
//!
//! Deterministic calculation core for auction invoices: turns a hammer
//! price, artwork dimensions, a destination and the business rate tables
//! into buyer's premium, VAT, insurance and shipping charges, and keeps an
//! invoice's logistics record consistent while it is being edited.
//!
//! # Module structure
//!
//! ```text
//! invoice-engine/src/
//! ├── money.rs       # f64 <-> Decimal boundary, rounding, tolerance
//! ├── dimensions.rs  # unit conversion, volumetric and billable weight
//! ├── pricing/       # premium, VAT, insurance, shipping, invoice totals
//! └── logistics/     # auto/manual reconciliation state machine
//! ```
//!
//! All functions are synchronous and pure: each call takes an explicit
//! snapshot of its inputs plus a [`shared::policy::PolicyTables`] and
//! returns a new result. Nothing here touches a clock, a database or the
//! network.

pub mod dimensions;
pub mod logistics;
pub mod money;
pub mod pricing;

// Re-export the public engine surface
pub use dimensions::ItemDimensions;
pub use logistics::{CalcMode, CostField, LogisticsEvent, LogisticsReconciler};
pub use pricing::{InvoiceTotals, ItemChargeBreakdown, VatBreakdown};
