//! Domain models
//!
//! Record shapes shared between the engine, the back-office forms and
//! persistence. Monetary fields are `f64` on the wire; precise arithmetic
//! happens inside the engine and results are written back rounded.

pub mod invoice_item;
pub mod logistics;

// Re-exports
pub use invoice_item::*;
pub use logistics::*;
