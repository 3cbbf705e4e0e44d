//! Shared types for the Metsab invoice engine
//!
//! Domain model shapes (logistics records, invoice items, VAT codes) and the
//! business policy tables (premium tiers, VAT rates, courier rate card,
//! insurance bands) used across the workspace.

pub mod error;
pub mod models;
pub mod policy;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{PolicyError, PolicyResult};
pub use models::{
    DestinationClass, InvoiceItem, LogisticsArtwork, LogisticsInfo, LogisticsMethod,
    LogisticsStatus, VatCode,
};
pub use policy::PolicyTables;
