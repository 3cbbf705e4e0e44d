//! Business Policy Tables
//!
//! Immutable rate data injected into the calculation engine:
//! - Buyer's premium tier schedule
//! - VAT rates
//! - Courier rate card (UK tiers, international per-kg)
//! - Insurance bands
//!
//! The standard tables ship in code via `Default`. Deployments can supply a
//! revised rate card as JSON, which is validated before use; there is no
//! global mutable rate state anywhere.

mod courier;
mod insurance;
mod premium;
mod vat;

pub use courier::*;
pub use insurance::*;
pub use premium::*;
pub use vat::*;

use serde::{Deserialize, Serialize};

use crate::error::PolicyResult;

/// The full set of rate tables consulted by the calculation engine
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PolicyTables {
    /// Rate card revision label, carried for audit
    pub version: String,
    pub buyers_premium: BuyersPremiumTable,
    pub vat: VatRates,
    pub courier: CourierRates,
    pub insurance: InsuranceRates,
}

impl PolicyTables {
    /// Parse a rate card shipped as JSON, rejecting structurally invalid tables
    pub fn from_json(json: &str) -> PolicyResult<Self> {
        let tables: PolicyTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn validate(&self) -> PolicyResult<()> {
        self.buyers_premium.validate()?;
        self.vat.validate()?;
        self.courier.validate()?;
        self.insurance.validate()?;
        Ok(())
    }
}

impl Default for PolicyTables {
    /// Standard Metsab rate card
    fn default() -> Self {
        Self {
            version: "standard-2025".to_string(),
            buyers_premium: BuyersPremiumTable::standard(),
            vat: VatRates::standard(),
            courier: CourierRates::standard(),
            insurance: InsuranceRates::standard(),
        }
    }
}
