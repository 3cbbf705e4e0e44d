//! Logistics Editing Events
//!
//! Every change a user can make in the logistics dialog arrives as one of
//! these events. Input changes and cost overrides are distinct event kinds,
//! which is what lets the reconciler switch cleanly between automatic and
//! manual costing.

use serde::{Deserialize, Serialize};
use shared::models::{DestinationClass, LogisticsArtwork, LogisticsMethod, LogisticsStatus};

/// Cost field a user can hand-edit
///
/// There is deliberately no `Total` variant: the total is always derived
/// from the other two.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CostField {
    Shipping,
    Insurance,
}

/// Dimension update for a single artwork entry
///
/// `None` leaves a measurement unchanged; `Some` replaces it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ArtworkDimensionsUpdate {
    /// Length in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub length: Option<f64>,
    /// Width in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,
    /// Height in inches
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    /// Actual weight in kg
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

/// Editing events applied to the logistics record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LogisticsEvent {
    /// Delivery method selection changed
    MethodChanged { method: LogisticsMethod },
    /// Destination class toggled between UK and international
    DestinationChanged { destination: DestinationClass },
    /// Destination country changed (international rating input)
    CountryChanged { country: Option<String> },
    /// Postal code edited; descriptive only, never affects costs
    PostalCodeChanged { postal_code: Option<String> },
    /// Delivery status moved; descriptive only, never affects costs
    StatusChanged { status: LogisticsStatus },
    /// One artwork's measurements edited
    ArtworkDimensionsChanged {
        index: usize,
        update: ArtworkDimensionsUpdate,
    },
    /// The whole artwork list swapped out (invoice items changed)
    ArtworksReplaced { artworks: Vec<LogisticsArtwork> },
    /// A cost field hand-edited; switches costing to manual
    CostFieldEdited { field: CostField, value: f64 },
    /// The explicit auto-calculate action; switches costing back to
    /// automatic and recomputes immediately
    AutoCalculateRequested,
}
