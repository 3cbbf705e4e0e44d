//! Logistics Record Model
//!
//! The mutable logistics record attached to each invoice. Created with
//! defaults when the logistics dialog opens, mutated only through the
//! engine's reconciler, and persisted verbatim on explicit save.

use serde::{Deserialize, Serialize};

/// Delivery status of an invoice's consignment
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogisticsStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Collected,
}

/// How the buyer receives the goods
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum LogisticsMethod {
    /// Shipped by the in-house courier; the only method that carries a shipping charge
    #[default]
    MetsabCourier,
    /// Buyer collects from the saleroom
    CustomerCollection,
    /// Buyer arranges their own courier
    CustomerCourier,
}

impl LogisticsMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogisticsMethod::MetsabCourier => "metsab_courier",
            LogisticsMethod::CustomerCollection => "customer_collection",
            LogisticsMethod::CustomerCourier => "customer_courier",
        }
    }

    /// Whether the consignment ships via the in-house courier
    pub fn is_courier(&self) -> bool {
        matches!(self, LogisticsMethod::MetsabCourier)
    }
}

/// Destination class used for rate selection
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DestinationClass {
    #[default]
    #[serde(rename = "UK")]
    Uk,
    International,
}

impl DestinationClass {
    pub fn as_str(&self) -> &'static str {
        match self {
            DestinationClass::Uk => "UK",
            DestinationClass::International => "International",
        }
    }
}

/// One artwork entry inside the logistics record
///
/// Dimensions are captured in inches as entered on the form; weights are in
/// kg. The engine writes the computed weights back so the form can display
/// them next to the raw measurements.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LogisticsArtwork {
    /// Invoice item this entry ships
    #[serde(default)]
    pub item_id: String,
    #[serde(default)]
    pub title: String,
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

    // === Computed Fields ===
    /// Volumetric weight in kg, from padded dimensions converted to cm
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volumetric_weight: Option<f64>,
    /// Billable weight in kg: the greater of volumetric and actual
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billable_weight: Option<f64>,
}

/// Logistics record attached to an invoice
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct LogisticsInfo {
    #[serde(default)]
    pub status: LogisticsStatus,
    #[serde(default)]
    pub destination: DestinationClass,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default)]
    pub logistics_method: LogisticsMethod,
    #[serde(default)]
    pub artworks: Vec<LogisticsArtwork>,
    /// Shipping charge in GBP; always 0 for non-courier methods
    #[serde(default)]
    pub shipping_cost: f64,
    /// Insurance charge in GBP
    #[serde(default)]
    pub insurance_cost: f64,
    /// Always shipping_cost + insurance_cost; derived, never set directly
    #[serde(default)]
    pub total_cost: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_wire_tokens() {
        assert_eq!(
            serde_json::to_string(&LogisticsMethod::MetsabCourier).unwrap(),
            "\"metsab_courier\""
        );
        assert_eq!(
            serde_json::to_string(&LogisticsMethod::CustomerCollection).unwrap(),
            "\"customer_collection\""
        );
        assert_eq!(
            serde_json::to_string(&LogisticsMethod::CustomerCourier).unwrap(),
            "\"customer_courier\""
        );
    }

    #[test]
    fn test_destination_wire_tokens() {
        assert_eq!(serde_json::to_string(&DestinationClass::Uk).unwrap(), "\"UK\"");
        assert_eq!(
            serde_json::to_string(&DestinationClass::International).unwrap(),
            "\"International\""
        );
        let parsed: DestinationClass = serde_json::from_str("\"UK\"").unwrap();
        assert_eq!(parsed, DestinationClass::Uk);
    }

    #[test]
    fn test_status_wire_tokens() {
        assert_eq!(
            serde_json::to_string(&LogisticsStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&LogisticsStatus::Collected).unwrap(),
            "\"collected\""
        );
    }

    #[test]
    fn test_default_record() {
        let info = LogisticsInfo::default();
        assert_eq!(info.status, LogisticsStatus::Pending);
        assert_eq!(info.destination, DestinationClass::Uk);
        assert_eq!(info.logistics_method, LogisticsMethod::MetsabCourier);
        assert!(info.artworks.is_empty());
        assert_eq!(info.shipping_cost, 0.0);
        assert_eq!(info.insurance_cost, 0.0);
        assert_eq!(info.total_cost, 0.0);
    }

    #[test]
    fn test_only_courier_method_ships() {
        assert!(LogisticsMethod::MetsabCourier.is_courier());
        assert!(!LogisticsMethod::CustomerCollection.is_courier());
        assert!(!LogisticsMethod::CustomerCourier.is_courier());
    }

    #[test]
    fn test_record_round_trip_preserves_optionals() {
        let info = LogisticsInfo {
            country: Some("France".to_string()),
            destination: DestinationClass::International,
            artworks: vec![LogisticsArtwork {
                item_id: "lot-42".to_string(),
                title: "Untitled".to_string(),
                length: Some(12.0),
                width: Some(8.0),
                height: Some(2.0),
                weight: Some(1.0),
                ..Default::default()
            }],
            ..Default::default()
        };
        let json = serde_json::to_string(&info).unwrap();
        // Absent optionals are omitted, not serialized as null
        assert!(!json.contains("postal_code"));
        let parsed: LogisticsInfo = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, info);
    }
}
