//! Dimension and weight calculation
//!
//! Artwork measurements are captured in inches on the forms; the courier
//! rates by centimetres and kilograms. Conversion is exact and unrounded;
//! rounding only happens when a computed weight is written back to a record
//! for display.

use serde::{Deserialize, Serialize};

/// Centimetres per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Courier volumetric divisor (cm^3 per kg)
pub const VOLUMETRIC_DIVISOR: f64 = 5000.0;

/// Convert inches to centimetres
#[inline]
pub fn inches_to_cm(inches: f64) -> f64 {
    inches * CM_PER_INCH
}

/// Convert centimetres to inches
#[inline]
pub fn cm_to_inches(cm: f64) -> f64 {
    cm / CM_PER_INCH
}

/// Round a computed weight to the 2 decimal places shown on forms
#[inline]
pub fn round_weight(weight: f64) -> f64 {
    (weight * 100.0).round() / 100.0
}

/// Package dimensions in centimetres with an optional actual weight in kg
///
/// Dimension values are assumed positive and finite; the form layer rejects
/// anything else before it reaches the engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ItemDimensions {
    /// Length in cm
    pub length: f64,
    /// Width in cm
    pub width: f64,
    /// Height in cm
    pub height: f64,
    /// Actual weight in kg; treated as 0 when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
}

impl ItemDimensions {
    pub fn new(length: f64, width: f64, height: f64, weight: Option<f64>) -> Self {
        Self {
            length,
            width,
            height,
            weight,
        }
    }

    /// Build from inch measurements, converting each dimension to centimetres
    pub fn from_inches(length: f64, width: f64, height: f64, weight: Option<f64>) -> Self {
        Self::new(
            inches_to_cm(length),
            inches_to_cm(width),
            inches_to_cm(height),
            weight,
        )
    }

    /// Volumetric weight in kg: L x W x H / 5000
    pub fn volumetric_weight(&self) -> f64 {
        (self.length * self.width * self.height) / VOLUMETRIC_DIVISOR
    }

    /// Billable weight in kg: the greater of volumetric and actual weight
    pub fn billable_weight(&self) -> f64 {
        self.volumetric_weight().max(self.weight.unwrap_or(0.0))
    }
}
