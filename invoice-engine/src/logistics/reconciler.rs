//! Logistics Reconciliation State Machine
//!
//! Owns an invoice's logistics record for the duration of an editing
//! session and keeps its costs consistent with its inputs. Costing starts
//! automatic: shipping and insurance are recomputed from the current
//! method, destination and measurements after every input change. The
//! moment a user hand-edits a cost field, costing turns manual and input
//! changes stop touching the figures; the explicit auto-calculate action
//! returns to automatic costing and recomputes immediately.
//!
//! Events are applied synchronously, so a manual edit lands and flips the
//! mode before any later event is seen; a recomputation can never overwrite
//! a manual value with a stale one.

use serde::{Deserialize, Serialize};
use shared::models::{LogisticsArtwork, LogisticsInfo};
use shared::policy::PolicyTables;

use crate::dimensions::{ItemDimensions, round_weight};
use crate::money::{to_decimal, to_f64};
use crate::pricing::{calculate_insurance_cost, calculate_shipping_invoice_cost};

use super::event::{ArtworkDimensionsUpdate, CostField, LogisticsEvent};

/// Crating allowance added to each linear dimension before conversion (inches)
pub const PACKAGING_PAD_INCHES: f64 = 2.0;

/// Whether costs are derived from inputs or hand-entered
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CalcMode {
    /// Costs recomputed whenever a costing input changes
    #[default]
    Auto,
    /// Costs frozen at hand-entered values until auto-calculate is requested
    Manual,
}

/// Reconciles a logistics record against editing events
#[derive(Debug, Clone)]
pub struct LogisticsReconciler {
    mode: CalcMode,
    info: LogisticsInfo,
    /// Invoice sale total in GBP, the insurance basis; fixed per session
    sale_total: f64,
    tables: PolicyTables,
}

impl LogisticsReconciler {
    /// Start an editing session over an existing record
    ///
    /// Sessions always open in automatic costing. The stored figures are
    /// left untouched until the first event arrives.
    pub fn new(info: LogisticsInfo, sale_total: f64, tables: PolicyTables) -> Self {
        Self {
            mode: CalcMode::Auto,
            info,
            sale_total,
            tables,
        }
    }

    pub fn mode(&self) -> CalcMode {
        self.mode
    }

    pub fn info(&self) -> &LogisticsInfo {
        &self.info
    }

    /// Finish the session, yielding the record for persistence
    pub fn into_info(self) -> LogisticsInfo {
        self.info
    }

    /// Apply one editing event
    pub fn apply(&mut self, event: LogisticsEvent) {
        match event {
            LogisticsEvent::MethodChanged { method } => {
                self.info.logistics_method = method;
                if self.mode == CalcMode::Auto {
                    self.recompute();
                } else {
                    // Inputs keep updating while manual; only the shipping
                    // floor for non-courier methods still applies
                    self.enforce_method_floor();
                    self.derive_total();
                }
            }
            LogisticsEvent::DestinationChanged { destination } => {
                self.info.destination = destination;
                self.recompute_if_auto();
            }
            LogisticsEvent::CountryChanged { country } => {
                self.info.country = country;
                self.recompute_if_auto();
            }
            LogisticsEvent::PostalCodeChanged { postal_code } => {
                self.info.postal_code = postal_code;
            }
            LogisticsEvent::StatusChanged { status } => {
                self.info.status = status;
            }
            LogisticsEvent::ArtworkDimensionsChanged { index, update } => {
                let Some(artwork) = self.info.artworks.get_mut(index) else {
                    tracing::warn!(index, "Dimension change for a missing artwork entry, ignoring");
                    return;
                };
                apply_dimension_update(artwork, &update);
                self.recompute_if_auto();
            }
            LogisticsEvent::ArtworksReplaced { artworks } => {
                self.info.artworks = artworks;
                self.recompute_if_auto();
            }
            LogisticsEvent::CostFieldEdited { field, value } => {
                self.mode = CalcMode::Manual;
                match field {
                    CostField::Shipping => self.info.shipping_cost = value,
                    CostField::Insurance => self.info.insurance_cost = value,
                }
                self.enforce_method_floor();
                self.derive_total();
            }
            LogisticsEvent::AutoCalculateRequested => {
                self.mode = CalcMode::Auto;
                self.recompute();
            }
        }
    }

    fn recompute_if_auto(&mut self) {
        if self.mode == CalcMode::Auto {
            self.recompute();
        }
    }

    /// Recompute shipping and insurance from the current inputs
    ///
    /// # Calculation Steps
    /// 1. Pad each measured dimension by the crating allowance, convert to
    ///    cm, and write the computed weights back on the artwork entries
    /// 2. Shipping: courier rate card over the summed billable weight;
    ///    zero for collection and customer-courier methods, which also
    ///    carry no computed weights
    /// 3. Insurance: band charge for the invoice sale total
    /// 4. Total: always shipping + insurance
    fn recompute(&mut self) {
        if self.info.logistics_method.is_courier() {
            let packages = refresh_artwork_weights(&mut self.info.artworks);
            let shipping = calculate_shipping_invoice_cost(
                &packages,
                self.info.destination,
                self.info.country.as_deref(),
                &self.tables.courier,
            );
            self.info.shipping_cost = to_f64(shipping);
        } else {
            clear_artwork_weights(&mut self.info.artworks);
            self.info.shipping_cost = 0.0;
        }

        let insurance = calculate_insurance_cost(
            to_decimal(self.sale_total),
            self.info.destination,
            &self.tables.insurance,
        );
        self.info.insurance_cost = to_f64(insurance);

        self.derive_total();
    }

    /// Non-courier methods never carry a shipping charge, whatever the mode
    fn enforce_method_floor(&mut self) {
        if !self.info.logistics_method.is_courier() {
            self.info.shipping_cost = 0.0;
        }
    }

    /// total_cost is derived from the two stored fields, never set directly
    fn derive_total(&mut self) {
        self.info.total_cost = self.info.shipping_cost + self.info.insurance_cost;
    }
}

/// Merge a partial dimension update into an artwork entry
fn apply_dimension_update(artwork: &mut LogisticsArtwork, update: &ArtworkDimensionsUpdate) {
    if let Some(length) = update.length {
        artwork.length = Some(length);
    }
    if let Some(width) = update.width {
        artwork.width = Some(width);
    }
    if let Some(height) = update.height {
        artwork.height = Some(height);
    }
    if let Some(weight) = update.weight {
        artwork.weight = Some(weight);
    }
}

/// Rebuild the computed weights on each artwork entry and return the padded
/// package dimensions used for rating
fn refresh_artwork_weights(artworks: &mut [LogisticsArtwork]) -> Vec<ItemDimensions> {
    let mut packages = Vec::with_capacity(artworks.len());
    for artwork in artworks.iter_mut() {
        let package = match (artwork.length, artwork.width, artwork.height) {
            (Some(length), Some(width), Some(height)) => {
                let package = ItemDimensions::from_inches(
                    length + PACKAGING_PAD_INCHES,
                    width + PACKAGING_PAD_INCHES,
                    height + PACKAGING_PAD_INCHES,
                    artwork.weight,
                );
                artwork.volumetric_weight = Some(round_weight(package.volumetric_weight()));
                package
            }
            _ => {
                // Incomplete measurements have no volume to rate; the
                // actual weight still bills
                artwork.volumetric_weight = None;
                ItemDimensions::new(0.0, 0.0, 0.0, artwork.weight)
            }
        };
        artwork.billable_weight = Some(round_weight(package.billable_weight()));
        packages.push(package);
    }
    packages
}

/// Computed weights are meaningless without a courier consignment
fn clear_artwork_weights(artworks: &mut [LogisticsArtwork]) {
    for artwork in artworks.iter_mut() {
        artwork.volumetric_weight = None;
        artwork.billable_weight = None;
    }
}
