//! Loading transport plans and passenger manifests.
//!
//! The inventory system exports a service's transport plan (its legs,
//! unordered) and its passenger manifest as JSON. This module parses
//! those exports and converts them into validated domain types.

mod convert;
mod error;
mod types;

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use tracing::debug;

pub use convert::{plan_to_service, records_to_passengers};
pub use error::InventoryError;
pub use types::{LegRecord, PassengerManifest, PassengerRecord, TransportPlan};

use crate::domain::{Passenger, Service};

/// Loads a service from a transport-plan export.
///
/// # Errors
///
/// Returns `Err` on IO or JSON failure, or when the plan does not
/// convert into a valid service.
pub fn load_plan(reader: impl Read) -> Result<Service, InventoryError> {
    let plan: TransportPlan = serde_json::from_reader(reader)?;
    debug!(service = %plan.name, legs = plan.legs.len(), "parsed transport plan");
    plan_to_service(&plan)
}

/// Loads a service from a transport-plan file.
pub fn load_plan_from_path(path: impl AsRef<Path>) -> Result<Service, InventoryError> {
    let file = File::open(path)?;
    load_plan(BufReader::new(file))
}

/// Loads the bookings of a passenger-manifest export.
///
/// # Errors
///
/// Returns `Err` on IO or JSON failure, or when a record carries an
/// invalid station code.
pub fn load_manifest(reader: impl Read) -> Result<Vec<Passenger>, InventoryError> {
    let manifest: PassengerManifest = serde_json::from_reader(reader)?;
    debug!(bookings = manifest.passengers.len(), "parsed passenger manifest");
    records_to_passengers(&manifest.passengers)
}

/// Loads the bookings of a passenger-manifest file.
pub fn load_manifest_from_path(path: impl AsRef<Path>) -> Result<Vec<Passenger>, InventoryError> {
    let file = File::open(path)?;
    load_manifest(BufReader::new(file))
}
