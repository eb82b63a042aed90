//! Inventory export DTOs.
//!
//! These types map directly to the JSON the inventory system exports.
//! Station codes and dates stay as strings here; validation happens
//! during conversion into domain types.

use serde::Deserialize;

/// The transport plan of one service, as exported by the inventory
/// system.
#[derive(Debug, Clone, Deserialize)]
pub struct TransportPlan {
    /// Service name (e.g. "7601").
    pub name: String,

    /// Departure date, ISO `YYYY-MM-DD`.
    pub departure_date: String,

    /// The service's legs. Order carries no meaning; the itinerary is
    /// reconstructed from the leg endpoints.
    pub legs: Vec<LegRecord>,
}

/// One leg of the transport plan.
#[derive(Debug, Clone, Deserialize)]
pub struct LegRecord {
    /// Station code the leg departs from.
    pub origin: String,

    /// Station code the leg arrives at.
    pub destination: String,
}

/// The passenger manifest of one service: every booking made.
#[derive(Debug, Clone, Deserialize)]
pub struct PassengerManifest {
    pub passengers: Vec<PassengerRecord>,
}

/// One booking on the manifest.
#[derive(Debug, Clone, Deserialize)]
pub struct PassengerRecord {
    /// Station code the passenger boards at.
    pub origin: String,

    /// Station code the passenger disembarks at.
    pub destination: String,

    /// Day the sale was made, on the day-x scale.
    pub sale_day_x: i32,

    /// Price paid for the booking.
    pub price: f64,
}
