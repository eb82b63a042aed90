//! Domain error types.
//!
//! These errors represent validation failures and data inconsistencies
//! in the domain layer. They are distinct from inventory/IO errors.

use super::StationCode;
use crate::itinerary::MalformedLegs;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Invalid leg construction (e.g. a self-loop)
    #[error("invalid leg: {0}")]
    InvalidLeg(&'static str),

    /// Invalid itinerary supplied to a service
    #[error("invalid itinerary: {0}")]
    InvalidItinerary(&'static str),

    /// No OD with this origin and destination exists on the service
    #[error("no OD {origin}-{destination} on this service")]
    UnknownOd {
        origin: StationCode,
        destination: StationCode,
    },

    /// The service's leg set does not form a single simple path
    #[error(transparent)]
    MalformedLegs(#[from] MalformedLegs),
}
