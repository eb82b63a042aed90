//! Leg type.
//!
//! A `Leg` is a set of two consecutive stops: a service whose itinerary
//! is a-b-c-d has three legs, a-b, b-c and c-d.

use std::fmt;

use super::{DomainError, StationCode};

/// A directed segment of a service between two consecutive stops.
///
/// # Invariants
///
/// - `origin != destination` (no self-loops)
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Leg {
    origin: StationCode,
    destination: StationCode,
}

impl Leg {
    /// Construct a leg, rejecting self-loops.
    ///
    /// # Errors
    ///
    /// Returns `Err` if `origin == destination`.
    pub fn new(origin: StationCode, destination: StationCode) -> Result<Self, DomainError> {
        if origin == destination {
            return Err(DomainError::InvalidLeg(
                "origin and destination must differ",
            ));
        }

        Ok(Leg {
            origin,
            destination,
        })
    }

    /// Returns the station this leg departs from.
    pub fn origin(&self) -> &StationCode {
        &self.origin
    }

    /// Returns the station this leg arrives at.
    pub fn destination(&self) -> &StationCode {
        &self.destination
    }

    /// Returns true if `next` starts where this leg ends.
    pub fn connects_to(&self, next: &Leg) -> bool {
        self.destination == *next.origin()
    }
}

impl fmt::Display for Leg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.origin, self.destination)
    }
}
