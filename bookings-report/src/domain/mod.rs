//! Domain types for the bookings report.
//!
//! This module contains the core model of the transport plan: services,
//! station codes, legs, ODs and passenger bookings. All types enforce
//! their invariants at construction time, so code that receives these
//! types can trust their validity.

mod error;
mod leg;
mod od;
mod passenger;
mod service;
mod station;

pub use error::DomainError;
pub use leg::Leg;
pub use od::{HistoryPoint, Od};
pub use passenger::Passenger;
pub use service::Service;
pub use station::{InvalidStationCode, StationCode};
