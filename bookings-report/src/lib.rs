//! Bookings report library for a transportation operator.
//!
//! Models the transport plan extracted from an inventory system: services
//! (trains, flights or buses), their stations and legs, the
//! origin-destination (OD) pairs passengers can buy, and the bookings made
//! against them. The core algorithmic piece reconstructs a service's
//! ordered itinerary from an unordered set of legs.

pub mod domain;
pub mod inventory;
pub mod itinerary;
pub mod pricing;
pub mod report;
