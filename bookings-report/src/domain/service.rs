//! Service type.
//!
//! A service is a facility transporting passengers between two or more
//! stops at a specific departure date. It is uniquely defined by its
//! name and departure date, and is composed of legs (its stops and
//! timetable) which lead to the Origin-Destination (OD) pairs a
//! passenger can buy.

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::debug;

use super::{DomainError, Leg, Od, Passenger, StationCode};
use crate::itinerary::{MalformedLegs, build_itinerary};

/// A service with its legs and ODs.
///
/// Legs are held in travel order once loaded: `load_itinerary` creates
/// them from consecutive stations, and `from_legs` normalizes an
/// unordered leg set through the itinerary builder first.
///
/// # Examples
///
/// ```
/// use bookings_report::domain::{Service, StationCode};
/// use chrono::NaiveDate;
///
/// let ply = StationCode::parse("ply").unwrap();
/// let lpd = StationCode::parse("lpd").unwrap();
/// let msc = StationCode::parse("msc").unwrap();
///
/// let date = NaiveDate::from_ymd_opt(2026, 9, 2).unwrap();
/// let mut service = Service::new("7601", date);
/// service.load_itinerary(&[ply, lpd, msc]).unwrap();
///
/// assert_eq!(service.legs().len(), 2);
/// assert_eq!(service.ods().len(), 3);
/// ```
#[derive(Debug, Clone)]
pub struct Service {
    name: String,
    departure_date: NaiveDate,
    legs: Vec<Leg>,
    ods: Vec<Od>,
}

impl Service {
    /// Creates an empty service; load an itinerary before use.
    pub fn new(name: impl Into<String>, departure_date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            departure_date,
            legs: Vec::new(),
            ods: Vec::new(),
        }
    }

    /// Builds a service from an unordered leg set.
    ///
    /// The legs are ordered through the itinerary builder, then the
    /// resulting itinerary is loaded as with [`Service::load_itinerary`].
    ///
    /// # Errors
    ///
    /// Returns `Err` if the legs do not form a single simple path.
    pub fn from_legs(
        name: impl Into<String>,
        departure_date: NaiveDate,
        legs: Vec<Leg>,
    ) -> Result<Self, DomainError> {
        let stations = build_itinerary(&legs)?;
        let mut service = Service::new(name, departure_date);
        service.load_itinerary(&stations)?;
        Ok(service)
    }

    /// Returns the service name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the departure date.
    pub fn departure_date(&self) -> NaiveDate {
        self.departure_date
    }

    /// Returns the legs of this service, in travel order.
    pub fn legs(&self) -> &[Leg] {
        &self.legs
    }

    /// Returns the ODs of this service.
    pub fn ods(&self) -> &[Od] {
        &self.ods
    }

    /// Number of days before departure, relative to today.
    pub fn day_x(&self) -> i64 {
        self.day_x_from(chrono::Local::now().date_naive())
    }

    /// Number of days before departure, relative to `today`.
    ///
    /// Negative before departure, zero on the departure day.
    pub fn day_x_from(&self, today: NaiveDate) -> i64 {
        (today - self.departure_date).num_days()
    }

    /// The ordered list of stations where the service stops.
    ///
    /// # Errors
    ///
    /// Returns `Err` if no itinerary has been loaded or the legs do not
    /// form a single simple path.
    pub fn itinerary(&self) -> Result<Vec<StationCode>, MalformedLegs> {
        build_itinerary(&self.legs)
    }

    /// Loads legs and ODs for an ordered list of stations.
    ///
    /// Creates one leg per pair of consecutive stations and one OD per
    /// forward station pair, replacing any previously loaded plan.
    ///
    /// # Errors
    ///
    /// Returns `Err` if fewer than two stations are given or a station
    /// appears twice.
    pub fn load_itinerary(&mut self, stations: &[StationCode]) -> Result<(), DomainError> {
        if stations.len() < 2 {
            return Err(DomainError::InvalidItinerary(
                "needs at least two stations",
            ));
        }

        let distinct: HashSet<&StationCode> = stations.iter().collect();
        if distinct.len() != stations.len() {
            return Err(DomainError::InvalidItinerary(
                "visits a station more than once",
            ));
        }

        let mut legs = Vec::with_capacity(stations.len() - 1);
        for pair in stations.windows(2) {
            legs.push(Leg::new(pair[0].clone(), pair[1].clone())?);
        }

        let mut ods = Vec::with_capacity(stations.len() * (stations.len() - 1) / 2);
        for (i, origin) in stations.iter().enumerate() {
            for destination in &stations[i + 1..] {
                ods.push(Od::new(origin.clone(), destination.clone()));
            }
        }

        debug!(
            service = %self.name,
            legs = legs.len(),
            ods = ods.len(),
            "loaded itinerary"
        );

        self.legs = legs;
        self.ods = ods;
        Ok(())
    }

    /// Reads a passenger manifest and allocates bookings across ODs.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a booking names an origin-destination pair that
    /// is not sold on this service; no bookings are recorded in that
    /// case.
    pub fn load_passenger_manifest(
        &mut self,
        passengers: Vec<Passenger>,
    ) -> Result<(), DomainError> {
        // Validate the whole manifest before recording anything.
        let mut allocation = Vec::with_capacity(passengers.len());
        for passenger in &passengers {
            let index = self
                .ods
                .iter()
                .position(|od| {
                    od.origin() == &passenger.origin
                        && od.destination() == &passenger.destination
                })
                .ok_or_else(|| DomainError::UnknownOd {
                    origin: passenger.origin.clone(),
                    destination: passenger.destination.clone(),
                })?;
            allocation.push(index);
        }

        debug!(
            service = %self.name,
            bookings = passengers.len(),
            "allocating passenger manifest"
        );

        for (passenger, index) in passengers.into_iter().zip(allocation) {
            self.ods[index].record(passenger);
        }
        Ok(())
    }

    /// Returns the OD with this origin and destination, if sold.
    pub fn od(&self, origin: &StationCode, destination: &StationCode) -> Option<&Od> {
        self.ods
            .iter()
            .find(|od| od.origin() == origin && od.destination() == destination)
    }

    /// Returns the legs crossed by an OD, in travel order.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the OD's endpoints are not on this service's
    /// itinerary in travel order.
    pub fn legs_for(&self, od: &Od) -> Result<&[Leg], DomainError> {
        let itinerary = self.itinerary()?;
        let origin_index = self.station_index(&itinerary, od.origin())?;
        let destination_index = self.station_index(&itinerary, od.destination())?;

        if origin_index >= destination_index {
            return Err(DomainError::InvalidItinerary(
                "OD endpoints are not in travel order",
            ));
        }

        Ok(&self.legs[origin_index..destination_index])
    }

    /// Returns the passengers occupying a seat on a leg.
    ///
    /// A passenger occupies the leg when the leg lies within their OD's
    /// span; each booking belongs to exactly one OD, so no booking is
    /// counted twice.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the leg does not belong to this service.
    pub fn passengers_on(&self, leg: &Leg) -> Result<Vec<&Passenger>, DomainError> {
        let leg_index = self
            .legs
            .iter()
            .position(|candidate| candidate == leg)
            .ok_or(DomainError::InvalidLeg("leg does not belong to this service"))?;

        let itinerary = self.itinerary()?;
        let mut passengers = Vec::new();
        for od in &self.ods {
            let origin_index = self.station_index(&itinerary, od.origin())?;
            let destination_index = self.station_index(&itinerary, od.destination())?;
            if origin_index <= leg_index && leg_index < destination_index {
                passengers.extend(od.passengers());
            }
        }
        Ok(passengers)
    }

    fn station_index(
        &self,
        itinerary: &[StationCode],
        station: &StationCode,
    ) -> Result<usize, DomainError> {
        itinerary
            .iter()
            .position(|candidate| candidate == station)
            .ok_or(DomainError::InvalidItinerary(
                "station is not on this service's itinerary",
            ))
    }
}
