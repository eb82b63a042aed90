//! Conversion from inventory DTOs to domain types.

use chrono::NaiveDate;

use super::error::InventoryError;
use super::types::{PassengerRecord, TransportPlan};
use crate::domain::{Leg, Passenger, Service, StationCode};

/// Converts a transport plan into a service.
///
/// Station codes and the departure date are validated, then the
/// unordered legs are run through the itinerary builder to order the
/// service's stops and derive its ODs.
///
/// # Errors
///
/// Returns `Err` on an invalid date or station code, or when the legs
/// do not form a single simple path.
pub fn plan_to_service(plan: &TransportPlan) -> Result<Service, InventoryError> {
    let departure_date = parse_date(&plan.departure_date)?;

    let legs = plan
        .legs
        .iter()
        .map(|record| {
            let origin = parse_code(&record.origin)?;
            let destination = parse_code(&record.destination)?;
            Leg::new(origin, destination).map_err(InventoryError::from)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Service::from_legs(plan.name.clone(), departure_date, legs).map_err(InventoryError::from)
}

/// Converts manifest records into domain passengers.
///
/// # Errors
///
/// Returns `Err` if a record carries an invalid station code.
pub fn records_to_passengers(
    records: &[PassengerRecord],
) -> Result<Vec<Passenger>, InventoryError> {
    records
        .iter()
        .map(|record| {
            let origin = parse_code(&record.origin)?;
            let destination = parse_code(&record.destination)?;
            Ok(Passenger::new(
                origin,
                destination,
                record.sale_day_x,
                record.price,
            ))
        })
        .collect()
}

fn parse_date(raw: &str) -> Result<NaiveDate, InventoryError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|source| InventoryError::Date {
        value: raw.to_owned(),
        source,
    })
}

fn parse_code(raw: &str) -> Result<StationCode, InventoryError> {
    StationCode::parse(raw).map_err(|source| InventoryError::Station {
        value: raw.to_owned(),
        source,
    })
}
