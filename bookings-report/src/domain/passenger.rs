//! Passenger booking record.

use super::StationCode;

/// A passenger that has a booking on a seat for a particular
/// origin-destination.
///
/// `sale_day_x` is the day the booking was made, on the day-x scale:
/// days relative to the service's departure date, so negative before
/// departure. Revenue management systems prefer this scale to dates.
#[derive(Debug, Clone, PartialEq)]
pub struct Passenger {
    pub origin: StationCode,
    pub destination: StationCode,
    pub sale_day_x: i32,
    pub price: f64,
}

impl Passenger {
    pub fn new(
        origin: StationCode,
        destination: StationCode,
        sale_day_x: i32,
        price: f64,
    ) -> Self {
        Self {
            origin,
            destination,
            sale_day_x,
            price,
        }
    }
}
