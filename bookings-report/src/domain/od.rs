//! Origin-Destination (OD) pair.
//!
//! An OD represents the transportation facility between two stops,
//! bought by a passenger. A service whose itinerary is a-b-c-d sells up
//! to six ODs: a-b, a-c, a-d, b-c, b-d and c-d.

use std::collections::BTreeMap;

use super::{Passenger, StationCode};

/// One data point of an OD's cumulative sales history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryPoint {
    /// Sale day on the day-x scale (negative before departure).
    pub day_x: i32,
    /// Cumulative number of bookings up to and including this day.
    pub bookings: u32,
    /// Cumulative revenue up to and including this day.
    pub revenue: f64,
}

/// An origin-destination pair on a service, holding the bookings made
/// for it.
#[derive(Debug, Clone)]
pub struct Od {
    origin: StationCode,
    destination: StationCode,
    passengers: Vec<Passenger>,
}

impl Od {
    pub(crate) fn new(origin: StationCode, destination: StationCode) -> Self {
        Self {
            origin,
            destination,
            passengers: Vec::new(),
        }
    }

    /// Returns the station this OD starts at.
    pub fn origin(&self) -> &StationCode {
        &self.origin
    }

    /// Returns the station this OD ends at.
    pub fn destination(&self) -> &StationCode {
        &self.destination
    }

    /// Returns the bookings allocated to this OD, in manifest order.
    pub fn passengers(&self) -> &[Passenger] {
        &self.passengers
    }

    pub(crate) fn record(&mut self, passenger: Passenger) {
        self.passengers.push(passenger);
    }

    /// Returns the number of bookings on this OD.
    pub fn booking_count(&self) -> usize {
        self.passengers.len()
    }

    /// Returns the total revenue of this OD.
    pub fn revenue(&self) -> f64 {
        self.passengers.iter().map(|p| p.price).sum()
    }

    /// Generates the sales history of this OD.
    ///
    /// One point per day a sale was made, sorted by day, with bookings
    /// and revenue accumulated across days.
    pub fn history(&self) -> Vec<HistoryPoint> {
        let mut per_day: BTreeMap<i32, (u32, f64)> = BTreeMap::new();
        for passenger in &self.passengers {
            let entry = per_day.entry(passenger.sale_day_x).or_insert((0, 0.0));
            entry.0 += 1;
            entry.1 += passenger.price;
        }

        let mut bookings = 0u32;
        let mut revenue = 0.0f64;
        per_day
            .into_iter()
            .map(|(day_x, (count, amount))| {
                bookings += count;
                revenue += amount;
                HistoryPoint {
                    day_x,
                    bookings,
                    revenue,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    fn od_with_sales(sales: &[(i32, f64)]) -> Od {
        let mut od = Od::new(code("ply"), code("lpd"));
        for &(day_x, price) in sales {
            od.record(Passenger::new(code("ply"), code("lpd"), day_x, price));
        }
        od
    }

    #[test]
    fn empty_od_has_no_history() {
        let od = od_with_sales(&[]);
        assert_eq!(od.booking_count(), 0);
        assert_eq!(od.revenue(), 0.0);
        assert!(od.history().is_empty());
    }

    #[test]
    fn history_accumulates_across_days() {
        let od = od_with_sales(&[(-30, 20.0), (-25, 30.0), (-20, 40.0), (-20, 40.0)]);

        let history = od.history();
        assert_eq!(history.len(), 3);
        assert_eq!(
            history[0],
            HistoryPoint {
                day_x: -30,
                bookings: 1,
                revenue: 20.0
            }
        );
        assert_eq!(
            history[1],
            HistoryPoint {
                day_x: -25,
                bookings: 2,
                revenue: 50.0
            }
        );
        assert_eq!(
            history[2],
            HistoryPoint {
                day_x: -20,
                bookings: 4,
                revenue: 130.0
            }
        );
    }

    #[test]
    fn history_sorted_regardless_of_sale_order() {
        let od = od_with_sales(&[(-10, 50.0), (-30, 20.0), (-20, 40.0)]);

        let days: Vec<i32> = od.history().iter().map(|p| p.day_x).collect();
        assert_eq!(days, vec![-30, -20, -10]);
    }

    #[test]
    fn revenue_sums_prices() {
        let od = od_with_sales(&[(-30, 20.0), (-25, 30.0)]);
        assert_eq!(od.revenue(), 50.0);
        assert_eq!(od.booking_count(), 2);
    }
}
