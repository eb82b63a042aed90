//! Bookings report for a service.
//!
//! Aggregates the bookings of every OD on a service into a report:
//! per-OD totals, the cumulative sales history of each OD, and the
//! service totals. `Display` renders the text the CLI prints.

use std::fmt;

use chrono::NaiveDate;

use crate::domain::{HistoryPoint, Service, StationCode};

/// The report section for one OD.
#[derive(Debug, Clone)]
pub struct OdReport {
    pub origin: StationCode,
    pub destination: StationCode,
    pub bookings: usize,
    pub revenue: f64,
    pub history: Vec<HistoryPoint>,
}

/// The bookings report of one service.
#[derive(Debug, Clone)]
pub struct ServiceReport {
    pub service_name: String,
    pub departure_date: NaiveDate,
    pub total_bookings: usize,
    pub total_revenue: f64,
    pub ods: Vec<OdReport>,
}

impl ServiceReport {
    /// Builds the report from a service's current bookings.
    pub fn build(service: &Service) -> Self {
        let ods: Vec<OdReport> = service
            .ods()
            .iter()
            .map(|od| OdReport {
                origin: od.origin().clone(),
                destination: od.destination().clone(),
                bookings: od.booking_count(),
                revenue: od.revenue(),
                history: od.history(),
            })
            .collect();

        let total_bookings = ods.iter().map(|od| od.bookings).sum();
        let total_revenue = ods.iter().map(|od| od.revenue).sum();

        Self {
            service_name: service.name().to_owned(),
            departure_date: service.departure_date(),
            total_bookings,
            total_revenue,
            ods,
        }
    }
}

impl fmt::Display for ServiceReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Bookings report for service {} departing {}",
            self.service_name, self.departure_date
        )?;
        writeln!(
            f,
            "{} bookings, {:.2} total revenue",
            self.total_bookings, self.total_revenue
        )?;

        for od in &self.ods {
            writeln!(
                f,
                "  {}-{}: {} bookings, {:.2}",
                od.origin, od.destination, od.bookings, od.revenue
            )?;
            for point in &od.history {
                writeln!(
                    f,
                    "    day {}: {} cumulative bookings, {:.2}",
                    point.day_x, point.bookings, point.revenue
                )?;
            }
        }
        Ok(())
    }
}
