use std::process::ExitCode;

use bookings_report::inventory::{self, InventoryError};
use bookings_report::report::ServiceReport;
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let mut args = std::env::args().skip(1);
    let Some(plan_path) = args.next() else {
        eprintln!("usage: bookings-report <plan.json> [manifest.json]");
        return ExitCode::from(2);
    };
    let manifest_path = args.next();

    match run(&plan_path, manifest_path.as_deref()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(plan_path: &str, manifest_path: Option<&str>) -> Result<(), InventoryError> {
    let mut service = inventory::load_plan_from_path(plan_path)?;

    if let Some(path) = manifest_path {
        let passengers = inventory::load_manifest_from_path(path)?;
        service.load_passenger_manifest(passengers)?;
    } else {
        eprintln!("Warning: no manifest given, reporting an empty booking state.");
    }

    let itinerary = service.itinerary().map_err(bookings_report::domain::DomainError::from)?;
    let stops: Vec<&str> = itinerary.iter().map(|s| s.as_str()).collect();
    println!("Itinerary: {}", stops.join(" - "));
    println!();
    println!("{}", ServiceReport::build(&service));

    Ok(())
}
