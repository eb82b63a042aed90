//! Itinerary reconstruction from an unordered leg set.
//!
//! The inventory system exports a service's legs in no particular
//! order. This module rebuilds the ordered station sequence, from the
//! overall origin to the overall destination, assuming the legs form
//! exactly one simple path. Later features index into this itinerary
//! rather than re-deriving it, so the order is their input contract.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::domain::{Leg, StationCode};

/// Error returned when a leg set does not form a single simple path.
///
/// Covers empty input, branching (a station departing or arriving on
/// more than one leg), cycles, ambiguous endpoints and disconnected
/// fragments. No partial itinerary is returned in any of these cases.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed leg set: {reason}")]
pub struct MalformedLegs {
    reason: &'static str,
}

impl MalformedLegs {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }

    /// Returns the reason the leg set was rejected.
    pub fn reason(&self) -> &str {
        self.reason
    }
}

/// Reconstructs the ordered itinerary of a leg set.
///
/// Returns the stations visited from the overall origin (the one
/// station no leg arrives at) to the overall destination (the one
/// station no leg departs from): `legs.len() + 1` stations, each leg
/// appearing exactly once as a consecutive pair. The order of `legs`
/// carries no meaning; shuffling the input never changes the output.
///
/// # Errors
///
/// Returns `Err` if the legs do not form exactly one simple path.
///
/// # Examples
///
/// ```
/// use bookings_report::domain::{Leg, StationCode};
/// use bookings_report::itinerary::build_itinerary;
///
/// let ply = StationCode::parse("ply").unwrap();
/// let lpd = StationCode::parse("lpd").unwrap();
/// let msc = StationCode::parse("msc").unwrap();
///
/// // Legs arrive unordered from the inventory extract.
/// let legs = vec![
///     Leg::new(lpd.clone(), msc.clone()).unwrap(),
///     Leg::new(ply.clone(), lpd.clone()).unwrap(),
/// ];
///
/// let itinerary = build_itinerary(&legs).unwrap();
/// assert_eq!(itinerary, vec![ply, lpd, msc]);
/// ```
pub fn build_itinerary(legs: &[Leg]) -> Result<Vec<StationCode>, MalformedLegs> {
    if legs.is_empty() {
        return Err(MalformedLegs::new("no legs"));
    }

    let mut successor: HashMap<&StationCode, &StationCode> = HashMap::with_capacity(legs.len());
    let mut origins: HashSet<&StationCode> = HashSet::with_capacity(legs.len());
    let mut destinations: HashSet<&StationCode> = HashSet::with_capacity(legs.len());

    for leg in legs {
        if successor.insert(leg.origin(), leg.destination()).is_some() {
            return Err(MalformedLegs::new(
                "a station departs on more than one leg",
            ));
        }
        origins.insert(leg.origin());
        if !destinations.insert(leg.destination()) {
            return Err(MalformedLegs::new(
                "a station arrives on more than one leg",
            ));
        }
    }

    let overall_origin = unique_endpoint(
        &origins,
        &destinations,
        "no overall origin: the legs form a cycle",
        "several overall origins: the legs are disconnected",
    )?;
    let overall_destination = unique_endpoint(
        &destinations,
        &origins,
        "no overall destination: the legs form a cycle",
        "several overall destinations: the legs are disconnected",
    )?;

    let mut itinerary = Vec::with_capacity(legs.len() + 1);
    let mut current = overall_origin;
    itinerary.push(current.clone());

    // Exactly one follow step per leg; anything shorter or longer means
    // the leg set is not a single path.
    for _ in 0..legs.len() {
        current = successor
            .get(current)
            .copied()
            .ok_or_else(|| MalformedLegs::new("the path breaks before its destination"))?;
        itinerary.push(current.clone());
    }

    if current != overall_destination {
        return Err(MalformedLegs::new(
            "the path does not end at the overall destination",
        ));
    }

    debug!(stations = itinerary.len(), "reconstructed itinerary");
    Ok(itinerary)
}

/// The single station in `of` that is absent from `but_not`.
fn unique_endpoint<'a>(
    of: &HashSet<&'a StationCode>,
    but_not: &HashSet<&'a StationCode>,
    none_reason: &'static str,
    several_reason: &'static str,
) -> Result<&'a StationCode, MalformedLegs> {
    let mut candidates = of.difference(but_not).copied();
    let endpoint = candidates
        .next()
        .ok_or_else(|| MalformedLegs::new(none_reason))?;
    if candidates.next().is_some() {
        return Err(MalformedLegs::new(several_reason));
    }
    Ok(endpoint)
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    /// A random simple path: 2-9 distinct station codes in visit order,
    /// with the derived legs shuffled into an arbitrary order.
    fn path_with_shuffled_legs() -> impl Strategy<Value = (Vec<StationCode>, Vec<Leg>)> {
        proptest::collection::hash_set("[a-z][a-z0-9]{1,7}", 2..10)
            .prop_map(|codes| {
                codes
                    .into_iter()
                    .map(|s| StationCode::parse(&s).unwrap())
                    .collect::<Vec<_>>()
            })
            .prop_flat_map(|stations| {
                let legs: Vec<Leg> = stations
                    .windows(2)
                    .map(|pair| Leg::new(pair[0].clone(), pair[1].clone()).unwrap())
                    .collect();
                (Just(stations), Just(legs).prop_shuffle())
            })
    }

    proptest! {
        /// Shuffling the input legs never changes the output.
        #[test]
        fn reconstruction_is_order_invariant((stations, legs) in path_with_shuffled_legs()) {
            prop_assert_eq!(build_itinerary(&legs).unwrap(), stations);
        }

        /// n legs always give n + 1 stations, from the station no leg
        /// arrives at to the station no leg departs from.
        #[test]
        fn length_and_endpoints((stations, legs) in path_with_shuffled_legs()) {
            let itinerary = build_itinerary(&legs).unwrap();
            prop_assert_eq!(itinerary.len(), legs.len() + 1);
            prop_assert_eq!(itinerary.first(), stations.first());
            prop_assert_eq!(itinerary.last(), stations.last());
        }

        /// Consecutive pairs of the output reproduce the input leg set.
        #[test]
        fn consecutive_pairs_roundtrip((_stations, legs) in path_with_shuffled_legs()) {
            let itinerary = build_itinerary(&legs).unwrap();

            let mut derived: Vec<Leg> = itinerary
                .windows(2)
                .map(|pair| Leg::new(pair[0].clone(), pair[1].clone()).unwrap())
                .collect();
            let mut original = legs.clone();
            derived.sort();
            original.sort();
            prop_assert_eq!(derived, original);
        }

        /// Dropping an interior leg always fails (disconnected path).
        #[test]
        fn missing_interior_leg_fails((_stations, legs) in path_with_shuffled_legs()) {
            // Need at least 3 legs so an interior one exists after the
            // shuffle is undone.
            if legs.len() >= 3 {
                // Remove a leg that is neither the overall first nor last.
                let itinerary = build_itinerary(&legs).unwrap();
                let interior = Leg::new(itinerary[1].clone(), itinerary[2].clone()).unwrap();
                let broken: Vec<Leg> =
                    legs.iter().filter(|l| **l != interior).cloned().collect();
                prop_assert!(build_itinerary(&broken).is_err());
            }
        }
    }
}
