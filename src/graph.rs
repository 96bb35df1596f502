use crate::flight::{AirportCode, Flight};
use std::collections::{HashMap, HashSet};

/// Adjacency structure over a flight collection: airport code to the
/// flights departing it, in input order. Built once, read-only during
/// search. Airports that only appear as destinations are tracked so
/// callers can validate them, even though they have no outgoing list.
pub struct RouteGraph {
    departures: HashMap<AirportCode, Vec<Flight>>,
    airports: HashSet<AirportCode>,
}

impl RouteGraph {
    pub fn new(flights: Vec<Flight>) -> RouteGraph {
        let mut departures: HashMap<AirportCode, Vec<Flight>> = HashMap::new();
        let mut airports = HashSet::new();
        for flight in flights {
            airports.insert(flight.origin.clone());
            airports.insert(flight.dest.clone());
            departures.entry(flight.origin.clone()).or_default().push(flight);
        }
        RouteGraph { departures, airports }
    }

    /// Flights departing `airport`, preserving schedule order. Empty
    /// for airports with no outgoing flights.
    pub fn departures(&self, airport: &str) -> &[Flight] {
        self.departures
            .get(airport)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether `airport` appears in the schedule as either endpoint.
    pub fn contains(&self, airport: &str) -> bool {
        self.airports.contains(airport)
    }
}
