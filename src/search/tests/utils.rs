use crate::flight::Flight;
use crate::graph::RouteGraph;
use crate::time::Time;
use std::sync::Arc;

#[allow(clippy::too_many_arguments)]
pub fn flight(
    origin: &str,
    dest: &str,
    number: &str,
    depart: u16,
    arrive: u16,
    economy: u32,
    business: u32,
    first: u32,
) -> Flight {
    Flight {
        origin: Arc::from(origin),
        dest: Arc::from(dest),
        number: Arc::from(number),
        depart: Time(depart),
        arrive: Time(arrive),
        economy,
        business,
        first,
    }
}

/// Leg with fares derived from the economy price, for tests that only
/// care about one cabin.
pub fn leg(origin: &str, dest: &str, depart: u16, arrive: u16, economy: u32) -> Flight {
    flight(origin, dest, "XX000", depart, arrive, economy, economy * 3, economy * 5)
}

pub fn graph(flights: Vec<Flight>) -> RouteGraph {
    RouteGraph::new(flights)
}

/// Every feasible itinerary from `start` to `dest`, found by
/// exhaustive depth-first expansion. Reference oracle for the
/// label-setting searches: each leg strictly advances the clock, so
/// the recursion always terminates.
pub fn every_itinerary(
    graph: &RouteGraph,
    start: &str,
    dest: &str,
    not_before: Time,
    min_layover: u16,
) -> Vec<Vec<Flight>> {
    let mut found = Vec::new();
    let mut path = Vec::new();
    explore(graph, start, dest, not_before, min_layover, &mut path, &mut found);
    found
}

fn explore(
    graph: &RouteGraph,
    airport: &str,
    dest: &str,
    floor: Time,
    min_layover: u16,
    path: &mut Vec<Flight>,
    found: &mut Vec<Vec<Flight>>,
) {
    if airport == dest && !path.is_empty() {
        found.push(path.clone());
        return;
    }
    for flight in graph.departures(airport) {
        if flight.depart < floor {
            continue;
        }
        path.push(flight.clone());
        explore(
            graph,
            &flight.dest,
            dest,
            flight.arrive + min_layover,
            min_layover,
            path,
            found,
        );
        path.pop();
    }
}
