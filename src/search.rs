use crate::flight::{AirportCode, Cabin, Flight};
use crate::graph::RouteGraph;
use crate::itinerary::Itinerary;
use crate::time::Time;
use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashMap};
use std::sync::Arc;

/// Default minimum ground time between an arriving leg and the next
/// departing leg, in minutes.
pub const MIN_LAYOVER: u16 = 60;

/// Itinerary search over a route graph with a fixed minimum layover.
///
/// Both searches are pure: each call owns its frontier and visited
/// state, so one planner may serve any number of calls against the
/// same read-only graph.
pub struct Planner<'a> {
    graph: &'a RouteGraph,
    min_layover: u16,
}

/// Frontier entry of the cost search. Ordered by cumulative fare,
/// then arrival time, then discovery order, so ties resolve
/// deterministically. Carries its full leg path: several entries for
/// the same airport can be live at different arrival times, which a
/// single predecessor map per airport would conflate.
struct CostLabel {
    fare: u32,
    arrived: Time,
    seq: u64,
    airport: AirportCode,
    legs: Vec<Flight>,
}

impl CostLabel {
    fn key(&self) -> (u32, Time, u64) {
        (self.fare, self.arrived, self.seq)
    }
}

impl PartialEq for CostLabel {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for CostLabel {}

impl PartialOrd for CostLabel {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CostLabel {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<'a> Planner<'a> {
    pub fn new(graph: &'a RouteGraph, min_layover: u16) -> Planner<'a> {
        Planner { graph, min_layover }
    }

    /// Earliest-arrival itinerary from `start` to `dest` departing at
    /// or after `not_before`, or `None` if no feasible route exists.
    ///
    /// Label-setting search keyed by arrival time, settled per
    /// airport: along any expansion arrival times only increase, so
    /// the first pop of an airport fixes its earliest arrival for
    /// good. Path reconstruction walks a predecessor map, which is
    /// sound here because each airport keeps exactly one best flight.
    /// O((V + E) log V).
    pub fn earliest(&self, start: &str, dest: &str, not_before: Time) -> Option<Itinerary> {
        let mut settled: HashMap<AirportCode, Time> = HashMap::new();
        let mut previous: HashMap<AirportCode, Flight> = HashMap::new();
        let mut frontier: BinaryHeap<Reverse<(Time, u64, AirportCode)>> = BinaryHeap::new();
        let mut seq = 0u64;
        frontier.push(Reverse((not_before, seq, Arc::from(start))));

        while let Some(Reverse((reached, _, airport))) = frontier.pop() {
            if settled.contains_key(&airport) {
                continue;
            }
            settled.insert(airport.clone(), reached);

            if &*airport == dest {
                let mut legs = Vec::new();
                let mut cursor = dest;
                while let Some(flight) = previous.get(cursor) {
                    legs.push(flight.clone());
                    cursor = &flight.origin;
                }
                legs.reverse();
                return Itinerary::new(legs);
            }

            for flight in self.graph.departures(&airport) {
                // First leg is floored by the request, later legs by
                // the settled arrival plus the layover. The start
                // airport settles first, so it is only expanded once.
                let floor = if &*airport == start {
                    not_before
                } else {
                    reached + self.min_layover
                };
                if flight.depart < floor || settled.contains_key(&flight.dest) {
                    continue;
                }
                let improves = previous
                    .get(&flight.dest)
                    .map_or(true, |best| flight.arrive < best.arrive);
                if improves {
                    previous.insert(flight.dest.clone(), flight.clone());
                    seq += 1;
                    frontier.push(Reverse((flight.arrive, seq, flight.dest.clone())));
                }
            }
        }

        None
    }

    /// Cheapest itinerary from `start` to `dest` in `cabin` under the
    /// same timing rules, or `None` if no feasible route exists.
    ///
    /// Label-setting search keyed by cumulative fare over the state
    /// space (airport, arrival time). Collapsing states per airport
    /// would be wrong: a cheaper arrival at a later time can miss
    /// connections that an earlier, dearer arrival still makes. Stale
    /// frontier entries are discarded when popped rather than removed
    /// eagerly, and entries costing more than the best complete
    /// itinerary found so far are pruned. State count is bounded by
    /// the reachable (airport, time) pairs, at most one per flight.
    pub fn cheapest(
        &self,
        start: &str,
        dest: &str,
        not_before: Time,
        cabin: Cabin,
    ) -> Option<Itinerary> {
        let mut best_fare: HashMap<(AirportCode, Time), u32> = HashMap::new();
        let mut frontier: BinaryHeap<Reverse<CostLabel>> = BinaryHeap::new();
        let mut best_trip: Option<(u32, Vec<Flight>)> = None;
        let mut seq = 0u64;

        frontier.push(Reverse(CostLabel {
            fare: 0,
            arrived: not_before,
            seq,
            airport: Arc::from(start),
            legs: Vec::new(),
        }));

        while let Some(Reverse(label)) = frontier.pop() {
            if let Some((fare, _)) = &best_trip {
                if label.fare > *fare {
                    continue;
                }
            }

            let state = (label.airport.clone(), label.arrived);
            if best_fare
                .get(&state)
                .map_or(false, |&known| known < label.fare)
            {
                continue;
            }
            best_fare.insert(state, label.fare);

            if &*label.airport == dest {
                let improves = best_trip
                    .as_ref()
                    .map_or(true, |(fare, _)| label.fare < *fare);
                if improves {
                    best_trip = Some((label.fare, label.legs));
                }
                continue;
            }

            for flight in self.graph.departures(&label.airport) {
                // Floor on the first leg only; a path that passes
                // back through the start airport still owes the
                // layover there.
                let floor = if label.legs.is_empty() {
                    not_before
                } else {
                    label.arrived + self.min_layover
                };
                if flight.depart < floor {
                    continue;
                }
                let fare = label.fare + flight.price_for(cabin);
                let next = (flight.dest.clone(), flight.arrive);
                if best_fare.get(&next).map_or(true, |&known| fare < known) {
                    let mut legs = label.legs.clone();
                    legs.push(flight.clone());
                    seq += 1;
                    frontier.push(Reverse(CostLabel {
                        fare,
                        arrived: flight.arrive,
                        seq,
                        airport: flight.dest.clone(),
                        legs,
                    }));
                }
            }
        }

        best_trip.and_then(|(_, legs)| Itinerary::new(legs))
    }
}

#[cfg(test)]
mod tests;
