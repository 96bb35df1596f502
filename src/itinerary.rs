use crate::flight::{Cabin, Flight};
use crate::time::Time;

/// A journey of one or more flights where each leg's destination is
/// the next leg's origin. "No itinerary" is `Option::None`, never an
/// itinerary with zero legs.
#[derive(Clone, Debug, PartialEq)]
pub struct Itinerary {
    legs: Vec<Flight>,
}

impl Itinerary {
    pub fn new(legs: Vec<Flight>) -> Option<Itinerary> {
        if legs.is_empty() {
            None
        } else {
            Some(Itinerary { legs })
        }
    }

    pub fn legs(&self) -> &[Flight] {
        &self.legs
    }

    // The constructor guarantees at least one leg, so indexing the
    // endpoints is safe.

    pub fn origin(&self) -> &str {
        &self.legs[0].origin
    }

    pub fn dest(&self) -> &str {
        &self.legs[self.legs.len() - 1].dest
    }

    pub fn depart(&self) -> Time {
        self.legs[0].depart
    }

    pub fn arrive(&self) -> Time {
        self.legs[self.legs.len() - 1].arrive
    }

    pub fn stops(&self) -> usize {
        self.legs.len() - 1
    }

    /// Total fare with every leg booked in the same cabin. Per-leg
    /// prices are summed independently; fare-class availability
    /// across legs is not modelled.
    pub fn total_price(&self, cabin: Cabin) -> u32 {
        self.legs.iter().map(|leg| leg.price_for(cabin)).sum()
    }
}
