use crate::time::Time;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

pub type AirportCode = Arc<str>;

/// Booking cabin. Closed set: a fare lookup cannot be asked for a
/// cabin that does not exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cabin {
    Economy,
    Business,
    First,
}

impl fmt::Display for Cabin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Cabin::Economy => "economy",
            Cabin::Business => "business",
            Cabin::First => "first",
        };
        write!(f, "{}", name)
    }
}

/// One scheduled flight, departing and arriving on the same day.
///
/// The loader guarantees `arrive > depart` and that both times fit in
/// a single day before a `Flight` reaches the search engine.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Flight {
    pub origin: AirportCode,
    pub dest: AirportCode,
    pub number: Arc<str>,
    pub depart: Time,
    pub arrive: Time,
    pub economy: u32,
    pub business: u32,
    pub first: u32,
}

impl Flight {
    pub fn price_for(&self, cabin: Cabin) -> u32 {
        match cabin {
            Cabin::Economy => self.economy,
            Cabin::Business => self.business,
            Cabin::First => self.first,
        }
    }
}
