use crate::flight::Cabin;
use crate::graph::RouteGraph;
use crate::report::ComparisonRow;
use crate::search::{MIN_LAYOVER, Planner};
use crate::time::Time;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::error::Error;
use std::path::{Path, PathBuf};

mod flight;
mod graph;
mod itinerary;
mod report;
mod schedule;
mod search;
mod time;

#[derive(Parser)]
#[command(name = "flywise", about = "Flight route & fare comparator")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare itineraries for a route: earliest arrival plus cheapest per cabin
    Compare {
        /// Path to the flight schedule file (.txt, .csv or .json)
        flight_file: PathBuf,
        /// Origin airport code (e.g. ICN)
        origin: String,
        /// Destination airport code (e.g. SFO)
        dest: String,
        /// Earliest allowed departure time (HH:MM, 24-hour)
        departure_time: String,
        /// Minimum connection time in minutes
        #[arg(long, default_value_t = MIN_LAYOVER)]
        layover: u16,
    },
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    match args.command {
        Command::Compare {
            flight_file,
            origin,
            dest,
            departure_time,
            layover,
        } => run_compare(&flight_file, &origin, &dest, &departure_time, layover),
    }
}

fn run_compare(
    flight_file: &Path,
    origin: &str,
    dest: &str,
    departure_time: &str,
    layover: u16,
) -> Result<(), Box<dyn Error>> {
    let not_before: Time = departure_time.parse()?;
    let flights = schedule::load(flight_file)?;
    if flights.is_empty() {
        return Err(format!("no flights found in {}", flight_file.display()).into());
    }

    let graph = RouteGraph::new(flights);
    // An unknown code is a caller mistake; an airport with no usable
    // flights still gets an honest "no valid itinerary" row below.
    for code in [origin, dest] {
        if !graph.contains(code) {
            return Err(format!("unknown airport '{}'", code).into());
        }
    }

    let planner = Planner::new(&graph, layover);

    let mut rows = Vec::with_capacity(4);
    rows.push(match planner.earliest(origin, dest, not_before) {
        Some(itinerary) => ComparisonRow::found("Earliest arrival", Cabin::Economy, &itinerary),
        None => ComparisonRow::missing("Earliest arrival", None),
    });
    for cabin in [Cabin::Economy, Cabin::Business, Cabin::First] {
        let mode = format!("Cheapest ({})", cabin);
        rows.push(match planner.cheapest(origin, dest, not_before, cabin) {
            Some(itinerary) => ComparisonRow::found(&mode, cabin, &itinerary),
            None => ComparisonRow::missing(&mode, Some(cabin)),
        });
    }

    println!(
        "{}",
        format!(
            "Comparison for {} -> {} (earliest departure {}, layover >= {} min)",
            origin, dest, not_before, layover
        )
        .bold()
    );
    println!("{}", report::comparison_table(&rows));
    Ok(())
}
