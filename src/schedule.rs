use crate::flight::Flight;
use crate::time::{MINUTES_PER_DAY, Time};
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// Column order shared by the txt format and the csv header.
const COLUMNS: [&str; 8] = [
    "origin", "dest", "number", "depart", "arrive", "economy", "business", "first",
];

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("{path}:{line}: {message}")]
    Malformed {
        path: String,
        line: usize,
        message: String,
    },
    #[error("{path}: record {index}: {message}")]
    Record {
        path: String,
        index: usize,
        message: String,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("{path}: {source}")]
    Json {
        path: String,
        source: serde_json::Error,
    },
}

/// Load a schedule file, picking the format from the extension:
/// `.csv` and `.json` are parsed as such, anything else as the
/// whitespace-separated text format.
pub fn load(path: &Path) -> Result<Vec<Flight>, ScheduleError> {
    let text = std::fs::read_to_string(path)?;
    let name = path.display().to_string();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    match extension.as_deref() {
        Some("csv") => parse_csv(&text, &name),
        Some("json") => parse_json(&text, &name),
        _ => parse_txt(&text, &name),
    }
}

/// Text format: one flight per line,
/// `ORIGIN DEST NUMBER DEPART ARRIVE ECONOMY BUSINESS FIRST`,
/// with blank lines and `#` comments skipped.
fn parse_txt(text: &str, name: &str) -> Result<Vec<Flight>, ScheduleError> {
    let mut flights = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let fields: Vec<&str> = line.split_whitespace().collect();
        let flight = build_flight(&fields).map_err(|message| ScheduleError::Malformed {
            path: name.to_string(),
            line: idx + 1,
            message,
        })?;
        flights.push(flight);
    }
    Ok(flights)
}

/// Comma-separated with a header row naming the same eight columns,
/// in any order.
fn parse_csv(text: &str, name: &str) -> Result<Vec<Flight>, ScheduleError> {
    let malformed = |line: usize, message: String| ScheduleError::Malformed {
        path: name.to_string(),
        line,
        message,
    };

    let mut lines = text.lines().enumerate();
    let (_, header) = lines
        .next()
        .ok_or_else(|| malformed(1, "missing header row".to_string()))?;
    let names: Vec<&str> = header.split(',').map(str::trim).collect();
    let mut order = Vec::with_capacity(COLUMNS.len());
    for column in COLUMNS {
        let position = names
            .iter()
            .position(|n| *n == column)
            .ok_or_else(|| malformed(1, format!("missing required column '{}'", column)))?;
        order.push(position);
    }

    let mut flights = Vec::new();
    for (idx, line) in lines {
        if line.trim().is_empty() {
            continue;
        }
        let raw: Vec<&str> = line.split(',').map(str::trim).collect();
        if raw.len() != names.len() {
            return Err(malformed(
                idx + 1,
                format!("expected {} fields, got {}", names.len(), raw.len()),
            ));
        }
        let fields: Vec<&str> = order.iter().map(|&i| raw[i]).collect();
        let flight = build_flight(&fields).map_err(|message| malformed(idx + 1, message))?;
        flights.push(flight);
    }
    Ok(flights)
}

/// JSON array of flight records with times as minute integers. Serde
/// handles the shape; range and ordering checks still apply.
fn parse_json(text: &str, name: &str) -> Result<Vec<Flight>, ScheduleError> {
    let flights: Vec<Flight> =
        serde_json::from_str(text).map_err(|source| ScheduleError::Json {
            path: name.to_string(),
            source,
        })?;
    for (index, flight) in flights.iter().enumerate() {
        check_times(flight.depart, flight.arrive).map_err(|message| ScheduleError::Record {
            path: name.to_string(),
            index: index + 1,
            message,
        })?;
    }
    Ok(flights)
}

fn build_flight(fields: &[&str]) -> Result<Flight, String> {
    if fields.len() != COLUMNS.len() {
        return Err(format!(
            "expected {} fields, got {}",
            COLUMNS.len(),
            fields.len()
        ));
    }
    let depart: Time = fields[3].parse().map_err(|e| format!("{}", e))?;
    let arrive: Time = fields[4].parse().map_err(|e| format!("{}", e))?;
    check_times(depart, arrive)?;
    Ok(Flight {
        origin: Arc::from(fields[0]),
        dest: Arc::from(fields[1]),
        number: Arc::from(fields[2]),
        depart,
        arrive,
        economy: parse_fare(fields[5])?,
        business: parse_fare(fields[6])?,
        first: parse_fare(fields[7])?,
    })
}

fn parse_fare(field: &str) -> Result<u32, String> {
    field
        .parse::<u32>()
        .map_err(|_| format!("invalid fare '{}'", field))
}

fn check_times(depart: Time, arrive: Time) -> Result<(), String> {
    if depart.0 >= MINUTES_PER_DAY || arrive.0 >= MINUTES_PER_DAY {
        return Err("times must be within a single day".to_string());
    }
    if arrive <= depart {
        return Err(format!(
            "arrival {} must be after departure {}",
            arrive, depart
        ));
    }
    Ok(())
}
