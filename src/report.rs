use crate::flight::Cabin;
use crate::itinerary::Itinerary;
use colored::Colorize;
use tabled::settings::{Alignment, Style};
use tabled::{Table, Tabled};

/// One line of the comparison table: a search mode and its result,
/// or `N/A` cells when the search came back empty-handed.
#[derive(Tabled)]
pub struct ComparisonRow {
    #[tabled(rename = "Mode")]
    mode: String,
    #[tabled(rename = "Cabin")]
    cabin: String,
    #[tabled(rename = "Dep")]
    dep: String,
    #[tabled(rename = "Arr")]
    arr: String,
    #[tabled(rename = "Duration")]
    duration: String,
    #[tabled(rename = "Stops")]
    stops: String,
    #[tabled(rename = "Total Price")]
    total: String,
    #[tabled(rename = "Note")]
    note: String,
}

impl ComparisonRow {
    pub fn found(mode: &str, cabin: Cabin, itinerary: &Itinerary) -> ComparisonRow {
        ComparisonRow {
            mode: mode.to_string(),
            cabin: cabin.to_string(),
            dep: itinerary.depart().to_string(),
            arr: itinerary.arrive().to_string(),
            duration: format_duration(itinerary.arrive() - itinerary.depart()),
            stops: itinerary.stops().to_string(),
            total: itinerary.total_price(cabin).to_string(),
            note: String::new(),
        }
    }

    pub fn missing(mode: &str, cabin: Option<Cabin>) -> ComparisonRow {
        let na = "N/A".to_string();
        ComparisonRow {
            mode: mode.to_string(),
            cabin: cabin.map(|c| c.to_string()).unwrap_or_else(|| na.clone()),
            dep: na.clone(),
            arr: na.clone(),
            duration: na.clone(),
            stops: na.clone(),
            total: na,
            note: "(no valid itinerary)".red().to_string(),
        }
    }
}

pub fn comparison_table(rows: &[ComparisonRow]) -> String {
    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.with(Alignment::left());
    table.to_string()
}

fn format_duration(minutes: u16) -> String {
    format!("{}h{:02}m", minutes / 60, minutes % 60)
}
