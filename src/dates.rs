use chrono::{NaiveDate, TimeDelta};
use crate::series::FORECAST_DAYS;

/// Textual date format used in the snapshot and the report
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Returns the date series covered by one forecast period
///
/// The series holds one date per forecast day, consecutive and starting at
/// the given date. It is generated once per run and shared by every city.
///
/// # Arguments
///
/// * 'start' - first day of the period
pub fn forecast_dates(start: NaiveDate) -> Vec<NaiveDate> {
    (0..FORECAST_DAYS)
        .map(|d| start + TimeDelta::days(d as i64))
        .collect()
}

/// Formats a date on the day-month-year form used throughout
///
/// # Arguments
///
/// * 'date' - the date to format
pub fn format_date(date: NaiveDate) -> String {
    format!("{}", date.format(DATE_FORMAT))
}

/// Parses a date from the day-month-year form used throughout
///
/// # Arguments
///
/// * 'text' - the textual date
pub fn parse_date(text: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT)
}
