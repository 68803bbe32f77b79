use chrono::NaiveDate;
use log::warn;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use crate::dates;
use crate::models::forecast::{CityForecast, CityId, MetricSet};
use crate::series;
use crate::series::{MetricValue, SeriesError};

#[derive(Error, Debug)]
#[error("error in snapshot handling: {0}")]
pub struct SnapshotError(pub String);
impl From<&str> for SnapshotError {
    fn from(e: &str) -> Self {
        SnapshotError(e.to_string())
    }
}
impl From<std::io::Error> for SnapshotError {
    fn from(e: std::io::Error) -> Self {
        SnapshotError(format!("file error: {}", e.to_string()))
    }
}
impl From<csv::Error> for SnapshotError {
    fn from(e: csv::Error) -> Self {
        SnapshotError(format!("csv error: {}", e.to_string()))
    }
}
impl From<SeriesError> for SnapshotError {
    fn from(e: SeriesError) -> Self {
        SnapshotError(e.to_string())
    }
}
impl From<chrono::ParseError> for SnapshotError {
    fn from(e: chrono::ParseError) -> Self {
        SnapshotError(format!("malformed date: {}", e.to_string()))
    }
}

/// One snapshot row as persisted, all series encoded as bracketed sequence
/// literals, field order is the column order of the file
#[derive(Serialize, Deserialize)]
struct SnapshotRow {
    city: String,
    date: String,
    day_temp: String,
    night_temp: String,
    precipitation: String,
    wind_m_s: String,
    max_pressure: String,
    min_pressure: String,
}

/// One snapshot row decoded back into its structured form
#[derive(Debug, Clone)]
pub struct SnapshotEntry {
    pub city: CityId,
    pub dates: Vec<NaiveDate>,
    pub metrics: MetricSet,
}

/// Writes the collected forecasts to the snapshot file
///
/// One row per city in collection order, with the shared date series
/// repeated in every row so each row decodes on its own.
///
/// # Arguments
///
/// * 'path' - the snapshot file to write
/// * 'forecasts' - the collected forecasts
/// * 'date_series' - the shared date series of the run
pub fn save_snapshot(path: &str, forecasts: &[CityForecast], date_series: &[NaiveDate]) -> Result<(), SnapshotError> {
    let mut writer = csv::Writer::from_path(path)?;

    for forecast in forecasts {
        writer.serialize(SnapshotRow {
            city: forecast.city.to_string(),
            date: encode_dates(date_series),
            day_temp: encode_values(&forecast.metrics.day_temp),
            night_temp: encode_values(&forecast.metrics.night_temp),
            precipitation: encode_values(&forecast.metrics.precipitation),
            wind_m_s: encode_values(&forecast.metrics.wind_m_s),
            max_pressure: encode_values(&forecast.metrics.max_pressure),
            min_pressure: encode_values(&forecast.metrics.min_pressure),
        })?;
    }

    writer.flush()?;

    Ok(())
}

/// Reads the snapshot file and structurally decodes its rows
///
/// A row that cannot be decoded is logged and skipped, the remaining rows
/// load normally. Only failing to read the file itself is an error here.
///
/// # Arguments
///
/// * 'path' - the snapshot file to read
pub fn load_snapshot(path: &str) -> Result<Vec<SnapshotEntry>, SnapshotError> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut entries: Vec<SnapshotEntry> = Vec::new();

    for row in reader.deserialize::<SnapshotRow>() {
        match row {
            Ok(row) => match decode_row(&row) {
                Ok(entry) => entries.push(entry),
                Err(e) => warn!("skipping snapshot row for {}: {}", row.city, e),
            },
            Err(e) => warn!("skipping unreadable snapshot row: {}", e),
        }
    }

    Ok(entries)
}

/// Decodes one snapshot row, checking that its series agree in length
///
/// # Arguments
///
/// * 'row' - the row to decode
fn decode_row(row: &SnapshotRow) -> Result<SnapshotEntry, SnapshotError> {
    let entry = SnapshotEntry {
        city: CityId(row.city.clone()),
        dates: decode_dates(&row.date)?,
        metrics: MetricSet {
            day_temp: decode_values(&row.day_temp)?,
            night_temp: decode_values(&row.night_temp)?,
            precipitation: decode_values(&row.precipitation)?,
            wind_m_s: decode_values(&row.wind_m_s)?,
            max_pressure: decode_values(&row.max_pressure)?,
            min_pressure: decode_values(&row.min_pressure)?,
        },
    };

    if entry.dates.is_empty() {
        return Err(SnapshotError::from("row holds no readings"));
    }
    if !entry.metrics.is_rectangular() || entry.metrics.day_temp.len() != entry.dates.len() {
        return Err(SnapshotError::from("series lengths disagree"));
    }

    Ok(entry)
}

/// Encodes a series of readings as a bracketed sequence literal
///
/// # Arguments
///
/// * 'values' - the series to encode
fn encode_values(values: &[MetricValue]) -> String {
    let items = values.iter()
        .map(|v| v.to_string())
        .collect::<Vec<String>>();

    format!("[{}]", items.join(", "))
}

/// Encodes the date series as a bracketed sequence literal
///
/// # Arguments
///
/// * 'date_series' - the dates to encode
fn encode_dates(date_series: &[NaiveDate]) -> String {
    let items = date_series.iter()
        .map(|d| dates::format_date(*d))
        .collect::<Vec<String>>();

    format!("[{}]", items.join(", "))
}

/// Splits a bracketed sequence literal into its trimmed items
///
/// # Arguments
///
/// * 'text' - the literal to split
fn decode_items(text: &str) -> Result<Vec<String>, SnapshotError> {
    let inner = text.trim()
        .strip_prefix('[')
        .and_then(|t| t.strip_suffix(']'))
        .ok_or_else(|| SnapshotError(format!("malformed sequence literal: {}", text)))?;

    if inner.trim().is_empty() {
        return Ok(Vec::new());
    }

    Ok(inner.split(',').map(|t| t.trim().to_string()).collect())
}

/// Decodes a bracketed sequence literal of readings
///
/// Decoding goes through the same normalization as scraped readings, so a
/// reading encoded with a decimal point comes back as the same decimal.
///
/// # Arguments
///
/// * 'text' - the literal to decode
fn decode_values(text: &str) -> Result<Vec<MetricValue>, SnapshotError> {
    let mut values: Vec<MetricValue> = Vec::new();
    for item in decode_items(text)? {
        values.push(series::parse_number(&item)?);
    }

    Ok(values)
}

/// Decodes a bracketed sequence literal of dates
///
/// # Arguments
///
/// * 'text' - the literal to decode
fn decode_dates(text: &str) -> Result<Vec<NaiveDate>, SnapshotError> {
    let mut parsed: Vec<NaiveDate> = Vec::new();
    for item in decode_items(text)? {
        parsed.push(dates::parse_date(&item)?);
    }

    Ok(parsed)
}
