use scraper::Html;
use crate::manager_gismeteo::errors::GismeteoError;
use crate::manager_gismeteo::selectors::PageSelectors;
use crate::models::forecast::MetricSet;
use crate::series;
use crate::series::{FORECAST_DAYS, MetricValue};

/// Extracts the six normalized series from one parsed forecast page
///
/// # Arguments
///
/// * 'doc' - the parsed forecast page
/// * 'selectors' - the page selectors to extract with
pub fn extract_metrics(doc: &Html, selectors: &PageSelectors) -> Result<MetricSet, GismeteoError> {
    let (day_temp, night_temp) = temperature_series(selectors.temperatures(doc)?)?;
    let precipitation = number_series(selectors.precipitation(doc)?)?;
    let wind_m_s = number_series(selectors.wind(doc)?)?;

    let (max_raw, min_raw) = selectors.pressure(doc)?;
    let max_pressure = pressure_series(max_raw)?;
    let min_pressure = pressure_series(min_raw)?;

    Ok(MetricSet { day_temp, night_temp, precipitation, wind_m_s, max_pressure, min_pressure })
}

/// Splits the interleaved temperature readings into a day and a night series
///
/// The page renders both readings of a day next to each other, so even
/// positions hold day and odd positions night temperatures. The split comes
/// before any padding, an odd reading count leaves the night series one
/// short and the padding restores it.
///
/// # Arguments
///
/// * 'raw' - the interleaved raw readings
fn temperature_series(raw: Vec<String>) -> Result<(Vec<MetricValue>, Vec<MetricValue>), GismeteoError> {
    let mut days: Vec<MetricValue> = Vec::new();
    let mut nights: Vec<MetricValue> = Vec::new();

    for (i, text) in raw.iter().enumerate() {
        let value = MetricValue::Int(series::parse_temperature(text)?);
        if i % 2 == 0 {
            days.push(value);
        } else {
            nights.push(value);
        }
    }

    let days = series::extend_to_length(days, FORECAST_DAYS)?;
    let nights = series::extend_to_length(nights, FORECAST_DAYS)?;

    Ok((days, nights))
}

/// Normalizes a flat one-per-day list of readings into a full length series
///
/// # Arguments
///
/// * 'raw' - the raw readings
fn number_series(raw: Vec<String>) -> Result<Vec<MetricValue>, GismeteoError> {
    let mut values: Vec<MetricValue> = Vec::with_capacity(raw.len());
    for text in &raw {
        values.push(series::parse_number(text)?);
    }

    Ok(series::extend_to_length(values, FORECAST_DAYS)?)
}

/// Normalizes one of the two pressure lists into a full length series
///
/// # Arguments
///
/// * 'raw' - the raw readings
fn pressure_series(raw: Vec<String>) -> Result<Vec<MetricValue>, GismeteoError> {
    let mut values: Vec<MetricValue> = Vec::with_capacity(raw.len());
    for text in &raw {
        values.push(MetricValue::Int(series::parse_pressure(text)?));
    }

    Ok(series::extend_to_length(values, FORECAST_DAYS)?)
}
