use std::fmt;
use std::fmt::Formatter;
use thiserror::Error;

/// Number of days covered by one forecast page
pub const FORECAST_DAYS: usize = 14;

#[derive(Error, Debug)]
#[error("error while normalizing series data: {0}")]
pub struct SeriesError(pub String);
impl From<&str> for SeriesError {
    fn from(e: &str) -> Self {
        SeriesError(e.to_string())
    }
}

/// A single normalized reading, either a whole number or a decimal number
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Int(i64),
    Float(f64),
}

impl MetricValue {
    /// Returns the reading as a float regardless of kind
    pub fn as_f64(&self) -> f64 {
        match self {
            MetricValue::Int(v) => *v as f64,
            MetricValue::Float(v) => *v,
        }
    }
}

/// Implementation of the Display Trait for pretty print
///
/// Decimal readings always carry at least one fractional digit, which keeps
/// their textual form apart from whole number readings
impl fmt::Display for MetricValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            MetricValue::Int(v) => write!(f, "{}", v),
            MetricValue::Float(v) => {
                if v.fract() == 0.0 {
                    write!(f, "{:.1}", v)
                } else {
                    write!(f, "{}", v)
                }
            },
        }
    }
}

/// Normalizes one scraped reading into a numeric value
///
/// Readings holding a decimal separator become decimal numbers, where a
/// decimal comma from the source locale is replaced by a period before
/// parsing. All other readings become whole numbers.
///
/// # Arguments
///
/// * 'text' - the raw reading
pub fn parse_number(text: &str) -> Result<MetricValue, SeriesError> {
    let cleaned = text.trim().replace(',', ".");

    if cleaned.contains('.') {
        let value = cleaned.parse::<f64>()
            .map_err(|_| SeriesError(format!("malformed decimal number: {}", text)))?;

        Ok(MetricValue::Float(value))
    } else {
        let value = cleaned.parse::<i64>()
            .map_err(|_| SeriesError(format!("malformed whole number: {}", text)))?;

        Ok(MetricValue::Int(value))
    }
}

/// Normalizes one temperature reading into a signed whole number
///
/// The page renders positive temperatures with an explicit plus sign which is
/// stripped before parsing. Bare and negative readings parse unchanged.
///
/// # Arguments
///
/// * 'text' - the raw temperature reading
pub fn parse_temperature(text: &str) -> Result<i64, SeriesError> {
    let cleaned = text.trim().trim_start_matches('+');

    cleaned.parse::<i64>()
        .map_err(|_| SeriesError(format!("malformed temperature: {}", text)))
}

/// Normalizes one pressure reading into a whole number of mmHg
///
/// Only the first three characters of the raw text are significant, the rest
/// is the unit caption rendered into the same node.
///
/// # Arguments
///
/// * 'text' - the raw pressure reading
pub fn parse_pressure(text: &str) -> Result<i64, SeriesError> {
    let cleaned = text.trim().chars().take(3).collect::<String>();

    cleaned.trim().parse::<i64>()
        .map_err(|_| SeriesError(format!("malformed pressure: {}", text)))
}

/// Pads a series to the wanted length by repeating its last value
///
/// The page draws fewer cells than days whenever a row ends in a run of equal
/// readings, and the omitted tail is always a repetition of the last drawn
/// one. Series already at or above the wanted length are returned unchanged.
///
/// # Arguments
///
/// * 'series' - the series to pad
/// * 'length' - the wanted length
pub fn extend_to_length<T: Clone>(mut series: Vec<T>, length: usize) -> Result<Vec<T>, SeriesError> {
    if series.is_empty() {
        return Err(SeriesError::from("nothing to extend, series is empty"));
    }

    let last = series[series.len() - 1].clone();
    while series.len() < length {
        series.push(last.clone());
    }

    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_number_comma_decimal() {
        assert_eq!(parse_number("0,3").unwrap(), MetricValue::Float(0.3));
        assert_eq!(parse_number("12,7").unwrap(), MetricValue::Float(12.7));
    }

    #[test]
    fn test_parse_number_period_decimal() {
        assert_eq!(parse_number("5.0").unwrap(), MetricValue::Float(5.0));
    }

    #[test]
    fn test_parse_number_whole() {
        assert_eq!(parse_number("7").unwrap(), MetricValue::Int(7));
        assert_eq!(parse_number("-3").unwrap(), MetricValue::Int(-3));
        assert_eq!(parse_number(" 0 ").unwrap(), MetricValue::Int(0));
    }

    #[test]
    fn test_parse_number_malformed() {
        assert!(parse_number("n/a").is_err());
        assert!(parse_number("").is_err());
    }

    #[test]
    fn test_parse_temperature_strips_plus() {
        assert_eq!(parse_temperature("+5").unwrap(), 5);
        assert_eq!(parse_temperature("0").unwrap(), 0);
        assert_eq!(parse_temperature("-12").unwrap(), -12);
    }

    #[test]
    fn test_parse_pressure_first_three_chars() {
        assert_eq!(parse_pressure("745 мм").unwrap(), 745);
        assert_eq!(parse_pressure("746").unwrap(), 746);
        assert_eq!(parse_pressure("99 м").unwrap(), 99);
    }

    #[test]
    fn test_extend_to_length_pads_with_last() {
        let padded = extend_to_length(vec![1, 2, 3], 6).unwrap();
        assert_eq!(padded, vec![1, 2, 3, 3, 3, 3]);
    }

    #[test]
    fn test_extend_to_length_keeps_full_series() {
        let series = vec![1, 2, 3];
        assert_eq!(extend_to_length(series.clone(), 3).unwrap(), series);
    }

    #[test]
    fn test_extend_to_length_keeps_long_series() {
        let series = vec![1, 2, 3, 4];
        assert_eq!(extend_to_length(series.clone(), 3).unwrap(), series);
    }

    #[test]
    fn test_extend_to_length_empty_is_error() {
        assert!(extend_to_length(Vec::<i64>::new(), 14).is_err());
    }

    #[test]
    fn test_display_round_trip_forms() {
        assert_eq!(MetricValue::Int(-5).to_string(), "-5");
        assert_eq!(MetricValue::Float(0.3).to_string(), "0.3");
        assert_eq!(MetricValue::Float(5.0).to_string(), "5.0");
    }
}
