use std::fmt;
use std::fmt::Formatter;
use serde::Deserialize;
use crate::series::MetricValue;

/// City identifier on the composite form used by the forecast site,
/// a name slug followed by a numeric site id, e.g. "moscow-4368"
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(transparent)]
pub struct CityId(pub String);

impl CityId {
    /// Returns the city name with the trailing numeric site id stripped,
    /// e.g. "sankt-peterburg-4079" becomes "sankt-peterburg"
    pub fn canonical_name(&self) -> String {
        match self.0.rsplit_once('-') {
            Some((name, id)) if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) => {
                name.to_string()
            },
            _ => self.0.clone(),
        }
    }
}

/// Implementation of the Display Trait for pretty print
impl fmt::Display for CityId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The six metrics collected per city
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Metric {
    DayTemp,
    NightTemp,
    Precipitation,
    Wind,
    MaxPressure,
    MinPressure,
}

impl Metric {
    /// All metrics in snapshot column order
    pub const ALL: [Metric; 6] = [
        Metric::DayTemp,
        Metric::NightTemp,
        Metric::Precipitation,
        Metric::Wind,
        Metric::MaxPressure,
        Metric::MinPressure,
    ];

    /// Snapshot column name of the metric
    pub fn column(&self) -> &'static str {
        match self {
            Metric::DayTemp => "day_temp",
            Metric::NightTemp => "night_temp",
            Metric::Precipitation => "precipitation",
            Metric::Wind => "wind_m_s",
            Metric::MaxPressure => "max_pressure",
            Metric::MinPressure => "min_pressure",
        }
    }

    /// Short metric name, used as chart panel title
    pub fn title(&self) -> &'static str {
        match self {
            Metric::DayTemp => "Day temperature",
            Metric::NightTemp => "Night temperature",
            Metric::Precipitation => "Precipitation",
            Metric::Wind => "Wind speed",
            Metric::MaxPressure => "Max pressure",
            Metric::MinPressure => "Min pressure",
        }
    }

    /// Metric name with unit, used in report headers and chart axes
    pub fn label(&self) -> &'static str {
        match self {
            Metric::DayTemp => "Day temperature (°C)",
            Metric::NightTemp => "Night temperature (°C)",
            Metric::Precipitation => "Precipitation (mm)",
            Metric::Wind => "Wind speed (m/s)",
            Metric::MaxPressure => "Max pressure (mmHg)",
            Metric::MinPressure => "Min pressure (mmHg)",
        }
    }
}

/// The normalized series of one city, one per metric
#[derive(Debug, Clone, PartialEq)]
pub struct MetricSet {
    pub day_temp: Vec<MetricValue>,
    pub night_temp: Vec<MetricValue>,
    pub precipitation: Vec<MetricValue>,
    pub wind_m_s: Vec<MetricValue>,
    pub max_pressure: Vec<MetricValue>,
    pub min_pressure: Vec<MetricValue>,
}

impl MetricSet {
    /// Returns the series of the given metric
    ///
    /// # Arguments
    ///
    /// * 'metric' - the metric to return the series for
    pub fn series(&self, metric: Metric) -> &[MetricValue] {
        match metric {
            Metric::DayTemp => &self.day_temp,
            Metric::NightTemp => &self.night_temp,
            Metric::Precipitation => &self.precipitation,
            Metric::Wind => &self.wind_m_s,
            Metric::MaxPressure => &self.max_pressure,
            Metric::MinPressure => &self.min_pressure,
        }
    }

    /// Returns true when every series holds the same number of readings
    pub fn is_rectangular(&self) -> bool {
        let len = self.day_temp.len();
        Metric::ALL.iter().all(|m| self.series(*m).len() == len)
    }
}

/// One city's collected forecast. The date series is not part of it, dates
/// are generated once per run and shared by all cities.
#[derive(Debug, Clone)]
pub struct CityForecast {
    pub city: CityId,
    pub metrics: MetricSet,
}
