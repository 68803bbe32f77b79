use crate::models::forecast::{Metric, MetricSet};
use crate::series::MetricValue;

/// Mean readings of one city over the forecast period
#[derive(Debug, Clone, PartialEq)]
pub struct CityStats {
    pub day_temp: f64,
    pub night_temp: f64,
    pub precipitation: f64,
    pub wind_m_s: f64,
    pub max_pressure: f64,
    pub min_pressure: f64,
}

impl CityStats {
    /// Computes the six metric means of a city
    ///
    /// # Arguments
    ///
    /// * 'metrics' - the city metrics to average
    pub fn new(metrics: &MetricSet) -> CityStats {
        CityStats {
            day_temp: mean(&metrics.day_temp),
            night_temp: mean(&metrics.night_temp),
            precipitation: mean(&metrics.precipitation),
            wind_m_s: mean(&metrics.wind_m_s),
            max_pressure: mean(&metrics.max_pressure),
            min_pressure: mean(&metrics.min_pressure),
        }
    }

    /// Returns the mean of the given metric
    ///
    /// # Arguments
    ///
    /// * 'metric' - the metric to return
    pub fn mean(&self, metric: Metric) -> f64 {
        match metric {
            Metric::DayTemp => self.day_temp,
            Metric::NightTemp => self.night_temp,
            Metric::Precipitation => self.precipitation,
            Metric::Wind => self.wind_m_s,
            Metric::MaxPressure => self.max_pressure,
            Metric::MinPressure => self.min_pressure,
        }
    }
}

fn mean(values: &[MetricValue]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }

    values.iter().map(|v| v.as_f64()).sum::<f64>() / values.len() as f64
}
