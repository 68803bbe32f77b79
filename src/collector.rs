use log::{info, warn};
use crate::manager_gismeteo::Gismeteo;
use crate::manager_gismeteo::errors::GismeteoError;
use crate::models::forecast::{CityForecast, CityId};

/// A source of per city forecasts
///
/// The production source is the Gismeteo manager, fixture backed sources
/// stand in for it when no network is wanted.
pub trait ForecastSource {
    /// Retrieves and extracts the forecast for one city
    ///
    /// # Arguments
    ///
    /// * 'city' - the city to retrieve the forecast for
    fn city_forecast(&self, city: &CityId) -> Result<CityForecast, GismeteoError>;
}

impl ForecastSource for Gismeteo {
    fn city_forecast(&self, city: &CityId) -> Result<CityForecast, GismeteoError> {
        Gismeteo::city_forecast(self, city)
    }
}

/// Collects forecasts for all configured cities
///
/// Cities are fetched one at a time in the configured order. A city whose
/// page cannot be fetched or extracted is logged and left out, the remaining
/// cities are unaffected.
///
/// # Arguments
///
/// * 'source' - the source to collect forecasts from
/// * 'cities' - the cities to collect forecasts for
pub fn collect_forecasts<S: ForecastSource>(source: &S, cities: &[CityId]) -> Vec<CityForecast> {
    let mut forecasts: Vec<CityForecast> = Vec::with_capacity(cities.len());

    for city in cities {
        match source.city_forecast(city) {
            Ok(forecast) => {
                info!("collected forecast for {}", city);
                forecasts.push(forecast);
            },
            Err(e) => {
                warn!("could not collect data for {}: {}", city, e);
            },
        }
    }

    forecasts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::forecast::MetricSet;
    use crate::series::{FORECAST_DAYS, MetricValue};

    struct FixedSource {
        failing: CityId,
    }

    impl ForecastSource for FixedSource {
        fn city_forecast(&self, city: &CityId) -> Result<CityForecast, GismeteoError> {
            if *city == self.failing {
                return Err(GismeteoError::Selector("temperature row not found on page".to_string()));
            }

            let series = vec![MetricValue::Int(1); FORECAST_DAYS];
            Ok(CityForecast {
                city: city.clone(),
                metrics: MetricSet {
                    day_temp: series.clone(),
                    night_temp: series.clone(),
                    precipitation: series.clone(),
                    wind_m_s: series.clone(),
                    max_pressure: series.clone(),
                    min_pressure: series,
                },
            })
        }
    }

    #[test]
    fn test_failing_city_is_left_out() {
        let cities = vec![
            CityId("moscow-4368".to_string()),
            CityId("sankt-peterburg-4079".to_string()),
            CityId("yalta-5002".to_string()),
        ];
        let source = FixedSource { failing: cities[1].clone() };

        let forecasts = collect_forecasts(&source, &cities);

        assert_eq!(forecasts.len(), 2);
        assert_eq!(forecasts[0].city, cities[0]);
        assert_eq!(forecasts[1].city, cities[2]);
    }

    #[test]
    fn test_collection_keeps_configured_order() {
        let cities = vec![
            CityId("yalta-5002".to_string()),
            CityId("moscow-4368".to_string()),
        ];
        let source = FixedSource { failing: CityId("none".to_string()) };

        let forecasts = collect_forecasts(&source, &cities);

        assert_eq!(forecasts.len(), 2);
        assert_eq!(forecasts[0].city, cities[0]);
        assert_eq!(forecasts[1].city, cities[1]);
    }
}
