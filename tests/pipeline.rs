//! Pipeline tests over fixture pages
//!
//! Pages are read from tests/fixtures instead of the live site, so
//! everything past the HTTP fetch runs the production code path.

use std::fs;
use std::path::{Path, PathBuf};
use chrono::NaiveDate;
use scraper::Html;
use meteoreport::collector::{collect_forecasts, ForecastSource};
use meteoreport::dataset;
use meteoreport::dates;
use meteoreport::manager_gismeteo::errors::GismeteoError;
use meteoreport::manager_gismeteo::extract;
use meteoreport::manager_gismeteo::selectors::PageSelectors;
use meteoreport::models::forecast::{CityForecast, CityId};
use meteoreport::series::{FORECAST_DAYS, MetricValue};
use meteoreport::snapshot;

struct FixtureSource {
    dir: PathBuf,
}

impl FixtureSource {
    fn new() -> FixtureSource {
        FixtureSource {
            dir: Path::new(env!("CARGO_MANIFEST_DIR")).join("tests").join("fixtures"),
        }
    }
}

impl ForecastSource for FixtureSource {
    fn city_forecast(&self, city: &CityId) -> Result<CityForecast, GismeteoError> {
        let path = self.dir.join(format!("{}.html", city));
        let page = fs::read_to_string(&path)
            .map_err(|e| GismeteoError::Http(format!("{}: {}", path.display(), e)))?;
        let doc = Html::parse_document(&page);
        let metrics = extract::extract_metrics(&doc, &PageSelectors::new())?;

        Ok(CityForecast { city: city.clone(), metrics })
    }
}

fn configured_cities() -> Vec<CityId> {
    vec![
        CityId("moscow-4368".to_string()),
        CityId("sankt-peterburg-4079".to_string()),
        CityId("yalta-5002".to_string()),
    ]
}

#[test]
fn test_full_page_extracts_all_six_series() {
    let source = FixtureSource::new();

    let forecast = source.city_forecast(&CityId("moscow-4368".to_string())).unwrap();

    let m = &forecast.metrics;
    assert!(m.is_rectangular());
    assert_eq!(m.day_temp.len(), FORECAST_DAYS);
    assert_eq!(m.day_temp[0], MetricValue::Int(20));
    assert_eq!(m.night_temp[0], MetricValue::Int(12));
    assert_eq!(m.night_temp[13], MetricValue::Int(-1));
    assert_eq!(m.precipitation[1], MetricValue::Float(0.3));
    assert_eq!(m.precipitation[5], MetricValue::Float(5.8));
    assert_eq!(m.wind_m_s[5], MetricValue::Int(12));
    assert_eq!(m.max_pressure[6], MetricValue::Int(751));
    assert_eq!(m.min_pressure[13], MetricValue::Int(737));
}

#[test]
fn test_short_page_is_padded_to_full_length() {
    let source = FixtureSource::new();

    let forecast = source.city_forecast(&CityId("yalta-5002".to_string())).unwrap();

    // ten days of readings on the page, the tail repeats the last of them
    let m = &forecast.metrics;
    assert!(m.is_rectangular());
    assert_eq!(m.day_temp.len(), FORECAST_DAYS);
    assert_eq!(m.day_temp[9], MetricValue::Int(26));
    assert_eq!(m.day_temp[13], MetricValue::Int(26));
    assert_eq!(m.night_temp[13], MetricValue::Int(19));
    assert_eq!(m.precipitation[7], MetricValue::Float(1.5));
    assert_eq!(m.precipitation[13], MetricValue::Int(0));
    assert_eq!(m.wind_m_s[13], MetricValue::Int(12));
    assert_eq!(m.max_pressure[13], MetricValue::Int(769));
    assert_eq!(m.min_pressure[13], MetricValue::Int(764));
}

#[test]
fn test_page_without_wind_row_is_a_layout_error() {
    let source = FixtureSource::new();

    let result = source.city_forecast(&CityId("sankt-peterburg-4079".to_string()));

    assert!(matches!(result, Err(GismeteoError::Selector(_))));
}

#[test]
fn test_failing_city_leaves_the_others_untouched() {
    let source = FixtureSource::new();

    let forecasts = collect_forecasts(&source, &configured_cities());

    assert_eq!(forecasts.len(), 2);
    assert_eq!(forecasts[0].city, CityId("moscow-4368".to_string()));
    assert_eq!(forecasts[1].city, CityId("yalta-5002".to_string()));
}

#[test]
fn test_snapshot_to_dataset_keeps_scraped_values() {
    let source = FixtureSource::new();
    let forecasts = collect_forecasts(&source, &configured_cities());

    let start = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
    let date_series = dates::forecast_dates(start);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("weather_data.csv");
    let path = path.to_str().unwrap();

    snapshot::save_snapshot(path, &forecasts, &date_series).unwrap();
    let entries = snapshot::load_snapshot(path).unwrap();
    let dataset = dataset::build_dataset(entries).unwrap();

    assert_eq!(dataset.dates, date_series);
    let names: Vec<&str> = dataset.cities.keys().map(|n| n.as_str()).collect();
    assert_eq!(names, vec!["moscow", "yalta"]);

    let moscow = &dataset.cities["moscow"];
    assert_eq!(moscow.dates[0], start);
    assert_eq!(moscow.metrics.day_temp[0], MetricValue::Int(20));
    assert_eq!(moscow.metrics.precipitation[1], MetricValue::Float(0.3));
    assert_eq!(moscow.metrics.min_pressure[13], MetricValue::Int(737));

    let yalta = &dataset.cities["yalta"];
    assert_eq!(yalta.dates, date_series);
    assert_eq!(yalta.metrics.day_temp[13], MetricValue::Int(26));
    assert_eq!(yalta.metrics.wind_m_s[13], MetricValue::Int(12));
}
