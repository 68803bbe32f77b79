pub mod errors;
pub mod extract;
pub mod selectors;

use std::time::Duration;
use reqwest::StatusCode;
use reqwest::blocking::Client;
use scraper::Html;
use crate::config::Source;
use crate::manager_gismeteo::errors::GismeteoError;
use crate::manager_gismeteo::extract::extract_metrics;
use crate::manager_gismeteo::selectors::PageSelectors;
use crate::models::forecast::{CityForecast, CityId};

/// User agent presented to the forecast site
const USER_AGENT: &str = "Chrome/124.0.0.0 Safari/537.36";

/// Struct for managing forecast pages served by the weather site
pub struct Gismeteo {
    client: Client,
    host: String,
    selectors: PageSelectors,
}

impl Gismeteo {
    /// Returns a Gismeteo struct ready for fetching and extracting city forecasts
    ///
    /// The client presents a browser User-Agent and skips certificate
    /// validation, both needed to get actual forecast pages out of the site.
    ///
    /// # Arguments
    ///
    /// * 'config' - the source section of the configuration
    pub fn new(config: &Source) -> Result<Gismeteo, GismeteoError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .danger_accept_invalid_certs(true)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Gismeteo {
            client,
            host: config.host.clone(),
            selectors: PageSelectors::new(),
        })
    }

    /// Retrieves the two week forecast page for one city and extracts its
    /// normalized metric series
    ///
    /// # Arguments
    ///
    /// * 'city' - the city to fetch the forecast for
    pub fn city_forecast(&self, city: &CityId) -> Result<CityForecast, GismeteoError> {
        let url = format!("https://{}/weather-{}/2-weeks/", self.host, city);

        let res = self.client
            .get(&url)
            .send()?;

        if res.status() != StatusCode::OK {
            return Err(GismeteoError::Http(format!("{} returned status {}", url, res.status())));
        }

        let html = res.text()?;
        let doc = Html::parse_document(&html);
        let metrics = extract_metrics(&doc, &self.selectors)?;

        Ok(CityForecast { city: city.clone(), metrics })
    }
}
