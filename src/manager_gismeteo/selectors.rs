use scraper::{ElementRef, Html, Selector};
use crate::manager_gismeteo::errors::GismeteoError;

/// The CSS contract with the forecast page, every selector in one place
///
/// The page renders each metric as a widget row holding one node per day
/// (temperatures interleave day and night readings in a single row). A row
/// that is missing means the page layout changed or an error page was
/// served, which is reported as a Selector error naming the row.
pub struct PageSelectors {
    temperature_chart: Selector,
    temperature_unit: Selector,
    precipitation_row: Selector,
    precipitation_item: Selector,
    wind_row: Selector,
    wind_unit: Selector,
    pressure_row: Selector,
    pressure_chart: Selector,
    pressure_max: Selector,
    pressure_min: Selector,
}

impl PageSelectors {
    pub fn new() -> PageSelectors {
        PageSelectors {
            temperature_chart: parse_selector("div.chart.ten-days"),
            temperature_unit: parse_selector("span.unit.unit_temperature_c"),
            precipitation_row: parse_selector("div.widget-row.widget-row-precipitation-bars.row-with-caption"),
            precipitation_item: parse_selector("div.row-item"),
            wind_row: parse_selector("div.widget-row.widget-row-wind-gust.row-with-caption"),
            wind_unit: parse_selector("span.wind-unit.unit.unit_wind_m_s"),
            pressure_row: parse_selector("div[data-row=\"pressure\"]"),
            pressure_chart: parse_selector("div.chart.ten-days"),
            pressure_max: parse_selector("div.maxt"),
            pressure_min: parse_selector("div.mint"),
        }
    }

    /// Collects the raw temperature readings, day and night interleaved in
    /// the order the page renders them
    ///
    /// # Arguments
    ///
    /// * 'doc' - the parsed forecast page
    pub fn temperatures(&self, doc: &Html) -> Result<Vec<String>, GismeteoError> {
        let chart = doc.select(&self.temperature_chart).next()
            .ok_or_else(|| row_missing("temperature"))?;

        Ok(texts(chart, &self.temperature_unit))
    }

    /// Collects the raw precipitation readings, one per day
    ///
    /// # Arguments
    ///
    /// * 'doc' - the parsed forecast page
    pub fn precipitation(&self, doc: &Html) -> Result<Vec<String>, GismeteoError> {
        let row = doc.select(&self.precipitation_row).next()
            .ok_or_else(|| row_missing("precipitation"))?;

        Ok(texts(row, &self.precipitation_item))
    }

    /// Collects the raw wind speed readings, one per day
    ///
    /// # Arguments
    ///
    /// * 'doc' - the parsed forecast page
    pub fn wind(&self, doc: &Html) -> Result<Vec<String>, GismeteoError> {
        let row = doc.select(&self.wind_row).next()
            .ok_or_else(|| row_missing("wind"))?;

        Ok(texts(row, &self.wind_unit))
    }

    /// Collects the raw pressure readings as two parallel lists, the daily
    /// maximum and the daily minimum
    ///
    /// # Arguments
    ///
    /// * 'doc' - the parsed forecast page
    pub fn pressure(&self, doc: &Html) -> Result<(Vec<String>, Vec<String>), GismeteoError> {
        let row = doc.select(&self.pressure_row).next()
            .ok_or_else(|| row_missing("pressure"))?;
        let chart = row.select(&self.pressure_chart).next()
            .ok_or_else(|| row_missing("pressure chart"))?;

        Ok((texts(chart, &self.pressure_max), texts(chart, &self.pressure_min)))
    }
}

/// Parses a selector known at compile time
///
/// # Arguments
///
/// * 'selector' - the CSS selector text
fn parse_selector(selector: &str) -> Selector {
    Selector::parse(selector).expect("page selector must parse")
}

/// Returns the error for an expected page row that is absent
///
/// # Arguments
///
/// * 'row' - name of the missing row
fn row_missing(row: &str) -> GismeteoError {
    GismeteoError::Selector(format!("{} row not found on page", row))
}

/// Collects the trimmed text of every node the selector matches within the scope
///
/// # Arguments
///
/// * 'scope' - the element to search within
/// * 'selector' - the selector for the nodes to collect
fn texts(scope: ElementRef, selector: &Selector) -> Vec<String> {
    scope.select(selector)
        .map(|e| e.text().collect::<String>().trim().to_string())
        .collect()
}
