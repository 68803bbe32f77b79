use std::collections::BTreeMap;
use chrono::NaiveDate;
use log::warn;
use thiserror::Error;
use crate::models::forecast::MetricSet;
use crate::snapshot::SnapshotEntry;

#[derive(Error, Debug)]
#[error("error while building dataset: {0}")]
pub struct DatasetError(pub String);
impl From<&str> for DatasetError {
    fn from(e: &str) -> Self {
        DatasetError(e.to_string())
    }
}

/// The per city slice of the dataset
#[derive(Debug, Clone)]
pub struct CityTable {
    pub dates: Vec<NaiveDate>,
    pub metrics: MetricSet,
}

/// The full dataset rebuilt from a snapshot, cities keyed by their
/// canonical name in alphabetical order
#[derive(Debug, Clone)]
pub struct ForecastDataset {
    pub dates: Vec<NaiveDate>,
    pub cities: BTreeMap<String, CityTable>,
}

/// Rebuilds the dataset from decoded snapshot entries
///
/// All rows of one snapshot share the date series, so the dates of the
/// first entry are broadcast to every city table. A row whose own dates
/// disagree with that series is logged and skipped, which keeps every
/// table in the dataset aligned with the shared series.
///
/// # Arguments
///
/// * 'entries' - the decoded snapshot entries
pub fn build_dataset(entries: Vec<SnapshotEntry>) -> Result<ForecastDataset, DatasetError> {
    if entries.is_empty() {
        return Err(DatasetError::from("snapshot holds no usable rows"));
    }

    let dates = entries[0].dates.clone();
    let mut cities: BTreeMap<String, CityTable> = BTreeMap::new();

    for entry in entries {
        if entry.dates != dates {
            warn!("skipping snapshot row for {}: dates disagree with the shared date series", entry.city);
            continue;
        }

        cities.insert(entry.city.canonical_name(), CityTable {
            dates: dates.clone(),
            metrics: entry.metrics,
        });
    }

    Ok(ForecastDataset { dates, cities })
}
