use std::fs;
use log::LevelFilter;
use serde::Deserialize;
use crate::errors::ConfigError;
use crate::models::forecast::CityId;

#[derive(Deserialize)]
pub struct Source {
    pub host: String,
    pub cities: Vec<CityId>,
    pub timeout_secs: u64,
}

#[derive(Deserialize)]
pub struct Files {
    pub snapshot_file: String,
    pub chart_file: String,
    pub report_file: String,
}

#[derive(Deserialize)]
pub struct General {
    pub log_path: String,
    pub log_level: LevelFilter,
    pub log_to_stdout: bool,
}

#[derive(Deserialize)]
pub struct Config {
    pub source: Source,
    pub files: Files,
    pub general: General,
}

/// Loads the configuration file and returns a struct with all configuration items
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
pub fn load_config(config_path: &str) -> Result<Config, ConfigError> {

    let toml = fs::read_to_string(config_path)?;
    let config: Config = toml::from_str(&toml)?;

    if config.source.cities.is_empty() {
        return Err(ConfigError::from("no cities configured"))
    }

    Ok(config)
}
