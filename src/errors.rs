use thiserror::Error;
use crate::manager_gismeteo::errors::GismeteoError;

#[derive(Error, Debug)]
#[error("error in configuration: {0}")]
pub struct ConfigError(pub String);
impl From<&str> for ConfigError {
    fn from(e: &str) -> Self {
        ConfigError(e.to_string())
    }
}
impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError(format!("file error: {}", e.to_string()))
    }
}
impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError(format!("toml document error: {}", e.to_string()))
    }
}

#[derive(Error, Debug)]
#[error("error while initializing: {0}")]
pub struct InitError(pub String);
impl From<ConfigError> for InitError {
    fn from(e: ConfigError) -> Self {
        InitError(e.to_string())
    }
}
impl From<std::io::Error> for InitError {
    fn from(e: std::io::Error) -> Self {
        InitError(format!("file error: {}", e.to_string()))
    }
}
impl From<log::SetLoggerError> for InitError {
    fn from(e: log::SetLoggerError) -> Self {
        InitError(format!("logger error: {}", e.to_string()))
    }
}
impl From<log4rs::config::runtime::ConfigErrors> for InitError {
    fn from(e: log4rs::config::runtime::ConfigErrors) -> Self {
        InitError(format!("logger config error: {}", e.to_string()))
    }
}
impl From<GismeteoError> for InitError {
    fn from(e: GismeteoError) -> Self {
        InitError(e.to_string())
    }
}
