use thiserror::Error;
use crate::series::SeriesError;

#[derive(Error, Debug)]
pub enum GismeteoError {
    #[error("http request error: {0}")]
    Http(String),
    #[error("page layout error: {0}")]
    Selector(String),
    #[error("page value error: {0}")]
    Value(String),
}
impl From<reqwest::Error> for GismeteoError {
    fn from(e: reqwest::Error) -> Self {
        GismeteoError::Http(e.to_string())
    }
}
impl From<SeriesError> for GismeteoError {
    fn from(e: SeriesError) -> Self {
        GismeteoError::Value(e.to_string())
    }
}
