pub mod collector;
pub mod config;
pub mod dataset;
pub mod dates;
pub mod errors;
pub mod initialization;
pub mod manager_gismeteo;
pub mod models;
pub mod report;
pub mod series;
pub mod snapshot;
pub mod stats;
