use std::{env, process};
use chrono::Local;
use log::{error, info};
use meteoreport::collector;
use meteoreport::dataset;
use meteoreport::dates;
use meteoreport::initialization;
use meteoreport::report;
use meteoreport::report::chart;
use meteoreport::snapshot;

fn main() {
    let config_path = env::args().nth(1).unwrap_or("config.toml".to_string());

    if let Err(e) = run(&config_path) {
        error!("{}", e);
        eprintln!("meteoreport failed: {}", e);
        process::exit(1);
    }
}

/// Runs the full pipeline, from scrape to finished report
///
/// # Arguments
///
/// * 'config_path' - path to the configuration file
fn run(config_path: &str) -> anyhow::Result<()> {
    let (config, gismeteo) = initialization::init(config_path)?;

    let date_series = dates::forecast_dates(Local::now().date_naive());
    let forecasts = collector::collect_forecasts(&gismeteo, &config.source.cities);
    info!("collected {} of {} cities", forecasts.len(), config.source.cities.len());

    snapshot::save_snapshot(&config.files.snapshot_file, &forecasts, &date_series)?;

    let entries = snapshot::load_snapshot(&config.files.snapshot_file)?;
    let dataset = dataset::build_dataset(entries)?;

    chart::render_chart(&config.files.chart_file, &dataset)?;
    report::write_report(&config.files.report_file, &config.files.chart_file, &dataset)?;
    info!("report written to {}", config.files.report_file);

    Ok(())
}
