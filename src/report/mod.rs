pub mod chart;

use plotters::drawing::DrawingAreaErrorKind;
use rust_xlsxwriter::{Format, Image, Workbook, Worksheet, XlsxError};
use thiserror::Error;
use crate::dataset::ForecastDataset;
use crate::dates;
use crate::models::forecast::Metric;
use crate::stats::CityStats;

#[derive(Error, Debug)]
#[error("error while producing report: {0}")]
pub struct ReportError(pub String);
impl From<XlsxError> for ReportError {
    fn from(e: XlsxError) -> Self {
        ReportError(format!("workbook error: {}", e.to_string()))
    }
}
impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for ReportError {
    fn from(e: DrawingAreaErrorKind<E>) -> Self {
        ReportError(format!("chart error: {}", e.to_string()))
    }
}

/// Writes the workbook with the city data, analysis and conclusions sheets
///
/// The chart file must already be rendered, it gets embedded in the
/// analysis sheet.
///
/// # Arguments
///
/// * 'report_path' - the xlsx file to write
/// * 'chart_path' - the rendered chart PNG to embed
/// * 'dataset' - the dataset to report on
pub fn write_report(report_path: &str, chart_path: &str, dataset: &ForecastDataset) -> Result<(), ReportError> {
    let stats: Vec<(String, CityStats)> = dataset.cities.iter()
        .map(|(name, table)| (name.clone(), CityStats::new(&table.metrics)))
        .collect();

    let mut workbook = Workbook::new();
    write_data_sheet(workbook.add_worksheet(), dataset)?;
    write_analysis_sheet(workbook.add_worksheet(), chart_path, &stats)?;
    write_conclusions_sheet(workbook.add_worksheet(), &stats)?;
    workbook.save(report_path)?;

    Ok(())
}

fn write_data_sheet(sheet: &mut Worksheet, dataset: &ForecastDataset) -> Result<(), ReportError> {
    sheet.set_name("City data")?;
    let bold = Format::new().set_bold();
    let mut row: u32 = 0;

    for (name, table) in &dataset.cities {
        sheet.write_string_with_format(row, 0, display_name(name), &bold)?;
        row += 1;

        sheet.write_string_with_format(row, 0, "Day", &bold)?;
        for (col, metric) in Metric::ALL.iter().enumerate() {
            sheet.write_string_with_format(row, col as u16 + 1, metric.label(), &bold)?;
        }
        sheet.write_string_with_format(row, 7, "Date", &bold)?;
        row += 1;

        for day in 0..table.dates.len() {
            sheet.write_number(row, 0, (day + 1) as f64)?;
            for (col, metric) in Metric::ALL.iter().enumerate() {
                sheet.write_number(row, col as u16 + 1, table.metrics.series(*metric)[day].as_f64())?;
            }
            sheet.write_string(row, 7, dates::format_date(table.dates[day]))?;
            row += 1;
        }

        // Blank row between city blocks
        row += 1;
    }

    sheet.autofit();

    Ok(())
}

fn write_analysis_sheet(sheet: &mut Worksheet, chart_path: &str, stats: &[(String, CityStats)]) -> Result<(), ReportError> {
    sheet.set_name("Weather analysis")?;
    let bold = Format::new().set_bold();
    let numeric = Format::new().set_num_format("0.00");

    sheet.write_string_with_format(0, 0, "City", &bold)?;
    for (col, metric) in Metric::ALL.iter().enumerate() {
        let header = format!("Mean {}", metric.title().to_lowercase());
        sheet.write_string_with_format(0, col as u16 + 1, header, &bold)?;
    }

    for (row, (name, city_stats)) in stats.iter().enumerate() {
        let row = row as u32 + 1;
        sheet.write_string(row, 0, display_name(name))?;
        for (col, metric) in Metric::ALL.iter().enumerate() {
            sheet.write_number_with_format(row, col as u16 + 1, city_stats.mean(*metric), &numeric)?;
        }
    }

    sheet.autofit();

    let image = Image::new(chart_path)?;
    sheet.insert_image(4, 0, &image)?;

    Ok(())
}

fn write_conclusions_sheet(sheet: &mut Worksheet, stats: &[(String, CityStats)]) -> Result<(), ReportError> {
    sheet.set_name("Conclusions")?;
    let bold = Format::new().set_bold();

    sheet.write_string_with_format(0, 0, "Parameter", &bold)?;
    sheet.write_string_with_format(0, 1, "Conclusion", &bold)?;

    for (row, (parameter, text)) in conclusions(stats).into_iter().enumerate() {
        let row = row as u32 + 1;
        sheet.write_string(row, 0, parameter)?;
        sheet.write_string(row, 1, text)?;
    }

    sheet.autofit();

    Ok(())
}

/// Derives the narrative conclusions from the per city means
///
/// # Arguments
///
/// * 'stats' - the per city means, one entry per city
pub fn conclusions(stats: &[(String, CityStats)]) -> Vec<(String, String)> {
    let warmest = max_by(stats, |s| s.day_temp);
    let coolest = min_by(stats, |s| s.day_temp);
    let widest_drop = max_by(stats, |s| s.day_temp - s.night_temp);
    let wettest = max_by(stats, |s| s.precipitation);
    let driest = min_by(stats, |s| s.precipitation);
    let windiest = max_by(stats, |s| s.wind_m_s);
    let calmest = min_by(stats, |s| s.wind_m_s);
    let widest_span = max_by(stats, |s| s.max_pressure - s.min_pressure);
    let narrowest_span = min_by(stats, |s| s.max_pressure - s.min_pressure);

    vec![
        ("Day and night temperature".to_string(),
         format!("{} has the warmest days and {} the coolest, while {} cools down most from day to night.",
                 warmest, coolest, widest_drop)),
        ("Precipitation".to_string(),
         format!("{} expects the most precipitation over the period and {} the least.",
                 wettest, driest)),
        ("Wind speed".to_string(),
         format!("{} is the windiest of the cities, {} the calmest.",
                 windiest, calmest)),
        ("Pressure".to_string(),
         format!("{} shows the widest spread between daily maximum and minimum pressure, {} the narrowest.",
                 widest_span, narrowest_span)),
    ]
}

fn max_by(stats: &[(String, CityStats)], f: impl Fn(&CityStats) -> f64) -> String {
    stats.iter()
        .max_by(|a, b| f(&a.1).total_cmp(&f(&b.1)))
        .map(|(name, _)| display_name(name))
        .unwrap_or_default()
}

fn min_by(stats: &[(String, CityStats)], f: impl Fn(&CityStats) -> f64) -> String {
    stats.iter()
        .min_by(|a, b| f(&a.1).total_cmp(&f(&b.1)))
        .map(|(name, _)| display_name(name))
        .unwrap_or_default()
}

/// Capitalizes each hyphen separated part of a canonical city name
///
/// # Arguments
///
/// * 'name' - the canonical name to present
pub(crate) fn display_name(name: &str) -> String {
    name.split('-')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join("-")
}
