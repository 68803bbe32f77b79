use plotters::coord::Shift;
use plotters::prelude::*;
use crate::dataset::ForecastDataset;
use crate::dates;
use crate::models::forecast::Metric;
use crate::report::{display_name, ReportError};

const CHART_SIZE: (u32, u32) = (1400, 1000);

/// Renders the six metric panels to a PNG file, one line per city
///
/// # Arguments
///
/// * 'path' - the PNG file to write
/// * 'dataset' - the dataset to plot
pub fn render_chart(path: &str, dataset: &ForecastDataset) -> Result<(), ReportError> {
    let root = BitMapBackend::new(path, CHART_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let panels = root.split_evenly((3, 2));
    for (area, metric) in panels.iter().zip(Metric::ALL) {
        draw_panel(area, metric, dataset)?;
    }

    root.present()?;

    Ok(())
}

fn draw_panel(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    metric: Metric,
    dataset: &ForecastDataset,
) -> Result<(), ReportError> {
    let (min_v, max_v) = value_range(metric, dataset);
    let last = dataset.dates.len() as i32 - 1;

    let mut chart = ChartBuilder::on(area)
        .caption(metric.title(), ("sans-serif", 22))
        .margin(10)
        .x_label_area_size(36)
        .y_label_area_size(48)
        .build_cartesian_2d(0i32..last, min_v..max_v)?;

    chart.configure_mesh()
        .x_labels(7)
        .x_label_formatter(&|i| {
            dataset.dates.get(*i as usize)
                .map(|d| dates::format_date(*d))
                .unwrap_or_default()
        })
        .y_desc(metric.label())
        .draw()?;

    for (idx, (name, table)) in dataset.cities.iter().enumerate() {
        let color = Palette99::pick(idx).mix(1.0);
        let points = table.metrics.series(metric).iter()
            .enumerate()
            .map(|(i, v)| (i as i32, v.as_f64()));

        chart.draw_series(LineSeries::new(points, color.stroke_width(2)))?
            .label(display_name(name))
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 18, y)], color.stroke_width(2)));
    }

    chart.configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    Ok(())
}

/// Returns the plot range of a metric over all cities, padded so lines
/// stay clear of the panel frame
///
/// # Arguments
///
/// * 'metric' - the metric to range
/// * 'dataset' - the dataset to scan
fn value_range(metric: Metric, dataset: &ForecastDataset) -> (f64, f64) {
    let mut min_v = f64::INFINITY;
    let mut max_v = f64::NEG_INFINITY;

    for table in dataset.cities.values() {
        for value in table.metrics.series(metric) {
            min_v = min_v.min(value.as_f64());
            max_v = max_v.max(value.as_f64());
        }
    }

    if min_v > max_v {
        return (0.0, 1.0);
    }
    if min_v == max_v {
        return (min_v - 1.0, max_v + 1.0);
    }

    let pad = (max_v - min_v) * 0.05;
    (min_v - pad, max_v + pad)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;
    use chrono::NaiveDate;
    use crate::dataset::CityTable;
    use crate::models::forecast::MetricSet;
    use crate::series::MetricValue;

    fn dataset_with_day_temps(values: Vec<MetricValue>) -> ForecastDataset {
        let start = NaiveDate::from_ymd_opt(2026, 8, 26).unwrap();
        let dates = dates::forecast_dates(start);
        let len = values.len();
        let table = CityTable {
            dates: dates.clone(),
            metrics: MetricSet {
                day_temp: values,
                night_temp: vec![MetricValue::Int(0); len],
                precipitation: vec![MetricValue::Float(0.0); len],
                wind_m_s: vec![MetricValue::Int(5); len],
                max_pressure: vec![MetricValue::Int(746); len],
                min_pressure: vec![MetricValue::Int(740); len],
            },
        };
        let mut cities = BTreeMap::new();
        cities.insert("moscow".to_string(), table);

        ForecastDataset { dates, cities }
    }

    #[test]
    fn test_value_range_pads_span() {
        let dataset = dataset_with_day_temps(vec![MetricValue::Int(0), MetricValue::Int(10)]);

        let (min_v, max_v) = value_range(Metric::DayTemp, &dataset);

        assert_eq!(min_v, -0.5);
        assert_eq!(max_v, 10.5);
    }

    #[test]
    fn test_value_range_widens_flat_series() {
        let dataset = dataset_with_day_temps(vec![MetricValue::Int(7), MetricValue::Int(7)]);

        let (min_v, max_v) = value_range(Metric::DayTemp, &dataset);

        assert_eq!(min_v, 6.0);
        assert_eq!(max_v, 8.0);
    }

    #[test]
    fn test_value_range_of_missing_data() {
        let dataset = dataset_with_day_temps(Vec::new());

        assert_eq!(value_range(Metric::DayTemp, &dataset), (0.0, 1.0));
    }
}
