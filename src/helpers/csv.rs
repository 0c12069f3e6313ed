use common::ForecastSeries;
use csv::Writer;
use thiserror::Error;

/// Column order of the export, matching the forecast row field names.
const HEADER: [&str; 4] = ["forecast_date", "yhat", "yhat_lower", "yhat_upper"];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),
    #[error("CSV writer error: {0}")]
    Buffer(String),
}

/// Serialize a forecast series to CSV: one header row, one record per
/// point, in `load_forecast` order.
pub fn forecast_to_csv(series: &ForecastSeries) -> Result<String, ExportError> {
    let mut wtr = Writer::from_writer(vec![]);

    wtr.write_record(HEADER)?;

    for point in &series.points {
        wtr.write_record([
            point.forecast_date.to_string(),
            point.yhat.to_string(),
            point.yhat_lower.to_string(),
            point.yhat_upper.to_string(),
        ])?;
    }

    let data = wtr
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    String::from_utf8(data).map_err(|e| ExportError::Buffer(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use common::ForecastPoint;

    fn point(date: &str, yhat: f64, lower: f64, upper: f64) -> ForecastPoint {
        ForecastPoint::new(date.parse::<NaiveDate>().unwrap(), yhat, lower, upper)
    }

    fn bavaria_series() -> ForecastSeries {
        ForecastSeries::new(
            "Germany",
            "Bavaria",
            vec![
                point("2024-01-01", 10.0, 8.0, 12.0),
                point("2024-01-02", 12.0, 9.0, 15.0),
                point("2024-01-03", 11.0, 9.0, 13.0),
            ],
        )
    }

    #[test]
    fn export_empty_series_has_header_only() {
        let series = ForecastSeries::new("Germany", "Bavaria", vec![]);
        let result = forecast_to_csv(&series).unwrap();

        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0], "forecast_date,yhat,yhat_lower,yhat_upper");
    }

    #[test]
    fn export_writes_one_line_per_point_in_order() {
        let result = forecast_to_csv(&bavaria_series()).unwrap();

        let lines: Vec<&str> = result.lines().collect();
        assert_eq!(lines.len(), 4); // header + 3 data rows
        assert!(lines[1].starts_with("2024-01-01,"));
        assert!(lines[2].starts_with("2024-01-02,"));
        assert!(lines[3].starts_with("2024-01-03,"));
    }

    #[test]
    fn export_round_trips_through_csv_reader() {
        let series = bavaria_series();
        let result = forecast_to_csv(&series).unwrap();

        let mut reader = csv::Reader::from_reader(result.as_bytes());
        let headers = reader.headers().unwrap().clone();
        assert_eq!(headers, csv::StringRecord::from(HEADER.to_vec()));

        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), series.len());

        for (record, point) in records.iter().zip(&series.points) {
            assert_eq!(record[0], point.forecast_date.to_string());
            assert_eq!(record[1].parse::<f64>().unwrap(), point.yhat);
            assert_eq!(record[2].parse::<f64>().unwrap(), point.yhat_lower);
            assert_eq!(record[3].parse::<f64>().unwrap(), point.yhat_upper);
        }
    }
}
