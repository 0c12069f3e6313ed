use anyhow::{Context, Result};
use chrono::NaiveDate;
use sea_orm::{ActiveModelTrait, Database, Set};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info, trace, warn};

use model::entities::inquiry_forecast;

/// One CSV record as produced by the upstream forecasting pipeline.
#[derive(Debug, Deserialize)]
struct ForecastRecord {
    country: String,
    region: String,
    forecast_date: NaiveDate,
    yhat: f64,
    yhat_lower: f64,
    yhat_upper: f64,
}

/// Bulk-load forecast rows from a CSV export of the upstream pipeline.
///
/// Rows whose bounds are out of order (`yhat` outside `[yhat_lower,
/// yhat_upper]`) are imported anyway with a warning: the dashboard mirrors
/// the store, it does not correct it.
pub async fn import_forecasts(database_url: &str, file: &Path) -> Result<()> {
    trace!("Entering import_forecasts function");
    info!("Importing forecast rows from {}", file.display());
    debug!("Database URL: {}", database_url);

    let db = Database::connect(database_url)
        .await
        .with_context(|| format!("failed to connect to database '{}'", database_url))?;

    let mut reader = csv::Reader::from_path(file)
        .with_context(|| format!("failed to open CSV file '{}'", file.display()))?;

    let mut imported = 0usize;
    for (line, result) in reader.deserialize().enumerate() {
        let record: ForecastRecord =
            result.with_context(|| format!("malformed CSV record at line {}", line + 2))?;

        if !(record.yhat_lower <= record.yhat && record.yhat <= record.yhat_upper) {
            warn!(
                "Row {}/{} @ {} has out-of-order bounds: yhat={} not within [{}, {}]",
                record.country,
                record.region,
                record.forecast_date,
                record.yhat,
                record.yhat_lower,
                record.yhat_upper
            );
        }

        let row = inquiry_forecast::ActiveModel {
            country: Set(record.country),
            region: Set(record.region),
            forecast_date: Set(record.forecast_date),
            yhat: Set(record.yhat),
            yhat_lower: Set(record.yhat_lower),
            yhat_upper: Set(record.yhat_upper),
            ..Default::default()
        };
        row.insert(&db)
            .await
            .with_context(|| format!("failed to insert record at line {}", line + 2))?;
        imported += 1;
    }

    info!("Imported {} forecast rows from {}", imported, file.display());
    Ok(())
}
