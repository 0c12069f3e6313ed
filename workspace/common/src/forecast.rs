use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One time-stamped prediction: point estimate plus confidence bounds.
///
/// The bounds are produced upstream by the forecasting pipeline; this type
/// only carries them. `yhat_lower <= yhat <= yhat_upper` is assumed, not
/// enforced here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastPoint {
    /// Forecast date (YYYY-MM-DD)
    pub forecast_date: NaiveDate,
    /// Point forecast
    pub yhat: f64,
    /// Lower confidence bound
    pub yhat_lower: f64,
    /// Upper confidence bound
    pub yhat_upper: f64,
}

impl ForecastPoint {
    pub fn new(forecast_date: NaiveDate, yhat: f64, yhat_lower: f64, yhat_upper: f64) -> Self {
        Self {
            forecast_date,
            yhat,
            yhat_lower,
            yhat_upper,
        }
    }
}

/// The forecast for one (country, region) selection, ordered by date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ForecastSeries {
    /// Country the forecast was queried for
    pub country: String,
    /// Region within the country
    pub region: String,
    /// Forecast rows, ascending by `forecast_date`
    pub points: Vec<ForecastPoint>,
}

impl ForecastSeries {
    pub fn new(country: impl Into<String>, region: impl Into<String>, points: Vec<ForecastPoint>) -> Self {
        Self {
            country: country.into(),
            region: region.into(),
            points,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Download filename for the CSV export of this selection.
    /// Whitespace in names is flattened to underscores so the filename
    /// survives Content-Disposition headers and shell usage.
    pub fn export_filename(&self) -> String {
        format!(
            "inquiry_forecast_{}_{}.csv",
            sanitize(&self.country),
            sanitize(&self.region)
        )
    }
}

fn sanitize(name: &str) -> String {
    name.split_whitespace().collect::<Vec<_>>().join("_")
}
