use crate::api_client;
use crate::settings;
pub use common::{ForecastPoint, ForecastSeries};

/// Fetch the list of countries present in the forecast store.
pub async fn get_countries() -> Result<Vec<String>, String> {
    log::trace!("Fetching country list");
    api_client::get::<Vec<String>>("/countries").await
}

/// Fetch the regions available within a country.
/// An empty list means the country has no forecast rows.
pub async fn get_regions(country: &str) -> Result<Vec<String>, String> {
    log::trace!("Fetching regions for country: {}", country);

    let result = api_client::get::<Vec<String>>(&format!("/countries/{}/regions", country)).await;

    if let Err(ref e) = result {
        log::error!("Failed to fetch regions for {}: {}", country, e);
    }

    result
}

/// Fetch the forecast series for a (country, region) selection.
/// An empty series is the "no data" state, not an error.
pub async fn get_forecast(country: &str, region: &str) -> Result<ForecastSeries, String> {
    log::trace!("Fetching forecast for {} / {}", country, region);

    let url = format!("/forecast?country={}&region={}", country, region);
    let result = api_client::get::<ForecastSeries>(&url).await;

    match &result {
        Ok(series) => log::info!(
            "Fetched {} forecast rows for {} / {}",
            series.len(),
            country,
            region
        ),
        Err(e) => log::error!("Failed to fetch forecast for {} / {}: {}", country, region, e),
    }

    result
}

/// URL of the backend CSV export for a selection; used directly as a
/// download link so the browser handles the attachment.
pub fn export_url(country: &str, region: &str) -> String {
    settings::get_settings().api_url(&format!(
        "/forecast/export?country={}&region={}",
        country, region
    ))
}
