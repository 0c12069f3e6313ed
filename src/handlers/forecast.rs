use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use axum_valid::Valid;
use common::ForecastSeries;
use tracing::{debug, error, info, instrument};

use crate::helpers::csv::forecast_to_csv;
use crate::queries;
use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse, ForecastQuery};

/// Get the forecast for a (country, region) selection
///
/// An empty series is a valid response: the selection has no rows in the
/// store. Clients render a "no data" notice for it instead of a chart.
#[utoipa::path(
    get,
    path = "/api/v1/forecast",
    tag = "forecast",
    params(ForecastQuery),
    responses(
        (status = 200, description = "Forecast retrieved successfully", body = ApiResponse<ForecastSeries>),
        (status = 400, description = "Missing or empty query parameters", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_forecast(
    State(state): State<AppState>,
    Valid(Query(query)): Valid<Query<ForecastQuery>>,
) -> Result<Json<ApiResponse<ForecastSeries>>, (StatusCode, Json<ErrorResponse>)> {
    let series = load_forecast_cached(&state, &query.country, &query.region).await?;

    let message = if series.is_empty() {
        "No forecast data for this selection".to_string()
    } else {
        "Forecast retrieved successfully".to_string()
    };

    Ok(Json(ApiResponse {
        data: series,
        message,
        success: true,
    }))
}

/// Export the forecast for a (country, region) selection as CSV
#[utoipa::path(
    get,
    path = "/api/v1/forecast/export",
    tag = "forecast",
    params(ForecastQuery),
    responses(
        (status = 200, description = "CSV export of the forecast", body = String, content_type = "text/csv"),
        (status = 400, description = "Missing or empty query parameters", body = ErrorResponse),
        (status = 404, description = "No forecast data for this selection", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn export_forecast_csv(
    State(state): State<AppState>,
    Valid(Query(query)): Valid<Query<ForecastQuery>>,
) -> Result<Response, (StatusCode, Json<ErrorResponse>)> {
    let series = load_forecast_cached(&state, &query.country, &query.region).await?;

    if series.is_empty() {
        return Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: format!(
                    "No forecast data for {} / {}",
                    query.country, query.region
                ),
                code: "NO_DATA".to_string(),
                success: false,
            }),
        ));
    }

    let body = match forecast_to_csv(&series) {
        Ok(body) => body,
        Err(e) => {
            error!("CSV export failed for {} / {}: {}", query.country, query.region, e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to serialize forecast to CSV".to_string(),
                    code: "EXPORT_ERROR".to_string(),
                    success: false,
                }),
            ));
        }
    };

    info!(
        "Exporting {} forecast rows for {} / {}",
        series.len(),
        query.country,
        query.region
    );

    let headers = [
        (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{}\"", series.export_filename()),
        ),
    ];

    Ok((headers, body).into_response())
}

/// Fetch a forecast series through the cache.
///
/// Cache key encodes operation identity plus debug-quoted arguments, so a
/// changed country or region always misses.
async fn load_forecast_cached(
    state: &AppState,
    country: &str,
    region: &str,
) -> Result<ForecastSeries, (StatusCode, Json<ErrorResponse>)> {
    let cache_key = format!("forecast_{:?}_{:?}", country, region);

    if let Some(CachedData::Forecast(series)) = state.cache.get(&cache_key).await {
        debug!(
            "Returning {} forecast rows for {} / {} from cache",
            series.len(),
            country,
            region
        );
        return Ok(series);
    }

    let series = match queries::load_forecast(&state.db, country, region).await {
        Ok(series) => series,
        Err(e) => {
            error!("Failed to load forecast for {} / {}: {}", country, region, e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Failed to retrieve forecast".to_string(),
                    code: "DATABASE_ERROR".to_string(),
                    success: false,
                }),
            ));
        }
    };

    info!(
        "Loaded {} forecast rows for {} / {}",
        series.len(),
        country,
        region
    );
    state
        .cache
        .insert(cache_key, CachedData::Forecast(series.clone()))
        .await;

    Ok(series)
}
