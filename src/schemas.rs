use common::{ForecastPoint, ForecastSeries};
use moka::future::Cache;
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, OpenApi, ToSchema};
use validator::Validate;

/// Application state shared across handlers
#[derive(Clone, Debug)]
pub struct AppState {
    /// Database connection
    pub db: DatabaseConnection,
    /// Cache for query results, keyed by operation + arguments
    pub cache: Cache<String, CachedData>,
}

/// Cached data types
#[derive(Clone, Debug)]
pub enum CachedData {
    Countries(Vec<String>),
    Regions(Vec<String>),
    Forecast(ForecastSeries),
}

/// Query parameters for the forecast endpoints
#[derive(Debug, Deserialize, ToSchema, IntoParams, Validate)]
pub struct ForecastQuery {
    /// Country name, as returned by the countries endpoint
    #[validate(length(min = 1))]
    pub country: String,
    /// Region name within the country
    #[validate(length(min = 1))]
    pub region: String,
}

/// API response wrapper
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    /// Response data
    pub data: T,
    /// Response message
    pub message: String,
    /// Success status
    pub success: bool,
}

/// Error response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
    /// Success status (always false for errors)
    pub success: bool,
}

/// Health check response
#[derive(Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// Service status
    pub status: String,
    /// Service version
    pub version: String,
    /// Database connection status
    pub database: String,
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::health::health_check,
        crate::handlers::geo::get_countries,
        crate::handlers::geo::get_regions,
        crate::handlers::forecast::get_forecast,
        crate::handlers::forecast::export_forecast_csv,
    ),
    components(
        schemas(
            ApiResponse<Vec<String>>,
            ApiResponse<ForecastSeries>,
            ErrorResponse,
            HealthResponse,
            ForecastQuery,
            ForecastSeries,
            ForecastPoint,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "geo", description = "Country and region listing endpoints"),
        (name = "forecast", description = "Inquiry forecast retrieval and export endpoints"),
    ),
    info(
        title = "Inquiry Forecast API",
        description = "Region-wise inquiry forecast dashboard - serves pre-computed forecasts with confidence bounds",
        version = "0.1.0",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        )
    )
)]
pub struct ApiDoc;
