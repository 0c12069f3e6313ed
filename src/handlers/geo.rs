use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
};
use tracing::{debug, error, info, instrument};

use crate::queries;
use crate::schemas::{ApiResponse, AppState, CachedData, ErrorResponse};

/// List all countries present in the forecast table
#[utoipa::path(
    get,
    path = "/api/v1/countries",
    tag = "geo",
    responses(
        (status = 200, description = "Countries retrieved successfully", body = ApiResponse<Vec<String>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_countries(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<String>>>, (StatusCode, Json<ErrorResponse>)> {
    let cache_key = "countries".to_string();

    // Check cache first
    if let Some(CachedData::Countries(countries)) = state.cache.get(&cache_key).await {
        debug!("Returning {} countries from cache", countries.len());
        return Ok(Json(ApiResponse {
            data: countries,
            message: "Countries retrieved from cache".to_string(),
            success: true,
        }));
    }

    let countries = match queries::list_countries(&state.db).await {
        Ok(countries) => countries,
        Err(e) => {
            error!("Failed to list countries: {}", e);
            return Err(database_error("Failed to retrieve countries"));
        }
    };

    info!("Retrieved {} countries", countries.len());
    state
        .cache
        .insert(cache_key, CachedData::Countries(countries.clone()))
        .await;

    Ok(Json(ApiResponse {
        data: countries,
        message: "Countries retrieved successfully".to_string(),
        success: true,
    }))
}

/// List all regions within a country
///
/// Returns an empty list for a country with no forecast rows.
#[utoipa::path(
    get,
    path = "/api/v1/countries/{country}/regions",
    tag = "geo",
    params(
        ("country" = String, Path, description = "Country name"),
    ),
    responses(
        (status = 200, description = "Regions retrieved successfully", body = ApiResponse<Vec<String>>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
#[instrument]
pub async fn get_regions(
    Path(country): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<String>>>, (StatusCode, Json<ErrorResponse>)> {
    // Debug-quote the argument so separators inside names cannot collide
    let cache_key = format!("regions_{:?}", country);

    if let Some(CachedData::Regions(regions)) = state.cache.get(&cache_key).await {
        debug!("Returning {} regions for {} from cache", regions.len(), country);
        return Ok(Json(ApiResponse {
            data: regions,
            message: "Regions retrieved from cache".to_string(),
            success: true,
        }));
    }

    let regions = match queries::list_regions(&state.db, &country).await {
        Ok(regions) => regions,
        Err(e) => {
            error!("Failed to list regions for {}: {}", country, e);
            return Err(database_error("Failed to retrieve regions"));
        }
    };

    info!("Retrieved {} regions for {}", regions.len(), country);
    state
        .cache
        .insert(cache_key, CachedData::Regions(regions.clone()))
        .await;

    Ok(Json(ApiResponse {
        data: regions,
        message: "Regions retrieved successfully".to_string(),
        success: true,
    }))
}

fn database_error(message: &str) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: message.to_string(),
            code: "DATABASE_ERROR".to_string(),
            success: false,
        }),
    )
}
