//! Read-only queries against the forecast table.
//!
//! All three operations go through the SeaORM query builder, so every
//! country/region value is a bound parameter. Each call is one database
//! round trip; callers layer caching on top.

use common::{ForecastPoint, ForecastSeries};
use model::entities::inquiry_forecast::{Column, Entity as InquiryForecast};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
};
use tracing::instrument;

/// Distinct country names present in the forecast table, ascending.
#[instrument(skip(db))]
pub async fn list_countries(db: &DatabaseConnection) -> Result<Vec<String>, DbErr> {
    InquiryForecast::find()
        .select_only()
        .column(Column::Country)
        .distinct()
        .order_by_asc(Column::Country)
        .into_tuple::<String>()
        .all(db)
        .await
}

/// Distinct region names within `country`, ascending.
/// Empty when the country has no rows.
#[instrument(skip(db))]
pub async fn list_regions(db: &DatabaseConnection, country: &str) -> Result<Vec<String>, DbErr> {
    InquiryForecast::find()
        .filter(Column::Country.eq(country))
        .select_only()
        .column(Column::Region)
        .distinct()
        .order_by_asc(Column::Region)
        .into_tuple::<String>()
        .all(db)
        .await
}

/// Forecast rows for a (country, region) pair, ascending by date.
/// An empty series is a valid result, not an error: the pair simply has no
/// rows in the store.
#[instrument(skip(db))]
pub async fn load_forecast(
    db: &DatabaseConnection,
    country: &str,
    region: &str,
) -> Result<ForecastSeries, DbErr> {
    let rows = InquiryForecast::find()
        .filter(Column::Country.eq(country))
        .filter(Column::Region.eq(region))
        .order_by_asc(Column::ForecastDate)
        .all(db)
        .await?;

    let points = rows
        .into_iter()
        .map(|row| ForecastPoint::new(row.forecast_date, row.yhat, row.yhat_lower, row.yhat_upper))
        .collect();

    Ok(ForecastSeries::new(country, region, points))
}
