#[cfg(test)]
pub mod test_utils {
    use crate::router::create_router;
    use crate::schemas::AppState;
    use axum::Router;
    use chrono::NaiveDate;
    use migration::{Migrator, MigratorTrait};
    use model::entities::inquiry_forecast;
    use moka::future::Cache;
    use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, Set};

    /// Create an in-memory SQLite database for testing
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        // Run migrations
        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }

    /// Insert one forecast row
    pub async fn insert_row(
        db: &DatabaseConnection,
        country: &str,
        region: &str,
        date: &str,
        yhat: f64,
        yhat_lower: f64,
        yhat_upper: f64,
    ) {
        let row = inquiry_forecast::ActiveModel {
            country: Set(country.to_string()),
            region: Set(region.to_string()),
            forecast_date: Set(date.parse::<NaiveDate>().unwrap()),
            yhat: Set(yhat),
            yhat_lower: Set(yhat_lower),
            yhat_upper: Set(yhat_upper),
            ..Default::default()
        };
        row.insert(db).await.expect("Failed to insert forecast row");
    }

    /// Seed the store with the fixture data the tests assert against.
    /// Bavaria rows are inserted out of date order on purpose.
    pub async fn seed_forecasts(db: &DatabaseConnection) {
        insert_row(db, "Germany", "Bavaria", "2024-01-03", 11.0, 9.0, 13.0).await;
        insert_row(db, "Germany", "Bavaria", "2024-01-01", 10.0, 8.0, 12.0).await;
        insert_row(db, "Germany", "Bavaria", "2024-01-02", 12.0, 9.0, 15.0).await;
        insert_row(db, "Germany", "Berlin", "2024-01-01", 20.0, 15.0, 25.0).await;
        insert_row(db, "France", "Provence", "2024-01-01", 5.0, 3.0, 7.0).await;
    }

    /// Create AppState for testing, seeded with fixture rows
    pub async fn setup_test_app_state() -> AppState {
        let db = setup_test_db().await;
        seed_forecasts(&db).await;

        let cache = Cache::new(100);

        AppState { db, cache }
    }

    /// Create axum app for testing
    pub async fn setup_test_app() -> Router {
        let state = setup_test_app_state().await;
        create_router(state)
    }
}
