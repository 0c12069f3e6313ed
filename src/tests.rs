#[cfg(test)]
mod integration_tests {
    use crate::router::create_router;
    use crate::schemas::ApiResponse;
    use crate::test_utils::test_utils::{setup_test_app, setup_test_app_state};
    use axum::http::{header, StatusCode};
    use axum_test::TestServer;
    use common::ForecastSeries;
    use model::entities::inquiry_forecast;
    use sea_orm::EntityTrait;

    #[tokio::test]
    async fn test_health_check() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/health").await;

        response.assert_status(StatusCode::OK);
        let body: serde_json::Value = response.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["database"], "connected");
    }

    #[tokio::test]
    async fn test_get_countries_sorted_distinct() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/countries").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<String>> = response.json();
        assert!(body.success);
        // Distinct and ascending, despite Germany having four rows
        assert_eq!(body.data, vec!["France".to_string(), "Germany".to_string()]);
    }

    #[tokio::test]
    async fn test_get_regions_sorted_distinct() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/countries/Germany/regions").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<String>> = response.json();
        assert!(body.success);
        assert_eq!(body.data, vec!["Bavaria".to_string(), "Berlin".to_string()]);
    }

    #[tokio::test]
    async fn test_get_regions_unknown_country_is_empty() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/countries/Atlantis/regions").await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<Vec<String>> = response.json();
        assert!(body.success);
        assert!(body.data.is_empty());
    }

    #[tokio::test]
    async fn test_get_forecast_rows_sorted_by_date() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/forecast?country=Germany&region=Bavaria")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastSeries> = response.json();
        assert!(body.success);

        let series = body.data;
        assert_eq!(series.country, "Germany");
        assert_eq!(series.region, "Bavaria");
        assert_eq!(series.len(), 3);

        // Strictly ascending dates, no duplicates
        let dates: Vec<_> = series.points.iter().map(|p| p.forecast_date).collect();
        assert!(dates.windows(2).all(|w| w[0] < w[1]));

        assert_eq!(series.points[0].forecast_date.to_string(), "2024-01-01");
        assert_eq!(series.points[0].yhat, 10.0);
        assert_eq!(series.points[1].yhat, 12.0);
        assert_eq!(series.points[1].yhat_upper, 15.0);
        assert_eq!(series.points[2].yhat_lower, 9.0);
    }

    #[tokio::test]
    async fn test_get_forecast_absent_pair_is_empty_not_error() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/forecast?country=Germany&region=Hamburg")
            .await;

        response.assert_status(StatusCode::OK);
        let body: ApiResponse<ForecastSeries> = response.json();
        assert!(body.success);
        assert!(body.data.is_empty());
        assert_eq!(body.message, "No forecast data for this selection");
    }

    #[tokio::test]
    async fn test_get_forecast_rejects_empty_parameters() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server.get("/api/v1/forecast?country=&region=Bavaria").await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_forecast_cache_skips_second_database_read() {
        let state = setup_test_app_state().await;
        let app = create_router(state.clone());
        let server = TestServer::new(app).unwrap();

        // First call populates the cache
        let first = server
            .get("/api/v1/forecast?country=Germany&region=Bavaria")
            .await;
        first.assert_status(StatusCode::OK);
        let first_body: ApiResponse<ForecastSeries> = first.json();
        assert_eq!(first_body.data.len(), 3);

        // Remove every row from the store; a second read would now be empty
        inquiry_forecast::Entity::delete_many()
            .exec(&state.db)
            .await
            .expect("Failed to clear forecast table");

        let second = server
            .get("/api/v1/forecast?country=Germany&region=Bavaria")
            .await;
        second.assert_status(StatusCode::OK);
        let second_body: ApiResponse<ForecastSeries> = second.json();

        // Still served from cache, byte-identical to the first result
        assert_eq!(second_body.data, first_body.data);

        // A different argument tuple misses the cache and sees the empty store
        let other = server
            .get("/api/v1/forecast?country=Germany&region=Berlin")
            .await;
        other.assert_status(StatusCode::OK);
        let other_body: ApiResponse<ForecastSeries> = other.json();
        assert!(other_body.data.is_empty());
    }

    #[tokio::test]
    async fn test_export_csv_has_header_and_rows() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/forecast/export?country=Germany&region=Bavaria")
            .await;

        response.assert_status(StatusCode::OK);

        let disposition = response
            .headers()
            .get(header::CONTENT_DISPOSITION)
            .expect("missing content-disposition header")
            .to_str()
            .unwrap()
            .to_string();
        assert!(disposition.contains("inquiry_forecast_Germany_Bavaria.csv"));

        let body = response.text();
        let lines: Vec<&str> = body.lines().collect();
        assert_eq!(lines.len(), 4); // header + 3 rows
        assert_eq!(lines[0], "forecast_date,yhat,yhat_lower,yhat_upper");

        // Parse back and compare against the served forecast
        let mut reader = csv::Reader::from_reader(body.as_bytes());
        let records: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
        assert_eq!(records.len(), 3);
        assert_eq!(&records[0][0], "2024-01-01");
        assert_eq!(records[0][1].parse::<f64>().unwrap(), 10.0);
        assert_eq!(records[1][3].parse::<f64>().unwrap(), 15.0);
    }

    #[tokio::test]
    async fn test_export_csv_absent_pair_is_not_found() {
        let app = setup_test_app().await;
        let server = TestServer::new(app).unwrap();

        let response = server
            .get("/api/v1/forecast/export?country=Germany&region=Hamburg")
            .await;

        response.assert_status(StatusCode::NOT_FOUND);
    }
}
