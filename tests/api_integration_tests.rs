// API Integration Tests
//
// Purpose: Drive every endpoint through the router with the shipped data
// Run with: cargo test --features api --test api_integration_tests

#[cfg(feature = "api")]
mod api_tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use greenmind::{AppState, EnergyPredictor, ReferenceData, create_router};
    use serde_json::Value;
    use std::path::{Path, PathBuf};
    use tower::ServiceExt; // for oneshot

    fn repo_path(relative: &str) -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join(relative)
    }

    // Helper: Create test app with the given model file
    fn create_test_app_with_model(model_path: PathBuf) -> axum::Router {
        let reference = ReferenceData::load(repo_path("data")).expect("shipped data loads");
        let predictor = EnergyPredictor::with_startup_load(model_path);
        create_router(AppState::from_parts(reference, predictor))
    }

    fn create_test_app() -> axum::Router {
        create_test_app_with_model(repo_path("models/energy_model.json"))
    }

    // Helper: Parse JSON response
    async fn json_response(response: axum::response::Response) -> Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read response body");
        serde_json::from_slice(&body).expect("Failed to parse JSON")
    }

    fn get(uri: &str) -> Request<Body> {
        Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: Value) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    fn example_lifestyle() -> Value {
        serde_json::json!({
            "transport_mode": "car_petrol",
            "km_per_week": 200,
            "flights_short_per_year": 2,
            "flights_long_per_year": 1,
            "electricity_kwh_month": 300,
            "natural_gas_kwh_month": 150,
            "diet_type": "meat_medium",
            "clothing_items_per_year": 15,
            "electronics_per_year": 2,
            "waste_recycling_pct": 40
        })
    }

    fn assert_close(actual: &Value, expected: f64) {
        let actual = actual.as_f64().expect("numeric field");
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    // =========================================================================
    // Section 1: Health Checks
    // =========================================================================

    #[tokio::test]
    async fn test_root() {
        let response = create_test_app().oneshot(get("/")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["status"], "GreenMind AI API Running");
    }

    #[tokio::test]
    async fn test_health_check() {
        let response = create_test_app().oneshot(get("/health")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["status"], "healthy");
        assert!(body["timestamp"].is_string());
        assert_eq!(body["model_loaded"], true);
    }

    // =========================================================================
    // Section 2: Carbon Footprint
    // =========================================================================

    #[tokio::test]
    async fn test_carbon_footprint_example() {
        let response = create_test_app()
            .oneshot(post_json("/api/carbon-footprint", example_lifestyle()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;

        assert_close(&body["total_kg_co2_year"], 7086.6);
        assert_close(&body["breakdown"]["transport"], 3379.8);
        assert_close(&body["breakdown"]["energy"], 1170.0);
        assert_close(&body["breakdown"]["diet"], 2044.0);
        assert_close(&body["breakdown"]["shopping"], 365.0);
        assert_close(&body["breakdown"]["waste"], 127.8);
        assert_close(&body["global_average_kg"], 4700.0);
        assert_close(&body["target_kg"], 2000.0);
        assert_close(&body["vs_global_average_pct"], 50.8);
    }

    #[tokio::test]
    async fn test_carbon_footprint_empty_body_uses_defaults() {
        let response = create_test_app()
            .oneshot(post_json("/api/carbon-footprint", serde_json::json!({})))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        let breakdown = body["breakdown"].as_object().unwrap();
        let keys: Vec<&str> = breakdown.keys().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), 5);
        for expected in ["transport", "energy", "diet", "shopping", "waste"] {
            assert!(keys.contains(&expected), "missing category {}", expected);
        }
    }

    #[tokio::test]
    async fn test_carbon_footprint_unknown_mode_falls_back() {
        let mut unknown = example_lifestyle();
        unknown["transport_mode"] = Value::from("hovercraft");

        let response = create_test_app()
            .oneshot(post_json("/api/carbon-footprint", unknown))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_close(&body["breakdown"]["transport"], 3379.8);
    }

    #[tokio::test]
    async fn test_carbon_footprint_rejects_out_of_range() {
        let mut over = example_lifestyle();
        over["waste_recycling_pct"] = Value::from(120);

        let response = create_test_app()
            .oneshot(post_json("/api/carbon-footprint", over))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("waste_recycling_pct"));
    }

    #[tokio::test]
    async fn test_carbon_footprint_rejects_negative_count() {
        let mut negative = example_lifestyle();
        negative["flights_long_per_year"] = Value::from(-3);

        let response = create_test_app()
            .oneshot(post_json("/api/carbon-footprint", negative))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    // =========================================================================
    // Section 3: Score
    // =========================================================================

    #[tokio::test]
    async fn test_score_example() {
        let response = create_test_app()
            .oneshot(post_json("/api/score", example_lifestyle()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;

        assert_close(&body["overall_score"], 71.7);
        assert_eq!(body["grade"], "B");
        assert_eq!(body["grade_label"], "Good – you're making a positive impact.");
        assert_close(&body["category_scores"]["waste"], 36.1);
        assert_close(&body["total_kg_co2_year"], 7086.6);
        assert_close(&body["breakdown"]["diet"], 2044.0);
    }

    // =========================================================================
    // Section 4: Tips
    // =========================================================================

    #[tokio::test]
    async fn test_tips_default_limit() {
        let response = create_test_app().oneshot(get("/api/tips")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_eq!(body["count"], 10);
        assert_eq!(body["tips"].as_array().unwrap().len(), 10);
        assert_eq!(body["tips"][0]["id"], 1);
        assert!(body["tips"][0]["tip"].is_string());
    }

    #[tokio::test]
    async fn test_tips_by_category() {
        let response = create_test_app()
            .oneshot(get("/api/tips?category=waste&limit=2"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        let tips = body["tips"].as_array().unwrap();
        assert_eq!(tips.len(), 2);
        for tip in tips {
            assert_eq!(tip["category"], "waste");
        }
    }

    #[tokio::test]
    async fn test_tips_limit_out_of_range() {
        let response = create_test_app().oneshot(get("/api/tips?limit=0")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        let response = create_test_app().oneshot(get("/api/tips?limit=51")).await.unwrap();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_recommend_tips() {
        let response = create_test_app()
            .oneshot(post_json("/api/tips/recommend?top_n=3", example_lifestyle()))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        let ids: Vec<u64> = body["tips"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 2, 9]);
        assert_eq!(body["count"], 3);
        assert_close(&body["total_kg_co2_year"], 7086.6);
    }

    // =========================================================================
    // Section 5: Dashboard
    // =========================================================================

    #[tokio::test]
    async fn test_dashboard_summary() {
        let response = create_test_app()
            .oneshot(get("/api/dashboard/summary"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_close(&body["global_average_kg"], 4700.0);
        assert_close(&body["target_kg"], 2000.0);
        assert_close(&body["uk_average_kg"], 5500.0);
        assert_close(&body["us_average_kg"], 14700.0);
        assert_close(&body["india_average_kg"], 1900.0);
        assert_eq!(body["category_labels"][0], "Transport");
        assert_eq!(body["category_colors"].as_array().unwrap().len(), 5);
        assert_eq!(body["tips_count"], 20);
    }

    // =========================================================================
    // Section 6: Energy Prediction
    // =========================================================================

    #[tokio::test]
    async fn test_predict_shipped_model() {
        let response = create_test_app()
            .oneshot(post_json(
                "/predict",
                serde_json::json!({"temperature": 32.5, "humidity": 60, "hour": 14}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_close(&body["predicted_energy"], 2.9625);
        assert_eq!(body["unit"], "kWh");
    }

    #[tokio::test]
    async fn test_predict_forest_fixture() {
        let app = create_test_app_with_model(repo_path("tests/fixtures/energy_forest.json"));
        let response = app
            .oneshot(post_json(
                "/predict",
                serde_json::json!({"temperature": 32.5, "humidity": 60, "hour": 14}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let body = json_response(response).await;
        assert_close(&body["predicted_energy"], 2.775);
    }

    #[tokio::test]
    async fn test_predict_without_model() {
        let app = create_test_app_with_model(repo_path("tests/fixtures/no_such_model.json"));
        let response = app
            .oneshot(post_json(
                "/predict",
                serde_json::json!({"temperature": 20, "humidity": 40, "hour": 8}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        let body = json_response(response).await;
        assert!(body["error"].as_str().unwrap().contains("not loaded"));
    }

    #[tokio::test]
    async fn test_predict_broken_model() {
        let app = create_test_app_with_model(repo_path("tests/fixtures/energy_forest_broken.json"));
        let response = app
            .oneshot(post_json(
                "/predict",
                serde_json::json!({"temperature": 30, "humidity": 40, "hour": 8}),
            ))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_predict_validation() {
        let cases = [
            serde_json::json!({"temperature": 75, "humidity": 40, "hour": 8}),
            serde_json::json!({"temperature": 20, "humidity": 140, "hour": 8}),
            serde_json::json!({"temperature": 20, "humidity": 40, "hour": 24}),
            serde_json::json!({"temperature": 20, "humidity": 40}),
        ];

        for case in cases {
            let response = create_test_app()
                .oneshot(post_json("/predict", case.clone()))
                .await
                .unwrap();
            assert_eq!(
                response.status(),
                StatusCode::UNPROCESSABLE_ENTITY,
                "expected 422 for {}",
                case
            );
        }
    }
}
