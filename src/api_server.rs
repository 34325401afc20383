// Axum API Server Module
//
// Purpose: REST API over the carbon estimator, sustainability scorer, eco
// advisor and energy predictor. Request validation lives here; the core
// computations only ever see in-range input.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query, State,
    },
    http::StatusCode,
    response::{IntoResponse, Json},
    routing::{get, post},
    Router,
};

use tower_http::{
    compression::CompressionLayer,
    cors::CorsLayer,
    trace::TraceLayer,
};

use std::sync::Arc;

use crate::advisor::EcoAdvisor;
use crate::config::ServerConfig;
use crate::data::ReferenceData;
use crate::emissions::Category;
use crate::error::{PredictError, ValidationError};
use crate::estimator::{CarbonEstimate, CarbonEstimator};
use crate::input::LifestyleInput;
use crate::predictor::{EnergyPredictor, PredictorState};
use crate::scorer::SustainabilityScorer;

// ============================================================================
// Application State
// ============================================================================

#[derive(Clone)]
pub struct AppState {
    pub reference: ReferenceData,
    pub estimator: Arc<CarbonEstimator>,
    pub scorer: Arc<SustainabilityScorer>,
    pub advisor: Arc<EcoAdvisor>,
    pub predictor: Arc<EnergyPredictor>,
}

impl AppState {
    /// Load reference data and the energy model as configured
    pub fn new(config: &ServerConfig) -> anyhow::Result<Self> {
        use anyhow::Context;

        tracing::info!("Loading reference data from {:?}...", config.data_dir);
        let reference = ReferenceData::load(&config.data_dir)
            .with_context(|| format!("Failed to load reference data from {:?}", config.data_dir))?;

        tracing::info!("Loading energy model from {:?}...", config.model_path);
        let predictor = EnergyPredictor::with_startup_load(config.model_path.clone());

        Ok(Self::from_parts(reference, predictor))
    }

    /// Build state from already-loaded parts
    pub fn from_parts(reference: ReferenceData, predictor: EnergyPredictor) -> Self {
        Self {
            estimator: Arc::new(CarbonEstimator::new(reference.factors.clone())),
            scorer: Arc::new(SustainabilityScorer::new(reference.factors.clone())),
            advisor: Arc::new(EcoAdvisor::new(reference.tips.clone())),
            predictor: Arc::new(predictor),
            reference,
        }
    }
}

// ============================================================================
// Router
// ============================================================================

pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health checks
        .route("/", get(root))
        .route("/health", get(health_check))

        // Energy prediction
        .route("/predict", post(predict_energy))

        // Footprint, score and tips
        .route("/api/carbon-footprint", post(carbon_footprint))
        .route("/api/score", post(sustainability_score))
        .route("/api/tips", get(list_tips))
        .route("/api/tips/recommend", post(recommend_tips))

        // Dashboard reference data
        .route("/api/dashboard/summary", get(dashboard_summary))

        // Middleware (applied in reverse order)
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive()) // Browser frontends on other origins
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// ============================================================================
// Endpoint Handlers
// ============================================================================

async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "GreenMind AI API Running" }))
}

async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "model_loaded": state.predictor.state() == PredictorState::Loaded,
    }))
}

async fn predict_energy(
    State(state): State<AppState>,
    payload: Result<Json<PredictRequest>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(request) = payload?;
    request.validate()?;

    // First call may read the model file: keep it off the async workers
    let predictor = state.predictor.clone();
    let predicted_energy = tokio::task::spawn_blocking(move || {
        predictor.predict(request.temperature, request.humidity, request.hour as f64)
    })
    .await
    .map_err(|e| AppError::Internal(format!("Task join error: {}", e)))??;

    Ok(Json(serde_json::json!({
        "predicted_energy": predicted_energy,
        "unit": "kWh",
    })))
}

async fn carbon_footprint(
    State(state): State<AppState>,
    payload: Result<Json<LifestyleInput>, JsonRejection>,
) -> Result<Json<CarbonEstimate>, AppError> {
    let Json(input) = payload?;
    validate_lifestyle(&input)?;

    Ok(Json(state.estimator.estimate(&input)))
}

async fn sustainability_score(
    State(state): State<AppState>,
    payload: Result<Json<LifestyleInput>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Json(input) = payload?;
    validate_lifestyle(&input)?;

    let estimate = state.estimator.estimate(&input);
    let score = state.scorer.score(estimate.total_kg_co2_year, &estimate.breakdown);

    tracing::info!(
        "Scored footprint {:.1} kg -> {} ({})",
        estimate.total_kg_co2_year,
        score.overall_score,
        score.grade.as_str()
    );

    Ok(Json(serde_json::json!({
        "overall_score": score.overall_score,
        "grade": score.grade,
        "grade_label": score.grade_label,
        "category_scores": score.category_scores,
        "total_kg_co2_year": estimate.total_kg_co2_year,
        "breakdown": estimate.breakdown,
    })))
}

async fn list_tips(
    State(state): State<AppState>,
    query: Result<Query<TipsQuery>, QueryRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(params) = query?;
    let limit = check_limit("limit", params.limit.unwrap_or(DEFAULT_TIPS_LIMIT))?;

    let tips: Vec<_> = match params.category.as_deref() {
        Some(category) if !category.is_empty() => state
            .advisor
            .get_by_category(category)
            .into_iter()
            .take(limit)
            .collect(),
        _ => state.advisor.get_all().iter().take(limit).collect(),
    };

    Ok(Json(serde_json::json!({
        "count": tips.len(),
        "tips": tips,
    })))
}

async fn recommend_tips(
    State(state): State<AppState>,
    query: Result<Query<RecommendQuery>, QueryRejection>,
    payload: Result<Json<LifestyleInput>, JsonRejection>,
) -> Result<Json<serde_json::Value>, AppError> {
    let Query(params) = query?;
    let top_n = check_limit("top_n", params.top_n.unwrap_or(DEFAULT_TOP_N))?;
    let Json(input) = payload?;
    validate_lifestyle(&input)?;

    let estimate = state.estimator.estimate(&input);
    let tips = state.advisor.recommend(&estimate.breakdown, top_n);

    Ok(Json(serde_json::json!({
        "count": tips.len(),
        "tips": tips,
        "total_kg_co2_year": estimate.total_kg_co2_year,
        "breakdown": estimate.breakdown,
    })))
}

async fn dashboard_summary(State(state): State<AppState>) -> impl IntoResponse {
    let factors = &state.reference.factors;

    Json(serde_json::json!({
        "global_average_kg": factors.global_average_annual_kg,
        "target_kg": factors.target_annual_kg,
        "uk_average_kg": factors.uk_average_annual_kg,
        "us_average_kg": factors.us_average_annual_kg,
        "india_average_kg": factors.india_average_annual_kg,
        "category_labels": Category::ALL.map(Category::label),
        "category_colors": Category::ALL.map(Category::color),
        "tips_count": state.advisor.len(),
    }))
}

// ============================================================================
// Request Types and Validation
// ============================================================================

const DEFAULT_TIPS_LIMIT: usize = 10;
const DEFAULT_TOP_N: usize = 5;
const MAX_TIPS: usize = 50;

#[derive(serde::Deserialize, Debug)]
struct PredictRequest {
    /// °C, 0-60
    temperature: f64,
    /// Relative humidity %, 0-100
    humidity: f64,
    /// Hour of day, 0-23
    hour: u32,
}

impl PredictRequest {
    fn validate(&self) -> Result<(), ValidationError> {
        check_range("temperature", self.temperature, 0.0, 60.0)?;
        check_range("humidity", self.humidity, 0.0, 100.0)?;
        if self.hour > 23 {
            return Err(ValidationError::new("hour", "must be between 0 and 23"));
        }
        Ok(())
    }
}

#[derive(serde::Deserialize, Debug)]
struct TipsQuery {
    category: Option<String>,
    limit: Option<usize>,
}

#[derive(serde::Deserialize, Debug)]
struct RecommendQuery {
    top_n: Option<usize>,
}

/// Range checks on every numeric lifestyle field (counts are unsigned already)
fn validate_lifestyle(input: &LifestyleInput) -> Result<(), ValidationError> {
    check_non_negative("km_per_week", input.km_per_week)?;
    check_non_negative("electricity_kwh_month", input.electricity_kwh_month)?;
    check_non_negative("natural_gas_kwh_month", input.natural_gas_kwh_month)?;
    check_range("waste_recycling_pct", input.waste_recycling_pct, 0.0, 100.0)
}

fn check_non_negative(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ValidationError::new(field, "must be a finite number >= 0"))
    }
}

fn check_range(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ValidationError::new(field, format!("must be between {} and {}", min, max)))
    }
}

fn check_limit(field: &'static str, value: usize) -> Result<usize, ValidationError> {
    if (1..=MAX_TIPS).contains(&value) {
        Ok(value)
    } else {
        Err(ValidationError::new(field, format!("must be between 1 and {}", MAX_TIPS)))
    }
}

// ============================================================================
// Error Handling
// ============================================================================

#[derive(Debug)]
enum AppError {
    Validation(String),
    ServiceUnavailable(String),
    Internal(String),
}

impl From<ValidationError> for AppError {
    fn from(e: ValidationError) -> Self {
        AppError::Validation(e.to_string())
    }
}

impl From<JsonRejection> for AppError {
    fn from(e: JsonRejection) -> Self {
        AppError::Validation(e.body_text())
    }
}

impl From<QueryRejection> for AppError {
    fn from(e: QueryRejection) -> Self {
        AppError::Validation(e.body_text())
    }
}

impl From<PredictError> for AppError {
    fn from(e: PredictError) -> Self {
        match e {
            PredictError::ServiceUnavailable(_) => {
                tracing::warn!("{}", e);
                AppError::ServiceUnavailable(e.to_string())
            }
            PredictError::Internal(_) => {
                tracing::error!("{}", e);
                AppError::Internal(e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::Validation(msg) => (StatusCode::UNPROCESSABLE_ENTITY, msg),
            AppError::ServiceUnavailable(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg),
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}
