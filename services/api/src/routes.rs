use crate::infra::{behavioral_profile, AppState};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use chrono::{DateTime, Utc};
use finwell::clusters::BehavioralProfile;
use finwell::error::AppError;
use finwell::scoring::{FinancialSnapshot, ScoreComponent, WellnessAssessment, WellnessLevel};
use serde::{Deserialize, Serialize};
use serde_json::json;

/// The five raw figures the original intake form collects.
#[derive(Debug, Deserialize)]
pub(crate) struct WellnessScoreRequest {
    pub(crate) monthly_income: f64,
    pub(crate) monthly_spend: f64,
    pub(crate) total_debt: f64,
    pub(crate) savings_amount: f64,
    pub(crate) emergency_fund: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct KeyMetricsView {
    pub(crate) savings_percent: f64,
    pub(crate) expense_to_income: f64,
    pub(crate) debt_to_income: f64,
    pub(crate) months_emergency_cover: f64,
    pub(crate) annual_income: f64,
}

#[derive(Debug, Serialize)]
pub(crate) struct WellnessScoreResponse {
    pub(crate) generated_at: DateTime<Utc>,
    pub(crate) score: f64,
    pub(crate) level: WellnessLevel,
    pub(crate) level_label: String,
    pub(crate) reasons: Vec<String>,
    pub(crate) components: Vec<ScoreComponent>,
    pub(crate) metrics: KeyMetricsView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) behavioral_profile: Option<BehavioralProfile>,
    pub(crate) guidance: Vec<String>,
}

pub(crate) fn app_router() -> axum::Router {
    axum::Router::new()
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/wellness/score",
            axum::routing::post(wellness_score_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    // Pairs with the Release store in server::run once the listener is bound.
    let ready = state.readiness.load(std::sync::atomic::Ordering::Acquire);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn wellness_score_endpoint(
    Extension(state): Extension<AppState>,
    Json(payload): Json<WellnessScoreRequest>,
) -> Result<Json<WellnessScoreResponse>, AppError> {
    let WellnessScoreRequest {
        monthly_income,
        monthly_spend,
        total_debt,
        savings_amount,
        emergency_fund,
    } = payload;

    let snapshot = FinancialSnapshot::new(
        monthly_income,
        monthly_spend,
        total_debt,
        savings_amount,
        emergency_fund,
    )?;

    let assessment = WellnessAssessment::for_snapshot(&snapshot);
    let behavioral_profile = behavioral_profile(
        state.classifier.as_deref(),
        &snapshot,
        &assessment.ratios,
    );

    Ok(Json(WellnessScoreResponse {
        generated_at: Utc::now(),
        score: assessment.score,
        level: assessment.level,
        level_label: assessment.level.label().to_string(),
        guidance: assessment
            .level
            .guidance()
            .iter()
            .map(|line| line.to_string())
            .collect(),
        reasons: assessment.reasons,
        components: assessment.components,
        metrics: KeyMetricsView {
            savings_percent: assessment.ratios.savings_percent,
            expense_to_income: assessment.ratios.expense_to_income,
            debt_to_income: assessment.ratios.debt_to_income,
            months_emergency_cover: assessment.ratios.months_emergency_cover,
            annual_income: snapshot.annual_income(),
        },
        behavioral_profile,
    }))
}
