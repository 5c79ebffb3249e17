use crate::infra::AppState;
use axum::extract::rejection::JsonRejection;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use lions_odds::error::AppError;
use lions_odds::estimator::{
    EstimationResult, FactorEntry, SubmissionProfile, WinProbabilityEstimator,
    PROBABILITY_CEILING,
};
use serde::Serialize;
use serde_json::json;
use tracing::info;

#[derive(Debug, Serialize)]
pub(crate) struct EstimateResponse {
    pub(crate) profile: SubmissionProfile,
    pub(crate) probability_percent: String,
    pub(crate) comparative_summary: String,
    #[serde(flatten)]
    pub(crate) estimate: EstimationResult,
}

#[derive(Debug, Serialize)]
pub(crate) struct FactorsResponse {
    pub(crate) base_rate: f64,
    pub(crate) probability_ceiling: f64,
    pub(crate) factors: Vec<FactorEntry>,
}

/// Runs one estimate and logs the request and outcome the way both the CLI
/// and the HTTP handler report them.
pub(crate) fn estimate_profile(
    estimator: &WinProbabilityEstimator,
    profile: SubmissionProfile,
) -> Result<EstimateResponse, AppError> {
    info!(
        category = %profile.category,
        country = %profile.country,
        "calculating win probability"
    );

    let estimate = estimator.estimate(&profile)?;
    let probability_percent = estimate.probability_percent();

    info!(
        probability = %probability_percent,
        category = %profile.category,
        country = %profile.country,
        tips = estimate.tips.len(),
        "calculation completed"
    );

    Ok(EstimateResponse {
        profile,
        probability_percent,
        comparative_summary: estimate.comparative.summary(),
        estimate,
    })
}

pub(crate) fn factors_view(estimator: &WinProbabilityEstimator) -> FactorsResponse {
    let model = estimator.model();
    FactorsResponse {
        base_rate: model.base_rate(),
        probability_ceiling: PROBABILITY_CEILING,
        factors: model.tables().entries(),
    }
}

pub(crate) fn estimator_routes() -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/estimate", post(estimate_endpoint))
        .route("/api/v1/factors", get(factors_endpoint))
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
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

pub(crate) async fn estimate_endpoint(
    Extension(state): Extension<AppState>,
    payload: Result<Json<SubmissionProfile>, JsonRejection>,
) -> Result<Json<EstimateResponse>, AppError> {
    let Json(profile) = payload?;
    let response = estimate_profile(&state.estimator, profile)?;
    Ok(Json(response))
}

pub(crate) async fn factors_endpoint(
    Extension(state): Extension<AppState>,
) -> Json<FactorsResponse> {
    Json(factors_view(&state.estimator))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use lions_odds::estimator::{
        AgencySize, BrandProminence, BudgetLevel, CampaignResults, Category, Country,
        CreativeApproach,
    };
    use metrics_exporter_prometheus::PrometheusBuilder;
    use serde_json::Value;
    use std::sync::atomic::AtomicBool;
    use std::sync::Arc;
    use tower::ServiceExt;

    fn test_state(ready: bool) -> AppState {
        AppState {
            readiness: Arc::new(AtomicBool::new(ready)),
            metrics: Arc::new(PrometheusBuilder::new().build_recorder().handle()),
            estimator: Arc::new(WinProbabilityEstimator::default()),
        }
    }

    fn app(ready: bool) -> Router {
        estimator_routes().layer(Extension(test_state(ready)))
    }

    fn sample_profile() -> SubmissionProfile {
        SubmissionProfile {
            category: Category::Film,
            country: Country::Brazil,
            agency_size: AgencySize::SmallBoutique,
            previous_wins: 1,
            years_experience: 4,
            budget_level: BudgetLevel::AboveAverage,
            brand_prominence: BrandProminence::RegionalLeader,
            campaign_results: CampaignResults::Strong,
            creative_approach: CreativeApproach::FreshPerspective,
        }
    }

    async fn post_json(app: Router, uri: &str, body: String) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body))
            .expect("request builds");
        let response = app.oneshot(request).await.expect("router responds");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        (status, serde_json::from_slice(&bytes).expect("json body"))
    }

    #[tokio::test]
    async fn estimate_endpoint_returns_breakdown() {
        let Json(body) = estimate_endpoint(Extension(test_state(true)), Ok(Json(sample_profile())))
            .await
            .expect("estimate builds");

        assert!(body.estimate.probability > 0.0);
        assert_eq!(body.estimate.factors.len(), 9);
        assert_eq!(body.estimate.strength_profile.len(), 9);
        assert_eq!(body.estimate.category_entries, 2100);
        assert!(body.comparative_summary.starts_with("Your entry is"));
    }

    #[tokio::test]
    async fn estimate_route_accepts_display_labels() {
        let payload = json!({
            "category": "Social & Influencer",
            "country": "United States",
            "agency_size": "Large Network Agency",
            "previous_wins": 0,
            "years_experience": 1,
            "budget_level": "High (Top 10%)",
            "brand_prominence": "Global Leader",
            "campaign_results": "Exceptional (Measurable Impact)",
            "creative_approach": "Groundbreaking Innovation"
        });

        let (status, body) = post_json(app(true), "/api/v1/estimate", payload.to_string()).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["probability_percent"], "20.8%");
        assert_eq!(body["profile"]["category"], "Social & Influencer");
        assert_eq!(body["comparative"]["direction"], "more_likely");
        assert_eq!(body["factors"][0]["impact"], "Social & Influencer: 1.30x");
    }

    #[tokio::test]
    async fn estimate_route_rejects_unknown_options() {
        let mut payload = serde_json::to_value(sample_profile()).expect("profile serializes");
        payload["country"] = json!("Atlantis");

        let (status, body) = post_json(app(true), "/api/v1/estimate", payload.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let message = body["error"].as_str().expect("error message");
        assert!(message.contains("Atlantis"), "{message}");
    }

    #[tokio::test]
    async fn estimate_route_rejects_out_of_range_counts() {
        let mut payload = serde_json::to_value(sample_profile()).expect("profile serializes");
        payload["years_experience"] = json!(45);

        let (status, body) = post_json(app(true), "/api/v1/estimate", payload.to_string()).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(
            body["error"],
            "invalid years_experience '45': must be between 0 and 30"
        );
    }

    #[tokio::test]
    async fn factors_route_lists_every_option() {
        let request = Request::builder()
            .uri("/api/v1/factors")
            .body(Body::empty())
            .expect("request builds");
        let response = app(true).oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body reads");
        let body: Value = serde_json::from_slice(&bytes).expect("json body");
        assert_eq!(body["base_rate"], 0.03);
        assert_eq!(body["probability_ceiling"], 0.75);
        assert_eq!(body["factors"].as_array().map(Vec::len), Some(61));
    }

    #[tokio::test]
    async fn readiness_reflects_startup_state() {
        let request = Request::builder()
            .uri("/ready")
            .body(Body::empty())
            .expect("request builds");
        let response = app(false).oneshot(request).await.expect("router responds");
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }
}
