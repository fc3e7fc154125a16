use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde::Deserialize;
use tracing::info;

use super::domain::SellerApplication;
use super::evaluation::{calculate_application_completeness, ApplicationScorer};
use super::feedback::generate_rejection_feedback;
use crate::eco::ShopEcoProfile;

/// Body for the feedback endpoint; the score defaults to the profile's application score.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FeedbackRequest {
    pub eco_profile: ShopEcoProfile,
    pub score: Option<u8>,
}

/// Routes scoring seller applications and drafting rejection feedback.
pub fn application_router(scorer: Arc<ApplicationScorer>) -> Router {
    Router::new()
        .route("/api/v1/applications/score", post(score_handler))
        .route("/api/v1/applications/feedback", post(feedback_handler))
        .with_state(scorer)
}

pub(crate) async fn score_handler(
    State(scorer): State<Arc<ApplicationScorer>>,
    axum::Json(application): axum::Json<SellerApplication>,
) -> Response {
    let score = scorer.score(&application);
    info!(
        score = score.completeness.score,
        tier = score.tier.label(),
        review_time = score.estimated_review_time.label(),
        "seller application scored"
    );
    (StatusCode::OK, axum::Json(score)).into_response()
}

pub(crate) async fn feedback_handler(axum::Json(request): axum::Json<FeedbackRequest>) -> Response {
    let score = request
        .score
        .unwrap_or_else(|| calculate_application_completeness(&request.eco_profile).score);
    let feedback = generate_rejection_feedback(&request.eco_profile, score);
    (StatusCode::OK, axum::Json(feedback)).into_response()
}
