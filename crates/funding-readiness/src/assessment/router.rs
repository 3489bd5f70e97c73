use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use super::domain::Profile;
use super::guidance::guidance_for;
use super::questions::{QuestionCatalog, QuestionView};
use super::service::{AssessmentService, AssessmentServiceError};

/// Request body for `POST /api/v1/assessments`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessmentRequest {
    #[serde(default)]
    pub answers: BTreeMap<u32, i64>,
}

/// Router builder exposing the checklist scoring endpoints.
pub fn assessment_router(service: Arc<AssessmentService>) -> Router {
    Router::new()
        .route("/api/v1/assessments", post(assess_handler))
        .route("/api/v1/questions", get(questions_handler))
        .route("/api/v1/profiles/:profile", get(profile_handler))
        .with_state(service)
}

pub(crate) async fn assess_handler(
    State(service): State<Arc<AssessmentService>>,
    Json(request): Json<AssessmentRequest>,
) -> Response {
    match service.assess(&request.answers) {
        Ok(report) => {
            info!(
                profile = %report.result.profile,
                overall_percent = report.result.overall_percent,
                answered = report.answered,
                rule = ?report.rule,
                "assessment scored"
            );
            (StatusCode::OK, Json(report)).into_response()
        }
        Err(AssessmentServiceError::Validation(error)) => {
            warn!(%error, "assessment rejected");
            let payload = json!({ "error": error.to_string() });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn questions_handler() -> Json<Vec<QuestionView>> {
    Json(QuestionCatalog::standard().views())
}

pub(crate) async fn profile_handler(Path(profile): Path<String>) -> Response {
    match Profile::from_label(&profile) {
        Some(profile) => (StatusCode::OK, Json(guidance_for(profile))).into_response(),
        None => {
            let payload = json!({ "error": format!("unknown profile '{profile}'") });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
    }
}
