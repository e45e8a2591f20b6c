//! API routes for the Verdict endpoints

use axum::{
    extract::{rejection::JsonRejection, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use utoipa::OpenApi;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use verdict_core::{DebateRequest, Message, Verdict};

/// Health check response
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Health check handler (no model invocation)
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service health", body = HealthResponse)
    )
)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// One per-team message in an evaluation request
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct ArgumentMessage {
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Team side, `"A"` or `"B"`
    pub team: String,
    pub message: String,
}

/// Debate evaluation request
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct EvaluateRequest {
    #[serde(rename = "DebateId")]
    pub debate_id: String,
    pub topic: String,
    pub arguments: Vec<ArgumentMessage>,
}

impl From<EvaluateRequest> for DebateRequest {
    fn from(req: EvaluateRequest) -> Self {
        DebateRequest {
            debate_id: req.debate_id,
            topic: req.topic,
            messages: req
                .arguments
                .into_iter()
                .map(|a| Message {
                    author_id: a.user_id,
                    team: a.team,
                    text: a.message,
                })
                .collect(),
        }
    }
}

/// Debate evaluation response
#[derive(Debug, Serialize, utoipa::ToSchema)]
pub struct VerdictResponse {
    #[serde(rename = "DebateId")]
    pub debate_id: String,
    pub topic: String,
    pub score_team_a: f32,
    pub score_team_b: f32,
    /// `"Team A"` or `"Team B"`
    pub winner: String,
    pub justification: String,
}

impl From<Verdict> for VerdictResponse {
    fn from(verdict: Verdict) -> Self {
        VerdictResponse {
            debate_id: verdict.debate_id,
            topic: verdict.topic,
            score_team_a: verdict.score_team_a,
            score_team_b: verdict.score_team_b,
            winner: verdict.winner.to_string(),
            justification: verdict.justification,
        }
    }
}

/// Evaluate a debate: aggregate both sides, score them, pick the winner
/// and generate the justification.
#[utoipa::path(
    post,
    path = "/evaluate",
    request_body = EvaluateRequest,
    responses(
        (status = 200, description = "Debate judged", body = VerdictResponse),
        (status = 400, description = "Malformed request body"),
        (status = 422, description = "Validation failure"),
        (status = 500, description = "Inference failure")
    )
)]
pub async fn evaluate(
    State(state): State<AppState>,
    payload: Result<Json<EvaluateRequest>, JsonRejection>,
) -> ApiResult<Json<VerdictResponse>> {
    // Schema/type errors are rejected before the judge runs.
    let Json(request) = payload.map_err(|rejection| ApiError::BadRequest(rejection.body_text()))?;

    let debate: DebateRequest = request.into();
    tracing::info!(
        debate_id = %debate.debate_id,
        messages = debate.messages.len(),
        "evaluating debate"
    );

    let verdict = state.judge().judge(&debate).await?;
    Ok(Json(verdict.into()))
}

#[derive(OpenApi)]
#[openapi(
    paths(health, evaluate),
    components(schemas(
        HealthResponse,
        ArgumentMessage,
        EvaluateRequest,
        VerdictResponse,
    ))
)]
pub struct ApiDoc;

/// Build the API router
pub fn api_router(state: AppState) -> Router {
    use utoipa_swagger_ui::SwaggerUi;

    Router::new()
        // Documentation endpoints
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Public endpoints
        .route("/health", get(health))
        .route("/evaluate", post(evaluate))
        // State
        .with_state(state)
}
