use axum::{
    body::Body,
    http::{Request, StatusCode},
    response::Response,
};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`
use verdict_api::{routes::api_router, state::AppState};
use verdict_core::{DebateJudge, UnknownTeamPolicy};
use verdict_model::{MockGenerator, MockScorer};

fn setup_state(scores: Vec<f32>, policy: UnknownTeamPolicy) -> AppState {
    let judge = DebateJudge::new(
        Arc::new(MockScorer::new(scores)),
        Arc::new(MockGenerator::constant("Team A presented stronger evidence.")),
        policy,
    );
    AppState::new(Arc::new(judge))
}

fn evaluate_request(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/evaluate")
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn json_body(response: Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn health_check() {
    let router = api_router(setup_state(vec![0.5], UnknownTeamPolicy::Drop));

    let req = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["status"], "healthy");
    assert!(body["version"].is_string());
}

#[tokio::test]
async fn evaluate_happy_path() {
    let router = api_router(setup_state(vec![0.8, 0.3], UnknownTeamPolicy::Drop));

    let req = evaluate_request(serde_json::json!({
        "DebateId": "D1",
        "topic": "AI ethics",
        "arguments": [
            {"userId": "u1", "team": "A", "message": "AI improves efficiency"},
            {"userId": "u2", "team": "B", "message": "AI risks job loss"}
        ]
    }));

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    let obj = body.as_object().unwrap();
    assert_eq!(obj.len(), 6);
    assert_eq!(body["DebateId"], "D1");
    assert_eq!(body["topic"], "AI ethics");
    assert_eq!(body["score_team_a"], 0.8);
    assert_eq!(body["score_team_b"], 0.3);
    assert_eq!(body["winner"], "Team A");
    assert_eq!(
        body["justification"],
        "Team A presented stronger evidence."
    );
}

#[tokio::test]
async fn evaluate_tie_goes_to_team_b() {
    let router = api_router(setup_state(vec![0.5, 0.5], UnknownTeamPolicy::Drop));

    let req = evaluate_request(serde_json::json!({
        "DebateId": "D2",
        "topic": "ties",
        "arguments": [
            {"userId": "u1", "team": "A", "message": "same"},
            {"userId": "u2", "team": "B", "message": "same"}
        ]
    }));

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["winner"], "Team B");
}

#[tokio::test]
async fn evaluate_rejects_malformed_body() {
    let router = api_router(setup_state(vec![0.5], UnknownTeamPolicy::Drop));

    // `arguments` must be a list, not a string.
    let req = evaluate_request(serde_json::json!({
        "DebateId": "D3",
        "topic": "bad shape",
        "arguments": "not a list"
    }));

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn evaluate_rejects_missing_fields() {
    let router = api_router(setup_state(vec![0.5], UnknownTeamPolicy::Drop));

    let req = evaluate_request(serde_json::json!({ "topic": "no id" }));

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_team_dropped_by_default() {
    let router = api_router(setup_state(vec![0.9, 0.1], UnknownTeamPolicy::Drop));

    let req = evaluate_request(serde_json::json!({
        "DebateId": "D4",
        "topic": "leniency",
        "arguments": [
            {"userId": "u1", "team": "A", "message": "kept"},
            {"userId": "u2", "team": "C", "message": "silently dropped"}
        ]
    }));

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await["winner"], "Team A");
}

#[tokio::test]
async fn unknown_team_rejected_in_strict_mode() {
    let router = api_router(setup_state(vec![0.9, 0.1], UnknownTeamPolicy::Reject));

    let req = evaluate_request(serde_json::json!({
        "DebateId": "D5",
        "topic": "strictness",
        "arguments": [
            {"userId": "u1", "team": "A", "message": "fine"},
            {"userId": "u2", "team": "C", "message": "invalid side"}
        ]
    }));

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let body = json_body(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    let message = body["error"]["message"].as_str().unwrap();
    assert!(message.contains("unknown team"));
    assert!(message.contains('C'));
}

#[tokio::test]
async fn empty_side_is_judged_not_rejected() {
    let router = api_router(setup_state(vec![0.0, 0.7], UnknownTeamPolicy::Drop));

    let req = evaluate_request(serde_json::json!({
        "DebateId": "D6",
        "topic": "one-sided",
        "arguments": [
            {"userId": "u2", "team": "B", "message": "unopposed"}
        ]
    }));

    let response = router.oneshot(req).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = json_body(response).await;
    assert_eq!(body["score_team_a"], 0.0);
    assert_eq!(body["winner"], "Team B");
}
