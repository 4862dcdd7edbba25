//! Integration tests for SRQ-29 assessment endpoints.

mod common;

use axum::http::StatusCode;
use serde_json::json;

use common::{app, call, ALICE, BOB};
use curhatin::adapters::ai::MockAIProvider;

fn answers_with_yes(count: usize) -> Vec<bool> {
    (0..29).map(|i| i < count).collect()
}

#[tokio::test]
async fn submit_scores_and_stores_assessment() {
    let app = app(MockAIProvider::new());

    let (status, json) = call(
        &app,
        "POST",
        "/api/assessments",
        ALICE,
        Some(json!({ "answers": answers_with_yes(7) })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED, "{}", json);
    assert_eq!(json["score"], 7);
    assert_eq!(json["interpretation"], "moderate");
    assert!(json["summary"].as_str().is_some_and(|s| !s.is_empty()));
    assert_eq!(json["answers"].as_array().unwrap().len(), 29);

    let (status, list) = call(&app, "GET", "/api/assessments", ALICE, None).await;
    assert_eq!(status, StatusCode::OK);
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0]["id"], json["id"]);
}

#[tokio::test]
async fn band_boundaries() {
    let app = app(MockAIProvider::new());
    let cases = [
        (0, "low"),
        (5, "low"),
        (6, "moderate"),
        (12, "moderate"),
        (13, "high"),
        (20, "high"),
        (21, "very high"),
        (29, "very high"),
    ];

    for (yes, band) in cases {
        let (status, json) = call(
            &app,
            "POST",
            "/api/assessments",
            ALICE,
            Some(json!({ "answers": answers_with_yes(yes) })),
        )
        .await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(json["score"], yes);
        assert_eq!(json["interpretation"], band, "score {}", yes);
    }
}

#[tokio::test]
async fn malformed_answers_are_rejected_and_not_stored() {
    let app = app(MockAIProvider::new());
    let too_few: Vec<bool> = answers_with_yes(3).into_iter().take(28).collect();
    let too_many = vec![true; 30];
    let bodies = [
        json!({ "answers": too_few }),
        json!({ "answers": too_many }),
        json!({ "answers": "yes" }),
        json!({ "answers": [1, 0, 1] }),
        json!({}),
    ];

    for body in bodies {
        let (status, json) = call(&app, "POST", "/api/assessments", ALICE, Some(body.clone())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} -> {}", body, json);
        assert_eq!(json["code"], "VALIDATION_FAILED");
    }

    let (_, list) = call(&app, "GET", "/api/assessments", ALICE, None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn history_is_private() {
    let app = app(MockAIProvider::new());
    call(
        &app,
        "POST",
        "/api/assessments",
        ALICE,
        Some(json!({ "answers": answers_with_yes(2) })),
    )
    .await;

    let (_, list) = call(&app, "GET", "/api/assessments", BOB, None).await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn questions_lists_all_statements() {
    let app = app(MockAIProvider::new());
    let (status, json) = call(&app, "GET", "/api/assessments/questions", ALICE, None).await;

    assert_eq!(status, StatusCode::OK);
    let questions = json.as_array().unwrap();
    assert_eq!(questions.len(), 29);
    assert_eq!(questions[0]["number"], 1);
    assert_eq!(questions[28]["number"], 29);
}
