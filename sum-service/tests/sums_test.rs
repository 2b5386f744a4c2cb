//! End-to-end tests against a running server.

mod common;

use common::TestApp;
use reqwest::StatusCode;
use serde_json::{json, Value};

#[tokio::test]
async fn request_param_given_ten_and_fifteen_returns_twenty_five() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/sums/requestParam.postSum?numberOne=10&numberTwo=15")
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "sum": 25 }));
}

#[tokio::test]
async fn path_variable_given_five_and_ten_returns_fifteen() {
    let app = TestApp::spawn().await;

    let response = app.post("/sums/pathVariable.postSum/5/10").await;

    assert_eq!(response.status(), StatusCode::OK);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "sum": 15 }));
}

#[tokio::test]
async fn request_body_given_eleven_and_nine_returns_twenty() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/sums/requestBody.postSum",
            r#"{"numberOne":11,"numberTwo":9}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("application/json")));
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({ "sum": 20 }));
}

#[tokio::test]
async fn request_param_with_letter_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app
        .post("/sums/requestParam.postSum?numberOne=500&numberTwo=a")
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn path_variable_with_letter_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app.post("/sums/pathVariable.postSum/100/H").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn request_body_with_text_field_is_bad_request() {
    let app = TestApp::spawn().await;

    let response = app
        .post_json(
            "/sums/requestBody.postSum",
            r#"{"numberOne":1000,"numberTwo":"K"}"#,
        )
        .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["error"], "Bad request");
}
