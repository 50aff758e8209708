// tests/e2e_smoke.rs

use http::StatusCode;
use serde_json::{json, Value};
use shuttle_axum::axum::{
    body::{to_bytes, Body},
    http::Request,
    Router,
};
use tower::ServiceExt; // for `oneshot` (tower 0.5 with features=["util"])

use company_enricher::api;

async fn post_enrich(app: Router, body: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri("/api/enrich/")
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    let v: Value = serde_json::from_slice(&bytes).unwrap();
    (status, v)
}

#[tokio::test]
async fn smoke_healthtech_domain() {
    let app = api::router();

    let (status, v) = post_enrich(app, r#"{"url": "acmehealth.io"}"#).await;
    assert_eq!(status, StatusCode::OK);

    let summary = v["summary"].as_str().unwrap();
    assert!(
        summary.starts_with("Digital health platform"),
        "summary: {summary}"
    );
    let keywords = v["keywords"].as_array().unwrap();
    assert!(
        keywords.iter().any(|k| k == "telemedicine"),
        "keywords: {keywords:?}"
    );
}

#[tokio::test]
async fn smoke_default_saas_fallthrough() {
    let app = api::router();

    let (status, v) = post_enrich(app, r#"{"url": "randomstartup.io"}"#).await;
    assert_eq!(status, StatusCode::OK);

    let keywords = v["keywords"].as_array().unwrap();
    assert!(keywords.iter().any(|k| k == "SaaS"), "keywords: {keywords:?}");
}

#[tokio::test]
async fn smoke_ai_precedence_over_fintech() {
    // "myaibank.com" matches both the AI and Fintech substrings; the AI rule
    // is evaluated first.
    let app = api::router();

    let (status, v) = post_enrich(app, r#"{"url": "myaibank.com"}"#).await;
    assert_eq!(status, StatusCode::OK);

    let keywords = v["keywords"].as_array().unwrap();
    assert!(
        keywords.iter().any(|k| k == "machine learning"),
        "keywords: {keywords:?}"
    );
    assert!(
        !keywords.iter().any(|k| k == "fintech"),
        "keywords: {keywords:?}"
    );
}

#[tokio::test]
async fn smoke_malformed_body_is_invalid_json() {
    let app = api::router();

    let (status, v) = post_enrich(app, "not a json body").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(v, json!({ "error": "Invalid JSON" }));
}

#[tokio::test]
async fn smoke_repeated_calls_agree_on_everything_but_timestamps() {
    let (s1, a) = post_enrich(api::router(), r#"{"url": "https://finbase.io"}"#).await;
    let (s2, b) = post_enrich(api::router(), r#"{"url": "https://finbase.io"}"#).await;
    assert_eq!(s1, StatusCode::OK);
    assert_eq!(s2, StatusCode::OK);

    assert_eq!(a["summary"], b["summary"]);
    assert_eq!(a["bullets"], b["bullets"]);
    assert_eq!(a["keywords"], b["keywords"]);
    assert_eq!(a["signals"], b["signals"]);

    let urls = |v: &Value| -> Vec<String> {
        v["sources"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["url"].as_str().unwrap().to_string())
            .collect()
    };
    assert_eq!(urls(&a), urls(&b));
}
