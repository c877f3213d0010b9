use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request},
};
use tempfile::tempdir;
use tower::ServiceExt;

use markethub_server::{api::app_router, build_state, config::Config};

fn test_config(db_path: String) -> Config {
    Config {
        listen_addr: "127.0.0.1:0".parse().unwrap(),
        db_path,
        cors_allow: vec!["*".to_string()],
        request_timeout: std::time::Duration::from_secs(5),
        auth: None,
    }
}

async fn build_test_router(tmp: &tempfile::TempDir) -> axum::Router {
    let config = test_config(tmp.path().join("test.db").to_string_lossy().into_owned());
    let state = build_state(&config).await.unwrap();
    app_router(state, &config)
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn put_settings(body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(Method::PUT)
        .uri("/api/v1/settings")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_settings() -> Request<Body> {
    Request::builder()
        .uri("/api/v1/settings")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn healthz_works() {
    let tmp = tempdir().unwrap();
    let app = build_test_router(&tmp).await;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/v1/healthz")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn get_settings_on_empty_store_returns_default() {
    let tmp = tempdir().unwrap();
    let app = build_test_router(&tmp).await;

    let response = app.clone().oneshot(get_settings()).await.unwrap();
    assert_eq!(response.status(), 200);
    let json = body_json(response).await;
    assert_eq!(json["earnWithUsLink"], "https://play.google.com/store");

    // A second read returns the same record.
    let again = body_json(app.oneshot(get_settings()).await.unwrap()).await;
    assert_eq!(again, json);
}

#[tokio::test]
async fn put_then_get_round_trips_the_new_link() {
    let tmp = tempdir().unwrap();
    let app = build_test_router(&tmp).await;

    let response = app
        .clone()
        .oneshot(put_settings(serde_json::json!({
            "earnWithUsLink": "https://example.com/earn"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let json = body_json(response).await;
    assert_eq!(json["earnWithUsLink"], "https://example.com/earn");

    let read_back = body_json(app.oneshot(get_settings()).await.unwrap()).await;
    assert_eq!(read_back["earnWithUsLink"], "https://example.com/earn");
}

#[tokio::test]
async fn empty_put_keeps_the_existing_link() {
    let tmp = tempdir().unwrap();
    let app = build_test_router(&tmp).await;

    let response = app
        .clone()
        .oneshot(put_settings(serde_json::json!({
            "earnWithUsLink": "https://example.com/earn"
        })))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);

    let response = app
        .clone()
        .oneshot(put_settings(serde_json::json!({ "earnWithUsLink": "" })))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let json = body_json(response).await;
    assert_eq!(json["earnWithUsLink"], "https://example.com/earn");

    let read_back = body_json(app.oneshot(get_settings()).await.unwrap()).await;
    assert_eq!(read_back["earnWithUsLink"], "https://example.com/earn");
}

#[tokio::test]
async fn use_default_policy_resets_the_link() {
    let tmp = tempdir().unwrap();
    let app = build_test_router(&tmp).await;

    app.clone()
        .oneshot(put_settings(serde_json::json!({
            "earnWithUsLink": "https://example.com/earn"
        })))
        .await
        .unwrap();

    let response = app
        .oneshot(put_settings(serde_json::json!({ "onEmpty": "useDefault" })))
        .await
        .unwrap();
    assert_eq!(response.status(), 200);
    let json = body_json(response).await;
    assert_eq!(json["earnWithUsLink"], "https://play.google.com/store");
}
