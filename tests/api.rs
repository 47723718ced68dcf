//! End-to-end tests for the gateway HTTP surface and the client-side batch
//! orchestration, with the provider stubbed by a local server.

use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};

use fashnova::history::HistoryStore;
use fashnova::models::OutfitSpec;
use fashnova::openai::OpenAiClient;
use fashnova::orchestrator::{run_batch, GatewayClient, BATCH_SIZE};
use fashnova::routes::{app, AppState};

async fn spawn(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

async fn spawn_gateway(upstream_base: &str) -> String {
    let client = OpenAiClient::with_base_url("test-key".to_string(), upstream_base.to_string());
    spawn(app(AppState::with_client(client))).await
}

fn happy_upstream() -> Router {
    Router::new()
        .route(
            "/v1/images/generations",
            post(|| async {
                Json(json!({ "data": [ { "url": "https://img.example/generated.png" } ] }))
            }),
        )
        .route(
            "/v1/chat/completions",
            post(|| async {
                Json(json!({ "choices": [ { "message": { "content": "hello" } } ] }))
            }),
        )
}

fn failing_upstream() -> Router {
    let fail = || async {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": { "message": "quota exceeded" } })),
        )
    };
    Router::new()
        .route("/v1/images/generations", post(fail))
        .route("/v1/chat/completions", post(fail))
}

fn outfit_body() -> Value {
    json!({
        "prompt": "a flowing summer dress",
        "mood": "Romantic",
        "fabric": "Chiffon",
        "season": "Summer",
        "accessories": ["sun hat"]
    })
}

#[tokio::test]
async fn chat_without_message_returns_400() {
    let upstream = spawn(happy_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let res = reqwest::Client::new()
        .post(format!("{gateway}/api/chat"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Message is required");
}

#[tokio::test]
async fn chat_relays_upstream_reply() {
    let upstream = spawn(happy_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let res = reqwest::Client::new()
        .post(format!("{gateway}/api/chat"))
        .json(&json!({ "message": "hi" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body, json!({ "reply": "hello" }));
}

#[tokio::test]
async fn chat_with_empty_reply_is_upstream_error() {
    let upstream = spawn(Router::new().route(
        "/v1/chat/completions",
        post(|| async { Json(json!({ "choices": [] })) }),
    ))
    .await;
    let gateway = spawn_gateway(&upstream).await;

    let res = reqwest::Client::new()
        .post(format!("{gateway}/api/chat"))
        .json(&json!({ "message": "hi" }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "No reply from OpenAI");
}

#[tokio::test]
async fn generate_returns_decorated_suggestion() {
    let upstream = spawn(happy_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let res = reqwest::Client::new()
        .post(format!("{gateway}/api/generate"))
        .json(&outfit_body())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body: Value = res.json().await.unwrap();
    let suggestion = &body["suggestions"][0];
    assert_eq!(suggestion["imageUrl"], "https://img.example/generated.png");

    let specs = &suggestion["specs"];
    assert_eq!(specs["mood"], "Romantic");
    assert!(specs["description"].as_str().unwrap().contains("Romantic"));
    assert!(!specs["quirkyCaption"].as_str().unwrap().is_empty());
    assert!(!specs["detailedBreakdown"]["seasonalContext"]
        .as_str()
        .unwrap()
        .is_empty());
    assert!(!specs["advancedStyling"]["fabricTip"]
        .as_str()
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn generate_with_failing_upstream_returns_500_without_suggestions() {
    let upstream = spawn(failing_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let res = reqwest::Client::new()
        .post(format!("{gateway}/api/generate"))
        .json(&outfit_body())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "OpenAI API error");
    assert!(body["details"].as_str().unwrap().contains("quota exceeded"));
    assert!(body.get("suggestions").is_none());
}

#[tokio::test]
async fn generate_with_empty_upstream_payload_is_empty_result() {
    let upstream = spawn(Router::new().route(
        "/v1/images/generations",
        post(|| async { Json(json!({ "data": [ {} ] })) }),
    ))
    .await;
    let gateway = spawn_gateway(&upstream).await;

    let res = reqwest::Client::new()
        .post(format!("{gateway}/api/generate"))
        .json(&outfit_body())
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "No image generated");
}

#[tokio::test]
async fn missing_credential_is_a_configuration_error() {
    let gateway = spawn(app(AppState::new(None))).await;
    let client = reqwest::Client::new();

    for (path, body) in [
        ("/api/generate", outfit_body()),
        ("/api/chat", json!({ "message": "hi" })),
    ] {
        let res = client
            .post(format!("{gateway}{path}"))
            .json(&body)
            .send()
            .await
            .unwrap();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "API key missing");
    }
}

#[tokio::test]
async fn download_image_proxies_bytes_as_attachment() {
    let upstream = spawn(
        Router::new().route("/image.jpg", get(|| async { b"fake-jpeg-bytes".to_vec() })),
    )
    .await;
    let gateway = spawn_gateway(&upstream).await;

    let res = reqwest::Client::new()
        .post(format!("{gateway}/api/download-image"))
        .json(&json!({
            "imageUrl": format!("{upstream}/image.jpg"),
            "filename": "look.jpg"
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let disposition = res
        .headers()
        .get("content-disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    assert_eq!(disposition, "attachment; filename=\"look.jpg\"");
    assert_eq!(res.bytes().await.unwrap().as_ref(), b"fake-jpeg-bytes");
}

#[tokio::test]
async fn download_image_without_url_returns_400() {
    let upstream = spawn(happy_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let res = reqwest::Client::new()
        .post(format!("{gateway}/api/download-image"))
        .json(&json!({}))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Image URL is required");
}

#[tokio::test]
async fn download_image_fetch_failure_returns_500() {
    let upstream = spawn(happy_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let res = reqwest::Client::new()
        .post(format!("{gateway}/api/download-image"))
        .json(&json!({ "imageUrl": format!("{upstream}/does-not-exist.jpg") }))
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = res.json().await.unwrap();
    assert_eq!(body["error"], "Failed to download image");
}

#[tokio::test]
async fn orchestrated_batch_persists_three_designs_with_one_best_pick() {
    let upstream = spawn(happy_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let dir = tempfile::tempdir().unwrap();
    let history = HistoryStore::open(dir.path()).unwrap();
    let service = GatewayClient::new(gateway);

    let spec: OutfitSpec = serde_json::from_value(outfit_body()).unwrap();
    let designs = run_batch(&service, &history, &spec).await.unwrap();

    assert_eq!(designs.len(), BATCH_SIZE);
    assert!(designs[0].is_best_pick);
    assert_eq!(designs.iter().filter(|d| d.is_best_pick).count(), 1);
    assert_eq!(history.len(), BATCH_SIZE);
    for design in history.list() {
        assert_eq!(design.image_url, "https://img.example/generated.png");
        assert_eq!(design.specs.accessories, vec!["sun hat".to_string()]);
    }
}

#[tokio::test]
async fn orchestrated_batch_against_dead_gateway_fails_and_persists_nothing() {
    let upstream = spawn(failing_upstream()).await;
    let gateway = spawn_gateway(&upstream).await;

    let dir = tempfile::tempdir().unwrap();
    let history = HistoryStore::open(dir.path()).unwrap();
    let service = GatewayClient::new(gateway);

    let spec: OutfitSpec = serde_json::from_value(outfit_body()).unwrap();
    let result = run_batch(&service, &history, &spec).await;
    assert!(result.is_err());
    assert!(history.is_empty());
}
