//! E2E Test: レシート登録から取得までの流れ

use crate::support::{extract_id, http::spawn_server};
use receipt_processor_common::config::ServerConfig;
use reqwest::StatusCode;

#[tokio::test]
async fn test_submit_then_fetch_receipt() {
    let server = spawn_server(ServerConfig::default()).await;
    let client = reqwest::Client::new();

    let response = client
        .post(server.url("/receipts/process"))
        .body(r#"{"receipts":"Target","total":"35.35"}"#)
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let created = response.text().await.unwrap();
    let id = extract_id(&created);

    let response = client
        .get(server.url(&format!("/receipts/{id}/points")))
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = response.text().await.unwrap();
    assert!(body.contains("Target"));
    assert!(body.contains("35.35"));

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_malformed_body_over_the_wire() {
    let server = spawn_server(ServerConfig::default()).await;

    let response = reqwest::Client::new()
        .post(server.url("/receipts/process"))
        .header("content-type", "application/json")
        .body("{broken")
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert!(response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("text/plain")));

    server.stop().await.unwrap();
}

#[tokio::test]
async fn test_auth_enabled_server_rejects_anonymous_requests() {
    let server = spawn_server(ServerConfig {
        require_auth: true,
        auth_token: "e2e".to_string(),
        ..ServerConfig::default()
    })
    .await;
    let client = reqwest::Client::new();

    let response = client.get(server.url("/users/42")).send().await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = client
        .get(server.url("/users/42"))
        .bearer_auth("e2e")
        .send()
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.text().await.unwrap(), "User ID: 42");

    server.stop().await.unwrap();
}
