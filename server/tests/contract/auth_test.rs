//! Contract Test: Bearerトークン認証（設定で有効化した場合）

use crate::support::{build_app, build_app_with_auth, get, post_receipt, send};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};

#[tokio::test]
async fn test_auth_disabled_by_default() {
    let (app, _) = build_app();

    let (status, _) = send(&app, get("/users/1")).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let (app, state) = build_app_with_auth();

    let (status, body) = send(&app, post_receipt(r#"{"receipts":"a","total":"1"}"#)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "Unauthorized\n");
    // ハンドラーまで到達していない
    assert!(state.store.is_empty().await);
}

#[tokio::test]
async fn test_wrong_token_is_unauthorized() {
    let (app, _) = build_app_with_auth();
    let request = Request::builder()
        .uri("/users/1")
        .header("Authorization", "Bearer nope")
        .body(Body::empty())
        .unwrap();

    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_valid_token_is_accepted() {
    let (app, state) = build_app_with_auth();
    let request = Request::builder()
        .method("POST")
        .uri("/receipts/process")
        .header("Authorization", "Bearer token")
        .body(Body::from(r#"{"receipts":"a","total":"1"}"#))
        .unwrap();

    let (status, _) = send(&app, request).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(state.store.len().await, 1);
}
