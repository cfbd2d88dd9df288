//! Bearerトークン認証ミドルウェア

use crate::api::error::AppError;
use axum::{
    extract::Request,
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use receipt_processor_common::error::ProcessorError;
use std::sync::Arc;
use tracing::warn;

/// `Authorization` ヘッダーが `expected` と完全一致する場合のみ次へ渡す
///
/// 一致しない場合は401を返し、後続のハンドラーは呼ばれない。
pub async fn require_bearer_token(expected: Arc<str>, request: Request, next: Next) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value == &*expected);

    if !authorized {
        warn!(
            "Rejected unauthenticated request: method {}, path: {}",
            request.method(),
            request.uri().path()
        );
        return AppError(ProcessorError::Unauthorized).into_response();
    }

    next.run(request).await
}
