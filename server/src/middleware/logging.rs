//! リクエストロガー

use axum::{extract::Request, middleware::Next, response::Response};
use tracing::info;

/// メソッドとパスを記録してから次のハンドラーに渡す
pub async fn request_logger(request: Request, next: Next) -> Response {
    info!("method {}, path: {}", request.method(), request.uri().path());
    next.run(request).await
}
