//! APIエラーレスポンス型
//!
//! axum用の共通エラーハンドリング

use axum::{http::StatusCode, response::IntoResponse};
use receipt_processor_common::error::ProcessorError;
use tracing::error;

/// Axum用のエラーレスポンス型
#[derive(Debug)]
pub struct AppError(pub ProcessorError);

impl From<ProcessorError> for AppError {
    fn from(err: ProcessorError) -> Self {
        AppError(err)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // デコードエラーはそのまま返す。サーバー内部のエラーは詳細をログにのみ残す
        let (status, message) = match &self.0 {
            ProcessorError::InvalidReceipt(_) | ProcessorError::Common(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }
            ProcessorError::Unauthorized => (StatusCode::UNAUTHORIZED, self.0.to_string()),
            ProcessorError::Bind { .. } | ProcessorError::Server(_) => {
                error!("Internal error: {}", self.0);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal Server Error".to_string(),
                )
            }
        };

        (status, format!("{}\n", message)).into_response()
    }
}
