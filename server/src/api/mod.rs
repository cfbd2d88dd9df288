//! REST APIハンドラー
//!
//! レシート登録・取得、ユーザーID表示

/// エラーレスポンス
pub mod error;
/// レシート登録・取得
pub mod receipts;
/// ユーザーID表示
pub mod users;

use crate::middleware::MiddlewareChain;
use crate::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use receipt_processor_common::config::ServerConfig;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/users/:user_id", get(users::get_user))
        .route("/receipts/:id/points", get(receipts::get_receipt_points))
        .route("/receipts/process", post(receipts::process_receipt))
        .with_state(state)
}

/// ミドルウェアチェーン込みのアプリケーションを作成
pub fn create_app(state: AppState, config: &ServerConfig) -> Router {
    create_app_with_chain(state, &MiddlewareChain::from_config(config))
}

/// 任意のミドルウェアチェーンでアプリケーションを作成
pub fn create_app_with_chain(state: AppState, chain: &MiddlewareChain) -> Router {
    chain.apply(create_router(state))
}
