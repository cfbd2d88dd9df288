//! Receipt Processor Server
//!
//! レシートを受け付けてメモリ内に保持するHTTPサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// CLIインターフェース
pub mod cli;

/// 設定管理（環境変数ヘルパー）
pub mod config;

/// レシートID生成
pub mod id;

/// ロギング初期化ユーティリティ
pub mod logging;

/// ミドルウェアチェーン（リクエストログ・認証）
pub mod middleware;

/// axumサーバー起動・シャットダウン
pub mod server;

/// Shutdown controller
pub mod shutdown;

/// レシートストア
pub mod store;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// レシートストア
    pub store: store::ReceiptStore,
    /// ID生成器
    pub id_generator: Arc<dyn id::IdGenerator>,
}

impl AppState {
    /// 空のストアとUUID生成器で状態を作成
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(id::UuidGenerator))
    }

    /// 任意のID生成器で状態を作成
    pub fn with_id_generator(id_generator: Arc<dyn id::IdGenerator>) -> Self {
        Self {
            store: store::ReceiptStore::new(),
            id_generator,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
