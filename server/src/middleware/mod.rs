//! ミドルウェアチェーン
//!
//! リクエストインターセプターを順序付きで合成し、ルーターを包む。
//! リストの先頭にあるミドルウェアが最初（最も外側）で実行される。

/// Bearerトークン認証
pub mod auth;
/// リクエストログ
pub mod logging;

use axum::{extract::Request, response::Response, Router};
use receipt_processor_common::config::ServerConfig;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

type WrapFn = dyn Fn(Router) -> Router + Send + Sync;

/// ルーターを包む単一のミドルウェア
#[derive(Clone)]
pub struct Middleware {
    name: &'static str,
    wrap: Arc<WrapFn>,
}

impl Middleware {
    /// 任意の非同期関数からミドルウェアを作成
    pub fn from_fn<F, Fut>(name: &'static str, f: F) -> Self
    where
        F: Fn(Request, axum::middleware::Next) -> Fut + Clone + Send + Sync + 'static,
        Fut: Future<Output = Response> + Send + 'static,
    {
        Self {
            name,
            wrap: Arc::new(move |router: Router| {
                router.layer(axum::middleware::from_fn::<_, (Request,)>(f.clone()))
            }),
        }
    }

    /// 全リクエストのメソッドとパスを記録する
    pub fn request_logger() -> Self {
        Self::from_fn("request_logger", logging::request_logger)
    }

    /// `Authorization: Bearer <token>` が一致しないリクエストを401で拒否する
    pub fn require_auth(token: impl Into<String>) -> Self {
        let expected: Arc<str> = Arc::from(format!("Bearer {}", token.into()));
        Self::from_fn("require_auth", move |request, next| {
            auth::require_bearer_token(expected.clone(), request, next)
        })
    }

    /// ミドルウェア名
    pub fn name(&self) -> &'static str {
        self.name
    }

    fn wrap(&self, router: Router) -> Router {
        (self.wrap)(router)
    }
}

impl fmt::Debug for Middleware {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Middleware").field("name", &self.name).finish()
    }
}

/// 順序付きミドルウェアの合成
#[derive(Clone, Debug, Default)]
pub struct MiddlewareChain {
    middlewares: Vec<Middleware>,
}

impl MiddlewareChain {
    /// ミドルウェア列からチェーンを作成
    pub fn new(middlewares: Vec<Middleware>) -> Self {
        Self { middlewares }
    }

    /// 設定に応じたチェーン
    ///
    /// ロガーは常に有効。認証は `require_auth` が有効なときだけロガーの内側に入る。
    pub fn from_config(config: &ServerConfig) -> Self {
        let mut middlewares = vec![Middleware::request_logger()];
        if config.require_auth {
            middlewares.push(Middleware::require_auth(config.auth_token.clone()));
        }
        Self::new(middlewares)
    }

    /// 末尾にミドルウェアを追加
    pub fn with(mut self, middleware: Middleware) -> Self {
        self.middlewares.push(middleware);
        self
    }

    /// 登録順のミドルウェア名
    pub fn names(&self) -> Vec<&'static str> {
        self.middlewares.iter().map(Middleware::name).collect()
    }

    /// ルーターを包んで単一のハンドラーにする
    pub fn apply(&self, router: Router) -> Router {
        // axumは後から追加したレイヤーほど外側になるため逆順に重ねる
        self.middlewares
            .iter()
            .rev()
            .fold(router, |router, middleware| middleware.wrap(router))
    }
}
