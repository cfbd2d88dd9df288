//! ロギング初期化
//!
//! `RECEIPTS_LOG_LEVEL`（未設定なら `RUST_LOG`、どちらもなければ `info`）をフィルタとして
//! tracing-subscriberを登録する。

use tracing_subscriber::{
    fmt, layer::SubscriberExt, util::SubscriberInitExt, util::TryInitError, EnvFilter,
};

/// ログレベル指定用の環境変数
pub const ENV_LOG_LEVEL: &str = "RECEIPTS_LOG_LEVEL";

const DEFAULT_DIRECTIVE: &str = "info";

/// 使用するフィルタ指定を決定する
pub fn filter_directive() -> String {
    std::env::var(ENV_LOG_LEVEL)
        .or_else(|_| std::env::var("RUST_LOG"))
        .unwrap_or_else(|_| DEFAULT_DIRECTIVE.to_string())
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!(
            "Invalid log filter '{}' ({}), falling back to '{}'",
            directive, err, DEFAULT_DIRECTIVE
        );
        EnvFilter::new(DEFAULT_DIRECTIVE)
    })
}

/// グローバルsubscriberを登録する
///
/// 既に登録済みの場合はエラーを返す。
pub fn init() -> Result<(), TryInitError> {
    tracing_subscriber::registry()
        .with(build_filter(&filter_directive()))
        .with(fmt::layer().with_target(false))
        .try_init()
}
