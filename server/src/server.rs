//! axumサーバー起動・シャットダウンハンドリング

use crate::shutdown::ShutdownController;
use crate::{api, AppState};
use receipt_processor_common::{
    config::ServerConfig,
    error::{ProcessorError, ProcessorResult},
};
use tokio::net::TcpListener;
use tracing::{error, info};

/// 設定のアドレスにバインドしてサーバーを起動する
///
/// バインドに失敗した場合はエラーを返す。シャットダウンシグナルを受け取ると正常終了する。
pub async fn run(config: ServerConfig, shutdown: ShutdownController) -> ProcessorResult<()> {
    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| ProcessorError::Bind {
            addr: addr.clone(),
            source,
        })?;

    serve(listener, AppState::new(), &config, shutdown).await
}

/// バインド済みのリスナーでサーバーを起動する
pub async fn serve(
    listener: TcpListener,
    state: AppState,
    config: &ServerConfig,
    shutdown: ShutdownController,
) -> ProcessorResult<()> {
    let app = api::create_app(state, config);

    match listener.local_addr() {
        Ok(addr) => info!("Server has started {}", addr),
        Err(_) => info!("Server has started {}", config.bind_addr()),
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await
        .map_err(ProcessorError::Server)?;

    info!("Server shutdown complete");
    Ok(())
}

/// シャットダウンシグナルを待機
async fn shutdown_signal(shutdown: ShutdownController) {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!("failed to install signal handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
        _ = shutdown.wait() => {
            info!("Shutdown requested, shutting down...");
        }
    }
}
