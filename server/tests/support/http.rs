use std::net::SocketAddr;

use receipt_processor::{server, shutdown::ShutdownController, AppState};
use receipt_processor_common::{config::ServerConfig, error::ProcessorResult};
use tokio::{net::TcpListener, task::JoinHandle};

/// 実ポートにバインドしたテスト用サーバー
#[allow(dead_code)]
pub struct TestServer {
    addr: SocketAddr,
    shutdown: ShutdownController,
    handle: JoinHandle<ProcessorResult<()>>,
}

#[allow(dead_code)]
impl TestServer {
    /// サーバーがバインドしているアドレスを返す
    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// `http://127.0.0.1:<port><path>` 形式のURL
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }

    /// サーバーを停止し、バックグラウンドタスクの終了を待つ
    pub async fn stop(self) -> ProcessorResult<()> {
        self.shutdown.request_shutdown();
        self.handle.await.expect("server task panicked")
    }
}

/// 任意の設定でサーバーを起動する
#[allow(dead_code)]
pub async fn spawn_server(config: ServerConfig) -> TestServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = ShutdownController::default();
    let handle = tokio::spawn({
        let shutdown = shutdown.clone();
        async move { server::serve(listener, AppState::new(), &config, shutdown).await }
    });

    TestServer {
        addr,
        shutdown,
        handle,
    }
}
