//! 設定管理
//!
//! ServerConfig等の設定構造体

use serde::{Deserialize, Serialize};

/// サーバー設定
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// ホストアドレス (デフォルト: "0.0.0.0")
    #[serde(default = "default_host")]
    pub host: String,

    /// ポート番号 (デフォルト: 8080)
    #[serde(default = "default_port")]
    pub port: u16,

    /// Bearerトークン認証を有効にするか (デフォルト: false)
    #[serde(default)]
    pub require_auth: bool,

    /// 認証有効時に要求するトークン (デフォルト: "token")
    #[serde(default = "default_auth_token")]
    pub auth_token: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_auth_token() -> String {
    "token".to_string()
}

impl ServerConfig {
    /// `host:port` 形式のバインドアドレス
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            require_auth: false,
            auth_token: default_auth_token(),
        }
    }
}
