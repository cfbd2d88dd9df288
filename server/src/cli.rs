//! CLI module for receipt-processor
//!
//! Provides the command-line interface for starting the server.

use crate::config::server_config_from_env;
use clap::{Args, Parser, Subcommand};
use receipt_processor_common::config::ServerConfig;

/// Receipt processor - stores submitted receipts in memory
#[derive(Parser, Debug)]
#[command(name = "receipt-processor")]
#[command(version, about, long_about = None)]
#[command(after_help = r#"ENVIRONMENT VARIABLES:
    RECEIPTS_HOST           Bind address (default: 0.0.0.0)
    RECEIPTS_PORT           Listen port (default: 8080)
    RECEIPTS_REQUIRE_AUTH   Require "Authorization: Bearer <token>" (default: off)
    RECEIPTS_AUTH_TOKEN     Expected bearer token (default: token)
    RECEIPTS_LOG_LEVEL      Log level (default: info)
"#)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the receipt processor server
    Serve(ServeArgs),
}

/// serve サブコマンドの引数
///
/// 指定されなかった項目は環境変数、それもなければデフォルト値を使う。
#[derive(Args, Debug, Clone, Default)]
pub struct ServeArgs {
    /// Listen port
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Bind address
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Reject requests without a matching bearer token
    #[arg(long, default_value_t = false)]
    pub require_auth: bool,

    /// Bearer token expected when authentication is enabled
    #[arg(long)]
    pub auth_token: Option<String>,
}

impl ServeArgs {
    /// 引数を環境変数由来の設定に重ねる
    pub fn apply_to(self, mut config: ServerConfig) -> ServerConfig {
        if let Some(host) = self.host {
            config.host = host;
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if self.require_auth {
            config.require_auth = true;
        }
        if let Some(token) = self.auth_token {
            config.auth_token = token;
        }
        config
    }
}

impl Cli {
    /// 実行時に使用する設定を決定する
    pub fn server_config(self) -> ServerConfig {
        let config = server_config_from_env();
        match self.command {
            Some(Commands::Serve(args)) => args.apply_to(config),
            None => config,
        }
    }
}
