//! Receipt Processor Server Entry Point

use clap::Parser;
use receipt_processor::cli::Cli;
use receipt_processor::shutdown::ShutdownController;
use receipt_processor::{logging, server};
use std::process::ExitCode;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init() {
        eprintln!("failed to initialize logging: {}", err);
    }

    info!("Receipt Processor v{}", env!("CARGO_PKG_VERSION"));

    let config = cli.server_config();
    if config.require_auth {
        info!("Bearer token authentication enabled");
    } else {
        warn!("Authentication disabled; all requests are accepted");
    }

    match server::run(config, ShutdownController::default()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{}", err);
            ExitCode::FAILURE
        }
    }
}
