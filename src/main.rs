//! scribe-relay HTTP host entry point

use std::process::ExitCode;

use clap::Parser;

use scribe_relay::cli::{init_tracing, load_merged_config, run_server, Cli, EXIT_USAGE_ERROR};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "scribe-relay starting");

    let config = match load_merged_config(&cli).await {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Invalid configuration");
            return ExitCode::from(EXIT_USAGE_ERROR);
        }
    };

    run_server(config).await
}
