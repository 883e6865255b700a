//! Server runner

use std::process::ExitCode;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::application::ports::ConfigStore;
use crate::application::TranscribeUploadUseCase;
use crate::domain::config::AppConfig;
use crate::domain::error::ConfigError;
use crate::infrastructure::{
    env_config, AppState, HttpServer, MulterUploadDecoder, OpenAiTranscriber, TomlConfigStore,
};

use super::args::Cli;
use super::signals::shutdown_signal;

/// Exit codes
pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_ERROR: u8 = 1;
pub const EXIT_USAGE_ERROR: u8 = 2;

/// Default log filter when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "scribe_relay=info,tower_http=info";

/// Initialize the tracing subscriber. Logs go to stderr.
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load and merge configuration from file, env, and CLI
pub async fn load_merged_config(cli: &Cli) -> Result<AppConfig, ConfigError> {
    let store = match &cli.config {
        Some(path) => {
            let store = TomlConfigStore::with_path(path);
            if !store.exists() {
                return Err(ConfigError::ReadError(format!(
                    "{} does not exist",
                    store.path().display()
                )));
            }
            store
        }
        None => TomlConfigStore::new(),
    };
    tracing::debug!(path = %store.path().display(), found = store.exists(), "Reading config file");
    let file_config = store.load().await?;

    // Merge: defaults < file < env < cli
    let config = AppConfig::defaults()
        .merge(file_config)
        .merge(env_config())
        .merge(cli.to_config());
    config.validate()?;
    Ok(config)
}

/// Run the HTTP host until a shutdown signal arrives
pub async fn run_server(config: AppConfig) -> ExitCode {
    let handler_config = config.to_handler_config();
    if handler_config.api_key.is_none() {
        tracing::warn!("OPENAI_API_KEY is not set; every transcription request will fail");
    }

    let transcriber =
        OpenAiTranscriber::with_base_url(config.api_base_url_or_default(), config.model_or_default());

    tracing::info!(
        model = transcriber.model(),
        api_base_url = config.api_base_url_or_default(),
        upload_limit = %handler_config.upload_limit,
        "Configuration loaded"
    );
    let use_case = TranscribeUploadUseCase::new(MulterUploadDecoder::new(), transcriber);
    let state = AppState::new(use_case, handler_config);

    let bind_address = config.bind_address_or_default();
    let listener = match TcpListener::bind(bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(address = bind_address, error = %e, "Failed to bind");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    match HttpServer::new(state).run(listener, shutdown_signal()).await {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(e) => {
            tracing::error!(error = %e, "Server error");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
