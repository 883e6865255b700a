//! CLI argument definitions using Clap

use std::path::PathBuf;

use clap::Parser;

use crate::domain::config::AppConfig;

/// scribe-relay - relay audio uploads to a speech-to-text API
#[derive(Parser, Debug, Default)]
#[command(name = "scribe-relay")]
#[command(version)]
#[command(about = "Serve the audio transcription relay over HTTP")]
#[command(long_about = None)]
pub struct Cli {
    /// Address to listen on (e.g., 127.0.0.1:8787)
    #[arg(short = 'b', long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Config file (defaults to <config dir>/scribe-relay/config.toml)
    #[arg(short = 'c', long, value_name = "FILE", env = "SCRIBE_RELAY_CONFIG")]
    pub config: Option<PathBuf>,

    /// Maximum audio upload size in megabytes
    #[arg(long, value_name = "MB")]
    pub max_upload_mb: Option<f64>,

    /// Transcription model sent upstream
    #[arg(short = 'm', long, value_name = "MODEL")]
    pub model: Option<String>,
}

impl Cli {
    /// Settings given on the command line, as a partial config
    pub fn to_config(&self) -> AppConfig {
        AppConfig {
            bind_address: self.bind.clone(),
            max_upload_mb: self.max_upload_mb,
            model: self.model.clone(),
            ..Default::default()
        }
    }
}
