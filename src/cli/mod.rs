//! CLI layer - Command-line interface
//!
//! Contains argument parsing, signal handling, and the server runner.

pub mod app;
pub mod args;
pub mod signals;

// Re-export commonly used types
pub use app::{
    init_tracing, load_merged_config, run_server, EXIT_ERROR, EXIT_SUCCESS, EXIT_USAGE_ERROR,
};
pub use args::Cli;
pub use signals::shutdown_signal;
