//! tracing subscriber setup for the formsmith binary.

use crate::types::LogLevel;
use anyhow::Result;
use tracing_subscriber::EnvFilter;

const CRATES: [&str; 4] = [
    "formsmith",
    "formsmith_runtime",
    "formsmith_engine",
    "formsmith_types",
];

/// Logging configuration for one invocation.
pub struct LogConfig {
    pub level: LogLevel,
    /// The terminal editor owns the screen; log lines would corrupt it
    pub tui_mode: bool,
}

fn default_filter(level: LogLevel) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{}={}", krate, level))
        .collect::<Vec<_>>()
        .join(",")
}

/// Initialize tracing; `RUST_LOG` overrides `--log-level`.
pub fn init_logging(config: LogConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(config.level)));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false);

    let result = if config.tui_mode {
        builder.with_writer(std::io::sink).try_init()
    } else {
        builder.with_writer(std::io::stderr).try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))
}
