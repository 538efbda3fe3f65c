mod commands;

pub use commands::*;

use crate::types::{LogLevel, OutputFormat};
use clap::Parser;

#[derive(Parser)]
#[command(name = "formsmith")]
#[command(
    about = "Build data-entry forms in the terminal and export React source",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    #[arg(
        long,
        global = true,
        help = "Config file (default: $FORMSMITH_CONFIG, then the user config dir)"
    )]
    pub config: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
