use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive form editor (default)")]
    Edit {
        #[arg(long, help = "Replay an action script before opening the editor")]
        script: Option<PathBuf>,

        #[arg(long, help = "Directory the editor exports generated code to")]
        export_dir: Option<PathBuf>,
    },

    #[command(about = "Replay an action script and print the result")]
    Run {
        #[arg(help = "Action script, one action per line")]
        script: PathBuf,

        #[arg(long, default_value = "code")]
        emit: EmitTarget,

        #[arg(long, help = "Write the result to a file instead of stdout")]
        output: Option<PathBuf>,

        #[arg(long, help = "Viewport width in pixels used for the preview")]
        width: Option<u32>,
    },

    #[command(about = "List field kinds, validation categories and layouts")]
    Palette,

    #[command(about = "Show or create the config file")]
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    #[command(about = "Print the effective configuration")]
    Show,

    #[command(about = "Write a config file with default values")]
    Init {
        #[arg(long, help = "Overwrite an existing file")]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum EmitTarget {
    /// Generated component source
    Code,
    /// Rendered form preview
    Preview,
    /// The form document itself
    Document,
}
