use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use crate::logging::{LogConfig, init_logging};
use anyhow::{Context, Result};
use formsmith_runtime::{Config, resolve_config_path};

pub fn run(cli: Cli) -> Result<()> {
    let tui_mode = matches!(cli.command, None | Some(Commands::Edit { .. }));
    init_logging(LogConfig {
        level: cli.log_level,
        tui_mode,
    })?;

    let config_path = resolve_config_path(cli.config.as_deref())?;

    let Some(command) = cli.command else {
        let config = load_config(&config_path)?;
        return handlers::edit::handle(&config, None, None);
    };

    match command {
        Commands::Edit { script, export_dir } => {
            let config = load_config(&config_path)?;
            handlers::edit::handle(&config, script.as_deref(), export_dir)
        }

        Commands::Run {
            script,
            emit,
            output,
            width,
        } => {
            let config = load_config(&config_path)?;
            handlers::run::handle(
                &config,
                &script,
                emit,
                output.as_deref(),
                width,
                cli.format,
            )
        }

        Commands::Palette => handlers::palette::handle(cli.format),

        Commands::Config { command } => match command {
            ConfigCommand::Show => {
                let config = load_config(&config_path)?;
                handlers::config::show(&config, &config_path, cli.format)
            }
            ConfigCommand::Init { force } => handlers::config::init(&config_path, force),
        },
    }
}

fn load_config(path: &std::path::Path) -> Result<formsmith_runtime::Config> {
    Config::load_from(path).with_context(|| format!("Failed to load config {}", path.display()))
}
