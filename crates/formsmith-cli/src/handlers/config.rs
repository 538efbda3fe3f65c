use crate::types::OutputFormat;
use anyhow::{Context, Result};
use formsmith_runtime::Config;
use std::path::Path;

pub fn show(config: &Config, path: &Path, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            let state = if path.exists() { "" } else { " (not created, defaults)" };
            println!("# {}{}", path.display(), state);
            print!("{}", config.to_toml()?);
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(config)?);
        }
    }
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "Config file {} already exists (use --force to overwrite)",
            path.display()
        );
    }

    Config::default()
        .save_to(path)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    println!("Wrote default config to {}", path.display());
    Ok(())
}
