use crate::presentation::tui;
use anyhow::{Context, Result};
use formsmith_runtime::{Config, FormBuilder, load_script, run_script};
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};

pub fn handle(config: &Config, script: Option<&Path>, export_dir: Option<PathBuf>) -> Result<()> {
    if !std::io::stdout().is_terminal() {
        anyhow::bail!(
            "The editor needs an interactive terminal; use `formsmith run <script>` instead"
        );
    }

    let mut builder = FormBuilder::new(config);

    if let Some(script) = script {
        let steps = load_script(script)
            .with_context(|| format!("Failed to read script {}", script.display()))?;
        run_script(&mut builder, &steps);
    }

    let export_dir = match export_dir {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    tui::run(builder, export_dir)
}
