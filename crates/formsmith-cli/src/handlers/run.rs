use crate::args::EmitTarget;
use crate::presentation::text;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use formsmith_engine::render_text;
use formsmith_runtime::{Config, FormBuilder, load_script, run_script};
use std::path::Path;

pub fn handle(
    config: &Config,
    script: &Path,
    emit: EmitTarget,
    output: Option<&Path>,
    width: Option<u32>,
    format: OutputFormat,
) -> Result<()> {
    let steps = load_script(script)
        .with_context(|| format!("Failed to read script {}", script.display()))?;

    let mut builder = FormBuilder::new(config);
    let outcomes = run_script(&mut builder, &steps);
    let unchanged = outcomes.iter().filter(|o| !o.changed()).count();
    tracing::info!(
        steps = steps.len(),
        unchanged,
        revision = builder.revision(),
        "script replayed"
    );

    let width = width.unwrap_or(config.preview.viewport_width);
    let content = render(&builder, emit, width, format)?;

    match output {
        Some(path) => {
            std::fs::write(path, &content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
            if format == OutputFormat::Plain {
                println!("Wrote {}", path.display());
            }
        }
        None => print!("{}", content),
    }

    Ok(())
}

fn render(
    builder: &FormBuilder,
    emit: EmitTarget,
    width: u32,
    format: OutputFormat,
) -> Result<String> {
    let mut content = match (emit, format) {
        (EmitTarget::Code, OutputFormat::Plain) => builder.code().to_string(),
        (EmitTarget::Code, OutputFormat::Json) => serde_json::to_string_pretty(&serde_json::json!({
            "component": builder.codegen_options().component_name,
            "code": builder.code(),
        }))?,
        (EmitTarget::Preview, OutputFormat::Plain) => render_text(&builder.preview(width)),
        (EmitTarget::Preview, OutputFormat::Json) => {
            serde_json::to_string_pretty(&builder.preview(width))?
        }
        (EmitTarget::Document, OutputFormat::Plain) => text::format_document(builder.document()),
        (EmitTarget::Document, OutputFormat::Json) => {
            serde_json::to_string_pretty(builder.document())?
        }
    };

    if !content.ends_with('\n') {
        content.push('\n');
    }
    Ok(content)
}
