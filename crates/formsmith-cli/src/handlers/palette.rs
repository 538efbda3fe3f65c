use crate::presentation::text;
use crate::types::OutputFormat;
use anyhow::Result;
use formsmith_types::{FieldKind, Layout, ValidationCategory};
use is_terminal::IsTerminal;

pub fn handle(format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => print!("{}", text::format_palette(std::io::stdout().is_terminal())),
        OutputFormat::Json => {
            let kinds: Vec<_> = FieldKind::ALL
                .iter()
                .map(|k| {
                    serde_json::json!({
                        "kind": k,
                        "default_label": k.default_label(),
                        "has_options": k.has_options(),
                    })
                })
                .collect();
            let validations: Vec<_> = ValidationCategory::ALL
                .iter()
                .map(|c| {
                    serde_json::json!({
                        "category": c,
                        "caption": c.caption(),
                        "rule": c.rule().map(|r| r.emit()),
                    })
                })
                .collect();
            let layouts: Vec<_> = Layout::ALL
                .iter()
                .map(|l| serde_json::json!({ "layout": l, "max_columns": l.max_columns() }))
                .collect();

            println!(
                "{}",
                serde_json::to_string_pretty(&serde_json::json!({
                    "kinds": kinds,
                    "validations": validations,
                    "layouts": layouts,
                }))?
            );
        }
    }
    Ok(())
}
