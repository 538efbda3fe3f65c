//! Custom assertions over `run --emit document --format json` output.

use anyhow::{Context, Result};
use serde_json::Value;

fn fields(json: &Value) -> Result<&Vec<Value>> {
    json["fields"]
        .as_array()
        .context("Expected 'fields' array in JSON")
}

/// Assert the document holds the expected number of fields.
pub fn assert_field_count(json: &Value, expected: usize) -> Result<()> {
    let fields = fields(json)?;
    if fields.len() != expected {
        anyhow::bail!("Expected {} fields, got {}", expected, fields.len());
    }
    Ok(())
}

/// Assert field kinds, in document order.
pub fn assert_field_kinds(json: &Value, expected: &[&str]) -> Result<()> {
    let kinds = fields(json)?
        .iter()
        .enumerate()
        .map(|(i, field)| {
            field["kind"]
                .as_str()
                .with_context(|| format!("Field {} missing kind", i))
        })
        .collect::<Result<Vec<&str>>>()?;

    if kinds != expected {
        anyhow::bail!("Expected kinds {:?}, got {:?}", expected, kinds);
    }
    Ok(())
}

/// Assert every field id is distinct.
pub fn assert_unique_ids(json: &Value) -> Result<()> {
    let mut seen = std::collections::HashSet::new();
    for (i, field) in fields(json)?.iter().enumerate() {
        let id = field["id"]
            .as_str()
            .with_context(|| format!("Field {} missing id", i))?;
        if !seen.insert(id) {
            anyhow::bail!("Duplicate field id {}", id);
        }
    }
    Ok(())
}
