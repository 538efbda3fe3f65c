//! Line-oriented action scripts.
//!
//! ```text
//! # comment
//! add <kind>
//! remove <ref>
//! label <ref> <text...>
//! options <ref> <option>\n<option>...
//! validate <ref> <none|required|email|number|regex>
//! move <source> <destination|->
//! layout <single|double|triple>
//! ```
//!
//! `<ref>` is a zero-based position or a field id.

use crate::action::{ActionOutcome, BuilderAction, FieldRef};
use crate::builder::FormBuilder;
use crate::{Error, Result};
use formsmith_types::{FieldKind, FieldPatch, Layout, ValidationCategory};
use std::path::Path;

/// One parsed script line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptStep {
    pub line: usize,
    pub action: BuilderAction,
}

pub fn parse_script(text: &str) -> Result<Vec<ScriptStep>> {
    let mut steps = Vec::new();
    for (index, raw) in text.lines().enumerate() {
        let line = index + 1;
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let action = parse_line(trimmed).map_err(|message| Error::Script { line, message })?;
        steps.push(ScriptStep { line, action });
    }
    Ok(steps)
}

pub fn load_script(path: &Path) -> Result<Vec<ScriptStep>> {
    let text = std::fs::read_to_string(path)?;
    parse_script(&text)
}

/// Replay steps against `builder`, returning the outcome of each
pub fn run_script(builder: &mut FormBuilder, steps: &[ScriptStep]) -> Vec<ActionOutcome> {
    steps
        .iter()
        .map(|step| {
            let outcome = builder.apply(step.action.clone());
            if !outcome.changed() {
                tracing::warn!(line = step.line, "action left the form unchanged");
            }
            outcome
        })
        .collect()
}

fn parse_line(line: &str) -> std::result::Result<BuilderAction, String> {
    let (command, rest) = split_word(line);

    match command {
        "add" => {
            let kind: FieldKind = single_arg(command, rest)?
                .parse()
                .map_err(|e: formsmith_types::Error| e.to_string())?;
            Ok(BuilderAction::AddField { kind })
        }
        "remove" => Ok(BuilderAction::RemoveField {
            target: FieldRef::parse(single_arg(command, rest)?),
        }),
        "label" => {
            let (target, text) = target_and_text(command, rest)?;
            Ok(BuilderAction::UpdateField {
                target,
                patch: FieldPatch::label(text),
            })
        }
        "options" => {
            let (target, text) = target_and_text(command, rest)?;
            Ok(BuilderAction::UpdateField {
                target,
                patch: FieldPatch::options_text(&unescape_newlines(text)),
            })
        }
        "validate" => {
            let (target, category) = split_word(rest);
            if target.is_empty() {
                return Err("validate needs a field reference and a category".to_string());
            }
            let category: ValidationCategory = single_arg(command, category)?
                .parse()
                .map_err(|e: formsmith_types::Error| e.to_string())?;
            Ok(BuilderAction::SetValidation {
                target: FieldRef::parse(target),
                category,
            })
        }
        "move" => {
            let (source, destination) = split_word(rest);
            let source = source
                .parse::<usize>()
                .map_err(|_| format!("move source must be a position, got '{}'", source))?;
            let destination = match single_arg(command, destination)? {
                "-" => None,
                token => Some(token.parse::<usize>().map_err(|_| {
                    format!("move destination must be a position or '-', got '{}'", token)
                })?),
            };
            Ok(BuilderAction::Reorder {
                source,
                destination,
            })
        }
        "layout" => {
            let layout: Layout = single_arg(command, rest)?
                .parse()
                .map_err(|e: formsmith_types::Error| e.to_string())?;
            Ok(BuilderAction::SetLayout { layout })
        }
        other => Err(format!("unknown command '{}'", other)),
    }
}

fn split_word(text: &str) -> (&str, &str) {
    let text = text.trim_start();
    match text.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (text, ""),
    }
}

fn single_arg<'a>(command: &str, rest: &'a str) -> std::result::Result<&'a str, String> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Err(format!("{} needs an argument", command));
    }
    if rest.contains(char::is_whitespace) {
        return Err(format!("{} takes a single argument, got '{}'", command, rest));
    }
    Ok(rest)
}

fn target_and_text<'a>(
    command: &str,
    rest: &'a str,
) -> std::result::Result<(FieldRef, &'a str), String> {
    let (target, text) = split_word(rest);
    if target.is_empty() {
        return Err(format!("{} needs a field reference", command));
    }
    Ok((FieldRef::parse(target), text))
}

/// `\n` separates options, `\\` is a literal backslash
fn unescape_newlines(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('\\') => out.push('\\'),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
