use anyhow::{Context, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use formsmith_engine::SubmitOutcome;
use formsmith_runtime::{ActionOutcome, BuilderAction, FieldRef, FormBuilder};
use formsmith_types::{Field, FieldKind, FieldPatch, ValidationCategory};
use std::path::PathBuf;

/// Pixels assumed per terminal cell when mapping pane width to breakpoints
pub(crate) const CELL_PX: u32 = 8;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Mode {
    Normal,
    /// A field is picked up; `target` is where it lands on drop
    Dragging { source: usize, target: usize },
    EditLabel { buffer: String },
    EditOptions { buffer: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pane {
    Preview,
    Code,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Control {
    Continue,
    Quit,
}

pub(crate) struct AppState {
    pub builder: FormBuilder,
    pub selected: usize,
    pub mode: Mode,
    pub status: String,
    pub focus: Pane,
    pub preview_scroll: u16,
    pub code_scroll: u16,
    pub preview_width: u32,
    pub export_dir: PathBuf,
}

impl AppState {
    pub fn new(builder: FormBuilder, export_dir: PathBuf) -> Self {
        Self {
            builder,
            selected: 0,
            mode: Mode::Normal,
            status: "Press 1-7 to add a field".to_string(),
            focus: Pane::Preview,
            preview_scroll: 0,
            code_scroll: 0,
            preview_width: 1280,
            export_dir,
        }
    }

    pub fn selected_field(&self) -> Option<&Field> {
        self.builder.fields().get(self.selected)
    }

    /// Field order as it would look if the current drag were dropped now
    pub fn display_order(&self) -> Vec<Field> {
        match self.mode {
            Mode::Dragging { source, target } => {
                formsmith_engine::move_item(self.builder.fields(), source, Some(target))
            }
            _ => self.builder.fields().to_vec(),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Control {
        if key.kind != KeyEventKind::Press {
            return Control::Continue;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Control::Quit;
        }

        match std::mem::replace(&mut self.mode, Mode::Normal) {
            Mode::Normal => return self.handle_normal(key),
            Mode::Dragging { source, target } => self.handle_drag(key, source, target),
            Mode::EditLabel { buffer } => self.handle_label(key, buffer),
            Mode::EditOptions { buffer } => self.handle_options(key, buffer),
        }
        Control::Continue
    }

    fn handle_normal(&mut self, key: KeyEvent) -> Control {
        match key.code {
            KeyCode::Char('q') => return Control::Quit,
            KeyCode::Char(c @ '1'..='7') => {
                let slot = c as usize - '1' as usize;
                self.add_field(FieldKind::ALL[slot]);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.selected + 1 < self.builder.fields().len() {
                    self.selected += 1;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected = self.selected.saturating_sub(1);
            }
            KeyCode::Char(' ') => {
                if self.selected_field().is_some() {
                    self.mode = Mode::Dragging {
                        source: self.selected,
                        target: self.selected,
                    };
                    self.status = "Moving field: arrows choose a slot, space drops, esc cancels"
                        .to_string();
                }
            }
            KeyCode::Char('e') => {
                if let Some(field) = self.selected_field() {
                    self.mode = Mode::EditLabel {
                        buffer: field.label.clone(),
                    };
                    self.status = "Editing label: enter saves, esc cancels".to_string();
                }
            }
            KeyCode::Char('o') => {
                if let Some(field) = self.selected_field() {
                    if field.kind.has_options() {
                        self.mode = Mode::EditOptions {
                            buffer: field.options_text(),
                        };
                        self.status =
                            "Editing options: one per line, ctrl-s saves, esc cancels".to_string();
                    } else {
                        self.status = format!("{} fields have no options", field.kind);
                    }
                }
            }
            KeyCode::Char('v') => self.cycle_validation(),
            KeyCode::Char('l') => {
                let layout = self.builder.layout().next();
                self.builder.apply(BuilderAction::SetLayout { layout });
                self.status = format!("Layout: {}", layout);
            }
            KeyCode::Char('x') | KeyCode::Delete => self.remove_selected(),
            KeyCode::Char('s') => {
                let form = self.builder.preview(self.preview_width);
                self.status = if !form.submit {
                    "Add a field to get a submit button".to_string()
                } else {
                    match form.submit() {
                        SubmitOutcome::Inert => {
                            "Submit pressed: the preview does not send data".to_string()
                        }
                    }
                };
            }
            KeyCode::Char('w') => {
                self.status = match self.export() {
                    Ok(path) => format!("Wrote {}", path.display()),
                    Err(e) => format!("Export failed: {:#}", e),
                };
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Pane::Preview => Pane::Code,
                    Pane::Code => Pane::Preview,
                };
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(10);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(10);
            }
            KeyCode::Home => *self.focused_scroll() = 0,
            _ => {}
        }
        Control::Continue
    }

    fn handle_drag(&mut self, key: KeyEvent, source: usize, target: usize) {
        let last = self.builder.fields().len().saturating_sub(1);
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.mode = Mode::Dragging {
                    source,
                    target: target.saturating_sub(1),
                };
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.mode = Mode::Dragging {
                    source,
                    target: (target + 1).min(last),
                };
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.builder.apply(BuilderAction::Reorder {
                    source,
                    destination: Some(target),
                });
                self.selected = target;
                self.status = format!("Moved field {} to {}", source + 1, target + 1);
            }
            KeyCode::Esc => {
                self.builder.apply(BuilderAction::Reorder {
                    source,
                    destination: None,
                });
                self.status = "Move cancelled".to_string();
            }
            _ => self.mode = Mode::Dragging { source, target },
        }
    }

    fn handle_label(&mut self, key: KeyEvent, mut buffer: String) {
        match key.code {
            KeyCode::Enter => {
                let outcome = self.update_selected(FieldPatch::label(buffer));
                self.status = if outcome.changed() {
                    "Label saved".to_string()
                } else {
                    "Label unchanged".to_string()
                };
            }
            KeyCode::Esc => self.status = "Edit cancelled".to_string(),
            KeyCode::Backspace => {
                buffer.pop();
                self.mode = Mode::EditLabel { buffer };
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                buffer.push(c);
                self.mode = Mode::EditLabel { buffer };
            }
            _ => self.mode = Mode::EditLabel { buffer },
        }
    }

    fn handle_options(&mut self, key: KeyEvent, mut buffer: String) {
        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.update_selected(FieldPatch::options_text(&buffer));
                self.status = "Options saved".to_string();
            }
            KeyCode::Esc => self.status = "Edit cancelled".to_string(),
            KeyCode::Enter => {
                buffer.push('\n');
                self.mode = Mode::EditOptions { buffer };
            }
            KeyCode::Backspace => {
                buffer.pop();
                self.mode = Mode::EditOptions { buffer };
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                buffer.push(c);
                self.mode = Mode::EditOptions { buffer };
            }
            _ => self.mode = Mode::EditOptions { buffer },
        }
    }

    fn add_field(&mut self, kind: FieldKind) {
        if let ActionOutcome::Added(id) = self.builder.apply(BuilderAction::AddField { kind }) {
            self.selected = self.builder.fields().len() - 1;
            self.status = format!("Added {} field {}", kind, id);
        }
    }

    fn remove_selected(&mut self) {
        let Some(field) = self.selected_field() else {
            return;
        };
        let id = field.id.clone();
        self.builder.apply(BuilderAction::RemoveField {
            target: FieldRef::Id(id.clone()),
        });
        let len = self.builder.fields().len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
        self.status = format!("Removed {}", id);
    }

    fn cycle_validation(&mut self) {
        let Some(field) = self.selected_field() else {
            return;
        };
        let target = FieldRef::Id(field.id.clone());
        let category = ValidationCategory::of(field.validation).next();
        self.builder
            .apply(BuilderAction::SetValidation { target, category });
        self.status = format!("Validation: {}", category.caption());
    }

    fn update_selected(&mut self, patch: FieldPatch) -> ActionOutcome {
        let Some(field) = self.selected_field() else {
            return ActionOutcome::Unchanged;
        };
        let target = FieldRef::Id(field.id.clone());
        self.builder.apply(BuilderAction::UpdateField { target, patch })
    }

    fn focused_scroll(&mut self) -> &mut u16 {
        match self.focus {
            Pane::Preview => &mut self.preview_scroll,
            Pane::Code => &mut self.code_scroll,
        }
    }

    /// Write the generated component to `<export_dir>/<ComponentName>.tsx`
    pub fn export(&self) -> Result<PathBuf> {
        let name = format!("{}.tsx", self.builder.codegen_options().component_name);
        let path = self.export_dir.join(name);
        std::fs::write(&path, self.builder.code())
            .with_context(|| format!("Failed to write {}", path.display()))?;
        tracing::info!(path = %path.display(), "exported generated code");
        Ok(path)
    }
}
