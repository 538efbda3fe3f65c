use formsmith_types::{Field, FieldKind, Layout};
use serde::{Deserialize, Serialize};

/// Viewport widths at which multi-column layouts widen
///
/// Defaults match the `md` and `lg` screens targeted by the generated grid
/// classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Breakpoints {
    pub medium: u32,
    pub large: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            medium: 768,
            large: 1024,
        }
    }
}

/// Columns used by `layout` at `width`
pub fn column_count(layout: Layout, width: u32, breakpoints: &Breakpoints) -> usize {
    match layout {
        Layout::Single => 1,
        Layout::Double if width < breakpoints.medium => 1,
        Layout::Double => 2,
        Layout::Triple if width < breakpoints.medium => 1,
        Layout::Triple if width < breakpoints.large => 2,
        Layout::Triple => 3,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub label: String,
}

/// Visual control chosen for a field kind
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "control", rename_all = "snake_case")]
pub enum Control {
    TextInput { input_type: String },
    TextArea { rows: u16 },
    Select { options: Vec<String> },
    Checkbox { caption: String },
    RadioGroup { choices: Vec<Choice> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewField {
    pub id: String,
    pub label: String,
    #[serde(flatten)]
    pub control: Control,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_hint: Option<String>,
}

/// What activating the preview's submit control does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Nothing: the preview only exists to be looked at
    Inert,
}

/// Live, non-submittable mockup of the form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreviewForm {
    pub columns: usize,
    pub fields: Vec<PreviewField>,
    /// Whether a submit control is shown (only when there are fields)
    pub submit: bool,
}

impl PreviewForm {
    pub fn submit(&self) -> SubmitOutcome {
        SubmitOutcome::Inert
    }

    /// Fields grouped into grid rows
    pub fn rows(&self) -> impl Iterator<Item = &[PreviewField]> {
        self.fields.chunks(self.columns.max(1))
    }
}

pub(crate) fn build_preview(
    fields: &[Field],
    layout: Layout,
    viewport_width: u32,
    breakpoints: &Breakpoints,
) -> PreviewForm {
    PreviewForm {
        columns: column_count(layout, viewport_width, breakpoints),
        fields: fields.iter().map(preview_field).collect(),
        submit: !fields.is_empty(),
    }
}

fn preview_field(field: &Field) -> PreviewField {
    let control = match field.kind {
        FieldKind::Textarea => Control::TextArea { rows: 3 },
        FieldKind::Select => Control::Select {
            options: field.options().to_vec(),
        },
        FieldKind::Checkbox => Control::Checkbox {
            caption: field.label.clone(),
        },
        FieldKind::Radio => Control::RadioGroup {
            choices: field
                .options()
                .iter()
                .enumerate()
                .map(|(i, option)| Choice {
                    id: field.id.choice(i),
                    label: option.clone(),
                })
                .collect(),
        },
        FieldKind::Text | FieldKind::Number | FieldKind::Email => Control::TextInput {
            input_type: field.kind.token().to_string(),
        },
    };

    PreviewField {
        id: field.id.to_string(),
        label: field.label.clone(),
        control,
        validation_hint: field
            .validation
            .map(|rule| format!("Validation: {}", rule.describe())),
    }
}

const CONTROL_WIDTH: usize = 20;
const COLUMN_GAP: usize = 4;

/// Lines drawn for one field, label first
pub fn field_lines(field: &PreviewField) -> Vec<String> {
    let mut lines = vec![field.label.clone()];

    match &field.control {
        Control::TextInput { input_type } => {
            lines.push(format!("[ {:<w$} ]", input_type, w = CONTROL_WIDTH));
        }
        Control::TextArea { rows } => {
            lines.push(format!("[ {:<w$} ]", "textarea", w = CONTROL_WIDTH));
            for _ in 1..*rows {
                lines.push(format!("[ {:<w$} ]", "", w = CONTROL_WIDTH));
            }
        }
        Control::Select { options } => {
            let first = options.first().map(String::as_str).unwrap_or("");
            lines.push(format!("[ {:<w$} v ]", first, w = CONTROL_WIDTH - 2));
            for option in options {
                lines.push(format!("  - {}", option));
            }
        }
        Control::Checkbox { caption } => {
            lines.push(format!("[ ] {}", caption));
        }
        Control::RadioGroup { choices } => {
            for choice in choices {
                lines.push(format!("( ) {}", choice.label));
            }
        }
    }

    if let Some(hint) = &field.validation_hint {
        lines.push(hint.clone());
    }
    lines
}

/// Lay the preview out as plain text, one grid row after another
pub fn render_text(form: &PreviewForm) -> String {
    if form.fields.is_empty() {
        return "(empty form)\n".to_string();
    }

    let column_width = form
        .fields
        .iter()
        .flat_map(field_lines)
        .map(|line| line.chars().count())
        .max()
        .unwrap_or(0)
        + COLUMN_GAP;

    let mut out = String::new();
    for row in form.rows() {
        let blocks: Vec<Vec<String>> = row.iter().map(field_lines).collect();
        let height = blocks.iter().map(Vec::len).max().unwrap_or(0);
        for i in 0..height {
            let mut line = String::new();
            for block in &blocks {
                let cell = block.get(i).map(String::as_str).unwrap_or("");
                line.push_str(&format!("{:<w$}", cell, w = column_width));
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
        out.push('\n');
    }

    if form.submit {
        out.push_str("[ Submit ]\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_types::{FieldId, ValidationRule};

    #[test]
    fn test_column_mapping() {
        let bp = Breakpoints::default();
        assert_eq!(column_count(Layout::Single, 2000, &bp), 1);

        assert_eq!(column_count(Layout::Double, 767, &bp), 1);
        assert_eq!(column_count(Layout::Double, 768, &bp), 2);

        assert_eq!(column_count(Layout::Triple, 767, &bp), 1);
        assert_eq!(column_count(Layout::Triple, 768, &bp), 2);
        assert_eq!(column_count(Layout::Triple, 1023, &bp), 2);
        assert_eq!(column_count(Layout::Triple, 1024, &bp), 3);
    }

    #[test]
    fn test_controls_follow_kind() {
        let radio = Field::new(FieldId::new("r"), FieldKind::Radio);
        let preview = build_preview(&[radio], Layout::Single, 1024, &Breakpoints::default());
        match &preview.fields[0].control {
            Control::RadioGroup { choices } => {
                assert_eq!(choices.len(), 2);
                assert_eq!(choices[0].id, "r-0");
                assert_eq!(choices[1].label, "Option 2");
            }
            other => panic!("unexpected control {:?}", other),
        }

        let number = Field::new(FieldId::new("n"), FieldKind::Number);
        let preview = build_preview(&[number], Layout::Single, 1024, &Breakpoints::default());
        assert_eq!(
            preview.fields[0].control,
            Control::TextInput {
                input_type: "number".to_string()
            }
        );
    }

    #[test]
    fn test_validation_hint() {
        let mut field = Field::new(FieldId::new("e"), FieldKind::Email);
        field.validation = Some(ValidationRule::Email);
        let preview = build_preview(&[field], Layout::Single, 1024, &Breakpoints::default());
        assert_eq!(
            preview.fields[0].validation_hint.as_deref(),
            Some("Validation: Email address")
        );
    }

    #[test]
    fn test_submit_is_inert_and_hidden_when_empty() {
        let empty = build_preview(&[], Layout::Single, 1024, &Breakpoints::default());
        assert!(!empty.submit);
        assert_eq!(render_text(&empty), "(empty form)\n");

        let field = Field::new(FieldId::new("t"), FieldKind::Text);
        let preview = build_preview(&[field], Layout::Single, 1024, &Breakpoints::default());
        let before = preview.clone();
        assert!(preview.submit);
        assert_eq!(preview.submit(), SubmitOutcome::Inert);
        assert_eq!(preview, before);
    }

    #[test]
    fn test_render_text_columns() {
        let fields = vec![
            Field::new(FieldId::new("a"), FieldKind::Checkbox),
            Field::new(FieldId::new("b"), FieldKind::Checkbox),
            Field::new(FieldId::new("c"), FieldKind::Checkbox),
        ];
        let preview = build_preview(&fields, Layout::Double, 1024, &Breakpoints::default());
        assert_eq!(preview.rows().count(), 2);

        let text = render_text(&preview);
        let first = text.lines().next().unwrap();
        assert!(first.starts_with("New checkbox field"));
        assert!(first.ends_with("New checkbox field"));
        assert!(first.len() > "New checkbox field".len());
        assert!(text.ends_with("[ Submit ]\n"));
    }
}
