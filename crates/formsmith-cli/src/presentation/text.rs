//! Plain-text listings for `palette` and `run --emit document`.

use formsmith_types::{Field, FieldKind, FormDocument, Layout, ValidationCategory};
use owo_colors::OwoColorize;

pub fn truncate(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}

/// Width used to clip long option lists, 80 when stdout is not a terminal
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(terminal_size::Width(w), _)| w as usize)
        .unwrap_or(80)
}

fn options_summary(field: &Field) -> Option<String> {
    field
        .options
        .as_ref()
        .map(|_| field.options().join(", "))
}

pub fn format_field_line(index: usize, field: &Field, max_width: usize) -> String {
    let mut line = format!(
        "{:>3}  {:<10} {:<9} \"{}\"",
        index,
        field.id.as_str(),
        field.kind.token(),
        field.label
    );
    if let Some(validation) = field.validation {
        line.push_str(&format!("  [{}]", validation.describe()));
    }
    if let Some(options) = options_summary(field) {
        let room = max_width.saturating_sub(line.chars().count() + 11).max(12);
        line.push_str(&format!("  options: {}", truncate(&options, room)));
    }
    line
}

pub fn format_document(doc: &FormDocument) -> String {
    format_document_with_width(doc, terminal_width())
}

pub fn format_document_with_width(doc: &FormDocument, max_width: usize) -> String {
    let mut out = format!(
        "layout: {} (up to {} columns)\nfields: {}\n",
        doc.layout,
        doc.layout.max_columns(),
        doc.len()
    );

    if doc.is_empty() {
        out.push_str("\n(no fields)\n");
        return out;
    }

    out.push('\n');
    for (index, field) in doc.fields.iter().enumerate() {
        out.push_str(&format_field_line(index, field, max_width));
        out.push('\n');
    }
    out
}

pub fn format_palette(color: bool) -> String {
    let heading = |text: &str| {
        if color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    };
    let key = |text: String| {
        if color {
            text.yellow().to_string()
        } else {
            text
        }
    };

    let mut out = String::new();

    out.push_str(&heading("Field kinds"));
    out.push('\n');
    for (slot, kind) in FieldKind::ALL.iter().enumerate() {
        let marker = if kind.has_options() { "  (options)" } else { "" };
        out.push_str(&format!(
            "  {}  {:<9} {}{}\n",
            key((slot + 1).to_string()),
            kind.token(),
            kind.default_label(),
            marker
        ));
    }

    out.push('\n');
    out.push_str(&heading("Validation"));
    out.push('\n');
    for category in ValidationCategory::ALL {
        out.push_str(&format!(
            "  {}  {}\n",
            key(format!("{:<9}", category.token())),
            category.caption()
        ));
    }

    out.push('\n');
    out.push_str(&heading("Layouts"));
    out.push('\n');
    for layout in Layout::ALL {
        let columns = match layout.max_columns() {
            1 => "1 column".to_string(),
            n => format!("up to {} columns", n),
        };
        out.push_str(&format!("  {}  {}\n", key(format!("{:<9}", layout.token())), columns));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use formsmith_types::{FieldId, ValidationRule};

    fn select_field() -> Field {
        let mut field = Field::new(FieldId::new("field_2"), FieldKind::Select);
        field.label = "Plan".to_string();
        field.options = Some(vec!["Free".into(), "Team".into(), "Enterprise".into()]);
        field
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a long option list", 10), "a long ...");
    }

    #[test]
    fn test_field_line_includes_validation_and_options() {
        let mut field = select_field();
        field.validation = Some(ValidationRule::Required);
        let line = format_field_line(1, &field, 120);
        assert_eq!(
            line,
            "  1  field_2    select    \"Plan\"  [Required]  options: Free, Team, Enterprise"
        );
    }

    #[test]
    fn test_empty_document_listing() {
        let doc = FormDocument::default();
        assert_eq!(
            format_document_with_width(&doc, 80),
            "layout: single (up to 1 columns)\nfields: 0\n\n(no fields)\n"
        );
    }

    #[test]
    fn test_palette_lists_every_kind_without_color() {
        let palette = format_palette(false);
        for kind in FieldKind::ALL {
            assert!(palette.contains(&kind.default_label()));
        }
        assert!(palette.contains("regex      Regex (letters only)"));
        assert!(palette.contains("triple     up to 3 columns"));
        assert!(!palette.contains('\u{1b}'));
    }
}
