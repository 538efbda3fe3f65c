use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, pane};
use crate::presentation::tui::app::{AppState, Mode};

pub(crate) struct FieldListComponent;

impl Component for FieldListComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let block = pane("Fields", matches!(state.mode, Mode::Dragging { .. }));

        let fields = state.display_order();
        if fields.is_empty() {
            let empty = Paragraph::new(Span::styled(
                "No fields yet",
                Style::default().fg(Color::DarkGray),
            ))
            .block(block);
            f.render_widget(empty, area);
            return;
        }

        // While dragging, the highlight follows the drop slot
        let (highlight, dragging) = match state.mode {
            Mode::Dragging { target, .. } => (target, true),
            _ => (state.selected, false),
        };

        let lines: Vec<Line> = fields
            .iter()
            .enumerate()
            .map(|(index, field)| {
                let marker = match (index == highlight, dragging) {
                    (true, true) => "=> ",
                    (true, false) => "> ",
                    _ => "  ",
                };
                let style = if index == highlight {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                let mut spans = vec![
                    Span::styled(marker, Style::default().fg(Color::Yellow)),
                    Span::styled(field.label.clone(), style),
                    Span::styled(
                        format!("  {}", field.kind),
                        Style::default().fg(Color::DarkGray),
                    ),
                ];
                if let Some(rule) = field.validation {
                    spans.push(Span::styled(
                        format!("  [{}]", rule.describe()),
                        Style::default().fg(Color::Green),
                    ));
                }
                Line::from(spans)
            })
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}
