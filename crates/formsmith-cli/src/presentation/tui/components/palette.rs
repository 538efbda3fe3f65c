use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::{Component, pane};
use crate::presentation::tui::app::AppState;
use formsmith_types::FieldKind;

pub(crate) struct PaletteComponent;

impl Component for PaletteComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let mut lines: Vec<Line> = FieldKind::ALL
            .iter()
            .enumerate()
            .map(|(slot, kind)| {
                Line::from(vec![
                    Span::styled(
                        format!("[{}] ", slot + 1),
                        Style::default().fg(Color::Yellow),
                    ),
                    Span::raw(kind.token()),
                ])
            })
            .collect();

        let layout = state.builder.layout();
        lines.push(Line::from(vec![
            Span::styled("[l] ", Style::default().fg(Color::Yellow)),
            Span::raw(format!("layout: {}", layout)),
        ]));

        f.render_widget(Paragraph::new(lines).block(pane("Palette", false)), area);
    }
}
