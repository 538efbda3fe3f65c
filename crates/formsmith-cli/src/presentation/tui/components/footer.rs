use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::Component;
use crate::presentation::tui::app::{AppState, Mode};

pub(crate) struct FooterComponent;

fn key(text: &'static str) -> Span<'static> {
    Span::styled(text, Style::default().fg(Color::Yellow))
}

impl Component for FooterComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let help = match state.mode {
            Mode::Normal => Line::from(vec![
                key("[1-7]"),
                Span::raw("add "),
                key("[j/k]"),
                Span::raw("select "),
                key("[space]"),
                Span::raw("move "),
                key("[e]"),
                Span::raw("label "),
                key("[o]"),
                Span::raw("options "),
                key("[v]"),
                Span::raw("validation "),
                key("[x]"),
                Span::raw("remove "),
                key("[s]"),
                Span::raw("submit "),
                key("[w]"),
                Span::raw("write "),
                key("[tab]"),
                Span::raw("pane "),
                key("[q]"),
                Span::raw("uit"),
            ]),
            Mode::Dragging { .. } => Line::from(vec![
                key("[j/k]"),
                Span::raw("slot "),
                key("[space/enter]"),
                Span::raw("drop "),
                key("[esc]"),
                Span::raw("cancel"),
            ]),
            Mode::EditLabel { .. } => Line::from(vec![
                key("[enter]"),
                Span::raw("save "),
                key("[esc]"),
                Span::raw("cancel"),
            ]),
            Mode::EditOptions { .. } => Line::from(vec![
                key("[enter]"),
                Span::raw("new line "),
                key("[ctrl-s]"),
                Span::raw("save "),
                key("[esc]"),
                Span::raw("cancel"),
            ]),
        };

        let lines = vec![Line::from(state.status.as_str()), help];
        f.render_widget(Paragraph::new(lines), area);
    }
}
