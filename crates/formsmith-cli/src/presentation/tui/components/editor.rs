use ratatui::{
    Frame,
    layout::Rect,
    widgets::{Clear, Paragraph},
};

use super::{Component, pane};
use crate::presentation::tui::app::{AppState, Mode};

/// Text box drawn over the preview while a label or option list is edited
pub(crate) struct EditorComponent;

impl Component for EditorComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let (title, buffer) = match &state.mode {
            Mode::EditLabel { buffer } => ("Label (enter saves)", buffer),
            Mode::EditOptions { buffer } => ("Options (ctrl-s saves)", buffer),
            _ => return,
        };

        let text = format!("{}_", buffer);
        f.render_widget(Clear, area);
        f.render_widget(Paragraph::new(text).block(pane(title, true)), area);
    }
}
