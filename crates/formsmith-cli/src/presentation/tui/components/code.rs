use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use super::{Component, pane};
use crate::presentation::tui::app::{AppState, Pane};

pub(crate) struct CodeComponent;

impl Component for CodeComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        let title = format!(
            "{}.tsx (rev {})",
            state.builder.codegen_options().component_name,
            state.builder.revision()
        );
        let body = Paragraph::new(state.builder.code())
            .block(pane(&title, state.focus == Pane::Code))
            .scroll((state.code_scroll, 0));

        f.render_widget(body, area);
    }
}
