use ratatui::{Frame, layout::Rect, widgets::Paragraph};

use super::{Component, pane};
use crate::presentation::tui::app::{AppState, CELL_PX, Pane};
use formsmith_engine::render_text;

pub(crate) struct PreviewComponent;

impl Component for PreviewComponent {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState) {
        state.preview_width = u32::from(area.width.saturating_sub(2)) * CELL_PX;
        let form = state.builder.preview(state.preview_width);

        let title = format!("Preview ({} col)", form.columns);
        let body = Paragraph::new(render_text(&form))
            .block(pane(&title, state.focus == Pane::Preview))
            .scroll((state.preview_scroll, 0));

        f.render_widget(body, area);
    }
}
