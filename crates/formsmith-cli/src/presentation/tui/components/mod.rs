use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
};

use super::app::AppState;

pub(crate) trait Component {
    fn render(&self, f: &mut Frame, area: Rect, state: &mut AppState);
}

pub(crate) mod code;
pub(crate) mod editor;
pub(crate) mod field_list;
pub(crate) mod footer;
pub(crate) mod palette;
pub(crate) mod preview;

pub(crate) use code::CodeComponent;
pub(crate) use editor::EditorComponent;
pub(crate) use field_list::FieldListComponent;
pub(crate) use footer::FooterComponent;
pub(crate) use palette::PaletteComponent;
pub(crate) use preview::PreviewComponent;

/// Bordered pane block; the focused pane gets a highlighted border
pub(crate) fn pane(title: &str, focused: bool) -> Block<'_> {
    let color = if focused { Color::Cyan } else { Color::DarkGray };
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}
