use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use super::app::{AppState, Mode};
use super::components::{
    CodeComponent, Component, EditorComponent, FieldListComponent, FooterComponent,
    PaletteComponent, PreviewComponent,
};

pub(crate) fn draw(f: &mut Frame, state: &mut AppState) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Panes
            Constraint::Length(2), // Status + help
        ])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(28),
            Constraint::Percentage(36),
            Constraint::Percentage(36),
        ])
        .split(rows[0]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(10), // 7 kinds + layout + borders
            Constraint::Min(0),
        ])
        .split(columns[0]);

    PaletteComponent.render(f, left[0], state);
    FieldListComponent.render(f, left[1], state);
    PreviewComponent.render(f, columns[1], state);
    CodeComponent.render(f, columns[2], state);

    if matches!(state.mode, Mode::EditLabel { .. } | Mode::EditOptions { .. }) {
        EditorComponent.render(f, columns[1], state);
    }

    FooterComponent.render(f, rows[1], state);
}
