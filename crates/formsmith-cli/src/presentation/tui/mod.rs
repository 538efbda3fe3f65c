//! Interactive editor: five panes over one `FormBuilder`.

mod app;
mod components;
mod ui;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use formsmith_runtime::FormBuilder;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::path::PathBuf;

use app::{AppState, Control};

pub fn run(builder: FormBuilder, export_dir: PathBuf) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Restore the terminal if the process is interrupted from outside
    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let mut state = AppState::new(builder, export_dir);
    tracing::info!(export_dir = %state.export_dir.display(), "editor started");
    let result = event_loop(&mut terminal, &mut state);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    state: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, state))?;

        if let Event::Key(key) = event::read()?
            && state.handle_key(key) == Control::Quit
        {
            break;
        }
    }

    Ok(())
}
