mod app;
mod ui;

pub use app::{App, Command, Mode, PlayerForm};

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use pawdeck_client::RosterBackend;

/// Run the interactive board until the user quits.
///
/// The loop is single-threaded and cooperative: it blocks at network
/// boundaries inside `dispatch`, so a repaint always follows the completion
/// of the operation that triggered it, never a stale earlier fetch.
pub fn run<B: RosterBackend>(mut app: App<B>) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    ctrlc::set_handler(move || {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        std::process::exit(0);
    })?;

    let tick_rate = Duration::from_millis(250);

    while !app.should_quit {
        terminal.draw(|f| {
            ui::draw(f, &app);
        })?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    handle_key(key, &mut app);
                }
            }
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}

fn handle_key<B: RosterBackend>(key: KeyEvent, app: &mut App<B>) {
    if let Some(command) = app.command_for_key(key.code) {
        app.dispatch(command);
        return;
    }

    // Anything that is not a control command is form text editing.
    app.handle_form_edit(key.code);
}
