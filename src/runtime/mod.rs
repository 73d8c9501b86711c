use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::info;

use crate::app::App;
use crate::audio::RodioEngine;
use crate::config::ConfigStore;
use crate::playback::Controller;

mod event_loop;
pub mod logging;
mod startup;

/// Load configuration, scan the media folder, open the audio device and run
/// the terminal UI until the user quits.
///
/// Errors returned before the terminal is taken over are fatal startup
/// errors (no media folder, no tracks, no output device).
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let startup = startup::prepare(ConfigStore::default())?;
    let engine = RodioEngine::open_default()?;

    let mut app = App::new(
        startup.config,
        startup.store,
        startup.catalog,
        Controller::new(engine),
    );
    for notice in startup.notices {
        app.notify(notice);
    }
    info!(tracks = app.catalog.len(), "jukebox ready");

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let run_result = event_loop::run(&mut terminal, &mut app);

    // Stop audio before restoring the terminal.
    app.player.release();

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    run_result
}
