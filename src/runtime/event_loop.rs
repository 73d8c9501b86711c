use std::io::Stdout;
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::app::{Action, App};
use crate::audio::Engine;
use crate::ui::{self, CoverArt};

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Main terminal event loop: ticks playback, draws, and dispatches keys.
/// Returns `Ok(())` when the user quits.
pub fn run<E: Engine>(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    app: &mut App<E>,
) -> Result<(), Box<dyn std::error::Error>> {
    let mut art = CoverArt::default();
    let mut rng = rand::rng();

    loop {
        app.tick(Instant::now(), &mut rng);
        art.sync(app.cover.as_deref());

        terminal.draw(|f| ui::draw(f, app, &art))?;

        if event::poll(INPUT_POLL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if handle_key_event(key, app) {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// Main-screen key bindings.
pub fn action_for(key: KeyEvent) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }
    match key.code {
        KeyCode::Char('p') | KeyCode::Char(' ') => Some(Action::Play),
        KeyCode::Char('s') => Some(Action::Stop),
        KeyCode::Char('r') => Some(Action::Rewind),
        KeyCode::Char('n') => Some(Action::Next),
        KeyCode::Char('c') => Some(Action::Choose),
        KeyCode::Char('o') => Some(Action::ChangeFolder),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Route `key` to whatever currently has focus. Returns `true` to quit.
///
/// A pending notice swallows the key; otherwise the chooser, then the
/// folder prompt, then the main screen.
pub fn handle_key_event<E: Engine>(key: KeyEvent, app: &mut App<E>) -> bool {
    if app.current_notice().is_some() {
        app.dismiss_notice();
        return false;
    }

    if let Some(chooser) = app.chooser.as_mut() {
        match key.code {
            KeyCode::Char('j') | KeyCode::Down => chooser.next(),
            KeyCode::Char('k') | KeyCode::Up => chooser.prev(),
            KeyCode::Enter => app.choose_selected(),
            KeyCode::Esc | KeyCode::Char('q') => app.cancel_chooser(),
            _ => {}
        }
        return false;
    }

    if app.folder_prompt.is_some() {
        match key.code {
            KeyCode::Enter => app.submit_folder_prompt(),
            KeyCode::Esc => app.cancel_folder_prompt(),
            KeyCode::Backspace => app.pop_prompt_char(),
            KeyCode::Char(c) if !c.is_control() => app.push_prompt_char(c),
            _ => {}
        }
        return false;
    }

    match action_for(key) {
        Some(action) => !app.perform(action),
        None => false,
    }
}
