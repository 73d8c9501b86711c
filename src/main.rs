use std::process::ExitCode;

mod app;
mod audio;
mod config;
mod library;
mod playback;
mod runtime;
mod ui;

fn main() -> ExitCode {
    // Keep the guard alive so buffered log lines are flushed on exit.
    let _log_guard = match runtime::logging::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("jukebox: logging disabled: {e}");
            None
        }
    };

    match runtime::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("fatal: {e}");
            eprintln!("jukebox: {e}");
            ExitCode::FAILURE
        }
    }
}
