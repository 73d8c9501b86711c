use std::error::Error;
use std::path::PathBuf;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Directory (relative to the working directory) holding the log files.
pub const LOG_DIR: &str = "logs";
const LOG_FILE_PREFIX: &str = "jukebox.log";
const DEFAULT_FILTER: &str = "info,jukebox=debug";

/// Send `tracing` output to a daily-rotated file.
///
/// The terminal belongs to the UI, so nothing is logged to stdout/stderr.
/// Keep the returned guard alive until exit so buffered lines get flushed.
pub fn init() -> Result<WorkerGuard, Box<dyn Error>> {
    let log_dir = PathBuf::from(LOG_DIR);
    std::fs::create_dir_all(&log_dir)?;

    let file_appender = tracing_appender::rolling::daily(&log_dir, LOG_FILE_PREFIX);
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let subscriber = tracing_subscriber::fmt()
        .with_writer(file_writer)
        .with_target(true)
        .with_level(true)
        .with_ansi(false)
        .with_env_filter(EnvFilter::new(DEFAULT_FILTER))
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;
    Ok(guard)
}
