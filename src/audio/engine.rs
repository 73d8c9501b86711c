use std::path::Path;
use std::time::Duration;

use super::types::PlaybackError;

/// Something that can open audio files for playback.
pub trait Engine {
    type Handle: EngineHandle;

    /// Open `path` and return a handle paused at the start of the stream.
    fn load(&mut self, path: &Path) -> Result<Self::Handle, PlaybackError>;
}

/// A loaded audio stream. Dropping the handle stops and releases it.
pub trait EngineHandle {
    fn play(&mut self);
    fn pause(&mut self);
    /// Move back to the start of the stream without changing play/pause.
    fn restart(&mut self) -> Result<(), PlaybackError>;
    /// The stream ran out of samples.
    fn is_finished(&self) -> bool;
    fn position(&self) -> Duration;
}
