//! `rodio` backend: one output stream, one `Sink` per loaded track.

use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::time::Duration;

use rodio::{Decoder, OutputStream, OutputStreamBuilder, Sink};
use tracing::debug;

use super::engine::{Engine, EngineHandle};
use super::types::PlaybackError;

pub struct RodioEngine {
    stream: OutputStream,
}

impl RodioEngine {
    /// Open the default output device.
    pub fn open_default() -> Result<Self, PlaybackError> {
        let mut stream = OutputStreamBuilder::open_default_stream()?;
        // rodio logs to stderr when OutputStream is dropped, which would land
        // on top of the terminal UI.
        stream.log_on_drop(false);
        Ok(Self { stream })
    }
}

impl Engine for RodioEngine {
    type Handle = SinkHandle;

    fn load(&mut self, path: &Path) -> Result<SinkHandle, PlaybackError> {
        let file = File::open(path).map_err(|source| PlaybackError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        let source = Decoder::new(BufReader::new(file)).map_err(|source| PlaybackError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

        let sink = Sink::connect_new(self.stream.mixer());
        sink.append(source);
        sink.pause();
        debug!(path = %path.display(), "sink created");

        Ok(SinkHandle {
            sink,
            path: path.to_path_buf(),
        })
    }
}

pub struct SinkHandle {
    sink: Sink,
    path: PathBuf,
}

impl EngineHandle for SinkHandle {
    fn play(&mut self) {
        self.sink.play();
    }

    fn pause(&mut self) {
        self.sink.pause();
    }

    fn restart(&mut self) -> Result<(), PlaybackError> {
        self.sink
            .try_seek(Duration::ZERO)
            .map_err(|source| PlaybackError::Seek {
                path: self.path.clone(),
                source,
            })
    }

    /// rodio drops a source from the queue once it is exhausted, so an empty
    /// sink cannot be rewound.
    fn is_finished(&self) -> bool {
        self.sink.empty()
    }

    fn position(&self) -> Duration {
        self.sink.get_pos()
    }
}

impl Drop for SinkHandle {
    fn drop(&mut self) {
        self.sink.stop();
        debug!(path = %self.path.display(), "sink released");
    }
}
