//! In-memory engine that records what the controller asks of it.

use std::cell::{Cell, RefCell};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::Duration;

use super::engine::{Engine, EngineHandle};
use super::types::PlaybackError;

/// Shared counters, readable after the engine has moved into a controller.
#[derive(Debug, Default)]
pub struct Probe {
    pub live: Cell<usize>,
    pub max_live: Cell<usize>,
    pub loads: RefCell<Vec<PathBuf>>,
    pub restarts: Cell<usize>,
    pub playing: Cell<bool>,
    pub finished: Cell<bool>,
}

impl Probe {
    pub fn load_count(&self) -> usize {
        self.loads.borrow().len()
    }
}

#[derive(Default)]
pub struct FakeEngine {
    pub probe: Rc<Probe>,
    /// Paths that fail to open.
    pub broken: Vec<PathBuf>,
    pub cannot_seek: bool,
}

impl FakeEngine {
    pub fn new() -> (Self, Rc<Probe>) {
        let engine = Self::default();
        let probe = engine.probe.clone();
        (engine, probe)
    }
}

impl Engine for FakeEngine {
    type Handle = FakeHandle;

    fn load(&mut self, path: &Path) -> Result<FakeHandle, PlaybackError> {
        self.probe.loads.borrow_mut().push(path.to_path_buf());
        if self.broken.iter().any(|b| b == path) {
            return Err(PlaybackError::Open {
                path: path.to_path_buf(),
                source: io::Error::new(io::ErrorKind::NotFound, "gone"),
            });
        }

        let live = self.probe.live.get() + 1;
        self.probe.live.set(live);
        self.probe.max_live.set(self.probe.max_live.get().max(live));
        self.probe.finished.set(false);
        self.probe.playing.set(false);

        Ok(FakeHandle {
            probe: self.probe.clone(),
            path: path.to_path_buf(),
            cannot_seek: self.cannot_seek,
        })
    }
}

pub struct FakeHandle {
    probe: Rc<Probe>,
    path: PathBuf,
    cannot_seek: bool,
}

impl EngineHandle for FakeHandle {
    fn play(&mut self) {
        self.probe.playing.set(true);
    }

    fn pause(&mut self) {
        self.probe.playing.set(false);
    }

    /// Like a drained rodio sink, a finished stream stays finished: seeking
    /// succeeds but there is nothing left to play.
    fn restart(&mut self) -> Result<(), PlaybackError> {
        if self.cannot_seek {
            return Err(PlaybackError::Open {
                path: self.path.clone(),
                source: io::Error::other("seeking not supported"),
            });
        }
        self.probe.restarts.set(self.probe.restarts.get() + 1);
        Ok(())
    }

    fn is_finished(&self) -> bool {
        self.probe.finished.get()
    }

    fn position(&self) -> Duration {
        Duration::from_secs(3)
    }
}

impl Drop for FakeHandle {
    fn drop(&mut self) {
        self.probe.live.set(self.probe.live.get() - 1);
        self.probe.playing.set(false);
    }
}
