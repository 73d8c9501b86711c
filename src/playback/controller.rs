use std::time::{Duration, Instant};

use tracing::{debug, info, warn};

use crate::audio::{Engine, EngineHandle, PlaybackError};
use crate::library::Catalog;

use super::state::{PlaybackEvent, PlaybackState, Status};
use super::timer::RefreshTimer;

/// Transport controls over a [`Catalog`].
///
/// Owns at most one engine handle at a time: a new track is only loaded after
/// the previous handle has been dropped.
pub struct Controller<E: Engine> {
    engine: E,
    handle: Option<E::Handle>,
    state: PlaybackState,
    timer: RefreshTimer,
}

impl<E: Engine> Controller<E> {
    pub fn new(engine: E) -> Self {
        Self {
            engine,
            handle: None,
            state: PlaybackState::default(),
            timer: RefreshTimer::default(),
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn current(&self) -> Option<usize> {
        self.state.current
    }

    pub fn has_handle(&self) -> bool {
        self.handle.is_some()
    }

    pub fn timer(&self) -> &RefreshTimer {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut RefreshTimer {
        &mut self.timer
    }

    /// Elapsed time of the loaded track.
    pub fn position(&self) -> Option<Duration> {
        self.handle.as_ref().map(|h| h.position())
    }

    /// Load the selected track from the start and play it.
    ///
    /// Fails with `InvalidIndex` (without touching the current handle) when
    /// nothing valid is selected. After a failed load no handle is held and
    /// the status is `Stopped`.
    pub fn play(&mut self, catalog: &Catalog) -> Result<(), PlaybackError> {
        let index = self.state.track_index(catalog.len())?;
        let track = &catalog.tracks[index];

        self.release_handle();

        let mut handle = match self.engine.load(&track.path) {
            Ok(h) => h,
            Err(e) => {
                self.state = self.state.with_status(Status::Stopped);
                return Err(e);
            }
        };
        self.state = self.state.with_status(Status::Loaded);

        handle.play();
        self.handle = Some(handle);
        self.state = self.state.with_status(Status::Playing);
        self.timer.start(Instant::now());

        info!(index, track = %track.name, "playing");
        Ok(())
    }

    /// Pause the playing track. No-op unless playing.
    pub fn stop(&mut self) {
        if !self.state.is_playing() {
            return;
        }
        if let Some(h) = self.handle.as_mut() {
            h.pause();
        }
        self.timer.stop();
        self.state = self.state.with_status(Status::Stopped);
        debug!(index = ?self.state.current, "stopped");
    }

    /// Jump back to the start of the loaded track and play it.
    ///
    /// Without a handle this does nothing. When the stream already played to
    /// its end or cannot seek, the track is reloaded instead.
    pub fn rewind(&mut self, catalog: &Catalog) -> Result<(), PlaybackError> {
        let Some(handle) = self.handle.as_mut() else {
            return Ok(());
        };

        // A drained sink has nothing left to seek in.
        if handle.is_finished() {
            debug!(index = ?self.state.current, "stream drained, reloading track");
            return self.play(catalog);
        }

        match handle.restart() {
            Ok(()) => {
                handle.play();
                self.state = self.state.with_status(Status::Playing);
                self.timer.start(Instant::now());
                debug!(index = ?self.state.current, "rewound");
                Ok(())
            }
            Err(e) => {
                warn!("seek to start failed, reloading track: {e}");
                self.play(catalog)
            }
        }
    }

    /// Advance to the following track (wrapping) and play it.
    pub fn next(&mut self, catalog: &Catalog) -> Result<(), PlaybackError> {
        if catalog.is_empty() {
            return Err(PlaybackError::InvalidIndex {
                index: self.state.current,
                len: 0,
            });
        }
        self.state = self.state.advance(catalog.len());
        self.play(catalog)
    }

    /// Play the track whose path ends with `name`.
    ///
    /// Returns `Ok(false)` and changes nothing when no track matches.
    pub fn select(&mut self, catalog: &Catalog, name: &str) -> Result<bool, PlaybackError> {
        let Some(index) = catalog.position_of(name) else {
            debug!(name, "no track matches selection");
            return Ok(false);
        };
        self.state = self.state.select(index);
        self.play(catalog)?;
        Ok(true)
    }

    /// Check the engine for end of stream.
    ///
    /// Reported once per loaded track. Only the refresh timer and the status
    /// change; the handle stays loaded so `rewind` can replay it.
    pub fn poll(&mut self) -> Option<PlaybackEvent> {
        if !self.state.is_playing() {
            return None;
        }
        let finished = self.handle.as_ref().is_some_and(|h| h.is_finished());
        if !finished {
            return None;
        }

        self.timer.stop();
        self.state = self.state.with_status(Status::Stopped);
        let index = self.state.current?;
        info!(index, "track finished");
        Some(PlaybackEvent::Finished { index })
    }

    /// Drop the handle and forget the selection.
    pub fn release(&mut self) {
        self.release_handle();
        self.state = PlaybackState::default();
    }

    fn release_handle(&mut self) {
        if let Some(handle) = self.handle.take() {
            drop(handle);
        }
        self.timer.stop();
    }
}
