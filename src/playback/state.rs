use crate::audio::PlaybackError;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Nothing selected or loaded yet.
    Idle,
    /// A track is open but has not been started.
    Loaded,
    Playing,
    Stopped,
}

impl Default for Status {
    fn default() -> Self {
        Self::Idle
    }
}

/// Current track selection plus playback status.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct PlaybackState {
    /// Index into the catalog's tracks; `None` until something is chosen.
    pub current: Option<usize>,
    pub status: Status,
}

impl PlaybackState {
    /// Step to the following track, wrapping at `len`. From no selection the
    /// first track is chosen.
    pub fn advance(self, len: usize) -> Self {
        if len == 0 {
            return self;
        }
        let next = self.current.map_or(0, |i| (i + 1) % len);
        Self {
            current: Some(next),
            ..self
        }
    }

    pub fn select(self, index: usize) -> Self {
        Self {
            current: Some(index),
            ..self
        }
    }

    pub fn with_status(self, status: Status) -> Self {
        Self { status, ..self }
    }

    /// The selected index, if it points into a catalog of `len` tracks.
    pub fn track_index(self, len: usize) -> Result<usize, PlaybackError> {
        match self.current {
            Some(i) if i < len => Ok(i),
            index => Err(PlaybackError::InvalidIndex { index, len }),
        }
    }

    pub fn is_playing(self) -> bool {
        self.status == Status::Playing
    }
}

/// Notification raised by the engine side and consumed by the controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaybackEvent {
    /// The track at `index` played to its end.
    Finished { index: usize },
}
