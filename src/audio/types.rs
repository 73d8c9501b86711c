//! Audio error type.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    /// The controller's index does not point into the catalog.
    #[error("{}", describe_index(*index, *len))]
    InvalidIndex { index: Option<usize>, len: usize },
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: rodio::decoder::DecoderError,
    },
    #[error("failed to seek in {}: {source}", path.display())]
    Seek {
        path: PathBuf,
        #[source]
        source: rodio::source::SeekError,
    },
    #[error("no audio output device: {0}")]
    Output(#[from] rodio::StreamError),
}

impl PlaybackError {
    pub fn is_no_selection(&self) -> bool {
        matches!(self, Self::InvalidIndex { index: None, .. })
    }
}

fn describe_index(index: Option<usize>, len: usize) -> String {
    match index {
        None => "no track selected".to_string(),
        Some(i) => format!("track index {i} is out of range ({len} tracks)"),
    }
}
