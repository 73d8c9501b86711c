use std::path::{Path, PathBuf};
use std::time::Duration;

/// One playable audio file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Track {
    /// Absolute path of the file.
    pub path: PathBuf,
    /// File name, as shown to the user.
    pub name: String,
    pub duration: Option<Duration>,
}

impl Track {
    pub fn new(path: PathBuf, duration: Option<Duration>) -> Self {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        Self {
            path,
            name,
            duration,
        }
    }
}

/// Sorted audio tracks and cover images found in a media folder.
///
/// `tracks` is never empty when produced by `scan`. Covers are matched to
/// tracks by position only.
#[derive(Debug, Clone)]
pub struct Catalog {
    pub dir: PathBuf,
    pub tracks: Vec<Track>,
    pub covers: Vec<PathBuf>,
}

impl Catalog {
    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub fn track(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Names offered by the track chooser, in catalog order.
    pub fn display_names(&self) -> Vec<String> {
        self.tracks.iter().map(|t| t.name.clone()).collect()
    }

    /// Index of the first track whose path ends with `name`.
    ///
    /// Matching is done on whole path components, so `b.wav` does not match
    /// `/music/ab.wav`.
    pub fn position_of(&self, name: &str) -> Option<usize> {
        if name.is_empty() {
            return None;
        }
        self.tracks.iter().position(|t| t.path.ends_with(name))
    }
}
