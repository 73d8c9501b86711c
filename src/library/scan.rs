use std::path::{Path, PathBuf};
use std::time::Duration;

use lofty::file::AudioFile;
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use super::model::{Catalog, Track};

pub const AUDIO_EXTENSION: &str = "wav";
pub const COVER_EXTENSION: &str = "jpg";

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("media directory not found: {}", .0.display())]
    MissingDirectory(PathBuf),
    #[error("no .{} files found in {}", AUDIO_EXTENSION, .0.display())]
    NoAudioFiles(PathBuf),
    #[error("could not read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn has_extension(path: &Path, wanted: &str) -> bool {
    path.extension()
        .and_then(|s| s.to_str())
        .map(|ext| ext.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

fn probe_duration(path: &Path) -> Option<Duration> {
    lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
        .filter(|d| !d.is_zero())
}

fn sort_by_path(paths: &mut [PathBuf]) {
    paths.sort_by(|a, b| a.as_os_str().cmp(b.as_os_str()));
}

/// List the `.wav` and `.jpg` files directly inside `dir`.
///
/// Both lists are sorted by path. Subdirectories are not visited.
pub fn scan(dir: &Path) -> Result<Catalog, CatalogError> {
    if !dir.is_dir() {
        return Err(CatalogError::MissingDirectory(dir.to_path_buf()));
    }
    let root = std::path::absolute(dir).map_err(|source| CatalogError::Io {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut audio: Vec<PathBuf> = Vec::new();
    let mut covers: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(&root)
        .min_depth(1)
        .max_depth(1)
        .follow_links(true)
    {
        let entry = match entry {
            Ok(entry) => entry,
            // The folder itself could not be listed.
            Err(e) if e.depth() == 0 || e.path() == Some(root.as_path()) => {
                return Err(CatalogError::Io {
                    path: root.clone(),
                    source: e.into(),
                });
            }
            Err(e) => {
                warn!("skipping unreadable entry: {e}");
                continue;
            }
        };
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        if has_extension(path, AUDIO_EXTENSION) {
            audio.push(path.to_path_buf());
        } else if has_extension(path, COVER_EXTENSION) {
            covers.push(path.to_path_buf());
        } else {
            debug!(path = %path.display(), "skipping non-media file");
        }
    }

    if audio.is_empty() {
        return Err(CatalogError::NoAudioFiles(root));
    }

    sort_by_path(&mut audio);
    sort_by_path(&mut covers);

    let tracks: Vec<Track> = audio
        .into_iter()
        .map(|path| {
            let duration = probe_duration(&path);
            Track::new(path, duration)
        })
        .collect();

    info!(
        dir = %root.display(),
        tracks = tracks.len(),
        covers = covers.len(),
        "media folder scanned"
    );

    Ok(Catalog {
        dir: root,
        tracks,
        covers,
    })
}
