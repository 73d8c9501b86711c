use std::path::{Path, PathBuf};

/// Fallback cover looked up inside the media folder.
pub const DEFAULT_COVER: &str = "default.jpg";

/// Pick the cover image for the track at `index`.
///
/// Covers are matched by position: the n-th sorted cover belongs to the n-th
/// sorted track. Without a positional match, `default.jpg` inside
/// `media_folder` is used when present.
pub fn resolve(index: Option<usize>, covers: &[PathBuf], media_folder: &Path) -> Option<PathBuf> {
    if let Some(cover) = index.and_then(|i| covers.get(i)) {
        return Some(cover.clone());
    }

    let fallback = media_folder.join(DEFAULT_COVER);
    fallback.is_file().then_some(fallback)
}
