use serde::{Deserialize, Serialize};

/// Folder scanned when no configuration has been saved yet.
pub const DEFAULT_MEDIA_FOLDER: &str = "Songs and cover images";

/// Current on-disk format version.
pub const CONFIG_VERSION: u32 = 1;

/// Runtime configuration of the jukebox.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    media_folder: String,
}

impl Configuration {
    pub fn new(media_folder: impl Into<String>) -> Self {
        Self {
            media_folder: media_folder.into(),
        }
    }

    pub fn media_folder(&self) -> &str {
        &self.media_folder
    }

    pub fn set_media_folder(&mut self, media_folder: impl Into<String>) {
        self.media_folder = media_folder.into();
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self::new(DEFAULT_MEDIA_FOLDER)
    }
}

/// On-disk representation of [`Configuration`].
///
/// File format: TOML
///
/// ```toml
/// version = 1
/// media_folder = "Songs and cover images"
/// ```
///
/// A file without `version` is read as the current version.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(super) struct ConfigFile {
    #[serde(default = "current_version")]
    pub version: u32,
    pub media_folder: String,
}

fn current_version() -> u32 {
    CONFIG_VERSION
}

impl From<&Configuration> for ConfigFile {
    fn from(cfg: &Configuration) -> Self {
        Self {
            version: CONFIG_VERSION,
            media_folder: cfg.media_folder.clone(),
        }
    }
}
