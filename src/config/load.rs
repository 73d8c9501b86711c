use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::schema::{CONFIG_VERSION, ConfigFile, Configuration};

/// Name of the config file, resolved against the working directory.
pub const CONFIG_FILE_NAME: &str = "jukebox.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no saved configuration at {}", .0.display())]
    Missing(PathBuf),
    #[error("could not read configuration: {0}")]
    Read(#[from] ::config::ConfigError),
    #[error("unsupported configuration version {found} (expected {})", CONFIG_VERSION)]
    UnsupportedVersion { found: u32 },
    #[error("could not serialize configuration: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl ConfigError {
    /// A missing file is expected on first run and is not a malfunction.
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing(_))
    }
}

/// Loads and saves the [`Configuration`] at a fixed path.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl Default for ConfigStore {
    fn default() -> Self {
        Self::new(CONFIG_FILE_NAME)
    }
}

impl ConfigStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the configuration file.
    pub fn load(&self) -> Result<Configuration, ConfigError> {
        // Anything else at the path (a directory, an unreadable file) is
        // left for the config crate to report.
        if !self.path.exists() {
            return Err(ConfigError::Missing(self.path.clone()));
        }

        let cfg = ::config::Config::builder()
            .add_source(
                ::config::File::from(self.path.as_path())
                    .format(::config::FileFormat::Toml)
                    .required(true),
            )
            .build()?;
        let file: ConfigFile = cfg.try_deserialize()?;

        if file.version != CONFIG_VERSION {
            return Err(ConfigError::UnsupportedVersion {
                found: file.version,
            });
        }

        debug!(path = %self.path.display(), "configuration loaded");
        Ok(Configuration::new(file.media_folder))
    }

    /// Load the configuration, falling back to defaults.
    ///
    /// The error (if any) is handed back so the caller can tell the user.
    pub fn load_or_default(&self) -> (Configuration, Option<ConfigError>) {
        match self.load() {
            Ok(cfg) => (cfg, None),
            Err(e) => {
                if e.is_missing() {
                    info!("{e}; using defaults");
                } else {
                    warn!("failed to load configuration, using defaults: {e}");
                }
                (Configuration::default(), Some(e))
            }
        }
    }

    /// Write `cfg` to the store's path.
    pub fn save(&self, cfg: &Configuration) -> Result<(), ConfigError> {
        let body = toml::to_string(&ConfigFile::from(cfg))?;
        let contents = format!("# jukebox configuration\n{body}");
        fs::write(&self.path, contents).map_err(|source| ConfigError::Write {
            path: self.path.clone(),
            source,
        })?;
        info!(path = %self.path.display(), media_folder = cfg.media_folder(), "configuration saved");
        Ok(())
    }
}
