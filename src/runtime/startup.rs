use std::path::Path;

use tracing::{info, warn};

use crate::app::Notice;
use crate::config::{ConfigError, ConfigStore, Configuration};
use crate::library::{self, Catalog, CatalogError};

/// Everything loaded before the terminal is taken over.
pub struct Startup {
    pub store: ConfigStore,
    pub config: Configuration,
    pub catalog: Catalog,
    /// Messages to show once the UI is up.
    pub notices: Vec<Notice>,
}

fn config_notice(err: &ConfigError) -> Notice {
    if err.is_missing() {
        Notice::info(
            "Configuration",
            "No saved configuration found. Using defaults.",
        )
    } else {
        Notice::error(
            "Configuration",
            format!("Error loading config. Using defaults. ({err})"),
        )
    }
}

/// Load the configuration and scan its media folder.
///
/// Configuration problems are downgraded to notices; catalog errors are
/// returned because the jukebox cannot run without tracks.
pub fn prepare(store: ConfigStore) -> Result<Startup, CatalogError> {
    let (config, load_err) = store.load_or_default();
    let first_run = load_err.as_ref().is_some_and(ConfigError::is_missing);

    let mut notices: Vec<Notice> = load_err.iter().map(config_notice).collect();

    let catalog = library::scan(Path::new(config.media_folder()))?;
    info!(folder = config.media_folder(), "startup scan complete");

    if first_run {
        if let Err(e) = store.save(&config) {
            warn!("could not write initial configuration: {e}");
            notices.push(Notice::error(
                "Configuration",
                format!("Error saving config: {e}"),
            ));
        }
    }

    Ok(Startup {
        store,
        config,
        catalog,
        notices,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::NoticeLevel;
    use crate::config::CONFIG_FILE_NAME;
    use std::fs;

    #[test]
    fn prepare_scans_configured_folder_without_notices() {
        let media = tempfile::tempdir().unwrap();
        fs::write(media.path().join("a.wav"), b"x").unwrap();
        let state = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(state.path().join(CONFIG_FILE_NAME));
        store
            .save(&Configuration::new(media.path().to_string_lossy()))
            .unwrap();

        let startup = prepare(store).unwrap();
        assert!(startup.notices.is_empty());
        assert_eq!(startup.catalog.len(), 1);
    }

    #[test]
    fn prepare_fails_when_configured_folder_is_missing() {
        let state = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(state.path().join(CONFIG_FILE_NAME));
        store
            .save(&Configuration::new(state.path().join("gone").to_string_lossy()))
            .unwrap();

        let err = prepare(store).err().unwrap();
        assert!(matches!(err, CatalogError::MissingDirectory(_)));
    }

    #[test]
    fn prepare_fails_when_folder_has_no_tracks() {
        let media = tempfile::tempdir().unwrap();
        fs::write(media.path().join("cover.jpg"), b"x").unwrap();
        let state = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(state.path().join(CONFIG_FILE_NAME));
        store
            .save(&Configuration::new(media.path().to_string_lossy()))
            .unwrap();

        let err = prepare(store).err().unwrap();
        assert!(matches!(err, CatalogError::NoAudioFiles(_)));
    }

    #[test]
    fn directory_at_config_path_is_an_error_notice_not_first_run() {
        let state = tempfile::tempdir().unwrap();
        let config_path = state.path().join(CONFIG_FILE_NAME);
        fs::create_dir_all(&config_path).unwrap();

        let (_, err) = ConfigStore::new(&config_path).load_or_default();
        let err = err.unwrap();
        assert!(!err.is_missing());
        assert_eq!(config_notice(&err).level, NoticeLevel::Error);
    }

    #[test]
    fn config_notice_separates_first_run_from_broken_file() {
        let missing = ConfigError::Missing("jukebox.toml".into());
        assert_eq!(config_notice(&missing).level, NoticeLevel::Info);

        let broken = ConfigError::UnsupportedVersion { found: 9 };
        let notice = config_notice(&broken);
        assert_eq!(notice.level, NoticeLevel::Error);
        assert!(notice.message.starts_with("Error loading config"));
    }
}
