use super::*;

fn store_in(dir: &tempfile::TempDir) -> ConfigStore {
    ConfigStore::new(dir.path().join(CONFIG_FILE_NAME))
}

#[test]
fn default_configuration_uses_default_folder() {
    assert_eq!(Configuration::default().media_folder(), DEFAULT_MEDIA_FOLDER);
}

#[test]
fn setter_replaces_media_folder() {
    let mut cfg = Configuration::default();
    cfg.set_media_folder("/srv/music");
    assert_eq!(cfg.media_folder(), "/srv/music");
}

#[test]
fn save_then_load_round_trips_media_folder() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.save(&Configuration::new("X")).unwrap();
    let loaded = store.load().unwrap();
    assert_eq!(loaded.media_folder(), "X");
}

#[test]
fn saved_file_is_versioned_toml() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    store.save(&Configuration::new("Mixtapes")).unwrap();
    let text = std::fs::read_to_string(store.path()).unwrap();
    assert!(text.contains("version = 1"));
    assert!(text.contains("media_folder = \"Mixtapes\""));
}

#[test]
fn load_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);

    let err = store.load().unwrap_err();
    assert!(err.is_missing());
}

#[test]
fn directory_in_place_of_file_is_a_read_error_not_first_run() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::create_dir_all(store.path()).unwrap();

    let err = store.load().unwrap_err();
    assert!(!err.is_missing());
    assert!(matches!(err, ConfigError::Read(_)));

    let (cfg, err) = store.load_or_default();
    assert_eq!(cfg, Configuration::default());
    assert!(err.is_some_and(|e| !e.is_missing()));
}

#[test]
fn load_accepts_file_without_version() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "media_folder = \"old\"\n").unwrap();

    assert_eq!(store.load().unwrap().media_folder(), "old");
}

#[test]
fn load_rejects_unknown_version() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "version = 7\nmedia_folder = \"x\"\n").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, ConfigError::UnsupportedVersion { found: 7 }));
}

#[test]
fn load_rejects_malformed_file() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "this is = = not toml").unwrap();

    assert!(matches!(store.load().unwrap_err(), ConfigError::Read(_)));
}

#[test]
fn load_or_default_falls_back_and_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = store_in(&dir);
    std::fs::write(store.path(), "version = 1\n").unwrap();

    let (cfg, err) = store.load_or_default();
    assert_eq!(cfg, Configuration::default());
    assert!(matches!(err, Some(ConfigError::Read(_))));
}

#[test]
fn load_or_default_without_file_is_missing_not_malformed() {
    let dir = tempfile::tempdir().unwrap();
    let (cfg, err) = store_in(&dir).load_or_default();
    assert_eq!(cfg, Configuration::default());
    assert!(err.is_some_and(|e| e.is_missing()));
}

#[test]
fn save_into_missing_directory_reports_write_error() {
    let dir = tempfile::tempdir().unwrap();
    let store = ConfigStore::new(dir.path().join("nope").join(CONFIG_FILE_NAME));

    let err = store.save(&Configuration::default()).unwrap_err();
    assert!(matches!(err, ConfigError::Write { .. }));
}
