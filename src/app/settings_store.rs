// CarCare - app/settings_store.rs
//
// Persisted user-settings store: the JSON file behind the theme toggle and
// the settings page.
//
// Design principles:
// - Saves are atomic (write→temp, rename→final) so a crash during save
//   never corrupts the previous good settings file.
// - Load errors are silently discarded: a missing, corrupt, or
//   incompatible file just means defaults, never an error surfaced to the
//   user. The next save rewrites the file wholesale.
// - Writes go through read-modify-write (`merge`) so concurrent edits to
//   unrelated fields by a future second surface are not clobbered.

use crate::core::settings::UserSettings;
use crate::util::constants::SETTINGS_FILE_NAME;
use crate::util::error::SettingsError;
use std::path::{Path, PathBuf};

/// Handle to the settings file in the platform config directory.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    /// Store rooted in the given config directory.
    pub fn new(config_dir: &Path) -> Self {
        Self {
            path: config_dir.join(SETTINGS_FILE_NAME),
        }
    }

    /// Store at an explicit file path (tests, --config-dir overrides).
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the persisted settings.
    ///
    /// Returns `None` on any failure: file not found (normal first run),
    /// unreadable file, or malformed JSON. Malformed content is logged as
    /// a warning and treated as "start fresh" rather than aborting the
    /// caller.
    pub fn load(&self) -> Option<UserSettings> {
        let content = std::fs::read_to_string(&self.path)
            .map_err(|e| {
                // Distinguish "file not found" (normal first run) from other errors.
                if e.kind() != std::io::ErrorKind::NotFound {
                    tracing::debug!(path = %self.path.display(), error = %e, "Cannot read settings file");
                }
            })
            .ok()?;

        let settings: UserSettings = serde_json::from_str(&content)
            .map_err(|e| {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Settings file is malformed — using defaults"
                );
            })
            .ok()?;

        tracing::debug!(path = %self.path.display(), "Settings file loaded");
        Some(settings)
    }

    /// Save `settings` atomically (write temp → rename).
    ///
    /// Creates all parent directories as needed.
    pub fn save(&self, settings: &UserSettings) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::CreateDir {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let json = serde_json::to_string_pretty(settings)
            .map_err(|e| SettingsError::Serialize { source: e })?;

        // Atomic write: write to a sibling temp file then rename.
        // A crash between write and rename loses the new settings but never
        // corrupts the previous ones (rename is atomic on all supported
        // platforms).
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, json.as_bytes()).map_err(|e| SettingsError::WriteTemp {
            path: tmp.clone(),
            source: e,
        })?;

        std::fs::rename(&tmp, &self.path).map_err(|e| {
            // Clean up the temp file on failure; ignore any secondary error.
            let _ = std::fs::remove_file(&tmp);
            SettingsError::Finalize {
                path: self.path.clone(),
                source: e,
            }
        })?;

        tracing::debug!(path = %self.path.display(), "Settings saved");
        Ok(())
    }

    /// Read-modify-write: load the persisted settings (synthesizing the
    /// default object when none exist), apply `mutate`, save the result,
    /// and return it.
    pub fn merge(
        &self,
        mutate: impl FnOnce(&mut UserSettings),
    ) -> Result<UserSettings, SettingsError> {
        let mut settings = self.load().unwrap_or_default();
        mutate(&mut settings);
        self.save(&settings)?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::settings::{Theme, TimeFormat};
    use tempfile::TempDir;

    /// Save and load must round-trip all fields accurately.
    #[test]
    fn test_settings_save_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path());

        let original = UserSettings {
            theme: Theme::Dark,
            language: "ar".to_string(),
            time_format: TimeFormat::Hours12,
            ..Default::default()
        };

        store.save(&original).expect("save should succeed");
        let loaded = store.load().expect("load should return Some after save");
        assert_eq!(loaded, original);
    }

    /// Load must return None when the file does not exist (first run).
    #[test]
    fn test_load_missing_file_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path());
        assert!(store.load().is_none());
    }

    /// Load must return None when the JSON is malformed rather than panicking.
    #[test]
    fn test_load_malformed_json_returns_none() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path());
        std::fs::write(store.path(), b"not valid json {{{{").unwrap();
        assert!(store.load().is_none());
    }

    /// First merge with no file synthesizes the default object plus the
    /// mutation: dark theme, en, UTC, 24-hour.
    #[test]
    fn test_first_merge_synthesizes_defaults() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path());

        let merged = store.merge(|s| s.theme = Theme::Dark).unwrap();
        assert_eq!(merged.theme, Theme::Dark);
        assert_eq!(merged.language, "en");
        assert_eq!(merged.timezone, "UTC");
        assert_eq!(merged.time_format, TimeFormat::Hours24);

        // And it is actually on disk.
        assert_eq!(store.load().unwrap(), merged);
    }

    /// Merge preserves unrelated fields already persisted.
    #[test]
    fn test_merge_preserves_existing_fields() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path());

        store
            .merge(|s| {
                s.language = "ar".to_string();
                s.timezone = "Africa/Cairo".to_string();
            })
            .unwrap();
        let merged = store.merge(|s| s.theme = Theme::Dark).unwrap();

        assert_eq!(merged.language, "ar");
        assert_eq!(merged.timezone, "Africa/Cairo");
        assert_eq!(merged.theme, Theme::Dark);
    }

    /// A leftover temp file from a previous crash must not break saving.
    #[test]
    fn test_save_atomic_survives_stale_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = SettingsStore::new(dir.path());

        store.save(&UserSettings::default()).unwrap();
        let tmp = store.path().with_extension("json.tmp");
        std::fs::write(&tmp, b"garbage").unwrap();

        let updated = UserSettings {
            theme: Theme::Dark,
            ..Default::default()
        };
        store.save(&updated).unwrap();

        assert_eq!(store.load().unwrap().theme, Theme::Dark);
    }
}
