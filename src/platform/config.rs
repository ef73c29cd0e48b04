// CarCare - platform/config.rs
//
// Platform-specific configuration and data directory resolution, plus
// config.toml loading with startup validation.
//
// Uses the `directories` crate for XDG (Linux), AppData (Windows),
// Library (macOS) compliance.
//
// config.toml holds administrator/first-run defaults; the user's own
// choices live in the settings.json store and take precedence once
// written.

use crate::core::settings::Theme;
use crate::util::constants;
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

/// Resolved platform paths for CarCare data and configuration.
#[derive(Debug, Clone)]
pub struct PlatformPaths {
    /// Configuration directory (e.g. ~/.config/carcare/ or %APPDATA%\CarCare\)
    pub config_dir: PathBuf,

    /// Data directory for logs, caches, etc.
    pub data_dir: PathBuf,
}

impl PlatformPaths {
    /// Resolve platform-appropriate paths.
    ///
    /// Falls back to current directory if platform dirs cannot be determined.
    pub fn resolve() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("", "", constants::APP_ID) {
            let config_dir = proj_dirs.config_dir().to_path_buf();
            let data_dir = proj_dirs.data_dir().to_path_buf();

            tracing::debug!(
                config = %config_dir.display(),
                data = %data_dir.display(),
                "Platform paths resolved"
            );

            Self {
                config_dir,
                data_dir,
            }
        } else {
            tracing::warn!("Could not determine platform directories, using current directory");
            let fallback = PathBuf::from(".");
            Self {
                config_dir: fallback.clone(),
                data_dir: fallback,
            }
        }
    }
}

// =============================================================================
// config.toml loading and validation
// =============================================================================

/// Raw deserialisable shape of config.toml.
///
/// Unknown keys are silently ignored for forward compatibility -- a newer
/// config file can be used with an older binary without crashing.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct RawConfig {
    /// `[ui]` section.
    pub ui: UiSection,
    /// `[logging]` section.
    pub logging: LoggingSection,
}

/// `[ui]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct UiSection {
    /// Theme used before the user has toggled one: "dark" or "light".
    pub theme: Option<String>,
}

/// `[logging]` config section.
#[derive(Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct LoggingSection {
    /// Log level: "error", "warn", "info", "debug", "trace".
    pub level: Option<String>,
}

/// Validated application configuration derived from `config.toml`.
///
/// All values are validated at load time. Invalid values produce
/// actionable warnings and fall back to defaults.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Theme applied when no settings file exists yet.
    pub theme_default: Theme,

    /// Logging level string (consumed by logging init before tracing is up).
    pub log_level: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme_default: Theme::Light,
            log_level: None,
        }
    }
}

/// Load and validate `config.toml` from the given config directory.
///
/// Returns `AppConfig` with validated values and a list of non-fatal
/// warnings. If the file does not exist, returns defaults with no warnings
/// (first-run). If the file is unparseable, returns defaults with an error
/// warning -- the application still starts but the user is informed.
pub fn load_config(config_dir: &Path) -> (AppConfig, Vec<String>) {
    let config_path = config_dir.join(constants::CONFIG_FILE_NAME);

    let mut warnings: Vec<String> = Vec::new();

    if !config_path.exists() {
        return (AppConfig::default(), warnings);
    }

    let content = match std::fs::read_to_string(&config_path) {
        Ok(c) => c,
        Err(e) => {
            warnings.push(format!(
                "Could not read config file '{}': {e}. Using defaults.",
                config_path.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    let raw: RawConfig = match toml::from_str(&content) {
        Ok(r) => r,
        Err(e) => {
            warnings.push(format!(
                "Failed to parse config file '{}': {e}. Using defaults.",
                config_path.display()
            ));
            return (AppConfig::default(), warnings);
        }
    };

    // Validate each field, accumulating all errors.
    let mut config = AppConfig::default();

    // -- UI: theme --
    if let Some(ref theme) = raw.ui.theme {
        match theme.to_lowercase().as_str() {
            "dark" => config.theme_default = Theme::Dark,
            "light" => config.theme_default = Theme::Light,
            other => {
                warnings.push(format!(
                    "[ui] theme = \"{other}\" is not recognised. Expected \"dark\" or \"light\". Using default (light).",
                ));
            }
        }
    }

    // -- Logging: level --
    if let Some(ref level) = raw.logging.level {
        let valid = ["error", "warn", "info", "debug", "trace"];
        if valid.contains(&level.to_lowercase().as_str()) {
            config.log_level = Some(level.clone());
        } else {
            warnings.push(format!(
                "[logging] level = \"{level}\" is not recognised. \
                 Valid values: error, warn, info, debug, trace. Using default (info).",
            ));
        }
    }

    (config, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) {
        std::fs::write(dir.path().join(constants::CONFIG_FILE_NAME), content).unwrap();
    }

    /// Missing config file is a normal first run: defaults, no warnings.
    #[test]
    fn test_missing_config_is_defaults_without_warnings() {
        let dir = TempDir::new().unwrap();
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.theme_default, Theme::Light);
        assert!(config.log_level.is_none());
        assert!(warnings.is_empty());
    }

    /// Valid fields are picked up.
    #[test]
    fn test_valid_config_is_applied() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[ui]\ntheme = \"dark\"\n\n[logging]\nlevel = \"debug\"\n");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.theme_default, Theme::Dark);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert!(warnings.is_empty());
    }

    /// Unknown values warn and fall back per field, not wholesale.
    #[test]
    fn test_invalid_values_warn_and_default() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[ui]\ntheme = \"sepia\"\n\n[logging]\nlevel = \"loud\"\n");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.theme_default, Theme::Light);
        assert!(config.log_level.is_none());
        assert_eq!(warnings.len(), 2);
    }

    /// Unparseable TOML yields defaults plus a single warning.
    #[test]
    fn test_unparseable_config_warns() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "not toml ===");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.theme_default, Theme::Light);
        assert_eq!(warnings.len(), 1);
    }

    /// Unknown keys are ignored for forward compatibility.
    #[test]
    fn test_unknown_keys_are_ignored() {
        let dir = TempDir::new().unwrap();
        write_config(&dir, "[ui]\ntheme = \"dark\"\nfuture_knob = 3\n\n[booking]\nx = 1\n");
        let (config, warnings) = load_config(dir.path());
        assert_eq!(config.theme_default, Theme::Dark);
        assert!(warnings.is_empty());
    }
}
