// CarCare - util/error.rs
//
// Typed error hierarchy with context-preserving error chains.
// No string-based error propagation. All errors preserve the causal chain
// for diagnostic logging.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Top-level error type for all CarCare operations.
/// Errors are categorised by the subsystem that produced them.
#[derive(Debug)]
pub enum CarCareError {
    /// Persisted user-settings load or save failed.
    Settings(SettingsError),

    /// Configuration loading or validation failed.
    Config(ConfigError),

    /// I/O error with path context.
    Io {
        path: PathBuf,
        operation: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for CarCareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Settings(e) => write!(f, "Settings error: {e}"),
            Self::Config(e) => write!(f, "Configuration error: {e}"),
            Self::Io {
                path,
                operation,
                source,
            } => write!(
                f,
                "I/O error during {operation} on '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for CarCareError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Settings(e) => Some(e),
            Self::Config(e) => Some(e),
            Self::Io { source, .. } => Some(source),
        }
    }
}

impl From<SettingsError> for CarCareError {
    fn from(e: SettingsError) -> Self {
        Self::Settings(e)
    }
}

impl From<ConfigError> for CarCareError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

// ---------------------------------------------------------------------------
// Settings errors
// ---------------------------------------------------------------------------

/// Errors related to the persisted user-settings store.
///
/// Load-side failures (missing file, malformed JSON) are deliberately NOT
/// represented here: the store treats them as "start fresh" and returns
/// `None` after logging, so they never propagate as errors. Only save-side
/// failures reach the caller.
#[derive(Debug)]
pub enum SettingsError {
    /// The settings object could not be serialised to JSON.
    Serialize { source: serde_json::Error },

    /// The settings directory could not be created.
    CreateDir { path: PathBuf, source: io::Error },

    /// Writing the temporary settings file failed.
    WriteTemp { path: PathBuf, source: io::Error },

    /// Renaming the temporary file over the final path failed.
    Finalize { path: PathBuf, source: io::Error },
}

impl fmt::Display for SettingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Serialize { source } => {
                write!(f, "failed to serialise settings: {source}")
            }
            Self::CreateDir { path, source } => write!(
                f,
                "cannot create settings directory '{}': {source}",
                path.display()
            ),
            Self::WriteTemp { path, source } => write!(
                f,
                "failed to write settings temp file '{}': {source}",
                path.display()
            ),
            Self::Finalize { path, source } => write!(
                f,
                "failed to finalise settings file '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for SettingsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Serialize { source } => Some(source),
            Self::CreateDir { source, .. }
            | Self::WriteTemp { source, .. }
            | Self::Finalize { source, .. } => Some(source),
        }
    }
}

// ---------------------------------------------------------------------------
// Configuration errors
// ---------------------------------------------------------------------------

/// Errors related to `config.toml` loading.
///
/// These are surfaced as startup warnings, never as fatal errors: a broken
/// config file means defaults are used and the user is told why.
#[derive(Debug)]
pub enum ConfigError {
    /// The config file exists but could not be read.
    Read { path: PathBuf, source: io::Error },

    /// The config file could not be parsed as TOML.
    TomlParse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read { path, source } => write!(
                f,
                "could not read config file '{}': {source}",
                path.display()
            ),
            Self::TomlParse { path, source } => write!(
                f,
                "failed to parse config file '{}': {source}",
                path.display()
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } => Some(source),
            Self::TomlParse { source, .. } => Some(source),
        }
    }
}
