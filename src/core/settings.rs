// CarCare - core/settings.rs
//
// Persisted user-settings model. The on-disk JSON shape uses the wire
// names of the booking service's web client (`timeFormat`), so a settings
// file written by either client is readable by both.

use crate::util::constants::{DEFAULT_LANGUAGE, DEFAULT_TIMEZONE};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Visual theme. Light is the implicit default: an absent settings file
/// means light mode, not an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn flipped(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light => write!(f, "light"),
            Self::Dark => write!(f, "dark"),
        }
    }
}

/// Clock format for the header time display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeFormat {
    #[serde(rename = "12h")]
    Hours12,
    #[default]
    #[serde(rename = "24h")]
    Hours24,
}

impl TimeFormat {
    /// chrono format string for this clock format.
    pub fn chrono_format(self) -> &'static str {
        match self {
            Self::Hours12 => "%I:%M %p",
            Self::Hours24 => "%H:%M",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Hours12 => "12-hour",
            Self::Hours24 => "24-hour",
        }
    }
}

/// The persisted settings object.
///
/// Created on first save if absent, mutated in place on every change,
/// never deleted. Individual missing fields fall back to their defaults
/// via serde so a file written by an older client still loads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UserSettings {
    /// Interface language (ISO 639-1 code).
    pub language: String,

    /// Timezone identifier.
    pub timezone: String,

    /// Header clock format.
    #[serde(rename = "timeFormat")]
    pub time_format: TimeFormat,

    /// Visual theme.
    pub theme: Theme,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            timezone: DEFAULT_TIMEZONE.to_string(),
            time_format: TimeFormat::default(),
            theme: Theme::default(),
        }
    }
}
