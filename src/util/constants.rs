// CarCare - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "CarCare";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "CarCare";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// Responsive layout
// =============================================================================

/// Window width in logical pixels below which the mobile layout is used.
/// At or above this width the navigation sidebar is permanently docked and
/// the collapsible toggle is never shown.
pub const MOBILE_BREAKPOINT: f32 = 992.0;

/// Docked sidebar width; also the content left offset on desktop layouts.
pub const SIDEBAR_WIDTH: f32 = 250.0;

/// Header bar height.
pub const HEADER_HEIGHT: f32 = 44.0;

// =============================================================================
// Swipe gestures
// =============================================================================

/// Minimum horizontal travel in logical pixels for a swipe to count.
pub const SWIPE_THRESHOLD: f32 = 70.0;

/// An opening swipe must start within this many pixels of the left edge.
/// Swipes starting further in are treated as content scrolling, not a
/// sidebar gesture.
pub const SWIPE_EDGE_ZONE: f32 = 50.0;

// =============================================================================
// Transient notifications
// =============================================================================

/// How long a notification is shown at full opacity (ms).
pub const NOTICE_VISIBLE_MS: u64 = 2_000;

/// Fade-out duration after the visible period, before removal (ms).
pub const NOTICE_FADE_MS: u64 = 500;

/// Upper bound on simultaneously tracked notifications. Older entries are
/// dropped first when the cap is reached.
pub const MAX_NOTICES: usize = 8;

// =============================================================================
// User settings defaults
// =============================================================================

/// Default interface language (ISO 639-1 code).
pub const DEFAULT_LANGUAGE: &str = "en";

/// Default timezone identifier.
pub const DEFAULT_TIMEZONE: &str = "UTC";

/// Default clock format. Valid values: "12h", "24h".
pub const DEFAULT_TIME_FORMAT: &str = "24h";

/// Languages offered by the settings page.
pub const LANGUAGES: &[(&str, &str)] = &[("en", "English"), ("ar", "العربية")];

/// Timezones offered by the settings page.
pub const TIMEZONES: &[&str] = &["UTC", "Africa/Cairo", "Europe/London", "America/New_York"];

// =============================================================================
// Logging
// =============================================================================

/// Default log level.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Configuration and persistence
// =============================================================================

/// Configuration file name.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Persisted user-settings file name (stored in the platform config directory).
pub const SETTINGS_FILE_NAME: &str = "settings.json";
