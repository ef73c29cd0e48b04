// CarCare - app/state.rs
//
// Application state management. Holds the user settings, the sidebar
// machine, live notices, and the selected navigation destination.
// Owned by the eframe::App implementation.

use crate::app::settings_store::SettingsStore;
use crate::core::layout::{SidebarMachine, UiEvent, ViewportMode};
use crate::core::notice::NoticeBoard;
use crate::core::settings::{Theme, UserSettings};

/// Pages reachable from the navigation sidebar. Mirrors the booking
/// service's routes; all but Settings render as placeholders naming their
/// external collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Home,
    Map,
    Centers,
    Services,
    Chatbot,
    Settings,
}

impl Destination {
    /// Sidebar ordering.
    pub const ALL: [Destination; 6] = [
        Self::Home,
        Self::Map,
        Self::Centers,
        Self::Services,
        Self::Chatbot,
        Self::Settings,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Map => "Map",
            Self::Centers => "Maintenance Centers",
            Self::Services => "Services",
            Self::Chatbot => "Chatbot",
            Self::Settings => "Settings",
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Home => "\u{1F3E0}",     // 🏠
            Self::Map => "\u{1F5FA}",      // 🗺
            Self::Centers => "\u{1F527}",  // 🔧
            Self::Services => "\u{1F6E0}", // 🛠
            Self::Chatbot => "\u{1F4AC}",  // 💬
            Self::Settings => "\u{2699}",  // ⚙
        }
    }
}

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Current user settings (loaded from the store, or defaults).
    pub settings: UserSettings,

    /// Responsive sidebar state machine.
    pub sidebar: SidebarMachine,

    /// Live transient notifications.
    pub notices: NoticeBoard,

    /// Currently displayed page.
    pub destination: Destination,

    /// Status line shown at the bottom of the window.
    pub status_message: String,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,

    /// Persistence handle for the settings file.
    store: SettingsStore,
}

impl AppState {
    /// Create initial state. `settings` is the persisted object, or the
    /// first-run defaults chosen by the caller.
    pub fn new(store: SettingsStore, settings: UserSettings, debug_mode: bool) -> Self {
        Self {
            settings,
            sidebar: SidebarMachine::new(),
            notices: NoticeBoard::new(),
            destination: Destination::Home,
            status_message: "Ready.".to_string(),
            debug_mode,
            store,
        }
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme
    }

    /// Flip the theme, persist the merged settings object, and announce
    /// the new mode with a transient notice.
    ///
    /// Persistence failures are logged and shown in the status line; the
    /// in-memory flip still happens so the UI stays responsive.
    pub fn toggle_theme(&mut self, now_ms: u64) {
        let next = self.settings.theme.flipped();

        match self.store.merge(|s| s.theme = next) {
            Ok(merged) => {
                self.settings = merged;
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not persist theme change");
                self.settings.theme = next;
                self.status_message = "Theme changed, but saving settings failed.".to_string();
            }
        }

        let announcement = match next {
            Theme::Dark => "Dark mode enabled",
            Theme::Light => "Light mode enabled",
        };
        self.notices.push(announcement, now_ms);
        tracing::info!(theme = %next, "Theme toggled");
    }

    /// Persist the current non-theme settings (settings-page edits) through
    /// the same read-modify-write path the theme toggle uses.
    pub fn persist_settings(&mut self) {
        let edited = self.settings.clone();
        match self.store.merge(move |s| *s = edited) {
            Ok(merged) => {
                self.settings = merged;
                self.status_message = "Settings saved.".to_string();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Could not persist settings");
                self.status_message = "Saving settings failed.".to_string();
            }
        }
    }

    /// Switch the central content. On mobile the navigation dismisses the
    /// sidebar; on desktop the docked sidebar stays put.
    pub fn navigate(&mut self, destination: Destination) {
        self.destination = destination;
        if self.sidebar.mode() == ViewportMode::Mobile && self.sidebar.is_open() {
            self.sidebar.handle(UiEvent::ToggleActivated);
        }
        tracing::debug!(page = destination.label(), "Navigated");
    }
}
