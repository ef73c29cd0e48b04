// CarCare - ui/theme.rs
//
// Palette application and visual constants.
// No dependencies on app state or business logic.

use crate::core::settings::Theme;
use egui::Color32;

/// Brand accent colour for the active theme.
pub fn accent(theme: Theme) -> Color32 {
    match theme {
        Theme::Light => Color32::from_rgb(37, 99, 235), // Blue 600
        Theme::Dark => Color32::from_rgb(96, 165, 250), // Blue 400
    }
}

/// Dimming overlay behind the open mobile sidebar.
pub const BACKDROP: Color32 = Color32::from_black_alpha(110);

/// Notification pill background per theme.
pub fn notice_bg(theme: Theme) -> Color32 {
    match theme {
        Theme::Light => Color32::from_rgb(31, 41, 55), // Gray 800
        Theme::Dark => Color32::from_rgb(55, 65, 81),  // Gray 700
    }
}

/// Notification pill text colour.
pub const NOTICE_TEXT: Color32 = Color32::from_rgb(243, 244, 246); // Gray 100

/// Apply the theme's palette to the egui context.
///
/// The absence of a persisted theme means light mode, so callers pass the
/// default `Theme` when no settings exist.
pub fn apply(ctx: &egui::Context, theme: Theme) {
    let mut visuals = match theme {
        Theme::Dark => egui::Visuals::dark(),
        Theme::Light => egui::Visuals::light(),
    };
    visuals.hyperlink_color = accent(theme);
    visuals.selection.bg_fill = accent(theme).gamma_multiply(0.4);
    ctx.set_visuals(visuals);
}
