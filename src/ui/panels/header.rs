// CarCare - ui/panels/header.rs
//
// Top header bar: mobile sidebar toggle, brand, clock, and the user-icons
// cluster holding the theme toggle. The toggle affordance renders only
// when the sidebar machine exposes it (mobile viewports).

use crate::app::state::AppState;
use crate::core::layout::UiEvent;
use crate::core::settings::Theme;
use crate::ui::theme;
use crate::util::constants::{APP_NAME, HEADER_HEIGHT};

/// User intent gathered from the header this frame.
#[derive(Debug, Default)]
pub struct HeaderResponse {
    /// Sidebar events (toggle activation, outside presses).
    pub events: Vec<UiEvent>,

    /// The theme toggle was pressed.
    pub theme_toggled: bool,
}

/// Render the header bar.
pub fn render(ctx: &egui::Context, state: &AppState) -> HeaderResponse {
    let mut response = HeaderResponse::default();

    egui::TopBottomPanel::top("header")
        .exact_height(HEADER_HEIGHT)
        .show(ctx, |ui| {
            ui.horizontal_centered(|ui| {
                // Toggle affordance, present only on mobile viewports.
                if let Some(toggle) = state.sidebar.chrome().toggle {
                    let button = ui
                        .add(egui::Button::new(
                            egui::RichText::new(toggle.glyph()).size(18.0),
                        ))
                        .on_hover_text(toggle.label());
                    if button.clicked() {
                        response.events.push(UiEvent::ToggleActivated);
                    }
                }

                ui.label(
                    egui::RichText::new(APP_NAME)
                        .heading()
                        .color(theme::accent(state.theme()))
                        .strong(),
                );

                // User-icons cluster, right-aligned. The theme toggle is
                // prepended here, showing the mode a press switches to.
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.add_space(4.0);
                    ui.label("\u{1F464}") // 👤 account (external collaborator)
                        .on_hover_text("Account");

                    let clock = chrono::Local::now()
                        .format(state.settings.time_format.chrono_format())
                        .to_string();
                    ui.label(egui::RichText::new(clock).weak());

                    let (glyph, hint) = match state.theme() {
                        Theme::Light => ("\u{1F319}", "Switch to dark mode"), // 🌙
                        Theme::Dark => ("\u{2600}", "Switch to light mode"),  // ☀
                    };
                    if ui
                        .add(egui::Button::new(egui::RichText::new(glyph).size(16.0)))
                        .on_hover_text(hint)
                        .clicked()
                    {
                        response.theme_toggled = true;
                    }
                });
            });
        });

    response
}
