// CarCare - ui/panels/settings_page.rs
//
// Settings page: language, timezone, and clock format. Every change is
// persisted immediately through the same merge/save path the theme toggle
// uses, so the single settings file stays the source of truth.

use crate::app::state::AppState;
use crate::core::settings::TimeFormat;
use crate::util::constants::{LANGUAGES, TIMEZONES};

/// Render the settings page into the central content area.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.heading("Settings");
    ui.add_space(8.0);

    let mut changed = false;

    // -- Language --
    let current_language = LANGUAGES
        .iter()
        .find(|(code, _)| *code == state.settings.language)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| state.settings.language.clone());
    egui::ComboBox::from_label("Language")
        .selected_text(current_language)
        .show_ui(ui, |ui| {
            for (code, label) in LANGUAGES {
                changed |= ui
                    .selectable_value(&mut state.settings.language, (*code).to_string(), *label)
                    .clicked();
            }
        });
    ui.add_space(6.0);

    // -- Timezone --
    egui::ComboBox::from_label("Timezone")
        .selected_text(state.settings.timezone.clone())
        .show_ui(ui, |ui| {
            for tz in TIMEZONES {
                changed |= ui
                    .selectable_value(&mut state.settings.timezone, (*tz).to_string(), *tz)
                    .clicked();
            }
        });
    ui.add_space(6.0);

    // -- Clock format --
    ui.horizontal(|ui| {
        ui.label("Time format:");
        for format in [TimeFormat::Hours12, TimeFormat::Hours24] {
            changed |= ui
                .selectable_value(&mut state.settings.time_format, format, format.label())
                .clicked();
        }
    });

    ui.add_space(10.0);
    ui.label(
        egui::RichText::new("Theme is toggled from the header and saved alongside these settings.")
            .small()
            .weak(),
    );

    if changed {
        state.persist_settings();
    }
}
