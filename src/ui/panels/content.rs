// CarCare - ui/panels/content.rs
//
// Central content area. The Settings page is real; every other page is a
// placeholder naming the external collaborator that serves it (booking
// API, mapping SDK, chatbot service). Content scrolling honours the
// machine's scroll lock while the mobile sidebar is open.

use crate::app::state::{AppState, Destination};
use crate::ui::panels::settings_page;

/// Render the central panel for the current destination.
pub fn render(ctx: &egui::Context, state: &mut AppState) {
    let scroll_enabled = !state.sidebar.chrome().scroll_locked;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical()
            .enable_scrolling(scroll_enabled)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.add_space(10.0);
                match state.destination {
                    Destination::Settings => settings_page::render(ui, state),
                    other => placeholder(ui, other),
                }
            });
    });
}

fn placeholder(ui: &mut egui::Ui, destination: Destination) {
    ui.heading(destination.label());
    ui.add_space(8.0);
    let text = match destination {
        Destination::Home => {
            "Register your vehicle and book maintenance services. \
             Account data is served by the booking service API."
        }
        Destination::Map => {
            "Nearby maintenance centers are rendered by the external mapping SDK."
        }
        Destination::Centers => {
            "Maintenance center listings are served by the booking service API."
        }
        Destination::Services => {
            "Service and price listings are served by the booking service API."
        }
        Destination::Chatbot => {
            "The maintenance assistant is an external service reached through \
             the booking service API."
        }
        Destination::Settings => unreachable!("settings renders its own page"),
    };
    ui.label(text);
}
