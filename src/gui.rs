// CarCare - gui.rs
//
// Top-level eframe::App implementation.
// Drains frame input into the sidebar machine's dispatcher, wires panel
// responses back into the app state, and renders the chrome.

use crate::app::state::AppState;
use crate::core::gesture::SwipeTracker;
use crate::core::layout::UiEvent;
use crate::core::settings::Theme;
use crate::ui;
use crate::util::constants::{APP_NAME, APP_VERSION};

/// The CarCare application.
pub struct CarCareApp {
    pub state: AppState,
    swipe: SwipeTracker,
    applied_theme: Option<Theme>,
}

impl CarCareApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            swipe: SwipeTracker::new(),
            applied_theme: None,
        }
    }

    /// Translate this frame's raw touch events into completed swipes.
    fn drain_touches(&mut self, ctx: &egui::Context) {
        let events = ctx.input(|i| i.events.clone());
        for event in events {
            if let egui::Event::Touch { phase, pos, .. } = event {
                match phase {
                    egui::TouchPhase::Start => self.swipe.begin(pos.x),
                    egui::TouchPhase::Move => {}
                    egui::TouchPhase::End => {
                        if let Some((start_x, end_x)) = self.swipe.end(pos.x) {
                            self.state
                                .sidebar
                                .handle(UiEvent::SwipeEnded { start_x, end_x });
                        }
                    }
                    egui::TouchPhase::Cancel => self.swipe.cancel(),
                }
            }
        }
    }
}

impl eframe::App for CarCareApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now_ms = (ctx.input(|i| i.time) * 1000.0) as u64;

        // Re-apply the palette when the theme changed since last frame.
        if self.applied_theme != Some(self.state.theme()) {
            ui::theme::apply(ctx, self.state.theme());
            self.applied_theme = Some(self.state.theme());
        }

        // Viewport mode is re-derived every frame; the sync is idempotent.
        let width = ctx.screen_rect().width();
        self.state.sidebar.handle(UiEvent::ViewportChanged { width });

        self.drain_touches(ctx);

        // Header: toggle affordance, clock, theme toggle.
        let header = ui::panels::header::render(ctx, &self.state);
        if header.theme_toggled {
            self.state.toggle_theme(now_ms);
        }
        for event in header.events {
            self.state.sidebar.handle(event);
        }

        // Status bar. A press on it while the mobile sidebar is open counts
        // as an outside press and dismisses the sidebar.
        let status = egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(&self.state.status_message);
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let mut tag = format!("{APP_NAME} v{APP_VERSION}");
                    if self.state.debug_mode {
                        tag.push_str("  (debug)");
                    }
                    ui.label(egui::RichText::new(tag).small().weak());
                });
            });
        });
        if self.state.sidebar.is_open()
            && status.response.interact(egui::Sense::click()).clicked()
        {
            self.state.sidebar.handle(UiEvent::OutsidePressed);
        }

        // Sidebar (docked or overlay) and backdrop.
        let nav = ui::panels::sidebar::render(ctx, &self.state);
        for event in nav.events {
            self.state.sidebar.handle(event);
        }
        if let Some(destination) = nav.navigate {
            self.state.navigate(destination);
        }

        // Central content for the current destination.
        ui::panels::content::render(ctx, &mut self.state);

        // Transient notifications; keep repainting while any are live so
        // the fade-out animates without further input.
        self.state.notices.prune(now_ms);
        ui::panels::toasts::render(ctx, &self.state.notices, self.state.theme(), now_ms);
        if !self.state.notices.is_empty() {
            ctx.request_repaint_after(std::time::Duration::from_millis(50));
        }
    }
}
