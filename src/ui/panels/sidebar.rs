// CarCare - ui/panels/sidebar.rs
//
// Navigation sidebar in its two renditions: permanently docked on desktop
// viewports, and an overlay with a dimming backdrop on mobile viewports.
// Which rendition applies is decided by the sidebar machine, not here.

use crate::app::state::{AppState, Destination};
use crate::core::layout::{UiEvent, ViewportMode};
use crate::ui::theme;
use crate::util::constants::{HEADER_HEIGHT, SIDEBAR_WIDTH};

/// User intent gathered from the sidebar this frame.
#[derive(Debug, Default)]
pub struct SidebarResponse {
    /// Sidebar events (backdrop presses).
    pub events: Vec<UiEvent>,

    /// A destination was selected.
    pub navigate: Option<Destination>,
}

/// Render the sidebar (and, on mobile, the backdrop behind it).
pub fn render(ctx: &egui::Context, state: &AppState) -> SidebarResponse {
    let mut response = SidebarResponse::default();

    match state.sidebar.mode() {
        ViewportMode::Desktop => {
            egui::SidePanel::left("nav")
                .exact_width(SIDEBAR_WIDTH)
                .resizable(false)
                .show(ctx, |ui| {
                    response.navigate = nav_list(ui, state.destination);
                });
        }
        ViewportMode::Mobile => {
            if !state.sidebar.is_open() {
                return response;
            }

            // Backdrop below the header. Pressing it closes the sidebar;
            // it also dims and blocks the content underneath.
            if let Some(backdrop) = state.sidebar.chrome().backdrop {
                if backdrop.visible {
                    let screen = ctx.screen_rect();
                    let area = egui::Rect::from_min_max(
                        egui::pos2(screen.left(), screen.top() + HEADER_HEIGHT),
                        screen.max,
                    );
                    egui::Area::new(egui::Id::new("nav_backdrop"))
                        .order(egui::Order::Middle)
                        .fixed_pos(area.min)
                        .show(ctx, |ui| {
                            let (_, painter) = ui.allocate_painter(
                                area.size(),
                                egui::Sense::hover(),
                            );
                            painter.rect_filled(area, egui::CornerRadius::ZERO, theme::BACKDROP);
                            if ui
                                .interact(
                                    area,
                                    egui::Id::new("nav_backdrop_press"),
                                    egui::Sense::click(),
                                )
                                .clicked()
                            {
                                response.events.push(UiEvent::BackdropPressed);
                            }
                        });
                }
            }

            // The sliding panel itself, above the backdrop.
            let screen = ctx.screen_rect();
            egui::Area::new(egui::Id::new("nav_overlay"))
                .order(egui::Order::Foreground)
                .fixed_pos(egui::pos2(screen.left(), screen.top() + HEADER_HEIGHT))
                .show(ctx, |ui| {
                    let fill = ui.visuals().panel_fill;
                    egui::Frame::default()
                        .fill(fill)
                        .inner_margin(egui::Margin::same(8))
                        .show(ui, |ui| {
                            ui.set_width(SIDEBAR_WIDTH);
                            ui.set_min_height(screen.height() - HEADER_HEIGHT);
                            response.navigate = nav_list(ui, state.destination);
                        });
                });
        }
    }

    response
}

/// Shared destination list. Returns the destination clicked this frame.
fn nav_list(ui: &mut egui::Ui, current: Destination) -> Option<Destination> {
    let mut clicked = None;
    ui.add_space(6.0);
    for destination in Destination::ALL {
        let selected = destination == current;
        let label = format!("{}  {}", destination.glyph(), destination.label());
        if ui.selectable_label(selected, label).clicked() {
            clicked = Some(destination);
        }
        ui.add_space(2.0);
    }
    clicked
}
