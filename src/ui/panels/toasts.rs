// CarCare - ui/panels/toasts.rs
//
// Transient notification rendering. Lifecycle (visible window, fade ramp,
// expiry) is computed by core::notice; this module only paints the result
// at the alpha the lifecycle dictates.

use crate::core::notice::NoticeBoard;
use crate::core::settings::Theme;
use crate::ui::theme;

/// Height reserved per stacked notice.
const NOTICE_SPACING: f32 = 40.0;

/// Render live notices, newest at the bottom-right corner.
pub fn render(ctx: &egui::Context, notices: &NoticeBoard, app_theme: Theme, now_ms: u64) {
    for (index, notice) in notices.iter().enumerate() {
        let alpha = notice.alpha(now_ms);
        if alpha <= 0.0 {
            continue;
        }

        let offset = egui::vec2(-16.0, -16.0 - NOTICE_SPACING * index as f32);
        egui::Area::new(egui::Id::new(("notice", index)))
            .order(egui::Order::Tooltip)
            .anchor(egui::Align2::RIGHT_BOTTOM, offset)
            .interactable(false)
            .show(ctx, |ui| {
                egui::Frame::default()
                    .fill(theme::notice_bg(app_theme).gamma_multiply(alpha))
                    .corner_radius(egui::CornerRadius::same(6))
                    .inner_margin(egui::Margin::symmetric(12, 8))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new(&notice.text)
                                .color(theme::NOTICE_TEXT.gamma_multiply(alpha)),
                        );
                    });
            });
    }
}
