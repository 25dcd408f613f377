//! Content area: the active tab's title over a plain background.

use eframe::egui;

use crate::app::ShellApp;

pub(crate) fn show(ctx: &egui::Context, app: &mut ShellApp) {
    let theme = app.cfg.theme.clone();
    egui::CentralPanel::default()
        .frame(
            egui::Frame::NONE
                .fill(theme.window_bg)
                .inner_margin(egui::Margin::same(20)),
        )
        .show(ctx, |ui| {
            let drag = ui.interact(
                ui.max_rect(),
                ui.id().with("content_drag"),
                egui::Sense::click_and_drag(),
            );
            if drag.drag_started() {
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::StartDrag);
            }

            let title = app.content_title().to_string();
            ui.vertical_centered(|ui| {
                ui.add_space(10.0);
                ui.label(
                    egui::RichText::new(title)
                        .size(32.0)
                        .strong()
                        .color(theme.title_text),
                );
            });
        });
}
