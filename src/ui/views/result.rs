use crate::ui::PracticeApp;
use egui::{Align2, Context, RichText};

/// Ventana modal con el veredicto del último envío.
pub fn ui_result(app: &mut PracticeApp, ctx: &Context) {
    let Some(result) = &app.result else {
        return;
    };
    let mut close = false;

    egui::Window::new("Result")
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            let color = if result.passed {
                egui::Color32::LIGHT_GREEN
            } else {
                egui::Color32::LIGHT_RED
            };
            for (i, line) in result.summary().lines().enumerate() {
                if i == 0 {
                    ui.label(RichText::new(line).heading().color(color));
                } else {
                    ui.label(line);
                }
            }
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                close = true;
            }
        });

    if close {
        app.result = None;
    }
}
