use crate::app::Action;
use crate::ui::PracticeApp;
use egui::{Context, ProgressBar, ScrollArea, Ui, Visuals};
use egui_code_editor::{CodeEditor, ColorTheme, Syntax};

/// Título, barra de progreso, nombre y puntuación.
pub fn top_panel(app: &mut PracticeApp, ctx: &Context) {
    let info = app.session.progress_info();
    let mut username = info.username.clone();
    let mut actions = Vec::new();

    egui::TopBottomPanel::top("progress_panel").show(ctx, |ui| {
        ui.add_space(4.0);
        ui.horizontal(|ui| {
            ui.heading("Piscine Practice");
            ui.separator();
            ui.add(
                ProgressBar::new(info.fraction())
                    .desired_width(220.0)
                    .text(format!("{} ({}%)", info.label(), info.percent)),
            );
            ui.separator();
            ui.label("Name:");
            if ui
                .add(egui::TextEdit::singleline(&mut username).desired_width(140.0))
                .changed()
            {
                actions.push(Action::SetUsername(username.clone()));
            }
            ui.separator();
            ui.label(format!("Score: {}", info.score));
        });
        ui.add_space(4.0);
    });

    app.dispatch_all(ctx, actions);
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

/// Editor de entrada. Devuelve el texto nuevo si el usuario lo ha cambiado.
pub fn code_editor_input(
    ui: &mut Ui,
    id: &str,
    rows: usize,
    fontsize: f32,
    syntax: Syntax,
    text: &str,
    max_height: f32,
) -> Option<String> {
    let mut buf = text.to_owned();
    ScrollArea::vertical()
        .max_height(max_height)
        .auto_shrink([false; 2])
        .show(ui, |ui| {
            CodeEditor::default()
                .id_source(id)
                .with_rows(rows)
                .with_fontsize(fontsize)
                .with_theme(ColorTheme::GITHUB_DARK)
                .with_syntax(syntax)
                .with_numlines(true)
                .vscroll(false)
                .show(ui, &mut buf);
        });
    (buf != text).then_some(buf)
}
