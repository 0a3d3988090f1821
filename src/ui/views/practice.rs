use crate::app::Action;
use crate::model::LanguageChoice;
use crate::ui::PracticeApp;
use crate::ui::helpers::{action_button, button_width};
use crate::ui::layout::code_editor_input;
use crate::ui::syntax::syntax_for;
use egui::{CentralPanel, ComboBox, Context, RichText, ScrollArea, SidePanel, Spinner};

/// Enunciado de la pregunta actual con sus pistas.
pub fn ui_question_panel(app: &PracticeApp, ctx: &Context) {
    let info = app.session.progress_info();
    let question = app.session.current_question();
    let done = app.session.is_current_completed();

    SidePanel::left("question_panel")
        .resizable(true)
        .default_width(340.0)
        .show(ctx, |ui| {
            ScrollArea::vertical().show(ui, |ui| {
                ui.add_space(8.0);
                ui.label(RichText::new(format!("Question {}/{}", info.position, info.total)).weak());
                let title = if done {
                    format!("✔ {}", question.title)
                } else {
                    question.title.clone()
                };
                ui.heading(title);
                ui.label(format!("Difficulty: {}", question.difficulty));
                ui.add_space(6.0);
                ui.label(&question.description);

                if !question.validators.is_empty() {
                    ui.add_space(10.0);
                    ui.label(RichText::new("Hints").strong());
                    for hint in &question.validators {
                        ui.label(format!("💡 {}", hint.text));
                    }
                }

                ui.add_space(10.0);
                ui.separator();
                ui.label(format!("Source: {}", app.session.config().source_label));
                ui.label(format!("Completed: {}/{}", info.completed, info.total));
                ui.label(
                    RichText::new(format!("Up next: {}", app.session.upcoming_question().title))
                        .weak(),
                );
            });
        });
}

/// Selector de lenguaje, editor y botonera.
pub fn ui_practice(app: &mut PracticeApp, ctx: &Context) {
    let info = app.session.progress_info();
    let current_choice = if info.auto_detect {
        LanguageChoice::Auto
    } else {
        LanguageChoice::Fixed(info.language)
    };
    let mut actions = Vec::new();

    CentralPanel::default().show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.label("Language:");
            let mut choice = current_choice;
            ComboBox::from_id_salt("language_choice")
                .selected_text(choice.display_name())
                .show_ui(ui, |ui| {
                    for option in LanguageChoice::options() {
                        ui.selectable_value(&mut choice, option, option.display_name());
                    }
                });
            if choice != current_choice {
                actions.push(Action::SetLanguage(choice));
            }

            let mut auto = info.auto_detect;
            if ui.checkbox(&mut auto, "Auto-detect").changed() {
                actions.push(Action::ToggleAutoDetect(auto));
            }
            if info.auto_detect {
                ui.label(RichText::new(format!("detected: {}", info.language.display_name())).weak());
            }
        });

        ui.add_space(6.0);

        let font_id = egui::TextStyle::Monospace.resolve(ui.style());
        let line_height = ui.fonts(|f| f.row_height(&font_id));
        let max_height = (ui.available_height() - 90.0).max(160.0);
        let binding = app.session.editor_binding();
        if let Some(edited) = code_editor_input(
            ui,
            "practice_editor",
            18,
            line_height,
            syntax_for(binding.language),
            binding.value,
            max_height,
        ) {
            actions.push(Action::EditCode(edited));
        }

        ui.add_space(8.0);

        let width = button_width(ui.available_width().min(760.0), 5);
        let height = 32.0;
        ui.horizontal(|ui| {
            if action_button(ui, "▶ Run Checker", width, height, !info.busy) {
                actions.push(Action::Submit);
            }
            if action_button(ui, "Format Code", width, height, true) {
                actions.push(Action::Format);
            }
            if action_button(ui, "Reset Question", width, height, true) {
                actions.push(Action::ResetQuestion);
            }
            if action_button(ui, "Reset All", width, height, true) {
                actions.push(Action::ResetAll);
            }
            if action_button(ui, "Next Question", width, height, true) {
                actions.push(Action::Next);
            }
        });

        if info.busy {
            ui.horizontal(|ui| {
                ui.add(Spinner::new());
                ui.label("Checking…");
            });
        }
        if let Some(notice) = &app.notice {
            ui.label(RichText::new(notice).color(egui::Color32::YELLOW));
        }
    });

    app.dispatch_all(ctx, actions);
}
