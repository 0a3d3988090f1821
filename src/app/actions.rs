use super::*;
use crate::model::{LanguageChoice, SubmissionResult};
use crate::storage::PersistWrite;
use std::time::Duration;

/// Todo lo que la interfaz puede pedirle a la sesión.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Submit,
    /// Lo envía el anfitrión cuando vence el retardo de un `Submit`.
    CompleteSubmit(SubmitTicket),
    Format,
    ResetQuestion,
    ResetAll,
    Next,
    SetLanguage(LanguageChoice),
    ToggleAutoDetect(bool),
    SetUsername(String),
    EditCode(String),
}

impl Action {
    fn name(&self) -> &'static str {
        match self {
            Action::Submit => "submit",
            Action::CompleteSubmit(_) => "complete_submit",
            Action::Format => "format",
            Action::ResetQuestion => "reset_question",
            Action::ResetAll => "reset_all",
            Action::Next => "next",
            Action::SetLanguage(_) => "set_language",
            Action::ToggleAutoDetect(_) => "toggle_auto_detect",
            Action::SetUsername(_) => "set_username",
            Action::EditCode(_) => "edit_code",
        }
    }
}

/// Lo que el anfitrión tiene que hacer después de una transición.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Escritura sin reintentos en el almacén clave-valor.
    Persist(PersistWrite),
    /// Volver con `Action::CompleteSubmit(ticket)` pasado `delay`.
    ScheduleVerdict { ticket: SubmitTicket, delay: Duration },
    ShowResult(SubmissionResult),
    Notice(String),
}

impl PracticeSession {
    /// Punto de entrada único: cada acción se ejecuta completa antes de la siguiente.
    pub fn dispatch(&mut self, action: Action) -> Vec<Effect> {
        log::debug!("dispatch {}", action.name());
        match action {
            Action::Submit => self.submit(),
            Action::CompleteSubmit(ticket) => self.complete_submit(ticket),
            Action::Format => {
                self.format();
                Vec::new()
            }
            Action::ResetQuestion => {
                self.reset_question();
                Vec::new()
            }
            Action::ResetAll => self.reset_all(),
            Action::Next => {
                self.next_question();
                Vec::new()
            }
            Action::SetLanguage(choice) => {
                self.set_language(choice);
                Vec::new()
            }
            Action::ToggleAutoDetect(enabled) => {
                self.toggle_auto_detect(enabled);
                Vec::new()
            }
            Action::SetUsername(name) => self.set_username(name),
            Action::EditCode(text) => {
                self.edit_code(text);
                Vec::new()
            }
        }
    }

    /// Sustituye el búfer. Con detección automática, recalcula el lenguaje.
    pub(crate) fn edit_code(&mut self, text: String) {
        self.code = text;
        if self.auto_detect {
            let detected = detect_language(&self.code);
            if detected != self.language {
                log::debug!("language changed {} -> {}", self.language, detected);
                self.language = detected;
            }
        }
    }

    pub(crate) fn set_language(&mut self, choice: LanguageChoice) {
        match choice {
            LanguageChoice::Auto => {
                self.auto_detect = true;
                self.language = detect_language(&self.code);
            }
            LanguageChoice::Fixed(language) => {
                self.auto_detect = false;
                self.language = language;
            }
        }
    }

    pub(crate) fn toggle_auto_detect(&mut self, enabled: bool) {
        self.auto_detect = enabled;
        if enabled {
            self.language = detect_language(&self.code);
        }
    }

    pub(crate) fn set_username(&mut self, name: String) -> Vec<Effect> {
        self.username = name;
        vec![self.username_write()]
    }

    /// Formatea el búfer con el proveedor del lenguaje activo y lo aplica
    /// como si fuera una edición.
    pub(crate) fn format(&mut self) {
        let formatted = self.formatters.format_or_fallback(self.language, &self.code);
        self.edit_code(formatted);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::*;
    use crate::editor::FormattingProviders;

    #[test]
    fn edit_code_redetects_when_auto() {
        let mut session = session();
        session.dispatch(Action::EditCode("<section>hi</section>".into()));
        assert_eq!(session.code(), "<section>hi</section>");
        assert_eq!(session.language(), Language::Html);
    }

    #[test]
    fn edit_code_keeps_fixed_language() {
        let mut session = session();
        session.dispatch(Action::SetLanguage(LanguageChoice::Fixed(Language::Css)));
        session.dispatch(Action::EditCode("def f():\n    return 1".into()));
        assert_eq!(session.language(), Language::Css);
        assert!(!session.auto_detect());
    }

    #[test]
    fn choosing_auto_turns_detection_back_on() {
        let mut session = session();
        session.dispatch(Action::SetLanguage(LanguageChoice::Fixed(Language::Java)));
        session.dispatch(Action::SetLanguage(LanguageChoice::Auto));
        assert!(session.auto_detect());
        assert_eq!(session.language(), Language::Go);
    }

    #[test]
    fn toggling_auto_detect_on_redetects() {
        let mut session = session();
        session.dispatch(Action::ToggleAutoDetect(false));
        session.dispatch(Action::EditCode("<p>x</p>".into()));
        assert_eq!(session.language(), Language::Go);

        session.dispatch(Action::ToggleAutoDetect(true));
        assert_eq!(session.language(), Language::Html);
    }

    #[test]
    fn set_username_persists() {
        let mut session = session();
        let effects = session.dispatch(Action::SetUsername("Ada".into()));
        assert_eq!(session.username(), "Ada");
        assert_eq!(
            effects,
            vec![Effect::Persist(PersistWrite {
                key: "username",
                value: "Ada".into(),
            })]
        );
    }

    #[test]
    fn format_reindents_buffer() {
        let mut session = session();
        session.dispatch(Action::EditCode("func main() {\nfmt.Println(1)\n}".into()));
        let effects = session.dispatch(Action::Format);
        assert!(effects.is_empty());
        assert_eq!(session.code(), "func main() {\n\tfmt.Println(1)\n}");
    }

    #[test]
    fn format_leaves_python_untouched() {
        let mut session = session();
        let text = "def f():\nreturn 1";
        session.dispatch(Action::EditCode(text.into()));
        assert_eq!(session.language(), Language::Python);
        session.dispatch(Action::Format);
        assert_eq!(session.code(), text);
    }

    #[test]
    fn registered_provider_takes_precedence() {
        let mut providers = FormattingProviders::new();
        providers.register(Language::Go, Box::new(|text: &str| text.to_uppercase()));
        let mut session = session().with_formatters(providers);

        session.dispatch(Action::Format);
        assert_eq!(session.code(), "FUNC FIRST() {\n}");
    }

    #[test]
    fn next_and_resets_go_through_dispatch() {
        let mut session = session();
        session.dispatch(Action::Next);
        assert_eq!(session.current_index(), 1);
        session.dispatch(Action::EditCode("changed".into()));
        session.dispatch(Action::ResetQuestion);
        assert_eq!(session.code(), "<div>\n</div>");
        let effects = session.dispatch(Action::ResetAll);
        assert_eq!(session.current_index(), 0);
        assert_eq!(effects.len(), 1);
    }
}
