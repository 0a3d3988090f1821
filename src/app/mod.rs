use crate::config::PracticeConfig;
use crate::data::QuestionBank;
use crate::detect::detect_language;
use crate::editor::FormattingProviders;
use crate::model::{Language, Question};
use crate::storage::KeyValueStore;
use std::collections::HashSet;

// Submódulos
pub mod actions;
pub mod completion;
pub mod navigation;
pub mod progress;
pub mod queries;
pub mod resets;
pub mod submit;
pub mod view_models;

pub use actions::{Action, Effect};
pub use submit::SubmitTicket;
pub use view_models::ProgressInfo;

/// Envío en espera de veredicto. Guarda el código tal como estaba al enviar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PendingSubmit {
    pub ticket: SubmitTicket,
    pub question_index: usize,
    pub code: String,
}

/// Estado de una sesión de práctica. Solo cambia a través de `dispatch`.
#[derive(Debug)]
pub struct PracticeSession {
    bank: QuestionBank,
    questions: Vec<Question>,
    current_index: usize,
    code: String,
    score: u32,
    username: String,
    completed: HashSet<String>,
    language: Language,
    auto_detect: bool,
    // Se incrementa cada vez que cambia la pregunta o se reinicia el búfer
    generation: u64,
    next_serial: u64,
    pending: Option<PendingSubmit>,
    config: PracticeConfig,
    formatters: FormattingProviders,
}

impl PracticeSession {
    /// Arranca en la primera pregunta, con puntuación y nombre leídos de `store`.
    pub fn new(bank: QuestionBank, store: &dyn KeyValueStore, config: PracticeConfig) -> Self {
        let questions = bank.reset();
        let code = questions[0].template.clone();
        let language = detect_language(&code);

        let mut session = Self {
            bank,
            questions,
            current_index: 0,
            code,
            score: 0,
            username: config.placeholder_username.clone(),
            completed: HashSet::new(),
            language,
            auto_detect: true,
            generation: 0,
            next_serial: 0,
            pending: None,
            config,
            formatters: FormattingProviders::with_defaults(),
        };
        session.hydrate(store);
        session
    }

    /// Sustituye los proveedores de formateo registrados.
    pub fn with_formatters(mut self, formatters: FormattingProviders) -> Self {
        self.formatters = formatters;
        self
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use crate::storage::{MemoryStore, SCORE_KEY, USERNAME_KEY};

    #[test]
    fn starts_on_first_question_with_its_template() {
        let session = session();
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.code(), "func First() {\n}");
        assert_eq!(session.language(), Language::Go);
        assert!(session.auto_detect());
        assert_eq!(session.score(), 0);
        assert_eq!(session.username(), "Learner");
        assert!(session.completed().is_empty());
        assert!(!session.is_busy());
    }

    #[test]
    fn initial_language_is_detected_from_first_template() {
        let bank = QuestionBank::new(vec![question("page", "<p>hi</p>")]).unwrap();
        let session = PracticeSession::new(bank, &MemoryStore::new(), config());
        assert_eq!(session.language(), Language::Html);
    }

    #[test]
    fn hydrates_score_and_username_from_store() {
        let store = MemoryStore::new()
            .with(SCORE_KEY, "70")
            .with(USERNAME_KEY, "Grace");
        let session = PracticeSession::new(bank(), &store, config());
        assert_eq!(session.score(), 70);
        assert_eq!(session.username(), "Grace");
    }

    #[test]
    fn unparsable_score_hydrates_as_zero() {
        let store = MemoryStore::new().with(SCORE_KEY, "lots");
        let session = PracticeSession::new(bank(), &store, config());
        assert_eq!(session.score(), 0);
    }
}
