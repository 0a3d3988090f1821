use super::*;

impl PracticeSession {
    /// Devuelve el búfer a la plantilla. Puntuación y completadas no cambian.
    pub(crate) fn reset_question(&mut self) {
        self.load_current_template();
    }

    /// Recarga el catálogo y borra todo el progreso. Es la única transición
    /// que baja la puntuación.
    pub(crate) fn reset_all(&mut self) -> Vec<Effect> {
        self.questions = self.bank.reset();
        self.current_index = 0;
        self.score = 0;
        self.completed.clear();
        self.load_current_template();
        log::info!("progress reset for {:?}", self.username);

        vec![self.score_write()]
    }
}

#[cfg(test)]
mod tests {
    use crate::app::test_support::*;
    use crate::app::Effect;
    use crate::model::Language;
    use crate::storage::PersistWrite;

    #[test]
    fn reset_question_restores_template_only() {
        let mut session = session();
        session.score = 30;
        session.mark_completed("first");
        session.code = "return 1".into();

        session.reset_question();

        assert_eq!(session.code(), "func First() {\n}");
        assert_eq!(session.score(), 30);
        assert_eq!(session.completed_count(), 1);
        assert_eq!(session.current_index(), 0);
    }

    #[test]
    fn reset_all_clears_everything_and_persists_zero() {
        let mut session = session();
        session.next_question();
        session.next_question();
        session.score = 90;
        session.mark_completed("first");
        session.mark_completed("second");
        session.code = "anything".into();

        let effects = session.reset_all();

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert!(session.completed().is_empty());
        assert_eq!(session.code(), "func First() {\n}");
        assert_eq!(session.language(), Language::Go);
        assert_eq!(
            effects,
            vec![Effect::Persist(PersistWrite {
                key: "score",
                value: "0".into(),
            })]
        );
    }

    #[test]
    fn reset_all_reloads_a_fresh_catalog_copy() {
        let mut session = session();
        session.questions[0].title = "edited".into();
        session.reset_all();
        assert_eq!(session.current_question().title, "first");
    }
}
