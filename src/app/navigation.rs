use super::*;

impl PracticeSession {
    /// Avanza a la siguiente pregunta; después de la última vuelve a la primera.
    pub(crate) fn next_question(&mut self) {
        self.current_index = (self.current_index + 1) % self.questions.len();
        self.load_current_template();
        log::debug!(
            "moved to question {} ({})",
            self.current_index,
            self.current_question().id
        );
    }

    /// Carga la plantilla de la pregunta actual en el búfer y descarta
    /// cualquier envío pendiente.
    pub(crate) fn load_current_template(&mut self) {
        self.code = self.current_question().template.clone();
        self.invalidate_pending();
        if self.auto_detect {
            self.language = detect_language(&self.code);
        }
    }

    /// Nueva generación: los veredictos de envíos anteriores ya no aplican.
    pub(crate) fn invalidate_pending(&mut self) {
        self.generation += 1;
        if let Some(stale) = self.pending.take() {
            log::debug!(
                "discarding pending submission {:?} for question {}",
                stale.ticket,
                stale.question_index
            );
        }
    }
}
