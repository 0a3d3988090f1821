use super::*;

impl PracticeSession {
    /// Añade la pregunta al conjunto de completadas. Devuelve `false` si ya estaba.
    pub(crate) fn mark_completed(&mut self, question_id: &str) -> bool {
        let inserted = self.completed.insert(question_id.to_string());
        if !inserted {
            log::debug!("question {question_id} was already completed");
        }
        inserted
    }

    pub fn is_completed(&self, question_id: &str) -> bool {
        self.completed.contains(question_id)
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }

    pub fn is_current_completed(&self) -> bool {
        self.is_completed(&self.current_question().id)
    }
}
