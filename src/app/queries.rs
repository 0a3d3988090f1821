use super::*;
use crate::data::wrapping_get;
use crate::editor::EditorBinding;

impl PracticeSession {
    pub fn current_question(&self) -> &Question {
        wrapping_get(&self.questions, self.current_index)
    }

    /// La pregunta que viene después de la actual (con vuelta al principio).
    pub fn upcoming_question(&self) -> &Question {
        wrapping_get(&self.questions, self.current_index + 1)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn completed(&self) -> &HashSet<String> {
        &self.completed
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn auto_detect(&self) -> bool {
        self.auto_detect
    }

    /// Hay un envío esperando veredicto.
    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    pub fn config(&self) -> &PracticeConfig {
        &self.config
    }

    pub fn editor_binding(&self) -> EditorBinding<'_> {
        EditorBinding {
            value: &self.code,
            language: self.language,
        }
    }
}
