use super::*;

/// Lo que la barra superior necesita para pintarse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressInfo {
    /// Posición de la pregunta actual, empezando en 1.
    pub position: usize,
    pub total: usize,
    pub percent: u32,
    pub completed: usize,
    pub username: String,
    pub score: u32,
    pub language: Language,
    pub auto_detect: bool,
    pub busy: bool,
}

impl ProgressInfo {
    pub fn label(&self) -> String {
        format!("Question {} of {}", self.position, self.total)
    }

    pub fn fraction(&self) -> f32 {
        self.percent as f32 / 100.0
    }
}

/// Porcentaje redondeado al entero más cercano; las mitades suben.
pub fn rounded_percent(position: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((position * 200 + total) / (2 * total)) as u32
}

impl PracticeSession {
    pub fn progress_info(&self) -> ProgressInfo {
        let total = self.question_count();
        let position = self.current_index + 1;
        ProgressInfo {
            position,
            total,
            percent: rounded_percent(position, total),
            completed: self.completed_count(),
            username: self.username.clone(),
            score: self.score,
            language: self.language,
            auto_detect: self.auto_detect,
            busy: self.is_busy(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::*;

    #[test]
    fn percent_rounds_like_the_progress_bar() {
        assert_eq!(rounded_percent(1, 3), 33);
        assert_eq!(rounded_percent(2, 3), 67);
        assert_eq!(rounded_percent(1, 8), 13);
        assert_eq!(rounded_percent(1, 11), 9);
        assert_eq!(rounded_percent(11, 11), 100);
        assert_eq!(rounded_percent(0, 0), 0);
    }

    #[test]
    fn progress_reflects_session() {
        let mut session = session();
        session.next_question();
        session.mark_completed("first");

        let info = session.progress_info();
        assert_eq!(info.position, 2);
        assert_eq!(info.total, 3);
        assert_eq!(info.percent, 67);
        assert_eq!(info.completed, 1);
        assert_eq!(info.username, "Learner");
        assert_eq!(info.language, Language::Html);
        assert!(info.auto_detect);
        assert!(!info.busy);
        assert_eq!(info.label(), "Question 2 of 3");
    }
}
