use super::*;
use crate::data::wrapping_get;
use crate::judge;

pub const BUSY_NOTICE: &str = "A submission is already being checked. Wait for the result.";

/// Identifica un envío concreto. Solo su veredicto puede cerrarlo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubmitTicket {
    pub generation: u64,
    pub serial: u64,
}

impl PracticeSession {
    /// Guarda una instantánea del búfer y pide al anfitrión que entregue el
    /// veredicto pasado `submit_delay`.
    pub(crate) fn submit(&mut self) -> Vec<Effect> {
        if let Some(pending) = &self.pending {
            log::debug!("submit refused, {:?} still pending", pending.ticket);
            return vec![Effect::Notice(BUSY_NOTICE.to_string())];
        }

        self.next_serial += 1;
        let ticket = SubmitTicket {
            generation: self.generation,
            serial: self.next_serial,
        };
        self.pending = Some(PendingSubmit {
            ticket,
            question_index: self.current_index,
            code: self.code.clone(),
        });
        log::debug!(
            "submission {ticket:?} queued for question {}",
            self.current_question().id
        );

        vec![Effect::ScheduleVerdict {
            ticket,
            delay: self.config.submit_delay,
        }]
    }

    /// Aplica el veredicto si `ticket` sigue siendo el envío pendiente.
    pub(crate) fn complete_submit(&mut self, ticket: SubmitTicket) -> Vec<Effect> {
        let pending = match self.pending.take() {
            Some(pending) if pending.ticket == ticket => pending,
            other => {
                self.pending = other;
                log::debug!("dropping stale verdict {ticket:?}");
                return Vec::new();
            }
        };

        let question = wrapping_get(&self.questions, pending.question_index);
        let result = judge::check(&pending.code, question, self.score);
        log::info!(
            "question {} checked: {}",
            question.id,
            if result.passed { "passed" } else { "failed" }
        );

        if !result.passed {
            return vec![Effect::ShowResult(result)];
        }

        let question_id = question.id.clone();
        self.score = result.score_after;
        self.mark_completed(&question_id);
        let effects = vec![self.score_write(), Effect::ShowResult(result)];
        self.next_question();
        effects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::test_support::*;
    use crate::judge::{MISSING_RETURN, SCORE_INCREMENT};
    use std::time::Duration;

    fn scheduled_ticket(effects: &[Effect]) -> SubmitTicket {
        match effects {
            [Effect::ScheduleVerdict { ticket, .. }] => *ticket,
            other => panic!("expected a scheduled verdict, got {other:?}"),
        }
    }

    #[test]
    fn submit_schedules_with_configured_delay() {
        let mut session = session();
        let effects = session.submit();
        assert!(matches!(
            effects.as_slice(),
            [Effect::ScheduleVerdict { delay, .. }] if *delay == Duration::from_millis(250)
        ));
        assert!(session.is_busy());
    }

    #[test]
    fn passing_verdict_scores_completes_and_advances() {
        let mut session = session();
        session.code = "func First() int { return 1 }".into();
        let ticket = scheduled_ticket(&session.submit());

        let effects = session.complete_submit(ticket);

        assert_eq!(session.score(), SCORE_INCREMENT);
        assert!(session.is_completed("first"));
        assert_eq!(session.current_index(), 1);
        assert_eq!(session.code(), "<div>\n</div>");
        assert!(!session.is_busy());
        assert_eq!(effects.len(), 2);
        assert_eq!(effects[0], session_score_write(SCORE_INCREMENT));
        assert!(matches!(&effects[1], Effect::ShowResult(r) if r.passed && r.feedback.is_empty()));
    }

    #[test]
    fn failing_verdict_only_shows_feedback() {
        let mut session = session();
        let ticket = scheduled_ticket(&session.submit());

        let effects = session.complete_submit(ticket);

        assert_eq!(session.score(), 0);
        assert!(session.completed().is_empty());
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.code(), "func First() {\n}");
        match effects.as_slice() {
            [Effect::ShowResult(result)] => {
                assert!(!result.passed);
                assert_eq!(result.feedback[0], MISSING_RETURN);
                assert_eq!(result.feedback[1], "Hint: Think about first.");
            }
            other => panic!("unexpected effects {other:?}"),
        }
    }

    #[test]
    fn verdict_uses_code_snapshot_from_submit_time() {
        let mut session = session();
        session.code = "return 1".into();
        let ticket = scheduled_ticket(&session.submit());
        session.code = "nothing here".into();

        let effects = session.complete_submit(ticket);

        assert!(matches!(&effects[1], Effect::ShowResult(r) if r.passed));
    }

    #[test]
    fn second_submit_while_pending_is_refused() {
        let mut session = session();
        session.code = "return 1".into();
        let ticket = scheduled_ticket(&session.submit());

        let refused = session.submit();
        assert_eq!(refused, vec![Effect::Notice(BUSY_NOTICE.to_string())]);

        session.complete_submit(ticket);
        assert_eq!(session.score(), SCORE_INCREMENT);
    }

    #[test]
    fn stale_verdict_after_reset_is_dropped() {
        let mut session = session();
        session.code = "return 1".into();
        let ticket = scheduled_ticket(&session.submit());

        session.reset_question();
        let effects = session.complete_submit(ticket);

        assert!(effects.is_empty());
        assert_eq!(session.score(), 0);
        assert!(session.completed().is_empty());
        assert!(!session.is_busy());
    }

    #[test]
    fn stale_verdict_does_not_close_a_newer_submission() {
        let mut session = session();
        let old = scheduled_ticket(&session.submit());
        session.next_question();
        let new = scheduled_ticket(&session.submit());
        assert_ne!(old, new);

        assert!(session.complete_submit(old).is_empty());
        assert!(session.is_busy());
        assert!(!session.complete_submit(new).is_empty());
        assert!(!session.is_busy());
    }

    #[test]
    fn same_question_twice_completes_once_and_scores_twice() {
        let mut session = session();
        for round in 1..=2u32 {
            session.code = "return 0".into();
            let ticket = scheduled_ticket(&session.submit());
            session.complete_submit(ticket);
            assert_eq!(session.score(), SCORE_INCREMENT * round);
            // volver a la primera pregunta
            while session.current_index() != 0 {
                session.next_question();
            }
        }
        assert_eq!(session.completed_count(), 1);
    }

    fn session_score_write(score: u32) -> Effect {
        Effect::Persist(crate::storage::PersistWrite {
            key: crate::storage::SCORE_KEY,
            value: score.to_string(),
        })
    }
}
