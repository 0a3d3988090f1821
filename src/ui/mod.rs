mod helpers;
pub mod layout;
pub mod syntax;
pub mod views;

use crate::app::{Action, Effect, PracticeSession, SubmitTicket};
use crate::model::SubmissionResult;
use crate::storage::{EframeStore, PersistWrite, write_all};
use eframe::{App, Frame};
use egui::Context;
use layout::{bottom_panel, top_panel};
use std::time::Duration;

/// Ventana de escritorio. Solo traduce eventos en `Action`s y pinta el estado.
pub struct PracticeApp {
    session: PracticeSession,
    /// Veredicto programado y el instante (segundos de egui) en que vence.
    scheduled: Option<(SubmitTicket, f64)>,
    result: Option<SubmissionResult>,
    notice: Option<String>,
    /// Escrituras que aún no han llegado al almacenamiento de eframe.
    outbox: Vec<PersistWrite>,
}

impl PracticeApp {
    pub fn new(session: PracticeSession) -> Self {
        Self {
            session,
            scheduled: None,
            result: None,
            notice: None,
            outbox: Vec::new(),
        }
    }

    pub fn session(&self) -> &PracticeSession {
        &self.session
    }

    /// Ejecuta las acciones en orden y atiende sus efectos.
    pub fn dispatch_all(&mut self, ctx: &Context, actions: Vec<Action>) {
        for action in actions {
            let effects = self.session.dispatch(action);
            self.apply_effects(ctx, effects);
        }
    }

    fn apply_effects(&mut self, ctx: &Context, effects: Vec<Effect>) {
        let now = ctx.input(|i| i.time);
        for effect in effects {
            match effect {
                Effect::Persist(write) => self.outbox.push(write),
                Effect::ScheduleVerdict { ticket, delay } => {
                    self.scheduled = Some((ticket, now + delay.as_secs_f64()));
                    ctx.request_repaint_after(delay);
                }
                Effect::ShowResult(result) => {
                    self.notice = None;
                    self.result = Some(result);
                }
                Effect::Notice(text) => self.notice = Some(text),
            }
        }
    }

    /// Entrega el veredicto cuando vence su plazo; mientras tanto sigue repintando.
    fn poll_scheduled_verdict(&mut self, ctx: &Context) {
        let Some((ticket, due)) = self.scheduled else {
            return;
        };
        let now = ctx.input(|i| i.time);
        if now >= due {
            self.scheduled = None;
            self.dispatch_all(ctx, vec![Action::CompleteSubmit(ticket)]);
        } else {
            ctx.request_repaint_after(Duration::from_secs_f64(due - now));
        }
    }

    fn flush_outbox(&mut self, storage: &mut dyn eframe::Storage) {
        if self.outbox.is_empty() {
            return;
        }
        write_all(&mut EframeStore(storage), self.outbox.drain(..));
        storage.flush();
    }
}

impl App for PracticeApp {
    fn update(&mut self, ctx: &Context, frame: &mut Frame) {
        self.poll_scheduled_verdict(ctx);

        top_panel(self, ctx);
        bottom_panel(ctx);
        views::practice::ui_question_panel(self, ctx);
        views::practice::ui_practice(self, ctx);

        if self.result.is_some() {
            views::result::ui_result(self, ctx);
        }

        if let Some(storage) = frame.storage_mut() {
            self.flush_outbox(storage);
        }
    }

    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        self.flush_outbox(storage);
    }
}
