use super::*;
use crate::storage::{PersistWrite, SCORE_KEY, USERNAME_KEY, load_score, load_username};

impl PracticeSession {
    /// Lee puntuación y nombre una sola vez, al arrancar.
    pub(crate) fn hydrate(&mut self, store: &dyn KeyValueStore) {
        self.score = load_score(store);
        self.username = load_username(store, &self.config.placeholder_username);
        log::info!(
            "session hydrated for {:?} with score {}",
            self.username,
            self.score
        );
    }

    pub(crate) fn score_write(&self) -> Effect {
        Effect::Persist(PersistWrite {
            key: SCORE_KEY,
            value: self.score.to_string(),
        })
    }

    pub(crate) fn username_write(&self) -> Effect {
        Effect::Persist(PersistWrite {
            key: USERNAME_KEY,
            value: self.username.clone(),
        })
    }
}
