pub mod app;
pub mod code_utils;
pub mod config;
pub mod data;
pub mod detect;
pub mod editor;
pub mod error;
pub mod judge;
pub mod model;
pub mod storage;
pub mod ui;

pub use app::{Action, Effect, PracticeSession, ProgressInfo, SubmitTicket};
pub use config::PracticeConfig;
pub use data::QuestionBank;
pub use error::{PracticeError, StoreError};
pub use model::{Language, LanguageChoice, Question, SubmissionResult};
pub use ui::PracticeApp;
