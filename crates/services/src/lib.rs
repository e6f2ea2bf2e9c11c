#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod question_bank;
pub mod quiz_loop;

pub use quiz_core::Clock;

pub use app_services::{AppServices, QuizSettings};
pub use error::{AppServicesError, QuestionBankError};
pub use question_bank::{QuestionBank, QuestionSource};
pub use quiz_loop::{DEFAULT_AUTO_ADVANCE, MATCH_FEEDBACK_DURATION, QuizLoopService};
