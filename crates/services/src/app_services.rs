use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::QuestionSet;

use crate::Clock;
use crate::error::AppServicesError;
use crate::question_bank::QuestionBank;
use crate::quiz_loop::{DEFAULT_AUTO_ADVANCE, QuizLoopService};

/// Knobs the binary resolves from flags and environment.
#[derive(Debug, Clone)]
pub struct QuizSettings {
    pub data_path: Option<PathBuf>,
    pub auto_advance: Duration,
    pub seed: Option<u64>,
}

impl Default for QuizSettings {
    fn default() -> Self {
        Self {
            data_path: None,
            auto_advance: DEFAULT_AUTO_ADVANCE,
            seed: None,
        }
    }
}

/// Assembles app-facing services.
#[derive(Debug, Clone)]
pub struct AppServices {
    bank: QuestionBank,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppServices {
    /// Load the question bank and build the quiz loop.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the question document cannot be loaded.
    pub fn load(settings: &QuizSettings, clock: Clock) -> Result<Self, AppServicesError> {
        let bank = QuestionBank::load(settings.data_path.as_deref())?;
        Ok(Self::from_bank(bank, settings, clock))
    }

    #[must_use]
    pub fn from_bank(bank: QuestionBank, settings: &QuizSettings, clock: Clock) -> Self {
        let quiz_loop = QuizLoopService::new(clock, bank.questions())
            .with_auto_advance(settings.auto_advance)
            .with_seed(settings.seed);
        Self {
            bank,
            quiz_loop: Arc::new(quiz_loop),
        }
    }

    #[must_use]
    pub fn question_bank(&self) -> &QuestionBank {
        &self.bank
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionSet> {
        self.bank.questions()
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}
