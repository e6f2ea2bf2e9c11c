use std::sync::Arc;

use quiz_core::model::QuestionSet;
use services::QuizLoopService;

pub trait UiApp: Send + Sync {
    fn question_set(&self) -> Arc<QuestionSet>;
    fn quiz_loop(&self) -> Arc<QuizLoopService>;
}

#[derive(Clone)]
pub struct AppContext {
    question_set: Arc<QuestionSet>,
    quiz_loop: Arc<QuizLoopService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            question_set: app.question_set(),
            quiz_loop: app.quiz_loop(),
        }
    }

    #[must_use]
    pub fn question_set(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.question_set)
    }

    #[must_use]
    pub fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
