use std::sync::Arc;
use std::time::Duration;

use quiz_core::model::QuestionSet;
use quiz_core::session::{AdvanceOutcome, AdvanceTicket, QuizSession, SessionError};
use tracing::{debug, info};

use crate::Clock;

/// Delay between a multiple-choice answer and the next question.
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_millis(500);

/// How long a matching attempt stays highlighted.
pub const MATCH_FEEDBACK_DURATION: Duration = Duration::from_secs(1);

/// Creates sessions over the shared question set and drives their timed transitions.
#[derive(Debug, Clone)]
pub struct QuizLoopService {
    clock: Clock,
    questions: Arc<QuestionSet>,
    auto_advance: Duration,
    match_feedback: Duration,
    seed: Option<u64>,
}

impl QuizLoopService {
    #[must_use]
    pub fn new(clock: Clock, questions: Arc<QuestionSet>) -> Self {
        Self {
            clock,
            questions,
            auto_advance: DEFAULT_AUTO_ADVANCE,
            match_feedback: MATCH_FEEDBACK_DURATION,
            seed: None,
        }
    }

    #[must_use]
    pub fn with_auto_advance(mut self, delay: Duration) -> Self {
        self.auto_advance = delay;
        self
    }

    #[must_use]
    pub fn with_match_feedback(mut self, duration: Duration) -> Self {
        self.match_feedback = duration;
        self
    }

    /// Seed every new session's shuffle.
    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.questions)
    }

    #[must_use]
    pub fn auto_advance(&self) -> Duration {
        self.auto_advance
    }

    #[must_use]
    pub fn match_feedback(&self) -> Duration {
        self.match_feedback
    }

    /// A session in the not-started phase.
    #[must_use]
    pub fn new_session(&self) -> QuizSession {
        let session = QuizSession::new(Arc::clone(&self.questions)).with_clock(self.clock);
        match self.seed {
            Some(seed) => session.with_seed(seed),
            None => session,
        }
    }

    /// Start (or start over) `session`.
    pub fn start(&self, session: &mut QuizSession) {
        session.start();
        info!(
            questions = session.total_questions(),
            finished = session.is_finished(),
            "quiz started"
        );
    }

    /// Commit the current question.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the session is not in progress.
    pub fn advance(&self, session: &mut QuizSession) -> Result<AdvanceOutcome, SessionError> {
        let index = session.current_index();
        let outcome = session.advance()?;
        debug!(index, earned = outcome.earned, score = session.score(), "question committed");
        if outcome.finished {
            log_finished(session);
        }
        Ok(outcome)
    }

    /// Redeem a delayed advance. Stale tickets are ignored.
    ///
    /// # Errors
    ///
    /// Returns `SessionError` if the ticket is current but the session rejects the advance.
    pub fn redeem(
        &self,
        session: &mut QuizSession,
        ticket: AdvanceTicket,
    ) -> Result<Option<AdvanceOutcome>, SessionError> {
        let outcome = session.redeem(ticket)?;
        match outcome {
            Some(outcome) => {
                debug!(
                    index = ticket.question_index(),
                    earned = outcome.earned,
                    "auto-advanced"
                );
                if outcome.finished {
                    log_finished(session);
                }
            }
            None => debug!(index = ticket.question_index(), "stale advance ticket ignored"),
        }
        Ok(outcome)
    }

    /// Sleep for the multiple-choice auto-advance delay.
    pub async fn wait_auto_advance(&self) {
        tokio::time::sleep(self.auto_advance).await;
    }

    /// Sleep for the matching feedback duration.
    pub async fn wait_match_feedback(&self) {
        tokio::time::sleep(self.match_feedback).await;
    }
}

fn log_finished(session: &QuizSession) {
    if let Some(results) = session.results() {
        info!(
            score = results.score(),
            max_points = results.max_points(),
            percentage = results.percentage(),
            "quiz finished"
        );
    }
}
