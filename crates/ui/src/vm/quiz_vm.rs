use quiz_core::buffer::AnswerBuffer;
use quiz_core::matching::MatchOutcome;
use quiz_core::model::{Question, QuestionSet};
use quiz_core::results::QuizResults;
use quiz_core::session::{AdvanceTicket, QuizSession, SessionError, SessionPhase};
use services::QuizLoopService;
use tracing::{debug, warn};

use crate::views::ViewError;

/// Everything the quiz screen can ask the session to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Start,
    ChooseOption(usize),
    SelectLeft(usize),
    SelectRight(usize),
    SelectWord { sentence: usize, option: usize },
    CheckWords,
    OrderingInput { index: usize, text: String },
    CorrectionInput { index: usize, text: String },
    NoError { index: usize, checked: bool },
    RewriteInput { index: usize, text: String },
    BlankInput { index: usize, text: String },
    Next,
    Restart,
}

/// Follow-up work a handled intent asks the view to schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IntentEffect {
    None,
    /// Redeem the ticket once the auto-advance delay has passed.
    AutoAdvance(AdvanceTicket),
    /// Clear matching feedback for this attempt after it has been shown.
    ClearMatchFeedback(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizScreen {
    Start,
    Question,
    Results,
}

pub struct QuizVm {
    session: QuizSession,
}

impl QuizVm {
    #[must_use]
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn screen(&self) -> QuizScreen {
        match self.session.phase() {
            SessionPhase::NotStarted => QuizScreen::Start,
            SessionPhase::InProgress => QuizScreen::Question,
            SessionPhase::Finished => QuizScreen::Results,
        }
    }

    #[must_use]
    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    #[must_use]
    pub fn question_set(&self) -> &QuestionSet {
        self.session.question_set()
    }

    #[must_use]
    pub fn question(&self) -> Option<&Question> {
        self.session.current_question()
    }

    #[must_use]
    pub fn buffer(&self) -> &AnswerBuffer {
        self.session.buffer()
    }

    #[must_use]
    pub fn progress_label(&self) -> String {
        format!(
            "Question {} of {}",
            self.session.current_index() + 1,
            self.session.total_questions()
        )
    }

    #[must_use]
    pub fn score_label(&self) -> String {
        format!("Score: {}", self.session.score())
    }

    #[must_use]
    pub fn is_last_question(&self) -> bool {
        self.session.current_index() + 1 >= self.session.total_questions()
    }

    #[must_use]
    pub fn item_marks(&self) -> Vec<Option<bool>> {
        self.session.item_marks()
    }

    /// Live "earned / available" label for the question on screen.
    #[must_use]
    pub fn pending_label(&self) -> String {
        let available = self.question().map_or(0, Question::max_points);
        format!("Score: {}/{available}", self.session.pending_points())
    }

    #[must_use]
    pub fn results(&self) -> Option<QuizResults> {
        self.session.results()
    }

    /// Apply `intent` to the session.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Rejected` when the session refuses the intent; its state is unchanged.
    pub fn apply(
        &mut self,
        quiz_loop: &QuizLoopService,
        intent: QuizIntent,
    ) -> Result<IntentEffect, ViewError> {
        let result = self.apply_inner(quiz_loop, intent.clone());
        if let Err(err) = &result {
            warn!(?intent, %err, "intent rejected");
        }
        result.map_err(|_| ViewError::Rejected)
    }

    fn apply_inner(
        &mut self,
        quiz_loop: &QuizLoopService,
        intent: QuizIntent,
    ) -> Result<IntentEffect, SessionError> {
        let session = &mut self.session;
        match intent {
            QuizIntent::Start => {
                quiz_loop.start(session);
                Ok(IntentEffect::None)
            }
            QuizIntent::Restart => {
                session.restart();
                Ok(IntentEffect::None)
            }
            QuizIntent::ChooseOption(option) => {
                session.choose_option(option).map(IntentEffect::AutoAdvance)
            }
            QuizIntent::SelectLeft(left) => session.select_left(left).map(|_| IntentEffect::None),
            QuizIntent::SelectRight(position) => {
                let outcome = session.select_right(position)?;
                debug!(?outcome, "match attempt");
                Ok(match (outcome, session.buffer()) {
                    (MatchOutcome::Ignored, _) => IntentEffect::None,
                    (_, AnswerBuffer::Matching(board)) => board
                        .feedback()
                        .map_or(IntentEffect::None, |feedback| {
                            IntentEffect::ClearMatchFeedback(feedback.seq)
                        }),
                    _ => IntentEffect::None,
                })
            }
            QuizIntent::SelectWord { sentence, option } => {
                session.select_word(sentence, option).map(|()| IntentEffect::None)
            }
            QuizIntent::CheckWords => session.check_selected_words().map(|_| IntentEffect::None),
            QuizIntent::OrderingInput { index, text } => {
                session.set_ordering_input(index, &text).map(|()| IntentEffect::None)
            }
            QuizIntent::CorrectionInput { index, text } => {
                session.set_correction_input(index, &text).map(|()| IntentEffect::None)
            }
            QuizIntent::NoError { index, checked } => {
                session.set_no_error(index, checked).map(|()| IntentEffect::None)
            }
            QuizIntent::RewriteInput { index, text } => {
                session.set_rewrite_input(index, &text).map(|()| IntentEffect::None)
            }
            QuizIntent::BlankInput { index, text } => {
                session.set_blank_input(index, &text).map(|()| IntentEffect::None)
            }
            QuizIntent::Next => quiz_loop.advance(session).map(|_| IntentEffect::None),
        }
    }

    /// Redeem a delayed multiple-choice advance. Stale tickets do nothing.
    pub fn redeem(&mut self, quiz_loop: &QuizLoopService, ticket: AdvanceTicket) {
        if let Err(err) = quiz_loop.redeem(&mut self.session, ticket) {
            warn!(%err, "auto-advance rejected");
        }
    }

    pub fn clear_match_feedback(&mut self, seq: u64) {
        self.session.clear_match_feedback(seq);
    }
}
