use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rand::SeedableRng;
use rand::rngs::StdRng;
use thiserror::Error;

use crate::buffer::AnswerBuffer;
use crate::matching::{MatchOutcome, MatchingBoard};
use crate::model::{Question, QuestionBody, QuestionKind, QuestionSet};
use crate::results::{QuestionOutcome, QuizResults};
use crate::scoring;
use crate::time::Clock;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Misuse of a session operation. The session is left unchanged.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    #[error("quiz has not been started")]
    NotStarted,

    #[error("quiz already finished")]
    Finished,

    #[error("expected a {expected} question, current question is {actual:?}")]
    WrongVariant {
        expected: QuestionKind,
        actual: Option<QuestionKind>,
    },

    #[error("item {index} is out of range ({len} items)")]
    ItemOutOfRange { index: usize, len: usize },

    #[error("answers for this question are already locked")]
    AnswersLocked,
}

//
// ─── PHASE & TICKETS ───────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    NotStarted,
    InProgress,
    Finished,
}

/// Identifies the question a delayed advance was scheduled for.
///
/// Redeeming a ticket after the question changed (or the session restarted) does nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AdvanceTicket {
    question_index: usize,
    generation: u64,
}

impl AdvanceTicket {
    #[must_use]
    pub fn question_index(&self) -> usize {
        self.question_index
    }
}

/// What a committed question contributed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdvanceOutcome {
    pub earned: u32,
    pub finished: bool,
}

//
// ─── SESSION ───────────────────────────────────────────────────────────────────
//

/// In-memory quiz run over a shared question set.
///
/// Holds the current index, the committed score and the answer buffer for the active
/// question; scoring happens only when a question is committed via [`QuizSession::advance`].
pub struct QuizSession {
    questions: Arc<QuestionSet>,
    clock: Clock,
    rng: StdRng,
    phase: SessionPhase,
    current: usize,
    score: u32,
    buffer: AnswerBuffer,
    outcomes: Vec<QuestionOutcome>,
    generation: u64,
    started_at: Option<DateTime<Utc>>,
    completed_at: Option<DateTime<Utc>>,
}

impl QuizSession {
    /// Create a session in the not-started phase, shuffling from process randomness.
    #[must_use]
    pub fn new(questions: Arc<QuestionSet>) -> Self {
        Self {
            questions,
            clock: Clock::default_clock(),
            rng: StdRng::from_rng(&mut rand::rng()),
            phase: SessionPhase::NotStarted,
            current: 0,
            score: 0,
            buffer: AnswerBuffer::Empty,
            outcomes: Vec::new(),
            generation: 0,
            started_at: None,
            completed_at: None,
        }
    }

    /// Use a deterministic shuffle seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    //
    // ─── LIFECYCLE ─────────────────────────────────────────────────────────────
    //

    /// Reset everything and begin at the first question.
    ///
    /// A set without questions finishes immediately.
    pub fn start(&mut self) {
        self.reset();
        self.phase = SessionPhase::InProgress;
        self.started_at = Some(self.clock.now());
        self.load_current();
    }

    /// Return to the pre-start state.
    pub fn restart(&mut self) {
        self.reset();
    }

    /// Commit the current question's buffer, add its points and move on.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotStarted` or `SessionError::Finished` outside a run.
    pub fn advance(&mut self) -> Result<AdvanceOutcome, SessionError> {
        self.ensure_in_progress()?;
        let Some(question) = self.questions.get(self.current) else {
            self.finish();
            return Err(SessionError::Finished);
        };

        let earned = self.buffer.points(question);
        self.outcomes.push(QuestionOutcome {
            index: self.current,
            kind: question.kind(),
            earned,
            available: question.max_points(),
        });
        self.score = self.score.saturating_add(earned);
        self.current += 1;
        self.load_current();

        Ok(AdvanceOutcome {
            earned,
            finished: self.is_finished(),
        })
    }

    /// Ticket for the question currently on screen.
    #[must_use]
    pub fn ticket(&self) -> AdvanceTicket {
        AdvanceTicket {
            question_index: self.current,
            generation: self.generation,
        }
    }

    /// Advance only if `ticket` still refers to the active question.
    ///
    /// Returns `Ok(None)` for a stale ticket.
    ///
    /// # Errors
    ///
    /// Propagates `advance` errors for a current ticket.
    pub fn redeem(&mut self, ticket: AdvanceTicket) -> Result<Option<AdvanceOutcome>, SessionError> {
        if ticket != self.ticket() || self.phase != SessionPhase::InProgress {
            return Ok(None);
        }
        self.advance().map(Some)
    }

    fn reset(&mut self) {
        self.phase = SessionPhase::NotStarted;
        self.current = 0;
        self.score = 0;
        self.buffer = AnswerBuffer::Empty;
        self.outcomes.clear();
        self.generation = self.generation.wrapping_add(1);
        self.started_at = None;
        self.completed_at = None;
    }

    fn load_current(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        match self.questions.get(self.current) {
            Some(question) => {
                self.buffer = AnswerBuffer::for_question(question, &mut self.rng);
            }
            None => self.finish(),
        }
    }

    fn finish(&mut self) {
        self.phase = SessionPhase::Finished;
        self.buffer = AnswerBuffer::Empty;
        self.current = self.questions.len();
        if self.completed_at.is_none() {
            self.completed_at = Some(self.clock.now());
        }
    }

    fn ensure_in_progress(&self) -> Result<(), SessionError> {
        match self.phase {
            SessionPhase::InProgress => Ok(()),
            SessionPhase::NotStarted => Err(SessionError::NotStarted),
            SessionPhase::Finished => Err(SessionError::Finished),
        }
    }

    fn active(&mut self) -> Result<(&Question, &mut AnswerBuffer), SessionError> {
        self.ensure_in_progress()?;
        let question = self
            .questions
            .get(self.current)
            .ok_or(SessionError::Finished)?;
        Ok((question, &mut self.buffer))
    }

    //
    // ─── INPUT ─────────────────────────────────────────────────────────────────
    //

    /// Pick a multiple-choice option. The choice is final; the caller schedules the
    /// advance with the returned ticket.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongVariant`, `ItemOutOfRange` or `AnswersLocked`.
    pub fn choose_option(&mut self, option: usize) -> Result<AdvanceTicket, SessionError> {
        let ticket = self.ticket();
        let (question, buffer) = self.active()?;
        let (QuestionBody::MultipleChoice(q), AnswerBuffer::MultipleChoice { selected }) =
            (&question.body, buffer)
        else {
            return Err(wrong_variant(QuestionKind::MultipleChoice, question));
        };
        check_item(option, q.options.len())?;
        if selected.is_some() {
            return Err(SessionError::AnswersLocked);
        }
        *selected = Some(option);
        Ok(ticket)
    }

    /// # Errors
    ///
    /// Returns `SessionError::WrongVariant` or `ItemOutOfRange`.
    pub fn select_left(&mut self, left: usize) -> Result<bool, SessionError> {
        let (question, board) = self.matching_board()?;
        let QuestionBody::Matching(q) = &question.body else {
            return Err(wrong_variant(QuestionKind::Matching, question));
        };
        check_item(left, q.left.len())?;
        Ok(board.select_left(q, left))
    }

    /// # Errors
    ///
    /// Returns `SessionError::WrongVariant` or `ItemOutOfRange`.
    pub fn select_right(&mut self, position: usize) -> Result<MatchOutcome, SessionError> {
        let (question, board) = self.matching_board()?;
        let QuestionBody::Matching(q) = &question.body else {
            return Err(wrong_variant(QuestionKind::Matching, question));
        };
        check_item(position, board.order().len())?;
        Ok(board.select_right(q, position))
    }

    /// Clear matching feedback for attempt `seq`; a no-op once the question changed.
    pub fn clear_match_feedback(&mut self, seq: u64) -> bool {
        match &mut self.buffer {
            AnswerBuffer::Matching(board) => board.clear_feedback(seq),
            _ => false,
        }
    }

    fn matching_board(&mut self) -> Result<(&Question, &mut MatchingBoard), SessionError> {
        let (question, buffer) = self.active()?;
        match buffer {
            AnswerBuffer::Matching(board) => Ok((question, board)),
            _ => Err(wrong_variant(QuestionKind::Matching, question)),
        }
    }

    /// # Errors
    ///
    /// Returns `SessionError::WrongVariant`, `ItemOutOfRange` or `AnswersLocked` once checked.
    pub fn select_word(&mut self, sentence: usize, option: usize) -> Result<(), SessionError> {
        let (question, buffer) = self.active()?;
        let (QuestionBody::SelectCorrectWord(q), AnswerBuffer::SelectCorrectWord { choices, checked }) =
            (&question.body, buffer)
        else {
            return Err(wrong_variant(QuestionKind::SelectCorrectWord, question));
        };
        check_item(sentence, choices.len())?;
        check_item(option, q.options.get(sentence).map_or(0, Vec::len))?;
        if *checked {
            return Err(SessionError::AnswersLocked);
        }
        choices[sentence] = Some(option);
        Ok(())
    }

    /// Lock word choices and return per-sentence correctness.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongVariant`.
    pub fn check_selected_words(&mut self) -> Result<Vec<bool>, SessionError> {
        let (question, buffer) = self.active()?;
        let (QuestionBody::SelectCorrectWord(q), AnswerBuffer::SelectCorrectWord { choices, checked }) =
            (&question.body, buffer)
        else {
            return Err(wrong_variant(QuestionKind::SelectCorrectWord, question));
        };
        *checked = true;
        Ok(scoring::select_word_marks(q, choices))
    }

    /// # Errors
    ///
    /// Returns `SessionError::WrongVariant` or `ItemOutOfRange`.
    pub fn set_ordering_input(&mut self, index: usize, text: &str) -> Result<(), SessionError> {
        let (question, buffer) = self.active()?;
        let AnswerBuffer::SentenceOrdering { inputs } = buffer else {
            return Err(wrong_variant(QuestionKind::SentenceOrdering, question));
        };
        set_text(inputs, index, text)
    }

    /// # Errors
    ///
    /// Returns `SessionError::WrongVariant` or `ItemOutOfRange`.
    pub fn set_correction_input(&mut self, index: usize, text: &str) -> Result<(), SessionError> {
        let (question, buffer) = self.active()?;
        let AnswerBuffer::ErrorCorrection { inputs, .. } = buffer else {
            return Err(wrong_variant(QuestionKind::ErrorCorrection, question));
        };
        set_text(inputs, index, text)
    }

    /// # Errors
    ///
    /// Returns `SessionError::WrongVariant` or `ItemOutOfRange`.
    pub fn set_no_error(&mut self, index: usize, checked: bool) -> Result<(), SessionError> {
        let (question, buffer) = self.active()?;
        let AnswerBuffer::ErrorCorrection { no_error, .. } = buffer else {
            return Err(wrong_variant(QuestionKind::ErrorCorrection, question));
        };
        check_item(index, no_error.len())?;
        no_error[index] = checked;
        Ok(())
    }

    /// # Errors
    ///
    /// Returns `SessionError::WrongVariant` or `ItemOutOfRange`.
    pub fn set_rewrite_input(&mut self, index: usize, text: &str) -> Result<(), SessionError> {
        let (question, buffer) = self.active()?;
        let AnswerBuffer::SentenceRewrite { inputs } = buffer else {
            return Err(wrong_variant(QuestionKind::SentenceRewrite, question));
        };
        set_text(inputs, index, text)
    }

    /// Input for `word_box_fill` and `fill_in_blank` questions.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::WrongVariant` or `ItemOutOfRange`.
    pub fn set_blank_input(&mut self, index: usize, text: &str) -> Result<(), SessionError> {
        let (question, buffer) = self.active()?;
        let AnswerBuffer::Blanks { inputs } = buffer else {
            return Err(wrong_variant(QuestionKind::FillInBlank, question));
        };
        set_text(inputs, index, text)
    }

    //
    // ─── READ ──────────────────────────────────────────────────────────────────
    //

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    #[must_use]
    pub fn is_started(&self) -> bool {
        self.phase != SessionPhase::NotStarted
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == SessionPhase::Finished
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn question_set(&self) -> &QuestionSet {
        &self.questions
    }

    /// The question on screen while in progress.
    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.phase == SessionPhase::InProgress {
            self.questions.get(self.current)
        } else {
            None
        }
    }

    #[must_use]
    pub fn buffer(&self) -> &AnswerBuffer {
        &self.buffer
    }

    /// Points the current buffer would earn if committed now.
    #[must_use]
    pub fn pending_points(&self) -> u32 {
        self.current_question()
            .map_or(0, |question| self.buffer.points(question))
    }

    #[must_use]
    pub fn item_marks(&self) -> Vec<Option<bool>> {
        self.current_question()
            .map_or_else(Vec::new, |question| self.buffer.item_marks(question))
    }

    /// True when the matching question on screen has every pair locked in.
    #[must_use]
    pub fn is_matching_complete(&self) -> bool {
        match (self.current_question().map(|q| &q.body), &self.buffer) {
            (Some(QuestionBody::Matching(q)), AnswerBuffer::Matching(board)) => board.is_complete(q),
            _ => false,
        }
    }

    #[must_use]
    pub fn outcomes(&self) -> &[QuestionOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn started_at(&self) -> Option<DateTime<Utc>> {
        self.started_at
    }

    #[must_use]
    pub fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Final results, once finished.
    #[must_use]
    pub fn results(&self) -> Option<QuizResults> {
        if !self.is_finished() {
            return None;
        }
        let results = QuizResults::new(self.score, self.questions.max_points(), self.questions.len())
            .with_outcomes(self.outcomes.clone());
        Some(match (self.started_at, self.completed_at) {
            (Some(started), Some(completed)) => results.with_elapsed(completed - started),
            _ => results,
        })
    }
}

impl fmt::Debug for QuizSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("QuizSession")
            .field("questions_len", &self.questions.len())
            .field("phase", &self.phase)
            .field("current", &self.current)
            .field("score", &self.score)
            .field("generation", &self.generation)
            .field("started_at", &self.started_at)
            .field("completed_at", &self.completed_at)
            .finish_non_exhaustive()
    }
}

fn wrong_variant(expected: QuestionKind, question: &Question) -> SessionError {
    SessionError::WrongVariant {
        expected,
        actual: question.kind(),
    }
}

fn check_item(index: usize, len: usize) -> Result<(), SessionError> {
    if index < len {
        Ok(())
    } else {
        Err(SessionError::ItemOutOfRange { index, len })
    }
}

fn set_text(inputs: &mut [String], index: usize, text: &str) -> Result<(), SessionError> {
    check_item(index, inputs.len())?;
    inputs[index] = text.to_string();
    Ok(())
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{
        AcceptedAnswer, BlankFill, ErrorCorrection, Matching, MultipleChoice, QuestionDataError,
        SelectCorrectWord,
    };
    use crate::time::{fixed_clock, fixed_now};

    fn question(body: QuestionBody) -> Question {
        Question {
            prompt: "Prompt".into(),
            audioscript: None,
            content: None,
            example: None,
            body,
        }
    }

    fn mc(correct: usize) -> Question {
        question(QuestionBody::MultipleChoice(MultipleChoice {
            options: vec!["a".into(), "b".into(), "c".into()],
            correct,
        }))
    }

    fn matching() -> Question {
        question(QuestionBody::Matching(Matching {
            left: vec!["cold".into(), "fast".into()],
            right: vec!["quick".into(), "chilly".into()],
            pairs: vec![1, 0],
        }))
    }

    fn word_box() -> Question {
        question(QuestionBody::WordBoxFill(BlankFill {
            sentences: vec!["Yesterday I ______ home.".into()],
            word_box: vec!["go".into(), "went".into()],
            answers: vec![AcceptedAnswer::AnyOf(vec!["go".into(), "went".into()])],
        }))
    }

    fn session(questions: Vec<Question>) -> QuizSession {
        QuizSession::new(Arc::new(QuestionSet::new("Test", questions)))
            .with_seed(42)
            .with_clock(fixed_clock())
    }

    #[test]
    fn index_increases_by_one_until_finished() {
        let mut s = session(vec![mc(0), word_box(), matching()]);
        assert_eq!(s.phase(), SessionPhase::NotStarted);
        assert_eq!(s.advance(), Err(SessionError::NotStarted));

        s.start();
        for expected in 1..=3 {
            let before = s.current_index();
            let outcome = s.advance().unwrap();
            assert_eq!(s.current_index(), before + 1);
            assert_eq!(s.current_index(), expected);
            assert_eq!(outcome.finished, expected == 3);
        }
        assert!(s.is_finished());
        assert_eq!(s.advance(), Err(SessionError::Finished));
        assert!(s.is_finished(), "finished stays true until restart");
        assert_eq!(s.current_index(), 3);
    }

    #[test]
    fn restart_always_resets_score_and_index() {
        let mut s = session(vec![mc(1), mc(1)]);
        s.start();
        s.choose_option(1).unwrap();
        s.advance().unwrap();
        assert_eq!(s.score(), 1);

        s.restart();
        assert_eq!(s.phase(), SessionPhase::NotStarted);
        assert_eq!(s.score(), 0);
        assert_eq!(s.current_index(), 0);
        assert!(s.outcomes().is_empty());

        s.start();
        s.advance().unwrap();
        s.advance().unwrap();
        s.restart();
        assert_eq!(s.score(), 0);
        assert_eq!(s.current_index(), 0);
        assert!(!s.is_started());
    }

    #[test]
    fn multiple_choice_scores_declared_index() {
        let mut s = session(vec![mc(2), mc(2)]);
        s.start();
        s.choose_option(2).unwrap();
        assert_eq!(s.advance().unwrap().earned, 1);
        s.choose_option(0).unwrap();
        assert_eq!(s.advance().unwrap().earned, 0);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn second_choice_on_same_question_is_rejected() {
        let mut s = session(vec![mc(0)]);
        s.start();
        s.choose_option(1).unwrap();
        assert_eq!(s.choose_option(0), Err(SessionError::AnswersLocked));
        assert_eq!(s.pending_points(), 0);
    }

    #[test]
    fn stale_ticket_does_not_advance() {
        let mut s = session(vec![mc(0), mc(0), mc(0)]);
        s.start();
        let ticket = s.choose_option(0).unwrap();
        s.advance().unwrap();
        assert_eq!(s.redeem(ticket), Ok(None));
        assert_eq!(s.current_index(), 1);

        let ticket = s.choose_option(0).unwrap();
        assert!(s.redeem(ticket).unwrap().is_some());
        assert_eq!(s.current_index(), 2);
        assert_eq!(s.score(), 2);

        let ticket = s.choose_option(0).unwrap();
        s.restart();
        s.start();
        assert_eq!(s.redeem(ticket), Ok(None));
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn matching_scores_only_when_complete() {
        let mut s = session(vec![matching(), matching()]);
        s.start();

        let order = match s.buffer() {
            AnswerBuffer::Matching(board) => board.order().to_vec(),
            other => panic!("unexpected buffer {other:?}"),
        };
        let position = |right: usize| order.iter().position(|&r| r == right).unwrap();

        s.select_left(0).unwrap();
        assert!(matches!(
            s.select_right(position(0)).unwrap(),
            MatchOutcome::Mismatched { .. }
        ));
        s.select_right(position(1)).unwrap();
        s.select_left(1).unwrap();
        s.select_right(position(0)).unwrap();
        assert!(s.is_matching_complete());
        assert_eq!(s.advance().unwrap().earned, 1);

        s.select_left(0).unwrap();
        assert_eq!(s.advance().unwrap().earned, 0);
        assert_eq!(s.score(), 1);
    }

    #[test]
    fn word_box_accepts_case_and_whitespace_variants() {
        let mut s = session(vec![word_box()]);
        s.start();
        s.set_blank_input(0, " Went ").unwrap();
        assert_eq!(s.item_marks(), vec![Some(true)]);
        assert_eq!(s.pending_points(), 1);
        assert_eq!(s.pending_points(), 1);
        assert_eq!(s.advance().unwrap().earned, 1);
    }

    #[test]
    fn error_correction_no_error_flag() {
        let q = question(QuestionBody::ErrorCorrection(ErrorCorrection {
            sentences: vec!["They are here.".into()],
            corrections: vec![String::new()],
            has_no_error: vec![true],
        }));
        let mut s = session(vec![q.clone(), q]);
        s.start();
        s.set_no_error(0, true).unwrap();
        assert_eq!(s.advance().unwrap().earned, 1);

        s.set_correction_input(0, "They is here.").unwrap();
        assert_eq!(s.advance().unwrap().earned, 0);
    }

    #[test]
    fn buffers_reset_between_questions() {
        let mut s = session(vec![word_box(), word_box()]);
        s.start();
        s.set_blank_input(0, "went").unwrap();
        s.advance().unwrap();
        assert_eq!(
            s.buffer(),
            &AnswerBuffer::Blanks {
                inputs: vec![String::new()]
            }
        );
    }

    #[test]
    fn select_word_locks_after_check() {
        let q = question(QuestionBody::SelectCorrectWord(SelectCorrectWord {
            sentences: vec!["I (am/is) here.".into(), "She (am/is) here.".into()],
            options: vec![vec!["am".into(), "is".into()]; 2],
            correct: vec![0, 1],
        }));
        let mut s = session(vec![q]);
        s.start();
        s.select_word(0, 0).unwrap();
        s.select_word(1, 0).unwrap();
        assert_eq!(s.check_selected_words().unwrap(), vec![true, false]);
        assert_eq!(s.select_word(1, 1), Err(SessionError::AnswersLocked));
        assert_eq!(s.advance().unwrap().earned, 1);
    }

    #[test]
    fn wrong_input_kind_leaves_state_untouched() {
        let mut s = session(vec![mc(0)]);
        s.start();
        let before = s.buffer().clone();
        assert!(matches!(
            s.set_blank_input(0, "x"),
            Err(SessionError::WrongVariant {
                actual: Some(QuestionKind::MultipleChoice),
                ..
            })
        ));
        assert_eq!(s.choose_option(9), Err(SessionError::ItemOutOfRange { index: 9, len: 3 }));
        assert_eq!(s.buffer(), &before);
    }

    #[test]
    fn incomplete_question_can_be_skipped_for_zero() {
        let broken = question(QuestionBody::Incomplete {
            kind: Some(QuestionKind::Matching),
            reason: QuestionDataError::MissingField { field: "matchingOptions" },
        });
        let mut s = session(vec![broken, mc(0)]);
        s.start();
        assert_eq!(s.advance().unwrap().earned, 0);
        s.choose_option(0).unwrap();
        s.advance().unwrap();
        let results = s.results().unwrap();
        assert_eq!(results.score(), 1);
        assert_eq!(results.max_points(), 1);
        assert_eq!(results.percentage(), 100);
    }

    #[test]
    fn empty_set_finishes_on_start() {
        let mut s = session(Vec::new());
        s.start();
        assert!(s.is_finished());
        let results = s.results().unwrap();
        assert_eq!(results.percentage(), 0);
        assert_eq!(s.started_at(), Some(fixed_now()));
        assert_eq!(s.completed_at(), Some(fixed_now()));
    }
}
