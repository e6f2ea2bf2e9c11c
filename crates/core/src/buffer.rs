use rand::Rng;

use crate::matching::MatchingBoard;
use crate::model::{Question, QuestionBody};
use crate::scoring;

/// Uncommitted input for the active question, shaped by its variant.
///
/// A fresh buffer is built every time the active question changes, so input typed for
/// one question can never leak into the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerBuffer {
    MultipleChoice {
        selected: Option<usize>,
    },
    Matching(MatchingBoard),
    SelectCorrectWord {
        choices: Vec<Option<usize>>,
        checked: bool,
    },
    SentenceOrdering {
        inputs: Vec<String>,
    },
    ErrorCorrection {
        inputs: Vec<String>,
        no_error: Vec<bool>,
    },
    SentenceRewrite {
        inputs: Vec<String>,
    },
    Blanks {
        inputs: Vec<String>,
    },
    /// Incomplete questions take no input.
    Empty,
}

impl AnswerBuffer {
    /// Build an empty buffer sized to `question`'s sub-items.
    pub fn for_question<R: Rng + ?Sized>(question: &Question, rng: &mut R) -> Self {
        let items = question.item_count();
        match &question.body {
            QuestionBody::MultipleChoice(_) => Self::MultipleChoice { selected: None },
            QuestionBody::Matching(matching) => Self::Matching(MatchingBoard::shuffled(matching, rng)),
            QuestionBody::SelectCorrectWord(_) => Self::SelectCorrectWord {
                choices: vec![None; items],
                checked: false,
            },
            QuestionBody::SentenceOrdering(_) => Self::SentenceOrdering {
                inputs: vec![String::new(); items],
            },
            QuestionBody::ErrorCorrection(_) => Self::ErrorCorrection {
                inputs: vec![String::new(); items],
                no_error: vec![false; items],
            },
            QuestionBody::SentenceRewrite(_) => Self::SentenceRewrite {
                inputs: vec![String::new(); items],
            },
            QuestionBody::WordBoxFill(_) | QuestionBody::FillInBlank(_) => Self::Blanks {
                inputs: vec![String::new(); items],
            },
            QuestionBody::Incomplete { .. } => Self::Empty,
        }
    }

    /// Points the buffer would earn if committed now.
    ///
    /// A buffer that does not belong to `question`'s variant earns nothing.
    #[must_use]
    pub fn points(&self, question: &Question) -> u32 {
        match (&question.body, self) {
            (QuestionBody::MultipleChoice(q), Self::MultipleChoice { selected }) => {
                scoring::multiple_choice_points(q, *selected)
            }
            (QuestionBody::Matching(q), Self::Matching(board)) => scoring::matching_points(q, board),
            (QuestionBody::SelectCorrectWord(q), Self::SelectCorrectWord { choices, .. }) => {
                scoring::select_word_points(q, choices)
            }
            (QuestionBody::SentenceOrdering(q), Self::SentenceOrdering { inputs }) => {
                scoring::ordering_points(q, inputs)
            }
            (QuestionBody::ErrorCorrection(q), Self::ErrorCorrection { inputs, no_error }) => {
                scoring::error_correction_points(q, inputs, no_error)
            }
            (QuestionBody::SentenceRewrite(q), Self::SentenceRewrite { inputs }) => {
                scoring::rewrite_points(q, inputs)
            }
            (
                QuestionBody::WordBoxFill(q) | QuestionBody::FillInBlank(q),
                Self::Blanks { inputs },
            ) => scoring::blank_points(q, inputs),
            _ => 0,
        }
    }

    /// Per-item correctness for live feedback. `None` marks items with nothing entered yet.
    #[must_use]
    pub fn item_marks(&self, question: &Question) -> Vec<Option<bool>> {
        fn gate(marks: Vec<bool>, answered: impl Fn(usize) -> bool) -> Vec<Option<bool>> {
            marks
                .into_iter()
                .enumerate()
                .map(|(index, mark)| answered(index).then_some(mark))
                .collect()
        }
        let typed = |inputs: &[String], index: usize| {
            inputs.get(index).is_some_and(|input| !input.trim().is_empty())
        };

        match (&question.body, self) {
            (QuestionBody::MultipleChoice(q), Self::MultipleChoice { selected }) => {
                vec![selected.map(|_| scoring::multiple_choice_points(q, *selected) == 1)]
            }
            (QuestionBody::Matching(q), Self::Matching(board)) => (0..q.left.len())
                .map(|left| board.is_left_locked(left).then_some(true))
                .collect(),
            (QuestionBody::SelectCorrectWord(q), Self::SelectCorrectWord { choices, checked }) => {
                gate(scoring::select_word_marks(q, choices), |_| *checked)
            }
            (QuestionBody::SentenceOrdering(q), Self::SentenceOrdering { inputs }) => {
                gate(scoring::ordering_marks(q, inputs), |index| typed(inputs, index))
            }
            (QuestionBody::ErrorCorrection(q), Self::ErrorCorrection { inputs, no_error }) => gate(
                scoring::error_correction_marks(q, inputs, no_error),
                |index| typed(inputs, index) || no_error.get(index).copied().unwrap_or(false),
            ),
            (QuestionBody::SentenceRewrite(q), Self::SentenceRewrite { inputs }) => {
                gate(scoring::rewrite_marks(q, inputs), |index| typed(inputs, index))
            }
            (
                QuestionBody::WordBoxFill(q) | QuestionBody::FillInBlank(q),
                Self::Blanks { inputs },
            ) => gate(scoring::blank_marks(q, inputs), |index| typed(inputs, index)),
            _ => Vec::new(),
        }
    }
}
