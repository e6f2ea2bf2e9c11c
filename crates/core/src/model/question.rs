use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Reasons a question record could not be turned into a playable variant.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum QuestionDataError {
    #[error("unsupported question type: {0}")]
    UnsupportedType(String),

    #[error("missing field `{field}`")]
    MissingField { field: &'static str },

    #[error("field `{field}` has the wrong shape")]
    WrongShape { field: &'static str },

    #[error("field `{field}` has {actual} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("field `{field}` points at index {index} but only {len} choices exist")]
    IndexOutOfRange {
        field: &'static str,
        index: usize,
        len: usize,
    },

    #[error("field `{field}` uses index {index} more than once")]
    DuplicateIndex { field: &'static str, index: usize },

    #[error("malformed question record: {0}")]
    Malformed(String),
}

//
// ─── QUESTION KIND ─────────────────────────────────────────────────────────────
//

/// The eight supported exercise types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionKind {
    MultipleChoice,
    Matching,
    SelectCorrectWord,
    SentenceOrdering,
    ErrorCorrection,
    SentenceRewrite,
    WordBoxFill,
    FillInBlank,
}

impl QuestionKind {
    /// Parses the document's `type` tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "multiple_choice" => Some(Self::MultipleChoice),
            "matching" => Some(Self::Matching),
            "select_correct_word" => Some(Self::SelectCorrectWord),
            "sentence_ordering" => Some(Self::SentenceOrdering),
            "error_correction" => Some(Self::ErrorCorrection),
            "sentence_rewrite" => Some(Self::SentenceRewrite),
            "word_box_fill" => Some(Self::WordBoxFill),
            "fill_in_blank" => Some(Self::FillInBlank),
            _ => None,
        }
    }

    /// The document's `type` tag.
    #[must_use]
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::MultipleChoice => "multiple_choice",
            Self::Matching => "matching",
            Self::SelectCorrectWord => "select_correct_word",
            Self::SentenceOrdering => "sentence_ordering",
            Self::ErrorCorrection => "error_correction",
            Self::SentenceRewrite => "sentence_rewrite",
            Self::WordBoxFill => "word_box_fill",
            Self::FillInBlank => "fill_in_blank",
        }
    }

    /// Short badge label shown above the exercise.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::MultipleChoice => "Multiple Choice",
            Self::Matching => "Matching Question",
            Self::SelectCorrectWord => "Word Selection",
            Self::SentenceOrdering => "Sentence Ordering",
            Self::ErrorCorrection => "Error Correction",
            Self::SentenceRewrite => "Sentence Rewrite",
            Self::WordBoxFill => "Word Box",
            Self::FillInBlank => "Fill in the Blank",
        }
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

//
// ─── VARIANT PAYLOADS ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MultipleChoice {
    pub options: Vec<String>,
    pub correct: usize,
}

/// Left item `i` pairs with right item `pairs[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matching {
    pub left: Vec<String>,
    pub right: Vec<String>,
    pub pairs: Vec<usize>,
}

impl Matching {
    #[must_use]
    pub fn is_pair(&self, left: usize, right: usize) -> bool {
        self.pairs.get(left) == Some(&right)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectCorrectWord {
    pub sentences: Vec<String>,
    pub options: Vec<Vec<String>>,
    pub correct: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceOrdering {
    pub sentences: Vec<String>,
    pub correct: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorCorrection {
    pub sentences: Vec<String>,
    pub corrections: Vec<String>,
    pub has_no_error: Vec<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewriteItem {
    pub original: String,
    pub partial: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceRewrite {
    pub items: Vec<RewriteItem>,
}

/// Accepted answers for one blank: a single string or a set of alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AcceptedAnswer {
    One(String),
    AnyOf(Vec<String>),
}

impl AcceptedAnswer {
    pub fn alternatives(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::One(answer) => std::slice::from_ref(answer),
            Self::AnyOf(answers) => answers,
        };
        slice.iter().map(String::as_str)
    }
}

/// Shared by `word_box_fill` (with a word box) and `fill_in_blank` (without).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlankFill {
    pub sentences: Vec<String>,
    pub word_box: Vec<String>,
    pub answers: Vec<AcceptedAnswer>,
}

//
// ─── QUESTION ──────────────────────────────────────────────────────────────────
//

/// Worked example shown above the exercise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Example {
    Text {
        text: String,
        answer: Option<String>,
    },
    Rewrite(RewriteItem),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionBody {
    MultipleChoice(MultipleChoice),
    Matching(Matching),
    SelectCorrectWord(SelectCorrectWord),
    SentenceOrdering(SentenceOrdering),
    ErrorCorrection(ErrorCorrection),
    SentenceRewrite(SentenceRewrite),
    WordBoxFill(BlankFill),
    FillInBlank(BlankFill),
    /// Required data is missing for the declared variant; rendered as a placeholder.
    Incomplete {
        kind: Option<QuestionKind>,
        reason: QuestionDataError,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub prompt: String,
    pub audioscript: Option<String>,
    pub content: Option<String>,
    pub example: Option<Example>,
    pub body: QuestionBody,
}

impl Question {
    #[must_use]
    pub fn kind(&self) -> Option<QuestionKind> {
        match &self.body {
            QuestionBody::MultipleChoice(_) => Some(QuestionKind::MultipleChoice),
            QuestionBody::Matching(_) => Some(QuestionKind::Matching),
            QuestionBody::SelectCorrectWord(_) => Some(QuestionKind::SelectCorrectWord),
            QuestionBody::SentenceOrdering(_) => Some(QuestionKind::SentenceOrdering),
            QuestionBody::ErrorCorrection(_) => Some(QuestionKind::ErrorCorrection),
            QuestionBody::SentenceRewrite(_) => Some(QuestionKind::SentenceRewrite),
            QuestionBody::WordBoxFill(_) => Some(QuestionKind::WordBoxFill),
            QuestionBody::FillInBlank(_) => Some(QuestionKind::FillInBlank),
            QuestionBody::Incomplete { kind, .. } => *kind,
        }
    }

    #[must_use]
    pub fn is_incomplete(&self) -> bool {
        matches!(self.body, QuestionBody::Incomplete { .. })
    }

    /// Number of sub-items the answer buffer holds for this question.
    #[must_use]
    pub fn item_count(&self) -> usize {
        match &self.body {
            QuestionBody::MultipleChoice(_) => 1,
            QuestionBody::Matching(q) => q.left.len(),
            QuestionBody::SelectCorrectWord(q) => q.sentences.len(),
            QuestionBody::SentenceOrdering(q) => q.sentences.len(),
            QuestionBody::ErrorCorrection(q) => q.sentences.len(),
            QuestionBody::SentenceRewrite(q) => q.items.len(),
            QuestionBody::WordBoxFill(q) | QuestionBody::FillInBlank(q) => q.sentences.len(),
            QuestionBody::Incomplete { .. } => 0,
        }
    }

    /// Maximum points this question can contribute to the score.
    #[must_use]
    pub fn max_points(&self) -> u32 {
        let points = match &self.body {
            QuestionBody::MultipleChoice(_)
            | QuestionBody::Matching(_)
            | QuestionBody::SentenceRewrite(_) => 1,
            QuestionBody::Incomplete { .. } => 0,
            _ => self.item_count(),
        };
        u32::try_from(points).unwrap_or(u32::MAX)
    }
}

/// Splits a gapped sentence at its first blank marker (a run of three or more underscores).
///
/// Sentences without a marker return the whole text as the prefix.
#[must_use]
pub fn blank_parts(sentence: &str) -> (&str, &str) {
    let Some(start) = sentence.find("___") else {
        return (sentence, "");
    };
    let rest = &sentence[start..];
    let run = rest.len() - rest.trim_start_matches('_').len();
    (&sentence[..start], &sentence[start + run..])
}
