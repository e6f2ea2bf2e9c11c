use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use quiz_core::model::{QuestionBody, QuestionKind, QuestionSet};
use tracing::{info, warn};

use crate::error::QuestionBankError;

const BUNDLED_DOCUMENT: &str = include_str!("../data/questions.json");

/// Where the active question document came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestionSource {
    Bundled,
    File(PathBuf),
}

impl fmt::Display for QuestionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuestionSource::Bundled => f.write_str("bundled questions"),
            QuestionSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// Loaded, immutable question set shared by every session.
#[derive(Debug, Clone)]
pub struct QuestionBank {
    source: QuestionSource,
    questions: Arc<QuestionSet>,
}

impl QuestionBank {
    /// Parse the document compiled into the binary.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Parse` if the bundled document is invalid.
    pub fn bundled() -> Result<Self, QuestionBankError> {
        Self::from_json(QuestionSource::Bundled, BUNDLED_DOCUMENT)
    }

    /// Read and parse an external document.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Io` if the file cannot be read, or
    /// `QuestionBankError::Parse` if it is not a question document.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, QuestionBankError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| QuestionBankError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(QuestionSource::File(path.to_path_buf()), &text)
    }

    /// Bundled questions unless `path` is given.
    ///
    /// # Errors
    ///
    /// See [`QuestionBank::bundled`] and [`QuestionBank::from_path`].
    pub fn load(path: Option<&Path>) -> Result<Self, QuestionBankError> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    /// Parse a document from memory.
    ///
    /// # Errors
    ///
    /// Returns `QuestionBankError::Parse` if `text` is not a question document.
    pub fn from_json(source: QuestionSource, text: &str) -> Result<Self, QuestionBankError> {
        let questions = QuestionSet::from_json(text).map_err(|source_err| QuestionBankError::Parse {
            origin: source.to_string(),
            source: source_err,
        })?;
        Ok(Self::from_set(source, questions))
    }

    #[must_use]
    pub fn from_set(source: QuestionSource, questions: QuestionSet) -> Self {
        for (index, question) in questions.questions().iter().enumerate() {
            if let QuestionBody::Incomplete { kind, reason } = &question.body {
                warn!(
                    index,
                    kind = kind.map_or("unknown", QuestionKind::as_tag),
                    %reason,
                    "question data is incomplete"
                );
            }
        }
        info!(
            %source,
            title = questions.title(),
            questions = questions.len(),
            max_points = questions.max_points(),
            "question bank loaded"
        );
        Self {
            source,
            questions: Arc::new(questions),
        }
    }

    #[must_use]
    pub fn source(&self) -> &QuestionSource {
        &self.source
    }

    #[must_use]
    pub fn questions(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.questions)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bundled_document_has_every_question_type_complete() {
        let bank = QuestionBank::bundled().unwrap();
        let set = bank.questions();
        assert_eq!(bank.source(), &QuestionSource::Bundled);
        assert_eq!(set.len(), 8);
        assert_eq!(set.incomplete_indices().count(), 0);

        let mut kinds: Vec<_> = set.questions().iter().filter_map(|q| q.kind()).collect();
        kinds.sort_by_key(|kind| kind.as_tag());
        kinds.dedup();
        assert_eq!(kinds.len(), 8);
    }

    #[test]
    fn missing_questions_array_is_a_parse_error() {
        let err = QuestionBank::from_json(QuestionSource::Bundled, r#"{"quizTitle":"x"}"#).unwrap_err();
        assert!(matches!(err, QuestionBankError::Parse { .. }));
    }
}
