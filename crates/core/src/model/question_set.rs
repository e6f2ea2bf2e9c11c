use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;

use super::question::Question;
use super::record::QuestionRecord;

/// Document-level failures. Individual malformed questions never end up here.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum QuestionSetError {
    #[error("question document is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct QuestionSetRecord {
    #[serde(default)]
    quiz_title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    total_questions: Option<u32>,
    #[serde(default)]
    time_limit: Option<u32>,
    questions: Vec<Value>,
}

/// Ordered, immutable list of questions plus the document's display metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionSet {
    title: String,
    description: String,
    advertised_total: Option<u32>,
    time_limit_minutes: Option<u32>,
    questions: Vec<Question>,
}

impl QuestionSet {
    pub const DEFAULT_TITLE: &'static str = "English Practice Quiz";

    #[must_use]
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            advertised_total: None,
            time_limit_minutes: None,
            questions,
        }
    }

    /// Parse a question document.
    ///
    /// # Errors
    ///
    /// Returns `QuestionSetError::Json` if the text is not JSON or lacks a `questions` array.
    /// Malformed entries inside the array load as incomplete questions instead.
    pub fn from_json(text: &str) -> Result<Self, QuestionSetError> {
        let record: QuestionSetRecord = serde_json::from_str(text)?;
        let questions = record
            .questions
            .into_iter()
            .map(QuestionRecord::question_from_value)
            .collect();

        Ok(Self {
            title: record
                .quiz_title
                .filter(|title| !title.trim().is_empty())
                .unwrap_or_else(|| Self::DEFAULT_TITLE.to_string()),
            description: record.description.unwrap_or_default(),
            advertised_total: record.total_questions,
            time_limit_minutes: record.time_limit,
            questions,
        })
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Question count for the start screen: the document's advertised total, if any.
    #[must_use]
    pub fn display_total(&self) -> usize {
        self.advertised_total
            .and_then(|total| usize::try_from(total).ok())
            .unwrap_or(self.questions.len())
    }

    #[must_use]
    pub fn time_limit_minutes(&self) -> Option<u32> {
        self.time_limit_minutes
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.questions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Sum of every question's maximum points.
    #[must_use]
    pub fn max_points(&self) -> u32 {
        self.questions
            .iter()
            .map(Question::max_points)
            .fold(0_u32, u32::saturating_add)
    }

    /// Indices of questions that loaded as incomplete.
    pub fn incomplete_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.questions
            .iter()
            .enumerate()
            .filter(|(_, question)| question.is_incomplete())
            .map(|(index, _)| index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DOC: &str = r#"{
        "quizTitle": "Unit 3 Test",
        "description": "Grammar and vocabulary",
        "totalQuestions": 40,
        "timeLimit": 45,
        "questions": [
            {"type": "multiple_choice", "question": "Q1", "options": ["a", "b"], "correctAnswer": 1},
            {"type": "matching", "question": "Q2", "options": ["x"]},
            "not even an object"
        ]
    }"#;

    #[test]
    fn parses_metadata_and_degrades_bad_questions() {
        let set = QuestionSet::from_json(DOC).unwrap();
        assert_eq!(set.title(), "Unit 3 Test");
        assert_eq!(set.description(), "Grammar and vocabulary");
        assert_eq!(set.display_total(), 40);
        assert_eq!(set.time_limit_minutes(), Some(45));
        assert_eq!(set.len(), 3);
        assert_eq!(set.incomplete_indices().collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(set.max_points(), 1);
    }

    #[test]
    fn missing_questions_array_is_an_error() {
        let err = QuestionSet::from_json(r#"{"quizTitle": "Empty"}"#).unwrap_err();
        assert!(matches!(err, QuestionSetError::Json(_)));
    }

    #[test]
    fn blank_title_falls_back_to_default() {
        let set = QuestionSet::from_json(r#"{"quizTitle": " ", "questions": []}"#).unwrap();
        assert_eq!(set.title(), QuestionSet::DEFAULT_TITLE);
        assert_eq!(set.display_total(), 0);
        assert!(set.is_empty());
    }
}
