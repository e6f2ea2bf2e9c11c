//! Raw document records and their validation into typed questions.
//!
//! Several keys change shape between variants (`options` is flat for multiple choice and
//! nested for word selection, `sentences` holds objects for rewrites), so the records use
//! untagged enums and leave the per-variant checks to [`QuestionRecord::into_question`].

use serde::Deserialize;
use serde_json::Value;

use super::question::{
    AcceptedAnswer, BlankFill, ErrorCorrection, Example, Matching, MultipleChoice, Question,
    QuestionBody, QuestionDataError, QuestionKind, RewriteItem, SelectCorrectWord,
    SentenceOrdering, SentenceRewrite,
};

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum OptionsField {
    Flat(Vec<String>),
    Nested(Vec<Vec<String>>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum CorrectAnswersField {
    Indices(Vec<usize>),
    Texts(Vec<String>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum SentencesField {
    Plain(Vec<String>),
    Rewrite(Vec<RewriteRecord>),
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct RewriteRecord {
    original: String,
    partial: String,
    #[serde(default)]
    answer: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ExampleField {
    Text(String),
    Rewrite(RewriteRecord),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum AnswerField {
    One(String),
    AnyOf(Vec<String>),
}

/// One entry of the document's `questions` array, exactly as written.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct QuestionRecord {
    #[serde(rename = "type")]
    kind: String,
    #[serde(rename = "question", default)]
    prompt: String,
    #[serde(default)]
    audioscript: Option<String>,
    #[serde(default)]
    content: Option<String>,
    #[serde(default)]
    example: Option<ExampleField>,
    #[serde(default)]
    example_answer: Option<String>,
    #[serde(default)]
    options: Option<OptionsField>,
    #[serde(default)]
    matching_options: Option<Vec<String>>,
    #[serde(default)]
    correct_answer: Option<usize>,
    #[serde(default)]
    correct_answers: Option<CorrectAnswersField>,
    #[serde(default)]
    sentences: Option<SentencesField>,
    #[serde(default)]
    corrections: Option<Vec<String>>,
    #[serde(default)]
    has_no_error: Option<Vec<bool>>,
    #[serde(default)]
    word_box: Option<Vec<String>>,
    #[serde(default)]
    answers: Option<Vec<AnswerField>>,
}

impl QuestionRecord {
    /// Parse a single question value, degrading shape errors to an incomplete question.
    pub(crate) fn question_from_value(value: Value) -> Question {
        let prompt = value
            .get("question")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .and_then(QuestionKind::from_tag);

        match serde_json::from_value::<Self>(value) {
            Ok(record) => record.into_question(),
            Err(err) => Question {
                prompt,
                audioscript: None,
                content: None,
                example: None,
                body: QuestionBody::Incomplete {
                    kind,
                    reason: QuestionDataError::Malformed(err.to_string()),
                },
            },
        }
    }

    pub(crate) fn into_question(self) -> Question {
        let kind = QuestionKind::from_tag(&self.kind);
        let example = self.example.clone().map(|example| match example {
            ExampleField::Text(text) => Example::Text {
                text,
                answer: self.example_answer.clone(),
            },
            ExampleField::Rewrite(record) => Example::Rewrite(RewriteItem {
                original: record.original,
                partial: record.partial,
                answer: record.answer.unwrap_or_default(),
            }),
        });

        let body = match kind {
            Some(kind) => self.body_for(kind).unwrap_or_else(|reason| QuestionBody::Incomplete {
                kind: Some(kind),
                reason,
            }),
            None => QuestionBody::Incomplete {
                kind: None,
                reason: QuestionDataError::UnsupportedType(self.kind.clone()),
            },
        };

        Question {
            prompt: self.prompt,
            audioscript: self.audioscript.filter(|text| !text.trim().is_empty()),
            content: self.content.filter(|text| !text.trim().is_empty()),
            example,
            body,
        }
    }

    fn body_for(&self, kind: QuestionKind) -> Result<QuestionBody, QuestionDataError> {
        Ok(match kind {
            QuestionKind::MultipleChoice => QuestionBody::MultipleChoice(self.multiple_choice()?),
            QuestionKind::Matching => QuestionBody::Matching(self.matching()?),
            QuestionKind::SelectCorrectWord => {
                QuestionBody::SelectCorrectWord(self.select_correct_word()?)
            }
            QuestionKind::SentenceOrdering => {
                QuestionBody::SentenceOrdering(self.sentence_ordering()?)
            }
            QuestionKind::ErrorCorrection => QuestionBody::ErrorCorrection(self.error_correction()?),
            QuestionKind::SentenceRewrite => QuestionBody::SentenceRewrite(self.sentence_rewrite()?),
            QuestionKind::WordBoxFill => {
                let word_box = self
                    .word_box
                    .clone()
                    .ok_or(QuestionDataError::MissingField { field: "wordBox" })?;
                QuestionBody::WordBoxFill(self.blank_fill(word_box)?)
            }
            QuestionKind::FillInBlank => QuestionBody::FillInBlank(self.blank_fill(Vec::new())?),
        })
    }

    fn multiple_choice(&self) -> Result<MultipleChoice, QuestionDataError> {
        let options = self.flat_options("options")?;
        let correct = match (self.correct_answer, &self.correct_answers) {
            (Some(index), _) => index,
            (None, Some(CorrectAnswersField::Indices(indices))) => *indices
                .first()
                .ok_or(QuestionDataError::MissingField { field: "correctAnswers" })?,
            (None, Some(CorrectAnswersField::Texts(_))) => {
                return Err(QuestionDataError::WrongShape { field: "correctAnswers" });
            }
            (None, None) => {
                return Err(QuestionDataError::MissingField { field: "correctAnswer" });
            }
        };
        check_index("correctAnswer", correct, options.len())?;
        Ok(MultipleChoice { options, correct })
    }

    fn matching(&self) -> Result<Matching, QuestionDataError> {
        let left = self.flat_options("options")?;
        let right = self
            .matching_options
            .clone()
            .ok_or(QuestionDataError::MissingField { field: "matchingOptions" })?;
        let pairs = self.correct_indices()?;
        check_len("correctAnswers", left.len(), pairs.len())?;
        for (position, &index) in pairs.iter().enumerate() {
            check_index("correctAnswers", index, right.len())?;
            if pairs[..position].contains(&index) {
                return Err(QuestionDataError::DuplicateIndex {
                    field: "correctAnswers",
                    index,
                });
            }
        }
        Ok(Matching { left, right, pairs })
    }

    fn select_correct_word(&self) -> Result<SelectCorrectWord, QuestionDataError> {
        let sentences = self.plain_sentences()?;
        let options = match &self.options {
            Some(OptionsField::Nested(options)) => options.clone(),
            Some(OptionsField::Flat(flat)) if flat.is_empty() => Vec::new(),
            Some(OptionsField::Flat(_)) => {
                return Err(QuestionDataError::WrongShape { field: "options" });
            }
            None => return Err(QuestionDataError::MissingField { field: "options" }),
        };
        let correct = self.correct_indices()?;
        check_len("options", sentences.len(), options.len())?;
        check_len("correctAnswers", sentences.len(), correct.len())?;
        for (choices, &index) in options.iter().zip(&correct) {
            check_index("correctAnswers", index, choices.len())?;
        }
        Ok(SelectCorrectWord {
            sentences,
            options,
            correct,
        })
    }

    fn sentence_ordering(&self) -> Result<SentenceOrdering, QuestionDataError> {
        let sentences = self.plain_sentences()?;
        let correct = match &self.correct_answers {
            Some(CorrectAnswersField::Texts(texts)) => texts.clone(),
            Some(CorrectAnswersField::Indices(indices)) if indices.is_empty() => Vec::new(),
            Some(CorrectAnswersField::Indices(_)) => {
                return Err(QuestionDataError::WrongShape { field: "correctAnswers" });
            }
            None => return Err(QuestionDataError::MissingField { field: "correctAnswers" }),
        };
        check_len("correctAnswers", sentences.len(), correct.len())?;
        Ok(SentenceOrdering { sentences, correct })
    }

    fn error_correction(&self) -> Result<ErrorCorrection, QuestionDataError> {
        let sentences = self.plain_sentences()?;
        let has_no_error = self
            .has_no_error
            .clone()
            .ok_or(QuestionDataError::MissingField { field: "hasNoError" })?;
        let corrections = self
            .corrections
            .clone()
            .ok_or(QuestionDataError::MissingField { field: "corrections" })?;
        check_len("hasNoError", sentences.len(), has_no_error.len())?;
        check_len("corrections", sentences.len(), corrections.len())?;
        Ok(ErrorCorrection {
            sentences,
            corrections,
            has_no_error,
        })
    }

    fn sentence_rewrite(&self) -> Result<SentenceRewrite, QuestionDataError> {
        let records = match &self.sentences {
            Some(SentencesField::Rewrite(records)) => records,
            Some(SentencesField::Plain(plain)) if plain.is_empty() => {
                return Err(QuestionDataError::MissingField { field: "sentences" });
            }
            Some(SentencesField::Plain(_)) => {
                return Err(QuestionDataError::WrongShape { field: "sentences" });
            }
            None => return Err(QuestionDataError::MissingField { field: "sentences" }),
        };
        let items = records
            .iter()
            .map(|record| {
                let answer = record
                    .answer
                    .clone()
                    .filter(|answer| !answer.trim().is_empty())
                    .ok_or(QuestionDataError::MissingField { field: "sentences.answer" })?;
                Ok(RewriteItem {
                    original: record.original.clone(),
                    partial: record.partial.clone(),
                    answer,
                })
            })
            .collect::<Result<Vec<_>, QuestionDataError>>()?;
        Ok(SentenceRewrite { items })
    }

    fn blank_fill(&self, word_box: Vec<String>) -> Result<BlankFill, QuestionDataError> {
        let sentences = self.plain_sentences()?;
        let answers: Vec<AcceptedAnswer> = self
            .answers
            .clone()
            .ok_or(QuestionDataError::MissingField { field: "answers" })?
            .into_iter()
            .map(|answer| match answer {
                AnswerField::One(answer) => AcceptedAnswer::One(answer),
                AnswerField::AnyOf(answers) => AcceptedAnswer::AnyOf(answers),
            })
            .collect();
        check_len("answers", sentences.len(), answers.len())?;
        Ok(BlankFill {
            sentences,
            word_box,
            answers,
        })
    }

    fn flat_options(&self, field: &'static str) -> Result<Vec<String>, QuestionDataError> {
        match &self.options {
            Some(OptionsField::Flat(options)) if !options.is_empty() => Ok(options.clone()),
            Some(OptionsField::Flat(_)) | None => Err(QuestionDataError::MissingField { field }),
            Some(OptionsField::Nested(_)) => Err(QuestionDataError::WrongShape { field }),
        }
    }

    fn correct_indices(&self) -> Result<Vec<usize>, QuestionDataError> {
        match &self.correct_answers {
            Some(CorrectAnswersField::Indices(indices)) => Ok(indices.clone()),
            Some(CorrectAnswersField::Texts(_)) => {
                Err(QuestionDataError::WrongShape { field: "correctAnswers" })
            }
            None => Err(QuestionDataError::MissingField { field: "correctAnswers" }),
        }
    }

    fn plain_sentences(&self) -> Result<Vec<String>, QuestionDataError> {
        match &self.sentences {
            Some(SentencesField::Plain(sentences)) if !sentences.is_empty() => Ok(sentences.clone()),
            Some(SentencesField::Plain(_)) | None => {
                Err(QuestionDataError::MissingField { field: "sentences" })
            }
            Some(SentencesField::Rewrite(_)) => {
                Err(QuestionDataError::WrongShape { field: "sentences" })
            }
        }
    }
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), QuestionDataError> {
    if expected == actual {
        Ok(())
    } else {
        Err(QuestionDataError::LengthMismatch {
            field,
            expected,
            actual,
        })
    }
}

fn check_index(field: &'static str, index: usize, len: usize) -> Result<(), QuestionDataError> {
    if index < len {
        Ok(())
    } else {
        Err(QuestionDataError::IndexOutOfRange { field, index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn multiple_choice_prefers_correct_answer_then_first_of_many() {
        let q = QuestionRecord::question_from_value(json!({
            "type": "multiple_choice",
            "question": "Pick",
            "options": ["a", "b", "c"],
            "correctAnswers": [2, 0]
        }));
        assert_eq!(
            q.body,
            QuestionBody::MultipleChoice(MultipleChoice {
                options: vec!["a".into(), "b".into(), "c".into()],
                correct: 2,
            })
        );
    }

    #[test]
    fn matching_with_out_of_range_pair_is_incomplete() {
        let q = QuestionRecord::question_from_value(json!({
            "type": "matching",
            "question": "Match",
            "options": ["one", "two"],
            "matchingOptions": ["uno", "dos"],
            "correctAnswers": [1, 5]
        }));
        assert!(matches!(
            q.body,
            QuestionBody::Incomplete {
                kind: Some(QuestionKind::Matching),
                reason: QuestionDataError::IndexOutOfRange { index: 5, .. },
            }
        ));
        assert_eq!(q.prompt, "Match");
    }

    #[test]
    fn matching_that_reuses_a_right_item_is_incomplete() {
        let q = QuestionRecord::question_from_value(json!({
            "type": "matching",
            "question": "Match",
            "options": ["one", "two"],
            "matchingOptions": ["uno", "dos"],
            "correctAnswers": [0, 0]
        }));
        assert!(matches!(
            q.body,
            QuestionBody::Incomplete {
                kind: Some(QuestionKind::Matching),
                reason: QuestionDataError::DuplicateIndex { index: 0, .. },
            }
        ));
    }

    #[test]
    fn word_box_without_box_is_incomplete() {
        let q = QuestionRecord::question_from_value(json!({
            "type": "word_box_fill",
            "question": "Fill",
            "sentences": ["I ______ home."],
            "answers": ["go"]
        }));
        assert_eq!(
            q.body,
            QuestionBody::Incomplete {
                kind: Some(QuestionKind::WordBoxFill),
                reason: QuestionDataError::MissingField { field: "wordBox" },
            }
        );
    }

    #[test]
    fn fill_in_blank_accepts_mixed_answer_shapes() {
        let q = QuestionRecord::question_from_value(json!({
            "type": "fill_in_blank",
            "question": "Fill",
            "sentences": ["I ______ home.", "She ______ late."],
            "answers": ["go", ["was", "is"]]
        }));
        let QuestionBody::FillInBlank(fill) = q.body else {
            panic!("expected fill in blank, got {:?}", q.body);
        };
        assert_eq!(fill.answers[0], AcceptedAnswer::One("go".into()));
        assert_eq!(
            fill.answers[1],
            AcceptedAnswer::AnyOf(vec!["was".into(), "is".into()])
        );
    }

    #[test]
    fn rewrite_reads_structured_sentences_and_example() {
        let q = QuestionRecord::question_from_value(json!({
            "type": "sentence_rewrite",
            "question": "Rewrite",
            "example": {"original": "o", "partial": "p", "answer": "a"},
            "sentences": [{"original": "He is tall.", "partial": "He isn't ...", "answer": "short"}]
        }));
        assert!(matches!(q.example, Some(Example::Rewrite(_))));
        let QuestionBody::SentenceRewrite(rewrite) = q.body else {
            panic!("expected rewrite");
        };
        assert_eq!(rewrite.items[0].answer, "short");
    }

    #[test]
    fn wrong_json_shape_degrades_instead_of_failing() {
        let q = QuestionRecord::question_from_value(json!({
            "type": "error_correction",
            "question": "Fix",
            "hasNoError": "yes"
        }));
        assert!(matches!(
            q.body,
            QuestionBody::Incomplete {
                kind: Some(QuestionKind::ErrorCorrection),
                reason: QuestionDataError::Malformed(_),
            }
        ));
    }

    #[test]
    fn unknown_type_is_unsupported() {
        let q = QuestionRecord::question_from_value(json!({
            "type": "essay",
            "question": "Write"
        }));
        assert_eq!(q.kind(), None);
        assert!(q.is_incomplete());
    }
}
