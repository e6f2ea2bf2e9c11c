//! Pure per-variant answer checks.
//!
//! Every function takes the question payload and the user's buffer contents and returns
//! either per-item marks or a point total; none of them mutate anything, so checking the
//! same buffer twice always yields the same result.

use crate::matching::MatchingBoard;
use crate::model::{
    AcceptedAnswer, BlankFill, ErrorCorrection, Matching, MultipleChoice, SelectCorrectWord,
    SentenceOrdering, SentenceRewrite,
};

/// Trimmed, case-insensitive text comparison.
#[must_use]
pub fn texts_match(input: &str, expected: &str) -> bool {
    input.trim().to_lowercase() == expected.trim().to_lowercase()
}

/// True when `input` matches any accepted alternative. Blank input never matches.
#[must_use]
pub fn accepts(answer: &AcceptedAnswer, input: &str) -> bool {
    !input.trim().is_empty() && answer.alternatives().any(|expected| texts_match(input, expected))
}

fn count(marks: &[bool]) -> u32 {
    let correct = marks.iter().filter(|&&mark| mark).count();
    u32::try_from(correct).unwrap_or(u32::MAX)
}

fn input_at(inputs: &[String], index: usize) -> &str {
    inputs.get(index).map_or("", String::as_str)
}

//
// ─── MULTIPLE CHOICE ───────────────────────────────────────────────────────────
//

#[must_use]
pub fn multiple_choice_points(question: &MultipleChoice, selected: Option<usize>) -> u32 {
    u32::from(selected == Some(question.correct))
}

//
// ─── MATCHING ──────────────────────────────────────────────────────────────────
//

#[must_use]
pub fn matching_points(question: &Matching, board: &MatchingBoard) -> u32 {
    u32::from(board.is_complete(question))
}

//
// ─── SELECT CORRECT WORD ───────────────────────────────────────────────────────
//

#[must_use]
pub fn select_word_marks(question: &SelectCorrectWord, choices: &[Option<usize>]) -> Vec<bool> {
    question
        .correct
        .iter()
        .enumerate()
        .map(|(index, &correct)| choices.get(index).copied().flatten() == Some(correct))
        .collect()
}

#[must_use]
pub fn select_word_points(question: &SelectCorrectWord, choices: &[Option<usize>]) -> u32 {
    count(&select_word_marks(question, choices))
}

//
// ─── SENTENCE ORDERING ─────────────────────────────────────────────────────────
//

#[must_use]
pub fn ordering_marks(question: &SentenceOrdering, inputs: &[String]) -> Vec<bool> {
    question
        .correct
        .iter()
        .enumerate()
        .map(|(index, expected)| {
            let input = input_at(inputs, index);
            !input.trim().is_empty() && texts_match(input, expected)
        })
        .collect()
}

#[must_use]
pub fn ordering_points(question: &SentenceOrdering, inputs: &[String]) -> u32 {
    count(&ordering_marks(question, inputs))
}

//
// ─── ERROR CORRECTION ──────────────────────────────────────────────────────────
//

/// A "no error" sentence is correct only when the flag is checked. Any other sentence is
/// correct when the flag is unchecked and the typed correction matches.
#[must_use]
pub fn error_correction_marks(
    question: &ErrorCorrection,
    inputs: &[String],
    no_error: &[bool],
) -> Vec<bool> {
    question
        .has_no_error
        .iter()
        .enumerate()
        .map(|(index, &declared_no_error)| {
            let checked = no_error.get(index).copied().unwrap_or(false);
            if declared_no_error {
                return checked;
            }
            if checked {
                return false;
            }
            let input = input_at(inputs, index);
            let expected = question.corrections.get(index).map_or("", String::as_str);
            !input.trim().is_empty() && texts_match(input, expected)
        })
        .collect()
}

#[must_use]
pub fn error_correction_points(
    question: &ErrorCorrection,
    inputs: &[String],
    no_error: &[bool],
) -> u32 {
    count(&error_correction_marks(question, inputs, no_error))
}

//
// ─── SENTENCE REWRITE ──────────────────────────────────────────────────────────
//

#[must_use]
pub fn rewrite_marks(question: &SentenceRewrite, inputs: &[String]) -> Vec<bool> {
    question
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let input = input_at(inputs, index);
            !input.trim().is_empty() && texts_match(input, &item.answer)
        })
        .collect()
}

/// One point when every rewrite is marked correct.
#[must_use]
pub fn rewrite_points(question: &SentenceRewrite, inputs: &[String]) -> u32 {
    let marks = rewrite_marks(question, inputs);
    u32::from(!marks.is_empty() && marks.iter().all(|&mark| mark))
}

//
// ─── WORD BOX / FILL IN BLANK ──────────────────────────────────────────────────
//

#[must_use]
pub fn blank_marks(question: &BlankFill, inputs: &[String]) -> Vec<bool> {
    question
        .answers
        .iter()
        .enumerate()
        .map(|(index, answer)| accepts(answer, input_at(inputs, index)))
        .collect()
}

#[must_use]
pub fn blank_points(question: &BlankFill, inputs: &[String]) -> u32 {
    count(&blank_marks(question, inputs))
}
