use dioxus::prelude::*;
use quiz_core::buffer::AnswerBuffer;
use quiz_core::model::{Example, QuestionBody, QuestionKind, blank_parts};

use crate::vm::{QuizIntent, QuizVm};

use super::choice::{MultipleChoiceQuestion, SelectWordQuestion};
use super::matching::MatchingQuestion;
use super::text_entry::{BlankQuestion, ErrorCorrectionQuestion, OrderingQuestion, RewriteQuestion};

/// Header, prompt, supporting material and the widget for the active question.
#[component]
pub(super) fn QuestionScreen(vm: Signal<QuizVm>, on_intent: EventHandler<QuizIntent>) -> Element {
    let vm_guard = vm.read();
    let Some(question) = vm_guard.question() else {
        return rsx! {};
    };

    let index = vm_guard.session().current_index();
    let progress_label = vm_guard.progress_label();
    let score_label = vm_guard.score_label();
    let pending_label = vm_guard.pending_label();
    let marks = vm_guard.item_marks();
    let next_label = if vm_guard.is_last_question() {
        "Finish Quiz"
    } else {
        "Next Question"
    };
    let kind_label = question.kind().map(QuestionKind::label);
    let inline_example = matches!(
        question.kind(),
        Some(QuestionKind::WordBoxFill | QuestionKind::FillInBlank)
    );
    let shows_shared_footer = matches!(
        question.body,
        QuestionBody::SentenceOrdering(_)
            | QuestionBody::ErrorCorrection(_)
            | QuestionBody::SentenceRewrite(_)
            | QuestionBody::WordBoxFill(_)
            | QuestionBody::FillInBlank(_)
    );

    let widget = match (&question.body, vm_guard.buffer()) {
        (QuestionBody::MultipleChoice(q), AnswerBuffer::MultipleChoice { selected }) => rsx! {
            MultipleChoiceQuestion { question: q.clone(), selected: *selected, on_intent }
        },
        (QuestionBody::Matching(q), AnswerBuffer::Matching(board)) => rsx! {
            MatchingQuestion { question: q.clone(), board: board.clone(), next_label, on_intent }
        },
        (QuestionBody::SelectCorrectWord(q), AnswerBuffer::SelectCorrectWord { choices, checked }) => rsx! {
            SelectWordQuestion {
                question: q.clone(),
                choices: choices.clone(),
                checked: *checked,
                marks: marks.clone(),
                next_label,
                on_intent,
            }
        },
        (QuestionBody::SentenceOrdering(q), AnswerBuffer::SentenceOrdering { inputs }) => rsx! {
            OrderingQuestion { question: q.clone(), inputs: inputs.clone(), marks: marks.clone(), on_intent }
        },
        (QuestionBody::ErrorCorrection(q), AnswerBuffer::ErrorCorrection { inputs, no_error }) => rsx! {
            ErrorCorrectionQuestion {
                question: q.clone(),
                inputs: inputs.clone(),
                no_error: no_error.clone(),
                marks: marks.clone(),
                on_intent,
            }
        },
        (QuestionBody::SentenceRewrite(q), AnswerBuffer::SentenceRewrite { inputs }) => rsx! {
            RewriteQuestion { question: q.clone(), inputs: inputs.clone(), marks: marks.clone(), on_intent }
        },
        (QuestionBody::WordBoxFill(q), AnswerBuffer::Blanks { inputs }) => rsx! {
            BlankQuestion {
                question: q.clone(),
                inputs: inputs.clone(),
                marks: marks.clone(),
                show_word_box: true,
                on_intent,
            }
        },
        (QuestionBody::FillInBlank(q), AnswerBuffer::Blanks { inputs }) => rsx! {
            BlankQuestion {
                question: q.clone(),
                inputs: inputs.clone(),
                marks: marks.clone(),
                show_word_box: false,
                on_intent,
            }
        },
        (QuestionBody::Incomplete { reason, .. }, _) => rsx! {
            IncompleteQuestion { reason: reason.to_string(), on_intent }
        },
        _ => rsx! {
            IncompleteQuestion { reason: String::new(), on_intent }
        },
    };

    rsx! {
        div { class: "quiz-question",
            div { class: "quiz-question__header",
                span { class: "badge badge--progress", "{progress_label}" }
                span { class: "badge badge--score", "{score_label}" }
            }
            div { class: "quiz-question__card",
                h2 { class: "quiz-question__prompt", "{question.prompt}" }
                if let Some(audioscript) = question.audioscript.clone() {
                    Collapsible { key: "audio-{index}", title: "Audioscript", body: audioscript }
                }
                if let Some(content) = question.content.clone() {
                    Collapsible { key: "content-{index}", title: "Reading Text", body: content }
                }
                if let Some(label) = kind_label {
                    span { class: "badge badge--kind", "{label}" }
                }
                if let Some(example) = question.example.clone() {
                    ExampleBlock { example, inline: inline_example }
                }
                div { class: "quiz-question__widget", {widget} }
                if shows_shared_footer {
                    div { class: "quiz-question__footer",
                        span { class: "badge badge--score", "{pending_label}" }
                        button {
                            class: "btn btn-primary",
                            id: "quiz-next",
                            r#type: "button",
                            onclick: move |_| on_intent.call(QuizIntent::Next),
                            "{next_label}"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Collapsible(title: &'static str, body: String) -> Element {
    let mut open = use_signal(|| false);
    let chevron = if open() { "▲" } else { "▼" };

    rsx! {
        section { class: "collapsible",
            button {
                class: "collapsible__toggle",
                r#type: "button",
                aria_expanded: "{open()}",
                onclick: move |_| open.toggle(),
                span { class: "collapsible__title", "{title}" }
                span { class: "collapsible__chevron", "{chevron}" }
            }
            if open() {
                div { class: "collapsible__body", "{body}" }
            }
        }
    }
}

#[component]
fn ExampleBlock(example: Example, inline: bool) -> Element {
    match example {
        Example::Text { text, answer: Some(answer) } if inline => {
            let (before, after) = blank_parts(&text);
            let (before, after) = (before.to_string(), after.to_string());
            rsx! {
                div { class: "example",
                    p { class: "example__label", "Example:" }
                    p {
                        "{before}"
                        strong { class: "example__answer", "{answer}" }
                        "{after}"
                    }
                }
            }
        }
        Example::Text { text, answer } => rsx! {
            div { class: "example",
                p { class: "example__label", "Example:" }
                p { "{text}" }
                if let Some(answer) = answer {
                    p { class: "example__answer",
                        "Correct answer: "
                        em { "{answer}" }
                    }
                }
            }
        },
        Example::Rewrite(item) => rsx! {
            div { class: "example",
                p { class: "example__label", "Example:" }
                p { "{item.original}" }
                p { class: "example__partial", "{item.partial}" }
                p { class: "example__answer",
                    "Correct answer: "
                    em { "{item.answer}" }
                }
            }
        },
    }
}

#[component]
fn IncompleteQuestion(reason: String, on_intent: EventHandler<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz-incomplete",
            p { "Question data is incomplete" }
            if !reason.is_empty() {
                p { class: "quiz-incomplete__reason", "{reason}" }
            }
            button {
                class: "btn btn-secondary",
                id: "quiz-skip",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Next),
                "Skip"
            }
        }
    }
}
