use dioxus::prelude::*;
use quiz_core::model::{BlankFill, ErrorCorrection, SentenceOrdering, SentenceRewrite, blank_parts};

use crate::vm::QuizIntent;

use super::mark_class;

fn input_at(inputs: &[String], index: usize) -> String {
    inputs.get(index).cloned().unwrap_or_default()
}

fn mark_at(marks: &[Option<bool>], index: usize) -> &'static str {
    mark_class(marks.get(index).copied().flatten())
}

#[component]
pub(super) fn OrderingQuestion(
    question: SentenceOrdering,
    inputs: Vec<String>,
    marks: Vec<Option<bool>>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        div { class: "entry-list",
            for (index, sentence) in question.sentences.iter().enumerate() {
                {
                    let number = index + 1;
                    let value = input_at(&inputs, index);
                    let mark = mark_at(&marks, index);
                    rsx! {
                        div { key: "{index}", class: "entry",
                            p { class: "entry__sentence", "{number}. {sentence}" }
                            label { class: "entry__label", "Your answer:" }
                            input {
                                class: "entry__input {mark}",
                                r#type: "text",
                                value: "{value}",
                                placeholder: "Type the correct sentence here",
                                oninput: move |evt: FormEvent| {
                                    on_intent.call(QuizIntent::OrderingInput { index, text: evt.value() });
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Correct each sentence, or flag it as having no error.
#[component]
pub(super) fn ErrorCorrectionQuestion(
    question: ErrorCorrection,
    inputs: Vec<String>,
    no_error: Vec<bool>,
    marks: Vec<Option<bool>>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        div { class: "entry-list",
            for (index, sentence) in question.sentences.iter().enumerate() {
                {
                    let number = index + 1;
                    let value = input_at(&inputs, index);
                    let mark = mark_at(&marks, index);
                    let flagged = no_error.get(index).copied().unwrap_or(false);
                    let toggle_class = if flagged {
                        "btn btn-toggle is-active"
                    } else {
                        "btn btn-toggle"
                    };
                    rsx! {
                        div { key: "{index}", class: "entry",
                            div { class: "entry__row",
                                p { class: "entry__sentence", "{number}. {sentence}" }
                                button {
                                    class: toggle_class,
                                    r#type: "button",
                                    aria_pressed: "{flagged}",
                                    onclick: move |_| {
                                        on_intent.call(QuizIntent::NoError { index, checked: !flagged });
                                    },
                                    "No Error (✓)"
                                }
                            }
                            label { class: "entry__label", "Correction (leave blank if no error):" }
                            input {
                                class: "entry__input {mark}",
                                r#type: "text",
                                value: "{value}",
                                disabled: flagged,
                                placeholder: "Type the corrected sentence here",
                                oninput: move |evt: FormEvent| {
                                    on_intent.call(QuizIntent::CorrectionInput { index, text: evt.value() });
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
pub(super) fn RewriteQuestion(
    question: SentenceRewrite,
    inputs: Vec<String>,
    marks: Vec<Option<bool>>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        div { class: "entry-list",
            for (index, item) in question.items.iter().enumerate() {
                {
                    let number = index + 1;
                    let value = input_at(&inputs, index);
                    let mark = mark_at(&marks, index);
                    rsx! {
                        div { key: "{index}", class: "entry",
                            p { class: "entry__sentence", "{number}. {item.original}" }
                            p { class: "entry__partial", "{item.partial}" }
                            label { class: "entry__label", "Your answer:" }
                            input {
                                class: "entry__input {mark}",
                                r#type: "text",
                                value: "{value}",
                                placeholder: "Complete the sentence",
                                oninput: move |evt: FormEvent| {
                                    on_intent.call(QuizIntent::RewriteInput { index, text: evt.value() });
                                },
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Sentences with an inline input at the blank; `show_word_box` lists the candidate words.
#[component]
pub(super) fn BlankQuestion(
    question: BlankFill,
    inputs: Vec<String>,
    marks: Vec<Option<bool>>,
    show_word_box: bool,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    rsx! {
        div { class: "entry-list",
            if show_word_box {
                div { class: "word-box",
                    p { class: "word-box__label", "Word Box:" }
                    div { class: "word-box__words",
                        for (index, word) in question.word_box.iter().enumerate() {
                            span { key: "{index}", class: "badge badge--word", "{word}" }
                        }
                    }
                }
            }
            for (index, sentence) in question.sentences.iter().enumerate() {
                {
                    let number = index + 1;
                    let (before, after) = blank_parts(sentence);
                    let (before, after) = (before.to_string(), after.to_string());
                    let value = input_at(&inputs, index);
                    let mark = mark_at(&marks, index);
                    let placeholder = if show_word_box { "Enter word" } else { "Enter answer" };
                    rsx! {
                        div { key: "{index}", class: "entry entry--inline",
                            span { class: "entry__number", "{number}." }
                            span { "{before}" }
                            input {
                                class: "entry__input entry__input--blank {mark}",
                                r#type: "text",
                                value: "{value}",
                                placeholder,
                                oninput: move |evt: FormEvent| {
                                    on_intent.call(QuizIntent::BlankInput { index, text: evt.value() });
                                },
                            }
                            span { "{after}" }
                        }
                    }
                }
            }
        }
    }
}
