use dioxus::prelude::*;
use quiz_core::model::{MultipleChoice, SelectCorrectWord};

use crate::vm::QuizIntent;

use super::mark_class;

#[component]
pub(super) fn MultipleChoiceQuestion(
    question: MultipleChoice,
    selected: Option<usize>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let answered = selected.is_some();

    rsx! {
        div { class: "choice-list",
            for (index, option) in question.options.iter().enumerate() {
                {
                    let state = match selected {
                        Some(choice) if choice == index && index == question.correct => "is-correct",
                        Some(choice) if choice == index => "is-incorrect",
                        _ => "",
                    };
                    rsx! {
                        button {
                            key: "{index}",
                            class: "choice {state}",
                            r#type: "button",
                            disabled: answered,
                            onclick: move |_| on_intent.call(QuizIntent::ChooseOption(index)),
                            "{option}"
                        }
                    }
                }
            }
        }
    }
}

/// Choose one option per sentence, then check all at once.
#[component]
pub(super) fn SelectWordQuestion(
    question: SelectCorrectWord,
    choices: Vec<Option<usize>>,
    checked: bool,
    marks: Vec<Option<bool>>,
    next_label: &'static str,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let all_chosen = choices.iter().all(Option::is_some);
    let correct_count = marks.iter().filter(|mark| **mark == Some(true)).count();
    let total = question.sentences.len();

    rsx! {
        div { class: "select-word",
            for (sentence_index, sentence) in question.sentences.iter().enumerate() {
                {
                    let row_class = if checked {
                        mark_class(marks.get(sentence_index).copied().flatten())
                    } else {
                        ""
                    };
                    let number = sentence_index + 1;
                    let chosen = choices.get(sentence_index).copied().flatten();
                    let options = question.options.get(sentence_index).cloned().unwrap_or_default();
                    rsx! {
                        div { key: "{sentence_index}", class: "select-word__row {row_class}",
                            p { class: "select-word__sentence", "{number}. {sentence}" }
                            div { class: "select-word__options",
                                for (option_index, option) in options.into_iter().enumerate() {
                                    {
                                        let class = if chosen == Some(option_index) {
                                            "choice choice--small is-selected"
                                        } else {
                                            "choice choice--small"
                                        };
                                        rsx! {
                                            button {
                                                key: "{option_index}",
                                                class,
                                                r#type: "button",
                                                disabled: checked,
                                                onclick: move |_| on_intent.call(QuizIntent::SelectWord {
                                                    sentence: sentence_index,
                                                    option: option_index,
                                                }),
                                                "{option}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            div { class: "quiz-question__footer",
                if checked {
                    span { class: "badge badge--score", "Score: {correct_count}/{total}" }
                    button {
                        class: "btn btn-primary",
                        id: "quiz-next",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Next),
                        "{next_label}"
                    }
                } else {
                    button {
                        class: "btn btn-primary",
                        id: "quiz-check",
                        r#type: "button",
                        disabled: !all_chosen,
                        onclick: move |_| on_intent.call(QuizIntent::CheckWords),
                        "Check Answers"
                    }
                }
            }
        }
    }
}
