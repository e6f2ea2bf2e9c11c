use dioxus::prelude::*;
use quiz_core::matching::MatchingBoard;
use quiz_core::model::Matching;

use crate::vm::QuizIntent;

#[component]
pub(super) fn MatchingQuestion(
    question: Matching,
    board: MatchingBoard,
    next_label: &'static str,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let completed = board.completed().len();
    let total = question.left.len();
    let complete = board.is_complete(&question);
    let feedback = board.feedback();

    let left_items: Vec<(usize, String, &'static str, bool)> = question
        .left
        .iter()
        .enumerate()
        .map(|(left, text)| {
            let locked = board.is_left_locked(left);
            let class = if locked {
                "match-item is-matched"
            } else if board.selected_left() == Some(left) {
                "match-item is-selected"
            } else {
                "match-item"
            };
            (left, text.clone(), class, locked)
        })
        .collect();

    let right_items: Vec<(usize, String, &'static str, bool)> = board
        .order()
        .iter()
        .enumerate()
        .map(|(position, &right)| {
            let text = question.right.get(right).cloned().unwrap_or_default();
            let locked = board.matched_left_for(&question, position).is_some();
            let class = match feedback {
                Some(feedback) if feedback.position == position && feedback.correct => {
                    "match-item is-correct"
                }
                Some(feedback) if feedback.position == position => "match-item is-incorrect",
                _ if locked => "match-item is-matched",
                _ => "match-item",
            };
            (position, text, class, locked)
        })
        .collect();

    rsx! {
        div { class: "matching",
            p { class: "matching__hint",
                "Match each item from the left column with its correct match in the right column"
            }
            div { class: "matching__columns",
                div { class: "matching__column",
                    for (left, text, class, locked) in left_items {
                        button {
                            key: "left-{left}",
                            class,
                            r#type: "button",
                            disabled: locked,
                            onclick: move |_| on_intent.call(QuizIntent::SelectLeft(left)),
                            "{text}"
                        }
                    }
                }
                div { class: "matching__column",
                    for (position, text, class, locked) in right_items {
                        button {
                            key: "right-{position}",
                            class,
                            r#type: "button",
                            disabled: locked,
                            onclick: move |_| on_intent.call(QuizIntent::SelectRight(position)),
                            "{text}"
                        }
                    }
                }
            }
            div { class: "quiz-question__footer",
                span { class: "badge badge--score", "{completed}/{total} Matches Completed" }
                div { class: "matching__actions",
                    button {
                        class: "btn btn-secondary",
                        id: "quiz-skip",
                        r#type: "button",
                        onclick: move |_| on_intent.call(QuizIntent::Next),
                        "Skip"
                    }
                    button {
                        class: "btn btn-primary",
                        id: "quiz-next",
                        r#type: "button",
                        disabled: !complete,
                        onclick: move |_| on_intent.call(QuizIntent::Next),
                        "{next_label}"
                    }
                }
            }
        }
    }
}
