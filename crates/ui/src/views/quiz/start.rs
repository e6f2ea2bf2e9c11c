use dioxus::prelude::*;

use crate::vm::QuizIntent;

#[component]
pub(super) fn StartScreen(
    title: String,
    description: String,
    total: usize,
    time_limit: Option<u32>,
    on_intent: EventHandler<QuizIntent>,
) -> Element {
    let time_limit_label = time_limit.map_or_else(
        || "No time limit".to_string(),
        |minutes| format!("{minutes} minutes"),
    );

    rsx! {
        div { class: "quiz-start",
            h2 { class: "quiz-start__title", "{title}" }
            if !description.is_empty() {
                p { class: "quiz-start__description", "{description}" }
            }
            div { class: "quiz-start__facts",
                div { class: "quiz-start__fact",
                    span { class: "quiz-start__fact-label", "Questions" }
                    span { "{total}" }
                }
                div { class: "quiz-start__fact",
                    span { class: "quiz-start__fact-label", "Time Limit" }
                    span { "{time_limit_label}" }
                }
            }
            button {
                class: "btn btn-primary btn-large",
                id: "quiz-start",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Start),
                "Start Quiz"
            }
        }
    }
}
