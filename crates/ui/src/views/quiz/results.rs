use dioxus::prelude::*;
use quiz_core::model::QuestionKind;
use quiz_core::results::{QuizResults, ResultBand};

use crate::vm::{QuizIntent, format_elapsed};

#[component]
pub(super) fn ResultsScreen(results: QuizResults, on_intent: EventHandler<QuizIntent>) -> Element {
    let percentage = results.percentage();
    let score = results.score();
    let max_points = results.max_points();
    let question_count = results.question_count();
    let band_class = match results.band() {
        ResultBand::Excellent => "band band--excellent",
        ResultBand::GoodEffort => "band band--good",
        ResultBand::KeepPracticing => "band band--practice",
    };
    let band_label = results.band().label();
    let elapsed_label = results
        .elapsed()
        .map(|elapsed| format!("Time: {}", format_elapsed(elapsed)));
    let breakdown: Vec<(usize, String, u32, u32)> = results
        .outcomes()
        .iter()
        .map(|outcome| {
            let kind = outcome
                .kind
                .map_or("Incomplete question", QuestionKind::label)
                .to_string();
            (outcome.index + 1, kind, outcome.earned, outcome.available)
        })
        .collect();

    rsx! {
        div { class: "quiz-results",
            h2 { class: "quiz-results__title", "Quiz Results" }
            p { class: "quiz-results__percentage", "{percentage}%" }
            p { class: "quiz-results__score", "You scored {score} out of {max_points}" }
            p { class: band_class, "{band_label}" }
            p { class: "quiz-results__meta", "Questions answered: {question_count}" }
            if let Some(label) = elapsed_label {
                p { class: "quiz-results__meta", "{label}" }
            }
            if !breakdown.is_empty() {
                ul { class: "quiz-results__breakdown",
                    for (number, kind, earned, available) in breakdown {
                        li { key: "{number}",
                            span { "{number}. {kind}" }
                            span { class: "quiz-results__points", "{earned}/{available}" }
                        }
                    }
                }
            }
            button {
                class: "btn btn-primary btn-large",
                id: "quiz-restart",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::Restart),
                "Restart Quiz"
            }
        }
    }
}
