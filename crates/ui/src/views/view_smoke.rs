use std::sync::Arc;
use std::time::Duration;

use quiz_core::buffer::AnswerBuffer;
use quiz_core::model::{QuestionBody, QuestionSet};

use super::test_harness::{ViewHarness, bundled_questions, setup_view_harness, setup_view_harness_with_delay};
use crate::vm::{QuizIntent, QuizScreen};

fn questions_from(json: &str) -> Arc<QuestionSet> {
    Arc::new(QuestionSet::from_json(json).expect("question document"))
}

fn started(questions: Arc<QuestionSet>) -> ViewHarness {
    let mut harness = setup_view_harness(questions);
    harness.rebuild();
    harness.dispatch(QuizIntent::Start);
    harness
}

#[tokio::test(flavor = "current_thread")]
async fn start_screen_smoke_renders_quiz_facts() {
    let mut harness = setup_view_harness(bundled_questions());
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("English Practice Quiz"), "missing title in {html}");
    assert!(html.contains("Questions"), "missing question label in {html}");
    assert!(html.contains("30 minutes"), "missing time limit in {html}");
    assert!(html.contains("Start Quiz"), "missing start button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn question_screen_smoke_renders_header_and_audioscript() {
    let harness = started(bundled_questions());
    let html = harness.render();
    assert!(html.contains("Question 1 of 8"), "missing progress in {html}");
    assert!(html.contains("Score: 0"), "missing score in {html}");
    assert!(html.contains("Audioscript"), "missing audioscript toggle in {html}");
    assert!(html.contains("Multiple Choice"), "missing kind badge in {html}");
    assert!(html.contains("To the seaside"), "missing option in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn multiple_choice_smoke_auto_advances_and_scores() {
    let mut harness = setup_view_harness_with_delay(bundled_questions(), Duration::from_millis(5));
    harness.rebuild();
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::ChooseOption(1));
    assert_eq!(harness.with_vm(|vm| vm.session().current_index()), 0);

    for _ in 0..20 {
        harness.drive_async().await;
        if harness.with_vm(|vm| vm.session().current_index()) == 1 {
            break;
        }
    }

    assert_eq!(harness.with_vm(|vm| vm.session().score()), 1);
    let html = harness.render();
    assert!(html.contains("Question 2 of 8"), "did not advance in {html}");
    assert!(html.contains("Score: 1"), "missing score in {html}");
    assert!(html.contains("Matches Completed"), "missing matching widget in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn second_choice_smoke_shows_rejection() {
    let mut harness = setup_view_harness_with_delay(bundled_questions(), Duration::from_secs(60));
    harness.rebuild();
    harness.dispatch(QuizIntent::Start);
    harness.dispatch(QuizIntent::ChooseOption(0));
    harness.dispatch(QuizIntent::ChooseOption(1));
    let html = harness.render();
    assert!(
        html.contains("That action isn&#39;t available right now.")
            || html.contains("That action isn't available right now."),
        "missing rejection in {html}"
    );
    assert_eq!(harness.with_vm(|vm| vm.session().pending_points()), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn matching_smoke_counts_completed_pairs() {
    let questions = questions_from(
        r#"{
            "questions": [{
                "type": "matching",
                "question": "Match the opposites.",
                "options": ["hot", "up"],
                "matchingOptions": ["down", "cold"],
                "correctAnswers": [1, 0]
            }]
        }"#,
    );
    let mut harness = started(questions);
    let html = harness.render();
    assert!(html.contains("0/2 Matches Completed"), "missing counter in {html}");
    assert!(html.contains("Skip"), "missing skip in {html}");

    let order = harness.with_vm(|vm| match vm.buffer() {
        AnswerBuffer::Matching(board) => board.order().to_vec(),
        other => panic!("unexpected buffer {other:?}"),
    });
    let position = |right: usize| order.iter().position(|&r| r == right).unwrap();

    harness.dispatch(QuizIntent::SelectLeft(0));
    harness.dispatch(QuizIntent::SelectRight(position(1)));
    harness.dispatch(QuizIntent::SelectLeft(1));
    harness.dispatch(QuizIntent::SelectRight(position(0)));
    let html = harness.render();
    assert!(html.contains("2/2 Matches Completed"), "missing completion in {html}");

    harness.dispatch(QuizIntent::Next);
    assert_eq!(harness.with_vm(|vm| vm.screen()), QuizScreen::Results);
    assert!(harness.render().contains("You scored 1 out of 1"));
}

#[tokio::test(flavor = "current_thread")]
async fn incomplete_question_smoke_skips_to_results_and_restarts() {
    let questions = questions_from(
        r#"{
            "quizTitle": "Mixed",
            "questions": [
                { "type": "word_box_fill", "question": "Broken", "sentences": ["I ______ here."], "answers": ["am"] },
                { "type": "fill_in_blank", "question": "Complete the sentence.", "sentences": ["She _______ tea."], "answers": [["likes", "loves"]] }
            ]
        }"#,
    );
    let mut harness = started(questions);
    let html = harness.render();
    assert!(html.contains("Question data is incomplete"), "missing placeholder in {html}");

    harness.dispatch(QuizIntent::Next);
    let html = harness.render();
    assert!(html.contains("Question 2 of 2"), "missing progress in {html}");
    assert!(html.contains("Fill in the Blank"), "missing kind badge in {html}");
    assert!(html.contains("Finish Quiz"), "missing finish button in {html}");

    harness.dispatch(QuizIntent::BlankInput {
        index: 0,
        text: " Loves ".into(),
    });
    assert!(harness.render().contains("Score: 1/1"));
    harness.dispatch(QuizIntent::Next);

    let html = harness.render();
    assert!(html.contains("Quiz Results"), "missing results in {html}");
    assert!(html.contains("100%"), "missing percentage in {html}");
    assert!(html.contains("You scored 1 out of 1"), "missing score line in {html}");
    assert!(html.contains("Excellent!"), "missing band in {html}");
    assert!(html.contains("Restart Quiz"), "missing restart in {html}");

    harness.dispatch(QuizIntent::Restart);
    let html = harness.render();
    assert!(html.contains("Start Quiz"), "restart did not return to start in {html}");
    assert_eq!(harness.with_vm(|vm| vm.session().score()), 0);
}

#[tokio::test(flavor = "current_thread")]
async fn select_word_smoke_checks_then_advances() {
    let questions = questions_from(
        r#"{
            "questions": [{
                "type": "select_correct_word",
                "question": "Choose the correct word.",
                "sentences": ["I ______ happy.", "They ______ late."],
                "options": [["am", "is"], ["was", "were"]],
                "correctAnswers": [0, 1]
            }]
        }"#,
    );
    let mut harness = started(questions);
    assert!(harness.render().contains("Check Answers"));

    harness.dispatch(QuizIntent::SelectWord { sentence: 0, option: 0 });
    harness.dispatch(QuizIntent::SelectWord { sentence: 1, option: 0 });
    harness.dispatch(QuizIntent::CheckWords);
    let html = harness.render();
    assert!(html.contains("Score: 1/2"), "missing checked score in {html}");
    assert!(!html.contains("Check Answers"), "check button still shown in {html}");

    harness.dispatch(QuizIntent::Next);
    assert!(harness.render().contains("You scored 1 out of 2"));
}

#[tokio::test(flavor = "current_thread")]
async fn empty_set_smoke_goes_straight_to_results() {
    let mut harness = started(questions_from(r#"{ "questions": [] }"#));
    let html = harness.render();
    assert!(html.contains("Quiz Results"), "missing results in {html}");
    assert!(html.contains("0%"), "missing percentage in {html}");
    harness.dispatch(QuizIntent::Restart);
    assert_eq!(harness.with_vm(|vm| vm.screen()), QuizScreen::Start);
}

#[test]
fn word_box_document_shape_is_checked() {
    let questions = questions_from(
        r#"{ "questions": [{ "type": "word_box_fill", "question": "Q", "sentences": ["a ______"], "answers": ["x"] }] }"#,
    );
    assert!(matches!(
        questions.get(0).map(|q| &q.body),
        Some(QuestionBody::Incomplete { .. })
    ));
}
