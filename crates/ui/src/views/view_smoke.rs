use quiz_core::model::{MAX_TOPIC_CHARS, Question};
use quiz_core::{QuizIntent, QuizState};

use super::test_harness::setup_view_harness;

fn question(text: &str, correct: usize) -> Question {
    Question::new(
        text,
        vec!["10".into(), "12".into(), "14".into(), "16".into()],
        correct,
        "Add the two sides.",
    )
    .unwrap()
}

fn quiz_state() -> QuizState {
    let mut state = QuizState::new();
    let effect = state.start_with("Perimeter").unwrap();
    let request = effect.generation_request().unwrap().id;
    state
        .apply(QuizIntent::GenerationSucceeded {
            request,
            questions: vec![question("Perimeter of a 3 by 3 square?", 1), question("Perimeter of a 2 by 5 rectangle?", 2)],
        })
        .unwrap();
    state
}

#[test]
fn idle_state_renders_topic_form_with_error() {
    let mut state = QuizState::new();
    let effect = state.start_with("Angles").unwrap();
    let request = effect.generation_request().unwrap().id;
    state
        .apply(QuizIntent::GenerationFailed {
            request,
            message: "Could not reach the AI service.".into(),
        })
        .unwrap();

    let html = setup_view_harness(state).render();

    assert!(html.contains("Enter a lesson topic"), "missing form in {html}");
    assert!(html.contains("Could not reach the AI service."), "missing error in {html}");
}

#[test]
fn rejected_long_topic_renders_message() {
    let mut state = QuizState::new();
    state
        .apply(QuizIntent::EditTopic("x".repeat(MAX_TOPIC_CHARS + 1)))
        .unwrap();
    state.apply(QuizIntent::Start).unwrap_err();

    let html = setup_view_harness(state).render();

    assert!(html.contains("error-banner"), "missing banner in {html}");
    assert!(html.contains("at most 200 characters"), "missing message in {html}");
    assert!(html.contains("maxlength"), "missing input cap in {html}");
}

#[test]
fn loading_state_renders_topic() {
    let mut state = QuizState::new();
    state.start_with("Ratios").unwrap();

    let html = setup_view_harness(state).render();

    assert!(html.contains("Designing your quiz"), "missing loader in {html}");
    assert!(html.contains("Ratios"), "missing topic in {html}");
}

#[test]
fn quiz_state_renders_current_question() {
    let mut state = quiz_state();
    state.apply(QuizIntent::SelectAnswer(1)).unwrap();

    let html = setup_view_harness(state).render();

    assert!(html.contains("Question 1 / 2"), "missing counter in {html}");
    assert!(html.contains("1 answered"), "missing answered count in {html}");
    assert!(html.contains("Perimeter of a 3 by 3 square?"), "missing question in {html}");
    assert!(html.contains("option--selected"), "missing selection in {html}");
    assert!(html.contains("Next"), "missing next button in {html}");
}

#[test]
fn result_state_renders_score() {
    let mut state = quiz_state();
    state.apply(QuizIntent::SelectAnswer(1)).unwrap();
    state.apply(QuizIntent::Next).unwrap();
    state.apply(QuizIntent::SelectAnswer(0)).unwrap();
    state.apply(QuizIntent::Next).unwrap();

    let html = setup_view_harness(state).render();

    assert!(html.contains("1/2"), "missing score in {html}");
    assert!(html.contains("50% correct"), "missing percent in {html}");
    assert!(html.contains("New quiz"), "missing reset button in {html}");
}
