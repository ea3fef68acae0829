use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{MAX_TOPIC_CHARS, Question, Topic, TopicError};

use super::intent::{GenerationRequest, QuizEffect, QuizIntent, RequestId};
use super::progress::QuizProgress;

const EMPTY_QUESTION_SET_MESSAGE: &str = "The generator returned no questions. Please try again.";

//
// ─── STATUS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuizStatus {
    #[default]
    Idle,
    Loading,
    Quiz,
    Result,
}

impl fmt::Display for QuizStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Quiz => "quiz",
            Self::Result => "result",
        };
        f.write_str(label)
    }
}

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

/// Why an intent was not applied.
///
/// The state is left untouched, except that a start with an invalid topic
/// records a message in [`QuizState::error`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum TransitionError {
    #[error("topic cannot be empty")]
    BlankTopic,

    #[error("topic is too long ({len} characters)")]
    TopicTooLong { len: usize },

    #[error("{intent} is not allowed while {status}")]
    InvalidStatus {
        intent: &'static str,
        status: QuizStatus,
    },

    #[error("response for request {request} is stale")]
    StaleResponse { request: RequestId },

    #[error("answer {index} is not an option of the current question")]
    AnswerOutOfRange { index: usize },
}

impl From<TopicError> for TransitionError {
    fn from(err: TopicError) -> Self {
        match err {
            TopicError::TooLong { len } => Self::TopicTooLong { len },
            _ => Self::BlankTopic,
        }
    }
}

//
// ─── SNAPSHOT ──────────────────────────────────────────────────────────────────
//

/// Observable part of a session, as a renderer sees it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizSnapshot {
    pub status: QuizStatus,
    pub topic: String,
    pub questions: Vec<Question>,
    pub user_answers: Vec<Option<usize>>,
    pub current_index: usize,
    pub error: Option<String>,
}

//
// ─── STATE ─────────────────────────────────────────────────────────────────────
//

/// Session state of a single quiz run.
///
/// Only [`QuizState::apply`] mutates it. Invariants:
/// - `user_answers.len() == questions.len()` outside of `Idle`
/// - `current_index < questions.len()` while in `Quiz`
/// - every recorded answer is a valid option of its question
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuizState {
    questions: Vec<Question>,
    current_index: usize,
    user_answers: Vec<Option<usize>>,
    status: QuizStatus,
    topic: String,
    error: Option<String>,
    pending: Option<RequestId>,
    // Survives reset so tickets from earlier sessions can never match again.
    issued_requests: u64,
}

impl QuizState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn status(&self) -> QuizStatus {
        self.status
    }

    #[must_use]
    pub fn topic(&self) -> &str {
        &self.topic
    }

    #[must_use]
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    #[must_use]
    pub fn user_answers(&self) -> &[Option<usize>] {
        &self.user_answers
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Message of the last failed generation, shown on the topic form.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn pending_request(&self) -> Option<RequestId> {
        self.pending
    }

    #[must_use]
    pub fn current_question(&self) -> Option<&Question> {
        if self.status == QuizStatus::Quiz {
            self.questions.get(self.current_index)
        } else {
            None
        }
    }

    /// Answer recorded for the question under the cursor.
    #[must_use]
    pub fn selected_answer(&self) -> Option<usize> {
        self.user_answers
            .get(self.current_index)
            .copied()
            .flatten()
    }

    #[must_use]
    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    #[must_use]
    pub fn is_last(&self) -> bool {
        self.current_index + 1 >= self.questions.len()
    }

    #[must_use]
    pub fn answered_count(&self) -> usize {
        self.user_answers.iter().filter(|a| a.is_some()).count()
    }

    #[must_use]
    pub fn progress(&self) -> QuizProgress {
        QuizProgress::new(
            self.current_index,
            self.questions.len(),
            self.answered_count(),
        )
    }

    /// Number of questions whose recorded answer matches the correct index.
    #[must_use]
    pub fn score(&self) -> usize {
        self.questions
            .iter()
            .zip(&self.user_answers)
            .filter(|(question, answer)| {
                answer.is_some_and(|index| question.is_correct(index))
            })
            .count()
    }

    #[must_use]
    pub fn snapshot(&self) -> QuizSnapshot {
        QuizSnapshot {
            status: self.status,
            topic: self.topic.clone(),
            questions: self.questions.clone(),
            user_answers: self.user_answers.clone(),
            current_index: self.current_index,
            error: self.error.clone(),
        }
    }

    /// Edit the topic and start in one step.
    ///
    /// # Errors
    ///
    /// Same as [`QuizIntent::Start`].
    pub fn start_with(&mut self, topic: impl AsRef<str>) -> Result<QuizEffect, TransitionError> {
        self.ensure_startable(QuizIntent::Start.name())?;
        let topic = self.checked_topic(topic.as_ref())?;
        Ok(self.begin(topic))
    }

    /// Apply one intent.
    ///
    /// # Errors
    ///
    /// Returns `TransitionError` when the intent is not allowed in the current
    /// status, the topic is blank, the answer is out of range, or a generation
    /// outcome belongs to a request that is no longer pending. The state is
    /// unchanged whenever an error is returned, apart from the form message
    /// left by a rejected topic.
    pub fn apply(&mut self, intent: QuizIntent) -> Result<QuizEffect, TransitionError> {
        let name = intent.name();
        match intent {
            QuizIntent::EditTopic(raw) => {
                self.ensure_status(name, &[QuizStatus::Idle])?;
                self.topic = raw;
                Ok(QuizEffect::None)
            }
            QuizIntent::Start => {
                self.ensure_startable(name)?;
                let raw = self.topic.clone();
                let topic = self.checked_topic(&raw)?;
                Ok(self.begin(topic))
            }
            QuizIntent::GenerationSucceeded { request, questions } => {
                self.ensure_pending(request)?;
                self.pending = None;
                if questions.is_empty() {
                    self.status = QuizStatus::Idle;
                    self.error = Some(EMPTY_QUESTION_SET_MESSAGE.to_string());
                    return Ok(QuizEffect::None);
                }
                self.user_answers = vec![None; questions.len()];
                self.questions = questions;
                self.current_index = 0;
                self.error = None;
                self.status = QuizStatus::Quiz;
                Ok(QuizEffect::None)
            }
            QuizIntent::GenerationFailed { request, message } => {
                self.ensure_pending(request)?;
                self.pending = None;
                self.status = QuizStatus::Idle;
                self.error = Some(message);
                Ok(QuizEffect::None)
            }
            QuizIntent::SelectAnswer(index) => {
                self.ensure_status(name, &[QuizStatus::Quiz])?;
                let valid = self
                    .questions
                    .get(self.current_index)
                    .is_some_and(|question| question.is_valid_option(index));
                if !valid {
                    return Err(TransitionError::AnswerOutOfRange { index });
                }
                self.user_answers[self.current_index] = Some(index);
                Ok(QuizEffect::None)
            }
            QuizIntent::Next => {
                self.ensure_status(name, &[QuizStatus::Quiz])?;
                if self.is_last() {
                    self.status = QuizStatus::Result;
                } else {
                    self.current_index += 1;
                }
                Ok(QuizEffect::None)
            }
            QuizIntent::Previous => {
                self.ensure_status(name, &[QuizStatus::Quiz])?;
                self.current_index = self.current_index.saturating_sub(1);
                Ok(QuizEffect::None)
            }
            QuizIntent::Reset => {
                self.ensure_status(name, &[QuizStatus::Result])?;
                *self = Self {
                    issued_requests: self.issued_requests,
                    ..Self::default()
                };
                Ok(QuizEffect::None)
            }
        }
    }

    fn begin(&mut self, topic: Topic) -> QuizEffect {
        self.issued_requests += 1;
        let id = RequestId::new(self.issued_requests);
        self.topic = topic.as_str().to_string();
        self.error = None;
        self.pending = Some(id);
        self.status = QuizStatus::Loading;
        QuizEffect::Generate(GenerationRequest { id, topic })
    }

    fn checked_topic(&mut self, raw: &str) -> Result<Topic, TransitionError> {
        Topic::new(raw).map_err(|err| {
            self.error = Some(topic_message(&err));
            TransitionError::from(err)
        })
    }

    // A start while loading supersedes the in-flight request.
    fn ensure_startable(&self, intent: &'static str) -> Result<(), TransitionError> {
        self.ensure_status(intent, &[QuizStatus::Idle, QuizStatus::Loading])
    }

    fn ensure_status(
        &self,
        intent: &'static str,
        allowed: &[QuizStatus],
    ) -> Result<(), TransitionError> {
        if allowed.contains(&self.status) {
            Ok(())
        } else {
            Err(TransitionError::InvalidStatus {
                intent,
                status: self.status,
            })
        }
    }

    fn ensure_pending(&self, request: RequestId) -> Result<(), TransitionError> {
        if self.status == QuizStatus::Loading && self.pending == Some(request) {
            Ok(())
        } else {
            Err(TransitionError::StaleResponse { request })
        }
    }
}

fn topic_message(err: &TopicError) -> String {
    match err {
        TopicError::TooLong { .. } => {
            format!("Please shorten the topic to at most {MAX_TOPIC_CHARS} characters.")
        }
        _ => "Please enter a topic for the quiz.".to_string(),
    }
}

/// Pure `(state, intent) -> state` form of [`QuizState::apply`].
///
/// Rejected intents return the state unchanged together with `QuizEffect::None`.
#[must_use]
pub fn transition(mut state: QuizState, intent: QuizIntent) -> (QuizState, QuizEffect) {
    let effect = state.apply(intent).unwrap_or(QuizEffect::None);
    (state, effect)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    fn question(correct: usize) -> Question {
        Question::new(
            format!("Q{correct}"),
            vec!["a".into(), "b".into(), "c".into(), "d".into()],
            correct,
            "because",
        )
        .unwrap()
    }

    fn started(topic: &str) -> (QuizState, GenerationRequest) {
        let mut state = QuizState::new();
        state
            .apply(QuizIntent::EditTopic(topic.to_string()))
            .unwrap();
        let effect = state.apply(QuizIntent::Start).unwrap();
        let request = effect.generation_request().cloned().unwrap();
        (state, request)
    }

    fn in_quiz(correct: &[usize]) -> QuizState {
        let (mut state, request) = started("Fractions");
        state
            .apply(QuizIntent::GenerationSucceeded {
                request: request.id,
                questions: correct.iter().copied().map(question).collect(),
            })
            .unwrap();
        state
    }

    fn assert_answers_sized(state: &QuizState) {
        if state.status() != QuizStatus::Idle {
            assert_eq!(state.user_answers().len(), state.questions().len());
        }
    }

    #[test]
    fn start_moves_to_loading_and_emits_request() {
        let (state, request) = started("  Linear equations ");

        assert_eq!(state.status(), QuizStatus::Loading);
        assert_eq!(state.topic(), "Linear equations");
        assert_eq!(request.topic.as_str(), "Linear equations");
        assert_eq!(state.pending_request(), Some(request.id));
        assert_answers_sized(&state);
    }

    #[test]
    fn blank_topic_is_rejected_without_request() {
        let mut state = QuizState::new();
        state.apply(QuizIntent::EditTopic("   ".into())).unwrap();

        let err = state.apply(QuizIntent::Start).unwrap_err();

        assert_eq!(err, TransitionError::BlankTopic);
        assert_eq!(state.status(), QuizStatus::Idle);
        assert_eq!(state.pending_request(), None);
        assert_eq!(state.error(), Some("Please enter a topic for the quiz."));
    }

    #[test]
    fn overlong_topic_is_rejected_with_message() {
        let mut state = QuizState::new();
        let raw = "a".repeat(MAX_TOPIC_CHARS + 1);
        state.apply(QuizIntent::EditTopic(raw.clone())).unwrap();

        let err = state.apply(QuizIntent::Start).unwrap_err();

        assert_eq!(
            err,
            TransitionError::TopicTooLong {
                len: MAX_TOPIC_CHARS + 1
            }
        );
        assert_eq!(state.status(), QuizStatus::Idle);
        assert_eq!(state.pending_request(), None);
        assert_eq!(state.topic(), raw);
        let message = state.error().expect("rejection should be reported");
        assert!(message.contains("200"), "unexpected message: {message}");

        // Fixing the topic clears the message on the next start.
        state.apply(QuizIntent::EditTopic("Ratios".into())).unwrap();
        state.apply(QuizIntent::Start).unwrap();
        assert_eq!(state.error(), None);
    }

    #[test]
    fn start_clears_previous_error() {
        let (mut state, request) = started("Angles");
        state
            .apply(QuizIntent::GenerationFailed {
                request: request.id,
                message: "boom".into(),
            })
            .unwrap();
        assert_eq!(state.error(), Some("boom"));
        assert_eq!(state.status(), QuizStatus::Idle);

        state.apply(QuizIntent::Start).unwrap();
        assert_eq!(state.error(), None);
        assert_eq!(state.status(), QuizStatus::Loading);
    }

    #[test]
    fn success_seeds_quiz_with_unanswered_slots() {
        let state = in_quiz(&[0, 1, 2]);

        assert_eq!(state.status(), QuizStatus::Quiz);
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.user_answers(), &[None, None, None]);
        assert_eq!(state.current_question().unwrap().question(), "Q0");
        assert_answers_sized(&state);
    }

    #[test]
    fn empty_question_set_returns_to_idle_with_error() {
        let (mut state, request) = started("Sets");
        state
            .apply(QuizIntent::GenerationSucceeded {
                request: request.id,
                questions: Vec::new(),
            })
            .unwrap();

        assert_eq!(state.status(), QuizStatus::Idle);
        assert!(state.error().is_some());
        assert!(state.questions().is_empty());
    }

    #[test]
    fn answer_is_kept_when_navigating_away_and_back() {
        let mut state = in_quiz(&[0, 1, 2]);

        state.apply(QuizIntent::SelectAnswer(3)).unwrap();
        state.apply(QuizIntent::SelectAnswer(2)).unwrap();
        state.apply(QuizIntent::Next).unwrap();
        assert_eq!(state.selected_answer(), None);
        state.apply(QuizIntent::Previous).unwrap();

        assert_eq!(state.current_index(), 0);
        assert_eq!(state.selected_answer(), Some(2));
    }

    #[test]
    fn select_answer_out_of_range_is_rejected() {
        let mut state = in_quiz(&[0]);
        let before = state.clone();

        let err = state.apply(QuizIntent::SelectAnswer(4)).unwrap_err();

        assert_eq!(err, TransitionError::AnswerOutOfRange { index: 4 });
        assert_eq!(state, before);
    }

    #[test]
    fn previous_on_first_question_is_noop() {
        let mut state = in_quiz(&[0, 1]);
        state.apply(QuizIntent::Previous).unwrap();
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.status(), QuizStatus::Quiz);
    }

    #[test]
    fn next_on_last_question_moves_to_result() {
        let mut state = in_quiz(&[0, 1]);
        state.apply(QuizIntent::Next).unwrap();
        assert_eq!(state.current_index(), 1);
        assert!(state.is_last());

        state.apply(QuizIntent::Next).unwrap();
        assert_eq!(state.status(), QuizStatus::Result);
        assert_answers_sized(&state);
    }

    #[test]
    fn score_counts_matching_answers() {
        let mut state = in_quiz(&[0, 1, 2]);
        for answer in [0, 2, 2] {
            state.apply(QuizIntent::SelectAnswer(answer)).unwrap();
            state.apply(QuizIntent::Next).unwrap();
        }

        assert_eq!(state.status(), QuizStatus::Result);
        assert_eq!(state.score(), 2);
    }

    #[test]
    fn reset_restores_initial_snapshot() {
        let mut state = in_quiz(&[1]);
        state.apply(QuizIntent::SelectAnswer(1)).unwrap();
        state.apply(QuizIntent::Next).unwrap();

        state.apply(QuizIntent::Reset).unwrap();

        assert_eq!(state.snapshot(), QuizState::new().snapshot());
        assert_eq!(state.snapshot().current_index, 0);
        assert!(state.snapshot().topic.is_empty());
    }

    #[test]
    fn reset_outside_result_is_rejected() {
        let mut state = in_quiz(&[1]);
        let err = state.apply(QuizIntent::Reset).unwrap_err();
        assert_eq!(
            err,
            TransitionError::InvalidStatus {
                intent: "reset",
                status: QuizStatus::Quiz,
            }
        );
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_request() {
        let (mut state, first) = started("Triangles");
        let second = state
            .start_with("Circles")
            .unwrap()
            .generation_request()
            .cloned()
            .unwrap();
        assert!(second.id > first.id);

        let err = state
            .apply(QuizIntent::GenerationSucceeded {
                request: first.id,
                questions: vec![question(0)],
            })
            .unwrap_err();
        assert_eq!(err, TransitionError::StaleResponse { request: first.id });
        assert_eq!(state.status(), QuizStatus::Loading);
        assert_eq!(state.topic(), "Circles");

        let err = state
            .apply(QuizIntent::GenerationFailed {
                request: first.id,
                message: "late".into(),
            })
            .unwrap_err();
        assert!(matches!(err, TransitionError::StaleResponse { .. }));
        assert_eq!(state.error(), None);

        state
            .apply(QuizIntent::GenerationSucceeded {
                request: second.id,
                questions: vec![question(3), question(2)],
            })
            .unwrap();
        assert_eq!(state.questions().len(), 2);
    }

    #[test]
    fn request_ids_stay_unique_across_reset() {
        let mut state = in_quiz(&[0]);
        state.apply(QuizIntent::Next).unwrap();
        state.apply(QuizIntent::Reset).unwrap();

        let effect = state.start_with("Again").unwrap();
        let request = effect.generation_request().unwrap();
        assert_eq!(request.id, RequestId::new(2));
    }

    #[test]
    fn quiz_intents_are_rejected_while_idle() {
        let mut state = QuizState::new();
        for intent in [
            QuizIntent::SelectAnswer(0),
            QuizIntent::Next,
            QuizIntent::Previous,
            QuizIntent::Reset,
        ] {
            assert!(matches!(
                state.apply(intent),
                Err(TransitionError::InvalidStatus { .. })
            ));
        }
        assert_eq!(state, QuizState::new());
    }

    #[test]
    fn edit_topic_is_rejected_during_quiz() {
        let mut state = in_quiz(&[0]);
        assert!(state.apply(QuizIntent::EditTopic("x".into())).is_err());
        assert_eq!(state.topic(), "Fractions");
    }

    #[test]
    fn pure_transition_ignores_rejected_intents() {
        let state = QuizState::new();
        let (state, effect) = transition(state, QuizIntent::Next);
        assert_eq!(effect, QuizEffect::None);
        assert_eq!(state, QuizState::new());

        let (state, _) = transition(state, QuizIntent::EditTopic("Ratios".into()));
        let (state, effect) = transition(state, QuizIntent::Start);
        assert!(matches!(effect, QuizEffect::Generate(_)));
        assert_eq!(state.status(), QuizStatus::Loading);
    }

    #[test]
    fn progress_tracks_cursor() {
        let mut state = in_quiz(&[0, 1, 2, 3]);
        state.apply(QuizIntent::SelectAnswer(0)).unwrap();
        state.apply(QuizIntent::Next).unwrap();

        let progress = state.progress();
        assert_eq!(progress.number, 2);
        assert_eq!(progress.total, 4);
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.percent, 50);
    }
}
