#![forbid(unsafe_code)]

pub mod model;
pub mod quiz;
pub mod score;

pub use quiz::{
    GenerationRequest, QuizEffect, QuizIntent, QuizProgress, QuizSnapshot, QuizState, QuizStatus,
    RequestId, TransitionError, transition,
};
pub use score::{QuestionReview, ReviewOutcome, ScoreGrade, ScoreReport};
