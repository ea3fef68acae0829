mod intent;
mod progress;
mod state;

// Public API of the quiz state machine.
pub use intent::{GenerationRequest, QuizEffect, QuizIntent, RequestId};
pub use progress::QuizProgress;
pub use state::{QuizSnapshot, QuizState, QuizStatus, TransitionError, transition};
