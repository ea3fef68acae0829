#![forbid(unsafe_code)]

pub mod error;
pub mod generation;
pub mod quiz_loop;

pub use error::{ConfigError, GenerationErrorKind, MalformedResponse, QuizGenerationError};
pub use generation::{
    BackendRequest, GeminiBackend, GenerationBackend, GenerationConfig, PromptSettings,
    QuizGenerator,
};
pub use quiz_loop::QuizLoopService;
