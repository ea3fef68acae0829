mod backend;
mod config;
mod decode;
mod gemini;
mod generator;
mod prompt;

// Public API of the generation subsystem.
pub use backend::{BackendRequest, GenerationBackend};
pub use config::{GenerationConfig, PromptSettings};
pub use decode::decode_questions;
pub use gemini::GeminiBackend;
pub use generator::QuizGenerator;
pub use prompt::{DifficultyBand, QUESTION_COUNT, build_prompt, response_schema};
