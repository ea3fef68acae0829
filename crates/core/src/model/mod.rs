mod question;
mod topic;

pub use question::{OPTION_COUNT, Question, QuestionError, QuestionRecord, option_label};
pub use topic::{MAX_TOPIC_CHARS, Topic, TopicError};
