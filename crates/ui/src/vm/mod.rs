mod quiz_card_vm;
mod score_summary_vm;
mod topic_form_vm;

pub use quiz_card_vm::{AnswerOptionVm, QuizCardVm, map_quiz_card};
pub use score_summary_vm::{QuestionReviewVm, ScoreSummaryVm, map_score_summary};
pub use topic_form_vm::{TopicFormVm, map_topic_form};
