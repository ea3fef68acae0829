use quiz_core::QuizState;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicFormVm {
    pub topic: String,
    pub error: Option<String>,
    pub can_submit: bool,
}

/// Length limits are left to `Start`, which reports them through `error`.
#[must_use]
pub fn map_topic_form(state: &QuizState) -> TopicFormVm {
    TopicFormVm {
        topic: state.topic().to_string(),
        error: state.error().map(str::to_string),
        can_submit: !state.topic().trim().is_empty(),
    }
}
