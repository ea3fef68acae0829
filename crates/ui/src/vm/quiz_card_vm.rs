use quiz_core::QuizState;
use quiz_core::model::option_label;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOptionVm {
    pub index: usize,
    pub label: char,
    pub text: String,
    pub selected: bool,
}

/// Everything the question card renders for the cursor position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizCardVm {
    pub number: usize,
    pub total: usize,
    pub percent: u8,
    pub answered: usize,
    pub question: String,
    pub options: Vec<AnswerOptionVm>,
    pub is_first: bool,
    pub is_last: bool,
}

impl QuizCardVm {
    #[must_use]
    pub fn next_label(&self) -> &'static str {
        if self.is_last { "Finish" } else { "Next" }
    }
}

/// Returns `None` unless the state is in the quiz phase.
#[must_use]
pub fn map_quiz_card(state: &QuizState) -> Option<QuizCardVm> {
    let question = state.current_question()?;
    let selected = state.selected_answer();
    let progress = state.progress();

    let options = question
        .options()
        .iter()
        .enumerate()
        .map(|(index, text)| AnswerOptionVm {
            index,
            label: option_label(index),
            text: text.clone(),
            selected: selected == Some(index),
        })
        .collect();

    Some(QuizCardVm {
        number: progress.number,
        total: progress.total,
        percent: progress.percent,
        answered: progress.answered,
        question: question.question().to_string(),
        options,
        is_first: state.is_first(),
        is_last: state.is_last(),
    })
}
