mod loading;
mod quiz_card;
mod score_summary;
mod topic_form;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use loading::LoadingView;
pub use quiz_card::QuizCardView;
pub use score_summary::ScoreSummaryView;
pub use topic_form::TopicFormView;
