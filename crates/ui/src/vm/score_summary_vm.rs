use quiz_core::model::option_label;
use quiz_core::{QuestionReview, ReviewOutcome, ScoreGrade, ScoreReport};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionReviewVm {
    pub number: usize,
    pub question: String,
    pub outcome_class: &'static str,
    pub outcome_label: &'static str,
    pub your_answer: String,
    pub correct_answer: String,
    pub explanation: String,
}

impl From<&QuestionReview> for QuestionReviewVm {
    fn from(review: &QuestionReview) -> Self {
        let (outcome_class, outcome_label) = match review.outcome {
            ReviewOutcome::Correct => ("review--correct", "Correct"),
            ReviewOutcome::Incorrect => ("review--incorrect", "Incorrect"),
            ReviewOutcome::Unanswered => ("review--unanswered", "Not answered"),
        };
        let your_answer = match (review.selected, review.selected_text.as_deref()) {
            (Some(index), Some(text)) => format!("{}. {text}", option_label(index)),
            _ => "-".to_string(),
        };

        Self {
            number: review.number,
            question: review.question.clone(),
            outcome_class,
            outcome_label,
            your_answer,
            correct_answer: format!(
                "{}. {}",
                option_label(review.correct_index),
                review.correct_text
            ),
            explanation: review.explanation.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreSummaryVm {
    pub correct: usize,
    pub total: usize,
    pub percent: u8,
    pub title: &'static str,
    pub message: &'static str,
    pub grade_class: &'static str,
    pub reviews: Vec<QuestionReviewVm>,
}

#[must_use]
pub fn map_score_summary(report: &ScoreReport) -> ScoreSummaryVm {
    let grade = report.grade();
    let grade_class = match grade {
        ScoreGrade::Perfect => "grade--perfect",
        ScoreGrade::Great => "grade--great",
        ScoreGrade::Fair => "grade--fair",
        ScoreGrade::KeepPracticing => "grade--low",
    };

    ScoreSummaryVm {
        correct: report.correct(),
        total: report.total(),
        percent: report.percent(),
        title: grade.title(),
        message: grade.message(),
        grade_class,
        reviews: report.reviews().iter().map(QuestionReviewVm::from).collect(),
    }
}
