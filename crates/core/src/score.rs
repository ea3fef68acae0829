use crate::model::Question;
use crate::quiz::QuizState;

/// Score band shown on the results screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreGrade {
    Perfect,
    Great,
    Fair,
    KeepPracticing,
}

impl ScoreGrade {
    #[must_use]
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            100.. => Self::Perfect,
            80..=99 => Self::Great,
            50..=79 => Self::Fair,
            _ => Self::KeepPracticing,
        }
    }

    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Perfect => "Excellent!",
            Self::Great => "Very good!",
            Self::Fair => "Not bad!",
            Self::KeepPracticing => "Keep going!",
        }
    }

    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::Perfect => "A perfect score. You have mastered this topic.",
            Self::Great => "You have a solid grasp of this topic.",
            Self::Fair => "A little more practice will get you there.",
            Self::KeepPracticing => "Review this topic and try another quiz.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewOutcome {
    Correct,
    Incorrect,
    Unanswered,
}

/// Per-question line of the results breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionReview {
    /// 1-based.
    pub number: usize,
    pub question: String,
    pub selected: Option<usize>,
    pub selected_text: Option<String>,
    pub correct_index: usize,
    pub correct_text: String,
    pub explanation: String,
    pub outcome: ReviewOutcome,
}

/// Score derived from recorded answers; never stored on the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreReport {
    correct: usize,
    total: usize,
    percent: u8,
    grade: ScoreGrade,
    reviews: Vec<QuestionReview>,
}

impl ScoreReport {
    /// Score `answers` against `questions` position by position.
    ///
    /// Missing answer slots count as unanswered.
    #[must_use]
    pub fn new(questions: &[Question], answers: &[Option<usize>]) -> Self {
        let reviews: Vec<QuestionReview> = questions
            .iter()
            .enumerate()
            .map(|(idx, question)| {
                let selected = answers.get(idx).copied().flatten();
                let outcome = match selected {
                    None => ReviewOutcome::Unanswered,
                    Some(i) if question.is_correct(i) => ReviewOutcome::Correct,
                    Some(_) => ReviewOutcome::Incorrect,
                };
                QuestionReview {
                    number: idx + 1,
                    question: question.question().to_string(),
                    selected,
                    selected_text: selected
                        .and_then(|i| question.option(i))
                        .map(str::to_string),
                    correct_index: question.correct_answer_index(),
                    correct_text: question.correct_option().to_string(),
                    explanation: question.explanation().to_string(),
                    outcome,
                }
            })
            .collect();

        let correct = reviews
            .iter()
            .filter(|r| r.outcome == ReviewOutcome::Correct)
            .count();
        let total = questions.len();
        let percent = if total == 0 {
            0
        } else {
            u8::try_from(correct * 100 / total).unwrap_or(100)
        };

        Self {
            correct,
            total,
            percent,
            grade: ScoreGrade::from_percent(percent),
            reviews,
        }
    }

    #[must_use]
    pub fn from_state(state: &QuizState) -> Self {
        Self::new(state.questions(), state.user_answers())
    }

    #[must_use]
    pub fn correct(&self) -> usize {
        self.correct
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.total
    }

    #[must_use]
    pub fn percent(&self) -> u8 {
        self.percent
    }

    #[must_use]
    pub fn grade(&self) -> ScoreGrade {
        self.grade
    }

    #[must_use]
    pub fn reviews(&self) -> &[QuestionReview] {
        &self.reviews
    }
}
