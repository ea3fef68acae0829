use dioxus::prelude::*;
use quiz_core::QuizIntent;

use crate::vm::{QuestionReviewVm, ScoreSummaryVm};

#[component]
pub fn ScoreSummaryView(vm: ScoreSummaryVm, on_intent: EventHandler<QuizIntent>) -> Element {
    // Local display toggle; not part of the quiz session.
    let mut show_explanations = use_signal(|| false);
    let toggle_label = if show_explanations() {
        "Hide answers"
    } else {
        "Show detailed answers"
    };

    rsx! {
        div { class: "card summary-card",
            header { class: "summary-header {vm.grade_class}",
                h2 { "{vm.title}" }
                p { "{vm.message}" }
                div { class: "summary-score", "{vm.correct}/{vm.total}" }
                p { class: "muted", "{vm.percent}% correct" }
            }
            div { class: "summary-actions",
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Reset),
                    "New quiz"
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| show_explanations.toggle(),
                    "{toggle_label}"
                }
            }
            if show_explanations() {
                div { class: "reviews",
                    for review in vm.reviews.iter().cloned() {
                        ReviewItem { key: "{review.number}", review: review }
                    }
                }
            }
        }
    }
}

#[component]
fn ReviewItem(review: QuestionReviewVm) -> Element {
    rsx! {
        div { class: "review {review.outcome_class}",
            p { class: "review-question", "{review.number}. {review.question}" }
            p { class: "review-outcome", "{review.outcome_label}" }
            dl {
                dt { "Your answer" }
                dd { "{review.your_answer}" }
                dt { "Correct answer" }
                dd { "{review.correct_answer}" }
            }
            div { class: "review-explanation", "{review.explanation}" }
        }
    }
}
