use dioxus::prelude::*;
use quiz_core::QuizIntent;

use crate::vm::QuizCardVm;

#[component]
pub fn QuizCardView(vm: QuizCardVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let next_label = vm.next_label();
    let options = vm.options.iter().cloned().map(|option| {
        let index = option.index;
        let class = if option.selected {
            "option option--selected"
        } else {
            "option"
        };
        rsx! {
            button {
                key: "{index}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| on_intent.call(QuizIntent::SelectAnswer(index)),
                span { class: "option-label", "{option.label}" }
                span { class: "option-text", "{option.text}" }
            }
        }
    });

    rsx! {
        div { class: "card quiz-card",
            div { class: "progress",
                div { class: "progress-bar", style: "width: {vm.percent}%" }
            }
            div { class: "quiz-meta",
                span { class: "question-counter", "Question {vm.number} / {vm.total}" }
                span { class: "muted", "{vm.answered} answered" }
            }
            h2 { class: "question-text", "{vm.question}" }
            div { class: "options",
                {options}
            }
            div { class: "quiz-nav",
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    disabled: vm.is_first,
                    onclick: move |_| on_intent.call(QuizIntent::Previous),
                    "Back"
                }
                button {
                    class: "btn btn-primary",
                    r#type: "button",
                    onclick: move |_| on_intent.call(QuizIntent::Next),
                    "{next_label}"
                }
            }
        }
    }
}
