use dioxus::prelude::*;
use quiz_core::QuizIntent;
use quiz_core::model::MAX_TOPIC_CHARS;

use crate::vm::TopicFormVm;

#[component]
pub fn TopicFormView(vm: TopicFormVm, on_intent: EventHandler<QuizIntent>) -> Element {
    let disabled = !vm.can_submit;

    rsx! {
        div { class: "card topic-card",
            h2 { class: "card-title", "Enter a lesson topic" }
            form {
                class: "topic-form",
                onsubmit: move |evt: FormEvent| {
                    evt.prevent_default();
                    on_intent.call(QuizIntent::Start);
                },
                label { r#for: "topic-input", "Math topic" }
                input {
                    id: "topic-input",
                    r#type: "text",
                    value: "{vm.topic}",
                    placeholder: "e.g. Pythagorean theorem, linear equations...",
                    maxlength: "{MAX_TOPIC_CHARS}",
                    oninput: move |evt: FormEvent| on_intent.call(QuizIntent::EditTopic(evt.value())),
                }
                p { class: "hint", "Tip: name a chapter or a specific lesson for the most accurate questions." }
                if let Some(error) = vm.error.as_ref() {
                    div { class: "error-banner", "{error}" }
                }
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: disabled,
                    "Generate 10 questions"
                }
            }
        }
    }
}
