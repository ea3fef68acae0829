use dioxus::prelude::*;

#[component]
pub fn LoadingView(topic: String) -> Element {
    rsx! {
        div { class: "card loading-card",
            div { class: "spinner" }
            h3 { "Designing your quiz..." }
            p { class: "muted", "Picking the best questions on \"{topic}\"." }
        }
    }
}
