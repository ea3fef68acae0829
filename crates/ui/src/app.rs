use dioxus::prelude::*;
use quiz_core::{QuizEffect, QuizIntent, QuizState, QuizStatus, ScoreReport};

use crate::context::AppContext;
use crate::views::{LoadingView, QuizCardView, ScoreSummaryView, TopicFormView};
use crate::vm::{map_quiz_card, map_score_summary, map_topic_form};

const STYLE: &str = r"
body { margin: 0; font-family: system-ui, sans-serif; background: #f8fafc; color: #1f2937; }
.app-root { min-height: 100vh; display: flex; flex-direction: column; align-items: center; padding: 48px 16px; }
.app-header { text-align: center; margin-bottom: 32px; }
.card { background: #fff; border-radius: 24px; box-shadow: 0 10px 30px rgba(15, 23, 42, 0.08); padding: 32px; width: 100%; max-width: 640px; box-sizing: border-box; }
.topic-form { display: flex; flex-direction: column; gap: 12px; }
.topic-form input { padding: 12px 16px; border-radius: 12px; border: 2px solid #e5e7eb; font-size: 1.1rem; }
.hint, .muted { color: #9ca3af; font-size: 0.85rem; }
.error-banner { background: #fef2f2; color: #dc2626; border: 1px solid #fee2e2; padding: 12px; border-radius: 12px; }
.btn { border: none; border-radius: 12px; padding: 12px 20px; font-weight: 700; cursor: pointer; }
.btn:disabled { opacity: 0.4; cursor: not-allowed; }
.btn-primary { background: #2563eb; color: #fff; }
.btn-secondary { background: #f3f4f6; color: #374151; }
.progress { height: 6px; background: #e5e7eb; border-radius: 3px; overflow: hidden; margin-bottom: 16px; }
.progress-bar { height: 100%; background: #2563eb; }
.options { display: flex; flex-direction: column; gap: 10px; margin: 20px 0; }
.option { display: flex; gap: 12px; align-items: center; text-align: left; padding: 14px; border-radius: 14px; border: 2px solid #f3f4f6; background: #fff; cursor: pointer; }
.option--selected { border-color: #2563eb; background: #eff6ff; }
.option-label { font-weight: 800; }
.quiz-meta { display: flex; justify-content: space-between; align-items: baseline; }
.quiz-nav, .summary-actions { display: flex; justify-content: space-between; gap: 12px; }
.summary-header { text-align: center; margin-bottom: 24px; }
.summary-score { font-size: 3rem; font-weight: 900; }
.grade--perfect h2 { color: #16a34a; }
.grade--great h2 { color: #2563eb; }
.grade--fair h2 { color: #ca8a04; }
.grade--low h2 { color: #dc2626; }
.review { border-left: 4px solid #e5e7eb; padding: 8px 16px; margin-top: 16px; }
.review--correct { border-color: #16a34a; }
.review--incorrect { border-color: #dc2626; }
.review-explanation { background: #f9fafb; padding: 12px; border-radius: 8px; white-space: pre-wrap; }
.spinner { width: 48px; height: 48px; border: 4px solid #dbeafe; border-top-color: #2563eb; border-radius: 50%; margin: 0 auto 16px; animation: spin 1s linear infinite; }
@keyframes spin { to { transform: rotate(360deg); } }
";

#[component]
pub fn App() -> Element {
    let ctx = use_context::<AppContext>();
    let name = ctx.app_name().to_string();

    rsx! {
        // Stable OS/window title.
        document::Title { "{name}" }
        style { "{STYLE}" }

        div { class: "app-root",
            header { class: "app-header",
                h1 { "{name}" }
                p { class: "muted", "Multiple-choice math quizzes generated on any topic" }
            }
            main {
                QuizScreen { initial: QuizState::new() }
            }
        }
    }
}

/// Renders the current phase and routes every user action through one dispatcher.
#[component]
pub fn QuizScreen(initial: QuizState) -> Element {
    let ctx = use_context::<AppContext>();
    let mut state = use_signal(|| initial);

    let quiz_loop = ctx.quiz_loop();
    let dispatch = use_callback(move |intent: QuizIntent| {
        let effect = quiz_loop.dispatch(&mut state.write(), intent);
        if let Ok(QuizEffect::Generate(request)) = effect {
            let quiz_loop = quiz_loop.clone();
            spawn(async move {
                let completion = quiz_loop.run(request).await;
                // A stale completion is rejected by the state machine and ignored here.
                let _ = quiz_loop.dispatch(&mut state.write(), completion);
            });
        }
    });

    let current = state.read();
    match current.status() {
        QuizStatus::Idle => {
            let vm = map_topic_form(&current);
            rsx! { TopicFormView { vm: vm, on_intent: dispatch } }
        }
        QuizStatus::Loading => {
            let topic = current.topic().to_string();
            rsx! { LoadingView { topic: topic } }
        }
        QuizStatus::Quiz => match map_quiz_card(&current) {
            Some(vm) => rsx! { QuizCardView { vm: vm, on_intent: dispatch } },
            None => rsx! {},
        },
        QuizStatus::Result => {
            let vm = map_score_summary(&ScoreReport::from_state(&current));
            rsx! { ScoreSummaryView { vm: vm, on_intent: dispatch } }
        }
    }
}
