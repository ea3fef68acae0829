use std::sync::Arc;

use async_trait::async_trait;
use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use quiz_core::QuizState;
use services::{BackendRequest, GenerationBackend, GenerationConfig, QuizGenerationError, QuizLoopService};

use crate::app::QuizScreen;
use crate::context::{UiApp, build_app_context};

/// Backend that never answers with content; views under test never reach it.
struct SilentBackend;

#[async_trait]
impl GenerationBackend for SilentBackend {
    async fn complete(
        &self,
        _config: &GenerationConfig,
        _api_key: &str,
        _request: &BackendRequest,
    ) -> Result<Option<String>, QuizGenerationError> {
        Ok(None)
    }
}

struct TestApp {
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn app_name(&self) -> &str {
        "Quiz Test"
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Props, Clone)]
struct ScreenHarnessProps {
    app: Arc<TestApp>,
    initial: QuizState,
}

impl PartialEq for ScreenHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ScreenHarness(props: ScreenHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    rsx! { QuizScreen { initial: props.initial.clone() } }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        self.dom.process_events();
        self.dom.render_immediate(&mut NoOpMutations);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn setup_view_harness(initial: QuizState) -> ViewHarness {
    let config = GenerationConfig::default().with_api_key("test-key");
    let quiz_loop = Arc::new(QuizLoopService::with_backend(Arc::new(SilentBackend), config));
    let app = Arc::new(TestApp { quiz_loop });

    let dom = VirtualDom::new_with_props(ScreenHarness, ScreenHarnessProps { app, initial });
    let mut harness = ViewHarness { dom };
    harness.rebuild();
    harness
}
