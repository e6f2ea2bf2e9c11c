use std::sync::Arc;
use std::time::Duration;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use quiz_core::model::QuestionSet;
use quiz_core::time::fixed_now;
use services::{Clock, QuestionBank, QuizLoopService};

use crate::context::{UiApp, build_app_context};
use crate::views::QuizView;
use crate::views::quiz::QuizTestHandles;
use crate::vm::{QuizIntent, QuizVm};

#[derive(Clone)]
struct TestApp {
    questions: Arc<QuestionSet>,
    quiz_loop: Arc<QuizLoopService>,
}

impl UiApp for TestApp {
    fn question_set(&self) -> Arc<QuestionSet> {
        Arc::clone(&self.questions)
    }

    fn quiz_loop(&self) -> Arc<QuizLoopService> {
        Arc::clone(&self.quiz_loop)
    }
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    handles: QuizTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    rsx! { QuizView {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: QuizTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(Duration::from_millis(50), self.dom.wait_for_work()).await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn dispatch(&mut self, intent: QuizIntent) {
        let dispatch = self.handles.dispatch();
        self.dom.in_runtime(|| dispatch.call(intent));
        drive_dom(&mut self.dom);
    }

    pub fn with_vm<T>(&self, f: impl FnOnce(&QuizVm) -> T) -> T {
        let vm = self.handles.vm();
        self.dom.in_runtime(|| f(&vm.peek()))
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn bundled_questions() -> Arc<QuestionSet> {
    QuestionBank::bundled().expect("bundled questions").questions()
}

pub fn setup_view_harness(questions: Arc<QuestionSet>) -> ViewHarness {
    setup_view_harness_with_delay(questions, Duration::from_millis(10))
}

pub fn setup_view_harness_with_delay(
    questions: Arc<QuestionSet>,
    auto_advance: Duration,
) -> ViewHarness {
    let quiz_loop = QuizLoopService::new(Clock::fixed(fixed_now()), Arc::clone(&questions))
        .with_auto_advance(auto_advance)
        .with_match_feedback(Duration::from_millis(10))
        .with_seed(Some(7));
    let app = Arc::new(TestApp {
        questions,
        quiz_loop: Arc::new(quiz_loop),
    });
    let handles = QuizTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
