mod choice;
mod matching;
mod question;
mod results;
mod start;
mod text_entry;

use std::sync::Arc;

use dioxus::prelude::*;
use services::QuizLoopService;

use crate::context::AppContext;
use crate::views::ViewError;
use crate::vm::{IntentEffect, QuizIntent, QuizScreen, QuizVm};

use question::QuestionScreen;
use results::ResultsScreen;
use start::StartScreen;

#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let quiz_loop = ctx.quiz_loop();

    let vm = use_signal(|| QuizVm::new(quiz_loop.new_session()));
    let error = use_signal(|| None::<ViewError>);

    let dispatch_intent = {
        let quiz_loop = Arc::clone(&quiz_loop);
        use_callback(move |intent: QuizIntent| {
            let mut vm = vm;
            let mut error = error;
            let result = vm.write().apply(&quiz_loop, intent);
            match result {
                Ok(effect) => {
                    error.set(None);
                    schedule_effect(effect, vm, Arc::clone(&quiz_loop));
                }
                Err(err) => error.set(Some(err)),
            }
        })
    };

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch_intent, vm);
            }
        }
    }

    let vm_guard = vm.read();
    let screen = vm_guard.screen();

    rsx! {
        div { class: "page quiz-page",
            if let Some(err) = *error.read() {
                p { class: "quiz-error", role: "alert", "{err.message()}" }
            }
            match screen {
                QuizScreen::Start => {
                    let set = vm_guard.question_set();
                    rsx! {
                        StartScreen {
                            title: set.title().to_string(),
                            description: set.description().to_string(),
                            total: set.display_total(),
                            time_limit: set.time_limit_minutes(),
                            on_intent: dispatch_intent,
                        }
                    }
                }
                QuizScreen::Question => rsx! {
                    QuestionScreen { vm, on_intent: dispatch_intent }
                },
                QuizScreen::Results => match vm_guard.results() {
                    Some(results) => rsx! {
                        ResultsScreen { results, on_intent: dispatch_intent }
                    },
                    None => rsx! {
                        p { "{ViewError::Unknown.message()}" }
                    },
                },
            }
        }
    }
}

fn schedule_effect(effect: IntentEffect, vm: Signal<QuizVm>, quiz_loop: Arc<QuizLoopService>) {
    match effect {
        IntentEffect::None => {}
        IntentEffect::AutoAdvance(ticket) => {
            spawn(async move {
                quiz_loop.wait_auto_advance().await;
                let mut vm = vm;
                vm.write().redeem(&quiz_loop, ticket);
            });
        }
        IntentEffect::ClearMatchFeedback(seq) => {
            spawn(async move {
                quiz_loop.wait_match_feedback().await;
                let mut vm = vm;
                vm.write().clear_match_feedback(seq);
            });
        }
    }
}

/// Green/red state for an input whose answer has been entered.
fn mark_class(mark: Option<bool>) -> &'static str {
    match mark {
        None => "",
        Some(true) => "is-correct",
        Some(false) => "is-incorrect",
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    vm: Rc<RefCell<Option<Signal<QuizVm>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(&self, dispatch: Callback<QuizIntent>, vm: Signal<QuizVm>) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.vm.borrow_mut() = Some(vm);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn vm(&self) -> Signal<QuizVm> {
        (*self.vm.borrow()).expect("quiz vm registered")
    }
}
