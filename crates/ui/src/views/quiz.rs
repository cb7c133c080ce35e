#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_router::use_navigator;

use buddy_core::model::OptionId;
#[cfg(test)]
use services::QuizFlow;

use crate::context::AppContext;
use crate::routes::Route;
use crate::views::nav::ScreenHeader;
use crate::views::state::ViewError;
use crate::views::timers::sleep_until;
use crate::vm::{QuizCompletionVm, QuizScreenVm, map_quiz_screen};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuizIntent {
    Select(OptionId),
    Advance,
    Restart,
}

#[component]
pub fn QuizView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let mut flow = use_signal(|| ctx.quiz_flow().map_err(|_| ViewError::EmptyQuiz));
    let mut rng = use_signal(|| ctx.rng());

    let dispatch = use_callback(move |intent: QuizIntent| {
        let mut guard = flow.write();
        let Ok(quiz) = guard.as_mut() else {
            return;
        };

        match intent {
            QuizIntent::Select(option_id) => {
                let now = clock.now();
                let outcome = {
                    let mut rng = rng.write();
                    quiz.select(option_id, now, &mut *rng)
                };
                if !outcome.is_correct() {
                    return;
                }
                let Some(ends_at) = quiz.celebration(now).map(|celebration| celebration.ends_at())
                else {
                    return;
                };
                drop(guard);
                spawn(async move {
                    if !sleep_until(clock, ends_at).await {
                        return;
                    }
                    if let Ok(quiz) = flow.write().as_mut() {
                        quiz.expire_celebration(clock.now());
                    }
                });
            }
            QuizIntent::Advance => {
                quiz.advance();
            }
            QuizIntent::Restart => quiz.reset(),
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<QuizTestHandles>() {
                handles.register(dispatch, flow);
            }
        }
    }

    let vm = match &*flow.read() {
        Ok(quiz) => Ok(map_quiz_screen(quiz, clock.now())),
        Err(err) => Err(*err),
    };
    let vm = match vm {
        Ok(vm) => vm,
        Err(err) => {
            return rsx! {
                div { class: "quiz",
                    ScreenHeader { title: "Fun Quiz" }
                    p { class: "view-error", "{err}" }
                }
            };
        }
    };

    if let Some(completion) = vm.completion.clone() {
        return rsx! {
            QuizComplete { completion, on_restart: move |()| dispatch.call(QuizIntent::Restart) }
        };
    }

    rsx! { QuizQuestion { vm, dispatch } }
}

#[component]
fn QuizQuestion(vm: QuizScreenVm, dispatch: Callback<QuizIntent>) -> Element {
    rsx! {
        div { class: "quiz",
            div { class: "confetti",
                for star in vm.confetti.iter() {
                    span { key: "{star.key}", class: "confetti__star", style: "{star.style}", "⭐" }
                }
            }

            ScreenHeader { title: "Fun Quiz", badge: format!("🏆 {}", vm.score_label) }

            div { class: "quiz__progress",
                div { class: "quiz__progress-labels",
                    span { "{vm.question_label}" }
                    span { "{vm.position_label}" }
                }
                div { class: "progress",
                    div { class: "progress__fill", style: "{vm.progress_style}" }
                }
            }

            div { class: "card quiz__prompt",
                h3 { "{vm.prompt}" }
            }

            div { class: "quiz__options",
                for option in vm.options.iter() {
                    button {
                        key: "{option.id}",
                        class: "{option.class}",
                        r#type: "button",
                        disabled: option.disabled,
                        onclick: {
                            let option_id = OptionId::new(option.id);
                            move |_| dispatch.call(QuizIntent::Select(option_id))
                        },
                        span { class: "quiz-option__emoji", "{option.emoji}" }
                        span { class: "quiz-option__label", "{option.label}" }
                    }
                }
            }

            if let Some(feedback) = vm.feedback.as_ref() {
                div { class: "{feedback.class}",
                    div { class: "quiz-feedback__emoji", "{feedback.emoji}" }
                    p { class: "quiz-feedback__message", "{feedback.message}" }
                    button {
                        class: "quiz-feedback__next",
                        id: "quiz-advance",
                        r#type: "button",
                        onclick: move |_| dispatch.call(QuizIntent::Advance),
                        "{feedback.advance_label}"
                    }
                }
            }
        }
    }
}

#[component]
fn QuizComplete(completion: QuizCompletionVm, on_restart: EventHandler<()>) -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "quiz quiz--complete",
            div { class: "card quiz-complete",
                div { class: "quiz-complete__emoji", "🎉" }
                h2 { "Great Job!" }
                p { class: "quiz-complete__message", "{completion.message}" }
                div { class: "quiz-complete__stars",
                    for (idx, class) in completion.stars.iter().enumerate() {
                        span { key: "{idx}", class: "{class}", "⭐" }
                    }
                }
                div { class: "quiz-complete__actions",
                    button {
                        class: "quiz-complete__retry",
                        id: "quiz-retry",
                        r#type: "button",
                        onclick: move |_| on_restart.call(()),
                        "🔄 Try Again"
                    }
                    button {
                        class: "quiz-complete__menu",
                        r#type: "button",
                        onclick: move |_| {
                            let _ = navigator.push(Route::Welcome {});
                        },
                        "Back to Menu"
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct QuizTestHandles {
    dispatch: Rc<RefCell<Option<Callback<QuizIntent>>>>,
    flow: Rc<RefCell<Option<Signal<Result<QuizFlow, ViewError>>>>>,
}

#[cfg(test)]
impl QuizTestHandles {
    pub(crate) fn register(
        &self,
        dispatch: Callback<QuizIntent>,
        flow: Signal<Result<QuizFlow, ViewError>>,
    ) {
        *self.dispatch.borrow_mut() = Some(dispatch);
        *self.flow.borrow_mut() = Some(flow);
    }

    pub(crate) fn dispatch(&self) -> Callback<QuizIntent> {
        (*self.dispatch.borrow()).expect("quiz dispatch registered")
    }

    pub(crate) fn score(&self) -> Option<u32> {
        let flow = (*self.flow.borrow()).expect("quiz flow registered");
        let guard = flow.read();
        guard.as_ref().ok().map(|quiz| quiz.engine().score())
    }
}
