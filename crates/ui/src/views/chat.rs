#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;

use services::MicOutcome;
#[cfg(test)]
use services::VoiceChat;

use crate::context::AppContext;
use crate::views::nav::ScreenHeader;
use crate::views::state::ViewError;
use crate::views::timers::sleep_until;
use crate::vm::{map_bubbles, map_mic};

#[component]
pub fn ChatView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let mut chat = use_signal(|| ctx.voice_chat().map_err(|_| ViewError::NoChatLines));
    let mut rng = use_signal(|| ctx.rng());

    let toggle_mic = use_callback(move |()| {
        let outcome = {
            let mut guard = chat.write();
            let Ok(chat) = guard.as_mut() else {
                return;
            };
            let mut rng = rng.write();
            chat.toggle_microphone(clock.now(), &mut *rng)
        };

        if let MicOutcome::Sent { reply_at } = outcome {
            spawn(async move {
                if !sleep_until(clock, reply_at).await {
                    return;
                }
                if let Ok(chat) = chat.write().as_mut() {
                    let mut rng = rng.write();
                    let delivered = chat.poll(clock.now(), &mut *rng);
                    tracing::debug!(delivered, "buddy replied");
                }
            });
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ChatTestHandles>() {
                handles.register(toggle_mic, chat);
            }
        }
    }

    let snapshot = match &*chat.read() {
        Ok(chat) => Ok((map_bubbles(chat.transcript()), map_mic(chat.is_recording()))),
        Err(err) => Err(*err),
    };
    let (bubbles, mic) = match snapshot {
        Ok(snapshot) => snapshot,
        Err(err) => {
            return rsx! {
                div { class: "chat",
                    ScreenHeader { title: "Voice Chat" }
                    p { class: "view-error", "{err}" }
                }
            };
        }
    };

    rsx! {
        div { class: "chat",
            ScreenHeader { title: "Voice Chat" }

            div { class: "chat__transcript",
                for bubble in bubbles {
                    div { key: "{bubble.key}", class: "{bubble.class}",
                        p { class: "bubble__text", "{bubble.text}" }
                        if bubble.show_buddy_tag {
                            span { class: "bubble__speaker", "❤️ Learning Buddy" }
                        }
                    }
                }
                if mic.recording {
                    div { class: "bubble bubble--listening",
                        span { class: "dots", "•••" }
                        span { "Listening..." }
                    }
                }
            }

            div { class: "chat__controls",
                if mic.recording {
                    span { class: "recording-pill", "● Recording" }
                }
                button {
                    class: "{mic.class}",
                    id: "mic-toggle",
                    r#type: "button",
                    onclick: move |_| toggle_mic.call(()),
                    "{mic.icon}"
                }
                p { class: "chat__hint", "{mic.hint}" }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ChatTestHandles {
    toggle: Rc<RefCell<Option<Callback<()>>>>,
    chat: Rc<RefCell<Option<Signal<Result<VoiceChat, ViewError>>>>>,
}

#[cfg(test)]
impl ChatTestHandles {
    pub(crate) fn register(&self, toggle: Callback<()>, chat: Signal<Result<VoiceChat, ViewError>>) {
        *self.toggle.borrow_mut() = Some(toggle);
        *self.chat.borrow_mut() = Some(chat);
    }

    pub(crate) fn toggle(&self) -> Callback<()> {
        (*self.toggle.borrow()).expect("mic callback registered")
    }

    /// Transcript length and queued replies.
    pub(crate) fn counts(&self) -> Option<(usize, usize)> {
        let chat = (*self.chat.borrow()).expect("chat registered");
        let guard = chat.read();
        guard
            .as_ref()
            .ok()
            .map(|chat| (chat.transcript().len(), chat.pending_replies()))
    }
}
