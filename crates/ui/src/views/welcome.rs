use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

const FLOATING: [&str; 4] = ["⭐", "🌈", "🎈", "✨"];

#[component]
pub fn WelcomeView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "welcome",
            div { class: "welcome__floaters",
                for (idx, emoji) in FLOATING.iter().enumerate() {
                    span { key: "{idx}", class: "floater floater--{idx}", "{emoji}" }
                }
            }
            div { class: "welcome__mascot", "🤖" }
            h1 { class: "welcome__title", "Learning Buddy" }
            p { class: "welcome__subtitle", "Your fun learning companion!" }
            button {
                class: "welcome__start",
                id: "start-learning",
                r#type: "button",
                onclick: move |_| {
                    tracing::debug!("start learning");
                    let _ = navigator.push(Route::Objects {});
                },
                "▶ Start Learning!"
            }
            p { class: "welcome__tagline", "Explore and learn together! 🌟" }
        }
    }
}
