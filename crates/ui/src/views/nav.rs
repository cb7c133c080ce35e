use dioxus::prelude::*;
use dioxus_router::{Link, use_navigator};

use crate::routes::{Route, Screen};

#[component]
pub fn BottomNav(current: Screen) -> Element {
    rsx! {
        nav { class: "bottom-nav",
            for screen in Screen::ALL {
                Link {
                    key: "{screen.slug()}",
                    class: if screen == current { "nav-item nav-item--active" } else { "nav-item" },
                    to: screen.route(),
                    span { class: "nav-item__icon", "{screen.icon()}" }
                    span { class: "nav-item__label", "{screen.label()}" }
                }
            }
        }
    }
}

/// Header row shared by every activity screen, with an optional badge on the right.
#[component]
pub fn ScreenHeader(title: &'static str, badge: Option<String>) -> Element {
    let navigator = use_navigator();

    rsx! {
        header { class: "screen-header",
            button {
                class: "back-button",
                r#type: "button",
                onclick: move |_| {
                    let _ = navigator.push(Route::Welcome {});
                },
                "← Back"
            }
            h2 { class: "screen-header__title", "{title}" }
            if let Some(badge) = badge {
                div { class: "screen-header__badge", "{badge}" }
            } else {
                div { class: "screen-header__badge screen-header__badge--empty" }
            }
        }
    }
}
