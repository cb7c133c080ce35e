use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable, use_route};

use crate::views::{BottomNav, ChatView, ObjectsView, QuizView, RewardsView, WelcomeView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", WelcomeView)] Welcome {},
        #[route("/objects", ObjectsView)] Objects {},
        #[route("/chat", ChatView)] Chat {},
        #[route("/quiz", QuizView)] Quiz {},
        #[route("/rewards", RewardsView)] Rewards {},
}

/// The five screens, in bottom-menu order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Welcome,
    Objects,
    Chat,
    Quiz,
    Rewards,
}

impl Screen {
    pub const ALL: [Screen; 5] = [
        Screen::Welcome,
        Screen::Objects,
        Screen::Chat,
        Screen::Quiz,
        Screen::Rewards,
    ];

    #[must_use]
    pub fn from_route(route: &Route) -> Self {
        match route {
            Route::Welcome {} => Self::Welcome,
            Route::Objects {} => Self::Objects,
            Route::Chat {} => Self::Chat,
            Route::Quiz {} => Self::Quiz,
            Route::Rewards {} => Self::Rewards,
        }
    }

    #[must_use]
    pub fn route(self) -> Route {
        match self {
            Self::Welcome => Route::Welcome {},
            Self::Objects => Route::Objects {},
            Self::Chat => Route::Chat {},
            Self::Quiz => Route::Quiz {},
            Self::Rewards => Route::Rewards {},
        }
    }

    /// Menu label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Welcome => "Home",
            Self::Objects => "Objects",
            Self::Chat => "Chat",
            Self::Quiz => "Quiz",
            Self::Rewards => "Rewards",
        }
    }

    #[must_use]
    pub fn icon(self) -> &'static str {
        match self {
            Self::Welcome => "🏠",
            Self::Objects => "📷",
            Self::Chat => "🎤",
            Self::Quiz => "🧠",
            Self::Rewards => "🏆",
        }
    }

    /// CSS hook, also used for the per-screen color theme.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Welcome => "welcome",
            Self::Objects => "objects",
            Self::Chat => "chat",
            Self::Quiz => "quiz",
            Self::Rewards => "rewards",
        }
    }

    /// The bottom menu is hidden on the welcome screen.
    #[must_use]
    pub fn shows_bottom_nav(self) -> bool {
        self != Self::Welcome
    }
}

#[component]
fn Layout() -> Element {
    let screen = Screen::from_route(&use_route::<Route>());
    let slug = screen.slug();

    rsx! {
        div { class: "app",
            main { class: "screen screen--{slug}",
                Outlet::<Route> {}
            }
            if screen.shows_bottom_nav() {
                BottomNav { current: screen }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_welcome_hides_navigation() {
        let hidden: Vec<_> = Screen::ALL
            .into_iter()
            .filter(|screen| !screen.shows_bottom_nav())
            .collect();
        assert_eq!(hidden, [Screen::Welcome]);
    }

    #[test]
    fn screens_round_trip_through_routes() {
        for screen in Screen::ALL {
            assert_eq!(Screen::from_route(&screen.route()), screen);
        }
    }

    #[test]
    fn route_paths() {
        assert_eq!(Route::Welcome {}.to_string(), "/");
        assert_eq!(Route::Quiz {}.to_string(), "/quiz");
        assert_eq!(Route::Rewards {}.to_string(), "/rewards");
    }
}
