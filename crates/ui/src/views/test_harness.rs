use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use buddy_core::Catalog;
use buddy_core::model::SimulationSettings;
use buddy_core::time::fixed_clock;
use services::Clock;

use crate::context::{UiApp, build_app_context};
use crate::routes::Screen;
use crate::views::chat::ChatTestHandles;
use crate::views::objects::ObjectsTestHandles;
use crate::views::quiz::QuizTestHandles;
use crate::views::{BottomNav, ChatView, ObjectsView, QuizView, RewardsView, WelcomeView};

#[derive(Clone)]
struct TestApp {
    catalog: Arc<Catalog>,
}

impl UiApp for TestApp {
    fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    fn settings(&self) -> SimulationSettings {
        SimulationSettings::default()
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }

    fn seed(&self) -> Option<u64> {
        Some(7)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Welcome,
    Objects,
    Chat,
    Quiz,
    Rewards,
    Nav(Screen),
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    handles: TestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.quiz.clone());
    use_context_provider(|| props.handles.objects.clone());
    use_context_provider(|| props.handles.chat.clone());
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
    match use_context::<ViewKind>() {
        ViewKind::Welcome => rsx! { WelcomeView {} },
        ViewKind::Objects => rsx! { ObjectsView {} },
        ViewKind::Chat => rsx! { ChatView {} },
        ViewKind::Quiz => rsx! { QuizView {} },
        ViewKind::Rewards => rsx! { RewardsView {} },
        ViewKind::Nav(current) => rsx! { BottomNav { current } },
    }
}

/// Hooks registered by the views when they mount.
#[derive(Clone, Default)]
pub struct TestHandles {
    pub quiz: QuizTestHandles,
    pub objects: ObjectsTestHandles,
    pub chat: ChatTestHandles,
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub handles: TestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn drive(&mut self) {
        drive_dom(&mut self.dom);
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

pub fn setup_view_harness(view: ViewKind) -> ViewHarness {
    let catalog = Catalog::builtin().expect("builtin catalog");
    let handles = TestHandles::default();
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app: Arc::new(TestApp {
                catalog: Arc::new(catalog),
            }),
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness { dom, handles }
}
