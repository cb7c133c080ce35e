#[cfg(test)]
use std::cell::RefCell;
#[cfg(test)]
use std::rc::Rc;

use dioxus::prelude::*;
#[cfg(test)]
use services::ObjectScanner;

use crate::context::AppContext;
use crate::views::nav::ScreenHeader;
use crate::views::state::ViewError;
use crate::views::timers::sleep_until;

#[component]
pub fn ObjectsView() -> Element {
    let ctx = use_context::<AppContext>();
    let clock = ctx.clock();
    let mut scanner = use_signal(|| {
        ctx.object_scanner()
            .map_err(|_| ViewError::NothingToDiscover)
    });
    let mut rng = use_signal(|| ctx.rng());

    let start_scan = use_callback(move |()| {
        let ready_at = {
            let mut guard = scanner.write();
            let Ok(scanner) = guard.as_mut() else {
                return;
            };
            if scanner.is_scanning() {
                return;
            }
            scanner.start_scan(clock.now())
        };

        spawn(async move {
            if !sleep_until(clock, ready_at).await {
                return;
            }
            if let Ok(scanner) = scanner.write().as_mut() {
                let mut rng = rng.write();
                if let Some(object) = scanner.poll(clock.now(), &mut *rng) {
                    tracing::info!(object = object.name(), "object discovered");
                }
            }
        });
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<ObjectsTestHandles>() {
                handles.register(start_scan, scanner);
            }
        }
    }

    let snapshot = match &*scanner.read() {
        Ok(scanner) => Ok((
            scanner.is_scanning(),
            scanner.found().cloned(),
            scanner.discovered_count(),
        )),
        Err(err) => Err(*err),
    };
    let (scanning, found, discovered) = match snapshot {
        Ok(snapshot) => snapshot,
        Err(err) => {
            return rsx! {
                div { class: "objects",
                    ScreenHeader { title: "Object Detective" }
                    p { class: "view-error", "{err}" }
                }
            };
        }
    };

    let badge = (discovered > 0).then(|| format!("🔍 {discovered}"));

    rsx! {
        div { class: "objects",
            ScreenHeader { title: "Object Detective", badge }

            div { class: "camera",
                div { class: if scanning { "camera__frame camera__frame--scanning" } else { "camera__frame" },
                    span { class: "camera__corner camera__corner--tl" }
                    span { class: "camera__corner camera__corner--tr" }
                    span { class: "camera__corner camera__corner--bl" }
                    span { class: "camera__corner camera__corner--br" }
                    if scanning {
                        div { class: "camera__scanline" }
                        span { class: "camera__spinner", "🔍" }
                    } else {
                        div { class: "camera__placeholder",
                            span { class: "camera__icon", "📷" }
                            p { "Point at an object" }
                        }
                    }
                }
                button {
                    class: "scan-button",
                    id: "scan-object",
                    r#type: "button",
                    disabled: scanning,
                    onclick: move |_| start_scan.call(()),
                    if scanning { "Scanning..." } else { "📷 Scan Object" }
                }
            }

            if let Some(object) = found {
                section { class: "object-card",
                    div { class: "object-card__emoji", "{object.emoji()}" }
                    h3 { class: "object-card__name", "{object.name()}" }
                    div { class: "facts",
                        p { class: "facts__title", "💡 Fun Facts:" }
                        for (idx, fact) in object.facts().iter().enumerate() {
                            p { key: "{idx}", class: "fact", "⭐ {fact}" }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct ObjectsTestHandles {
    scan: Rc<RefCell<Option<Callback<()>>>>,
    scanner: Rc<RefCell<Option<Signal<Result<ObjectScanner, ViewError>>>>>,
}

#[cfg(test)]
impl ObjectsTestHandles {
    pub(crate) fn register(
        &self,
        scan: Callback<()>,
        scanner: Signal<Result<ObjectScanner, ViewError>>,
    ) {
        *self.scan.borrow_mut() = Some(scan);
        *self.scanner.borrow_mut() = Some(scanner);
    }

    pub(crate) fn scan(&self) -> Callback<()> {
        (*self.scan.borrow()).expect("scan callback registered")
    }

    pub(crate) fn is_scanning(&self) -> Option<bool> {
        let scanner = (*self.scanner.borrow()).expect("scanner registered");
        let guard = scanner.read();
        guard.as_ref().ok().map(ObjectScanner::is_scanning)
    }
}
