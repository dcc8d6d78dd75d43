//! Analytics wiring for the browser
//!
//! Provides:
//! - TrackingContext, a shared handle to the page's [`Tracker`]
//! - Hooks that forward events to `gtag` and `fbq` when those globals exist
//! - SectionViewTracker, which reports `section_view` as sections scroll in

use leptos::logging::log;
use leptos::prelude::*;
use serde_json::Value;

use crate::core::tracking::Tracker;

#[cfg(not(feature = "ssr"))]
use crate::core::tracking::{AnalyticsHook, TrackingError};

/// Shared tracker for the component tree
#[derive(Clone, Copy)]
pub struct TrackingContext {
    tracker: StoredValue<Tracker, LocalStorage>,
}

impl TrackingContext {
    /// Track an event. Never fails; problems only show up in the logs.
    pub fn track(&self, name: &str, data: Value) {
        log!("📊 Event tracked: {} {}", name, data);
        self.tracker.with_value(|tracker| {
            tracker.track_event(name, data);
        });
    }
}

/// Forwards events to a global analytics function such as `gtag` or `fbq`
///
/// The function is looked up on every call, so a loader script that finishes
/// late is picked up without re-registering.
#[cfg(not(feature = "ssr"))]
pub struct GlobalFunctionHook {
    global: &'static str,
    command: &'static str,
}

#[cfg(not(feature = "ssr"))]
impl GlobalFunctionHook {
    /// `gtag('event', name, data)`
    pub fn gtag() -> Self {
        Self {
            global: "gtag",
            command: "event",
        }
    }

    /// `fbq('track', name, data)`
    pub fn fbq() -> Self {
        Self {
            global: "fbq",
            command: "track",
        }
    }
}

#[cfg(not(feature = "ssr"))]
impl AnalyticsHook for GlobalFunctionHook {
    fn name(&self) -> &str {
        self.global
    }

    fn send(&self, event: &str, data: &Value) -> Result<(), TrackingError> {
        use serde::Serialize;
        use wasm_bindgen::{JsCast, JsValue};

        let unavailable = || TrackingError::Unavailable(self.global.to_string());

        let window = web_sys::window().ok_or_else(unavailable)?;
        let function = js_sys::Reflect::get(&window, &JsValue::from_str(self.global))
            .ok()
            .and_then(|value| value.dyn_into::<js_sys::Function>().ok())
            .ok_or_else(unavailable)?;

        let payload = data
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| TrackingError::Encode(e.to_string()))?;

        function
            .call3(
                &JsValue::NULL,
                &JsValue::from_str(self.command),
                &JsValue::from_str(event),
                &payload,
            )
            .map(|_| ())
            .map_err(|e| TrackingError::HookFailed {
                hook: self.global.to_string(),
                reason: format!("{:?}", e),
            })
    }
}

/// Provide the tracking context to the application
pub fn provide_tracking() -> TrackingContext {
    #[allow(unused_mut)]
    let mut tracker = Tracker::new();

    #[cfg(not(feature = "ssr"))]
    {
        tracker.add_hook(GlobalFunctionHook::gtag());
        tracker.add_hook(GlobalFunctionHook::fbq());
    }

    let ctx = TrackingContext {
        tracker: StoredValue::new_local(tracker),
    };
    provide_context(ctx);
    ctx
}

/// Use the tracking context, if one was provided
pub fn use_tracking() -> Option<TrackingContext> {
    use_context::<TrackingContext>()
}

/// Reports a `section_view` whenever half of a `<section>` becomes visible
///
/// Renders nothing; place it once per page, after the sections.
#[component]
pub fn SectionViewTracker() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::tracking::{
            SECTION_VIEW_EVENT, SECTION_VIEW_THRESHOLD, section_view_payload,
        };
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        let tracking = use_tracking();

        Effect::new(move |_| {
            let Some(tracking) = tracking else {
                return;
            };
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
                move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                    for entry in entries.iter() {
                        let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                        if entry.is_intersecting() {
                            let class_name = entry.target().class_name();
                            tracking.track(SECTION_VIEW_EVENT, section_view_payload(&class_name));
                        }
                    }
                },
            );

            let options = web_sys::IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(SECTION_VIEW_THRESHOLD));

            let observer = match web_sys::IntersectionObserver::new_with_options(
                callback.as_ref().unchecked_ref(),
                &options,
            ) {
                Ok(observer) => observer,
                Err(e) => {
                    leptos::logging::warn!("section tracking unavailable: {:?}", e);
                    return;
                }
            };

            if let Ok(sections) = document.query_selector_all("section") {
                for i in 0..sections.length() {
                    if let Some(section) = sections
                        .item(i)
                        .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
                    {
                        observer.observe(&section);
                    }
                }
            }

            // The observer lives as long as the page
            callback.forget();
        });
    }

    view! {}
}
