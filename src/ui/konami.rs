//! Konami code easter egg for the whole page

use leptos::prelude::*;

/// Listens for the Konami code and turns the page into a rainbow for a while
///
/// Renders nothing; mount it once at the application root.
#[component]
pub fn KonamiEasterEgg() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::konami::KonamiListener;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let listener = StoredValue::new_local(KonamiListener::new());

        Effect::new(move |_| {
            let Some(document) = web_sys::window().and_then(|w| w.document()) else {
                return;
            };

            let keydown = Closure::wrap(Box::new(move |ev: web_sys::KeyboardEvent| {
                let now = crate::ui::now_ms();
                let mut matched = false;
                listener.update_value(|l| matched = l.on_key_down(ev.key_code(), now));

                if matched {
                    leptos::logging::log!("🎮 ¡Código Konami activado!");
                    start_rainbow();
                    schedule_effect_end(listener);
                }
            }) as Box<dyn FnMut(web_sys::KeyboardEvent)>);

            let _ = document
                .add_event_listener_with_callback("keydown", keydown.as_ref().unchecked_ref());

            // Leak the closure to keep it alive
            keydown.forget();
        });
    }

    view! {}
}

#[cfg(not(feature = "ssr"))]
const RAINBOW_STYLE_ID: &str = "konami-rainbow";

/// Inject the keyframes once and animate `<body>`
#[cfg(not(feature = "ssr"))]
fn start_rainbow() {
    use crate::core::konami::{RAINBOW_ANIMATION, RAINBOW_KEYFRAMES};

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    if document.get_element_by_id(RAINBOW_STYLE_ID).is_none()
        && let (Ok(style), Some(head)) = (document.create_element("style"), document.head())
    {
        style.set_id(RAINBOW_STYLE_ID);
        style.set_text_content(Some(RAINBOW_KEYFRAMES));
        let _ = head.append_child(&style);
    }

    if let Some(body) = document.body() {
        let _ = body.style().set_property("animation", RAINBOW_ANIMATION);
    }
}

#[cfg(not(feature = "ssr"))]
fn stop_rainbow() {
    if let Some(body) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body())
    {
        let _ = body.style().remove_property("animation");
    }
}

/// Wait until the effect deadline, then clear it
///
/// Every match spawns one of these; the ones that wake up before a later
/// deadline find the effect still running and stop without touching it.
#[cfg(not(feature = "ssr"))]
fn schedule_effect_end(listener: StoredValue<crate::core::konami::KonamiListener, LocalStorage>) {
    use crate::core::konami::EFFECT_DURATION_MS;
    use gloo_timers::future::TimeoutFuture;
    use wasm_bindgen_futures::spawn_local;

    spawn_local(async move {
        TimeoutFuture::new(EFFECT_DURATION_MS as u32).await;

        let now = crate::ui::now_ms();
        let mut ended = false;
        listener.update_value(|l| ended = l.on_effect_timer(now));

        if ended {
            stop_rainbow();
            return;
        }

        // Fired a hair early against the wall clock: try once more at the deadline
        let remaining = listener
            .with_value(|l| l.effect_until_ms())
            .map(|until| until.saturating_sub(now));
        if remaining.is_some_and(|ms| ms < EFFECT_DURATION_MS / 10) {
            TimeoutFuture::new(remaining.unwrap_or_default() as u32 + 1).await;
            let now = crate::ui::now_ms();
            listener.update_value(|l| ended = l.on_effect_timer(now));
            if ended {
                stop_rainbow();
            }
        }
    });
}
