//! Device detection: logs the viewport at start-up and after resizes

use leptos::prelude::*;

/// Renders nothing; mount it once at the application root
#[component]
pub fn ViewportLogger() -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use crate::core::debounce::DEFAULT_RESIZE_DEBOUNCE_MS;
        use crate::ui::debounce::debounced;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        Effect::new(move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };

            if let Some(info) = current_viewport() {
                leptos::logging::log!(
                    "📱 Dispositivo: {:?} ({}x{})",
                    info.device,
                    info.width,
                    info.height
                );
            }

            let log_resize = debounced(DEFAULT_RESIZE_DEBOUNCE_MS, |()| {
                if let Some(info) = current_viewport() {
                    leptos::logging::log!("📐 Ventana redimensionada: {}x{}", info.width, info.height);
                }
            });

            let resize = Closure::wrap(Box::new(move |_: web_sys::Event| {
                log_resize(());
            }) as Box<dyn FnMut(web_sys::Event)>);

            let _ =
                window.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref());

            // Leak the closure to keep it alive
            resize.forget();
        });
    }

    view! {}
}

#[cfg(not(feature = "ssr"))]
fn current_viewport() -> Option<crate::core::viewport::ViewportInfo> {
    let window = web_sys::window()?;
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(crate::core::viewport::ViewportInfo::new(
        width as u32,
        height as u32,
    ))
}
