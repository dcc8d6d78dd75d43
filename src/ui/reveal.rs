//! Scroll reveal for cards, FAQ items and the author profile
//!
//! Elements start faded out and shifted down. One shared IntersectionObserver
//! reports them to a [`VisibilityAnimator`]; each element is revealed once and
//! then no longer observed.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::core::reveal::{RevealState, VisibilityAnimator};

/// Attribute linking a DOM element to its reveal state
pub const REVEAL_ID_ATTR: &str = "data-reveal-id";

#[derive(Clone, Copy)]
pub struct RevealContext {
    animator: StoredValue<VisibilityAnimator<String>, LocalStorage>,
    states: StoredValue<HashMap<String, RwSignal<RevealState>>, LocalStorage>,
    next_id: StoredValue<u64, LocalStorage>,
    #[cfg(not(feature = "ssr"))]
    observer: StoredValue<Option<web_sys::IntersectionObserver>, LocalStorage>,
}

impl RevealContext {
    fn new() -> Self {
        Self {
            animator: StoredValue::new_local(VisibilityAnimator::default()),
            states: StoredValue::new_local(HashMap::new()),
            next_id: StoredValue::new_local(0),
            #[cfg(not(feature = "ssr"))]
            observer: StoredValue::new_local(None),
        }
    }

    /// Register a new element; ids follow render order
    fn register(&self) -> (String, RwSignal<RevealState>) {
        let mut id = String::new();
        self.next_id.update_value(|next| {
            *next += 1;
            id = format!("reveal-{}", next);
        });

        let state = RwSignal::new(RevealState::Hidden);
        self.animator.update_value(|animator| animator.observe([id.clone()]));
        self.states.update_value(|states| {
            states.insert(id.clone(), state);
        });
        (id, state)
    }

    /// Feed one intersection report; `true` when it revealed the element
    pub fn on_intersection(&self, id: &str, ratio: f64, is_intersecting: bool) -> bool {
        let key = id.to_string();
        let mut revealed = false;
        self.animator.update_value(|animator| {
            revealed = animator.on_intersection(&key, ratio, is_intersecting);
        });

        if revealed {
            self.reveal_now(id);
        }
        revealed
    }

    fn reveal_now(&self, id: &str) {
        self.states.with_value(|states| {
            if let Some(state) = states.get(id) {
                state.set(RevealState::Revealed);
            }
        });
    }

    #[cfg(not(feature = "ssr"))]
    fn observe(&self, id: &str) {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.query_selector(&format!("[{}=\"{}\"]", REVEAL_ID_ATTR, id)).ok())
            .flatten()
        else {
            return;
        };

        if self.observer.with_value(Option::is_none) {
            match self.create_observer() {
                Some(observer) => self.observer.set_value(Some(observer)),
                None => {
                    // No observer support: show everything right away
                    self.animator.update_value(|animator| {
                        animator.on_intersection(&id.to_string(), 1.0, true);
                    });
                    self.reveal_now(id);
                    return;
                }
            }
        }

        self.observer.with_value(|observer| {
            if let Some(observer) = observer {
                observer.observe(&element);
            }
        });
    }

    #[cfg(not(feature = "ssr"))]
    fn create_observer(&self) -> Option<web_sys::IntersectionObserver> {
        use wasm_bindgen::closure::Closure;
        use wasm_bindgen::{JsCast, JsValue};

        let ctx = *self;
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: web_sys::IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: web_sys::IntersectionObserverEntry = entry.unchecked_into();
                    let target = entry.target();
                    let Some(id) = target.get_attribute(REVEAL_ID_ATTR) else {
                        continue;
                    };

                    if ctx.on_intersection(&id, entry.intersection_ratio(), entry.is_intersecting())
                    {
                        observer.unobserve(&target);
                    }
                }
            },
        );

        let options = ctx.animator.with_value(|animator| animator.options());
        let init = web_sys::IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin.to_css());

        let observer = web_sys::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &init,
        )
        .map_err(|e| leptos::logging::warn!("scroll reveal unavailable: {:?}", e))
        .ok()?;

        callback.forget();
        Some(observer)
    }
}

/// Provide the reveal context to the application
pub fn provide_reveal_context() -> RevealContext {
    let ctx = RevealContext::new();
    provide_context(ctx);
    ctx
}

/// Use the reveal context, if one was provided
pub fn use_reveal_context() -> Option<RevealContext> {
    use_context::<RevealContext>()
}

/// Reveal wiring for one element
///
/// Put `id` in the element's `data-reveal-id` attribute and `style` in its
/// style attribute. Without a [`RevealContext`] the element is shown as is.
pub struct RevealHandle {
    pub id: String,
    pub style: Signal<String>,
}

pub fn use_reveal() -> RevealHandle {
    let Some(ctx) = use_reveal_context() else {
        return RevealHandle {
            id: String::new(),
            style: Signal::derive(String::new),
        };
    };

    let (id, state) = ctx.register();

    #[cfg(not(feature = "ssr"))]
    {
        let id = id.clone();
        Effect::new(move |_| ctx.observe(&id));
    }

    RevealHandle {
        id,
        style: Signal::derive(move || state.get().style()),
    }
}

/// Wrapper `<div>` that fades in when scrolled into view
#[component]
pub fn Reveal(
    /// CSS classes of the wrapper, e.g. `card`
    #[prop(into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let RevealHandle { id, style } = use_reveal();

    view! {
        <div class=class data-reveal-id=id style=move || style.get()>
            {children()}
        </div>
    }
}
