//! Not found page component
//!
//! A 404 error page displayed when a route is not found.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

/// Not found (404) page component
#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="not-found__inner">
                <Icon name=icons::ALERT_CIRCLE class="not-found__icon" />

                <h1 class="not-found__code">"404"</h1>
                <h2 class="not-found__title">"Página no encontrada"</h2>
                <p class="not-found__text">
                    "La página que buscas no existe o se ha movido."
                </p>

                <A href="/" attr:class="btn btn--primary">
                    "Volver al inicio"
                </A>
            </div>
        </div>
    }
}
