//! Inline form messages: the expiring error annotation and the success box

use crate::ui::{Icon, icons};
use leptos::prelude::*;

const ERROR_STYLE: &str = "color: #FF4444; font-size: 0.875rem; margin-top: 0.5rem;";

const SUCCESS_STYLE: &str = "background-color: var(--color-accent-green); \
    color: var(--color-bg-dark); padding: 1rem; border-radius: 0.5rem; margin-top: 1rem; \
    text-align: center; font-weight: 600; animation: slideDown 0.3s ease;";

/// Error message below an input
/// Shows the message when Some, nothing when None
#[component]
pub fn ErrorMessage(
    #[prop(into)]
    error: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="form__error" style=ERROR_STYLE role="alert">
                {move || error.get().unwrap_or_default()}
            </p>
        </Show>
    }
}

/// Confirmation box appended to a form
#[component]
pub fn SuccessMessage(
    #[prop(into)]
    message: Signal<Option<String>>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="form__success" style=SUCCESS_STYLE role="status">
                <Icon name=icons::CHECK class="form__success-icon"/>
                <span>{move || message.get().unwrap_or_default()}</span>
            </div>
        </Show>
    }
}
