//! Lead capture form
//!
//! The component only renders signals. All behaviour lives in
//! [`SubmissionController`], which drives those signals through
//! [`SignalFormPort`] and schedules its transitions on browser timers.

use leptos::prelude::*;
use serde_json::Value;

use crate::core::submission::{
    ButtonState, FormMessage, FormPort, LEAD_FORM_ID, SubmissionController, TimerHandle,
};
use crate::core::validation::InputCue;
use crate::ui::common::{ErrorMessage, SuccessMessage};
use crate::ui::tracking::{TrackingContext, use_tracking};

type ControllerCell = StoredValue<Option<SubmissionController<SignalFormPort>>, LocalStorage>;

/// Reactive state the form renders
#[derive(Clone, Copy)]
pub struct FormView {
    pub input: RwSignal<String>,
    pub label: RwSignal<String>,
    pub background: RwSignal<String>,
    pub enabled: RwSignal<bool>,
    pub cue: RwSignal<InputCue>,
    pub message: RwSignal<Option<FormMessage>>,
}

impl FormView {
    pub fn new() -> Self {
        let idle = ButtonState::Idle;
        Self {
            input: RwSignal::new(String::new()),
            label: RwSignal::new(idle.label().to_string()),
            background: RwSignal::new(idle.background().to_string()),
            enabled: RwSignal::new(true),
            cue: RwSignal::new(InputCue::Neutral),
            message: RwSignal::new(None),
        }
    }

    pub fn error_text(&self) -> Option<String> {
        self.message
            .get()
            .filter(FormMessage::is_error)
            .map(|message| message.text().to_string())
    }

    pub fn success_text(&self) -> Option<String> {
        self.message
            .get()
            .filter(|message| !message.is_error())
            .map(|message| message.text().to_string())
    }
}

impl Default for FormView {
    fn default() -> Self {
        Self::new()
    }
}

/// [`FormPort`] that writes into a [`FormView`]
///
/// Pending transitions are browser timeouts keyed by handle; dropping one
/// clears it.
pub struct SignalFormPort {
    view: FormView,
    controller: ControllerCell,
    tracking: Option<TrackingContext>,
    #[cfg(not(feature = "ssr"))]
    timers: std::collections::HashMap<TimerHandle, gloo_timers::callback::Timeout>,
}

impl SignalFormPort {
    fn new(view: FormView, controller: ControllerCell, tracking: Option<TrackingContext>) -> Self {
        Self {
            view,
            controller,
            tracking,
            #[cfg(not(feature = "ssr"))]
            timers: Default::default(),
        }
    }
}

impl FormPort for SignalFormPort {
    fn set_label(&mut self, label: &str) {
        self.view.label.set(label.to_string());
    }

    fn set_background(&mut self, background: &str) {
        self.view.background.set(background.to_string());
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.view.enabled.set(enabled);
    }

    fn set_input_cue(&mut self, cue: InputCue) {
        self.view.cue.set(cue);
    }

    fn show_message(&mut self, message: Option<FormMessage>) {
        self.view.message.set(message);
    }

    fn clear_input(&mut self) {
        self.view.input.set(String::new());
    }

    fn schedule(&mut self, handle: TimerHandle, delay_ms: u64) {
        #[cfg(not(feature = "ssr"))]
        {
            use gloo_timers::callback::Timeout;
            use wasm_bindgen_futures::spawn_local;

            let controller = self.controller;
            let timeout = Timeout::new(delay_ms.min(u32::MAX as u64) as u32, move || {
                controller.update_value(|controller| {
                    if let Some(controller) = controller {
                        // Dropped after this callback returns, not inside it
                        let fired = controller.port_mut().timers.remove(&handle);
                        spawn_local(async move { drop(fired) });

                        controller.on_timer(handle);
                    }
                });
            });
            self.timers.insert(handle, timeout);
        }
        #[cfg(feature = "ssr")]
        {
            let _ = (self.controller, handle, delay_ms);
        }
    }

    fn cancel(&mut self, handle: TimerHandle) {
        #[cfg(not(feature = "ssr"))]
        self.timers.remove(&handle);
        #[cfg(feature = "ssr")]
        let _ = handle;
    }

    fn track(&mut self, event: &str, data: Value) {
        if let Some(tracking) = self.tracking {
            tracking.track(event, data);
        }
    }
}

/// Email capture form (`#leadForm`)
#[component]
pub fn LeadForm() -> impl IntoView {
    let view = FormView::new();
    let controller: ControllerCell = StoredValue::new_local(None);

    controller.set_value(Some(SubmissionController::new(SignalFormPort::new(
        view,
        controller,
        use_tracking(),
    ))));

    let on_input = move |ev: leptos::ev::Event| {
        let text = event_target_value(&ev);
        view.input.set(text.clone());
        controller.update_value(|controller| {
            if let Some(controller) = controller {
                controller.on_input(&text);
            }
        });
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let text = view.input.get_untracked();
        let now = crate::ui::now_ms();
        controller.update_value(|controller| {
            if let Some(controller) = controller
                && let Err(err) = controller.submit(&text, now)
            {
                leptos::logging::log!("lead form: {}", err);
            }
        });
    };

    let is_idle = move || view.label.get() == ButtonState::Idle.label();

    view! {
        <form id=LEAD_FORM_ID class="form" novalidate=true on:submit=on_submit>
            <div class="form__group">
                <input
                    type="email"
                    class="form__input"
                    name="email"
                    placeholder="tu@email.com"
                    aria-label="Tu email"
                    autocomplete="email"
                    prop:value=move || view.input.get()
                    disabled=move || !view.enabled.get()
                    style:border-color=move || view.cue.get().border_color()
                    on:input=on_input
                />
                <button
                    type="submit"
                    class="form__button btn btn--primary"
                    disabled=move || !view.enabled.get()
                    style:background=move || view.background.get()
                >
                    {move || view.label.get()}
                    <Show when=is_idle>
                        <span class="btn__arrow">" →"</span>
                    </Show>
                </button>
            </div>

            <ErrorMessage error=Signal::derive(move || view.error_text())/>
            <SuccessMessage message=Signal::derive(move || view.success_text())/>

            <p class="form__privacy">"🔒 Sin spam. Puedes darte de baja cuando quieras."</p>
        </form>
    }
}
