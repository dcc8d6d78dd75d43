//! Lead form submission lifecycle
//!
//! Drives the "send me the PDF" form through its states:
//!
//! ```text
//!            submit (valid, not rate limited)
//!   Idle ─────────────────────────────────────▶ Submitting
//!    ▲ ▲                                          │     │
//!    │ │ error expires          delivery failed   │     │ delivered
//!    │ └──────────────── Failed ◀────────────────┘     ▼
//!    └───────────────────────────────────────────── Success
//!                        reset timer
//! ```
//!
//! Everything the user sees goes through a [`FormPort`], including the timers
//! that move the form along. Every scheduled transition is tracked by its
//! [`TimerHandle`]: replacing or resetting a transition cancels the old
//! handle, and a callback for a handle that is no longer pending is ignored.

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::rate_limiter::{CooldownLimiter, DEFAULT_COOLDOWN_MS};
use super::validation::{EmailVerdict, InputCue, validate_email};

/// DOM id of the lead form, also sent with its tracking events
pub const LEAD_FORM_ID: &str = "leadForm";

/// Simulated network latency before the PDF counts as sent
pub const DEFAULT_DELIVERY_DELAY_MS: u64 = 1500;

/// How long an inline error annotation stays visible
pub const DEFAULT_ERROR_DISPLAY_MS: u64 = 3000;

/// How long the success state stays up before the form resets
pub const DEFAULT_SUCCESS_DISPLAY_MS: u64 = 5000;

/// Button background while idle or sending
pub const PRIMARY_BACKGROUND: &str =
    "linear-gradient(135deg, var(--color-primary-blue), var(--color-primary-purple))";

/// Button background after a successful submission
pub const SUCCESS_BACKGROUND: &str = "var(--color-accent-green)";

/// Button background after a failed submission
pub const FAILURE_BACKGROUND: &str = "#FF4444";

/// Delays used by the lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTimings {
    pub delivery_delay_ms: u64,
    pub error_display_ms: u64,
    pub success_display_ms: u64,
    pub cooldown_ms: u64,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            delivery_delay_ms: DEFAULT_DELIVERY_DELAY_MS,
            error_display_ms: DEFAULT_ERROR_DISPLAY_MS,
            success_display_ms: DEFAULT_SUCCESS_DISPLAY_MS,
            cooldown_ms: DEFAULT_COOLDOWN_MS,
        }
    }
}

/// State of the submit button, and with it the whole form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ButtonState {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed,
}

impl ButtonState {
    /// Button label for this state
    pub fn label(&self) -> &'static str {
        match self {
            ButtonState::Idle => "¡Quiero mi copia GRATIS!",
            ButtonState::Submitting => "⏳ Enviando...",
            ButtonState::Success => "✅ ¡PDF Enviado!",
            ButtonState::Failed => "🔁 Reintentar",
        }
    }

    /// CSS background for the button
    pub fn background(&self) -> &'static str {
        match self {
            ButtonState::Idle | ButtonState::Submitting => PRIMARY_BACKGROUND,
            ButtonState::Success => SUCCESS_BACKGROUND,
            ButtonState::Failed => FAILURE_BACKGROUND,
        }
    }

    /// Whether the input and button accept interaction
    pub fn is_enabled(&self) -> bool {
        matches!(self, ButtonState::Idle | ButtonState::Failed)
    }
}

/// A submission that passed validation and the rate limiter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionAttempt {
    pub email: String,
    pub timestamp_ms: u64,
}

/// Why a submission did not go through
///
/// The `Display` text is what the user reads under the field.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("Por favor, introduce un email válido")]
    EmptyInput,

    #[error("Por favor, introduce un email válido")]
    InvalidFormat,

    #[error("Espera {} segundos antes de volver a intentarlo", .retry_in_ms.div_ceil(1000))]
    RateLimited { retry_in_ms: u64 },

    #[error("Ya estamos procesando tu solicitud")]
    Busy,

    #[error("No hemos podido enviar el PDF ({0}). Inténtalo de nuevo")]
    Delivery(String),
}

impl SubmitError {
    /// Error to report for a verdict, `None` when the address is usable
    pub fn from_verdict(verdict: EmailVerdict) -> Option<Self> {
        match verdict {
            EmailVerdict::Empty => Some(SubmitError::EmptyInput),
            EmailVerdict::Invalid => Some(SubmitError::InvalidFormat),
            EmailVerdict::Valid => None,
        }
    }
}

/// Message rendered below the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMessage {
    /// Inline annotation (`.form__error`)
    Error(String),
    /// Confirmation box (`.form__success`)
    Success(String),
}

impl FormMessage {
    pub fn text(&self) -> &str {
        match self {
            FormMessage::Error(text) | FormMessage::Success(text) => text,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, FormMessage::Error(_))
    }
}

/// Success message shown once the PDF is on its way
pub fn success_message(email: &str) -> String {
    format!("📧 Revisa tu email ({email}) para descargar el PDF")
}

/// Identifies one scheduled transition
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    pub fn id(&self) -> u64 {
        self.0
    }
}

/// Everything the controller needs from the rendering surface
///
/// `schedule` must arrange for [`SubmissionController::on_timer`] to be called
/// with the same handle after `delay_ms`, unless `cancel` is called first.
pub trait FormPort {
    fn set_label(&mut self, label: &str);
    fn set_background(&mut self, background: &str);
    /// Enables or disables both the input and the button
    fn set_enabled(&mut self, enabled: bool);
    fn set_input_cue(&mut self, cue: InputCue);
    /// `None` removes whatever message is showing
    fn show_message(&mut self, message: Option<FormMessage>);
    fn clear_input(&mut self);
    fn schedule(&mut self, handle: TimerHandle, delay_ms: u64);
    fn cancel(&mut self, handle: TimerHandle);

    /// Analytics hook for lifecycle milestones
    fn track(&mut self, _event: &str, _data: serde_json::Value) {}
}

/// Lead form state machine
#[derive(Debug)]
pub struct SubmissionController<P: FormPort> {
    port: P,
    timings: FormTimings,
    limiter: CooldownLimiter,
    state: ButtonState,
    attempt: Option<SubmissionAttempt>,
    next_timer_id: u64,
    /// Simulated delivery in flight
    delivery_timer: Option<TimerHandle>,
    /// Expiry of the current error annotation
    message_timer: Option<TimerHandle>,
    /// Return from `Success` to `Idle`
    reset_timer: Option<TimerHandle>,
}

impl<P: FormPort> SubmissionController<P> {
    pub fn new(port: P) -> Self {
        Self::with_timings(port, FormTimings::default())
    }

    pub fn with_timings(port: P, timings: FormTimings) -> Self {
        Self {
            port,
            timings,
            limiter: CooldownLimiter::new(timings.cooldown_ms),
            state: ButtonState::Idle,
            attempt: None,
            next_timer_id: 0,
            delivery_timer: None,
            message_timer: None,
            reset_timer: None,
        }
    }

    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// The last accepted submission, while it is being processed or shown
    pub fn attempt(&self) -> Option<&SubmissionAttempt> {
        self.attempt.as_ref()
    }

    pub fn timings(&self) -> FormTimings {
        self.timings
    }

    pub fn limiter(&self) -> &CooldownLimiter {
        &self.limiter
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn port_mut(&mut self) -> &mut P {
        &mut self.port
    }

    /// Whether any transition is still scheduled
    pub fn has_pending_timers(&self) -> bool {
        self.delivery_timer.is_some() || self.message_timer.is_some() || self.reset_timer.is_some()
    }

    /// Live validation while typing
    pub fn on_input(&mut self, text: &str) -> EmailVerdict {
        let verdict = validate_email(text);
        self.port.set_input_cue(verdict.cue());
        verdict
    }

    /// Handle a submit event
    ///
    /// Submits while a previous one is being sent or celebrated are ignored
    /// with [`SubmitError::Busy`]; everything else is either accepted or shown
    /// to the user as an expiring annotation.
    pub fn submit(&mut self, text: &str, now_ms: u64) -> Result<(), SubmitError> {
        if !self.state.is_enabled() {
            tracing::debug!(state = ?self.state, "submit ignored while busy");
            return Err(SubmitError::Busy);
        }

        let verdict = validate_email(text);
        self.port.set_input_cue(verdict.cue());

        if let Some(err) = SubmitError::from_verdict(verdict) {
            self.show_error(&err);
            return Err(err);
        }

        if !self.limiter.try_acquire(now_ms) {
            let err = SubmitError::RateLimited {
                retry_in_ms: self.limiter.remaining_ms(now_ms),
            };
            self.show_error(&err);
            return Err(err);
        }

        self.cancel_timer(TimerSlot::Message);
        self.port.show_message(None);

        let attempt = SubmissionAttempt {
            email: text.trim().to_string(),
            timestamp_ms: now_ms,
        };
        tracing::info!(email = %attempt.email, "lead form submitted");
        self.attempt = Some(attempt);

        self.apply_button(ButtonState::Submitting);
        self.delivery_timer = Some(self.schedule(self.timings.delivery_delay_ms));
        Ok(())
    }

    /// Report the outcome of the delivery started by [`submit`](Self::submit)
    ///
    /// The simulated delivery calls this with `Ok(())` when its timer fires;
    /// a real transport calls it directly. Ignored unless submitting.
    pub fn complete(&mut self, outcome: Result<(), SubmitError>) {
        if self.state != ButtonState::Submitting {
            tracing::debug!(state = ?self.state, "delivery outcome ignored");
            return;
        }
        self.cancel_timer(TimerSlot::Delivery);

        match outcome {
            Ok(()) => {
                let email = self
                    .attempt
                    .as_ref()
                    .map(|attempt| attempt.email.clone())
                    .unwrap_or_default();

                self.apply_button(ButtonState::Success);
                self.port
                    .show_message(Some(FormMessage::Success(success_message(&email))));
                self.port.track("lead_submitted", json!({ "form": LEAD_FORM_ID }));

                self.reset_timer = Some(self.schedule(self.timings.success_display_ms));
            }
            Err(err) => {
                tracing::warn!(error = %err, "lead delivery failed");
                // A failed delivery gives back its cooldown slot.
                self.limiter.reset();
                self.apply_button(ButtonState::Failed);
                self.show_error(&err);
            }
        }
    }

    /// Dispatch a fired timer
    pub fn on_timer(&mut self, handle: TimerHandle) {
        if self.delivery_timer == Some(handle) {
            self.delivery_timer = None;
            self.complete(Ok(()));
        } else if self.message_timer == Some(handle) {
            self.message_timer = None;
            self.port.show_message(None);
            if self.state == ButtonState::Failed {
                self.apply_button(ButtonState::Idle);
            }
        } else if self.reset_timer == Some(handle) {
            self.reset_timer = None;
            self.restore_idle();
        } else {
            tracing::debug!(timer = handle.id(), "stale timer ignored");
        }
    }

    /// Force the form back to a clean `Idle`, cancelling everything pending
    pub fn reset(&mut self) {
        self.cancel_timer(TimerSlot::Delivery);
        self.cancel_timer(TimerSlot::Message);
        self.cancel_timer(TimerSlot::Reset);
        self.restore_idle();
    }

    fn restore_idle(&mut self) {
        self.attempt = None;
        self.apply_button(ButtonState::Idle);
        self.port.show_message(None);
        self.port.clear_input();
        self.port.set_input_cue(InputCue::Neutral);
    }

    fn apply_button(&mut self, state: ButtonState) {
        self.state = state;
        self.port.set_label(state.label());
        self.port.set_background(state.background());
        self.port.set_enabled(state.is_enabled());
    }

    fn show_error(&mut self, err: &SubmitError) {
        self.port.set_input_cue(InputCue::Reject);
        self.port
            .show_message(Some(FormMessage::Error(err.to_string())));

        self.cancel_timer(TimerSlot::Message);
        self.message_timer = Some(self.schedule(self.timings.error_display_ms));
    }

    fn schedule(&mut self, delay_ms: u64) -> TimerHandle {
        self.next_timer_id += 1;
        let handle = TimerHandle(self.next_timer_id);
        self.port.schedule(handle, delay_ms);
        handle
    }

    fn cancel_timer(&mut self, slot: TimerSlot) {
        let pending = match slot {
            TimerSlot::Delivery => self.delivery_timer.take(),
            TimerSlot::Message => self.message_timer.take(),
            TimerSlot::Reset => self.reset_timer.take(),
        };
        if let Some(handle) = pending {
            self.port.cancel(handle);
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum TimerSlot {
    Delivery,
    Message,
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{RecordingPort, advance_to};

    fn controller() -> SubmissionController<RecordingPort> {
        SubmissionController::new(RecordingPort::default())
    }

    #[test]
    fn test_button_state_presentation() {
        assert!(ButtonState::Idle.is_enabled());
        assert!(ButtonState::Failed.is_enabled());
        assert!(!ButtonState::Submitting.is_enabled());
        assert!(!ButtonState::Success.is_enabled());

        assert_eq!(ButtonState::Submitting.label(), "⏳ Enviando...");
        assert_eq!(ButtonState::Success.background(), SUCCESS_BACKGROUND);
        assert_eq!(ButtonState::default(), ButtonState::Idle);
    }

    #[test]
    fn test_submit_error_messages() {
        assert_eq!(
            SubmitError::InvalidFormat.to_string(),
            "Por favor, introduce un email válido"
        );
        assert_eq!(
            SubmitError::RateLimited { retry_in_ms: 3_200 }.to_string(),
            "Espera 4 segundos antes de volver a intentarlo"
        );
        assert!(
            SubmitError::Delivery("timeout".into())
                .to_string()
                .contains("timeout")
        );
    }

    #[test]
    fn test_on_input_sets_cue() {
        let mut ctrl = controller();

        assert_eq!(ctrl.on_input("a@b"), EmailVerdict::Invalid);
        assert_eq!(ctrl.port().cue, InputCue::Reject);

        assert_eq!(ctrl.on_input("a@b.co"), EmailVerdict::Valid);
        assert_eq!(ctrl.port().cue, InputCue::Accept);

        assert_eq!(ctrl.on_input(""), EmailVerdict::Empty);
        assert_eq!(ctrl.port().cue, InputCue::Neutral);
    }

    #[test]
    fn test_invalid_submit_stays_idle_with_expiring_error() {
        let mut ctrl = controller();

        assert_eq!(ctrl.submit("nope", 0), Err(SubmitError::InvalidFormat));
        assert_eq!(ctrl.state(), ButtonState::Idle);
        assert_eq!(ctrl.port().cue, InputCue::Reject);
        assert!(ctrl.port().message.as_ref().is_some_and(FormMessage::is_error));

        advance_to(&mut ctrl, 2_999);
        assert!(ctrl.port().message.is_some());

        advance_to(&mut ctrl, 3_000);
        assert!(ctrl.port().message.is_none());
        assert!(!ctrl.has_pending_timers());
    }

    #[test]
    fn test_empty_submit_is_rejected() {
        let mut ctrl = controller();
        assert_eq!(ctrl.submit("   ", 0), Err(SubmitError::EmptyInput));
        assert_eq!(ctrl.port().cue, InputCue::Reject);
        assert_eq!(ctrl.limiter().last_accepted_at_ms(), None);
    }

    #[test]
    fn test_repeated_errors_restart_expiry() {
        let mut ctrl = controller();

        let _ = ctrl.submit("x", 0);
        advance_to(&mut ctrl, 2_000);
        let _ = ctrl.submit("y", 2_000);

        assert_eq!(ctrl.port().cancelled.len(), 1);

        advance_to(&mut ctrl, 3_500);
        assert!(ctrl.port().message.is_some(), "first expiry must not fire");

        advance_to(&mut ctrl, 5_000);
        assert!(ctrl.port().message.is_none());
    }

    #[test]
    fn test_valid_submit_enters_submitting() {
        let mut ctrl = controller();

        assert_eq!(ctrl.submit("  a@b.co ", 100), Ok(()));
        assert_eq!(ctrl.state(), ButtonState::Submitting);
        assert_eq!(ctrl.port().label, "⏳ Enviando...");
        assert!(!ctrl.port().enabled);
        assert_eq!(
            ctrl.attempt(),
            Some(&SubmissionAttempt {
                email: "a@b.co".to_string(),
                timestamp_ms: 100,
            })
        );
    }

    #[test]
    fn test_valid_submit_clears_pending_error() {
        let mut ctrl = controller();

        let _ = ctrl.submit("bad", 0);
        advance_to(&mut ctrl, 500);
        assert_eq!(ctrl.submit("a@b.co", 500), Ok(()));
        assert!(ctrl.port().message.is_none());

        // The old expiry was cancelled and cannot clobber the success message.
        advance_to(&mut ctrl, 2_000);
        assert_eq!(ctrl.state(), ButtonState::Success);
        assert!(matches!(ctrl.port().message, Some(FormMessage::Success(_))));
        advance_to(&mut ctrl, 3_500);
        assert!(matches!(ctrl.port().message, Some(FormMessage::Success(_))));
    }

    #[test]
    fn test_submit_while_busy_is_ignored() {
        let mut ctrl = controller();
        ctrl.submit("a@b.co", 0).unwrap();

        assert_eq!(ctrl.submit("c@d.co", 10), Err(SubmitError::Busy));
        assert_eq!(ctrl.attempt().map(|a| a.email.as_str()), Some("a@b.co"));

        advance_to(&mut ctrl, 1_500);
        assert_eq!(ctrl.submit("c@d.co", 1_600), Err(SubmitError::Busy));
        assert_eq!(ctrl.state(), ButtonState::Success);
    }

    #[test]
    fn test_rate_limited_after_reset() {
        let mut ctrl = SubmissionController::with_timings(
            RecordingPort::default(),
            FormTimings {
                delivery_delay_ms: 100,
                success_display_ms: 100,
                cooldown_ms: 5_000,
                ..FormTimings::default()
            },
        );

        ctrl.submit("a@b.co", 0).unwrap();
        advance_to(&mut ctrl, 200);
        assert_eq!(ctrl.state(), ButtonState::Idle);

        let err = ctrl.submit("a@b.co", 1_000).unwrap_err();
        assert_eq!(err, SubmitError::RateLimited { retry_in_ms: 4_000 });
        assert_eq!(ctrl.state(), ButtonState::Idle);
        assert_eq!(
            ctrl.port().message,
            Some(FormMessage::Error(err.to_string()))
        );

        advance_to(&mut ctrl, 5_000);
        assert_eq!(ctrl.submit("a@b.co", 5_000), Ok(()));
    }

    #[test]
    fn test_success_tracks_event() {
        let mut ctrl = controller();
        ctrl.submit("alice@example.com", 0).unwrap();
        advance_to(&mut ctrl, 1_500);

        assert_eq!(ctrl.port().tracked.len(), 1);
        let (name, data) = &ctrl.port().tracked[0];
        assert_eq!(name, "lead_submitted");
        assert_eq!(data["form"], LEAD_FORM_ID);
        assert!(data.get("email").is_none());
        assert!(
            !data.to_string().contains("alice@example.com"),
            "the address never leaves the page: {data}"
        );
    }

    #[test]
    fn test_delivery_failure_enters_failed_then_idle() {
        let mut ctrl = controller();
        ctrl.port_mut().input = "a@b.co".to_string();
        ctrl.submit("a@b.co", 0).unwrap();

        ctrl.complete(Err(SubmitError::Delivery("timeout".into())));
        assert_eq!(ctrl.state(), ButtonState::Failed);
        assert!(ctrl.port().enabled);
        assert_eq!(ctrl.port().label, ButtonState::Failed.label());
        assert!(ctrl.port().message.as_ref().is_some_and(FormMessage::is_error));
        assert_eq!(ctrl.port().input, "a@b.co", "input is kept for retry");

        // The simulated delivery was cancelled with the real outcome.
        advance_to(&mut ctrl, 1_500);
        assert_eq!(ctrl.state(), ButtonState::Failed);

        advance_to(&mut ctrl, 3_000);
        assert_eq!(ctrl.state(), ButtonState::Idle);
        assert!(ctrl.port().message.is_none());
        assert_eq!(ctrl.port().input, "a@b.co");
    }

    #[test]
    fn test_retry_from_failed() {
        let mut ctrl = controller();
        ctrl.submit("a@b.co", 0).unwrap();

        advance_to(&mut ctrl, 200);
        ctrl.complete(Err(SubmitError::Delivery("offline".into())));
        assert_eq!(ctrl.port().label, ButtonState::Failed.label());

        // Well inside the 5 s cooldown of the failed attempt.
        advance_to(&mut ctrl, 300);
        assert_eq!(ctrl.submit("a@b.co", 300), Ok(()));
        assert_eq!(ctrl.state(), ButtonState::Submitting);

        // The failure expiry was cancelled by the retry.
        advance_to(&mut ctrl, 1_799);
        assert_eq!(ctrl.state(), ButtonState::Submitting);
        advance_to(&mut ctrl, 1_800);
        assert_eq!(ctrl.state(), ButtonState::Success);
    }

    #[test]
    fn test_complete_outside_submitting_is_ignored() {
        let mut ctrl = controller();
        ctrl.complete(Ok(()));
        assert_eq!(ctrl.state(), ButtonState::Idle);
        assert!(ctrl.port().tracked.is_empty());
    }

    #[test]
    fn test_reset_cancels_pending_transitions() {
        let mut ctrl = controller();
        ctrl.port_mut().input = "a@b.co".to_string();
        ctrl.submit("a@b.co", 0).unwrap();

        ctrl.reset();
        assert_eq!(ctrl.state(), ButtonState::Idle);
        assert!(!ctrl.has_pending_timers());
        assert!(ctrl.port().scheduled.is_empty());
        assert!(ctrl.port().input.is_empty());

        // Nothing latent mutates the form afterwards.
        advance_to(&mut ctrl, 10_000);
        assert_eq!(ctrl.state(), ButtonState::Idle);
        assert!(ctrl.port().message.is_none());
    }

    #[test]
    fn test_superseded_timers_are_cancelled_at_the_port() {
        let mut ctrl = controller();
        let _ = ctrl.submit("x", 0);
        ctrl.submit("a@b.co", 100).unwrap();
        ctrl.complete(Err(SubmitError::Delivery("offline".into())));
        ctrl.submit("a@b.co", 200).unwrap();

        // error expiry, first delivery, failure expiry
        assert_eq!(ctrl.port().cancelled.len(), 3);
        assert_eq!(ctrl.port().scheduled.len(), 1);
        assert!(ctrl.has_pending_timers());
    }

    #[test]
    fn test_stale_timer_is_ignored() {
        let mut ctrl = controller();
        ctrl.submit("a@b.co", 0).unwrap();
        let first = *ctrl.port().scheduled.keys().next().unwrap();

        ctrl.reset();
        ctrl.on_timer(first);
        assert_eq!(ctrl.state(), ButtonState::Idle);
        assert!(ctrl.port().tracked.is_empty());
    }

    #[test]
    fn test_verdict_into_error() {
        assert_eq!(
            SubmitError::from_verdict(EmailVerdict::Empty),
            Some(SubmitError::EmptyInput)
        );
        assert_eq!(
            SubmitError::from_verdict(EmailVerdict::Invalid),
            Some(SubmitError::InvalidFormat)
        );
        assert_eq!(SubmitError::from_verdict(EmailVerdict::Valid), None);
    }

    #[test]
    fn test_success_message_contains_email() {
        assert!(success_message("a@b.co").contains("(a@b.co)"));
    }
}
